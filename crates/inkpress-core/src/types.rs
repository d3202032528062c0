//! Pixel records for the fixed RGB16 -> CMYK16 separation path.
//!
//! Both types are `#[repr(C)]` and `Pod` so flat `u16` sample buffers can be
//! reinterpreted without copying. Their layouts match the engine's
//! `RGB_16` (6 bytes) and `CMYK_16` (8 bytes) pixel formats.

use bytemuck::{Pod, Zeroable};

/// Maximum value of a 16-bit channel.
pub const CHANNEL_MAX: u16 = 65535;

/// One 16-bit RGB pixel, three contiguous channels.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgb16 {
    /// Red, 0..=65535
    pub r: u16,
    /// Green, 0..=65535
    pub g: u16,
    /// Blue, 0..=65535
    pub b: u16,
}

impl Rgb16 {
    /// Creates a pixel from raw 16-bit channel values.
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Widens an 8-bit RGB triple to full 16-bit range.
    ///
    /// Uses the `v * 257` expansion so 0 maps to 0 and 255 maps to 65535.
    pub const fn from_8bit(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as u16 * 257,
            g: g as u16 * 257,
            b: b as u16 * 257,
        }
    }
}

/// One 16-bit CMYK pixel, four contiguous channels.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Cmyk16 {
    /// Cyan, 0..=65535
    pub c: u16,
    /// Magenta, 0..=65535
    pub m: u16,
    /// Yellow, 0..=65535
    pub y: u16,
    /// Key (black), 0..=65535
    pub k: u16,
}

impl Cmyk16 {
    /// Creates a pixel from raw 16-bit channel values.
    pub const fn new(c: u16, m: u16, y: u16, k: u16) -> Self {
        Self { c, m, y, k }
    }

    /// Ink coverage per channel as percentages in 0.0..=100.0.
    pub fn percentages(&self) -> [f64; 4] {
        let pct = |v: u16| v as f64 * 100.0 / CHANNEL_MAX as f64;
        [pct(self.c), pct(self.m), pct(self.y), pct(self.k)]
    }
}
