//! Color-management engine seam
//!
//! [`CmsEngine`] is the boundary between the converter's lifecycle logic
//! and the engine doing the actual color math. Production code uses
//! [`Lcms2Engine`]; tests substitute an instrumented mock to check handle
//! accounting and teardown order.

use crate::profile::Profile;
use crate::transform::{ConvertOptions, Intent};
use crate::types::{Cmyk16, Rgb16};
use lcms2::{Flags, PixelFormat};
use std::path::Path;
use thiserror::Error;

/// A color engine able to open profiles, link them into a transform, and
/// apply that transform to pixel buffers.
///
/// Handle types own their underlying resources; dropping a `Profile` or
/// `Transform` value releases the handle exactly once.
pub trait CmsEngine {
    /// Opened profile handle.
    type Profile;
    /// Built transform handle.
    type Transform;
    /// Engine-level failure cause.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Opens and parses a profile file.
    fn open_profile(&self, path: &Path) -> Result<Self::Profile, Self::Error>;

    /// Links two opened profiles into an RGB16 -> CMYK16 transform.
    fn build_transform(
        &self,
        source: &Self::Profile,
        destination: &Self::Profile,
        options: &ConvertOptions,
    ) -> Result<Self::Transform, Self::Error>;

    /// Applies the transform to `input`, writing every output pixel.
    ///
    /// Callers must pass buffers of equal pixel count; the converter
    /// validates this before delegating. The transform is applied as a
    /// pure function of (transform, input pixel) and never mutates input.
    fn apply(&self, transform: &Self::Transform, input: &[Rgb16], output: &mut [Cmyk16]);
}

/// Failure reported by a concrete engine.
///
/// Split from [`crate::Error`] so the converter can attach the profile
/// role and path it knows and the engine does not.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The profile file could not be read.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Little CMS rejected the data or the transform request.
    #[error("{0}")]
    Cms(#[from] lcms2::Error),
}

/// The production engine, backed by Little CMS 2.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lcms2Engine;

/// The one transform shape this crate builds: 16-bit RGB in, 16-bit CMYK
/// out, default caching context.
pub type Lcms2Transform = lcms2::Transform<Rgb16, Cmyk16>;

impl From<Intent> for lcms2::Intent {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Perceptual => lcms2::Intent::Perceptual,
            Intent::RelativeColorimetric => lcms2::Intent::RelativeColorimetric,
            Intent::Saturation => lcms2::Intent::Saturation,
            Intent::AbsoluteColorimetric => lcms2::Intent::AbsoluteColorimetric,
        }
    }
}

fn lcms_flags(options: &ConvertOptions) -> Flags {
    // Flags does not implement |=; rebuild by value.
    let mut flags = Flags::default();
    if options.black_point_compensation {
        flags = flags | Flags::BLACKPOINT_COMPENSATION;
    }
    if options.high_res_precalc {
        flags = flags | Flags::HIGHRES_PRECALC;
    }
    flags
}

impl CmsEngine for Lcms2Engine {
    type Profile = Profile;
    type Transform = Lcms2Transform;
    type Error = EngineError;

    fn open_profile(&self, path: &Path) -> Result<Profile, EngineError> {
        Profile::open(path)
    }

    fn build_transform(
        &self,
        source: &Profile,
        destination: &Profile,
        options: &ConvertOptions,
    ) -> Result<Lcms2Transform, EngineError> {
        let transform = lcms2::Transform::new_flags(
            &source.inner,
            PixelFormat::RGB_16,
            &destination.inner,
            PixelFormat::CMYK_16,
            options.intent.into(),
            lcms_flags(options),
        )?;
        Ok(transform)
    }

    fn apply(&self, transform: &Lcms2Transform, input: &[Rgb16], output: &mut [Cmyk16]) {
        transform.transform_pixels(input, output);
    }
}
