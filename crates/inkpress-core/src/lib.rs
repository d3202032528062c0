//! # inkpress - RGB to CMYK separation on Little CMS 2
//!
//! A small, strongly-typed wrapper around the Little CMS 2 engine for one
//! prepress job: open an RGB source profile and a CMYK destination
//! profile, link them into a 16-bit separation transform, and apply it to
//! pixel buffers.
//!
//! ## What this crate does and does not do
//!
//! Profile parsing, rendering-intent math, black-point compensation, and
//! the per-pixel conversion itself are delegated to `lcms2`. This crate
//! owns the contract around the engine: the error taxonomy, the fixed
//! RGB16 -> CMYK16 pixel model, and the handle lifecycle (a transform is
//! always released before the profiles it was built from).
//!
//! ## Quick Start
//!
//! ```no_run
//! use inkpress_core::{Rgb16, Cmyk16, SeparationConverter};
//! use std::path::Path;
//!
//! let mut converter = SeparationConverter::new();
//! converter.initialize(Path::new("sRGB.icc"), Path::new("coated_fogra39.icc"))?;
//!
//! let input = vec![Rgb16::from_8bit(255, 0, 0); 1024];
//! let mut output = vec![Cmyk16::default(); 1024];
//! converter.convert(&input, &mut output)?;
//! # Ok::<(), inkpress_core::Error>(())
//! ```
//!
//! ## Thread safety
//!
//! `convert` takes `&self` and the engine applies the transform
//! statelessly per call, but the default Little CMS transform keeps a
//! one-entry cache and is therefore `Send` and not `Sync`. Initialization
//! takes `&mut self`, so the borrow checker already rules out
//! re-initializing while a conversion is in flight.

pub mod converter;
pub mod engine;
pub mod error;
pub mod profile;
pub mod transform;
pub mod types;

pub use converter::SeparationConverter;
pub use engine::{CmsEngine, EngineError, Lcms2Engine};
pub use error::{Error, Result};
pub use profile::{Profile, ProfileRole, ProfileStore};
pub use transform::{ConvertOptions, Intent};
pub use types::{Cmyk16, Rgb16, CHANNEL_MAX};

/// Version of inkpress
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
