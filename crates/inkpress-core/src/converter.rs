//! Separation converter lifecycle
//!
//! [`SeparationConverter`] ties profile loading, transform creation, and
//! pixel conversion together and guarantees ordered teardown on every
//! exit path: transform first, then destination profile, then source
//! profile.

use crate::engine::{CmsEngine, Lcms2Engine};
use crate::profile::ProfileStore;
use crate::transform::ConvertOptions;
use crate::types::{Cmyk16, Rgb16};
use crate::{Error, Result};
use std::path::Path;

/// Everything a ready converter owns.
///
/// Field order is load-bearing: the transform is declared before the
/// profile store so it drops first, reversing acquisition order.
struct Ready<E: CmsEngine> {
    transform: E::Transform,
    profiles: ProfileStore<E::Profile>,
}

/// An RGB16 -> CMYK16 separation converter.
///
/// Starts uninitialized. [`initialize`](Self::initialize) loads both
/// profiles and builds the transform; only then does
/// [`convert`](Self::convert) succeed. Re-initializing releases the prior
/// transform and profiles before acquiring new ones, so a converter can be
/// pointed at a different profile pair without leaking handles.
///
/// Initialization takes `&mut self` and conversion takes `&self`, so the
/// borrow checker enforces the rule that (re)initialization never overlaps
/// an in-flight conversion.
///
/// # Example
///
/// ```no_run
/// use inkpress_core::{Rgb16, Cmyk16, SeparationConverter};
/// use std::path::Path;
///
/// let mut converter = SeparationConverter::new();
/// converter.initialize(Path::new("sRGB.icc"), Path::new("fogra39.icc"))?;
///
/// let input = [Rgb16::new(0, 0, 0), Rgb16::new(65535, 0, 0)];
/// let mut output = [Cmyk16::default(); 2];
/// converter.convert(&input, &mut output)?;
/// # Ok::<(), inkpress_core::Error>(())
/// ```
pub struct SeparationConverter<E: CmsEngine = Lcms2Engine> {
    engine: E,
    options: ConvertOptions,
    ready: Option<Ready<E>>,
}

impl SeparationConverter<Lcms2Engine> {
    /// Creates an uninitialized converter on the Little CMS engine with
    /// default options (perceptual intent, black-point compensation,
    /// high-resolution precalculation).
    pub fn new() -> Self {
        Self::with_engine(Lcms2Engine, ConvertOptions::default())
    }

    /// Creates an uninitialized converter with explicit options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self::with_engine(Lcms2Engine, options)
    }
}

impl Default for SeparationConverter<Lcms2Engine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CmsEngine> SeparationConverter<E> {
    /// Creates an uninitialized converter on a specific engine.
    pub fn with_engine(engine: E, options: ConvertOptions) -> Self {
        Self {
            engine,
            options,
            ready: None,
        }
    }

    /// Loads both profiles and builds the transform.
    ///
    /// Any prior transform and profiles are released first. On failure the
    /// converter is left uninitialized and every partially-acquired handle
    /// has been released: a destination-profile failure drops the open
    /// source profile, and a transform failure drops both profiles.
    pub fn initialize(&mut self, source_path: &Path, destination_path: &Path) -> Result<()> {
        self.ready = None;

        let profiles = ProfileStore::open(&self.engine, source_path, destination_path)?;
        let transform = self
            .engine
            .build_transform(profiles.source(), profiles.destination(), &self.options)
            .map_err(|e| Error::TransformCreate(e.to_string()))?;

        self.ready = Some(Ready { transform, profiles });
        Ok(())
    }

    /// True once `initialize` has succeeded and `convert` may be called.
    pub fn is_ready(&self) -> bool {
        self.ready.is_some()
    }

    /// Releases the transform and both profiles, returning to the
    /// uninitialized state.
    pub fn reset(&mut self) {
        self.ready = None;
    }

    /// Options the transform is (or will be) built with.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// The loaded source profile, if initialized.
    pub fn source_profile(&self) -> Option<&E::Profile> {
        self.ready.as_ref().map(|r| r.profiles.source())
    }

    /// The loaded destination profile, if initialized.
    pub fn destination_profile(&self) -> Option<&E::Profile> {
        self.ready.as_ref().map(|r| r.profiles.destination())
    }

    /// Converts `input` into `output`, one CMYK pixel per RGB pixel.
    ///
    /// Fails with [`Error::NotInitialized`] before a successful
    /// `initialize` and with [`Error::PixelCount`] when the buffers
    /// disagree on length. Validation happens before any engine work, so a
    /// failed call writes nothing. A successful call writes every output
    /// pixel. Zero-length buffers succeed and write nothing.
    pub fn convert(&self, input: &[Rgb16], output: &mut [Cmyk16]) -> Result<()> {
        let ready = self.ready.as_ref().ok_or(Error::NotInitialized)?;
        if input.len() != output.len() {
            return Err(Error::PixelCount {
                input: input.len(),
                output: output.len(),
            });
        }
        self.engine.apply(&ready.transform, input, output);
        Ok(())
    }

    /// Converts flat sample buffers: 3 `u16` samples per input pixel, 4
    /// per output pixel.
    ///
    /// Fails with [`Error::SampleCount`] when either buffer is not a whole
    /// number of pixels, then behaves like [`convert`](Self::convert).
    pub fn convert_slices(&self, input: &[u16], output: &mut [u16]) -> Result<()> {
        if input.len() % 3 != 0 {
            return Err(Error::SampleCount {
                len: input.len(),
                channels: 3,
            });
        }
        if output.len() % 4 != 0 {
            return Err(Error::SampleCount {
                len: output.len(),
                channels: 4,
            });
        }
        let input: &[Rgb16] = bytemuck::cast_slice(input);
        let output: &mut [Cmyk16] = bytemuck::cast_slice_mut(output);
        self.convert(input, output)
    }
}
