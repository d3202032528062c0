//! ICC profile handling
//!
//! `Profile` wraps an opened `lcms2::Profile` handle; `ProfileStore` owns
//! the source/destination pair a transform is built from.

use crate::engine::CmsEngine;
use crate::{Error, Result};
use lcms2::ColorSpaceSignature;
use std::fmt;
use std::path::Path;

/// Which of the converter's two profiles is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRole {
    /// The RGB input profile.
    Source,
    /// The CMYK output profile.
    Destination,
}

impl fmt::Display for ProfileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileRole::Source => f.write_str("source"),
            ProfileRole::Destination => f.write_str("destination"),
        }
    }
}

/// An opened ICC profile.
///
/// Owns the underlying engine handle exclusively; there is no `Clone`.
/// The handle is released when the profile is dropped.
pub struct Profile {
    pub(crate) inner: lcms2::Profile,
}

impl Profile {
    /// Parses a profile from raw ICC data.
    pub fn from_bytes(data: &[u8]) -> std::result::Result<Self, lcms2::Error> {
        let inner = lcms2::Profile::new_icc(data)?;
        Ok(Self { inner })
    }

    /// Opens a profile file and parses it.
    ///
    /// Reading and parsing are separate steps so a missing file and an
    /// invalid profile container report different causes.
    pub fn open(path: &Path) -> std::result::Result<Self, crate::engine::EngineError> {
        let data = std::fs::read(path)?;
        Ok(Self::from_bytes(&data)?)
    }

    /// True if the profile describes an RGB device space.
    pub fn is_rgb(&self) -> bool {
        matches!(self.inner.color_space(), ColorSpaceSignature::RgbData)
    }

    /// True if the profile describes a CMYK device space.
    pub fn is_cmyk(&self) -> bool {
        matches!(self.inner.color_space(), ColorSpaceSignature::CmykData)
    }

    /// Profile description text, empty if the tag is absent.
    pub fn description(&self) -> String {
        self.inner
            .info(lcms2::InfoType::Description, lcms2::Locale::none())
            .unwrap_or_default()
    }

    /// Serializes the profile back to ICC bytes.
    ///
    /// The image demo embeds the destination profile in its TIFF output
    /// with this.
    pub fn to_bytes(&self) -> std::result::Result<Vec<u8>, lcms2::Error> {
        self.inner.icc()
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("description", &self.description())
            .field("color_space", &self.inner.color_space())
            .finish()
    }
}

/// The source/destination profile pair a transform is built from.
///
/// Field order is load-bearing: the destination is declared before the
/// source so drops run destination-then-source, matching the required
/// teardown order once the owning transform is gone.
#[derive(Debug)]
pub struct ProfileStore<P> {
    destination: P,
    source: P,
}

impl<P> ProfileStore<P> {
    /// Opens both profiles, source first.
    ///
    /// A destination failure releases the already-open source profile
    /// before returning. Errors carry the failing [`ProfileRole`].
    pub fn open<E>(engine: &E, source_path: &Path, destination_path: &Path) -> Result<Self>
    where
        E: CmsEngine<Profile = P>,
    {
        let source = engine.open_profile(source_path).map_err(|e| Error::ProfileLoad {
            which: ProfileRole::Source,
            path: source_path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let destination = engine
            .open_profile(destination_path)
            .map_err(|e| Error::ProfileLoad {
                which: ProfileRole::Destination,
                path: destination_path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Self { destination, source })
    }

    /// The RGB input profile.
    pub fn source(&self) -> &P {
        &self.source
    }

    /// The CMYK output profile.
    pub fn destination(&self) -> &P {
        &self.destination
    }
}
