//! Error types for inkpress

use crate::profile::ProfileRole;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for inkpress operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in inkpress operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A profile file could not be opened or parsed.
    ///
    /// `which` identifies the failing stage so callers can tell a broken
    /// source profile from a broken destination profile.
    #[error("failed to load {which} profile {}: {reason}", path.display())]
    ProfileLoad {
        /// Which of the two profiles failed to load
        which: ProfileRole,
        /// Path that was being opened
        path: PathBuf,
        /// Engine-reported cause
        reason: String,
    },

    /// The engine rejected the profile/format/intent combination.
    #[error("failed to create transform: {0}")]
    TransformCreate(String),

    /// `convert` was called before a successful `initialize`.
    #[error("converter is not initialized")]
    NotInitialized,

    /// Input and output buffers disagree on pixel count.
    #[error("pixel count mismatch: input has {input} pixels, output has {output}")]
    PixelCount {
        /// Pixels in the input buffer
        input: usize,
        /// Pixels the output buffer can hold
        output: usize,
    },

    /// A flat sample buffer is not a whole number of pixels.
    #[error("buffer of {len} samples is not a whole number of {channels}-channel pixels")]
    SampleCount {
        /// Samples in the buffer
        len: usize,
        /// Channels per pixel expected
        channels: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_load_names_stage() {
        let err = Error::ProfileLoad {
            which: ProfileRole::Destination,
            path: PathBuf::from("/tmp/missing.icc"),
            reason: "no such file".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("destination"));
        assert!(msg.contains("missing.icc"));
    }

    #[test]
    fn test_not_initialized_display() {
        assert_eq!(Error::NotInitialized.to_string(), "converter is not initialized");
    }
}
