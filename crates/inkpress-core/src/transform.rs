//! Transform parameters
//!
//! Engine-agnostic knobs for building the RGB16 -> CMYK16 transform.
//! The concrete engine translates these to its own types.

/// Rendering intent for the separation transform.
///
/// Governs how out-of-gamut colors are mapped into the destination gamut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intent {
    /// Perceptual - best for photographic images. The default, matching
    /// typical prepress separation.
    #[default]
    Perceptual,
    /// Relative colorimetric - preserves in-gamut colors, clips the rest.
    RelativeColorimetric,
    /// Saturation - keeps colors vivid, may shift hue.
    Saturation,
    /// Absolute colorimetric - preserves the source white point.
    AbsoluteColorimetric,
}

/// Options for transform creation.
///
/// The quality flags raise one-time setup cost, not per-pixel cost. The
/// default enables both, the setting the original separation workflow
/// shipped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Rendering intent.
    pub intent: Intent,
    /// Preserve shadow detail when source and destination black points
    /// differ.
    pub black_point_compensation: bool,
    /// Precalculate the transform at high resolution for better fidelity.
    pub high_res_precalc: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            intent: Intent::Perceptual,
            black_point_compensation: true,
            high_res_precalc: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_separation_workflow() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.intent, Intent::Perceptual);
        assert!(opts.black_point_compensation);
        assert!(opts.high_res_precalc);
    }
}
