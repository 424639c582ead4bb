//! The Color Converter: one Lab triple in, one normalized RGB triple out.
//!
//! The chain is CIE-Lab -> CIE-XYZ (relative to the configured reference
//! white) -> Bradford adaptation to D65 when needed -> linear sRGB -> gamma
//! encoded sRGB, followed by the gamut clip.
//!
//! NOTE: Clipping only applies to the top of the range. Channels above 1.0
//!       become exactly 1.0, channels below zero are returned as they are, so
//!       callers that need displayable values must clamp them further.
//!
//! ```rust
//! use labplane::lab2rgb;
//! let [r, g, b] = lab2rgb([75.0, -85.0, -40.0]);
//! assert!(r < 0.0);
//! assert!(g <= 1.0);
//! assert_eq!(b, 1.0);
//! ```

use crate::{
    color::Component,
    config::ConversionConfig,
    error::Result,
    models::{Lab, ReferenceWhite, Srgb, SrgbLinear},
};

/// Anything that can turn a Lab triple into a normalized RGB triple.
///
/// The renderer only talks to this trait, so the colorimetry behind it can
/// be replaced without touching the chart code.
pub trait LabToRgb {
    /// Convert `[L*, a*, b*]` into `[r, g, b]`.
    fn lab_to_rgb(&self, lab: [Component; 3]) -> [Component; 3];
}

impl<F> LabToRgb for F
where
    F: Fn([Component; 3]) -> [Component; 3],
{
    fn lab_to_rgb(&self, lab: [Component; 3]) -> [Component; 3] {
        self(lab)
    }
}

/// Matrix based Lab to sRGB conversion with upper gamut clipping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Colorimetric {
    white: ReferenceWhite,
}

impl Colorimetric {
    /// Create a converter for Lab values specified against the configured
    /// illuminant and observer.
    pub fn new(config: &ConversionConfig) -> Self {
        Self {
            white: config.reference_white(),
        }
    }

    /// The reference white Lab values are interpreted against.
    pub fn reference_white(&self) -> ReferenceWhite {
        self.white
    }

    /// Convert a Lab color into sRGB without any clipping.
    pub fn to_srgb_unclipped(&self, lab: &Lab) -> Srgb {
        let xyz = lab.to_xyz(&self.white).adapt(self.white, ReferenceWhite::SRGB);
        SrgbLinear::from(xyz).to_gamma_encoded()
    }

    /// Convert a Lab color into sRGB and clip channels above 1.0.
    pub fn to_srgb(&self, lab: &Lab) -> Srgb {
        self.to_srgb_unclipped(lab).clip_upper()
    }
}

impl LabToRgb for Colorimetric {
    fn lab_to_rgb(&self, lab: [Component; 3]) -> [Component; 3] {
        self.to_srgb(&Lab::from(lab)).to_array()
    }
}

/// Convert `[L*, a*, b*]` (D65, 2° observer) to sRGB normalized to `[0, 1]`,
/// with channels above 1.0 clipped to exactly 1.0.
pub fn lab2rgb(lab: [Component; 3]) -> [Component; 3] {
    Colorimetric::default().lab_to_rgb(lab)
}

/// Like [`lab2rgb`], for input whose length is only known at runtime.
pub fn lab2rgb_slice(lab: &[Component]) -> Result<[Component; 3]> {
    let lab = Lab::try_from(lab)?;
    Ok(lab2rgb(lab.to_array()))
}

/// Scale a normalized RGB triple up to the 8-bit range.
pub fn unnormalize_rgb(rgb: [Component; 3]) -> [Component; 3] {
    Srgb::from(rgb).unnormalize()
}

/// True if every channel lies in `[0, 1]`.
pub fn is_in_srgb_gamut(rgb: [Component; 3]) -> bool {
    Srgb::from(rgb).in_gamut()
}

/// Hexadecimal form of a normalized RGB triple, clamped into range.
pub fn to_hex(rgb: [Component; 3]) -> String {
    Srgb::from(rgb).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, error::Error, models::Illuminant};

    #[test]
    fn output_never_exceeds_one() {
        for lightness in [0.0, 25.0, 50.0, 75.0, 100.0] {
            for a in [-128.0, -64.0, 0.0, 64.0, 127.0] {
                for b in [-128.0, -64.0, 0.0, 64.0, 127.0] {
                    let rgb = lab2rgb([lightness, a, b]);
                    assert!(
                        rgb.iter().all(|&c| c <= 1.0),
                        "({lightness}, {a}, {b}) -> {rgb:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn negative_channels_are_not_clipped() {
        let [r, _, _] = lab2rgb([75.0, -128.0, -128.0]);
        assert!(r < 0.0);
    }

    #[test]
    fn neutral_axis_is_gray() {
        for lightness in [0.0, 10.0, 25.0, 50.0, 75.0, 90.0, 100.0] {
            let [r, g, b] = lab2rgb([lightness, 0.0, 0.0]);
            assert_component_eq!(r, g, 1.0e-3);
            assert_component_eq!(g, b, 1.0e-3);
        }
    }

    #[test]
    fn regression_fixture_l50() {
        let [r, g, b] = lab2rgb([50.0, -85.0, -40.0]);
        assert_component_eq!(r, -4.320418, 1.0e-3);
        assert_component_eq!(g, 0.590524, 1.0e-4);
        assert_component_eq!(b, 0.728118, 1.0e-4);
    }

    #[test]
    fn regression_fixture_l75_clips_blue() {
        let [r, g, b] = lab2rgb([75.0, -85.0, -40.0]);
        assert_component_eq!(r, -7.047964, 1.0e-3);
        assert_component_eq!(g, 0.873037, 1.0e-4);
        assert_eq!(b, 1.0);

        let unclipped = Colorimetric::default().to_srgb_unclipped(&Lab::new(75.0, -85.0, -40.0));
        assert!(unclipped.blue > 1.0);
    }

    #[test]
    fn overlay_samples() {
        let [r, g, b] = lab2rgb([70.0, 25.0, 20.0]);
        assert_component_eq!(r, 0.884472, 1.0e-4);
        assert_component_eq!(g, 0.601068, 1.0e-4);
        assert_component_eq!(b, 0.533862, 1.0e-4);
        assert!(is_in_srgb_gamut([r, g, b]));

        let rgb = lab2rgb([50.0, 60.0, 100.0]);
        assert!(!is_in_srgb_gamut(rgb));
        assert_component_eq!(rgb[2], -0.393680, 1.0e-4);
    }

    #[test]
    fn other_illuminants_keep_neutral_axis_gray() {
        let converter = Colorimetric::new(&ConversionConfig {
            illuminant: Illuminant::D50,
            ..Default::default()
        });
        let [r, g, b] = converter.lab_to_rgb([50.0, 0.0, 0.0]);
        assert_component_eq!(r, 0.466361, 1.0e-4);
        assert_component_eq!(g, 0.466322, 1.0e-4);
        assert_component_eq!(b, 0.466274, 1.0e-4);
    }

    #[test]
    fn slice_input_checks_shape() {
        assert_eq!(
            lab2rgb_slice(&[75.0, 0.0, 0.0]).unwrap(),
            lab2rgb([75.0, 0.0, 0.0])
        );
        assert!(matches!(
            lab2rgb_slice(&[75.0, 0.0, 0.0, 1.0]),
            Err(Error::InvalidShape { actual: 4, .. })
        ));
    }

    #[test]
    fn closures_are_converters() {
        let gray = |lab: [Component; 3]| [lab[0] / 100.0; 3];
        assert_eq!(gray.lab_to_rgb([50.0, 10.0, 10.0]), [0.5; 3]);
    }

    #[test]
    fn unnormalize_and_hex() {
        assert_eq!(unnormalize_rgb([1.0, 0.0, 0.5]), [255.0, 0.0, 127.5]);
        assert_eq!(to_hex([1.0, 1.0, 1.0]), "#FFFFFF");
    }
}
