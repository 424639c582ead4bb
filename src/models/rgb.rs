//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components},
    math::{clip_upper, transform, transform_3x3, Transform},
    models::xyz::Xyz,
};

pub mod encoding {
    //! Tags marking whether RGB components are gamma encoded.

    /// This trait is used to identity tags that specify gamma encoding.
    pub trait Encoding {}

    /// Components are gamma encoded (display ready).
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

labplane_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

impl From<Xyz> for SrgbLinear {
    /// The XYZ value must already be relative to the D65 white point.
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        transform(&FROM_XYZ, value.to_components()).into()
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded. Values at or
    /// below the cutoff, negative ones included, stay on the linear segment.
    pub fn to_gamma_encoded(&self) -> Srgb {
        self.to_components()
            .map(|value| {
                if value <= 0.0031308 {
                    value * 12.92
                } else {
                    1.055 * value.powf(1.0 / 2.4) - 0.055
                }
            })
            .into()
    }
}

impl Srgb {
    /// Replace every component above 1.0 with exactly 1.0. Components below
    /// zero are left as they are.
    pub fn clip_upper(&self) -> Srgb {
        self.to_components().map(|v| clip_upper(v, 1.0)).into()
    }

    /// True when every component lies in `[0, 1]`.
    pub fn in_gamut(&self) -> bool {
        self.to_components().all(|v| (0.0..=1.0).contains(&v))
    }

    /// Scale normalized components up to the `[0, 255]` range. No rounding
    /// or clamping is applied.
    pub fn unnormalize(&self) -> [Component; 3] {
        self.to_components().map(|v| v * 255.0).into()
    }

    /// Quantize to 8 bits, clamping each component into `[0, 1]` first.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let Components(r, g, b) = self
            .to_components()
            .map(|v| (v.clamp(0.0, 1.0) * 255.0).round());
        [r as u8, g as u8, b as u8]
    }

    /// Hexadecimal representation, e.g. `#FF0000`.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn d65_white_maps_to_unit_rgb() {
        let linear = SrgbLinear::from(Xyz::new(0.9504559270516716, 1.0, 1.0890577507598784));
        assert_component_eq!(linear.red, 1.0, 1.0e-5);
        assert_component_eq!(linear.green, 1.0, 1.0e-5);
        assert_component_eq!(linear.blue, 1.0, 1.0e-5);
    }

    #[test]
    fn gamma_encoding_segments() {
        let encoded = SrgbLinear::new(0.002, 0.5, -0.2).to_gamma_encoded();
        assert_component_eq!(encoded.red, 0.002 * 12.92);
        assert_component_eq!(encoded.green, 0.735357, 1.0e-5);
        // Negative values are kept on the linear segment.
        assert_component_eq!(encoded.blue, -0.2 * 12.92, 1.0e-5);
    }

    #[test]
    fn clipping_is_upper_only() {
        let clipped = Srgb::new(1.5, -0.25, 0.5).clip_upper();
        assert_eq!(clipped.red, 1.0);
        assert_eq!(clipped.green, -0.25);
        assert_eq!(clipped.blue, 0.5);
        assert!(!clipped.in_gamut());
        assert!(Srgb::new(0.0, 1.0, 0.5).in_gamut());
    }

    #[test]
    fn unnormalize_scales_by_255() {
        let [r, g, b] = Srgb::new(1.0, 0.5, -0.1).unnormalize();
        assert_component_eq!(r, 255.0);
        assert_component_eq!(g, 127.5);
        assert_component_eq!(b, -25.5, 1.0e-4);
    }

    #[test]
    fn rgb8_and_hex_clamp() {
        assert_eq!(Srgb::new(1.0, 0.0, 0.0).to_hex(), "#FF0000");
        assert_eq!(Srgb::new(-3.0, 2.0, 0.2).to_rgb8(), [0, 255, 51]);
    }
}
