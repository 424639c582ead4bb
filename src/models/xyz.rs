//! Model a color in the CIE-XYZ color space and the reference whites it is
//! measured against.

use serde::{Deserialize, Serialize};

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
};

/// CIE standard illuminants that a Lab color can be specified under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Illuminant {
    /// Incandescent / tungsten.
    A,
    /// Average daylight, superseded by the D series.
    C,
    /// Horizon light, used by print and ICC profiles.
    D50,
    /// Mid-morning daylight.
    D55,
    /// Noon daylight, the native white of sRGB.
    #[default]
    D65,
    /// North sky daylight.
    D75,
    /// Equal energy.
    E,
}

/// CIE standard observers (the field of view of the color matching
/// functions).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Observer {
    /// CIE 1931 2° observer.
    #[default]
    #[serde(rename = "2")]
    Two,
    /// CIE 1964 10° observer.
    #[serde(rename = "10")]
    Ten,
}

/// The pair of parameters that pins down a reference white.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceWhite {
    /// The illuminant.
    pub illuminant: Illuminant,
    /// The standard observer.
    pub observer: Observer,
}

impl ReferenceWhite {
    /// The reference white sRGB is defined against.
    pub const SRGB: Self = Self {
        illuminant: Illuminant::D65,
        observer: Observer::Two,
    };

    /// Create a new reference white.
    pub fn new(illuminant: Illuminant, observer: Observer) -> Self {
        Self {
            illuminant,
            observer,
        }
    }

    /// The XYZ coordinates of this white, normalized so that Y is 1.
    pub fn white_point(&self) -> Components {
        use Illuminant as I;
        use Observer as O;

        #[allow(clippy::excessive_precision)]
        let (x, z) = match (self.observer, self.illuminant) {
            (O::Two, I::A) => (1.09850, 0.35585),
            (O::Two, I::C) => (0.98074, 1.18232),
            (O::Two, I::D50) => (0.96422, 0.82521),
            (O::Two, I::D55) => (0.95682, 0.92149),
            (O::Two, I::D65) => (0.95047, 1.08883),
            (O::Two, I::D75) => (0.94972, 1.22638),
            (O::Two, I::E) => (1.0, 1.0),
            (O::Ten, I::A) => (1.11144, 0.35200),
            (O::Ten, I::C) => (0.97285, 1.16145),
            (O::Ten, I::D50) => (0.96720, 0.81427),
            (O::Ten, I::D55) => (0.95799, 0.90926),
            (O::Ten, I::D65) => (0.94811, 1.07304),
            (O::Ten, I::D75) => (0.94416, 1.20641),
            (O::Ten, I::E) => (1.0, 1.0),
        };

        Components(x, 1.0, z)
    }
}

labplane_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space, relative to the
    /// reference white it was computed against.
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y (luminance) component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl Xyz {
    /// Move this color from the `from` reference white to the `to` reference
    /// white with the Bradford chromatic adaptation transform. Only the
    /// illuminant is compared; both whites are looked up for the observer of
    /// `from`.
    pub fn adapt(&self, from: ReferenceWhite, to: ReferenceWhite) -> Xyz {
        if from.illuminant == to.illuminant {
            return *self;
        }

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const BRADFORD: Transform = transform_3x3(
             0.8951, -0.7502,  0.0389,
             0.2664,  1.7135, -0.0685,
            -0.1614,  0.0367,  1.0296,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const BRADFORD_INVERSE: Transform = transform_3x3(
             0.9869929,  0.4323053, -0.0085287,
            -0.1470543,  0.5183603,  0.0400428,
             0.1599627,  0.0492912,  0.9684867,
        );

        let to = ReferenceWhite::new(to.illuminant, from.observer);
        let source = transform(&BRADFORD, from.white_point());
        let destination = transform(&BRADFORD, to.white_point());

        let gain = destination.zip_map(&source, |d, s| d / s);
        let scaled = transform(&BRADFORD, self.to_components()).zip_map(&gain, |c, g| c * g);

        transform(&BRADFORD_INVERSE, scaled).into()
    }
}
