//! Model for a color in the CIE-Lab color space.

use crate::{
    color::{Component, Components},
    models::xyz::{ReferenceWhite, Xyz},
    Error, Result,
};

labplane_macros::gen_model! {
    /// The model for a color specified in the CIE-Lab color space with the
    /// rectangular orthogonal form.
    pub struct Lab {
        /// The lightness component, nominally in `[0, 100]`.
        pub lightness: Component,
        /// The green (negative) to red (positive) component.
        pub a: Component,
        /// The blue (negative) to yellow (positive) component.
        pub b: Component,
    }
}

impl Lab {
    /// Convert this color to CIE-XYZ relative to `white`.
    pub fn to_xyz(&self, white: &ReferenceWhite) -> Xyz {
        const EPSILON: Component = 216.0 / 24389.0;

        let fy = (self.lightness + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        let Components(x, y, z) = Components(fx, fy, fz).map(|f| {
            let cubed = f * f * f;
            if cubed > EPSILON {
                cubed
            } else {
                (f - 16.0 / 116.0) / 7.787
            }
        });

        let Components(wx, wy, wz) = white.white_point();
        Xyz::new(x * wx, y * wy, z * wz)
    }
}

impl TryFrom<&[Component]> for Lab {
    type Error = Error;

    fn try_from(value: &[Component]) -> Result<Self> {
        match *value {
            [lightness, a, b] => Ok(Lab::new(lightness, a, b)),
            _ => Err(Error::InvalidShape {
                expected: 3,
                actual: value.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn white_lab_is_reference_white() {
        let white = ReferenceWhite::default();
        let xyz = Lab::new(100.0, 0.0, 0.0).to_xyz(&white);
        let Components(x, y, z) = white.white_point();

        assert_component_eq!(xyz.x, x, 1.0e-5);
        assert_component_eq!(xyz.y, y, 1.0e-5);
        assert_component_eq!(xyz.z, z, 1.0e-5);
    }

    #[test]
    fn black_lab_is_zero() {
        let xyz = Lab::new(0.0, 0.0, 0.0).to_xyz(&ReferenceWhite::default());
        assert_component_eq!(xyz.x, 0.0);
        assert_component_eq!(xyz.y, 0.0);
        assert_component_eq!(xyz.z, 0.0);
    }

    #[test]
    fn dark_colors_use_linear_segment() {
        // (5 + 16) / 116 cubed is below the cutoff.
        let xyz = Lab::new(5.0, 0.0, 0.0).to_xyz(&ReferenceWhite::default());
        let expected: Component = ((5.0 + 16.0) / 116.0 - 16.0 / 116.0) / 7.787;
        assert_component_eq!(xyz.y, expected);
    }

    #[test]
    fn try_from_slice_checks_shape() {
        let lab = Lab::try_from(&[50.0, -85.0, -40.0][..]).unwrap();
        assert_eq!(lab, Lab::new(50.0, -85.0, -40.0));

        match Lab::try_from(&[50.0, -85.0][..]) {
            Err(Error::InvalidShape { expected, actual }) => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected InvalidShape, got {other:?}"),
        }
    }
}
