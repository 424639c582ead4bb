//! The scalar and triple types shared by every color model.

use serde::{Deserialize, Serialize};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Return new components combining each component with the matching
    /// component of `other`.
    pub fn zip_map(&self, other: &Self, f: impl Fn(Component, Component) -> Component) -> Self {
        Self(f(self.0, other.0), f(self.1, other.1), f(self.2, other.2))
    }

    /// Return true if `f` holds for all three components.
    pub fn all(&self, f: impl Fn(Component) -> bool) -> bool {
        f(self.0) && f(self.1) && f(self.2)
    }
}

impl From<[Component; 3]> for Components {
    fn from(value: [Component; 3]) -> Self {
        Self(value[0], value[1], value[2])
    }
}

impl From<Components> for [Component; 3] {
    fn from(value: Components) -> Self {
        [value.0, value.1, value.2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_every_component() {
        let c = Components(0.1, 0.2, 0.3).map(|v| v * 10.0);
        crate::assert_component_eq!(c.0, 1.0);
        crate::assert_component_eq!(c.1, 2.0);
        crate::assert_component_eq!(c.2, 3.0);
    }

    #[test]
    fn zip_map_pairs_components() {
        let m = Components(1.0, 5.0, 3.0).zip_map(&Components(2.0, 4.0, 3.0), Component::max);
        assert_eq!(m, Components(2.0, 5.0, 3.0));
    }

    #[test]
    fn array_round_trip() {
        let c = Components::from([0.25, 0.5, 0.75]);
        assert_eq!(<[Component; 3]>::from(c), [0.25, 0.5, 0.75]);
        assert!(c.all(|v| v > 0.0));
        assert!(!c.all(|v| v > 0.3));
    }
}
