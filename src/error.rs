//! Errors reported by configuration checks and shape validation.

use thiserror::Error as ThisError;

use crate::color::Component;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported while building a chart. Color conversion itself never
/// fails; only input shapes and configuration are checked.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A color was given with the wrong number of components.
    #[error("Invalid color shape: expected {expected} components, got {actual}")]
    InvalidShape {
        /// Number of components required.
        expected: usize,
        /// Number of components supplied.
        actual: usize,
    },

    /// Tick spacing must be a positive, finite number.
    #[error("Invalid tick step: must be positive, got {0}")]
    InvalidTickStep(Component),

    /// Tick bounds are reversed or not finite.
    #[error("Invalid tick range: min {min} must be below max {max}")]
    InvalidTickRange {
        /// Lower tick bound.
        min: Component,
        /// Upper tick bound.
        max: Component,
    },

    /// Data bounds are reversed or not finite.
    #[error("Invalid data range: min {min} must be below max {max}")]
    InvalidDataRange {
        /// Lower data bound.
        min: Component,
        /// Upper data bound.
        max: Component,
    },

    /// Marker size must be positive.
    #[error("Invalid marker size: must be positive, got {0}")]
    InvalidMarkerSize(Component),

    /// A marker code that is not one of the supported shapes.
    #[error("Unknown marker shape: '{0}'")]
    InvalidMarker(String),
}
