//! labplane renders constant lightness slices of the CIELAB color space as
//! scatter charts and marks measured Lab samples on top of them.
//!
//! ```rust
//! use labplane::{chart::Figure, colorspace::{overlay, OverlayPoint}, models::Lab};
//!
//! let mut fig = Figure::default();
//! let axes = labplane::plot_2d_lab_colorspace(&mut fig, 16, 75.0);
//! overlay(axes, &[OverlayPoint::new(Lab::new(70.0, 25.0, 20.0), "Silver")], &[]);
//! assert_eq!(axes.series.len(), 17);
//! ```

#![deny(missing_docs)]

mod color;
mod math;

pub mod chart;
pub mod colorspace;
pub mod config;
pub mod convert;
pub mod error;
pub mod grid;
pub mod models;


pub use chart::{Axes, Figure};
pub use color::{Component, Components};
pub use colorspace::{plot_2d_lab_colorspace, plot_2d_lab_colorspace_with};
pub use config::Config;
pub use convert::{lab2rgb, unnormalize_rgb, Colorimetric, LabToRgb};
pub use error::{Error, Result};
