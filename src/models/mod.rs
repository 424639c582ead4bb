//! Each color space is modeled with its own type. Conversions are only
//! implemented where the Lab to sRGB chain needs them.
//!
//! ```rust
//! use labplane::models::{Lab, ReferenceWhite, SrgbLinear};
//! let white = ReferenceWhite::default();
//! let srgb = SrgbLinear::from(            // convert to srgb-linear.
//!     Lab::new(75.0, -85.0, -40.0)
//!         .to_xyz(&white),                // convert to xyz-d65.
//! )
//! .to_gamma_encoded()                     // convert to srgb.
//! .clip_upper();                          // clip channels above 1.0.
//! assert!(srgb.blue <= 1.0);
//! ```

pub mod lab;
pub mod rgb;
pub mod xyz;

pub use lab::Lab;
pub use rgb::{Rgb, Srgb, SrgbLinear};
pub use xyz::{Illuminant, Observer, ReferenceWhite, Xyz};
