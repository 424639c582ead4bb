//! Configuration for color conversion and chart decoration.
//!
//! Everything that would otherwise be a literal in the conversion or the
//! axis formatting lives here, so an alternate illuminant, observer or tick
//! layout can be swapped in without touching the rendering code.

use serde::{Deserialize, Serialize};

use crate::{
    color::Component,
    error::{Error, Result},
    models::{Illuminant, Observer, ReferenceWhite},
};

/// Complete configuration for rendering a colorspace slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How Lab samples are turned into sRGB.
    pub conversion: ConversionConfig,
    /// Axis extents, ticks and marker size.
    pub axes: AxisConfig,
}

/// Parameters of the Lab to sRGB conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Illuminant the Lab values are relative to.
    pub illuminant: Illuminant,
    /// Standard observer the Lab values are relative to.
    pub observer: Observer,
}

impl ConversionConfig {
    /// The reference white described by this configuration.
    pub fn reference_white(&self) -> ReferenceWhite {
        ReferenceWhite::new(self.illuminant, self.observer)
    }
}

/// Upper bound on the number of ticks a layout may produce per axis.
pub const MAX_TICKS: usize = 1000;

/// Axis layout of the colorspace chart.
///
/// Annotation anchors are `(x, y)` pairs in data coordinates; axis label
/// positions are fractions of the axes box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Lowest a*/b* value sampled and the lower spine bound.
    pub data_min: Component,
    /// Highest a*/b* value sampled and the upper spine bound.
    pub data_max: Component,
    /// First tick position.
    pub tick_min: Component,
    /// Last tick position (inclusive).
    pub tick_max: Component,
    /// Spacing between ticks.
    pub tick_step: Component,
    /// Font size of tick labels, in points.
    pub tick_label_size: Component,
    /// Area of each colorspace sample marker, in points squared.
    pub marker_size: Component,
    /// Position of the horizontal axis label, in axes fractions.
    pub x_label_coords: (Component, Component),
    /// Position of the vertical axis label, in axes fractions.
    pub y_label_coords: (Component, Component),
    /// Anchor of the "+b*" annotation.
    pub positive_b_anchor: (Component, Component),
    /// Anchor of the "+a*" annotation.
    pub positive_a_anchor: (Component, Component),
    /// Anchor of the lightness annotation.
    pub lightness_anchor: (Component, Component),
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            data_min: -128.0,
            data_max: 127.0,
            tick_min: -120.0,
            tick_max: 120.0,
            tick_step: 20.0,
            tick_label_size: 8.0,
            marker_size: 20.0,
            x_label_coords: (0.5, 0.0),
            y_label_coords: (-0.01, 0.45),
            positive_b_anchor: (-12.0, 140.0),
            positive_a_anchor: (132.0, -12.0),
            lightness_anchor: (145.0, 70.0),
        }
    }
}

impl AxisConfig {
    /// Check that the bounds are ordered and the spacing is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.data_min.is_finite() && self.data_max.is_finite())
            || self.data_min >= self.data_max
        {
            return Err(Error::InvalidDataRange {
                min: self.data_min,
                max: self.data_max,
            });
        }

        if !(self.tick_min.is_finite() && self.tick_max.is_finite())
            || self.tick_min > self.tick_max
        {
            return Err(Error::InvalidTickRange {
                min: self.tick_min,
                max: self.tick_max,
            });
        }

        if !self.tick_step.is_finite()
            || self.tick_step <= 0.0
            || (self.tick_max - self.tick_min) / self.tick_step > MAX_TICKS as Component
        {
            return Err(Error::InvalidTickStep(self.tick_step));
        }

        if !self.marker_size.is_finite() || self.marker_size <= 0.0 {
            return Err(Error::InvalidMarkerSize(self.marker_size));
        }

        Ok(())
    }
}

impl Config {
    /// Check every section of the configuration.
    pub fn validate(&self) -> Result<()> {
        self.axes.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.conversion.reference_white(), ReferenceWhite::SRGB);
        assert_eq!(config.axes.tick_step, 20.0);
    }

    #[test]
    fn zero_tick_step_is_rejected() {
        let mut config = Config::default();
        config.axes.tick_step = 0.0;
        assert!(matches!(config.validate(), Err(Error::InvalidTickStep(_))));
    }

    #[test]
    fn tick_step_producing_too_many_ticks_is_rejected() {
        let mut config = Config::default();
        config.axes.tick_step = 1.0e-30;
        assert!(matches!(config.validate(), Err(Error::InvalidTickStep(_))));

        // 240 / 0.25 = 960 ticks is still within bounds.
        config.axes.tick_step = 0.25;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reversed_ranges_are_rejected() {
        let mut config = Config::default();
        config.axes.data_min = 200.0;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidDataRange { .. })
        ));

        let mut config = Config::default();
        config.axes.tick_min = 130.0;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidTickRange { .. })
        ));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"conversion":{"illuminant":"d50"}}"#).unwrap();
        assert_eq!(config.conversion.illuminant, Illuminant::D50);
        assert_eq!(config.conversion.observer, Observer::Two);
        assert_eq!(config.axes, AxisConfig::default());
        assert_eq!(config.axes.lightness_anchor, (145.0, 70.0));

        let config: Config = serde_json::from_str(
            r#"{"axes":{"data_max":100.0,"positive_a_anchor":[105.0,-10.0]}}"#,
        )
        .unwrap();
        assert_eq!(config.axes.positive_a_anchor, (105.0, -10.0));
        assert_eq!(config.axes.x_label_coords, (0.5, 0.0));

        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
