//! Rendering of a constant lightness slice of CIELAB.
//!
//! The a*/b* plane is sampled on a square grid, every sample is converted to
//! sRGB and drawn as a dot in its own color. The result sits on a figure
//! whose axes are decorated as a Lab chart, ready for overlays.

use log::{debug, warn};

use crate::{
    chart::{decorate::format_plot, Axes, Figure, Marker, ScatterSeries},
    color::Component,
    config::{AxisConfig, Config},
    convert::{is_in_srgb_gamut, lab2rgb, to_hex, Colorimetric, LabToRgb},
    error::Result,
    grid::SampleGrid,
    models::Lab,
};

/// Edge color of overlay markers.
pub const OVERLAY_EDGE: [Component; 3] = [0.0, 0.0, 0.0];

/// Draw the a*/b* slice at `lightness` using `num_points` samples per axis
/// and the default configuration. Returns the current axes so callers can
/// keep plotting on them.
pub fn plot_2d_lab_colorspace(
    fig: &mut Figure,
    num_points: usize,
    lightness: Component,
) -> &mut Axes {
    let config = AxisConfig::default();
    let grid = SampleGrid::new(config.data_min, config.data_max, num_points, lightness);
    render_colorspace(fig, &grid, &config, &Colorimetric::default())
}

/// Like [`plot_2d_lab_colorspace`] with an explicit configuration.
pub fn plot_2d_lab_colorspace_with<'a>(
    fig: &'a mut Figure,
    num_points: usize,
    lightness: Component,
    config: &Config,
) -> Result<&'a mut Axes> {
    config.validate()?;

    let axes = &config.axes;
    let grid = SampleGrid::new(axes.data_min, axes.data_max, num_points, lightness);
    let converter = Colorimetric::new(&config.conversion);
    Ok(render_colorspace(fig, &grid, axes, &converter))
}

/// Plot every column of `grid` as one scatter series colored by `converter`,
/// then decorate the axes.
pub fn render_colorspace<'a, C: LabToRgb + ?Sized>(
    fig: &'a mut Figure,
    grid: &SampleGrid,
    config: &AxisConfig,
    converter: &C,
) -> &'a mut Axes {
    if grid.is_empty() {
        warn!("no samples requested, the chart will only show its axes");
    }

    let axes = fig.gca();
    let mut out_of_gamut = 0_usize;

    for (a, labs) in grid.columns() {
        let colors: Vec<[Component; 3]> = labs
            .iter()
            .map(|&lab| converter.lab_to_rgb(lab))
            .collect();
        out_of_gamut += colors.iter().filter(|&&rgb| !is_in_srgb_gamut(rgb)).count();

        let y = grid.values().to_vec();
        let x = vec![a; y.len()];
        axes.scatter(ScatterSeries::colored(x, y, colors, config.marker_size));
    }

    debug!(
        "plotted {} series at L*={}, {} of {} samples outside sRGB",
        grid.len(),
        grid.lightness(),
        out_of_gamut,
        grid.len() * grid.len()
    );

    format_plot(axes, grid.lightness(), config);
    axes
}

/// A named Lab color to mark on top of the colorspace.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayPoint {
    /// The color to mark.
    pub lab: Lab,
    /// Legend label.
    pub label: String,
}

impl OverlayPoint {
    /// A labelled point.
    pub fn new(lab: Lab, label: impl Into<String>) -> Self {
        Self {
            lab,
            label: label.into(),
        }
    }
}

/// Mark each point at `(a*, b*)` with an unfilled black marker, whatever its
/// lightness.
///
/// Markers are taken from `markers` in order and cycled when there are more
/// points than markers; circles are used when `markers` is empty.
pub fn overlay(axes: &mut Axes, points: &[OverlayPoint], markers: &[Marker]) {
    let mut markers = markers.iter().copied().cycle();

    for point in points {
        let marker = markers.next().unwrap_or_default();
        debug!(
            "overlay {:?} at ({}, {}) as {:?}, sRGB {}",
            point.label,
            point.lab.a,
            point.lab.b,
            marker,
            to_hex(lab2rgb(point.lab.to_array()))
        );
        axes.scatter(ScatterSeries::outlined(
            vec![point.lab.a],
            vec![point.lab.b],
            marker,
            OVERLAY_EDGE,
            point.label.as_str(),
        ));
    }
}
