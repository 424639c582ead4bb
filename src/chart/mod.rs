//! An in-memory chart: a [`Figure`] holding one [`Axes`] that collects
//! scatter series, spines, ticks and text. Nothing here touches pixels; a
//! backend walks the finished figure and draws it.

use std::str::FromStr;

use crate::{color::Component, error::Error};

pub mod axis;
pub mod decorate;

pub use axis::{Axis, AxisLabel, HAlign, Side, Spine, SpinePosition, Spines, Tick, VAlign};

/// Fraction of the data span added on each side when autoscaling.
pub const AUTOSCALE_MARGIN: Component = 0.05;

/// Default marker area in points squared.
pub const DEFAULT_MARKER_SIZE: Component = 36.0;

/// Default text size in points.
pub const DEFAULT_FONT_SIZE: Component = 10.0;

/// Marker shapes for scatter points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Marker {
    /// `o`
    #[default]
    Circle,
    /// `v`
    TriangleDown,
    /// `^`
    TriangleUp,
    /// `s`
    Square,
    /// `D`
    Diamond,
    /// `+`
    Plus,
    /// `x`
    Cross,
}

impl FromStr for Marker {
    type Err = Error;

    /// Parse the single character marker codes used by common plotting
    /// libraries.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "o" => Ok(Marker::Circle),
            "v" => Ok(Marker::TriangleDown),
            "^" => Ok(Marker::TriangleUp),
            "s" => Ok(Marker::Square),
            "D" => Ok(Marker::Diamond),
            "+" => Ok(Marker::Plus),
            "x" => Ok(Marker::Cross),
            _ => Err(Error::InvalidMarker(s.to_owned())),
        }
    }
}

/// How the inside of each marker is painted.
#[derive(Clone, Debug, PartialEq)]
pub enum Face {
    /// One RGB color per point, normalized to `[0, 1]` (values outside that
    /// range are possible and left to the backend to clamp).
    PerPoint(Vec<[Component; 3]>),
    /// No fill, only the edge is drawn.
    None,
}

/// A set of points sharing one marker style.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterSeries {
    /// X positions in data coordinates.
    pub x: Vec<Component>,
    /// Y positions in data coordinates.
    pub y: Vec<Component>,
    /// Marker shape.
    pub marker: Marker,
    /// Marker area in points squared.
    pub size: Component,
    /// Marker fill.
    pub face: Face,
    /// Marker outline color, if any.
    pub edge: Option<[Component; 3]>,
    /// Legend label.
    pub label: Option<String>,
}

impl ScatterSeries {
    /// Filled circles, one color per point.
    pub fn colored(
        x: Vec<Component>,
        y: Vec<Component>,
        colors: Vec<[Component; 3]>,
        size: Component,
    ) -> Self {
        Self {
            x,
            y,
            marker: Marker::Circle,
            size,
            face: Face::PerPoint(colors),
            edge: None,
            label: None,
        }
    }

    /// Unfilled markers with a colored outline and a legend label.
    pub fn outlined(
        x: Vec<Component>,
        y: Vec<Component>,
        marker: Marker,
        edge: [Component; 3],
        label: impl Into<String>,
    ) -> Self {
        Self {
            x,
            y,
            marker,
            size: DEFAULT_MARKER_SIZE,
            face: Face::None,
            edge: Some(edge),
            label: Some(label.into()),
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    /// True if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (Component, Component)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Coordinate system a text anchor is given in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// Data coordinates.
    Data(Component, Component),
    /// Fractions of the axes box.
    Axes(Component, Component),
}

/// A free standing text annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    /// The text, `\n` separates lines.
    pub content: String,
    /// Where the text is placed.
    pub anchor: Anchor,
    /// Horizontal alignment around the anchor.
    pub halign: HAlign,
    /// Vertical alignment around the anchor.
    pub valign: VAlign,
    /// Font size in points.
    pub size: Component,
}

/// Corner of the legend box that is pinned to the anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendLocation {
    /// Pin the upper right corner.
    #[default]
    UpperRight,
    /// Pin the upper left corner.
    UpperLeft,
    /// Pin the lower left corner.
    LowerLeft,
    /// Pin the lower right corner.
    LowerRight,
}

/// Placement of the legend.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Legend {
    /// Corner of the legend box placed on the anchor.
    pub location: LegendLocation,
    /// Anchor in axes coordinates; the matching corner of the axes box when
    /// unset.
    pub bbox_to_anchor: Option<(Component, Component)>,
}

impl Legend {
    /// Resolve the anchor point in axes coordinates.
    pub fn anchor(&self) -> (Component, Component) {
        self.bbox_to_anchor.unwrap_or(match self.location {
            LegendLocation::UpperRight => (1.0, 1.0),
            LegendLocation::UpperLeft => (0.0, 1.0),
            LegendLocation::LowerLeft => (0.0, 0.0),
            LegendLocation::LowerRight => (1.0, 0.0),
        })
    }
}

/// A legend row: the marker style and label of one series.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Marker shape.
    pub marker: Marker,
    /// Marker outline color.
    pub edge: Option<[Component; 3]>,
    /// Label text.
    pub label: String,
}

/// View limits of one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    /// Lower limit.
    pub min: Component,
    /// Upper limit.
    pub max: Component,
}

impl Limits {
    /// Length of the interval.
    pub fn span(&self) -> Component {
        self.max - self.min
    }

    fn with_margin(self, margin: Component) -> Self {
        let span = self.span();
        if span > 0.0 {
            Self {
                min: self.min - span * margin,
                max: self.max + span * margin,
            }
        } else {
            Self {
                min: self.min - 1.0,
                max: self.max + 1.0,
            }
        }
    }
}

/// A plotting area: series, decoration and annotations.
#[derive(Clone, Debug, PartialEq)]
pub struct Axes {
    /// Scatter series in drawing order.
    pub series: Vec<ScatterSeries>,
    /// The four spines.
    pub spines: Spines,
    /// The horizontal axis.
    pub x_axis: Axis,
    /// The vertical axis.
    pub y_axis: Axis,
    /// Text annotations.
    pub texts: Vec<Text>,
    /// Legend, if requested.
    pub legend: Option<Legend>,
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            series: vec![],
            spines: Spines::default(),
            x_axis: Axis::new(Side::BOTTOM),
            y_axis: Axis::new(Side::LEFT),
            texts: vec![],
            legend: None,
        }
    }
}

impl Axes {
    /// Add a scatter series and return it for further styling.
    pub fn scatter(&mut self, series: ScatterSeries) -> &mut ScatterSeries {
        self.series.push(series);
        let last = self.series.len() - 1;
        &mut self.series[last]
    }

    /// Add a text at data coordinates, left aligned with its bottom on the
    /// anchor.
    pub fn text(&mut self, x: Component, y: Component, content: impl Into<String>) {
        self.texts.push(Text {
            content: content.into(),
            anchor: Anchor::Data(x, y),
            halign: HAlign::Left,
            valign: VAlign::Bottom,
            size: DEFAULT_FONT_SIZE,
        });
    }

    /// Request a legend for every labelled series.
    pub fn legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    /// Labelled series in drawing order.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.series
            .iter()
            .filter_map(|series| {
                series.label.as_ref().map(|label| LegendEntry {
                    marker: series.marker,
                    edge: series.edge,
                    label: label.clone(),
                })
            })
            .collect()
    }

    /// Bounding box of all series points, or `None` without any points.
    pub fn data_limits(&self) -> Option<(Limits, Limits)> {
        let mut points = self.series.iter().flat_map(|s| s.points());
        let (x0, y0) = points.next()?;

        let init = (
            Limits { min: x0, max: x0 },
            Limits { min: y0, max: y0 },
        );
        Some(points.fold(init, |(x, y), (px, py)| {
            (
                Limits {
                    min: x.min.min(px),
                    max: x.max.max(px),
                },
                Limits {
                    min: y.min.min(py),
                    max: y.max.max(py),
                },
            )
        }))
    }

    /// Autoscaled view: the data limits widened by [`AUTOSCALE_MARGIN`] on
    /// each side, or `[-1, 1]` on both axes for an empty plot.
    pub fn view_limits(&self) -> (Limits, Limits) {
        match self.data_limits() {
            Some((x, y)) => (
                x.with_margin(AUTOSCALE_MARGIN),
                y.with_margin(AUTOSCALE_MARGIN),
            ),
            None => {
                let unit = Limits {
                    min: -1.0,
                    max: 1.0,
                };
                (unit, unit)
            }
        }
    }
}

/// The top level container; owns at most one [`Axes`].
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    width: u32,
    height: u32,
    axes: Option<Axes>,
}

impl Figure {
    /// A blank figure of the given size in pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            axes: None,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The current axes, created on first use.
    pub fn gca(&mut self) -> &mut Axes {
        self.axes.get_or_insert_with(Axes::default)
    }

    /// The axes, if any were created.
    pub fn axes(&self) -> Option<&Axes> {
        self.axes.as_ref()
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::new(1000, 700)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn gca_creates_axes_once() {
        let mut fig = Figure::default();
        assert!(fig.axes().is_none());

        fig.gca().text(0.0, 0.0, "hello");
        fig.gca().text(1.0, 1.0, "again");
        assert_eq!(fig.axes().unwrap().texts.len(), 2);
    }

    #[test]
    fn marker_codes() {
        assert_eq!("o".parse::<Marker>().unwrap(), Marker::Circle);
        assert_eq!("v".parse::<Marker>().unwrap(), Marker::TriangleDown);
        assert_eq!("s".parse::<Marker>().unwrap(), Marker::Square);
        assert!(matches!(
            "*".parse::<Marker>(),
            Err(Error::InvalidMarker(code)) if code == "*"
        ));
    }

    #[test]
    fn view_limits_add_margin() {
        let mut axes = Axes::default();
        assert_eq!(axes.view_limits().0, Limits { min: -1.0, max: 1.0 });

        axes.scatter(ScatterSeries::colored(
            vec![-128.0, 127.0],
            vec![0.0, 100.0],
            vec![[0.0; 3]; 2],
            20.0,
        ));
        let (x, y) = axes.view_limits();
        assert_component_eq!(x.min, -140.75, 1.0e-3);
        assert_component_eq!(x.max, 139.75, 1.0e-3);
        assert_component_eq!(y.min, -5.0, 1.0e-3);
        assert_component_eq!(y.max, 105.0, 1.0e-3);
        assert_component_eq!(x.span(), 280.5, 1.0e-3);
    }

    #[test]
    fn legend_lists_labelled_series_only() {
        let mut axes = Axes::default();
        axes.scatter(ScatterSeries::colored(vec![0.0], vec![0.0], vec![[1.0; 3]], 20.0));
        axes.scatter(ScatterSeries::outlined(
            vec![1.0],
            vec![2.0],
            Marker::Square,
            [0.0; 3],
            "sample",
        ));

        let entries = axes.legend_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "sample");
        assert_eq!(entries[0].marker, Marker::Square);

        let legend = Legend {
            location: LegendLocation::LowerLeft,
            bbox_to_anchor: Some((1.0, 0.8)),
        };
        assert_eq!(legend.anchor(), (1.0, 0.8));
        assert_eq!(Legend::default().anchor(), (1.0, 1.0));
    }
}
