//! Spines, ticks and axis labels.

use bitflags::bitflags;

use crate::color::Component;

bitflags! {
    /// Sides of the axes box, used both for spine visibility and for the
    /// side ticks are drawn on.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Side : u8 {
        /// The top edge.
        const TOP = 1 << 0;
        /// The bottom edge.
        const BOTTOM = 1 << 1;
        /// The left edge.
        const LEFT = 1 << 2;
        /// The right edge.
        const RIGHT = 1 << 3;
    }
}

/// Where a spine line is drawn across the axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SpinePosition {
    /// On the edge of the axes box it belongs to.
    #[default]
    Edge,
    /// Through the middle of the axes box (axes fraction 0.5).
    Center,
    /// At the given data coordinate of the other axis.
    Data(Component),
}

/// A single spine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spine {
    /// Where the line crosses the axes.
    pub position: SpinePosition,
    /// Data extent of the line along its own axis; the full view when unset.
    pub bounds: Option<(Component, Component)>,
}

/// The four spines of an axes box.
#[derive(Clone, Debug, PartialEq)]
pub struct Spines {
    /// Which spines are drawn.
    pub visible: Side,
    /// The top spine.
    pub top: Spine,
    /// The bottom spine, carrying the x ticks by default.
    pub bottom: Spine,
    /// The left spine, carrying the y ticks by default.
    pub left: Spine,
    /// The right spine.
    pub right: Spine,
}

impl Default for Spines {
    fn default() -> Self {
        Self {
            visible: Side::all(),
            top: Spine::default(),
            bottom: Spine::default(),
            left: Spine::default(),
            right: Spine::default(),
        }
    }
}

impl Spines {
    /// Access one spine. `side` must hold exactly one flag.
    pub fn get(&self, side: Side) -> Option<&Spine> {
        if side == Side::TOP {
            Some(&self.top)
        } else if side == Side::BOTTOM {
            Some(&self.bottom)
        } else if side == Side::LEFT {
            Some(&self.left)
        } else if side == Side::RIGHT {
            Some(&self.right)
        } else {
            None
        }
    }
}

/// One major tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position in data coordinates.
    pub value: Component,
    /// Text drawn next to the tick.
    pub label: String,
    /// Whether the label is drawn.
    pub label_visible: bool,
    /// Whether the tick mark is drawn.
    pub mark_visible: bool,
}

impl Tick {
    /// A visible tick labelled with its value.
    pub fn new(value: Component) -> Self {
        Self {
            value,
            label: format_tick(value),
            label_visible: true,
            mark_visible: true,
        }
    }
}

fn format_tick(value: Component) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Horizontal alignment of a text block relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HAlign {
    /// Text starts at the anchor.
    #[default]
    Left,
    /// Text is centered on the anchor.
    Center,
    /// Text ends at the anchor.
    Right,
}

/// Vertical alignment of a text block relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VAlign {
    /// Block top sits on the anchor.
    Top,
    /// Block is centered on the anchor.
    Center,
    /// Block bottom sits on the anchor.
    #[default]
    Bottom,
}

/// A label attached to an axis, positioned in axes coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    /// Label text, `\n` separates lines.
    pub text: String,
    /// Position as a fraction of the axes box (0 left/bottom, 1 right/top).
    pub coords: (Component, Component),
    /// Horizontal alignment around `coords`.
    pub halign: HAlign,
    /// Vertical alignment around `coords`.
    pub valign: VAlign,
}

/// One axis (x or y) of an [`Axes`](super::Axes).
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// Major ticks in increasing order.
    pub ticks: Vec<Tick>,
    /// Spine the ticks are drawn on.
    pub ticks_position: Side,
    /// Tick label font size in points.
    pub label_size: Component,
    /// Optional axis label.
    pub label: Option<AxisLabel>,
}

impl Axis {
    pub(crate) fn new(ticks_position: Side) -> Self {
        Self {
            ticks: vec![],
            ticks_position,
            label_size: 10.0,
            label: None,
        }
    }

    /// Replace the ticks with visible ticks at `values`.
    pub fn set_ticks(&mut self, values: &[Component]) {
        self.ticks = values.iter().copied().map(Tick::new).collect();
    }

    /// Index of the tick at `value`, allowing for rounding errors of a
    /// thousandth of the tick `step`.
    pub fn tick_index(&self, value: Component, step: Component) -> Option<usize> {
        let tolerance = (step.abs() * 1.0e-3).max(Component::EPSILON);
        self.ticks
            .iter()
            .position(|tick| (tick.value - value).abs() <= tolerance)
    }

    /// Hide both the label and the mark of the tick at `index`. Returns false
    /// when there is no such tick.
    pub fn hide_tick(&mut self, index: usize) -> bool {
        match self.ticks.get_mut(index) {
            Some(tick) => {
                tick.label_visible = false;
                tick.mark_visible = false;
                true
            }
            None => false,
        }
    }

    /// Set the axis label at the given axes coordinates.
    pub fn set_label(&mut self, text: impl Into<String>, coords: (Component, Component)) {
        let (halign, valign) = if self.ticks_position.intersects(Side::LEFT | Side::RIGHT) {
            (HAlign::Center, VAlign::Bottom)
        } else {
            (HAlign::Center, VAlign::Top)
        };

        self.label = Some(AxisLabel {
            text: text.into(),
            coords,
            halign,
            valign,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_labelled_with_integers() {
        let mut axis = Axis::new(Side::BOTTOM);
        axis.set_ticks(&[-20.0, 0.0, 2.5]);

        let labels: Vec<_> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["-20", "0", "2.5"]);
        assert!(axis.ticks.iter().all(|t| t.label_visible && t.mark_visible));
    }

    #[test]
    fn hiding_a_tick() {
        let mut axis = Axis::new(Side::LEFT);
        axis.set_ticks(&[-20.0, 0.0, 20.0]);

        let index = axis.tick_index(0.0, 20.0).unwrap();
        assert_eq!(index, 1);
        assert!(axis.hide_tick(index));
        assert!(!axis.ticks[1].label_visible);
        assert!(!axis.ticks[1].mark_visible);
        assert!(axis.ticks[0].mark_visible);

        assert!(!axis.hide_tick(3));
        assert_eq!(axis.tick_index(5.0, 20.0), None);
    }

    #[test]
    fn tick_lookup_tolerates_rounding() {
        let mut axis = Axis::new(Side::BOTTOM);
        axis.set_ticks(&[-0.2, -0.1, 1.5e-8, 0.1, 0.2]);

        assert_eq!(axis.tick_index(0.0, 0.1), Some(2));
        assert_eq!(axis.tick_index(0.1, 0.1), Some(3));
        assert_eq!(axis.tick_index(0.05, 0.1), None);
    }

    #[test]
    fn spine_lookup_by_side() {
        let mut spines = Spines::default();
        spines.left.position = SpinePosition::Center;
        assert_eq!(spines.get(Side::LEFT).unwrap().position, SpinePosition::Center);
        assert_eq!(spines.get(Side::RIGHT).unwrap().position, SpinePosition::Edge);
        assert!(spines.get(Side::LEFT | Side::TOP).is_none());
    }

    #[test]
    fn y_axis_labels_sit_above_their_anchor() {
        let mut axis = Axis::new(Side::LEFT);
        axis.set_label("Green", (-0.01, 0.45));
        let label = axis.label.unwrap();
        assert_eq!(label.valign, VAlign::Bottom);
        assert_eq!(label.coords, (-0.01, 0.45));
    }
}
