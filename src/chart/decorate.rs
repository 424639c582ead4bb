//! Axis decoration of the a*/b* chart: centered spines, fixed ticks, the
//! color direction labels and the lightness annotation.

use log::warn;

use crate::{
    chart::{Anchor, Axes, Axis, HAlign, Side, SpinePosition, Text, VAlign},
    color::Component,
    config::AxisConfig,
    grid::arange,
};

/// Label under the horizontal axis.
pub const X_LABEL: &str = "Blue \n -b*";
/// Label left of the vertical axis.
pub const Y_LABEL: &str = "Green \n -a*";
/// Annotation at the positive end of the b* axis.
pub const POSITIVE_B_TEXT: &str = "Yellow \n +b*";
/// Annotation at the positive end of the a* axis.
pub const POSITIVE_A_TEXT: &str = "Red \n +a*";

/// Text of the lightness annotation.
pub fn lightness_text(lightness: Component) -> String {
    format!("Lightness* = {lightness}")
}

/// Style `axes` as a Lab a*/b* plane.
///
/// The left and bottom spines are moved to the center and bounded to the
/// data range and the top and right spines are hidden. Both axes get ticks
/// from `tick_min` to `tick_max` inclusive with the zero tick removed. Labels
/// and annotations are placed at the anchors of `config`.
pub fn format_plot(axes: &mut Axes, lightness: Component, config: &AxisConfig) {
    axes.spines.visible.remove(Side::TOP | Side::RIGHT);
    for spine in [&mut axes.spines.left, &mut axes.spines.bottom] {
        spine.position = SpinePosition::Center;
        spine.bounds = Some((config.data_min, config.data_max));
    }

    // Half a step of padding keeps `tick_max` and nothing past it.
    let ticks = arange(
        config.tick_min,
        config.tick_max + config.tick_step / 2.0,
        config.tick_step,
    );
    for axis in [&mut axes.x_axis, &mut axes.y_axis] {
        axis.set_ticks(&ticks);
        axis.label_size = config.tick_label_size;
        hide_zero_tick(axis, config.tick_step);
    }

    axes.x_axis.set_label(X_LABEL, config.x_label_coords);
    axes.y_axis.set_label(Y_LABEL, config.y_label_coords);

    let (x, y) = config.positive_b_anchor;
    axes.text(x, y, POSITIVE_B_TEXT);
    let (x, y) = config.positive_a_anchor;
    axes.text(x, y, POSITIVE_A_TEXT);

    let (x, y) = config.lightness_anchor;
    axes.texts.push(Text {
        content: lightness_text(lightness),
        anchor: Anchor::Data(x, y),
        halign: HAlign::Left,
        valign: VAlign::Bottom,
        size: config.tick_label_size * 1.5,
    });
}

fn hide_zero_tick(axis: &mut Axis, step: Component) {
    match axis.tick_index(0.0, step) {
        Some(index) => {
            axis.hide_tick(index);
        }
        None => warn!("no tick at zero, leaving all ticks visible"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decorated(lightness: Component) -> Axes {
        let mut axes = Axes::default();
        format_plot(&mut axes, lightness, &AxisConfig::default());
        axes
    }

    #[test]
    fn ticks_span_minus_to_plus_120() {
        let axes = decorated(75.0);
        for axis in [&axes.x_axis, &axes.y_axis] {
            let values: Vec<_> = axis.ticks.iter().map(|t| t.value).collect();
            assert_eq!(values.len(), 13);
            assert_eq!(values.first(), Some(&-120.0));
            assert_eq!(values.last(), Some(&120.0));
            assert_eq!(axis.label_size, 8.0);
        }
    }

    #[test]
    fn zero_tick_is_hidden_on_both_axes() {
        let axes = decorated(75.0);
        for axis in [&axes.x_axis, &axes.y_axis] {
            let hidden: Vec<_> = axis
                .ticks
                .iter()
                .enumerate()
                .filter(|(_, t)| !t.label_visible)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(hidden, [6]);
            assert!(!axis.ticks[6].mark_visible);
        }
    }

    #[test]
    fn spines_are_centered_and_bounded() {
        let axes = decorated(75.0);
        assert_eq!(axes.spines.visible, Side::LEFT | Side::BOTTOM);
        assert_eq!(axes.spines.left.position, SpinePosition::Center);
        assert_eq!(axes.spines.bottom.bounds, Some((-128.0, 127.0)));
        assert_eq!(axes.spines.top.bounds, None);
    }

    #[test]
    fn labels_and_annotations() {
        let axes = decorated(75.0);
        let x_label = axes.x_axis.label.as_ref().unwrap();
        assert_eq!(x_label.text, "Blue \n -b*");
        assert_eq!(x_label.coords, (0.5, 0.0));
        assert_eq!(axes.y_axis.label.as_ref().unwrap().text, "Green \n -a*");

        let texts: Vec<_> = axes.texts.iter().map(|t| (t.content.as_str(), t.anchor)).collect();
        assert_eq!(
            texts,
            [
                ("Yellow \n +b*", Anchor::Data(-12.0, 140.0)),
                ("Red \n +a*", Anchor::Data(132.0, -12.0)),
                ("Lightness* = 75", Anchor::Data(145.0, 70.0)),
            ]
        );
    }

    #[test]
    fn fractional_steps_stop_at_tick_max() {
        let mut axes = Axes::default();
        let config = AxisConfig {
            tick_min: -0.3,
            tick_max: 0.3,
            tick_step: 0.1,
            ..Default::default()
        };
        format_plot(&mut axes, 50.0, &config);

        let ticks = &axes.x_axis.ticks;
        assert_eq!(ticks.len(), 7);
        assert!((ticks[6].value - 0.3).abs() < 1.0e-5);
        // The middle tick may only land near zero after rounding.
        assert!(!ticks[3].label_visible);
        assert_eq!(ticks.iter().filter(|t| t.label_visible).count(), 6);
    }

    #[test]
    fn annotations_follow_configured_anchors() {
        let mut axes = Axes::default();
        let config = AxisConfig {
            data_min: -100.0,
            data_max: 100.0,
            positive_a_anchor: (105.0, -10.0),
            lightness_anchor: (110.0, 50.0),
            y_label_coords: (0.0, 0.5),
            ..Default::default()
        };
        format_plot(&mut axes, 60.0, &config);

        assert_eq!(axes.texts[1].anchor, Anchor::Data(105.0, -10.0));
        assert_eq!(axes.texts[2].anchor, Anchor::Data(110.0, 50.0));
        assert_eq!(axes.y_axis.label.as_ref().unwrap().coords, (0.0, 0.5));
        assert_eq!(axes.spines.left.bounds, Some((-100.0, 100.0)));
    }

    #[test]
    fn ticks_without_zero_stay_visible() {
        let mut axes = Axes::default();
        let config = AxisConfig {
            tick_min: -110.0,
            tick_max: 110.0,
            ..Default::default()
        };
        format_plot(&mut axes, 50.0, &config);
        assert!(axes.x_axis.ticks.iter().all(|t| t.label_visible));
    }
}
