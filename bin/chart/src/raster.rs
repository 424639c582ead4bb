use std::path::PathBuf;

use euclid::{
    default::{Point2D, Transform2D},
    vec2,
};
use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{
        draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut,
        draw_hollow_rect_mut, draw_line_segment_mut,
    },
    rect::Rect,
};
use labplane::{
    chart::{
        Anchor, Axes, Axis, Face, Figure, HAlign, LegendLocation, Limits, Marker, ScatterSeries,
        Side, Spine, SpinePosition, VAlign, DEFAULT_FONT_SIZE,
    },
    models::Srgb,
    Component,
};
use log::debug;
use thiserror::Error;

use crate::font::{load_font, TextPainter, DEFAULT_FONT_PATHS};

const INK: Rgb<u8> = Rgb([0, 0, 0]);
const LEGEND_FRAME: Rgb<u8> = Rgb([204, 204, 204]);
const TICK_LENGTH: f32 = 3.5;
const TICK_PAD: f32 = 3.5;
const LEGEND_PAD: f32 = 6.0;

/// Pixel level layout of the rendered chart.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Minimum space around the plot box, in pixels.
    pub margin: f32,
    /// Pixels per typographic point, 100 dpi by default.
    pub px_per_point: f32,
    /// Fonts to try for text, in order.
    pub font_paths: Vec<PathBuf>,
    /// Canvas color.
    pub background: Rgb<u8>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            margin: 110.0,
            px_per_point: 100.0 / 72.0,
            font_paths: DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect(),
            background: Rgb([255, 255, 255]),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Figure has no axes to draw")]
    NoAxes,
    #[error("Figure of {width}x{height} pixels leaves no room for the plot")]
    TooSmall { width: u32, height: u32 },
    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Maps data and axes coordinates onto the square plot box.
struct Frame {
    to_pixel: Transform2D<f32>,
    left: f32,
    top: f32,
    side: f32,
    x: Limits,
    y: Limits,
}

impl Frame {
    fn new(width: u32, height: u32, margin: f32, x: Limits, y: Limits) -> Result<Self, RenderError> {
        let side = width.min(height) as f32 - 2.0 * margin;
        if side <= 0.0 {
            return Err(RenderError::TooSmall { width, height });
        }

        let left = (width as f32 - side) / 2.0;
        let top = (height as f32 - side) / 2.0;

        let to_pixel = Transform2D::translation(-(x.min as f32), -(y.min as f32))
            .then_scale(side / x.span() as f32, -side / y.span() as f32)
            .then_translate(vec2(left, top + side));

        Ok(Self {
            to_pixel,
            left,
            top,
            side,
            x,
            y,
        })
    }

    fn data(&self, x: Component, y: Component) -> Point2D<f32> {
        self.to_pixel
            .transform_point(Point2D::new(x as f32, y as f32))
    }

    fn axes(&self, fx: Component, fy: Component) -> Point2D<f32> {
        Point2D::new(
            self.left + fx as f32 * self.side,
            self.top + self.side - fy as f32 * self.side,
        )
    }

    fn anchor(&self, anchor: Anchor) -> Point2D<f32> {
        match anchor {
            Anchor::Data(x, y) => self.data(x, y),
            Anchor::Axes(x, y) => self.axes(x, y),
        }
    }

    /// Pixel coordinate across the spine on `side`: x for vertical spines,
    /// y for horizontal ones.
    fn spine_offset(&self, side: Side, spine: &Spine) -> f32 {
        let vertical = side.intersects(Side::LEFT | Side::RIGHT);
        let edge = if side.intersects(Side::RIGHT | Side::TOP) {
            1.0
        } else {
            0.0
        };

        match (spine.position, vertical) {
            (SpinePosition::Edge, true) => self.axes(edge, 0.0).x,
            (SpinePosition::Edge, false) => self.axes(0.0, edge).y,
            (SpinePosition::Center, true) => self.axes(0.5, 0.0).x,
            (SpinePosition::Center, false) => self.axes(0.0, 0.5).y,
            (SpinePosition::Data(v), true) => self.data(v, 0.0).x,
            (SpinePosition::Data(v), false) => self.data(0.0, v).y,
        }
    }

    fn spine_segment(&self, side: Side, spine: &Spine) -> ((f32, f32), (f32, f32)) {
        let offset = self.spine_offset(side, spine);
        if side.intersects(Side::LEFT | Side::RIGHT) {
            let (lo, hi) = spine.bounds.unwrap_or((self.y.min, self.y.max));
            ((offset, self.data(0.0, lo).y), (offset, self.data(0.0, hi).y))
        } else {
            let (lo, hi) = spine.bounds.unwrap_or((self.x.min, self.x.max));
            ((self.data(lo, 0.0).x, offset), (self.data(hi, 0.0).x, offset))
        }
    }
}

/// Rasterizes a [`Figure`] into an RGB image.
pub struct Renderer {
    config: RenderConfig,
    painter: TextPainter,
}

impl Renderer {
    /// Create a renderer, loading the first usable configured font.
    pub fn new(config: RenderConfig) -> Self {
        let font = load_font(&config.font_paths);
        let painter = TextPainter::new(font, config.px_per_point);
        Self { config, painter }
    }

    #[cfg(test)]
    fn without_text(config: RenderConfig) -> Self {
        let painter = TextPainter::new(None, config.px_per_point);
        Self { config, painter }
    }

    pub fn render(&self, figure: &Figure) -> Result<RgbImage, RenderError> {
        let axes = figure.axes().ok_or(RenderError::NoAxes)?;
        let (x, y) = axes.view_limits();
        let frame = Frame::new(figure.width(), figure.height(), self.config.margin, x, y)?;

        let mut canvas =
            RgbImage::from_pixel(figure.width(), figure.height(), self.config.background);

        for series in &axes.series {
            self.draw_series(&mut canvas, &frame, series);
        }
        self.draw_spines(&mut canvas, &frame, axes);
        self.draw_axis(&mut canvas, &frame, axes, &axes.x_axis);
        self.draw_axis(&mut canvas, &frame, axes, &axes.y_axis);

        for text in &axes.texts {
            let anchor = frame.anchor(text.anchor);
            self.painter.draw(
                &mut canvas,
                &text.content,
                (anchor.x, anchor.y),
                text.halign,
                text.valign,
                text.size as f32,
                INK,
            );
        }

        self.draw_legend(&mut canvas, &frame, axes);

        debug!(
            "rendered {} series into {}x{}",
            axes.series.len(),
            canvas.width(),
            canvas.height()
        );
        Ok(canvas)
    }

    fn marker_radius(&self, size: Component) -> f32 {
        (size as f32).sqrt() / 2.0 * self.config.px_per_point
    }

    fn draw_series(&self, canvas: &mut RgbImage, frame: &Frame, series: &ScatterSeries) {
        let radius = self.marker_radius(series.size);

        for (i, (x, y)) in series.points().enumerate() {
            let center = frame.data(x, y);
            if let Face::PerPoint(colors) = &series.face {
                if let Some(&rgb) = colors.get(i) {
                    let color = Rgb(Srgb::from(rgb).to_rgb8());
                    draw_filled_circle_mut(
                        canvas,
                        (center.x.round() as i32, center.y.round() as i32),
                        (radius.round() as i32).max(1),
                        color,
                    );
                }
            }
            if let Some(edge) = series.edge {
                let color = Rgb(Srgb::from(edge).to_rgb8());
                draw_marker_outline(canvas, series.marker, (center.x, center.y), radius, color);
            }
        }
    }

    fn draw_spines(&self, canvas: &mut RgbImage, frame: &Frame, axes: &Axes) {
        for side in [Side::TOP, Side::BOTTOM, Side::LEFT, Side::RIGHT] {
            if !axes.spines.visible.contains(side) {
                continue;
            }
            if let Some(spine) = axes.spines.get(side) {
                let (start, end) = frame.spine_segment(side, spine);
                draw_line_segment_mut(canvas, start, end, INK);
            }
        }
    }

    fn draw_axis(&self, canvas: &mut RgbImage, frame: &Frame, axes: &Axes, axis: &Axis) {
        let side = axis.ticks_position;
        let Some(spine) = axes.spines.get(side) else {
            return;
        };

        let offset = frame.spine_offset(side, spine);
        let length = TICK_LENGTH * self.config.px_per_point;
        let pad = length + TICK_PAD * self.config.px_per_point;
        let vertical = side.intersects(Side::LEFT | Side::RIGHT);
        // Ticks point away from the plot box.
        let outward = if side.intersects(Side::LEFT | Side::TOP) {
            -1.0
        } else {
            1.0
        };

        for tick in &axis.ticks {
            let (limits, along) = if vertical {
                (frame.y, frame.data(0.0, tick.value).y)
            } else {
                (frame.x, frame.data(tick.value, 0.0).x)
            };
            if tick.value < limits.min || tick.value > limits.max {
                continue;
            }

            let (start, end, label_at) = if vertical {
                (
                    (offset, along),
                    (offset + outward * length, along),
                    (offset + outward * pad, along),
                )
            } else {
                (
                    (along, offset),
                    (along, offset + outward * length),
                    (along, offset + outward * pad),
                )
            };

            if tick.mark_visible {
                draw_line_segment_mut(canvas, start, end, INK);
            }
            if tick.label_visible {
                let (halign, valign) = match (vertical, outward < 0.0) {
                    (true, true) => (HAlign::Right, VAlign::Center),
                    (true, false) => (HAlign::Left, VAlign::Center),
                    (false, true) => (HAlign::Center, VAlign::Bottom),
                    (false, false) => (HAlign::Center, VAlign::Top),
                };
                self.painter.draw(
                    canvas,
                    &tick.label,
                    label_at,
                    halign,
                    valign,
                    axis.label_size as f32,
                    INK,
                );
            }
        }

        if let Some(label) = &axis.label {
            let at = frame.axes(label.coords.0, label.coords.1);
            self.painter.draw(
                canvas,
                &label.text,
                (at.x, at.y),
                label.halign,
                label.valign,
                DEFAULT_FONT_SIZE as f32,
                INK,
            );
        }
    }

    fn draw_legend(&self, canvas: &mut RgbImage, frame: &Frame, axes: &Axes) {
        let Some(legend) = axes.legend else {
            return;
        };
        let entries = axes.legend_entries();
        if entries.is_empty() {
            return;
        }

        let size = DEFAULT_FONT_SIZE as f32;
        let pad = LEGEND_PAD * self.config.px_per_point;
        let (_, row_height) = self.painter.measure("Ag", size);
        let marker_radius = row_height / 3.0;
        let marker_column = 2.0 * marker_radius + pad;
        let label_width = entries
            .iter()
            .map(|entry| self.painter.measure(&entry.label, size).0)
            .fold(0.0, f32::max);

        let width = 2.0 * pad + marker_column + label_width;
        let height = 2.0 * pad + row_height * entries.len() as f32;

        let (fx, fy) = legend.anchor();
        let anchor = frame.axes(fx, fy);
        let (left, top) = match legend.location {
            LegendLocation::UpperRight => (anchor.x - width, anchor.y),
            LegendLocation::UpperLeft => (anchor.x, anchor.y),
            LegendLocation::LowerLeft => (anchor.x, anchor.y - height),
            LegendLocation::LowerRight => (anchor.x - width, anchor.y - height),
        };

        let rect = Rect::at(left.round() as i32, top.round() as i32)
            .of_size(width.ceil().max(1.0) as u32, height.ceil().max(1.0) as u32);
        draw_filled_rect_mut(canvas, rect, self.config.background);
        draw_hollow_rect_mut(canvas, rect, LEGEND_FRAME);

        for (i, entry) in entries.iter().enumerate() {
            let row_center = top + pad + row_height * (i as f32 + 0.5);
            let marker_center = (left + pad + marker_radius, row_center);
            let color = entry.edge.map_or(INK, |edge| Rgb(Srgb::from(edge).to_rgb8()));
            draw_marker_outline(canvas, entry.marker, marker_center, marker_radius, color);

            self.painter.draw(
                canvas,
                &entry.label,
                (left + pad + marker_column, row_center),
                HAlign::Left,
                VAlign::Center,
                size,
                INK,
            );
        }
    }
}

/// Vertices of a closed marker outline, or the two strokes of `+` and `x`.
fn marker_shape(marker: Marker, (cx, cy): (f32, f32), r: f32) -> Vec<Vec<(f32, f32)>> {
    match marker {
        Marker::Circle => vec![],
        Marker::Square => vec![vec![
            (cx - r, cy - r),
            (cx + r, cy - r),
            (cx + r, cy + r),
            (cx - r, cy + r),
            (cx - r, cy - r),
        ]],
        Marker::TriangleDown => vec![vec![
            (cx - r, cy - r),
            (cx + r, cy - r),
            (cx, cy + r),
            (cx - r, cy - r),
        ]],
        Marker::TriangleUp => vec![vec![
            (cx - r, cy + r),
            (cx + r, cy + r),
            (cx, cy - r),
            (cx - r, cy + r),
        ]],
        Marker::Diamond => vec![vec![
            (cx, cy - r),
            (cx + r, cy),
            (cx, cy + r),
            (cx - r, cy),
            (cx, cy - r),
        ]],
        Marker::Plus => vec![
            vec![(cx - r, cy), (cx + r, cy)],
            vec![(cx, cy - r), (cx, cy + r)],
        ],
        Marker::Cross => vec![
            vec![(cx - r, cy - r), (cx + r, cy + r)],
            vec![(cx - r, cy + r), (cx + r, cy - r)],
        ],
    }
}

fn draw_marker_outline(
    canvas: &mut RgbImage,
    marker: Marker,
    center: (f32, f32),
    radius: f32,
    color: Rgb<u8>,
) {
    if marker == Marker::Circle {
        draw_hollow_circle_mut(
            canvas,
            (center.0.round() as i32, center.1.round() as i32),
            (radius.round() as i32).max(1),
            color,
        );
        return;
    }

    for stroke in marker_shape(marker, center, radius) {
        for pair in stroke.windows(2) {
            draw_line_segment_mut(canvas, pair[0], pair[1], color);
        }
    }
}
