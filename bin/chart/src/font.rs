use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use labplane::chart::{HAlign, VAlign};
use log::{debug, warn};
use rusttype::{point, Font, Scale};

/// Fonts tried in order when no explicit list is configured.
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Load the first font in `paths` that can be read and parsed.
pub fn load_font(paths: &[PathBuf]) -> Option<Font<'static>> {
    let font = paths.iter().find_map(|path| try_load(path));
    if font.is_none() {
        warn!(
            "none of the {} configured fonts could be loaded, text will be skipped",
            paths.len()
        );
    }
    font
}

fn try_load(path: &Path) -> Option<Font<'static>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!("skipping font {}: {}", path.display(), err);
            return None;
        }
    };

    let font = Font::try_from_vec(bytes);
    match font {
        Some(_) => debug!("using font {}", path.display()),
        None => warn!("{} is not a usable TrueType font", path.display()),
    }
    font
}

/// Draws multi-line text with an optional font. Without a font every draw is
/// a no-op and sizes are estimated from the character count.
pub struct TextPainter {
    font: Option<Font<'static>>,
    px_per_point: f32,
}

impl TextPainter {
    pub fn new(font: Option<Font<'static>>, px_per_point: f32) -> Self {
        Self { font, px_per_point }
    }

    fn scale(&self, size: f32) -> Scale {
        Scale::uniform(size * self.px_per_point)
    }

    /// Width of the widest line and total height of `text` in pixels.
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let scale = self.scale(size);
        text.lines()
            .map(|line| match &self.font {
                Some(font) => measure_line(font, line, scale),
                None => (line.chars().count() as f32 * scale.x * 0.55, scale.y * 1.2),
            })
            .fold((0.0, 0.0), |(w, h), (lw, lh)| (f32::max(w, lw), h + lh))
    }

    /// Draw `text` aligned around the pixel position `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &mut RgbImage,
        text: &str,
        (x, y): (f32, f32),
        halign: HAlign,
        valign: VAlign,
        size: f32,
        color: Rgb<u8>,
    ) {
        let Some(font) = &self.font else {
            return;
        };

        let scale = self.scale(size);
        let (_, block_height) = self.measure(text, size);
        let mut top = match valign {
            VAlign::Top => y,
            VAlign::Center => y - block_height / 2.0,
            VAlign::Bottom => y - block_height,
        };

        for line in text.lines() {
            let (width, height) = measure_line(font, line, scale);
            let left = match halign {
                HAlign::Left => x,
                HAlign::Center => x - width / 2.0,
                HAlign::Right => x - width,
            };

            imageproc::drawing::draw_text_mut(
                canvas,
                color,
                left.round() as i32,
                top.round() as i32,
                scale,
                font,
                line,
            );
            top += height;
        }
    }
}

fn measure_line(font: &Font, text: &str, scale: Scale) -> (f32, f32) {
    let width = font
        .layout(text, scale, point(0.0, 0.0))
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .last()
        .unwrap_or(0.0);

    let v_metrics = font.v_metrics(scale);
    let height = v_metrics.ascent - v_metrics.descent + v_metrics.line_gap;

    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fonts_are_skipped() {
        let font = load_font(&[PathBuf::from("/definitely/not/a/font.ttf")]);
        assert!(font.is_none());
    }

    #[test]
    fn measuring_without_font_estimates() {
        let painter = TextPainter::new(None, 2.0);

        let (w1, h1) = painter.measure("Red", 10.0);
        let (w2, h2) = painter.measure("Red \n +a*", 10.0);
        assert!(w1 > 0.0);
        assert!(w2 > w1);
        assert_eq!(h2, 2.0 * h1);
    }

    #[test]
    fn drawing_without_font_leaves_canvas_untouched() {
        let painter = TextPainter::new(None, 1.0);
        let mut canvas = RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]));
        painter.draw(
            &mut canvas,
            "text",
            (10.0, 10.0),
            HAlign::Center,
            VAlign::Center,
            10.0,
            Rgb([0, 0, 0]),
        );
        assert!(canvas.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }
}
