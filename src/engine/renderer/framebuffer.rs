// CPU-side frame the game draws into before it is presented

use super::canvas::{colors, Canvas, Color};
use super::font;
use crate::core::math::Rect;
use image::{Pixel, RgbaImage};
use std::ops::Range;

/// Software canvas backed by an RGBA image
pub struct FrameBuffer {
    image: RgbaImage,
}

impl FrameBuffer {
    /// Create a transparent frame of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width.max(1), height.max(1)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The finished frame
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Clipped pixel span covering [start, start + len)
    fn span(start: f32, len: f32, limit: u32) -> Range<u32> {
        let lo = start.round().max(0.0).min(limit as f32) as u32;
        let hi = (start + len).round().max(0.0).min(limit as f32) as u32;
        lo..hi.max(lo)
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.image.width() && y < self.image.height() {
            self.image.get_pixel_mut(x, y).blend(&color);
        }
    }
}

impl Canvas for FrameBuffer {
    fn size(&self) -> (f32, f32) {
        (self.image.width() as f32, self.image.height() as f32)
    }

    fn clear_rect(&mut self, rect: Rect) {
        for y in Self::span(rect.y, rect.height, self.image.height()) {
            for x in Self::span(rect.x, rect.width, self.image.width()) {
                self.image.put_pixel(x, y, colors::TRANSPARENT);
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        for y in Self::span(rect.y, rect.height, self.image.height()) {
            for x in Self::span(rect.x, rect.width, self.image.width()) {
                self.blend_pixel(x, y, color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        let line = line_width.max(1.0).min(rect.width / 2.0).min(rect.height / 2.0);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, line), color);
        self.fill_rect(
            Rect::new(rect.x, rect.bottom() - line, rect.width, line),
            color,
        );
        let inner = rect.height - 2.0 * line;
        self.fill_rect(Rect::new(rect.x, rect.y + line, line, inner), color);
        self.fill_rect(
            Rect::new(rect.right() - line, rect.y + line, line, inner),
            color,
        );
    }

    fn draw_image(&mut self, image: &RgbaImage, src: Rect, dst: Rect) {
        if dst.width <= 0.0 || dst.height <= 0.0 || image.width() == 0 || image.height() == 0 {
            return;
        }
        let scale_x = src.width / dst.width;
        let scale_y = src.height / dst.height;
        let max_x = image.width() as f32 - 1.0;
        let max_y = image.height() as f32 - 1.0;

        for y in Self::span(dst.y, dst.height, self.image.height()) {
            let sy = (src.y + (y as f32 + 0.5 - dst.y) * scale_y).floor();
            let sy = sy.max(0.0).min(max_y) as u32;
            for x in Self::span(dst.x, dst.width, self.image.width()) {
                let sx = (src.x + (x as f32 + 0.5 - dst.x) * scale_x).floor();
                let sx = sx.max(0.0).min(max_x) as u32;
                let texel = *image.get_pixel(sx, sy);
                self.blend_pixel(x, y, texel);
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        let left = x.round() as i64;
        let top = (y - font::LINE_HEIGHT).round() as i64;
        let scale = font::SCALE as i64;
        let mut lit = Vec::new();
        font::for_each_pixel(text, |col, row| lit.push((col as i64, row as i64)));

        for (col, row) in lit {
            for dy in 0..scale {
                for dx in 0..scale {
                    let px = left + col * scale + dx;
                    let py = top + row * scale + dy;
                    if px >= 0 && py >= 0 {
                        self.blend_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }

    fn measure_text(&self, text: &str) -> f32 {
        font::text_width(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut frame = FrameBuffer::new(4, 4);
        frame.fill_rect(Rect::new(-2.0, -2.0, 4.0, 4.0), colors::WHITE);
        assert_eq!(*frame.image().get_pixel(0, 0), colors::WHITE);
        assert_eq!(*frame.image().get_pixel(1, 1), colors::WHITE);
        assert_eq!(*frame.image().get_pixel(2, 2), colors::TRANSPARENT);
    }

    #[test]
    fn test_clear_rect() {
        let mut frame = FrameBuffer::new(2, 2);
        frame.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0), colors::WHITE);
        frame.clear_rect(Rect::new(0.0, 0.0, 1.0, 2.0));
        assert_eq!(*frame.image().get_pixel(0, 1), colors::TRANSPARENT);
        assert_eq!(*frame.image().get_pixel(1, 1), colors::WHITE);
    }

    #[test]
    fn test_stroke_rect_leaves_inside_untouched() {
        let mut frame = FrameBuffer::new(10, 10);
        frame.stroke_rect(Rect::new(0.0, 0.0, 10.0, 10.0), colors::WHITE, 2.0);
        assert_eq!(*frame.image().get_pixel(0, 5), colors::WHITE);
        assert_eq!(*frame.image().get_pixel(9, 5), colors::WHITE);
        assert_eq!(*frame.image().get_pixel(5, 1), colors::WHITE);
        assert_eq!(*frame.image().get_pixel(5, 5), colors::TRANSPARENT);
    }

    #[test]
    fn test_draw_image_picks_source_frame() {
        // Two-frame strip: red frame then blue frame
        let mut strip = RgbaImage::new(4, 2);
        for y in 0..2 {
            strip.put_pixel(0, y, Rgba([255, 0, 0, 255]));
            strip.put_pixel(1, y, Rgba([255, 0, 0, 255]));
            strip.put_pixel(2, y, Rgba([0, 0, 255, 255]));
            strip.put_pixel(3, y, Rgba([0, 0, 255, 255]));
        }

        let mut frame = FrameBuffer::new(8, 8);
        frame.draw_image(
            &strip,
            Rect::new(2.0, 0.0, 2.0, 2.0),
            Rect::new(0.0, 0.0, 4.0, 4.0),
        );
        assert_eq!(*frame.image().get_pixel(0, 0), Rgba([0, 0, 255, 255]));
        assert_eq!(*frame.image().get_pixel(3, 3), Rgba([0, 0, 255, 255]));
        assert_eq!(*frame.image().get_pixel(4, 4), colors::TRANSPARENT);
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut frame = FrameBuffer::new(1, 1);
        frame.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), colors::WHITE);
        frame.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), colors::DIALOGUE_BOX);
        let pixel = frame.image().get_pixel(0, 0);
        assert!(pixel.0[0] < 255 && pixel.0[0] > 0);
    }

    #[test]
    fn test_fill_text_draws_above_baseline() {
        let mut frame = FrameBuffer::new(40, 40);
        frame.fill_text("I", 0.0, 20.0, colors::WHITE);
        let mut lit_rows = Vec::new();
        for y in 0..40 {
            for x in 0..40 {
                if frame.image().get_pixel(x, y).0[3] > 0 {
                    lit_rows.push(y);
                }
            }
        }
        assert!(!lit_rows.is_empty());
        assert!(lit_rows.iter().all(|&y| y < 20));
    }

    #[test]
    fn test_measure_text_matches_font() {
        let frame = FrameBuffer::new(1, 1);
        assert_eq!(frame.measure_text("hello"), font::text_width("hello"));
    }
}
