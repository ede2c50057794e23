// Drawing surface abstraction used by all game-side rendering

use crate::core::math::Rect;
use image::{Rgba, RgbaImage};

/// RGBA colour, 8 bits per channel, straight alpha
pub type Color = Rgba<u8>;

/// Frequently used colours
pub mod colors {
    use super::Color;
    use image::Rgba;

    pub const WHITE: Color = Rgba([255, 255, 255, 255]);
    pub const YELLOW: Color = Rgba([255, 255, 0, 255]);
    pub const DIALOGUE_BOX: Color = Rgba([0, 0, 0, 204]);
    pub const SKY: Color = Rgba([92, 148, 252, 255]);
    pub const DEBUG_BODY: Color = Rgba([0, 255, 0, 204]);
    pub const DEBUG_PLATFORM: Color = Rgba([128, 128, 128, 204]);
    pub const DEBUG_EXIT: Color = Rgba([255, 64, 64, 204]);
    pub const TRANSPARENT: Color = Rgba([0, 0, 0, 0]);
}

/// A 2D drawing surface in the style of an HTML canvas context.
///
/// Game code only ever picks source and destination rectangles; pixel work
/// happens behind this trait.
pub trait Canvas {
    /// Surface size in pixels (width, height)
    fn size(&self) -> (f32, f32);

    /// Reset a region to fully transparent
    fn clear_rect(&mut self, rect: Rect);

    /// Fill a region with a colour (alpha blended)
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline a region, drawing the border inside the rectangle
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32);

    /// Copy `src` (image pixels) into `dst` (surface pixels), scaling as needed
    fn draw_image(&mut self, image: &RgbaImage, src: Rect, dst: Rect);

    /// Draw a single line of text with its baseline at `y`
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color);

    /// Width in pixels `text` would occupy when drawn
    fn measure_text(&self, text: &str) -> f32;
}
