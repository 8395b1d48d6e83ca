use crate::render::font::Typeface;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// A4 at 300 DPI.
pub const PAGE_WIDTH: u32 = 2480;
pub const PAGE_HEIGHT: u32 = 3508;
pub const PAGE_MARGIN: u32 = 200;

pub const TITLE_Y: i32 = 100;
pub const HEADER_Y: i32 = 220;
pub const RULE_Y: i32 = 320;

pub const TITLE_SIZE: f32 = 80.0;
pub const HEADER_SIZE: f32 = 50.0;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

pub struct Sheet {
    image: RgbImage,
}

impl Sheet {
    pub fn a4() -> Self {
        Self::new(PAGE_WIDTH, PAGE_HEIGHT)
    }

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, WHITE),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn draw_text(&mut self, face: &Typeface, size: f32, x: i32, y: i32, text: &str) {
        face.draw(&mut self.image, x, y, size, text, BLACK);
    }

    /// Draws `text` horizontally centred on the page.
    pub fn draw_centered(&mut self, face: &Typeface, size: f32, y: i32, text: &str) {
        let (text_width, _) = face.measure(text, size);
        let x = (self.width() / 2) as i32 - (text_width / 2) as i32;
        self.draw_text(face, size, x, y, text);
    }

    /// Horizontal rule between the page margins.
    pub fn draw_rule(&mut self, y: i32, thickness: u32) {
        let span = self.width().saturating_sub(2 * PAGE_MARGIN);
        if span == 0 || thickness == 0 {
            return;
        }
        let top = y - (thickness / 2) as i32;
        let rect = Rect::at(PAGE_MARGIN as i32, top).of_size(span, thickness);
        draw_filled_rect_mut(&mut self.image, rect, BLACK);
    }

    /// Title, name line, date line and the rule under them.
    pub fn draw_header(&mut self, face: &Typeface, title: &str, date_text: &str, date_offset: i32) {
        self.draw_centered(face, TITLE_SIZE, TITLE_Y, title);

        let width = self.width() as i32;
        self.draw_text(face, HEADER_SIZE, width / 4, HEADER_Y, "이름: ________________");
        self.draw_text(face, HEADER_SIZE, width * 3 / 4 - date_offset, HEADER_Y, date_text);

        self.draw_rule(RULE_Y, 3);
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_sheet_starts_white() {
        let image = Sheet::a4().into_image();
        assert_eq!(image.dimensions(), (2480, 3508));
        assert!(image.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_rule_spans_margins() {
        let mut sheet = Sheet::new(1000, 400);
        sheet.draw_rule(RULE_Y, 3);
        let image = sheet.into_image();

        assert_eq!(*image.get_pixel(200, 320), BLACK);
        assert_eq!(*image.get_pixel(799, 321), BLACK);
        assert_eq!(*image.get_pixel(199, 320), WHITE);
        assert_eq!(*image.get_pixel(800, 320), WHITE);
        assert_eq!(*image.get_pixel(500, 323), WHITE);
    }

    #[test]
    fn test_centered_text_is_symmetric_with_builtin_face() {
        let mut sheet = Sheet::new(120, 40);
        // 8 px 字：每字寬 6 px，"__" 寬 12 px
        sheet.draw_centered(&Typeface::Builtin, 8.0, 0, "__");
        let image = sheet.into_image();

        assert_eq!(*image.get_pixel(54, 6), BLACK);
        assert_eq!(*image.get_pixel(53, 6), WHITE);
    }
}
