//! Built-in 5x7 dot-matrix face, used when no outline font can be loaded.
//! Hangul and other unmapped characters draw as a hollow box.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

const GLYPH_ROWS: u32 = 7;
const GLYPH_COLS: u32 = 5;
const ADVANCE_COLS: u32 = 6;
const CELL_ROWS: u32 = 8;

const MISSING: [u8; 7] = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

fn glyph(c: char) -> [u8; 7] {
    match c {
        ' ' => [0; 7],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
        '=' => [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        '>' | '→' => [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08],
        _ => MISSING,
    }
}

fn dot_size(size: f32) -> u32 {
    ((size / CELL_ROWS as f32).round() as u32).max(1)
}

pub fn measure(text: &str, size: f32) -> (u32, u32) {
    let dot = dot_size(size);
    let chars = text.chars().count() as u32;
    (chars * ADVANCE_COLS * dot, GLYPH_ROWS * dot)
}

pub fn draw(image: &mut RgbImage, x: i32, y: i32, size: f32, text: &str, color: Rgb<u8>) {
    let dot = dot_size(size);
    let mut pen_x = x;

    for c in text.chars() {
        let rows = glyph(c);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if bits & (1 << (GLYPH_COLS - 1 - col)) == 0 {
                    continue;
                }
                let rect = Rect::at(pen_x + (col * dot) as i32, y + (row as u32 * dot) as i32)
                    .of_size(dot, dot);
                draw_filled_rect_mut(image, rect, color);
            }
        }
        pen_x += (ADVANCE_COLS * dot) as i32;
    }
}
