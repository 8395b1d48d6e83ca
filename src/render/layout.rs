use crate::render::canvas::{PAGE_HEIGHT, PAGE_MARGIN, PAGE_WIDTH};
use crate::render::font::Typeface;

pub const COLUMN_GAP: u32 = 100;
pub const CONTENT_Y: i32 = 420;
pub const BOTTOM_MARGIN: u32 = 200;

const MIN_SPACING: u32 = 10;
const LINE_PADDING: u32 = 8;
const MIN_FONT_SIZE: f32 = 18.0;
const FONT_STEP: f32 = 2.0;

const ANSWER_PADDING: i32 = 30;
const ANSWER_WIDTH: i32 = 300;
const COLUMN_RIGHT_INSET: i32 = 40;
const ANSWER_MIN_GAP: i32 = 10;

/// Two columns filled top to bottom, left column first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoColumnLayout {
    pub left_x: i32,
    pub right_x: i32,
    pub column_width: u32,
    pub start_y: i32,
    pub rows_per_column: usize,
    pub spacing: u32,
}

impl TwoColumnLayout {
    pub fn new(page_width: u32, rows_per_column: usize, spacing: u32) -> Self {
        let column_width = page_width.saturating_sub(2 * PAGE_MARGIN) / 2;
        Self {
            left_x: PAGE_MARGIN as i32,
            right_x: (PAGE_MARGIN + column_width + COLUMN_GAP) as i32,
            column_width,
            start_y: CONTENT_Y,
            rows_per_column,
            spacing,
        }
    }

    pub fn a4(rows_per_column: usize, spacing: u32) -> Self {
        Self::new(PAGE_WIDTH, rows_per_column, spacing)
    }

    pub fn capacity(&self) -> usize {
        self.rows_per_column * 2
    }

    pub fn position(&self, index: usize) -> (i32, i32) {
        let (x, row) = if index < self.rows_per_column {
            (self.left_x, index)
        } else {
            (self.right_x, index - self.rows_per_column)
        };
        (x, self.start_y + (row as u32 * self.spacing) as i32)
    }

    /// Answer blank x: just right of the item text, kept inside the column.
    pub fn answer_x(&self, x: i32, text_width: u32) -> i32 {
        let text_width = text_width as i32;
        let column_right = x + self.column_width as i32 - COLUMN_RIGHT_INSET;
        let blank_x = (x + text_width + ANSWER_PADDING).min(column_right - ANSWER_WIDTH);

        if blank_x < x + text_width + ANSWER_MIN_GAP {
            x + self.column_width as i32 - ANSWER_WIDTH
        } else {
            blank_x
        }
    }
}

/// Row spacing that spreads `rows_per_column` rows over the usable page height.
pub fn fit_spacing(page_height: u32, rows_per_column: usize) -> u32 {
    let available = page_height
        .saturating_sub(CONTENT_Y as u32)
        .saturating_sub(BOTTOM_MARGIN);
    let gaps = rows_per_column.saturating_sub(1).max(1) as u32;
    (available / gaps).max(MIN_SPACING)
}

pub fn a4_fit_spacing(rows_per_column: usize) -> u32 {
    fit_spacing(PAGE_HEIGHT, rows_per_column)
}

/// Shrinks `size` in 2 px steps until a line fits in `spacing`.
/// The built-in face keeps its size.
pub fn shrink_to_fit(face: &Typeface, size: f32, spacing: u32) -> f32 {
    if face.is_builtin() {
        return size;
    }

    let mut size = size;
    let mut line_height = face.measure("0", size).1;
    while line_height + LINE_PADDING > spacing && size > MIN_FONT_SIZE {
        size -= FONT_STEP;
        line_height = face.measure("0", size).1;
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_columns() {
        let layout = TwoColumnLayout::a4(15, 190);
        assert_eq!(layout.column_width, 1040);
        assert_eq!(layout.left_x, 200);
        assert_eq!(layout.right_x, 1340);
        assert_eq!(layout.capacity(), 30);
    }

    #[test]
    fn test_positions_fill_left_column_first() {
        let layout = TwoColumnLayout::a4(15, 190);
        assert_eq!(layout.position(0), (200, 420));
        assert_eq!(layout.position(14), (200, 420 + 14 * 190));
        assert_eq!(layout.position(15), (1340, 420));
        assert_eq!(layout.position(29), (1340, 420 + 14 * 190));
    }

    #[test]
    fn test_fit_spacing_for_reading_sheet() {
        // (3508 - 420 - 200) / 17
        assert_eq!(a4_fit_spacing(18), 169);
        assert_eq!(fit_spacing(500, 18), MIN_SPACING);
        assert_eq!(fit_spacing(3508, 1), 2888);
    }

    #[test]
    fn test_answer_blank_follows_short_text() {
        let layout = TwoColumnLayout::a4(18, 169);
        assert_eq!(layout.answer_x(200, 200), 430);
    }

    #[test]
    fn test_answer_blank_clamped_to_column() {
        let layout = TwoColumnLayout::a4(18, 169);
        // column_right - 300 = 200 + 1040 - 40 - 300 = 900
        assert_eq!(layout.answer_x(200, 680), 900);
        // 文字太長時移到欄位右側
        assert_eq!(layout.answer_x(200, 800), 200 + 1040 - 300);
    }

    #[test]
    fn test_builtin_face_is_not_shrunk() {
        assert_eq!(shrink_to_fit(&Typeface::Builtin, 60.0, 20), 60.0);
    }
}
