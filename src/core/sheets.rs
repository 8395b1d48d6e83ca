use crate::core::generator::{generate_addition_problem, generate_batch, generate_reading_problem};
use crate::domain::model::{AdditionProblem, Difficulty, Digits, ReadingProblem, SheetKind};
use crate::render::canvas::Sheet;
use crate::render::font::FontSet;
use crate::render::layout::{a4_fit_spacing, shrink_to_fit, TwoColumnLayout};
use crate::utils::error::{Result, WorksheetError};
use chrono::NaiveDate;
use image::RgbImage;
use rand::Rng;
use serde::Serialize;

/// One kind of printable sheet: how its problems are drawn and laid out.
pub trait Worksheet {
    type Problem: Serialize;

    fn kind(&self) -> SheetKind;

    /// File name prefix, before the timestamp.
    fn file_stem(&self) -> String;

    fn problem_count(&self) -> usize;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Self::Problem>;

    fn render(&self, problems: &[Self::Problem], fonts: &FontSet, date: NaiveDate) -> Result<RgbImage>;
}

fn check_capacity(kind: SheetKind, count: usize, layout: &TwoColumnLayout) -> Result<()> {
    if count > layout.capacity() {
        return Err(WorksheetError::RenderError {
            message: format!(
                "{} sheet holds {} problems, got {}",
                kind,
                layout.capacity(),
                count
            ),
        });
    }
    Ok(())
}

pub const ADDITION_PROBLEMS: usize = 30;
const ADDITION_ROWS: usize = 15;
const ADDITION_SPACING: u32 = 190;
const ADDITION_SIZE: f32 = 60.0;
const ADDITION_DATE_OFFSET: i32 = 300;

#[derive(Debug, Clone, Copy, Default)]
pub struct AdditionSheet {
    pub difficulty: Difficulty,
}

impl AdditionSheet {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }
}

impl Worksheet for AdditionSheet {
    type Problem = AdditionProblem;

    fn kind(&self) -> SheetKind {
        SheetKind::Addition
    }

    fn file_stem(&self) -> String {
        format!("addition_problems_{}", self.difficulty)
    }

    fn problem_count(&self) -> usize {
        ADDITION_PROBLEMS
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<AdditionProblem> {
        generate_batch(ADDITION_PROBLEMS, rng, |rng| {
            generate_addition_problem(self.difficulty, rng)
        })
    }

    fn render(&self, problems: &[AdditionProblem], fonts: &FontSet, date: NaiveDate) -> Result<RgbImage> {
        let layout = TwoColumnLayout::a4(ADDITION_ROWS, ADDITION_SPACING);
        check_capacity(self.kind(), problems.len(), &layout)?;

        let mut sheet = Sheet::a4();
        let date_text = format!("날짜: {}", date.format("%Y년 %m월 %d일"));
        sheet.draw_header(&fonts.korean, "덧셈 연습 문제", &date_text, ADDITION_DATE_OFFSET);

        for (i, problem) in problems.iter().enumerate() {
            let (x, y) = layout.position(i);
            sheet.draw_text(&fonts.latin, ADDITION_SIZE, x, y, &problem.equation());
        }

        Ok(sheet.into_image())
    }
}

pub const READING_PROBLEMS: usize = 36;
const READING_ROWS: usize = 18;
const READING_SIZE: f32 = 60.0;
const READING_DATE_OFFSET: i32 = 420;
const ANSWER_BLANK: &str = "답: __________";

#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingSheet {
    pub digits: Digits,
}

impl ReadingSheet {
    pub fn new(digits: Digits) -> Self {
        Self { digits }
    }

    pub fn title(&self) -> String {
        format!("{}자리 수 읽기 연습 (숫자 → 한글)", self.digits.get())
    }
}

impl Worksheet for ReadingSheet {
    type Problem = ReadingProblem;

    fn kind(&self) -> SheetKind {
        SheetKind::Reading
    }

    fn file_stem(&self) -> String {
        format!("reading_problems_{}digits", self.digits.get())
    }

    fn problem_count(&self) -> usize {
        READING_PROBLEMS
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<ReadingProblem> {
        generate_batch(READING_PROBLEMS, rng, |rng| {
            generate_reading_problem(self.digits, rng)
        })
    }

    fn render(&self, problems: &[ReadingProblem], fonts: &FontSet, _date: NaiveDate) -> Result<RgbImage> {
        let layout = TwoColumnLayout::a4(READING_ROWS, a4_fit_spacing(READING_ROWS));
        check_capacity(self.kind(), problems.len(), &layout)?;

        let mut sheet = Sheet::a4();
        sheet.draw_header(
            &fonts.korean,
            &self.title(),
            "날짜: ____년   ____월   ____일",
            READING_DATE_OFFSET,
        );

        let face = &fonts.korean;
        let size = shrink_to_fit(face, READING_SIZE, layout.spacing);
        tracing::debug!("Reading sheet: spacing {}px, font size {}", layout.spacing, size);

        for (i, problem) in problems.iter().enumerate() {
            let (x, y) = layout.position(i);
            sheet.draw_text(face, size, x, y, &problem.reading);

            let (reading_width, _) = face.measure(&problem.reading, size);
            let answer_x = layout.answer_x(x, reading_width);
            sheet.draw_text(face, size, answer_x, y, ANSWER_BLANK);
        }

        Ok(sheet.into_image())
    }
}
