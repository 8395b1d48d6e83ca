use crate::core::sheets::Worksheet;
use crate::domain::ports::Storage;
use crate::render::encode::encode_png;
use crate::render::font::FontSet;
use crate::utils::error::Result;
use chrono::NaiveDateTime;
use rand::Rng;
use serde::Serialize;
use std::path::PathBuf;

/// `{stem}_{YYYYmmdd_HHMMSS}.png`, with a 1-based `_{n}` suffix for multi-sheet runs.
pub fn output_file_name(stem: &str, timestamp: NaiveDateTime, index: usize, total: usize) -> String {
    let ts = timestamp.format("%Y%m%d_%H%M%S");
    if total <= 1 {
        format!("{}_{}.png", stem, ts)
    } else {
        format!("{}_{}_{}.png", stem, ts, index + 1)
    }
}

#[derive(Serialize)]
struct DryRunSheet<'a, P: Serialize> {
    file_name: String,
    problems: &'a [P],
}

pub struct WorksheetEngine<W: Worksheet, S: Storage> {
    sheet: W,
    storage: S,
    fonts: FontSet,
    dpi: u32,
}

impl<W: Worksheet, S: Storage> WorksheetEngine<W, S> {
    pub fn new(sheet: W, storage: S, fonts: FontSet, dpi: u32) -> Self {
        Self {
            sheet,
            storage,
            fonts,
            dpi,
        }
    }

    pub fn run<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<PathBuf>> {
        self.run_at(count, rng, chrono::Local::now().naive_local())
    }

    /// Generates, renders and stores `count` sheets stamped with `now`.
    pub fn run_at<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
        now: NaiveDateTime,
    ) -> Result<Vec<PathBuf>> {
        tracing::info!("🚀 Generating {} {} sheet(s)", count, self.sheet.kind());

        let mut saved = Vec::new();
        for index in 0..count {
            let problems = self.sheet.generate(rng);
            tracing::debug!(
                "Generated {}/{} problems for sheet {}",
                problems.len(),
                self.sheet.problem_count(),
                index + 1
            );

            let image = self.sheet.render(&problems, &self.fonts, now.date())?;
            let bytes = encode_png(&image, self.dpi)?;

            let file_name = output_file_name(&self.sheet.file_stem(), now, index, count);
            let path = self.storage.write_file(&file_name, &bytes)?;
            tracing::info!("📁 Saved {} ({} bytes)", path.display(), bytes.len());
            saved.push(path);
        }

        Ok(saved)
    }

    /// Generates the problems only and returns them as pretty JSON.
    pub fn dry_run<R: Rng + ?Sized>(&self, count: usize, rng: &mut R, now: NaiveDateTime) -> Result<String> {
        let batches: Vec<_> = (0..count).map(|_| self.sheet.generate(rng)).collect();
        let sheets: Vec<_> = batches
            .iter()
            .enumerate()
            .map(|(index, problems)| DryRunSheet {
                file_name: output_file_name(&self.sheet.file_stem(), now, index, count),
                problems,
            })
            .collect();

        Ok(serde_json::to_string_pretty(&sheets)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap()
    }

    #[test]
    fn test_run_writes_one_file_per_sheet() {
        use crate::config::cli::LocalStorage;
        use crate::core::sheets::ReadingSheet;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let dir = tempfile::TempDir::new().unwrap();
        let engine = WorksheetEngine::new(
            ReadingSheet::default(),
            LocalStorage::new(dir.path()),
            FontSet::builtin(),
            300,
        );
        let saved = engine
            .run_at(1, &mut StdRng::seed_from_u64(4), timestamp())
            .unwrap();
        assert_eq!(saved, vec![dir.path().join("reading_problems_3digits_20240305_140709.png")]);
    }

    #[test]
    fn test_single_sheet_file_name() {
        assert_eq!(
            output_file_name("reading_problems_3digits", timestamp(), 0, 1),
            "reading_problems_3digits_20240305_140709.png"
        );
    }

    #[test]
    fn test_multi_sheet_file_names_are_numbered() {
        assert_eq!(
            output_file_name("addition_problems_level3", timestamp(), 0, 3),
            "addition_problems_level3_20240305_140709_1.png"
        );
        assert_eq!(
            output_file_name("addition_problems_level3", timestamp(), 2, 3),
            "addition_problems_level3_20240305_140709_3.png"
        );
    }
}
