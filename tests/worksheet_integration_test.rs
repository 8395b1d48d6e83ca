use chrono::{NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use tempfile::TempDir;
use worksheet_gen::{
    AdditionSheet, Difficulty, Digits, FontSet, LocalStorage, ReadingSheet, WorksheetEngine,
};

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn png_info(path: &std::path::Path) -> (u32, u32, Option<png::PixelDimensions>) {
    let decoder = png::Decoder::new(File::open(path).unwrap());
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    (info.width, info.height, info.pixel_dims)
}

#[test]
fn test_reading_sheets_written_as_a4_png_at_300_dpi() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("output");

    let engine = WorksheetEngine::new(
        ReadingSheet::new(Digits::new(2).unwrap()),
        LocalStorage::new(&output),
        FontSet::builtin(),
        300,
    );

    let mut rng = StdRng::seed_from_u64(2024);
    let saved = engine.run_at(2, &mut rng, timestamp()).unwrap();

    assert_eq!(
        saved,
        vec![
            output.join("reading_problems_2digits_20240305_093000_1.png"),
            output.join("reading_problems_2digits_20240305_093000_2.png"),
        ]
    );

    for path in &saved {
        let (width, height, dims) = png_info(path);
        assert_eq!((width, height), (2480, 3508));
        let dims = dims.expect("pHYs chunk missing");
        assert_eq!((dims.xppu, dims.yppu), (11811, 11811));
        assert_eq!(dims.unit, png::Unit::Meter);
    }
}

#[test]
fn test_single_addition_sheet_has_no_index_suffix() {
    let temp_dir = TempDir::new().unwrap();

    let engine = WorksheetEngine::new(
        AdditionSheet::new(Difficulty::new(1).unwrap()),
        LocalStorage::new(temp_dir.path()),
        FontSet::builtin(),
        300,
    );

    let mut rng = StdRng::seed_from_u64(5);
    let saved = engine.run_at(1, &mut rng, timestamp()).unwrap();

    assert_eq!(saved.len(), 1);
    assert_eq!(
        saved[0].file_name().and_then(|n| n.to_str()),
        Some("addition_problems_level1_20240305_093000.png")
    );
    assert!(saved[0].exists());
}

#[test]
fn test_dry_run_writes_nothing_and_lists_problems() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("output");

    let engine = WorksheetEngine::new(
        AdditionSheet::default(),
        LocalStorage::new(&output),
        FontSet::builtin(),
        300,
    );

    let mut rng = StdRng::seed_from_u64(8);
    let json = engine.dry_run(2, &mut rng, timestamp()).unwrap();
    assert!(!output.exists());

    let sheets: serde_json::Value = serde_json::from_str(&json).unwrap();
    let sheets = sheets.as_array().unwrap();
    assert_eq!(sheets.len(), 2);
    assert_eq!(
        sheets[1]["file_name"],
        "addition_problems_level3_20240305_093000_2.png"
    );

    let problems = sheets[0]["problems"].as_array().unwrap();
    assert_eq!(problems.len(), 30);
    for problem in problems {
        let addends: Vec<u64> = problem["addends"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_u64().unwrap())
            .collect();
        assert!(addends.len() == 2 || addends.len() == 3);
        assert!(addends.windows(2).all(|w| w[0] >= w[1]));
    }
}

#[test]
fn test_same_seed_gives_same_problems() {
    let engine = WorksheetEngine::new(
        ReadingSheet::default(),
        LocalStorage::new("unused"),
        FontSet::builtin(),
        300,
    );

    let first = engine
        .dry_run(1, &mut StdRng::seed_from_u64(77), timestamp())
        .unwrap();
    let second = engine
        .dry_run(1, &mut StdRng::seed_from_u64(77), timestamp())
        .unwrap();
    assert_eq!(first, second);
}
