pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, SheetCommand};

pub use config::cli::LocalStorage;
pub use crate::core::{
    engine::WorksheetEngine,
    sheets::{AdditionSheet, ReadingSheet, Worksheet},
};
pub use domain::korean::number_to_korean;
pub use domain::model::{AdditionProblem, Difficulty, Digits, ReadingProblem};
pub use render::FontSet;
pub use utils::error::{Result, WorksheetError};
