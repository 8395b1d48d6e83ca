pub mod engine;
pub mod generator;
pub mod sheets;

pub use crate::domain::model::{AdditionProblem, Difficulty, Digits, ReadingProblem, SheetKind};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
