use serde::{Deserialize, Serialize};
use std::fmt;

/// Addition exercise. Addends are kept in descending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionProblem {
    pub addends: Vec<u32>,
}

impl AdditionProblem {
    pub fn new(mut addends: Vec<u32>) -> Self {
        addends.sort_unstable_by(|a, b| b.cmp(a));
        Self { addends }
    }

    /// `"57 + 23 + 4 = __________"`
    pub fn equation(&self) -> String {
        let terms: Vec<String> = self.addends.iter().map(|n| n.to_string()).collect();
        format!("{} = __________", terms.join(" + "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingProblem {
    pub value: u32,
    pub reading: String,
}

/// Addition difficulty tier, 1 (easiest) to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(Self(level))
    }

    pub fn level(self) -> u8 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(3)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level{}", self.0)
    }
}

/// Number of digits for reading problems, 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digits(u8);

impl Digits {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(digits: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&digits).then_some(Self(digits))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Inclusive value range, e.g. 3 digits -> 100..=999.
    pub fn bounds(self) -> (u32, u32) {
        let low = 10u32.pow(u32::from(self.0) - 1);
        let high = 10u32.pow(u32::from(self.0)) - 1;
        (low, high)
    }
}

impl Default for Digits {
    fn default() -> Self {
        Self(3)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Addition,
    Reading,
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetKind::Addition => write!(f, "addition"),
            SheetKind::Reading => write!(f, "reading"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_problem_sorts_descending() {
        let problem = AdditionProblem::new(vec![4, 57, 23]);
        assert_eq!(problem.addends, vec![57, 23, 4]);
        assert_eq!(problem.equation(), "57 + 23 + 4 = __________");
    }

    #[test]
    fn test_digits_bounds() {
        assert_eq!(Digits::new(1).map(Digits::bounds), Some((1, 9)));
        assert_eq!(Digits::new(4).map(Digits::bounds), Some((1000, 9999)));
        assert!(Digits::new(0).is_none());
        assert!(Digits::new(5).is_none());
    }

    #[test]
    fn test_difficulty_range() {
        assert!(Difficulty::new(0).is_none());
        assert_eq!(Difficulty::new(2).map(Difficulty::level), Some(2));
        assert_eq!(Difficulty::default().to_string(), "level3");
    }
}
