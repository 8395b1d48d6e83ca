use crate::utils::error::{Result, WorksheetError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(WorksheetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(WorksheetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(WorksheetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 位置參數的解析規則。輸入無效時不報錯，改用預設值並附上警告。
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub min: u32,
    pub max: Option<u32>,
    pub default: u32,
    pub range_warning: &'static str,
    pub parse_warning: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArg {
    pub value: u32,
    pub warning: Option<String>,
}

impl ArgSpec {
    pub fn resolve(&self, raw: Option<&str>) -> ResolvedArg {
        let Some(raw) = raw else {
            return ResolvedArg {
                value: self.default,
                warning: None,
            };
        };

        match raw.trim().parse::<i64>() {
            Ok(n) if self.accepts(n) => ResolvedArg {
                value: n as u32,
                warning: None,
            },
            Ok(_) => self.fallback(self.range_warning),
            Err(_) => self.fallback(self.parse_warning),
        }
    }

    fn accepts(&self, n: i64) -> bool {
        n >= i64::from(self.min) && self.max.map_or(n <= i64::from(u32::MAX), |max| n <= i64::from(max))
    }

    fn fallback(&self, message: &str) -> ResolvedArg {
        ResolvedArg {
            value: self.default,
            warning: Some(format!("⚠ {} 기본값({})을 사용합니다.", message, self.default)),
        }
    }
}

pub const MAX_SHEETS_PER_RUN: u32 = 100;

pub const DIFFICULTY_ARG: ArgSpec = ArgSpec {
    name: "difficulty",
    min: 1,
    max: Some(4),
    default: 3,
    range_warning: "난이도는 1~4 사이로 입력하세요.",
    parse_warning: "올바른 난이도 숫자를 입력하세요.",
};

pub const DIGITS_ARG: ArgSpec = ArgSpec {
    name: "digits",
    min: 1,
    max: Some(4),
    default: 3,
    range_warning: "자릿수는 1~4 사이로 입력하세요.",
    parse_warning: "올바른 숫자를 입력하세요.",
};

pub const COUNT_ARG: ArgSpec = ArgSpec {
    name: "count",
    min: 1,
    max: Some(MAX_SHEETS_PER_RUN),
    default: 1,
    range_warning: "개수는 1~100 사이로 입력하세요.",
    parse_warning: "올바른 개수 숫자를 입력하세요.",
};
