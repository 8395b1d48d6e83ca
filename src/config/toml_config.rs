use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, WorksheetError};
use crate::utils::validation::{validate_path, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_DPI: u32 = 300;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub output: OutputConfig,
    pub fonts: FontConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: String,
    pub dpi: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: DEFAULT_OUTPUT_DIR.to_string(),
            dpi: DEFAULT_DPI,
        }
    }
}

/// Candidate font files, tried in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub korean: Vec<String>,
    pub latin: Vec<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            korean: vec![
                "malgun.ttf".to_string(),
                "NanumGothic.ttf".to_string(),
                "AppleSDGothicNeo.ttc".to_string(),
                "NotoSansCJK-Regular.ttc".to_string(),
            ],
            latin: vec!["arial.ttf".to_string(), "DejaVuSans.ttf".to_string()],
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WorksheetError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WorksheetError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WorksheetError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output.dir", &self.output.dir)?;
        validate_range("output.dpi", self.output.dpi, 72, 1200)?;

        for (field, candidates) in [("fonts.korean", &self.fonts.korean), ("fonts.latin", &self.fonts.latin)] {
            for candidate in candidates {
                validate_path(field, candidate)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        &self.output.dir
    }

    fn dpi(&self) -> u32 {
        self.output.dpi
    }
}
