use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorksheetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("PNG encoding failed: {0}")]
    EncodingError(#[from] png::EncodingError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Font error ({path}): {message}")]
    FontError { path: String, message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Rendering error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Rendering,
    Configuration,
    Font,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WorksheetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WorksheetError::IoError(_) => ErrorCategory::Io,
            WorksheetError::EncodingError(_)
            | WorksheetError::SerializationError(_)
            | WorksheetError::RenderError { .. } => ErrorCategory::Rendering,
            WorksheetError::ConfigValidationError { .. }
            | WorksheetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            WorksheetError::FontError { .. } => ErrorCategory::Font,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 字型失敗會退回內建字型
            ErrorCategory::Font => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Rendering => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the output directory is writable and the disk is not full",
            ErrorCategory::Rendering => "Re-run with -v to see which sheet failed to render",
            ErrorCategory::Configuration => "Fix the configuration file or remove it to use defaults",
            ErrorCategory::Font => "Install a Korean font (Malgun Gothic or NanumGothic) or list one under [fonts]",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WorksheetError::IoError(e) => format!("파일을 저장할 수 없습니다: {}", e),
            WorksheetError::EncodingError(e) => format!("PNG 변환에 실패했습니다: {}", e),
            WorksheetError::SerializationError(e) => format!("문제 목록을 출력할 수 없습니다: {}", e),
            WorksheetError::FontError { path, .. } => format!("폰트를 불러올 수 없습니다: {}", path),
            WorksheetError::ConfigValidationError { field, message } => {
                format!("설정 오류 ({}): {}", field, message)
            }
            WorksheetError::InvalidConfigValueError { field, value, reason } => {
                format!("설정 값이 올바르지 않습니다 ({} = {}): {}", field, value, reason)
            }
            WorksheetError::RenderError { message } => format!("이미지 생성 실패: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, WorksheetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_errors_are_low_severity() {
        let err = WorksheetError::FontError {
            path: "malgun.ttf".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Font);
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err: WorksheetError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("denied"));
    }
}
