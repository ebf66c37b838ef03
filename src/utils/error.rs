use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Invalid producer interval: {message}")]
    InvalidInterval { message: String },

    #[error("Invalid win record at position {index}: {reason}")]
    InvalidWinRecord { index: usize, reason: String },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Source '{location}' unavailable: {message}")]
    SourceError { location: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 資料內容問題 (CSV 列、得獎紀錄)
    Data,
    /// 不變量被破壞，代表程式本身有缺陷
    Internal,
    Source,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::InvalidWinRecord { .. } | EtlError::ValidationError { .. } => {
                ErrorCategory::Data
            }
            EtlError::CsvError(_) => ErrorCategory::Data,
            EtlError::InvalidInterval { .. } => ErrorCategory::Internal,
            EtlError::HttpError(_) | EtlError::SourceError { .. } => ErrorCategory::Source,
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EtlError::ZipError(_) | EtlError::IoError(_) | EtlError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Source => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Internal | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// HTTP status a presentation layer should answer with.
    ///
    /// Bad input maps to 4xx, a broken interval invariant to 5xx.
    pub fn http_status(&self) -> u16 {
        match self.category() {
            ErrorCategory::Data | ErrorCategory::Configuration => 400,
            ErrorCategory::Source => 502,
            ErrorCategory::Internal | ErrorCategory::System => 500,
        }
    }

    /// Stable machine-readable code for structured error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            EtlError::InvalidInterval { .. } => "INVALID_INTERVAL",
            EtlError::InvalidWinRecord { .. } => "INVALID_WIN_RECORD",
            EtlError::ValidationError { .. } | EtlError::CsvError(_) => "VALIDATION_ERROR",
            EtlError::HttpError(_) | EtlError::SourceError { .. } => "SOURCE_UNAVAILABLE",
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. } => "CONFIGURATION_ERROR",
            _ => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::InvalidWinRecord { index, reason } => {
                format!("Winning record #{} is malformed: {}", index, reason)
            }
            EtlError::ValidationError { message } => format!("The catalogue is malformed: {}", message),
            EtlError::CsvError(e) => format!("The catalogue could not be read as CSV: {}", e),
            EtlError::InvalidInterval { .. } => {
                "An internal error occurred while computing producer intervals".to_string()
            }
            EtlError::HttpError(_) | EtlError::SourceError { .. } => {
                format!("Could not download the catalogue: {}", self)
            }
            EtlError::MissingConfigError { field } => {
                format!("Missing configuration value: {}", field)
            }
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value {} is invalid: {}", field, reason)
            }
            EtlError::ConfigError { message } => format!("Configuration problem: {}", message),
            EtlError::IoError(e) => format!("File system error: {}", e),
            EtlError::ZipError(_) | EtlError::SerializationError(_) => {
                format!("Could not write the output: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Data => {
                "Check the catalogue file: header 'year;title;studios;producers;winner', 4-digit years"
            }
            ErrorCategory::Internal => "This is a bug, please report it together with the input file",
            ErrorCategory::Source => "Check the source URL or network connection and retry",
            ErrorCategory::Configuration => "Review the command line options or the TOML config file",
            ErrorCategory::System => "Check file permissions and free disk space in the output path",
        }
    }
}
