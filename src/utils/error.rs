use thiserror::Error;

#[derive(Error, Debug)]
pub enum GiftFloorError {
    /// 網路層失敗（連線、DNS、讀取 body 等）
    #[error("{0}")]
    TransportError(#[from] reqwest::Error),

    /// 非 2xx 回應；message 為 API 的 `detail` 或通用狀態訊息
    #[error("{message}")]
    HttpStatusError { status: u16, message: String },

    /// 成功回應但 body 不符合預期結構
    #[error("Malformed response from {endpoint}: {source}")]
    DecodeError {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Selection error: {message}")]
    SelectionError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GiftFloorError {
    /// 建立非 2xx 回應錯誤；沒有 detail 時使用通用狀態訊息
    pub fn http_status(status: u16, detail: Option<String>) -> Self {
        let message = detail.unwrap_or_else(|| format!("HTTP error! status: {}", status));
        GiftFloorError::HttpStatusError { status, message }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GiftFloorError::TransportError(_) => ErrorCategory::Network,
            GiftFloorError::HttpStatusError { .. } => ErrorCategory::Api,
            GiftFloorError::DecodeError { .. } => ErrorCategory::Data,
            GiftFloorError::UrlError(_)
            | GiftFloorError::ConfigValidationError { .. }
            | GiftFloorError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GiftFloorError::SelectionError { .. } => ErrorCategory::Input,
            GiftFloorError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Api => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 顯示給使用者的訊息（結果區域與 CLI 共用）
    pub fn user_friendly_message(&self) -> String {
        match self {
            GiftFloorError::TransportError(e) if e.is_connect() => {
                format!("Cannot reach the pricing API: {}", e)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the pricing API is running and the base URL is correct",
            ErrorCategory::Api => "The API rejected the request; check the collection and filter values",
            ErrorCategory::Data => "The API returned an unexpected payload; check API version compatibility",
            ErrorCategory::Configuration => "Fix the configuration file or command line arguments",
            ErrorCategory::Input => "Run `gift-floor options --gift <name>` to list valid values",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, GiftFloorError>;
