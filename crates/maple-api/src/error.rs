//! API 클라이언트 에러 타입.

use maple_core::{ConfigError, DateError, QueryError, RuleError};
use thiserror::Error;

use crate::codes::ApiErrorCode;

/// API 클라이언트 에러.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 요청 전 검증 실패 (네트워크 호출 없음)
    #[error("Query rejected: {0}")]
    Query(#[from] QueryError),

    /// 잘못된 인자 (빈 이름, 0 페이지 등)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 업스트림이 에러 코드로 응답
    #[error("API error {code} (HTTP {status}): {message}")]
    Upstream {
        status: u16,
        code: ApiErrorCode,
        message: String,
    },

    /// 에러 본문 없는 HTTP 실패
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    Network(String),

    /// 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 응답 파싱 에러
    #[error("Parse error: {0}")]
    Parse(String),

    /// 설정 에러
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// 재시도하면 성공할 수 있는 에러인지 확인.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Timeout(_) => true,
            ApiError::Upstream { code, .. } => code.is_retryable(),
            ApiError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// 요청 전 로컬 검증에서 실패했는지 확인.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Query(_) | ApiError::InvalidArgument(_))
    }

    /// 업스트림 에러 코드.
    pub fn upstream_code(&self) -> Option<&ApiErrorCode> {
        match self {
            ApiError::Upstream { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<DateError> for ApiError {
    fn from(err: DateError) -> Self {
        ApiError::Query(err.into())
    }
}

impl From<RuleError> for ApiError {
    fn from(err: RuleError) -> Self {
        ApiError::Query(err.into())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

/// API 호출 Result 타입.
pub type ApiResult<T> = Result<T, ApiError>;
