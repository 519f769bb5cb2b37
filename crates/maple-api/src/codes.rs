//! 업스트림 에러 코드.
//!
//! 실패 응답 본문은 다음 형태입니다:
//!
//! ```json
//! {"error": {"name": "OPENAPI00004", "message": "Please input valid parameter"}}
//! ```

use serde::Deserialize;
use std::fmt;

/// Open API 에러 코드 (`error.name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    /// OPENAPI00001
    InternalServerError,
    /// OPENAPI00002
    Forbidden,
    /// OPENAPI00003
    InvalidIdentifier,
    /// OPENAPI00004
    InvalidParameter,
    /// OPENAPI00005
    InvalidApiKey,
    /// OPENAPI00006
    InvalidPath,
    /// OPENAPI00007
    RateLimitExceeded,
    /// OPENAPI00009
    DataPreparing,
    /// OPENAPI00010
    GameMaintenance,
    /// OPENAPI00011
    ApiMaintenance,
    /// 알 수 없는 코드
    Unknown(String),
}

impl ApiErrorCode {
    /// 코드 문자열에서 변환합니다. 대소문자를 구분합니다.
    pub fn from_code(code: &str) -> Self {
        match code {
            "OPENAPI00001" => ApiErrorCode::InternalServerError,
            "OPENAPI00002" => ApiErrorCode::Forbidden,
            "OPENAPI00003" => ApiErrorCode::InvalidIdentifier,
            "OPENAPI00004" => ApiErrorCode::InvalidParameter,
            "OPENAPI00005" => ApiErrorCode::InvalidApiKey,
            "OPENAPI00006" => ApiErrorCode::InvalidPath,
            "OPENAPI00007" => ApiErrorCode::RateLimitExceeded,
            "OPENAPI00009" => ApiErrorCode::DataPreparing,
            "OPENAPI00010" => ApiErrorCode::GameMaintenance,
            "OPENAPI00011" => ApiErrorCode::ApiMaintenance,
            other => ApiErrorCode::Unknown(other.to_string()),
        }
    }

    /// 코드 문자열.
    pub fn code(&self) -> &str {
        match self {
            ApiErrorCode::InternalServerError => "OPENAPI00001",
            ApiErrorCode::Forbidden => "OPENAPI00002",
            ApiErrorCode::InvalidIdentifier => "OPENAPI00003",
            ApiErrorCode::InvalidParameter => "OPENAPI00004",
            ApiErrorCode::InvalidApiKey => "OPENAPI00005",
            ApiErrorCode::InvalidPath => "OPENAPI00006",
            ApiErrorCode::RateLimitExceeded => "OPENAPI00007",
            ApiErrorCode::DataPreparing => "OPENAPI00009",
            ApiErrorCode::GameMaintenance => "OPENAPI00010",
            ApiErrorCode::ApiMaintenance => "OPENAPI00011",
            ApiErrorCode::Unknown(code) => code,
        }
    }

    /// 한글 설명.
    pub fn description(&self) -> &'static str {
        match self {
            ApiErrorCode::InternalServerError => "서버 내부 오류",
            ApiErrorCode::Forbidden => "권한이 없는 경우",
            ApiErrorCode::InvalidIdentifier => "유효하지 않은 식별자",
            ApiErrorCode::InvalidParameter => "요청 파라미터 누락 또는 유효하지 않은 파라미터",
            ApiErrorCode::InvalidApiKey => "유효하지 않은 API KEY",
            ApiErrorCode::InvalidPath => "유효하지 않은 게임 또는 API PATH",
            ApiErrorCode::RateLimitExceeded => "API 호출량 초과",
            ApiErrorCode::DataPreparing => "데이터 준비 중",
            ApiErrorCode::GameMaintenance => "게임 점검 중",
            ApiErrorCode::ApiMaintenance => "API 점검 중",
            ApiErrorCode::Unknown(_) => "알 수 없는 오류",
        }
    }

    /// 잠시 후 다시 요청하면 성공할 수 있는 코드인지 확인합니다.
    ///
    /// 분류만 제공하며 클라이언트는 재시도하지 않습니다.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiErrorCode::InternalServerError
                | ApiErrorCode::RateLimitExceeded
                | ApiErrorCode::DataPreparing
                | ApiErrorCode::GameMaintenance
                | ApiErrorCode::ApiMaintenance
        )
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 실패 응답 본문.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub name: String,
    #[serde(default)]
    pub message: String,
}
