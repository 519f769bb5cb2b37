//! 조회 검증 에러 타입.
//!
//! 날짜 검증(시간대, 범위, 조회 가능 기간)과 조회 규칙(date/cursor, count)
//! 실패를 나누어 정의합니다. 모든 검증 실패는 로컬에서 동기적으로 발생하며
//! 재시도 대상이 아닙니다.

use chrono::{FixedOffset, NaiveDate};
use thiserror::Error;

use crate::category::DataCategory;

/// 날짜/시각 검증 에러.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// 시간대 정보가 없는 naive 시각
    #[error("datetime should have timezone info.")]
    MissingTimezone,

    /// KST(UTC+9)가 아닌 시간대
    #[error("datetime should have KST timezone info. (got {offset})")]
    WrongTimezone { offset: FixedOffset },

    /// 허용 범위를 벗어난 날짜 구성 요소
    #[error("{component} is out of range: {value}")]
    OutOfRange { component: &'static str, value: i64 },

    /// 카테고리의 조회 가능 시작일 이전
    #[error("{category} data is queryable starting {floor} (requested {requested})")]
    BeforeQueryWindow {
        category: DataCategory,
        floor: NaiveDate,
        requested: NaiveDate,
    },

    /// 해석할 수 없는 날짜 문자열
    #[error("unrecognized date format: {input}")]
    InvalidFormat { input: String },
}

/// 조회 파라미터 규칙 에러.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// date와 cursor를 함께 지정
    #[error("date and cursor cannot be used together")]
    ConflictingDateAndCursor,

    /// date와 cursor 모두 누락
    #[error("either date or cursor must be provided")]
    MissingDateOrCursor,

    /// 정수가 아닌 count
    #[error("count must be an integer, got {found}")]
    InvalidCountType { found: String },

    /// 10~1000 범위를 벗어난 count
    #[error("count must be between 10 and 1000, got {count}")]
    CountOutOfRange { count: i128 },
}

/// 조회 요청 검증 에러.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl QueryError {
    /// 시간대 관련 에러인지 확인합니다.
    pub fn is_timezone_error(&self) -> bool {
        matches!(
            self,
            QueryError::Date(DateError::MissingTimezone | DateError::WrongTimezone { .. })
        )
    }

    /// 조회 가능 기간 위반인지 확인합니다.
    pub fn is_window_error(&self) -> bool {
        matches!(self, QueryError::Date(DateError::BeforeQueryWindow { .. }))
    }
}

/// 설정 로드 에러.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 설정 파일/환경 변수 로드 실패
    #[error("설정 로드 실패: {0}")]
    Load(#[from] config::ConfigError),

    /// 필수 환경 변수 누락
    #[error("환경 변수 누락: {0}")]
    MissingVar(&'static str),

    /// 해석할 수 없는 값
    #[error("잘못된 설정 값 {key}={value}")]
    InvalidValue { key: &'static str, value: String },

    /// dotenv 파일 읽기 실패
    #[error("dotenv 파일 로드 실패: {0}")]
    Dotenv(#[from] dotenvy::Error),
}

/// 날짜 검증 Result 타입.
pub type DateResult<T> = Result<T, DateError>;

/// 조회 검증 Result 타입.
pub type QueryResult<T> = Result<T, QueryError>;
