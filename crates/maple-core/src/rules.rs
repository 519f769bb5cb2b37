//! 페이지 조회 파라미터 규칙.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::RuleError;
use crate::request::PageCursor;

/// date와 cursor 중 정확히 하나만 허용하는 규칙.
///
/// 빈 cursor 문자열은 지정하지 않은 것으로 봅니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateCursorRule;

impl DateCursorRule {
    /// date/cursor 조합을 검사합니다.
    pub fn check<D>(date: Option<&D>, cursor: Option<&PageCursor>) -> Result<(), RuleError> {
        let has_cursor = cursor.is_some_and(|c| !c.is_empty());

        match (date.is_some(), has_cursor) {
            (true, true) => Err(RuleError::ConflictingDateAndCursor),
            (false, false) => Err(RuleError::MissingDateOrCursor),
            _ => Ok(()),
        }
    }
}

/// 검증된 페이지 크기 (10~1000).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct ResultCount(u32);

impl ResultCount {
    /// 페이지 크기 값.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for ResultCount {
    fn default() -> Self {
        ResultCount(ResultCountRule::DEFAULT)
    }
}

impl fmt::Display for ResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for ResultCount {
    type Error = RuleError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        ResultCountRule::check(count)
    }
}

impl From<ResultCount> for u32 {
    fn from(count: ResultCount) -> Self {
        count.0
    }
}

/// 페이지 크기 규칙.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultCountRule;

impl ResultCountRule {
    /// 최소 페이지 크기
    pub const MIN: u32 = 10;
    /// 최대 페이지 크기
    pub const MAX: u32 = 1000;
    /// 기본 페이지 크기
    pub const DEFAULT: u32 = 10;

    /// 정수 페이지 크기를 검사합니다.
    pub fn check(count: i64) -> Result<ResultCount, RuleError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&count) {
            Ok(ResultCount(count as u32))
        } else {
            Err(RuleError::CountOutOfRange {
                count: count.into(),
            })
        }
    }

    /// 타입이 정해지지 않은 값(JSON, 설정 파일 등)을 검사합니다.
    ///
    /// 정수가 아니면 범위 검사 전에 [`RuleError::InvalidCountType`]으로 실패합니다.
    pub fn check_value(value: &Value) -> Result<ResultCount, RuleError> {
        match value {
            Value::Number(n) => {
                if let Some(count) = n.as_i64() {
                    Self::check(count)
                } else if let Some(count) = n.as_u64() {
                    Err(RuleError::CountOutOfRange {
                        count: count.into(),
                    })
                } else {
                    Err(RuleError::InvalidCountType {
                        found: n.to_string(),
                    })
                }
            }
            other => Err(RuleError::InvalidCountType {
                found: other.to_string(),
            }),
        }
    }
}
