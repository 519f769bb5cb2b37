//! 조회 기간 요청 값 객체.
//!
//! [`QueryWindowRequest`]는 date/cursor/count를 하나로 묶어 다음 순서로 검증합니다:
//! 1. 시간대 (KST aware)
//! 2. 카테고리 조회 시작일
//! 3. date/cursor 배타 규칙 (cursor를 지원하는 조회만)
//! 4. count 범위
//!
//! 먼저 실패한 단계의 에러가 반환됩니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::category::DataCategory;
use crate::error::QueryResult;
use crate::kst::{query_date, KstDateTime, Timestamp};
use crate::rules::{DateCursorRule, ResultCount, ResultCountRule};
use crate::window::QueryWindowRegistry;

/// 서버가 발급한 다음 페이지 토큰. 내용은 해석하지 않고 그대로 돌려보냅니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageCursor(String);

impl PageCursor {
    pub fn new(cursor: impl Into<String>) -> Self {
        Self(cursor.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 공백만 있는 cursor도 비어 있는 것으로 봅니다.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for PageCursor {
    fn from(cursor: &str) -> Self {
        Self::new(cursor)
    }
}

impl From<String> for PageCursor {
    fn from(cursor: String) -> Self {
        Self(cursor)
    }
}

impl AsRef<str> for PageCursor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 검증 전 count 인자.
#[derive(Debug, Clone, PartialEq)]
pub enum CountArg {
    /// 정수로 주어진 값
    Int(i64),
    /// 타입이 정해지지 않은 값 (JSON, 설정 등)
    Dynamic(Value),
}

impl From<i64> for CountArg {
    fn from(count: i64) -> Self {
        CountArg::Int(count)
    }
}

impl From<i32> for CountArg {
    fn from(count: i32) -> Self {
        CountArg::Int(count.into())
    }
}

impl From<u32> for CountArg {
    fn from(count: u32) -> Self {
        CountArg::Int(count.into())
    }
}

impl From<ResultCount> for CountArg {
    fn from(count: ResultCount) -> Self {
        CountArg::Int(count.get().into())
    }
}

impl From<Value> for CountArg {
    fn from(value: Value) -> Self {
        CountArg::Dynamic(value)
    }
}

/// date/cursor 배타 규칙 적용 여부.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorPolicy {
    /// cursor를 받지 않는 조회 (date만 검사)
    #[default]
    DateOnly,
    /// date와 cursor 중 정확히 하나가 필요한 조회
    ExactlyOne,
}

/// 검증 전 조회 요청.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryWindowRequest {
    date: Option<Timestamp>,
    cursor: Option<PageCursor>,
    count: Option<CountArg>,
}

impl QueryWindowRequest {
    /// 빈 요청 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 조회 날짜 설정.
    pub fn with_date(mut self, date: impl Into<Timestamp>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// 날짜가 있을 때만 설정.
    pub fn with_optional_date<T: Into<Timestamp>>(mut self, date: Option<T>) -> Self {
        self.date = date.map(Into::into);
        self
    }

    /// 다음 페이지 cursor 설정.
    pub fn with_cursor(mut self, cursor: impl Into<PageCursor>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// 페이지 크기 설정.
    pub fn with_count(mut self, count: impl Into<CountArg>) -> Self {
        self.count = Some(count.into());
        self
    }

    pub fn date(&self) -> Option<&Timestamp> {
        self.date.as_ref()
    }

    pub fn cursor(&self) -> Option<&PageCursor> {
        self.cursor.as_ref()
    }

    pub fn count(&self) -> Option<&CountArg> {
        self.count.as_ref()
    }

    /// 네 단계 검증을 순서대로 수행합니다.
    pub fn validate(
        &self,
        registry: &QueryWindowRegistry,
        category: DataCategory,
        policy: CursorPolicy,
    ) -> QueryResult<ValidatedWindow> {
        let date = self
            .date
            .map(|date| registry.checked(date, category))
            .transpose()?;

        let cursor = self.cursor.clone().filter(|c| !c.is_empty());
        if policy == CursorPolicy::ExactlyOne {
            DateCursorRule::check(date.as_ref(), cursor.as_ref())?;
        }

        let count = match &self.count {
            Some(CountArg::Int(count)) => Some(ResultCountRule::check(*count)?),
            Some(CountArg::Dynamic(value)) => Some(ResultCountRule::check_value(value)?),
            None => None,
        };

        Ok(ValidatedWindow {
            category,
            date,
            cursor,
            count,
        })
    }
}

/// 모든 검증을 통과한 조회 요청.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedWindow {
    pub category: DataCategory,
    pub date: Option<KstDateTime>,
    pub cursor: Option<PageCursor>,
    pub count: Option<ResultCount>,
}

impl ValidatedWindow {
    /// 업스트림 쿼리 파라미터 (`count`, `date`, `cursor`). 값이 없는 항목은 제외합니다.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(3);
        if let Some(count) = self.count {
            params.push(("count", count.to_string()));
        }
        if let Some(date) = &self.date {
            params.push(("date", query_date(date)));
        }
        if let Some(cursor) = &self.cursor {
            params.push(("cursor", cursor.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DateError, QueryError, RuleError};
    use crate::kst::make;
    use chrono::{NaiveDate, TimeZone, Utc};
    use serde_json::json;

    fn registry() -> QueryWindowRegistry {
        QueryWindowRegistry::default()
    }

    #[test]
    fn test_valid_history_request() {
        let window = QueryWindowRequest::new()
            .with_date(make(2024, 1, 5, 0, 0, 0, 0).unwrap())
            .with_count(100)
            .validate(&registry(), DataCategory::Starforce, CursorPolicy::ExactlyOne)
            .unwrap();

        assert_eq!(
            window.query_params(),
            vec![("count", "100".to_string()), ("date", "2024-01-05".to_string())]
        );
    }

    #[test]
    fn test_cursor_only_request() {
        let window = QueryWindowRequest::new()
            .with_cursor("abc123")
            .validate(&registry(), DataCategory::Cube, CursorPolicy::ExactlyOne)
            .unwrap();

        assert_eq!(window.date, None);
        assert_eq!(window.query_params(), vec![("cursor", "abc123".to_string())]);
    }

    #[test]
    fn test_gate_order() {
        // 시간대 에러가 cursor/count 에러보다 먼저
        let naive = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let err = QueryWindowRequest::new()
            .with_date(naive)
            .with_cursor("abc")
            .with_count(5)
            .validate(&registry(), DataCategory::Cube, CursorPolicy::ExactlyOne)
            .unwrap_err();
        assert_eq!(err, QueryError::Date(DateError::MissingTimezone));

        // 시작일 에러가 cursor 에러보다 먼저
        let err = QueryWindowRequest::new()
            .with_date(make(2023, 12, 26, 0, 0, 0, 0).unwrap())
            .with_cursor("abc")
            .validate(&registry(), DataCategory::Starforce, CursorPolicy::ExactlyOne)
            .unwrap_err();
        assert!(err.is_window_error());

        // cursor 에러가 count 에러보다 먼저
        let err = QueryWindowRequest::new()
            .with_date(make(2024, 1, 5, 0, 0, 0, 0).unwrap())
            .with_cursor("abc")
            .with_count(5)
            .validate(&registry(), DataCategory::Starforce, CursorPolicy::ExactlyOne)
            .unwrap_err();
        assert_eq!(err, QueryError::Rule(RuleError::ConflictingDateAndCursor));
    }

    #[test]
    fn test_missing_date_and_cursor() {
        let err = QueryWindowRequest::new()
            .with_cursor("  ")
            .validate(&registry(), DataCategory::Potential, CursorPolicy::ExactlyOne)
            .unwrap_err();
        assert_eq!(err, QueryError::Rule(RuleError::MissingDateOrCursor));
    }

    #[test]
    fn test_date_only_policy_skips_cursor_rule() {
        let window = QueryWindowRequest::new()
            .validate(&registry(), DataCategory::Character, CursorPolicy::DateOnly)
            .unwrap();
        assert!(window.query_params().is_empty());
    }

    #[test]
    fn test_dynamic_count() {
        let err = QueryWindowRequest::new()
            .with_cursor("abc")
            .with_count(json!("500"))
            .validate(&registry(), DataCategory::Cube, CursorPolicy::ExactlyOne)
            .unwrap_err();
        assert!(matches!(err, QueryError::Rule(RuleError::InvalidCountType { .. })));
    }

    #[test]
    fn test_non_kst_date_rejected() {
        let err = QueryWindowRequest::new()
            .with_date(Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap())
            .validate(&registry(), DataCategory::Ranking, CursorPolicy::DateOnly)
            .unwrap_err();
        assert!(err.is_timezone_error());
    }
}
