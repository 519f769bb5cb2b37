//! 페이지 응답 봉투.
//!
//! 개별 항목의 형태는 호출자가 정합니다. 여기서는 랭킹 목록과
//! cursor 기반 이력 목록의 공통 부분만 다룹니다.

use maple_core::{PageCursor, QueryWindowRequest};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// 순위를 가진 랭킹 항목.
pub trait Ranked {
    fn ranking(&self) -> u64;
}

/// 형태를 정하지 않은 랭킹 항목.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankingEntry {
    /// 순위
    pub ranking: u64,
    /// 나머지 필드
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RankingEntry {
    /// 문자열 필드 조회.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

impl Ranked for RankingEntry {
    fn ranking(&self) -> u64 {
        self.ranking
    }
}

/// 순위 오름차순으로 정렬된 랭킹 목록.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingPage<E> {
    entries: Vec<E>,
}

impl<E: Ranked> RankingPage<E> {
    pub fn new(mut entries: Vec<E>) -> Self {
        entries.sort_by_key(|entry| entry.ranking());
        Self { entries }
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 1위 항목.
    pub fn top(&self) -> Option<&E> {
        self.entries.first()
    }

    /// 조건에 맞는 첫 항목.
    pub fn find_by(&self, predicate: impl Fn(&E) -> bool) -> Option<&E> {
        self.entries.iter().find(|entry| predicate(entry))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    pub fn into_inner(self) -> Vec<E> {
        self.entries
    }
}

impl<'a, E> IntoIterator for &'a RankingPage<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'de, E> Deserialize<'de> for RankingPage<E>
where
    E: Deserialize<'de> + Ranked,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw<E> {
            ranking: Vec<E>,
        }

        let raw = Raw::<E>::deserialize(deserializer)?;
        Ok(RankingPage::new(raw.ranking))
    }
}

/// cursor 기반 이력 목록.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryPage<T> {
    /// 조회 기간의 전체 결과 수
    pub count: u64,
    /// 다음 페이지 cursor
    #[serde(default)]
    pub next_cursor: Option<PageCursor>,
    /// 이력 항목
    #[serde(
        alias = "starforce_history",
        alias = "cube_history",
        alias = "potential_history"
    )]
    pub history: Vec<T>,
}

impl<T> HistoryPage<T> {
    /// 다음 페이지가 있는지 확인합니다. 빈 cursor는 마지막 페이지로 봅니다.
    pub fn has_more(&self) -> bool {
        self.next_cursor.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// 다음 페이지 요청. 마지막 페이지면 `None`.
    pub fn next_request(&self) -> Option<QueryWindowRequest> {
        self.next_cursor
            .as_ref()
            .filter(|c| !c.is_empty())
            .map(|cursor| QueryWindowRequest::new().with_cursor(cursor.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ranking_sorted_on_decode() {
        let body = json!({
            "ranking": [
                {"ranking": 3, "character_name": "셋째", "world_name": "스카니아"},
                {"ranking": 1, "character_name": "첫째", "world_name": "루나"},
                {"ranking": 2, "character_name": "둘째", "world_name": "리부트"}
            ]
        });

        let page: RankingPage<RankingEntry> = serde_json::from_value(body).unwrap();
        let ranks: Vec<u64> = page.iter().map(|e| e.ranking).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(page.top().unwrap().str_field("character_name"), Some("첫째"));

        let reboot = page
            .find_by(|e| e.str_field("world_name") == Some("리부트"))
            .unwrap();
        assert_eq!(reboot.ranking, 2);
    }

    #[test]
    fn test_history_aliases() {
        let body = json!({
            "count": 2,
            "next_cursor": "abc",
            "starforce_history": [{"id": "1"}, {"id": "2"}]
        });
        let page: HistoryPage<Value> = serde_json::from_value(body).unwrap();
        assert_eq!(page.history.len(), 2);
        assert!(page.has_more());

        let next = page.next_request().unwrap();
        assert_eq!(next.cursor().map(|c| c.as_str()), Some("abc"));
        assert!(next.date().is_none());
    }

    #[test]
    fn test_history_last_page() {
        for cursor in [json!(null), json!("")] {
            let body = json!({"count": 0, "next_cursor": cursor, "cube_history": []});
            let page: HistoryPage<Value> = serde_json::from_value(body).unwrap();
            assert!(!page.has_more());
            assert!(page.next_request().is_none());
        }
    }
}
