//! Integration tests proving every query runs the KST and window gates before the transport.

use async_trait::async_trait;
use maple_api::{
    ApiError, ApiResult, CharacterEndpoint, GuildRankType, HistoryPage, HttpGet, MapleClient,
    RankingEntry, RankingFilter, RankingPage, SkillGrade, World,
};
use maple_core::kst::make;
use maple_core::{
    DateError, FixedClock, KstClock, QueryError, QueryWindowRegistry, QueryWindowRequest,
    RuleError, Timestamp,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

type Call = (String, Vec<(String, String)>);

/// Records every request and answers with a fixed body.
struct RecordingHttp {
    calls: Mutex<Vec<Call>>,
    response: Value,
}

impl RecordingHttp {
    fn new(response: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response,
        })
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn last_params(&self) -> Vec<(String, String)> {
        self.calls().last().expect("no request recorded").1.clone()
    }
}

#[async_trait]
impl HttpGet for RecordingHttp {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Value> {
        let params = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        self.calls.lock().unwrap().push((path.to_string(), params));
        Ok(self.response.clone())
    }
}

fn client_at(
    http: &Arc<RecordingHttp>,
    y: i32,
    m: u32,
    d: u32,
) -> MapleClient<Arc<RecordingHttp>, FixedClock> {
    let now = make(y, m, d, 10, 0, 0, 0).unwrap();
    MapleClient::with_parts(
        Arc::clone(http),
        QueryWindowRegistry::default(),
        KstClock::new(FixedClock::new(now)),
    )
}

fn param(params: &[(String, String)], key: &str) -> Option<String> {
    params.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

fn ranking_body() -> Value {
    json!({"ranking": [{"ranking": 2, "character_name": "B"}, {"ranking": 1, "character_name": "A"}]})
}

#[tokio::test]
async fn test_ranking_defaults_to_yesterday() {
    let http = RecordingHttp::new(ranking_body());
    let client = client_at(&http, 2024, 1, 10);

    let page: RankingPage<RankingEntry> = client
        .overall_ranking(&RankingFilter::new().with_world(World::Luna))
        .await
        .unwrap();

    assert_eq!(page.top().unwrap().str_field("character_name"), Some("A"));
    let calls = http.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "/maplestory/v1/ranking/overall");
    assert_eq!(param(&calls[0].1, "date").as_deref(), Some("2024-01-09"));
    assert_eq!(param(&calls[0].1, "world_name").as_deref(), Some("루나"));
}

#[tokio::test]
async fn test_ranking_default_before_floor_never_sent() {
    // 2023-12-22의 어제는 랭킹 시작일 이전
    let http = RecordingHttp::new(ranking_body());
    let client = client_at(&http, 2023, 12, 22);

    let err = client
        .union_ranking::<Value>(&RankingFilter::new())
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(matches!(
        err,
        ApiError::Query(QueryError::Date(DateError::BeforeQueryWindow { .. }))
    ));
    assert!(http.calls().is_empty());
}

#[tokio::test]
async fn test_non_kst_date_never_sent() {
    use chrono::{TimeZone, Utc};

    let http = RecordingHttp::new(ranking_body());
    let client = client_at(&http, 2024, 1, 10);
    let utc = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();

    let err = client
        .guild_ranking::<Value>(GuildRankType::FlagRace, &RankingFilter::new().with_date(utc))
        .await
        .unwrap_err();

    match err {
        ApiError::Query(query) => assert!(query.is_timezone_error()),
        other => panic!("expected timezone error, got {:?}", other),
    }
    assert!(http.calls().is_empty());
}

#[tokio::test]
async fn test_guild_ranking_params() {
    let http = RecordingHttp::new(ranking_body());
    let client = client_at(&http, 2024, 1, 10);

    let _: Value = client
        .guild_ranking(
            GuildRankType::Sewer,
            &RankingFilter::new()
                .with_date(make(2024, 1, 3, 0, 0, 0, 0).unwrap())
                .with_page(3),
        )
        .await
        .unwrap();

    let params = http.last_params();
    assert_eq!(param(&params, "ranking_type").as_deref(), Some("2"));
    assert_eq!(param(&params, "date").as_deref(), Some("2024-01-03"));
    assert_eq!(param(&params, "page").as_deref(), Some("3"));
}

#[tokio::test]
async fn test_history_rule_violations_never_sent() {
    let http = RecordingHttp::new(json!({"count": 0, "next_cursor": null, "starforce_history": []}));
    let client = client_at(&http, 2024, 1, 10);
    let date = make(2024, 1, 5, 0, 0, 0, 0).unwrap();

    let both = QueryWindowRequest::new().with_date(date).with_cursor("abc");
    let err = client.starforce_history::<Value>(&both).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Query(QueryError::Rule(RuleError::ConflictingDateAndCursor))
    ));

    let neither = QueryWindowRequest::new();
    let err = client.cube_history::<Value>(&neither).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Query(QueryError::Rule(RuleError::MissingDateOrCursor))
    ));

    let small = QueryWindowRequest::new().with_cursor("abc").with_count(9);
    let err = client.potential_history::<Value>(&small).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Query(QueryError::Rule(RuleError::CountOutOfRange { count: 9 }))
    ));

    let early = QueryWindowRequest::new().with_date(make(2023, 12, 26, 0, 0, 0, 0).unwrap());
    let err = client.starforce_history::<Value>(&early).await.unwrap_err();
    assert!(err.is_validation());

    assert!(http.calls().is_empty());
}

#[tokio::test]
async fn test_history_default_count_and_paging() {
    let http = RecordingHttp::new(json!({
        "count": 25,
        "next_cursor": "next-page",
        "starforce_history": [{"id": "a"}]
    }));
    let client = client_at(&http, 2024, 1, 10);

    let first = QueryWindowRequest::new().with_date(make(2024, 1, 5, 0, 0, 0, 0).unwrap());
    let page: HistoryPage<Value> = client.starforce_history(&first).await.unwrap();

    let params = http.last_params();
    assert_eq!(http.calls()[0].0, "/maplestory/v1/history/starforce");
    assert_eq!(param(&params, "count").as_deref(), Some("10"));
    assert_eq!(param(&params, "date").as_deref(), Some("2024-01-05"));
    assert_eq!(param(&params, "cursor"), None);

    let next = page.next_request().unwrap().with_count(100);
    let _: HistoryPage<Value> = client.starforce_history(&next).await.unwrap();

    let params = http.last_params();
    assert_eq!(param(&params, "count").as_deref(), Some("100"));
    assert_eq!(param(&params, "cursor").as_deref(), Some("next-page"));
    assert_eq!(param(&params, "date"), None);
}

#[tokio::test]
async fn test_dated_lookups() {
    let http = RecordingHttp::new(json!({"ocid": "abc", "oguild_id": "g1", "union_level": 8000}));
    let client = client_at(&http, 2024, 1, 10);

    assert_eq!(client.character_id("아델").await.unwrap(), "abc");
    assert_eq!(client.guild_id("길드", World::Scania).await.unwrap(), "g1");

    let date: Timestamp = make(2024, 1, 2, 0, 0, 0, 0).unwrap().into();
    let union: Value = client.union_info("abc", Some(date)).await.unwrap();
    assert_eq!(union["union_level"], 8000);
    assert_eq!(param(&http.last_params(), "date").as_deref(), Some("2024-01-02"));

    let _: Value = client.character_basic("abc", None).await.unwrap();
    assert_eq!(param(&http.last_params(), "date"), None);

    let calls_before = http.calls().len();
    let early: Timestamp = make(2023, 12, 20, 0, 0, 0, 0).unwrap().into();
    assert!(client.guild_basic::<Value>("g1", Some(early)).await.is_err());
    assert!(client.character_id("  ").await.is_err());
    assert_eq!(http.calls().len(), calls_before);
}

#[tokio::test]
async fn test_character_endpoints_run_window_gate() {
    let http = RecordingHttp::new(json!({"ocid": "abc"}));
    let client = client_at(&http, 2024, 1, 10);
    let early: Timestamp = make(2023, 12, 20, 0, 0, 0, 0).unwrap().into();
    let valid: Timestamp = make(2023, 12, 21, 0, 0, 0, 0).unwrap().into();

    for endpoint in CharacterEndpoint::ALL {
        let err = client
            .character_info::<Value>(endpoint, "abc", Some(early))
            .await
            .unwrap_err();
        assert!(
            matches!(
                err,
                ApiError::Query(QueryError::Date(DateError::BeforeQueryWindow { .. }))
            ),
            "{:?}",
            endpoint
        );
    }
    let err = client
        .character_skill::<Value>("abc", SkillGrade::Sixth, Some(early))
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(http.calls().is_empty());

    for endpoint in CharacterEndpoint::ALL {
        let _: Value = client.character_info(endpoint, "abc", Some(valid)).await.unwrap();
        let calls = http.calls();
        let (path, params) = calls.last().unwrap();
        assert_eq!(path, endpoint.path());
        assert_eq!(param(params, "ocid").as_deref(), Some("abc"));
        assert_eq!(param(params, "date").as_deref(), Some("2023-12-21"));
    }
    assert_eq!(http.calls().len(), CharacterEndpoint::ALL.len());

    let _: Value = client
        .character_skill("abc", SkillGrade::HyperPassive, None)
        .await
        .unwrap();
    let calls = http.calls();
    let (path, params) = calls.last().unwrap();
    assert_eq!(path, "/maplestory/v1/character/skill");
    assert_eq!(
        param(params, "character_skill_grade").as_deref(),
        Some("hyperpassive")
    );
    assert_eq!(param(params, "date"), None);
}

#[tokio::test]
async fn test_name_lookups_resolve_ocid_first() {
    let http = RecordingHttp::new(json!({"ocid": "abc", "oguild_id": "g1"}));
    let client = client_at(&http, 2024, 1, 10);
    let date: Timestamp = make(2024, 1, 2, 0, 0, 0, 0).unwrap().into();

    let _: Value = client.character_basic_by_name("아델", Some(date)).await.unwrap();
    let calls = http.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "/maplestory/v1/id");
    assert_eq!(param(&calls[0].1, "character_name").as_deref(), Some("아델"));
    assert_eq!(calls[1].0, "/maplestory/v1/character/basic");
    assert_eq!(param(&calls[1].1, "ocid").as_deref(), Some("abc"));
    assert_eq!(param(&calls[1].1, "date").as_deref(), Some("2024-01-02"));

    let _: Value = client
        .character_skill_by_name("아델", SkillGrade::Fifth, None)
        .await
        .unwrap();
    let _: Value = client.union_info_by_name("아델", None).await.unwrap();
    let _: Value = client
        .guild_basic_by_name("길드", World::Reboot, Some(date))
        .await
        .unwrap();

    let calls = http.calls();
    assert_eq!(calls.len(), 8);
    assert_eq!(calls[3].0, "/maplestory/v1/character/skill");
    assert_eq!(calls[5].0, "/maplestory/v1/user/union");
    assert_eq!(param(&calls[6].1, "world_name").as_deref(), Some("리부트"));
    assert_eq!(param(&calls[7].1, "oguild_id").as_deref(), Some("g1"));

    // 날짜 검사에 실패하면 ocid 조회도 보내지 않음
    let early: Timestamp = make(2023, 12, 1, 0, 0, 0, 0).unwrap().into();
    let utc: Timestamp = chrono::Utc::now().into();
    assert!(client
        .character_info_by_name::<Value>(CharacterEndpoint::Stat, "아델", Some(early))
        .await
        .is_err());
    assert!(client.union_info_by_name::<Value>("아델", Some(utc)).await.is_err());
    assert!(client
        .guild_basic_by_name::<Value>("길드", World::Luna, Some(early))
        .await
        .is_err());
    assert_eq!(http.calls().len(), 8);
}

#[tokio::test]
async fn test_account_id() {
    let http = RecordingHttp::new(json!({"ouid": "account-1"}));
    let client = client_at(&http, 2024, 1, 10);

    assert_eq!(client.account_id().await.unwrap(), "account-1");
    let calls = http.calls();
    assert_eq!(calls[0].0, "/maplestory/v1/ouid");
    assert!(calls[0].1.is_empty());
}

#[tokio::test]
async fn test_character_union_rank() {
    let http = RecordingHttp::new(json!({
        "ocid": "abc",
        "ranking": [{"ranking": 5, "character_name": "아델", "union_level": 9000}]
    }));
    let client = client_at(&http, 2024, 1, 10);

    let entry: RankingEntry = client
        .character_union_rank("아델", None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entry.ranking, 5);

    let calls = http.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].0, "/maplestory/v1/ranking/union");
    assert_eq!(param(&calls[1].1, "ocid").as_deref(), Some("abc"));
    assert_eq!(param(&calls[1].1, "date").as_deref(), Some("2024-01-09"));

    let ambiguous = RecordingHttp::new(json!({
        "ocid": "abc",
        "ranking": [{"ranking": 1}, {"ranking": 2}]
    }));
    let client = client_at(&ambiguous, 2024, 1, 10);
    let rank: Option<RankingEntry> = client.character_union_rank("아델", None).await.unwrap();
    assert!(rank.is_none());

    // 기본 기준일(어제)이 랭킹 시작일 이전이면 아무 요청도 없음
    let early = RecordingHttp::new(json!({}));
    let client = client_at(&early, 2023, 12, 22);
    assert!(client
        .character_union_rank::<RankingEntry>("아델", None)
        .await
        .is_err());
    assert!(early.calls().is_empty());
}

#[tokio::test]
async fn test_all_type_guild_ranking() {
    let http = RecordingHttp::new(json!({
        "ranking": [{"ranking": 7, "guild_name": "길드", "world_name": "스카니아"}]
    }));
    let client = client_at(&http, 2024, 1, 10);

    let rankings = client
        .all_type_guild_ranking("길드", Some(World::Scania), None)
        .await
        .unwrap();

    let types: Vec<GuildRankType> = rankings.iter().map(|r| r.ranking_type).collect();
    assert_eq!(types, GuildRankType::ALL.to_vec());
    assert!(rankings.iter().all(|r| r.entry.ranking == 7));

    let calls = http.calls();
    assert_eq!(calls.len(), 3);
    for (call, code) in calls.iter().zip(["0", "1", "2"]) {
        assert_eq!(call.0, "/maplestory/v1/ranking/guild");
        assert_eq!(param(&call.1, "ranking_type").as_deref(), Some(code));
        assert_eq!(param(&call.1, "guild_name").as_deref(), Some("길드"));
        assert_eq!(param(&call.1, "world_name").as_deref(), Some("스카니아"));
        assert_eq!(param(&call.1, "date").as_deref(), Some("2024-01-09"));
    }

    let utc = chrono::Utc::now().into();
    assert!(client
        .all_type_guild_ranking("길드", None, Some(utc))
        .await
        .is_err());
    assert_eq!(http.calls().len(), 3);
}
