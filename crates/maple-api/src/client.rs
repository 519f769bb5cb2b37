//! MapleStory Open API 클라이언트.
//!
//! 모든 조회는 같은 순서를 따릅니다:
//! 1. 날짜/cursor/count를 [`QueryWindowRequest`]로 검증 (실패하면 네트워크 호출 없음)
//! 2. 쿼리 파라미터 구성
//! 3. [`HttpGet::get`] 한 번 호출
//! 4. 응답 본문을 호출자가 지정한 타입으로 역직렬화

use maple_core::{
    ApiConfig, Clock, CursorPolicy, DataCategory, KstClock, QueryWindowRegistry,
    QueryWindowRequest, SystemClock, Timestamp,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::transport::{HttpGet, ReqwestTransport};

/// 쿼리 파라미터 목록.
pub(crate) type Params = Vec<(&'static str, String)>;

/// MapleStory Open API 클라이언트.
///
/// 전송 계층, 조회 기간 레지스트리, 시계를 주입받습니다.
pub struct MapleClient<H = ReqwestTransport, C = SystemClock> {
    http: H,
    registry: QueryWindowRegistry,
    clock: KstClock<C>,
}

impl MapleClient<ReqwestTransport, SystemClock> {
    /// 설정으로 기본 클라이언트 생성.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        Ok(Self::with_parts(
            ReqwestTransport::new(config)?,
            QueryWindowRegistry::default(),
            KstClock::default(),
        ))
    }

    /// `.env`/환경 변수 설정으로 기본 클라이언트 생성.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ApiConfig::from_env()?)
    }
}

impl<H: HttpGet, C: Clock> MapleClient<H, C> {
    /// 구성 요소를 직접 지정해 생성.
    pub fn with_parts(http: H, registry: QueryWindowRegistry, clock: KstClock<C>) -> Self {
        Self {
            http,
            registry,
            clock,
        }
    }

    /// 조회 기간 레지스트리 교체.
    pub fn with_registry(mut self, registry: QueryWindowRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &QueryWindowRegistry {
        &self.registry
    }

    pub fn clock(&self) -> &KstClock<C> {
        &self.clock
    }

    /// 검증이 끝난 파라미터로 요청하고 본문을 역직렬화합니다.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, path: &str, params: Params) -> ApiResult<T> {
        debug!(path, params = ?params, "Fetching");
        let value = self.http.get(path, &params).await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::Parse(format!("Failed to decode {} response: {}", path, e)))
    }

    /// 이름 조회 전에 날짜를 미리 검사합니다. 날짜가 없으면 통과합니다.
    pub(crate) fn check_date(&self, category: DataCategory, date: Option<Timestamp>) -> ApiResult<()> {
        if let Some(date) = date {
            self.registry.check_valid(date, category)?;
        }
        Ok(())
    }

    /// 날짜 하나만 받는 조회 (캐릭터, 유니온, 길드).
    ///
    /// 날짜가 없으면 `date` 파라미터를 생략해 업스트림의 최신 데이터를 받습니다.
    pub(crate) async fn fetch_dated<T: DeserializeOwned>(
        &self,
        path: &str,
        category: DataCategory,
        date: Option<Timestamp>,
        mut params: Params,
    ) -> ApiResult<T> {
        let window = QueryWindowRequest::new()
            .with_optional_date(date)
            .validate(&self.registry, category, CursorPolicy::DateOnly)?;
        params.extend(window.query_params());
        self.fetch(path, params).await
    }
}

/// 빈 문자열 인자를 거부합니다.
pub(crate) fn require_non_empty(name: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidArgument(format!("{} must not be empty", name)));
    }
    Ok(())
}
