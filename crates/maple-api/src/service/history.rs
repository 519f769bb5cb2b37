//! 확률형 강화 이력 조회 (스타포스, 큐브, 잠재능력).
//!
//! 첫 페이지는 date로, 이후 페이지는 응답의 `next_cursor`로 요청합니다.
//! date와 cursor는 함께 쓸 수 없습니다. 이력은 API 키의 계정 기준이며
//! 계정 식별자(ouid)는 [`MapleClient::account_id`]로 조회합니다.

use maple_core::{Clock, CursorPolicy, DataCategory, QueryWindowRequest, ResultCount};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::client::{MapleClient, Params};
use crate::error::ApiResult;
use crate::page::HistoryPage;
use crate::transport::HttpGet;

const OUID_PATH: &str = "/maplestory/v1/ouid";
const STARFORCE_PATH: &str = "/maplestory/v1/history/starforce";
const CUBE_PATH: &str = "/maplestory/v1/history/cube";
const POTENTIAL_PATH: &str = "/maplestory/v1/history/potential";

#[derive(Debug, Deserialize)]
struct AccountId {
    ouid: String,
}

impl<H: HttpGet, C: Clock> MapleClient<H, C> {
    /// API 키에 연결된 계정 식별자(ouid).
    pub async fn account_id(&self) -> ApiResult<String> {
        let id: AccountId = self.fetch(OUID_PATH, Params::new()).await?;
        Ok(id.ouid)
    }

    /// 스타포스 강화 이력.
    pub async fn starforce_history<T: DeserializeOwned>(
        &self,
        request: &QueryWindowRequest,
    ) -> ApiResult<HistoryPage<T>> {
        self.history_query(STARFORCE_PATH, DataCategory::Starforce, request)
            .await
    }

    /// 큐브 사용 이력.
    pub async fn cube_history<T: DeserializeOwned>(
        &self,
        request: &QueryWindowRequest,
    ) -> ApiResult<HistoryPage<T>> {
        self.history_query(CUBE_PATH, DataCategory::Cube, request).await
    }

    /// 잠재능력 재설정 이력.
    pub async fn potential_history<T: DeserializeOwned>(
        &self,
        request: &QueryWindowRequest,
    ) -> ApiResult<HistoryPage<T>> {
        self.history_query(POTENTIAL_PATH, DataCategory::Potential, request)
            .await
    }

    async fn history_query<T: DeserializeOwned>(
        &self,
        path: &str,
        category: DataCategory,
        request: &QueryWindowRequest,
    ) -> ApiResult<HistoryPage<T>> {
        let mut window = request.validate(self.registry(), category, CursorPolicy::ExactlyOne)?;
        window.count.get_or_insert_with(ResultCount::default);

        self.fetch(path, window.query_params()).await
    }
}
