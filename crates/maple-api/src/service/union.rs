//! 유니온 조회.

use maple_core::{Clock, DataCategory, Timestamp};
use serde::de::DeserializeOwned;

use crate::client::{require_non_empty, MapleClient};
use crate::error::ApiResult;
use crate::transport::HttpGet;

const UNION_PATH: &str = "/maplestory/v1/user/union";
const RAIDER_PATH: &str = "/maplestory/v1/user/union-raider";
const ARTIFACT_PATH: &str = "/maplestory/v1/user/union-artifact";

impl<H: HttpGet, C: Clock> MapleClient<H, C> {
    /// 유니온 레벨/등급.
    pub async fn union_info<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.union_query(UNION_PATH, ocid, date).await
    }

    /// 유니온 공격대 배치.
    pub async fn union_raider<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.union_query(RAIDER_PATH, ocid, date).await
    }

    /// 유니온 아티팩트.
    pub async fn union_artifact<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.union_query(ARTIFACT_PATH, ocid, date).await
    }

    /// 이름으로 ocid를 조회한 뒤 유니온 레벨/등급을 조회합니다.
    pub async fn union_info_by_name<T: DeserializeOwned>(
        &self,
        character_name: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.check_date(DataCategory::Union, date)?;
        let ocid = self.character_id(character_name).await?;
        self.union_info(&ocid, date).await
    }

    async fn union_query<T: DeserializeOwned>(
        &self,
        path: &str,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        require_non_empty("ocid", ocid)?;
        self.fetch_dated(path, DataCategory::Union, date, vec![("ocid", ocid.to_string())])
            .await
    }
}
