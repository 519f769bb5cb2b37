//! 길드 조회.

use maple_core::{Clock, DataCategory, Timestamp};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::client::{require_non_empty, MapleClient};
use crate::error::ApiResult;
use crate::params::World;
use crate::transport::HttpGet;

const ID_PATH: &str = "/maplestory/v1/guild/id";
const BASIC_PATH: &str = "/maplestory/v1/guild/basic";

#[derive(Debug, Deserialize)]
struct GuildId {
    oguild_id: String,
}

impl<H: HttpGet, C: Clock> MapleClient<H, C> {
    /// 길드 이름과 월드로 길드 식별자(oguild_id)를 조회합니다.
    pub async fn guild_id(&self, guild_name: &str, world: World) -> ApiResult<String> {
        require_non_empty("guild_name", guild_name)?;

        let id: GuildId = self
            .fetch(
                ID_PATH,
                vec![
                    ("guild_name", guild_name.to_string()),
                    ("world_name", world.name().to_string()),
                ],
            )
            .await?;
        Ok(id.oguild_id)
    }

    /// 길드 기본 정보.
    pub async fn guild_basic<T: DeserializeOwned>(
        &self,
        oguild_id: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        require_non_empty("oguild_id", oguild_id)?;

        self.fetch_dated(
            BASIC_PATH,
            DataCategory::Guild,
            date,
            vec![("oguild_id", oguild_id.to_string())],
        )
        .await
    }

    /// 길드 이름과 월드로 길드 기본 정보를 조회합니다.
    pub async fn guild_basic_by_name<T: DeserializeOwned>(
        &self,
        guild_name: &str,
        world: World,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.check_date(DataCategory::Guild, date)?;
        let oguild_id = self.guild_id(guild_name, world).await?;
        self.guild_basic(&oguild_id, date).await
    }
}
