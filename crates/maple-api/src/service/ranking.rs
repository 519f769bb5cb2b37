//! 랭킹 조회.
//!
//! 날짜를 지정하지 않으면 KST 기준 어제를 조회합니다. 당일 랭킹은
//! 업스트림에서 오전 8시 30분 이후에 제공되므로 어제가 항상 안전한 기본값입니다.

use maple_core::{
    Clock, CursorPolicy, DataCategory, KstDateTime, QueryWindowRequest, Timestamp,
};
use serde::de::DeserializeOwned;

use crate::client::{require_non_empty, MapleClient, Params};
use crate::error::{ApiError, ApiResult};
use crate::page::{Ranked, RankingEntry, RankingPage};
use crate::params::{DojangDifficulty, GuildRankType, World, WorldType};
use crate::transport::HttpGet;

const OVERALL_PATH: &str = "/maplestory/v1/ranking/overall";
const UNION_PATH: &str = "/maplestory/v1/ranking/union";
const GUILD_PATH: &str = "/maplestory/v1/ranking/guild";
const DOJANG_PATH: &str = "/maplestory/v1/ranking/dojang";
const THESEED_PATH: &str = "/maplestory/v1/ranking/theseed";
const ACHIEVEMENT_PATH: &str = "/maplestory/v1/ranking/achievement";

/// 랭킹 조회 조건. 설정하지 않은 항목은 파라미터에서 제외됩니다.
///
/// 엔드포인트마다 받는 조건이 다르며, 받지 않는 조건은 업스트림이 무시합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingFilter {
    pub date: Option<Timestamp>,
    pub world: Option<World>,
    pub world_type: Option<WorldType>,
    pub class: Option<String>,
    pub ocid: Option<String>,
    pub guild_name: Option<String>,
    pub page: Option<u32>,
}

impl RankingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: impl Into<Timestamp>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    pub fn with_world_type(mut self, world_type: WorldType) -> Self {
        self.world_type = Some(world_type);
        self
    }

    /// 직업 필터 (예: "전사-히어로").
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_ocid(mut self, ocid: impl Into<String>) -> Self {
        self.ocid = Some(ocid.into());
        self
    }

    pub fn with_guild_name(mut self, guild_name: impl Into<String>) -> Self {
        self.guild_name = Some(guild_name.into());
        self
    }

    /// 페이지 번호 (1부터).
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    fn params(&self) -> ApiResult<Params> {
        let mut params = Params::new();

        if let Some(world) = self.world {
            params.push(("world_name", world.name().to_string()));
        }
        if let Some(world_type) = self.world_type {
            params.push(("world_type", world_type.code().to_string()));
        }
        if let Some(class) = &self.class {
            params.push(("class", class.clone()));
        }
        if let Some(ocid) = &self.ocid {
            params.push(("ocid", ocid.clone()));
        }
        if let Some(guild_name) = &self.guild_name {
            params.push(("guild_name", guild_name.clone()));
        }
        match self.page {
            Some(0) => {
                return Err(ApiError::InvalidArgument(
                    "page must be 1 or greater".to_string(),
                ))
            }
            Some(page) => params.push(("page", page.to_string())),
            None => {}
        }

        Ok(params)
    }
}

impl<H: HttpGet, C: Clock> MapleClient<H, C> {
    /// 종합 랭킹.
    pub async fn overall_ranking<T: DeserializeOwned>(&self, filter: &RankingFilter) -> ApiResult<T> {
        self.ranking_query(OVERALL_PATH, filter, Params::new()).await
    }

    /// 유니온 랭킹.
    pub async fn union_ranking<T: DeserializeOwned>(&self, filter: &RankingFilter) -> ApiResult<T> {
        self.ranking_query(UNION_PATH, filter, Params::new()).await
    }

    /// 길드 랭킹.
    pub async fn guild_ranking<T: DeserializeOwned>(
        &self,
        ranking_type: GuildRankType,
        filter: &RankingFilter,
    ) -> ApiResult<T> {
        let extra = vec![("ranking_type", ranking_type.code().to_string())];
        self.ranking_query(GUILD_PATH, filter, extra).await
    }

    /// 무릉도장 랭킹.
    pub async fn dojang_ranking<T: DeserializeOwned>(
        &self,
        difficulty: DojangDifficulty,
        filter: &RankingFilter,
    ) -> ApiResult<T> {
        let extra = vec![("difficulty", difficulty.code().to_string())];
        self.ranking_query(DOJANG_PATH, filter, extra).await
    }

    /// 더 시드 랭킹.
    pub async fn theseed_ranking<T: DeserializeOwned>(&self, filter: &RankingFilter) -> ApiResult<T> {
        self.ranking_query(THESEED_PATH, filter, Params::new()).await
    }

    /// 업적 랭킹.
    pub async fn achievement_ranking<T: DeserializeOwned>(
        &self,
        filter: &RankingFilter,
    ) -> ApiResult<T> {
        self.ranking_query(ACHIEVEMENT_PATH, filter, Params::new()).await
    }

    /// 캐릭터 이름으로 유니온 랭킹 항목을 찾습니다.
    ///
    /// 결과가 정확히 하나일 때만 `Some`을 돌려줍니다.
    pub async fn character_union_rank<E: Ranked + DeserializeOwned>(
        &self,
        character_name: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<Option<E>> {
        require_non_empty("character_name", character_name)?;
        let date = self.ranking_date(date)?;

        let ocid = self.character_id(character_name).await?;
        let filter = RankingFilter::new().with_date(date).with_ocid(ocid);
        let page: RankingPage<E> = self.union_ranking(&filter).await?;

        let mut entries = page.into_inner();
        Ok(if entries.len() == 1 { entries.pop() } else { None })
    }

    /// 한 길드의 세 가지 길드 랭킹(주간 명성치, 플래그 레이스, 지하 수로)을 합칩니다.
    ///
    /// 세 요청은 같은 기준일을 사용하며, 날짜 검사를 통과해야 첫 요청을 보냅니다.
    pub async fn all_type_guild_ranking(
        &self,
        guild_name: &str,
        world: Option<World>,
        date: Option<Timestamp>,
    ) -> ApiResult<Vec<GuildTypeRanking>> {
        require_non_empty("guild_name", guild_name)?;
        let date = self.ranking_date(date)?;

        let mut filter = RankingFilter::new()
            .with_date(date)
            .with_guild_name(guild_name);
        filter.world = world;

        let mut rankings = Vec::new();
        for ranking_type in GuildRankType::ALL {
            let page: RankingPage<RankingEntry> =
                self.guild_ranking(ranking_type, &filter).await?;
            rankings.extend(page.into_inner().into_iter().map(|entry| GuildTypeRanking {
                ranking_type,
                entry,
            }));
        }

        Ok(rankings)
    }

    /// 랭킹 기준일. 지정하지 않으면 KST 어제이며, 랭킹 조회 기간을 검사합니다.
    fn ranking_date(&self, date: Option<Timestamp>) -> ApiResult<KstDateTime> {
        let date = match date {
            Some(date) => date,
            None => self.clock().yesterday()?.into(),
        };
        Ok(self.registry().checked(date, DataCategory::Ranking)?)
    }

    async fn ranking_query<T: DeserializeOwned>(
        &self,
        path: &str,
        filter: &RankingFilter,
        extra: Params,
    ) -> ApiResult<T> {
        let date = self.ranking_date(filter.date)?;

        let window = QueryWindowRequest::new().with_date(date).validate(
            self.registry(),
            DataCategory::Ranking,
            CursorPolicy::DateOnly,
        )?;

        let mut params = window.query_params();
        params.extend(extra);
        params.extend(filter.params()?);

        self.fetch(path, params).await
    }
}

/// 랭킹 유형이 붙은 길드 랭킹 항목.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildTypeRanking {
    pub ranking_type: GuildRankType,
    pub entry: RankingEntry,
}
