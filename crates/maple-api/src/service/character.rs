//! 캐릭터 조회.
//!
//! 모든 캐릭터 정보 엔드포인트는 `ocid`와 선택적 `date`를 받으며
//! 캐릭터 카테고리의 조회 기간 검사를 거칩니다. `*_by_name` 메서드는
//! 이름으로 ocid를 먼저 조회한 뒤 같은 엔드포인트를 호출합니다.

use maple_core::{Clock, DataCategory, Timestamp};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::client::{require_non_empty, MapleClient, Params};
use crate::error::ApiResult;
use crate::params::SkillGrade;
use crate::transport::HttpGet;

const ID_PATH: &str = "/maplestory/v1/id";
const SKILL_PATH: &str = "/maplestory/v1/character/skill";

/// `ocid`와 `date`만 받는 캐릭터 정보 엔드포인트.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterEndpoint {
    /// 기본 정보
    Basic,
    /// 인기도
    Popularity,
    /// 종합 능력치
    Stat,
    /// 하이퍼스탯
    HyperStat,
    /// 성향
    Propensity,
    /// 어빌리티
    Ability,
    /// 장착 장비 (캐시 장비 제외)
    ItemEquipment,
    /// 캐시 장비
    CashitemEquipment,
    /// 심볼
    SymbolEquipment,
    /// 세트 효과
    SetEffect,
    /// 헤어, 성형, 피부
    BeautyEquipment,
    /// 안드로이드
    AndroidEquipment,
    /// 펫
    PetEquipment,
    /// 링크 스킬
    LinkSkill,
    /// V매트릭스
    Vmatrix,
    /// HEXA 코어
    Hexamatrix,
    /// HEXA 스탯
    HexamatrixStat,
    /// 무릉도장 최고 기록
    Dojang,
}

impl CharacterEndpoint {
    pub const ALL: [CharacterEndpoint; 18] = [
        CharacterEndpoint::Basic,
        CharacterEndpoint::Popularity,
        CharacterEndpoint::Stat,
        CharacterEndpoint::HyperStat,
        CharacterEndpoint::Propensity,
        CharacterEndpoint::Ability,
        CharacterEndpoint::ItemEquipment,
        CharacterEndpoint::CashitemEquipment,
        CharacterEndpoint::SymbolEquipment,
        CharacterEndpoint::SetEffect,
        CharacterEndpoint::BeautyEquipment,
        CharacterEndpoint::AndroidEquipment,
        CharacterEndpoint::PetEquipment,
        CharacterEndpoint::LinkSkill,
        CharacterEndpoint::Vmatrix,
        CharacterEndpoint::Hexamatrix,
        CharacterEndpoint::HexamatrixStat,
        CharacterEndpoint::Dojang,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            CharacterEndpoint::Basic => "/maplestory/v1/character/basic",
            CharacterEndpoint::Popularity => "/maplestory/v1/character/popularity",
            CharacterEndpoint::Stat => "/maplestory/v1/character/stat",
            CharacterEndpoint::HyperStat => "/maplestory/v1/character/hyper-stat",
            CharacterEndpoint::Propensity => "/maplestory/v1/character/propensity",
            CharacterEndpoint::Ability => "/maplestory/v1/character/ability",
            CharacterEndpoint::ItemEquipment => "/maplestory/v1/character/item-equipment",
            CharacterEndpoint::CashitemEquipment => "/maplestory/v1/character/cashitem-equipment",
            CharacterEndpoint::SymbolEquipment => "/maplestory/v1/character/symbol-equipment",
            CharacterEndpoint::SetEffect => "/maplestory/v1/character/set-effect",
            CharacterEndpoint::BeautyEquipment => "/maplestory/v1/character/beauty-equipment",
            CharacterEndpoint::AndroidEquipment => "/maplestory/v1/character/android-equipment",
            CharacterEndpoint::PetEquipment => "/maplestory/v1/character/pet-equipment",
            CharacterEndpoint::LinkSkill => "/maplestory/v1/character/link-skill",
            CharacterEndpoint::Vmatrix => "/maplestory/v1/character/vmatrix",
            CharacterEndpoint::Hexamatrix => "/maplestory/v1/character/hexamatrix",
            CharacterEndpoint::HexamatrixStat => "/maplestory/v1/character/hexamatrix-stat",
            CharacterEndpoint::Dojang => "/maplestory/v1/character/dojang",
        }
    }
}

#[derive(Debug, Deserialize)]
struct CharacterId {
    ocid: String,
}

impl<H: HttpGet, C: Clock> MapleClient<H, C> {
    /// 캐릭터 이름으로 식별자(ocid)를 조회합니다.
    pub async fn character_id(&self, character_name: &str) -> ApiResult<String> {
        require_non_empty("character_name", character_name)?;

        let id: CharacterId = self
            .fetch(ID_PATH, vec![("character_name", character_name.to_string())])
            .await?;
        Ok(id.ocid)
    }

    /// 캐릭터 정보 조회. `date`가 없으면 최신 정보를 조회합니다.
    pub async fn character_info<T: DeserializeOwned>(
        &self,
        endpoint: CharacterEndpoint,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_query(endpoint.path(), ocid, date, Params::new())
            .await
    }

    /// 이름으로 ocid를 조회한 뒤 캐릭터 정보를 조회합니다.
    ///
    /// 날짜 검사가 먼저 수행되므로 잘못된 날짜는 ocid 조회 요청도 보내지 않습니다.
    pub async fn character_info_by_name<T: DeserializeOwned>(
        &self,
        endpoint: CharacterEndpoint,
        character_name: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.check_date(DataCategory::Character, date)?;
        let ocid = self.character_id(character_name).await?;
        self.character_info(endpoint, &ocid, date).await
    }

    /// 캐릭터 기본 정보.
    pub async fn character_basic<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::Basic, ocid, date).await
    }

    /// 이름으로 캐릭터 기본 정보 조회.
    pub async fn character_basic_by_name<T: DeserializeOwned>(
        &self,
        character_name: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info_by_name(CharacterEndpoint::Basic, character_name, date)
            .await
    }

    pub async fn character_popularity<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::Popularity, ocid, date).await
    }

    /// 종합 능력치.
    pub async fn character_stat<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::Stat, ocid, date).await
    }

    pub async fn character_hyper_stat<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::HyperStat, ocid, date).await
    }

    pub async fn character_propensity<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::Propensity, ocid, date).await
    }

    pub async fn character_ability<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::Ability, ocid, date).await
    }

    /// 장착 장비 (캐시 장비 제외).
    pub async fn character_item_equipment<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::ItemEquipment, ocid, date).await
    }

    pub async fn character_cashitem_equipment<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::CashitemEquipment, ocid, date)
            .await
    }

    pub async fn character_symbol_equipment<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::SymbolEquipment, ocid, date)
            .await
    }

    pub async fn character_set_effect<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::SetEffect, ocid, date).await
    }

    pub async fn character_beauty_equipment<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::BeautyEquipment, ocid, date)
            .await
    }

    pub async fn character_android_equipment<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::AndroidEquipment, ocid, date)
            .await
    }

    pub async fn character_pet_equipment<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::PetEquipment, ocid, date).await
    }

    /// 전직 차수별 스킬.
    pub async fn character_skill<T: DeserializeOwned>(
        &self,
        ocid: &str,
        grade: SkillGrade,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        let extra = vec![("character_skill_grade", grade.code().to_string())];
        self.character_query(SKILL_PATH, ocid, date, extra).await
    }

    /// 이름으로 전직 차수별 스킬 조회.
    pub async fn character_skill_by_name<T: DeserializeOwned>(
        &self,
        character_name: &str,
        grade: SkillGrade,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.check_date(DataCategory::Character, date)?;
        let ocid = self.character_id(character_name).await?;
        self.character_skill(&ocid, grade, date).await
    }

    pub async fn character_link_skill<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::LinkSkill, ocid, date).await
    }

    pub async fn character_vmatrix<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::Vmatrix, ocid, date).await
    }

    pub async fn character_hexamatrix<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::Hexamatrix, ocid, date).await
    }

    pub async fn character_hexamatrix_stat<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::HexamatrixStat, ocid, date)
            .await
    }

    /// 무릉도장 최고 기록.
    pub async fn character_dojang<T: DeserializeOwned>(
        &self,
        ocid: &str,
        date: Option<Timestamp>,
    ) -> ApiResult<T> {
        self.character_info(CharacterEndpoint::Dojang, ocid, date).await
    }

    async fn character_query<T: DeserializeOwned>(
        &self,
        path: &str,
        ocid: &str,
        date: Option<Timestamp>,
        extra: Params,
    ) -> ApiResult<T> {
        require_non_empty("ocid", ocid)?;

        let mut params = vec![("ocid", ocid.to_string())];
        params.extend(extra);
        self.fetch_dated(path, DataCategory::Character, date, params)
            .await
    }
}
