//! 조회 데이터 카테고리.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 조회 가능 기간이 정해진 데이터 카테고리.
///
/// 식별자는 하나이며, 영문 이름과 한글 이름은 별도의 조회 함수로 제공합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataCategory {
    /// 캐릭터 정보
    Character,
    /// 유니온 정보
    Union,
    /// 길드 정보
    Guild,
    /// 랭킹 정보
    Ranking,
    /// 큐브 사용 결과
    Cube,
    /// 스타포스 강화 결과
    Starforce,
    /// 잠재능력 재설정 결과
    Potential,
}

impl DataCategory {
    /// 모든 카테고리.
    pub const ALL: [DataCategory; 7] = [
        DataCategory::Character,
        DataCategory::Union,
        DataCategory::Guild,
        DataCategory::Ranking,
        DataCategory::Cube,
        DataCategory::Starforce,
        DataCategory::Potential,
    ];

    /// 영문 이름 (예: "RANKING").
    pub fn name(&self) -> &'static str {
        match self {
            DataCategory::Character => "CHARACTER",
            DataCategory::Union => "UNION",
            DataCategory::Guild => "GUILD",
            DataCategory::Ranking => "RANKING",
            DataCategory::Cube => "CUBE",
            DataCategory::Starforce => "STARFORCE",
            DataCategory::Potential => "POTENTIAL",
        }
    }

    /// 한글 표시 이름.
    pub fn display_name(&self) -> &'static str {
        match self {
            DataCategory::Character => "캐릭터",
            DataCategory::Union => "유니온",
            DataCategory::Guild => "길드",
            DataCategory::Ranking => "랭킹",
            DataCategory::Cube => "큐브",
            DataCategory::Starforce => "스타포스",
            DataCategory::Potential => "잠재능력",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DataCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        DataCategory::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed) || c.display_name() == trimmed)
            .ok_or_else(|| format!("Unknown data category: {}", s))
    }
}
