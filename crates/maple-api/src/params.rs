//! 조회 파라미터 열거형.
//!
//! 랭킹 유형은 숫자 코드로, 월드와 스킬 차수는 문자열로 전송됩니다.
//! 각 열거형은 하나의 식별자와 한글 표시 이름을 가지며 영문/한글
//! 이름 모두에서 파싱됩니다.

use std::fmt;
use std::str::FromStr;

/// 월드 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorldType {
    /// 일반 월드
    Normal,
    /// 리부트 월드
    Reboot,
}

impl WorldType {
    pub fn code(&self) -> u8 {
        match self {
            WorldType::Normal => 0,
            WorldType::Reboot => 1,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorldType::Normal => "일반",
            WorldType::Reboot => "리부트",
        }
    }
}

impl fmt::Display for WorldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for WorldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "일반" | "0" => Ok(WorldType::Normal),
            "reboot" | "리부트" | "1" => Ok(WorldType::Reboot),
            _ => Err(format!("Unknown world type: {}", s)),
        }
    }
}

/// 게임 월드. 업스트림에는 한글 이름으로 전송됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum World {
    Scania,
    Bera,
    Luna,
    Zenith,
    Croa,
    Union,
    Elysium,
    Enosis,
    Red,
    Aurora,
    Arcane,
    Nova,
    Burning,
    Burning2,
    Burning3,
    Reboot,
    Reboot2,
}

impl World {
    /// 모든 월드 (일반 월드, 리부트 월드 순).
    pub const ALL: [World; 17] = [
        World::Scania,
        World::Bera,
        World::Luna,
        World::Zenith,
        World::Croa,
        World::Union,
        World::Elysium,
        World::Enosis,
        World::Red,
        World::Aurora,
        World::Arcane,
        World::Nova,
        World::Burning,
        World::Burning2,
        World::Burning3,
        World::Reboot,
        World::Reboot2,
    ];

    /// 업스트림 파라미터 값 (한글 이름).
    pub fn name(&self) -> &'static str {
        match self {
            World::Scania => "스카니아",
            World::Bera => "베라",
            World::Luna => "루나",
            World::Zenith => "제니스",
            World::Croa => "크로아",
            World::Union => "유니온",
            World::Elysium => "엘리시움",
            World::Enosis => "이노시스",
            World::Red => "레드",
            World::Aurora => "오로라",
            World::Arcane => "아케인",
            World::Nova => "노바",
            World::Burning => "버닝",
            World::Burning2 => "버닝2",
            World::Burning3 => "버닝3",
            World::Reboot => "리부트",
            World::Reboot2 => "리부트2",
        }
    }

    /// 영문 식별자.
    pub fn id(&self) -> &'static str {
        match self {
            World::Scania => "scania",
            World::Bera => "bera",
            World::Luna => "luna",
            World::Zenith => "zenith",
            World::Croa => "croa",
            World::Union => "union",
            World::Elysium => "elysium",
            World::Enosis => "enosis",
            World::Red => "red",
            World::Aurora => "aurora",
            World::Arcane => "arcane",
            World::Nova => "nova",
            World::Burning => "burning",
            World::Burning2 => "burning2",
            World::Burning3 => "burning3",
            World::Reboot => "reboot",
            World::Reboot2 => "reboot2",
        }
    }

    pub fn world_type(&self) -> WorldType {
        match self {
            World::Reboot | World::Reboot2 => WorldType::Reboot,
            _ => WorldType::Normal,
        }
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for World {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        World::ALL
            .into_iter()
            .find(|world| world.name() == normalized || world.id() == normalized)
            .ok_or_else(|| format!("Unknown world: {}", s))
    }
}

/// 스킬 전직 차수 (`character_skill_grade`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillGrade {
    Zero,
    First,
    FirstHalf,
    Second,
    SecondHalf,
    Third,
    Fourth,
    HyperPassive,
    HyperActive,
    Fifth,
    Sixth,
}

impl SkillGrade {
    pub const ALL: [SkillGrade; 11] = [
        SkillGrade::Zero,
        SkillGrade::First,
        SkillGrade::FirstHalf,
        SkillGrade::Second,
        SkillGrade::SecondHalf,
        SkillGrade::Third,
        SkillGrade::Fourth,
        SkillGrade::HyperPassive,
        SkillGrade::HyperActive,
        SkillGrade::Fifth,
        SkillGrade::Sixth,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SkillGrade::Zero => "0",
            SkillGrade::First => "1",
            SkillGrade::FirstHalf => "1.5",
            SkillGrade::Second => "2",
            SkillGrade::SecondHalf => "2.5",
            SkillGrade::Third => "3",
            SkillGrade::Fourth => "4",
            SkillGrade::HyperPassive => "hyperpassive",
            SkillGrade::HyperActive => "hyperactive",
            SkillGrade::Fifth => "5",
            SkillGrade::Sixth => "6",
        }
    }
}

impl fmt::Display for SkillGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for SkillGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        SkillGrade::ALL
            .into_iter()
            .find(|grade| grade.code() == normalized)
            .ok_or_else(|| format!("Unknown skill grade: {}", s))
    }
}

/// 길드 랭킹 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuildRankType {
    /// 주간 명성치
    WeeklyFame,
    /// 플래그 레이스
    FlagRace,
    /// 지하 수로
    Sewer,
}

impl GuildRankType {
    pub const ALL: [GuildRankType; 3] = [
        GuildRankType::WeeklyFame,
        GuildRankType::FlagRace,
        GuildRankType::Sewer,
    ];

    pub fn code(&self) -> u8 {
        match self {
            GuildRankType::WeeklyFame => 0,
            GuildRankType::FlagRace => 1,
            GuildRankType::Sewer => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GuildRankType::WeeklyFame => "주간명성치",
            GuildRankType::FlagRace => "플래그레이스",
            GuildRankType::Sewer => "지하수로",
        }
    }
}

impl fmt::Display for GuildRankType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for GuildRankType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 한글 이름은 띄어쓰기 유무를 모두 허용
        let normalized: String = s.split_whitespace().collect::<String>().to_lowercase();
        match normalized.as_str() {
            "weekly_fame" | "weeklyfame" | "주간명성치" | "0" => Ok(GuildRankType::WeeklyFame),
            "flag_race" | "flagrace" | "플래그레이스" | "1" => Ok(GuildRankType::FlagRace),
            "sewer" | "지하수로" | "2" => Ok(GuildRankType::Sewer),
            _ => Err(format!("Unknown guild rank type: {}", s)),
        }
    }
}

/// 무릉도장 난이도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DojangDifficulty {
    /// 일반
    Novice,
    /// 통달
    Master,
}

impl DojangDifficulty {
    pub fn code(&self) -> u8 {
        match self {
            DojangDifficulty::Novice => 0,
            DojangDifficulty::Master => 1,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DojangDifficulty::Novice => "일반",
            DojangDifficulty::Master => "통달",
        }
    }
}

impl fmt::Display for DojangDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for DojangDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "novice" | "일반" | "0" => Ok(DojangDifficulty::Novice),
            "master" | "통달" | "1" => Ok(DojangDifficulty::Master),
            _ => Err(format!("Unknown dojang difficulty: {}", s)),
        }
    }
}
