//! 엔드포인트별 조회.
//!
//! 각 하위 모듈은 [`MapleClient`](crate::MapleClient)에 조회 메서드를 추가합니다.

pub mod character;
pub mod guild;
pub mod history;
pub mod ranking;
pub mod union;

pub use character::CharacterEndpoint;
pub use ranking::{GuildTypeRanking, RankingFilter};
