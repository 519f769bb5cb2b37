//! # Maple API
//!
//! MapleStory Open API(Nexon) 타입 클라이언트.
//!
//! 모든 조회는 `maple-core`의 KST 시간대 검증과 카테고리별 조회 기간 검사를
//! 통과한 뒤에만 HTTP 요청을 보냅니다.
//!
//! ```no_run
//! use maple_api::{MapleClient, RankingEntry, RankingFilter, RankingPage, World};
//! use maple_core::ApiConfig;
//!
//! # async fn run() -> Result<(), maple_api::ApiError> {
//! let client = MapleClient::new(ApiConfig::new("API_KEY"))?;
//! let page: RankingPage<RankingEntry> = client
//!     .overall_ranking(&RankingFilter::new().with_world(World::Scania))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod codes;
pub mod error;
pub mod page;
pub mod params;
pub mod service;
pub mod transport;

pub use client::MapleClient;
pub use codes::ApiErrorCode;
pub use error::{ApiError, ApiResult};
pub use page::{HistoryPage, Ranked, RankingEntry, RankingPage};
pub use params::{DojangDifficulty, GuildRankType, SkillGrade, World, WorldType};
pub use service::{CharacterEndpoint, GuildTypeRanking, RankingFilter};
pub use transport::{HttpGet, ReqwestTransport, API_KEY_HEADER};
