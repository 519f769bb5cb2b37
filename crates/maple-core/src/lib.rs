//! # Maple Core
//!
//! MapleStory Open API 조회 전에 수행하는 검증 로직을 제공합니다.
//!
//! - KST(UTC+9) 시각 생성 및 시간대 검증
//! - 카테고리별 조회 가능 시작일
//! - date/cursor 배타 규칙과 count 범위 규칙
//! - 위 규칙을 한 번에 적용하는 조회 요청 값 객체
//! - 로깅 및 설정 로드
//!
//! 모든 검증은 동기적이며 네트워크에 접근하지 않습니다.

pub mod category;
pub mod config;
pub mod error;
pub mod kst;
pub mod logging;
pub mod request;
pub mod rules;
pub mod window;

pub use category::DataCategory;
pub use config::ApiConfig;
pub use error::*;
pub use kst::{Clock, FixedClock, KstClock, KstDateTime, SystemClock, Timestamp};
pub use logging::{init_logging, init_logging_from_env, LogConfig, LogFormat};
pub use request::{CountArg, CursorPolicy, PageCursor, QueryWindowRequest, ValidatedWindow};
pub use rules::{DateCursorRule, ResultCount, ResultCountRule};
pub use window::QueryWindowRegistry;
