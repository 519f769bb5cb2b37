//! 카테고리별 조회 가능 기간.
//!
//! 업스트림은 카테고리마다 데이터를 제공하기 시작한 날짜가 다릅니다.
//! 레지스트리는 생성 시 주입된 불변 테이블만 참조합니다.

use chrono::NaiveDate;
use tracing::debug;

use crate::category::DataCategory;
use crate::error::{DateError, DateResult};
use crate::kst::{ensure_kst_aware, kst_midnight, KstDateTime, Timestamp};

/// 업스트림 API의 카테고리별 조회 시작일 (KST).
const UPSTREAM_FLOORS: [(DataCategory, NaiveDate); 7] = [
    (DataCategory::Character, ymd(2023, 12, 21)),
    (DataCategory::Union, ymd(2023, 12, 21)),
    (DataCategory::Guild, ymd(2023, 12, 21)),
    (DataCategory::Ranking, ymd(2023, 12, 22)),
    (DataCategory::Cube, ymd(2022, 11, 25)),
    (DataCategory::Starforce, ymd(2023, 12, 27)),
    (DataCategory::Potential, ymd(2024, 1, 25)),
];

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid floor date"),
    }
}

/// 카테고리 → 조회 시작일 레지스트리.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWindowRegistry {
    floors: [NaiveDate; 7],
}

impl QueryWindowRegistry {
    /// 카테고리별 시작일을 돌려주는 함수로 레지스트리를 생성합니다.
    pub fn new(floor: impl Fn(DataCategory) -> NaiveDate) -> Self {
        Self {
            floors: DataCategory::ALL.map(floor),
        }
    }

    /// 업스트림 API의 시작일 테이블.
    pub fn upstream() -> Self {
        UPSTREAM_FLOORS
            .iter()
            .fold(Self::new(|_| NaiveDate::MIN), |registry, &(category, floor)| {
                registry.with_floor(category, floor)
            })
    }

    /// 한 카테고리의 시작일을 교체합니다.
    pub fn with_floor(mut self, category: DataCategory, floor: NaiveDate) -> Self {
        self.floors[category.index()] = floor;
        self
    }

    /// 카테고리의 조회 시작 시각 (KST 자정).
    pub fn floor_for(&self, category: DataCategory) -> DateResult<KstDateTime> {
        kst_midnight(self.floors[category.index()])
    }

    /// 날짜가 KST이며 카테고리 조회 가능 기간 안인지 검사합니다.
    ///
    /// 시간대 검사가 먼저 수행되므로 KST가 아닌 날짜는 기간과 무관하게
    /// 시간대 에러로 실패합니다.
    pub fn check_valid(&self, date: impl Into<Timestamp>, category: DataCategory) -> DateResult<()> {
        self.checked(date, category).map(|_| ())
    }

    /// [`check_valid`](Self::check_valid)와 같으며 검증된 KST 시각을 돌려줍니다.
    pub fn checked(&self, date: impl Into<Timestamp>, category: DataCategory) -> DateResult<KstDateTime> {
        let date = ensure_kst_aware(date)?;
        let floor = self.floor_for(category)?;

        if date < floor {
            debug!(
                category = %category,
                date = %date,
                floor = %floor,
                "Date before query window"
            );
            return Err(DateError::BeforeQueryWindow {
                category,
                floor: floor.date_naive(),
                requested: date.date_naive(),
            });
        }

        Ok(date)
    }
}

impl Default for QueryWindowRegistry {
    fn default() -> Self {
        Self::upstream()
    }
}
