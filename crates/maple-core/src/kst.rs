//! KST(한국 표준시, UTC+9) 시각 생성 및 검증.
//!
//! 업스트림 API의 모든 날짜는 KST 기준입니다. 이 모듈은 다음을 제공합니다:
//! - aware/naive 시각을 모두 담는 [`Timestamp`]
//! - 오프셋 비교 기반의 KST 판별 (`Asia/Seoul`과 고정 `+09:00` 모두 KST)
//! - 구성 요소별 범위 검사가 포함된 KST 시각 생성
//! - 교체 가능한 [`Clock`]을 사용하는 [`KstClock`]

use std::ops::RangeInclusive;

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
    Timelike, Utc,
};

use crate::error::{DateError, DateResult};

/// KST의 UTC 대비 오프셋 (초).
pub const KST_OFFSET_SECS: i32 = 9 * 3600;

/// 업스트림 쿼리 파라미터 날짜 형식.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// KST 오프셋이 보장된 시각.
pub type KstDateTime = DateTime<FixedOffset>;

/// KST 고정 오프셋. 컴파일 시점에 생성됩니다.
pub const KST: FixedOffset = match FixedOffset::east_opt(KST_OFFSET_SECS) {
    Some(offset) => offset,
    None => panic!("UTC+9 must be a valid offset"),
};

/// KST 고정 오프셋.
pub fn kst() -> FixedOffset {
    KST
}

/// 시간대 정보가 있거나(aware) 없는(naive) 시각.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Naive(NaiveDateTime),
    Aware(DateTime<FixedOffset>),
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Timestamp::Naive(naive)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        let offset = dt.offset().fix();
        Timestamp::Aware(dt.with_timezone(&offset))
    }
}

/// 시간대 정보가 있는 시각인지 확인합니다.
pub fn is_aware(ts: impl Into<Timestamp>) -> bool {
    matches!(ts.into(), Timestamp::Aware(_))
}

/// 시간대 정보가 없는 시각인지 확인합니다.
pub fn is_naive(ts: impl Into<Timestamp>) -> bool {
    matches!(ts.into(), Timestamp::Naive(_))
}

/// 오프셋이 정확히 UTC+9인지 확인합니다.
///
/// 이름 있는 시간대(`Asia/Seoul`)와 고정 오프셋을 구분하지 않고 UTC 차이만 비교합니다.
pub fn is_kst_offset<O: Offset>(offset: &O) -> bool {
    offset.fix().local_minus_utc() == KST_OFFSET_SECS
}

/// aware이면서 KST 오프셋인 시각인지 확인합니다.
pub fn is_kst_aware(ts: impl Into<Timestamp>) -> bool {
    match ts.into() {
        Timestamp::Aware(dt) => is_kst_offset(dt.offset()),
        Timestamp::Naive(_) => false,
    }
}

/// 같은 시점을 KST로 변환합니다. naive 시각은 UTC로 간주합니다.
pub fn to_kst(ts: impl Into<Timestamp>) -> KstDateTime {
    match ts.into() {
        Timestamp::Aware(dt) => dt.with_timezone(&kst()),
        Timestamp::Naive(naive) => Utc.from_utc_datetime(&naive).with_timezone(&kst()),
    }
}

/// 시각이 KST aware인지 검증합니다.
pub fn validate(ts: impl Into<Timestamp>) -> DateResult<()> {
    ensure_kst_aware(ts).map(|_| ())
}

/// KST aware 시각이면 그대로 돌려주고, 아니면 시간대 에러를 반환합니다.
pub fn ensure_kst_aware(ts: impl Into<Timestamp>) -> DateResult<KstDateTime> {
    match ts.into() {
        Timestamp::Naive(_) => Err(DateError::MissingTimezone),
        Timestamp::Aware(dt) if is_kst_offset(dt.offset()) => Ok(dt),
        Timestamp::Aware(dt) => Err(DateError::WrongTimezone {
            offset: *dt.offset(),
        }),
    }
}

/// 두 시각이 KST 기준 같은 날짜인지 확인합니다.
pub fn is_same_calendar_date(a: impl Into<Timestamp>, b: impl Into<Timestamp>) -> bool {
    to_kst(a).date_naive() == to_kst(b).date_naive()
}

/// KST 벽시계 시각을 KST aware 시각으로 만듭니다.
///
/// chrono가 표현할 수 있는 범위의 경계에서 UTC로 옮길 수 없으면 `OutOfRange`를 반환합니다.
pub fn from_kst_local(naive: NaiveDateTime) -> DateResult<KstDateTime> {
    KST.from_local_datetime(&naive)
        .single()
        .ok_or(DateError::OutOfRange {
            component: "year",
            value: naive.year().into(),
        })
}

/// 해당 날짜의 KST 자정.
pub fn kst_midnight(date: NaiveDate) -> DateResult<KstDateTime> {
    from_kst_local(date.and_time(NaiveTime::MIN))
}

/// 구성 요소로 KST 시각을 생성합니다.
///
/// 범위를 벗어난 구성 요소가 있으면 해당 이름과 값을 담은
/// [`DateError::OutOfRange`]를 반환합니다.
pub fn make(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    microsecond: u32,
) -> DateResult<KstDateTime> {
    check_range("year", year.into(), 1..=9999)?;
    check_range("month", month.into(), 1..=12)?;
    check_range("day", day.into(), 1..=days_in_month(year, month).into())?;
    check_range("hour", hour.into(), 0..=23)?;
    check_range("minute", minute.into(), 0..=59)?;
    check_range("second", second.into(), 0..=59)?;
    check_range("microsecond", microsecond.into(), 0..=999_999)?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_micro_opt(hour, minute, second, microsecond))
        .ok_or(DateError::OutOfRange {
            component: "day",
            value: day.into(),
        })?;

    ensure_kst_aware(from_kst_local(naive)?)
}

fn check_range(component: &'static str, value: i64, range: RangeInclusive<i64>) -> DateResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(DateError::OutOfRange { component, value })
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
        .unwrap_or(28)
}

/// 업스트림 쿼리 파라미터 형식(`YYYY-MM-DD`)으로 변환합니다.
pub fn query_date(dt: &KstDateTime) -> String {
    dt.format(QUERY_DATE_FORMAT).to_string()
}

/// 사람이 읽기 위한 표현.
///
/// 시/분/초가 모두 0이면 날짜만, 아니면 초 단위까지 표시하고 KST이면 ` KST`를 붙입니다.
/// 초 미만 단위는 표시에 영향을 주지 않습니다.
pub fn display(dt: &DateTime<FixedOffset>) -> String {
    let body = if dt.hour() == 0 && dt.minute() == 0 && dt.second() == 0 {
        dt.format(QUERY_DATE_FORMAT).to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    };

    if is_kst_offset(dt.offset()) {
        format!("{} KST", body)
    } else {
        body
    }
}

/// 업스트림 응답의 날짜 문자열을 KST 시각으로 해석합니다.
///
/// `2023-12-22`, `2024-02-21T00:00+09:00`, RFC 3339 형식을 지원합니다.
pub fn parse_api_date(input: &str) -> DateResult<KstDateTime> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&kst()));
    }
    if let Ok(dt) = DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M%:z") {
        return Ok(dt.with_timezone(&kst()));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, QUERY_DATE_FORMAT) {
        return kst_midnight(date);
    }

    Err(DateError::InvalidFormat {
        input: input.to_string(),
    })
}

// ==================== Clock ====================

/// 현재 시각 공급자.
pub trait Clock: Send + Sync {
    /// 현재 UTC 시각.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// 시스템 시계.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 고정된 시각을 돌려주는 시계 (테스트용).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// 주어진 시점에 고정된 시계 생성.
    pub fn new<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self {
            instant: instant.with_timezone(&Utc),
        }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// KST 기준 현재/오늘/어제를 계산하는 시계.
///
/// 모든 생성 메서드는 반환 직전에 [`ensure_kst_aware`]로 결과를 검사합니다.
#[derive(Debug, Clone, Default)]
pub struct KstClock<C = SystemClock> {
    clock: C,
}

impl<C: Clock> KstClock<C> {
    /// 새로운 KST 시계 생성.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// 현재 KST 시각.
    pub fn current(&self) -> DateResult<KstDateTime> {
        ensure_kst_aware(self.clock.now_utc().with_timezone(&kst()))
    }

    /// 오늘 KST 자정.
    pub fn today(&self) -> DateResult<KstDateTime> {
        let today = self.current()?.date_naive();
        ensure_kst_aware(kst_midnight(today)?)
    }

    /// 어제 KST 자정.
    pub fn yesterday(&self) -> DateResult<KstDateTime> {
        let today = self.current()?.date_naive();
        let yesterday = today.pred_opt().ok_or(DateError::OutOfRange {
            component: "day",
            value: today.day().into(),
        })?;
        ensure_kst_aware(kst_midnight(yesterday)?)
    }

    /// 오늘 날짜의 지정한 KST 시각.
    pub fn today_with_time(&self, hour: u32, minute: u32) -> DateResult<KstDateTime> {
        let today = self.current()?.date_naive();
        make(today.year(), today.month(), today.day(), hour, minute, 0, 0)
    }
}
