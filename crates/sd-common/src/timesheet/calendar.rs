use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{DeskError, DeskResult};

/// 週の始まり（ロケール依存にせず明示的に渡す）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Monday,
    /// 日本ロケールのカレンダー表示に合わせて日曜始まりを既定にする
    #[default]
    Sunday,
}

impl WeekStart {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStart::Monday => "monday",
            WeekStart::Sunday => "sunday",
        }
    }

    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

impl FromStr for WeekStart {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(WeekStart::Monday),
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            other => Err(DeskError::InvalidArgument(format!(
                "unknown week start '{other}' (expected monday|sunday)"
            ))),
        }
    }
}

/// 一括入力の対象期間
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    ThisWeek,
    #[default]
    ThisMonth,
}

impl DateRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::ThisWeek => "this-week",
            DateRange::ThisMonth => "this-month",
        }
    }
}

impl FromStr for DateRange {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "this-week" => Ok(DateRange::ThisWeek),
            "this-month" => Ok(DateRange::ThisMonth),
            other => Err(DeskError::InvalidArgument(format!(
                "unknown date range '{other}' (expected this-week|this-month)"
            ))),
        }
    }
}

/// 表示中の年月（内部では月初日で保持する）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> DeskResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| DeskError::InvalidArgument(format!("invalid month {year}-{month:02}")))
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// 月の全日（1日〜末日）
    ///
    /// 表現可能な最終月でも末日まで含める（`iter_days` は最終日を落とす）。
    pub fn days(&self) -> Vec<NaiveDate> {
        let month = self.month();
        (0..31)
            .map_while(|n| self.first.checked_add_days(Days::new(n)))
            .take_while(|day| day.month() == month)
            .collect()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = DeskError;

    /// "2024-06" / "2024/06" を受け付ける
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            DeskError::InvalidArgument(format!("invalid year-month '{s}' (expected YYYY-MM)"))
        };
        let (year, month) = s.trim().split_once(['-', '/']).ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// date を含む 1 週間（week_start から 7 日）
///
/// 週が chrono の表現範囲をはみ出す場合は InvalidArgument。
pub fn week_containing(date: NaiveDate, week_start: WeekStart) -> DeskResult<Vec<NaiveDate>> {
    let out_of_range = || {
        DeskError::InvalidArgument(format!(
            "week containing {date} is outside the supported date range"
        ))
    };

    let offset = (7 + date.weekday().num_days_from_monday()
        - week_start.weekday().num_days_from_monday())
        % 7;
    let start = date
        .checked_sub_days(Days::new(u64::from(offset)))
        .ok_or_else(out_of_range)?;

    (0..7)
        .map(|n| start.checked_add_days(Days::new(n)).ok_or_else(out_of_range))
        .collect()
}

/// 対象期間を具体的な日付集合に展開する
///
/// - ThisWeek: today を含む週（月をまたぐ場合も 7 日すべて）
/// - ThisMonth: 表示中の月の全日
pub fn resolve_target_dates(
    range: DateRange,
    displayed: YearMonth,
    today: NaiveDate,
    week_start: WeekStart,
) -> DeskResult<BTreeSet<NaiveDate>> {
    let dates = match range {
        DateRange::ThisWeek => week_containing(today, week_start)?,
        DateRange::ThisMonth => displayed.days(),
    };
    Ok(dates.into_iter().collect())
}
