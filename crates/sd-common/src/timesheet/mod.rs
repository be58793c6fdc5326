pub mod apply;
pub mod calendar;
pub mod edit;
pub mod month;
pub mod summary;

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DeskError, DeskResult};

pub use apply::{apply_bulk_settings, apply_periodic, copy_previous_month};
pub use calendar::{resolve_target_dates, week_containing, DateRange, WeekStart, YearMonth};
pub use edit::{edit_entry, EntryEdit};
pub use month::{generate_month, TimesheetConfig};
pub use summary::{summarize, MonthlySummary};

/// 1 日の上限時間
pub const MAX_DAILY_HOURS: f64 = 24.0;

/// 1 日分の勤怠入力
///
/// is_approved が true のエントリは承認済みロックで、この crate のどの操作でも値を変えない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub date: NaiveDate,
    pub working_hours: f64,
    pub overtime_hours: f64,
    pub description: String,
    pub is_approved: bool,
}

impl WorkEntry {
    pub fn new(date: NaiveDate, working_hours: f64) -> Self {
        Self {
            date,
            working_hours,
            overtime_hours: 0.0,
            description: String::new(),
            is_approved: false,
        }
    }

    fn stamp(&mut self, template: &EntryTemplate) {
        self.working_hours = template.working_hours;
        self.overtime_hours = template.overtime_hours;
        self.description.clone_from(&template.description);
    }
}

/// 対象エントリに書き込む値の組
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryTemplate {
    pub working_hours: f64,
    pub overtime_hours: f64,
    pub description: String,
}

impl EntryTemplate {
    pub fn new(working_hours: f64, overtime_hours: f64, description: impl Into<String>) -> Self {
        Self {
            working_hours,
            overtime_hours,
            description: description.into(),
        }
    }

    /// 「前月コピー」で使う固定テンプレート
    pub fn previous_month() -> Self {
        Self::new(8.0, 1.0, "前月実績からコピー")
    }

    pub fn validate(&self) -> DeskResult<()> {
        ensure_hours("working_hours", self.working_hours)?;
        ensure_hours("overtime_hours", self.overtime_hours)
    }
}

/// 一括入力ダイアログの設定値
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSettings {
    pub date_range: DateRange,
    pub working_hours: f64,
    pub overtime_hours: f64,
    pub description: String,
}

impl Default for BulkSettings {
    fn default() -> Self {
        Self {
            date_range: DateRange::ThisWeek,
            working_hours: 8.0,
            overtime_hours: 0.0,
            description: String::new(),
        }
    }
}

impl BulkSettings {
    pub fn template(&self) -> EntryTemplate {
        EntryTemplate::new(self.working_hours, self.overtime_hours, self.description.clone())
    }
}

pub(crate) fn ensure_hours(field: &str, hours: f64) -> DeskResult<()> {
    if !hours.is_finite() || !(0.0..=MAX_DAILY_HOURS).contains(&hours) {
        return Err(DeskError::InvalidArgument(format!(
            "{field} must be between 0 and {MAX_DAILY_HOURS}, got {hours}"
        )));
    }
    Ok(())
}

/// 日付が一意であること（同じ日のエントリが 2 件あれば InvariantViolation）
pub(crate) fn ensure_unique_dates(entries: &[WorkEntry]) -> DeskResult<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.date) {
            return Err(DeskError::InvariantViolation(format!(
                "duplicate work entry for {}",
                entry.date
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn validates_template_hours() {
        assert!(EntryTemplate::new(8.0, 0.0, "").validate().is_ok());
        assert!(EntryTemplate::new(24.0, 24.0, "").validate().is_ok());
        assert!(EntryTemplate::new(24.5, 0.0, "").validate().is_err());
        assert!(EntryTemplate::new(8.0, -1.0, "").validate().is_err());
        assert!(EntryTemplate::new(f64::NAN, 0.0, "").validate().is_err());
    }

    #[test]
    fn detects_duplicate_dates() {
        let entries = vec![WorkEntry::new(date(3), 8.0), WorkEntry::new(date(3), 0.0)];
        assert!(matches!(
            ensure_unique_dates(&entries),
            Err(DeskError::InvariantViolation(msg)) if msg.contains("2024-06-03")
        ));
        assert!(ensure_unique_dates(&entries[..1]).is_ok());
    }

    #[test]
    fn work_entry_uses_camel_case_json() {
        let mut entry = WorkEntry::new(date(3), 8.0);
        entry.is_approved = true;
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["date"], "2024-06-03");
        assert_eq!(json["workingHours"], 8.0);
        assert_eq!(json["overtimeHours"], 0.0);
        assert_eq!(json["isApproved"], true);
    }

    #[test]
    fn bulk_settings_accept_ui_payload() {
        let settings: BulkSettings = serde_json::from_str(
            r#"{"dateRange":"this-month","workingHours":7.5,"overtimeHours":1,"description":"定例"}"#,
        )
        .unwrap();

        assert_eq!(settings.date_range, DateRange::ThisMonth);
        assert_eq!(settings.template(), EntryTemplate::new(7.5, 1.0, "定例"));
    }
}
