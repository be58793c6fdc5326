use serde::{Deserialize, Serialize};
use tracing::debug;

use super::calendar::{is_weekend, WeekStart, YearMonth};
use super::WorkEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetConfig {
    /// 「今週」の起点
    pub week_start: WeekStart,
    /// 月生成時に承認済みとして扱う先頭日数（プレースホルダ）
    pub approved_placeholder_days: usize,
    /// 平日の既定稼働時間
    pub default_working_hours: f64,
}

impl Default for TimesheetConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            approved_placeholder_days: 5,
            default_working_hours: 8.0,
        }
    }
}

/// 表示月の勤怠グリッドを生成する
///
/// 平日は default_working_hours、土日は 0 時間、残業 0、作業内容は空。
/// 先頭 approved_placeholder_days 日は承認済みで始まる。
pub fn generate_month(month: YearMonth, config: &TimesheetConfig) -> Vec<WorkEntry> {
    let entries: Vec<_> = month
        .days()
        .into_iter()
        .enumerate()
        .map(|(index, date)| {
            let hours = if is_weekend(date) {
                0.0
            } else {
                config.default_working_hours
            };
            let mut entry = WorkEntry::new(date, hours);
            entry.is_approved = index < config.approved_placeholder_days;
            entry
        })
        .collect();

    debug!(
        month = %month,
        days = entries.len(),
        approved = config.approved_placeholder_days.min(entries.len()),
        "generated month work entries"
    );

    entries
}
