use serde::{Deserialize, Serialize};

use super::WorkEntry;

/// 月次集計（グリッド下部の合計行）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub total_working_hours: f64,
    pub total_overtime_hours: f64,
    pub approved_days: usize,
    pub pending_days: usize,
    /// 稼働時間 > 0 の日数
    pub worked_days: usize,
}

pub fn summarize(entries: &[WorkEntry]) -> MonthlySummary {
    entries
        .iter()
        .fold(MonthlySummary::default(), |mut summary, entry| {
            summary.total_working_hours += entry.working_hours;
            summary.total_overtime_hours += entry.overtime_hours;
            if entry.is_approved {
                summary.approved_days += 1;
            } else {
                summary.pending_days += 1;
            }
            if entry.working_hours > 0.0 {
                summary.worked_days += 1;
            }
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timesheet::{generate_month, TimesheetConfig, YearMonth};

    #[test]
    fn summarizes_generated_month() {
        // 2024-06 は平日 20 日
        let entries = generate_month(YearMonth::new(2024, 6).unwrap(), &TimesheetConfig::default());
        let summary = summarize(&entries);

        assert_eq!(summary.total_working_hours, 160.0);
        assert_eq!(summary.total_overtime_hours, 0.0);
        assert_eq!(summary.approved_days, 5);
        assert_eq!(summary.pending_days, 25);
        assert_eq!(summary.worked_days, 20);
    }

    #[test]
    fn empty_entries_summarize_to_zero() {
        assert_eq!(summarize(&[]), MonthlySummary::default());
    }
}
