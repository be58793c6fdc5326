use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ensure_hours, ensure_unique_dates, WorkEntry};
use crate::error::{DeskError, DeskResult};

/// グリッド上のセル単位の編集
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "field", content = "value")]
pub enum EntryEdit {
    WorkingHours(f64),
    OvertimeHours(f64),
    Description(String),
}

impl EntryEdit {
    pub fn field_name(&self) -> &'static str {
        match self {
            EntryEdit::WorkingHours(_) => "working_hours",
            EntryEdit::OvertimeHours(_) => "overtime_hours",
            EntryEdit::Description(_) => "description",
        }
    }

    fn validate(&self) -> DeskResult<()> {
        match self {
            EntryEdit::WorkingHours(hours) | EntryEdit::OvertimeHours(hours) => {
                ensure_hours(self.field_name(), *hours)
            }
            EntryEdit::Description(_) => Ok(()),
        }
    }
}

/// 1 セルだけ書き換えた新しいエントリ列を返す
///
/// 承認済みの日は EntryLocked、存在しない日は InvalidArgument。
pub fn edit_entry(
    entries: &[WorkEntry],
    date: NaiveDate,
    edit: EntryEdit,
) -> DeskResult<Vec<WorkEntry>> {
    edit.validate()?;
    ensure_unique_dates(entries)?;

    let index = entries
        .iter()
        .position(|entry| entry.date == date)
        .ok_or_else(|| DeskError::InvalidArgument(format!("no work entry for {date}")))?;

    if entries[index].is_approved {
        return Err(DeskError::EntryLocked(date));
    }

    let field = edit.field_name();
    let mut result = entries.to_vec();
    let target = &mut result[index];
    match edit {
        EntryEdit::WorkingHours(hours) => target.working_hours = hours,
        EntryEdit::OvertimeHours(hours) => target.overtime_hours = hours,
        EntryEdit::Description(text) => target.description = text,
    }

    debug!(%date, field, "edited work entry");
    Ok(result)
}
