use chrono::NaiveDate;

/// sd-common 全体で共有するエラー型
///
/// 通常運用ではどの操作も失敗しない。ここに並ぶのは境界で検出する入力不正・不変条件違反のみ。
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DeskError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
    #[error("work entry {0} is approved and cannot be edited")]
    EntryLocked(NaiveDate),
}

impl DeskError {
    pub fn code(&self) -> &'static str {
        match self {
            DeskError::InvalidArgument(_) => "invalid_argument",
            DeskError::InvariantViolation(_) => "invariant_violation",
            DeskError::EntryLocked(_) => "entry_locked",
        }
    }
}

pub type DeskResult<T> = Result<T, DeskError>;

/// 空文字・空白のみの ID を InvalidArgument として弾く
pub(crate) fn ensure_id(kind: &str, value: &str) -> DeskResult<()> {
    if value.trim().is_empty() {
        return Err(DeskError::InvalidArgument(format!("{kind} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_ids() {
        assert!(ensure_id("project_id", "P001").is_ok());
        assert_eq!(
            ensure_id("project_id", "   "),
            Err(DeskError::InvalidArgument("project_id must not be empty".into()))
        );
    }

    #[test]
    fn exposes_stable_codes() {
        let locked = DeskError::EntryLocked(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(locked.code(), "entry_locked");
        assert!(locked.to_string().contains("2024-06-03"));
        assert_eq!(
            DeskError::InvariantViolation("dup".into()).code(),
            "invariant_violation"
        );
    }
}
