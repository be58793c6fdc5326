use std::collections::HashMap;

use crate::catalog::BUILTIN_SCORE_ROWS;
use crate::error::{ensure_id, DeskError, DeskResult};

/// マッチスコアの上限
pub const MAX_SCORE: u8 = 100;

/// 案件 × エンジニアの固定スコア表
///
/// project_id → engineer_id → score の二段マップで保持し、検索時に String を確保しない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    scores: HashMap<String, HashMap<String, u8>>,
    len: usize,
}

impl ScoreTable {
    /// 行データから表を構築する
    ///
    /// 構築時に一括検証し、1件でも不正があれば表を作らない:
    /// - ID が空 → InvariantViolation
    /// - スコアが 100 超 → InvariantViolation
    /// - 同じ (project, engineer) の重複 → InvariantViolation
    pub fn new<I, P, E>(rows: I) -> DeskResult<Self>
    where
        I: IntoIterator<Item = (P, E, u8)>,
        P: Into<String>,
        E: Into<String>,
    {
        let mut table = Self::default();

        for (project_id, engineer_id, score) in rows {
            let project_id = project_id.into();
            let engineer_id = engineer_id.into();

            ensure_id("project_id", &project_id)
                .and(ensure_id("engineer_id", &engineer_id))
                .map_err(|err| DeskError::InvariantViolation(format!("score table row: {err}")))?;

            if score > MAX_SCORE {
                return Err(DeskError::InvariantViolation(format!(
                    "score for ({project_id}, {engineer_id}) is {score}, expected 0..={MAX_SCORE}"
                )));
            }

            let per_project = table.scores.entry(project_id.clone()).or_default();
            if per_project.insert(engineer_id.clone(), score).is_some() {
                return Err(DeskError::InvariantViolation(format!(
                    "duplicate score row for ({project_id}, {engineer_id})"
                )));
            }
            table.len += 1;
        }

        Ok(table)
    }

    /// モックデータとして同梱している固定表
    pub fn builtin() -> DeskResult<Self> {
        Self::new(BUILTIN_SCORE_ROWS.iter().copied())
    }

    pub fn get(&self, project_id: &str, engineer_id: &str) -> Option<u8> {
        self.scores
            .get(project_id)
            .and_then(|per_project| per_project.get(engineer_id))
            .copied()
    }

    pub fn contains(&self, project_id: &str, engineer_id: &str) -> bool {
        self.get(project_id, engineer_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_tabulated_pairs() {
        let table = ScoreTable::new([("P001", "E001", 95), ("P001", "E002", 0)]).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("P001", "E001"), Some(95));
        assert_eq!(table.get("P001", "E002"), Some(0));
        assert_eq!(table.get("P001", "E003"), None);
        assert_eq!(table.get("P999", "E001"), None);
    }

    #[test]
    fn rejects_scores_above_hundred() {
        let err = ScoreTable::new([("P001", "E001", 101)]).unwrap_err();
        assert!(matches!(err, DeskError::InvariantViolation(_)));
    }

    #[test]
    fn rejects_duplicate_pairs() {
        let err = ScoreTable::new([("P001", "E001", 80), ("P001", "E001", 70)]).unwrap_err();
        assert!(matches!(err, DeskError::InvariantViolation(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn rejects_blank_ids_at_construction() {
        let err = ScoreTable::new([("", "E001", 80)]).unwrap_err();
        assert!(matches!(err, DeskError::InvariantViolation(_)));
    }

    #[test]
    fn builtin_table_is_valid() {
        let table = ScoreTable::builtin().unwrap();
        assert_eq!(table.len(), BUILTIN_SCORE_ROWS.len());
        assert!(!table.is_empty());
    }
}
