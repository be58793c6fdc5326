use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::provider::ScoreSource;
use crate::error::{ensure_id, DeskResult};
use crate::Engineer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    pub engineer: Engineer,
    pub score: u8,
}

/// 案件に対するエンジニア候補のランキング
pub struct RankedMatcher<S> {
    source: S,
}

impl<S: ScoreSource> RankedMatcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// 名簿の全員をスコア降順に並べる
    ///
    /// - 入力の名簿は変更しない（候補は clone して返す）
    /// - 同点は名簿の並び順を保つ（`sort_by` は安定ソート）
    /// - 空の名簿は空の結果
    /// - project_id と全 engineer.id はスコア計算の前にまとめて検証する
    pub fn rank(&self, project_id: &str, roster: &[Engineer]) -> DeskResult<Vec<RankedCandidate>> {
        ensure_id("project_id", project_id)?;
        for engineer in roster {
            ensure_id("engineer_id", &engineer.id)?;
        }

        let mut ranked = roster
            .iter()
            .map(|engineer| {
                let score = self.source.score(project_id, &engineer.id)?;
                Ok(RankedCandidate {
                    engineer: engineer.clone(),
                    score,
                })
            })
            .collect::<DeskResult<Vec<_>>>()?;

        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            project_id,
            candidates = ranked.len(),
            top_score = ?ranked.first().map(|c| c.score),
            "ranked engineers for project"
        );

        Ok(ranked)
    }
}

/// アサイン済みエンジニアを候補から除外する（順序は保持）
pub fn exclude_assigned<I, T>(
    candidates: Vec<RankedCandidate>,
    assigned_ids: I,
) -> Vec<RankedCandidate>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let assigned: HashSet<String> = assigned_ids
        .into_iter()
        .map(|id| id.as_ref().to_string())
        .collect();

    if assigned.is_empty() {
        return candidates;
    }

    candidates
        .into_iter()
        .filter(|candidate| !assigned.contains(&candidate.engineer.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::DeskError;
    use crate::matching::{FallbackMode, MatchScoreProvider, ScoreTable};

    /// 固定スコアを返すスタブ（表にないものは 0）
    struct StubSource(HashMap<&'static str, u8>);

    impl ScoreSource for StubSource {
        fn score(&self, _project_id: &str, engineer_id: &str) -> DeskResult<u8> {
            Ok(self.0.get(engineer_id).copied().unwrap_or(0))
        }
    }

    fn roster(ids: &[&str]) -> Vec<Engineer> {
        ids.iter().map(|id| Engineer::new(*id, format!("name-{id}"))).collect()
    }

    fn ids(candidates: &[RankedCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.engineer.id.as_str()).collect()
    }

    #[test]
    fn ties_keep_roster_order() {
        let stub = StubSource(HashMap::from([("A", 80), ("B", 80), ("C", 90)]));
        let matcher = RankedMatcher::new(stub);

        let ranked = matcher.rank("P001", &roster(&["A", "B", "C"])).unwrap();

        assert_eq!(ids(&ranked), vec!["C", "A", "B"]);
        assert_eq!(ranked.iter().map(|c| c.score).collect::<Vec<_>>(), vec![90, 80, 80]);
    }

    #[test]
    fn empty_roster_yields_empty_ranking() {
        let matcher = RankedMatcher::new(StubSource(HashMap::new()));
        assert!(matcher.rank("P001", &[]).unwrap().is_empty());
    }

    #[test]
    fn ranks_descending_and_keeps_every_engineer() {
        let table = ScoreTable::new([("P001", "E1", 40), ("P001", "E3", 100)]).unwrap();
        let matcher = RankedMatcher::new(MatchScoreProvider::new(table, FallbackMode::Random));
        let input = roster(&["E1", "E2", "E3", "E4", "E5"]);

        let ranked = matcher.rank("P001", &input).unwrap();

        assert_eq!(ranked.len(), input.len());
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(ranked[0].engineer.id, "E3");
        assert_eq!(ranked.last().unwrap().engineer.id, "E1");

        let mut got: Vec<_> = ids(&ranked);
        got.sort();
        assert_eq!(got, vec!["E1", "E2", "E3", "E4", "E5"]);
    }

    #[test]
    fn does_not_mutate_roster() {
        let matcher = RankedMatcher::new(StubSource(HashMap::from([("B", 99)])));
        let input = roster(&["A", "B"]);
        let before = input.clone();

        let _ = matcher.rank("P001", &input).unwrap();

        assert_eq!(input, before);
    }

    #[test]
    fn validates_ids_before_scoring() {
        let matcher = RankedMatcher::new(StubSource(HashMap::new()));

        assert!(matches!(
            matcher.rank("", &roster(&["A"])),
            Err(DeskError::InvalidArgument(_))
        ));
        assert!(matches!(
            matcher.rank("P001", &roster(&["A", ""])),
            Err(DeskError::InvalidArgument(_))
        ));
    }

    #[test]
    fn excludes_assigned_engineers_preserving_order() {
        let stub = StubSource(HashMap::from([("A", 70), ("B", 90), ("C", 80)]));
        let ranked = RankedMatcher::new(stub)
            .rank("P001", &roster(&["A", "B", "C"]))
            .unwrap();

        let remaining = exclude_assigned(ranked.clone(), ["C"]);
        assert_eq!(ids(&remaining), vec!["B", "A"]);

        let untouched = exclude_assigned(ranked.clone(), Vec::<String>::new());
        assert_eq!(untouched, ranked);
    }
}
