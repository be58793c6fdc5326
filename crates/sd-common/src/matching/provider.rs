use std::hash::{Hash, Hasher};

use rand::Rng;
use serde::{Deserialize, Serialize};
use siphasher::sip::SipHasher13;
use tracing::debug;

use super::score_table::ScoreTable;
use crate::error::{ensure_id, DeskResult};

/// 表にないペアに割り当てるスコアの下限（50〜99）
pub const FALLBACK_MIN: u8 = 50;
pub const FALLBACK_SPAN: u8 = 50;

/// Seeded モードの第2キー
/// ⚠️ 変更すると同じ seed でも全フォールバック値が変わる
const SEEDED_FALLBACK_K1: u64 = 0x5e5d_e5c0_0000_0001;

/// 表にないペアのスコアの決め方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "seed")]
pub enum FallbackMode {
    /// 呼び出し毎に乱数（画面の再描画でも値が変わる）
    #[default]
    Random,
    /// (seed, project_id, engineer_id) から決定論的に算出
    Seeded(u64),
}

impl FallbackMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackMode::Random => "random",
            FallbackMode::Seeded(_) => "seeded",
        }
    }
}

/// 案件 × エンジニアのスコア供給元
///
/// RankedMatcher はこの trait 越しにスコアを引くので、テストでは固定値のスタブを差し込める。
pub trait ScoreSource: Send + Sync {
    /// 0〜100 のスコアを返す。ID が空の場合のみ失敗する。
    fn score(&self, project_id: &str, engineer_id: &str) -> DeskResult<u8>;
}

impl<S: ScoreSource + ?Sized> ScoreSource for &S {
    fn score(&self, project_id: &str, engineer_id: &str) -> DeskResult<u8> {
        (**self).score(project_id, engineer_id)
    }
}

/// 固定表 + フォールバックによるスコア供給
#[derive(Debug, Clone)]
pub struct MatchScoreProvider {
    table: ScoreTable,
    fallback: FallbackMode,
}

impl MatchScoreProvider {
    pub fn new(table: ScoreTable, fallback: FallbackMode) -> Self {
        Self { table, fallback }
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    fn fallback_score(&self, project_id: &str, engineer_id: &str) -> u8 {
        let offset = match self.fallback {
            FallbackMode::Random => rand::thread_rng().gen_range(0..FALLBACK_SPAN),
            FallbackMode::Seeded(seed) => {
                let mut hasher = SipHasher13::new_with_keys(seed, SEEDED_FALLBACK_K1);
                project_id.hash(&mut hasher);
                engineer_id.hash(&mut hasher);
                (hasher.finish() % u64::from(FALLBACK_SPAN)) as u8
            }
        };
        FALLBACK_MIN + offset
    }
}

impl ScoreSource for MatchScoreProvider {
    fn score(&self, project_id: &str, engineer_id: &str) -> DeskResult<u8> {
        ensure_id("project_id", project_id)?;
        ensure_id("engineer_id", engineer_id)?;

        if let Some(score) = self.table.get(project_id, engineer_id) {
            return Ok(score);
        }

        let score = self.fallback_score(project_id, engineer_id);
        debug!(
            project_id,
            engineer_id,
            score,
            fallback = self.fallback.as_str(),
            "match score not tabulated; using fallback"
        );
        Ok(score)
    }
}
