pub mod provider;
pub mod ranking;
pub mod score_table;

pub use provider::{FallbackMode, MatchScoreProvider, ScoreSource, FALLBACK_MIN, FALLBACK_SPAN};
pub use ranking::{exclude_assigned, RankedCandidate, RankedMatcher};
pub use score_table::{ScoreTable, MAX_SCORE};
