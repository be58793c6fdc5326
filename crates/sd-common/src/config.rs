use tracing::warn;

use crate::matching::FallbackMode;
use crate::timesheet::{TimesheetConfig, WeekStart, MAX_DAILY_HOURS};

/// 環境変数から組み立てるランタイム設定
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeskConfig {
    pub fallback: FallbackMode,
    pub timesheet: TimesheetConfig,
}

impl DeskConfig {
    /// 環境変数から読み込む（不正値は警告を出して既定値）
    ///
    /// - SD_MATCH_FALLBACK: random | seeded
    /// - SD_MATCH_SEED: seeded 時の seed (u64, 既定 0)
    /// - SD_WEEK_STARTS_ON: monday | sunday
    /// - SD_APPROVED_PLACEHOLDER_DAYS: 月生成時の承認済み日数
    /// - SD_DEFAULT_WORKING_HOURS: 平日の既定稼働時間 (0〜24)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = TimesheetConfig::default();

        let seed = parse_or(&lookup, "SD_MATCH_SEED", 0u64);
        let fallback = match lookup("SD_MATCH_FALLBACK").as_deref().map(str::trim) {
            None | Some("") | Some("random") => FallbackMode::Random,
            Some("seeded") => FallbackMode::Seeded(seed),
            Some(other) => {
                warn!(value = other, "unknown SD_MATCH_FALLBACK; using random");
                FallbackMode::Random
            }
        };

        let week_start = match lookup("SD_WEEK_STARTS_ON") {
            Some(raw) => raw.parse::<WeekStart>().unwrap_or_else(|err| {
                warn!(error = %err, "invalid SD_WEEK_STARTS_ON; using default");
                defaults.week_start
            }),
            None => defaults.week_start,
        };

        let default_working_hours = parse_or(
            &lookup,
            "SD_DEFAULT_WORKING_HOURS",
            defaults.default_working_hours,
        );
        let default_working_hours = if (0.0..=MAX_DAILY_HOURS).contains(&default_working_hours) {
            default_working_hours
        } else {
            warn!(
                value = default_working_hours,
                "SD_DEFAULT_WORKING_HOURS out of range; using default"
            );
            defaults.default_working_hours
        };

        Self {
            fallback,
            timesheet: TimesheetConfig {
                week_start,
                approved_placeholder_days: parse_or(
                    &lookup,
                    "SD_APPROVED_PLACEHOLDER_DAYS",
                    defaults.approved_placeholder_days,
                ),
                default_working_hours,
            },
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "failed to parse env value; using default");
            default
        }),
        None => default,
    }
}
