use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use super::calendar::{is_weekend, resolve_target_dates, WeekStart, YearMonth};
use super::{ensure_unique_dates, BulkSettings, EntryTemplate, WorkEntry};
use crate::error::DeskResult;

/// 対象日の未承認エントリにテンプレートを書き込む
///
/// - 件数・並び順・日付は入力と同じ
/// - is_approved のエントリと対象外の日はそのまま
/// - 承認フラグ自体は決して変更しない
/// - target_dates が空なら入力と同じものを返す
///
/// テンプレートの時間範囲と日付の一意性はループ前に検証する。
pub fn apply_periodic(
    entries: &[WorkEntry],
    target_dates: &BTreeSet<NaiveDate>,
    template: &EntryTemplate,
) -> DeskResult<Vec<WorkEntry>> {
    template.validate()?;
    ensure_unique_dates(entries)?;

    if target_dates.is_empty() {
        return Ok(entries.to_vec());
    }

    let mut updated = 0usize;
    let mut locked = 0usize;

    let result = entries
        .iter()
        .map(|entry| {
            if !target_dates.contains(&entry.date) {
                return entry.clone();
            }
            if entry.is_approved {
                locked += 1;
                return entry.clone();
            }

            updated += 1;
            let mut next = entry.clone();
            next.stamp(template);
            next
        })
        .collect();

    debug!(
        targets = target_dates.len(),
        updated,
        skipped_approved = locked,
        "applied periodic work entry template"
    );

    Ok(result)
}

/// 一括入力ダイアログの「適用」
pub fn apply_bulk_settings(
    entries: &[WorkEntry],
    settings: &BulkSettings,
    displayed: YearMonth,
    today: NaiveDate,
    week_start: WeekStart,
) -> DeskResult<Vec<WorkEntry>> {
    let targets = resolve_target_dates(settings.date_range, displayed, today, week_start)?;
    debug!(
        range = settings.date_range.as_str(),
        month = %displayed,
        %today,
        week_start = week_start.as_str(),
        "resolved bulk input targets"
    );
    apply_periodic(entries, &targets, &settings.template())
}

/// 「前月コピー」: 表示月の平日に前月テンプレートを書き込む
pub fn copy_previous_month(
    entries: &[WorkEntry],
    displayed: YearMonth,
    template: &EntryTemplate,
) -> DeskResult<Vec<WorkEntry>> {
    let targets: BTreeSet<_> = displayed
        .days()
        .into_iter()
        .filter(|date| !is_weekend(*date))
        .collect();
    apply_periodic(entries, &targets, template)
}
