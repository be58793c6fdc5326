use chrono::Datelike;
use sd_common::matching::RankedCandidate;
use sd_common::roster::RosterPage;
use sd_common::timesheet::{MonthlySummary, WorkEntry, YearMonth};
use sd_common::{Engineer, Project};
use serde::Serialize;

const WEEKDAY_LABELS: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetReport<'a> {
    pub month: String,
    pub entries: &'a [WorkEntry],
    pub summary: &'a MonthlySummary,
}

fn skill_list(engineer: &Engineer) -> String {
    engineer
        .skills
        .iter()
        .map(|skill| skill.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_candidates(project: &Project, candidates: &[RankedCandidate]) {
    println!("{} {} ({})", project.id, project.name, project.client);
    println!("required: {}", project.required_skills.join(", "));
    for (rank, candidate) in candidates.iter().enumerate() {
        println!(
            "{:>2}. {:>3}%  {:<5} {:<10} [{}] {}",
            rank + 1,
            candidate.score,
            candidate.engineer.id,
            candidate.engineer.name,
            candidate.engineer.availability.as_str(),
            skill_list(&candidate.engineer)
        );
    }
}

pub fn print_roster(page: &RosterPage) {
    for engineer in &page.items {
        println!(
            "{:<5} {:<10} [{}] {}",
            engineer.id,
            engineer.name,
            engineer.availability.as_str(),
            skill_list(engineer)
        );
    }
    println!(
        "-- {} of {} (offset {}, limit {})",
        page.items.len(),
        page.total,
        page.offset,
        page.limit
    );
}

pub fn print_timesheet(month: YearMonth, entries: &[WorkEntry], summary: &MonthlySummary) {
    println!("{month}");
    for entry in entries {
        let weekday = WEEKDAY_LABELS[entry.date.weekday().num_days_from_monday() as usize];
        println!(
            "{} ({}) {:>5.1}h  +{:>4.1}h  {}  {}",
            entry.date,
            weekday,
            entry.working_hours,
            entry.overtime_hours,
            if entry.is_approved { "承認済" } else { "未承認" },
            entry.description
        );
    }
    println!(
        "total {:.1}h / overtime {:.1}h / worked {} days / approved {} / pending {}",
        summary.total_working_hours,
        summary.total_overtime_hours,
        summary.worked_days,
        summary.approved_days,
        summary.pending_days
    );
}
