use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use sd_common::catalog;
use sd_common::config::DeskConfig;
use sd_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use sd_common::matching::{
    exclude_assigned, FallbackMode, MatchScoreProvider, RankedMatcher, ScoreTable,
};
use sd_common::roster::{query_roster, RosterQuery};
use sd_common::timesheet::{
    apply_bulk_settings, copy_previous_month, generate_month, summarize, BulkSettings, DateRange,
    EntryTemplate, WeekStart, YearMonth,
};
use sd_common::{Availability, DeskError};
use tracing::info;

mod render;

const APP_NAME: &str = "sd-cli";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Desk(#[from] DeskError),
    #[error("unknown project: {0}")]
    UnknownProject(String),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Parser)]
#[command(
    name = "sd-cli",
    about = "SES desk: candidate ranking and work-entry tools over the mock catalog"
)]
struct Cli {
    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the roster for a project by match score
    Rank(RankArgs),
    /// Filter and page through the engineer roster
    Roster(RosterArgs),
    /// Generate a month of work entries and apply bulk input
    Timesheet(TimesheetArgs),
}

#[derive(Debug, Args)]
struct RankArgs {
    /// Project ID (e.g. P001)
    #[arg(long)]
    project: String,

    /// Drop engineers already assigned to the project
    #[arg(long)]
    exclude_assigned: bool,

    /// Use a deterministic fallback for untabulated pairs (overrides SD_MATCH_FALLBACK)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Args)]
struct RosterArgs {
    #[arg(long)]
    keyword: Option<String>,

    #[arg(long)]
    category: Option<String>,

    /// available | assigned | unavailable
    #[arg(long)]
    availability: Option<Availability>,

    #[arg(long, default_value_t = 20)]
    limit: usize,

    #[arg(long, default_value_t = 0)]
    offset: usize,
}

#[derive(Debug, Args)]
struct TimesheetArgs {
    /// Displayed month (YYYY-MM)
    #[arg(long)]
    month: YearMonth,

    /// Bulk input range: this-week | this-month
    #[arg(long)]
    range: Option<DateRange>,

    /// Reference date for "this-week" (defaults to today)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// monday | sunday (overrides SD_WEEK_STARTS_ON)
    #[arg(long)]
    week_start: Option<WeekStart>,

    #[arg(long, default_value_t = 8.0)]
    hours: f64,

    #[arg(long, default_value_t = 0.0)]
    overtime: f64,

    #[arg(long, default_value = "")]
    description: String,

    /// Stamp the previous-month template onto weekdays
    #[arg(long)]
    copy_previous: bool,
}

fn run_rank(args: RankArgs, config: &DeskConfig, json: bool) -> Result<(), CliError> {
    let projects = catalog::projects();
    let project = catalog::find_project(&projects, &args.project)
        .ok_or_else(|| CliError::UnknownProject(args.project.clone()))?;

    let fallback = args.seed.map(FallbackMode::Seeded).unwrap_or(config.fallback);
    let matcher = RankedMatcher::new(MatchScoreProvider::new(ScoreTable::builtin()?, fallback));

    let mut candidates = matcher.rank(&project.id, &catalog::engineers())?;
    if args.exclude_assigned {
        candidates = exclude_assigned(candidates, &project.assigned_engineer_ids);
    }

    info!(
        project_id = %project.id,
        candidates = candidates.len(),
        fallback = fallback.as_str(),
        "ranked candidates"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else {
        render::print_candidates(project, &candidates);
    }
    Ok(())
}

fn run_roster(args: RosterArgs, json: bool) -> Result<(), CliError> {
    let query = RosterQuery {
        keyword: args.keyword,
        skill_category: args.category,
        availability: args.availability,
        limit: args.limit,
        offset: args.offset,
    };
    let page = query_roster(&catalog::engineers(), &query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        render::print_roster(&page);
    }
    Ok(())
}

fn run_timesheet(args: TimesheetArgs, config: &DeskConfig, json: bool) -> Result<(), CliError> {
    let week_start = args.week_start.unwrap_or(config.timesheet.week_start);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let mut entries = generate_month(args.month, &config.timesheet);

    if let Some(range) = args.range {
        let settings = BulkSettings {
            date_range: range,
            working_hours: args.hours,
            overtime_hours: args.overtime,
            description: args.description.clone(),
        };
        entries = apply_bulk_settings(&entries, &settings, args.month, today, week_start)?;
    }

    if args.copy_previous {
        entries = copy_previous_month(&entries, args.month, &EntryTemplate::previous_month())?;
    }

    let summary = summarize(&entries);
    info!(
        month = %args.month,
        total_working_hours = summary.total_working_hours,
        approved_days = summary.approved_days,
        "timesheet prepared"
    );

    if json {
        let report = render::TimesheetReport {
            month: args.month.to_string(),
            entries: &entries,
            summary: &summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render::print_timesheet(args.month, &entries, &summary);
    }
    Ok(())
}

fn run() -> Result<(), CliError> {
    dotenv().ok();
    init_tracing_subscriber(APP_NAME);
    install_tracing_panic_hook(APP_NAME);

    let cli = Cli::parse();
    let config = DeskConfig::from_env();

    match cli.command {
        Command::Rank(args) => run_rank(args, &config, cli.json),
        Command::Roster(args) => run_roster(args, cli.json),
        Command::Timesheet(args) => run_timesheet(args, &config, cli.json),
    }
}

fn main() {
    if let Err(err) = run() {
        tracing::error!(error = %err, "sd-cli failed");
        std::process::exit(1);
    }
}
