mod analysis;
mod config;
mod display;
mod error;
mod source;

use analysis::champion_stats::MergeMode;
use analysis::correlation::correlate;
use analysis::group::merge;
use analysis::player::{aggregate, PlayerReport};
use clap::Parser;
use config::{Config, Roster};
use display::output::{
    display_correlation, display_error, display_group_report, display_info, display_player_report,
    display_progress, display_success,
};
use error::AppError;
use indicatif::ProgressBar;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "Pentakill Counts")]
#[command(about = "Per-player and per-champion kill stats from saved match files", long_about = None)]
struct Args {
    /// Directory of match JSON files (default: matches/)
    #[arg(short, long)]
    matches_dir: Option<PathBuf>,

    /// Column to sort champion tables by, descending (default: 15+Kills_rate)
    #[arg(short, long)]
    sort_by: Option<String>,

    /// Verbose per-player progress messages
    #[arg(short, long)]
    verbose: bool,

    /// Comma separated summoner names of the primary roster
    #[arg(long)]
    primary: Option<String>,

    /// Comma separated summoner names of the partner roster
    #[arg(long)]
    partner: Option<String>,

    /// Sum raw penta/quadra win counts when merging the primary roster
    #[arg(long)]
    exact_group_wins: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(args) {
        if e.is_empty_input() {
            display_info(&e.to_string());
            return;
        }
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn resolve_config(args: &Args) -> Result<Config, AppError> {
    let mut config = Config::from_env()?;

    if let Some(dir) = &args.matches_dir {
        config.matches_dir = dir.clone();
    }
    if let Some(sort) = &args.sort_by {
        config.sort_by = sort.parse()?;
    }
    if args.verbose {
        config.verbose = true;
    }
    if args.exact_group_wins {
        config.merge_mode = MergeMode::Exact;
    }
    if let Some(list) = &args.primary {
        config.primary.summoners = Roster::parse_summoners(list)?;
    }
    if let Some(list) = &args.partner {
        config.partner.summoners = Roster::parse_summoners(list)?;
    }

    Ok(config)
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;
    log::info!(
        "matches_dir={} sort_by={} merge_mode={:?}",
        config.matches_dir.display(),
        config.sort_by,
        config.merge_mode
    );

    // Step 1: load every match file
    let files = source::loader::list_match_files(&config.matches_dir)?;
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_message("Loading match files");
    let matches = source::loader::load_matches(&files, &pb)?;
    pb.finish_and_clear();

    match source::loader::played_span(&matches) {
        Some((first, last)) => display_success(&format!(
            "Loaded {} matches ({} to {})",
            matches.len(),
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        )),
        None => display_success(&format!("Loaded {} matches", matches.len())),
    }

    // Step 2: one report per summoner, primary roster first
    let mut primary_reports: Vec<PlayerReport> = Vec::new();
    let mut partner_reports: Vec<PlayerReport> = Vec::new();

    for (roster, reports) in [
        (&config.primary, &mut primary_reports),
        (&config.partner, &mut partner_reports),
    ] {
        for summoner in &roster.summoners {
            display_progress(summoner, config.verbose);
            let report = aggregate(summoner, &matches, config.sort_by);
            if config.verbose {
                display_info(&format!(
                    "{} ({}): {} games on {} champions",
                    summoner,
                    roster.name,
                    report.totals.games,
                    report.champions.len()
                ));
            }
            reports.push(report);
        }
    }

    let correlation = correlate(&config.primary.summoners, &config.partner.summoners, &matches);

    for report in primary_reports.iter().chain(&partner_reports) {
        display_player_report(report);
    }

    // Step 3: merge the primary roster
    let members: Vec<&PlayerReport> = primary_reports.iter().collect();
    let group = merge(&config.primary.name, &members, config.sort_by, config.merge_mode);
    display_group_report(&group);

    // Step 4: cross-roster co-occurrence
    display_correlation(&config.primary.name, &config.partner.name, &correlation);

    Ok(())
}
