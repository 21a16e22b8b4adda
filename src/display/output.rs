use crate::analysis::champion_stats::ChampionStats;
use crate::analysis::correlation::Correlation;
use crate::analysis::group::GroupReport;
use crate::analysis::player::{PlayerReport, Totals};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ChampionRow {
    #[tabled(rename = "Champion")]
    champion: String,
    #[tabled(rename = "Total Games")]
    games: u32,
    #[tabled(rename = "Wins")]
    wins: u32,
    #[tabled(rename = "Losses")]
    losses: u32,
    #[tabled(rename = "Win %")]
    win_rate: String,
    #[tabled(rename = "Penta")]
    pentakills: u32,
    #[tabled(rename = "Win% Penta")]
    win_rate_penta: String,
    #[tabled(rename = "Quadra")]
    quadrakills: u32,
    #[tabled(rename = "Win% Quad")]
    win_rate_quad: String,
    #[tabled(rename = "Triple")]
    triple_kills: u32,
    #[tabled(rename = "Double")]
    double_kills: u32,
    #[tabled(rename = "Kills")]
    single_kills: u32,
    #[tabled(rename = "maxKillStreak")]
    max_kill_streak: u32,
    #[tabled(rename = "15+Kills")]
    high_kill_games: u32,
    #[tabled(rename = "15+Kills%")]
    high_kill_rate: String,
}

fn pct(value: f64) -> String {
    format!("{:.2}%", value)
}

impl From<&ChampionStats> for ChampionRow {
    fn from(s: &ChampionStats) -> Self {
        ChampionRow {
            champion: s.champion.to_string(),
            games: s.games,
            wins: s.wins,
            losses: s.losses,
            win_rate: pct(s.win_rate()),
            pentakills: s.pentakills,
            win_rate_penta: pct(s.win_rate_penta()),
            quadrakills: s.quadrakills,
            win_rate_quad: pct(s.win_rate_quad()),
            triple_kills: s.triple_kills,
            double_kills: s.double_kills,
            single_kills: s.single_kills,
            max_kill_streak: s.max_kill_streak,
            high_kill_games: s.high_kill_games,
            high_kill_rate: pct(s.high_kill_rate()),
        }
    }
}

/// Champion rows in the order given.
pub fn champion_table(rows: &[ChampionStats]) -> String {
    let mut table = Table::new(rows.iter().map(ChampionRow::from));
    table.with(Style::rounded());
    table.to_string()
}

fn totals_line(t: &Totals) -> String {
    format!(
        "total games played: {}, Wins: {}, Losses: {}, Penta: {}, Quadra: {}, Triple: {}, Double: {}, Kills: {}, \
         Win %: {}, 15+Kills: {}, 15+Kills %: {}, maxKillStreak: {}",
        t.games,
        t.wins,
        t.losses(),
        t.pentakills,
        t.quadrakills,
        t.triple_kills,
        t.double_kills,
        t.single_kills,
        pct(t.win_rate()),
        t.high_kill_games,
        pct(t.high_kill_rate()),
        t.max_kill_streak
    )
}

pub fn player_summary(report: &PlayerReport) -> String {
    format!("{} champ counts ({}):", report.summoner, totals_line(&report.totals))
}

pub fn group_summary(report: &GroupReport) -> String {
    format!(
        "Aggregate stats for {}'s summoners ({}):",
        report.name,
        totals_line(&report.totals)
    )
}

pub fn correlation_summary(primary: &str, partner: &str, c: &Correlation) -> String {
    format!(
        "Games where {partner} wins and {primary}'s summoners get 15+ kills: {} out of {}.\n\
         Co-occurrence rate: {}",
        c.joint,
        c.partner_wins,
        pct(c.rate())
    )
}

pub fn progress_line(summoner: &str, verbose: bool) -> String {
    if verbose {
        format!("\nProcessing summoner: {}", summoner)
    } else {
        format!("Processing {}...", summoner)
    }
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_progress(summoner: &str, verbose: bool) {
    println!("{}", progress_line(summoner, verbose).dimmed());
}

pub fn display_player_report(report: &PlayerReport) {
    println!("\n{}", player_summary(report).bold().cyan());
    println!("{}", champion_table(&report.champions));
}

pub fn display_group_report(report: &GroupReport) {
    println!("\n{}", group_summary(report).bold().cyan());
    println!("Members: {}", report.members.join(", "));
    println!("{}\n", "=".repeat(60).cyan());
    println!("{}", champion_table(&report.champions));
}

pub fn display_correlation(primary: &str, partner: &str, c: &Correlation) {
    println!("\n{}", correlation_summary(primary, partner, c).bold().yellow());
}
