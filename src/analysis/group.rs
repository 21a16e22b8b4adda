use super::champion_stats::{ChampionStats, ChampionStatsTracker, MergeMode};
use super::player::{PlayerReport, Totals};
use super::sort::SortColumn;

#[derive(Debug, Clone)]
pub struct GroupReport {
    pub name: String,
    pub members: Vec<String>,
    pub totals: Totals,
    pub champions: Vec<ChampionStats>,
}

/// Merges the reports of one roster into a single group report.
pub fn merge(name: &str, reports: &[&PlayerReport], sort: SortColumn, mode: MergeMode) -> GroupReport {
    let mut totals = Totals::default();
    let mut tracker = ChampionStatsTracker::new();

    for report in reports {
        totals.add(&report.totals);
        for row in &report.champions {
            tracker.absorb(row, mode);
        }
    }

    log::debug!(
        "merged {} reports into '{}' ({} games, {:?})",
        reports.len(),
        name,
        totals.games,
        mode
    );

    GroupReport {
        name: name.to_string(),
        members: reports.iter().map(|r| r.summoner.clone()).collect(),
        totals,
        champions: tracker.into_sorted(sort),
    }
}
