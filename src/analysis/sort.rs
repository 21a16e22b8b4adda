use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::champion_stats::ChampionStats;
use crate::error::AppError;

/// Column that every champion table of a run is ordered by, descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    Champion,
    TotalGames,
    Wins,
    Losses,
    WinRate,
    Pentakills,
    WinRatePenta,
    Quadrakills,
    WinRateQuad,
    TripleKills,
    DoubleKills,
    SingleKills,
    MaxKillStreak,
    HighKillGames,
    #[default]
    HighKillRate,
}

impl SortColumn {
    pub const ALL: [SortColumn; 15] = [
        SortColumn::Champion,
        SortColumn::TotalGames,
        SortColumn::Wins,
        SortColumn::Losses,
        SortColumn::WinRate,
        SortColumn::Pentakills,
        SortColumn::WinRatePenta,
        SortColumn::Quadrakills,
        SortColumn::WinRateQuad,
        SortColumn::TripleKills,
        SortColumn::DoubleKills,
        SortColumn::SingleKills,
        SortColumn::MaxKillStreak,
        SortColumn::HighKillGames,
        SortColumn::HighKillRate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortColumn::Champion => "champion",
            SortColumn::TotalGames => "total_games",
            SortColumn::Wins => "wins",
            SortColumn::Losses => "losses",
            SortColumn::WinRate => "win_rate",
            SortColumn::Pentakills => "pentakills",
            SortColumn::WinRatePenta => "win_rate_penta",
            SortColumn::Quadrakills => "quadrakills",
            SortColumn::WinRateQuad => "win_rate_quad",
            SortColumn::TripleKills => "triple_kills",
            SortColumn::DoubleKills => "double_kills",
            SortColumn::SingleKills => "single_kills",
            SortColumn::MaxKillStreak => "max_kill_streak",
            SortColumn::HighKillGames => "15+Kills",
            SortColumn::HighKillRate => "15+Kills_rate",
        }
    }

    /// Descending order on this column.
    pub fn compare(self, a: &ChampionStats, b: &ChampionStats) -> Ordering {
        let by_count = |f: fn(&ChampionStats) -> u32| f(b).cmp(&f(a));
        let by_rate = |f: fn(&ChampionStats) -> f64| {
            f(b).partial_cmp(&f(a)).unwrap_or(Ordering::Equal)
        };

        match self {
            SortColumn::Champion => b.champion.cmp(&a.champion),
            SortColumn::TotalGames => by_count(|s| s.games),
            SortColumn::Wins => by_count(|s| s.wins),
            SortColumn::Losses => by_count(|s| s.losses),
            SortColumn::WinRate => by_rate(ChampionStats::win_rate),
            SortColumn::Pentakills => by_count(|s| s.pentakills),
            SortColumn::WinRatePenta => by_rate(ChampionStats::win_rate_penta),
            SortColumn::Quadrakills => by_count(|s| s.quadrakills),
            SortColumn::WinRateQuad => by_rate(ChampionStats::win_rate_quad),
            SortColumn::TripleKills => by_count(|s| s.triple_kills),
            SortColumn::DoubleKills => by_count(|s| s.double_kills),
            SortColumn::SingleKills => by_count(|s| s.single_kills),
            SortColumn::MaxKillStreak => by_count(|s| s.max_kill_streak),
            SortColumn::HighKillGames => by_count(|s| s.high_kill_games),
            SortColumn::HighKillRate => by_rate(ChampionStats::high_kill_rate),
        }
    }

    /// Stable: rows that compare equal keep their relative order.
    pub fn sort(self, rows: &mut [ChampionStats]) {
        rows.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortColumn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortColumn::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let valid: Vec<&str> = SortColumn::ALL.iter().map(|c| c.name()).collect();
                AppError::Config(format!(
                    "unknown sort column '{}' (expected one of: {})",
                    wanted,
                    valid.join(", ")
                ))
            })
    }
}
