use std::collections::BTreeMap;

use super::sort::SortColumn;
use crate::source::models::{ChampionKey, Participant};

/// Games at or above this many kills count as a 15+Kills game.
pub const HIGH_KILL_THRESHOLD: u32 = 15;

/// `numerator / denominator` as a percentage, 0 when the denominator is 0.
pub fn percent(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator * 100.0
    }
}

/// How conditional penta/quadra wins are combined when merging players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Rebuild each player's win count from its conditional win rate, then sum.
    #[default]
    RateDerived,
    /// Sum the raw win counts.
    Exact,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChampionStats {
    pub champion: ChampionKey,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub pentakills: u32,
    // f64 because merged groups carry rate-derived counts
    pub pentakill_wins: f64,
    pub quadrakills: u32,
    pub quadrakill_wins: f64,
    pub triple_kills: u32,
    pub double_kills: u32,
    pub single_kills: u32,
    pub max_kill_streak: u32,
    pub high_kill_games: u32,
}

impl ChampionStats {
    pub fn new(champion: ChampionKey) -> Self {
        ChampionStats {
            champion,
            games: 0,
            wins: 0,
            losses: 0,
            pentakills: 0,
            pentakill_wins: 0.0,
            quadrakills: 0,
            quadrakill_wins: 0.0,
            triple_kills: 0,
            double_kills: 0,
            single_kills: 0,
            max_kill_streak: 0,
            high_kill_games: 0,
        }
    }

    pub fn record(&mut self, p: &Participant) {
        self.games += 1;
        if p.win {
            self.wins += 1;
            if p.penta_kills > 0 {
                self.pentakill_wins += 1.0;
            }
            if p.quadra_kills > 0 {
                self.quadrakill_wins += 1.0;
            }
        } else {
            self.losses += 1;
        }

        self.pentakills += p.penta_kills;
        self.quadrakills += p.quadra_kills;
        self.triple_kills += p.triple_kills;
        self.double_kills += p.double_kills;
        self.single_kills += p.single_kills();
        self.max_kill_streak = self.max_kill_streak.max(p.largest_killing_spree);
        if p.kills >= HIGH_KILL_THRESHOLD {
            self.high_kill_games += 1;
        }
    }

    /// Folds another player's row for the same champion into this one.
    pub fn absorb(&mut self, other: &ChampionStats, mode: MergeMode) {
        self.games += other.games;
        self.wins += other.wins;
        self.losses += other.losses;
        self.pentakills += other.pentakills;
        self.quadrakills += other.quadrakills;
        self.triple_kills += other.triple_kills;
        self.double_kills += other.double_kills;
        self.single_kills += other.single_kills;
        self.high_kill_games += other.high_kill_games;
        self.max_kill_streak = self.max_kill_streak.max(other.max_kill_streak);

        match mode {
            MergeMode::RateDerived => {
                if other.pentakills > 0 {
                    self.pentakill_wins += other.pentakills as f64 * (other.win_rate_penta() / 100.0);
                }
                if other.quadrakills > 0 {
                    self.quadrakill_wins += other.quadrakills as f64 * (other.win_rate_quad() / 100.0);
                }
            }
            MergeMode::Exact => {
                self.pentakill_wins += other.pentakill_wins;
                self.quadrakill_wins += other.quadrakill_wins;
            }
        }
    }

    pub fn win_rate(&self) -> f64 {
        percent(self.wins as f64, self.games as f64)
    }

    pub fn win_rate_penta(&self) -> f64 {
        percent(self.pentakill_wins, self.pentakills as f64)
    }

    pub fn win_rate_quad(&self) -> f64 {
        percent(self.quadrakill_wins, self.quadrakills as f64)
    }

    pub fn high_kill_rate(&self) -> f64 {
        percent(self.high_kill_games as f64, self.games as f64)
    }
}

/// Champion rows keyed by champion, so iteration order is deterministic.
#[derive(Debug, Default)]
pub struct ChampionStatsTracker {
    stats: BTreeMap<ChampionKey, ChampionStats>,
}

impl ChampionStatsTracker {
    pub fn new() -> Self {
        ChampionStatsTracker {
            stats: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, p: &Participant) {
        self.stats
            .entry(p.champion.clone())
            .or_insert_with(|| ChampionStats::new(p.champion.clone()))
            .record(p);
    }

    pub fn absorb(&mut self, row: &ChampionStats, mode: MergeMode) {
        self.stats
            .entry(row.champion.clone())
            .or_insert_with(|| ChampionStats::new(row.champion.clone()))
            .absorb(row, mode);
    }

    pub fn into_sorted(self, column: SortColumn) -> Vec<ChampionStats> {
        let mut rows: Vec<ChampionStats> = self.stats.into_values().collect();
        column.sort(&mut rows);
        rows
    }
}
