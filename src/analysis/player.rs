use super::champion_stats::{percent, ChampionStats, ChampionStatsTracker, HIGH_KILL_THRESHOLD};
use super::names::normalize;
use super::sort::SortColumn;
use crate::source::models::{Match, Participant};

/// Scalar totals shared by player and group reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub games: u32,
    pub wins: u32,
    pub pentakills: u32,
    pub quadrakills: u32,
    pub triple_kills: u32,
    pub double_kills: u32,
    pub single_kills: u32,
    pub high_kill_games: u32,
    pub max_kill_streak: u32,
}

impl Totals {
    fn record(&mut self, p: &Participant) {
        self.games += 1;
        if p.win {
            self.wins += 1;
        }
        self.pentakills += p.penta_kills;
        self.quadrakills += p.quadra_kills;
        self.triple_kills += p.triple_kills;
        self.double_kills += p.double_kills;
        self.single_kills += p.single_kills();
        if p.kills >= HIGH_KILL_THRESHOLD {
            self.high_kill_games += 1;
        }
        self.max_kill_streak = self.max_kill_streak.max(p.largest_killing_spree);
    }

    pub fn add(&mut self, other: &Totals) {
        self.games += other.games;
        self.wins += other.wins;
        self.pentakills += other.pentakills;
        self.quadrakills += other.quadrakills;
        self.triple_kills += other.triple_kills;
        self.double_kills += other.double_kills;
        self.single_kills += other.single_kills;
        self.high_kill_games += other.high_kill_games;
        self.max_kill_streak = self.max_kill_streak.max(other.max_kill_streak);
    }

    pub fn losses(&self) -> u32 {
        self.games - self.wins
    }

    pub fn win_rate(&self) -> f64 {
        percent(self.wins as f64, self.games as f64)
    }

    pub fn high_kill_rate(&self) -> f64 {
        percent(self.high_kill_games as f64, self.games as f64)
    }
}

#[derive(Debug, Clone)]
pub struct PlayerReport {
    pub summoner: String,
    pub totals: Totals,
    pub champions: Vec<ChampionStats>,
}

/// First participant whose normalized name equals `target` (already normalized).
pub fn find_participant<'a>(game: &'a Match, target: &str) -> Option<&'a Participant> {
    game.participants
        .iter()
        .find(|p| normalize(&p.summoner_name) == target)
}

/// Builds the report for one summoner over every match they appear in.
pub fn aggregate(summoner: &str, matches: &[Match], sort: SortColumn) -> PlayerReport {
    let target = normalize(summoner);
    let mut totals = Totals::default();
    let mut tracker = ChampionStatsTracker::new();

    for game in matches {
        let Some(p) = find_participant(game, &target) else {
            continue;
        };

        log::trace!(
            "{} in {}: {} {} kills, win={}",
            summoner,
            game.id.as_deref().unwrap_or("match"),
            p.champion,
            p.kills,
            p.win
        );

        totals.record(p);
        tracker.record(p);
    }

    PlayerReport {
        summoner: summoner.to_string(),
        totals,
        champions: tracker.into_sorted(sort),
    }
}
