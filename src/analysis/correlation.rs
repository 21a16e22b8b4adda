use std::collections::HashSet;

use super::champion_stats::{percent, HIGH_KILL_THRESHOLD};
use super::names::normalize;
use crate::source::models::Match;

/// Co-occurrence of "primary roster had a 15+ kill game" with "partner
/// roster won", counted against the partner roster's winning appearances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Correlation {
    pub joint: u32,
    pub partner_wins: u32,
}

impl Correlation {
    pub fn rate(&self) -> f64 {
        percent(self.joint as f64, self.partner_wins as f64)
    }
}

fn name_set(names: &[String]) -> HashSet<String> {
    names.iter().map(|n| normalize(n)).collect()
}

pub fn correlate(primary: &[String], partner: &[String], matches: &[Match]) -> Correlation {
    let primary = name_set(primary);
    let partner = name_set(partner);
    let mut result = Correlation::default();

    for game in matches {
        let mut primary_hit = false;
        let mut partner_won = false;

        for p in &game.participants {
            let name = normalize(&p.summoner_name);
            if primary.contains(&name) && p.kills >= HIGH_KILL_THRESHOLD {
                primary_hit = true;
            }
            // every winning appearance counts, not just one per match
            if partner.contains(&name) && p.win {
                partner_won = true;
                result.partner_wins += 1;
            }
        }

        if primary_hit && partner_won {
            result.joint += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::models::fixtures::{game, participant};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn three_match_example() {
        let matches = vec![
            game(vec![participant("Andy", "Zed", true, 20), participant("Luke", "Lux", true, 2)]),
            game(vec![participant("Andy", "Zed", false, 5), participant("Luke", "Lux", true, 1)]),
            game(vec![participant("Andy", "Zed", true, 16), participant("Luke", "Lux", false, 0)]),
        ];

        let c = correlate(&names(&["andy"]), &names(&["luke"]), &matches);
        assert_eq!(c.joint, 1);
        assert_eq!(c.partner_wins, 2);
        assert_eq!(format!("{:.2}%", c.rate()), "50.00%");
    }

    #[test]
    fn partner_wins_count_appearances() {
        let matches = vec![game(vec![
            participant("a1", "Zed", true, 15),
            participant("a2", "Zed", true, 17),
            participant("b1", "Lux", true, 0),
            participant("b 2", "Ahri", true, 0),
        ])];

        let c = correlate(&names(&["a1", "a2"]), &names(&["B1", "b2"]), &matches);
        assert_eq!(c.partner_wins, 2);
        assert_eq!(c.joint, 1);
    }

    #[test]
    fn no_partner_wins_gives_zero_rate() {
        let matches = vec![game(vec![participant("a", "Zed", true, 30)])];
        let c = correlate(&names(&["a"]), &names(&["b"]), &matches);
        assert_eq!(c, Correlation::default());
        assert_eq!(c.rate(), 0.0);
    }
}
