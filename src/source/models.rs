use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

// Match V5 document, as saved to disk
#[derive(Debug, Deserialize)]
pub struct MatchDto {
    #[serde(default)]
    pub metadata: Option<MatchMetadata>,
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    #[serde(default)]
    pub match_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    #[serde(default)]
    pub game_creation: Option<i64>,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub summoner_name: String,
    #[serde(default)]
    pub champion_name: Option<String>,
    #[serde(default)]
    pub champion_id: Option<i64>,
    pub win: bool,
    pub kills: u32,
    #[serde(default)]
    pub penta_kills: u32,
    #[serde(default)]
    pub quadra_kills: u32,
    #[serde(default)]
    pub triple_kills: u32,
    #[serde(default)]
    pub double_kills: u32,
    #[serde(default)]
    pub largest_killing_spree: u32,
}

/// Champion identifier used to group games. Falls back to the numeric
/// champion id when the name is missing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChampionKey(String);

impl ChampionKey {
    pub fn new(name: impl Into<String>) -> Self {
        ChampionKey(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChampionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One player's line in one match.
#[derive(Debug, Clone)]
pub struct Participant {
    pub summoner_name: String,
    pub champion: ChampionKey,
    pub win: bool,
    pub kills: u32,
    pub penta_kills: u32,
    pub quadra_kills: u32,
    pub triple_kills: u32,
    pub double_kills: u32,
    pub largest_killing_spree: u32,
}

impl Participant {
    /// Kills not counted by any multi-kill tier, floored at zero.
    pub fn single_kills(&self) -> u32 {
        let tiered = self.double_kills as u64
            + self.triple_kills as u64
            + self.quadra_kills as u64
            + self.penta_kills as u64;
        (self.kills as u64).saturating_sub(tiered) as u32
    }
}

impl TryFrom<ParticipantDto> for Participant {
    type Error = String;

    fn try_from(dto: ParticipantDto) -> Result<Self, Self::Error> {
        let champion = match (dto.champion_name, dto.champion_id) {
            (Some(name), _) if !name.is_empty() => ChampionKey::new(name),
            (_, Some(id)) => ChampionKey::new(id.to_string()),
            _ => {
                return Err(format!(
                    "participant {} has neither championName nor championId",
                    dto.summoner_name
                ))
            }
        };

        Ok(Participant {
            summoner_name: dto.summoner_name,
            champion,
            win: dto.win,
            kills: dto.kills,
            penta_kills: dto.penta_kills,
            quadra_kills: dto.quadra_kills,
            triple_kills: dto.triple_kills,
            double_kills: dto.double_kills,
            largest_killing_spree: dto.largest_killing_spree,
        })
    }
}

/// A completed game, loaded into memory for the whole run.
#[derive(Debug, Clone)]
pub struct Match {
    pub id: Option<String>,
    pub played_at: Option<DateTime<Utc>>,
    pub participants: Vec<Participant>,
}

impl TryFrom<MatchDto> for Match {
    type Error = String;

    fn try_from(dto: MatchDto) -> Result<Self, Self::Error> {
        let participants = dto
            .info
            .participants
            .into_iter()
            .map(Participant::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Match {
            id: dto
                .metadata
                .map(|m| m.match_id)
                .filter(|id| !id.is_empty()),
            played_at: dto
                .info
                .game_creation
                .and_then(DateTime::from_timestamp_millis),
            participants,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn parse_participant(json: &str) -> Result<Participant, String> {
        let dto: ParticipantDto = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Participant::try_from(dto)
    }

    #[test]
    fn optional_counters_default_to_zero() {
        let p = parse_participant(
            r#"{"summonerName":"TestPlayer","championName":"Ahri","win":true,"kills":5}"#,
        )
        .unwrap();

        assert_eq!(p.penta_kills, 0);
        assert_eq!(p.double_kills, 0);
        assert_eq!(p.largest_killing_spree, 0);
        assert_eq!(p.single_kills(), 5);
    }

    #[test]
    fn champion_falls_back_to_id() {
        let p = parse_participant(
            r#"{"summonerName":"a","championId":103,"win":false,"kills":0}"#,
        )
        .unwrap();
        assert_eq!(p.champion.as_str(), "103");

        let p = parse_participant(
            r#"{"summonerName":"a","championName":"","championId":7,"win":false,"kills":0}"#,
        )
        .unwrap();
        assert_eq!(p.champion.as_str(), "7");
    }

    #[test]
    fn champion_missing_entirely_is_an_error() {
        let err = parse_participant(r#"{"summonerName":"a","win":false,"kills":0}"#);
        assert!(err.is_err());
    }

    #[test]
    fn single_kills_clamped_at_zero() {
        let mut p = fixtures::participant("a", "Ahri", true, 3);
        p.double_kills = 2;
        p.triple_kills = 1;
        p.penta_kills = 1;
        assert_eq!(p.single_kills(), 0);

        p.double_kills = u32::MAX;
        assert_eq!(p.single_kills(), 0);
    }

    #[test]
    fn match_keeps_metadata() {
        let dto: MatchDto = serde_json::from_str(
            r#"{"metadata":{"matchId":"NA1_1"},"info":{"gameCreation":1700000000000,"participants":[]}}"#,
        )
        .unwrap();
        let m = Match::try_from(dto).unwrap();
        assert_eq!(m.id.as_deref(), Some("NA1_1"));
        assert_eq!(m.played_at.unwrap().timestamp(), 1_700_000_000);
    }
}
