use crate::analysis::champion_stats::MergeMode;
use crate::analysis::sort::SortColumn;
use crate::error::AppError;
use std::env;
use std::path::PathBuf;

const DEFAULT_MATCHES_DIR: &str = "matches/";
const DEFAULT_PRIMARY_NAME: &str = "Andy";
const DEFAULT_PRIMARY_SUMMONERS: &[&str] = &[
    "anonobot",
    "cardyflower",
    "statfame",
    "certainlylukey",
    "milltill005",
    "lillabryar",
];
const DEFAULT_PARTNER_NAME: &str = "Luke";
const DEFAULT_PARTNER_SUMMONERS: &[&str] = &["britneyphi"];

/// A named set of summoner names whose reports are merged together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub name: String,
    pub summoners: Vec<String>,
}

impl Roster {
    pub fn new(name: &str, summoners: &[&str]) -> Self {
        Roster {
            name: name.to_string(),
            summoners: summoners.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parses a comma separated list of summoner names.
    pub fn parse_summoners(list: &str) -> Result<Vec<String>, AppError> {
        let names: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if names.is_empty() {
            return Err(AppError::Config(format!("empty summoner list: '{}'", list)));
        }
        Ok(names)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub matches_dir: PathBuf,
    pub sort_by: SortColumn,
    pub verbose: bool,
    pub merge_mode: MergeMode,
    pub primary: Roster,
    pub partner: Roster,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            matches_dir: PathBuf::from(DEFAULT_MATCHES_DIR),
            sort_by: SortColumn::default(),
            verbose: false,
            merge_mode: MergeMode::default(),
            primary: Roster::new(DEFAULT_PRIMARY_NAME, DEFAULT_PRIMARY_SUMMONERS),
            partner: Roster::new(DEFAULT_PARTNER_NAME, DEFAULT_PARTNER_SUMMONERS),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::Config(format!("{} must be a boolean, got '{}'", key, other))),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(dir) = lookup("PENTAKILLS_MATCHES_DIR") {
            config.matches_dir = PathBuf::from(dir);
        }
        if let Some(sort) = lookup("PENTAKILLS_SORT_BY") {
            config.sort_by = sort.parse()?;
        }
        if let Some(verbose) = lookup("PENTAKILLS_VERBOSE") {
            config.verbose = parse_bool("PENTAKILLS_VERBOSE", &verbose)?;
        }
        if let Some(exact) = lookup("PENTAKILLS_EXACT_GROUP_WINS") {
            if parse_bool("PENTAKILLS_EXACT_GROUP_WINS", &exact)? {
                config.merge_mode = MergeMode::Exact;
            }
        }
        if let Some(name) = lookup("PENTAKILLS_PRIMARY_NAME") {
            config.primary.name = name;
        }
        if let Some(list) = lookup("PENTAKILLS_PRIMARY_SUMMONERS") {
            config.primary.summoners = Roster::parse_summoners(&list)?;
        }
        if let Some(name) = lookup("PENTAKILLS_PARTNER_NAME") {
            config.partner.name = name;
        }
        if let Some(list) = lookup("PENTAKILLS_PARTNER_SUMMONERS") {
            config.partner.summoners = Roster::parse_summoners(&list)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.matches_dir, PathBuf::from("matches/"));
        assert_eq!(config.sort_by, SortColumn::HighKillRate);
        assert!(!config.verbose);
        assert_eq!(config.merge_mode, MergeMode::RateDerived);
        assert_eq!(config.primary.summoners.len(), 6);
        assert_eq!(config.partner.summoners, vec!["britneyphi"]);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("PENTAKILLS_MATCHES_DIR", "/data/games"),
            ("PENTAKILLS_SORT_BY", "pentakills"),
            ("PENTAKILLS_VERBOSE", "yes"),
            ("PENTAKILLS_EXACT_GROUP_WINS", "1"),
            ("PENTAKILLS_PRIMARY_NAME", "Team A"),
            ("PENTAKILLS_PRIMARY_SUMMONERS", " one, Two Three ,,"),
            ("PENTAKILLS_PARTNER_SUMMONERS", "four"),
        ]))
        .unwrap();

        assert_eq!(config.matches_dir, PathBuf::from("/data/games"));
        assert_eq!(config.sort_by, SortColumn::Pentakills);
        assert!(config.verbose);
        assert_eq!(config.merge_mode, MergeMode::Exact);
        assert_eq!(config.primary.name, "Team A");
        assert_eq!(config.primary.summoners, vec!["one", "Two Three"]);
        assert_eq!(config.partner.name, "Luke");
        assert_eq!(config.partner.summoners, vec!["four"]);
    }

    #[test]
    fn invalid_values_are_rejected() {
        for pairs in [
            [("PENTAKILLS_SORT_BY", "kda")],
            [("PENTAKILLS_VERBOSE", "maybe")],
            [("PENTAKILLS_PRIMARY_SUMMONERS", " , ")],
        ] {
            let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
            assert!(matches!(err, AppError::Config(_)), "{err}");
        }
    }
}
