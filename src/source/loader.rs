use crate::error::AppError;
use chrono::{DateTime, Utc};
use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};

use super::models::{Match, MatchDto};

/// Lists the `.json` files in `dir`, sorted by path.
pub fn list_match_files(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    if !dir.is_dir() {
        return Err(AppError::MatchDirMissing(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| AppError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| AppError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .path();

        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(AppError::NoMatchFiles(dir.to_path_buf()));
    }

    files.sort();
    log::debug!("found {} match files in {}", files.len(), dir.display());
    Ok(files)
}

pub fn load_match(path: &Path) -> Result<Match, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dto: MatchDto = serde_json::from_str(&content).map_err(|e| AppError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let game = Match::try_from(dto).map_err(|message| AppError::Json {
        path: path.to_path_buf(),
        message,
    })?;

    log::debug!(
        "loaded {} ({} participants)",
        game.id.as_deref().unwrap_or_else(|| path.to_str().unwrap_or("?")),
        game.participants.len()
    );
    Ok(game)
}

/// Loads every file in order. The first unreadable file aborts the load.
pub fn load_matches(files: &[PathBuf], pb: &ProgressBar) -> Result<Vec<Match>, AppError> {
    let mut matches = Vec::with_capacity(files.len());
    for path in files {
        matches.push(load_match(path)?);
        pb.inc(1);
    }
    Ok(matches)
}

/// Earliest and latest creation time among matches that carry one.
pub fn played_span(matches: &[Match]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let mut times = matches.iter().filter_map(|m| m.played_at);
    let first = times.next()?;
    Some(times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
}
