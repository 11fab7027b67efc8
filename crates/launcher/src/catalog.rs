//! Game discovery: executables in one directory that share a name prefix.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{debug, info};

/// Upper bound on listed games.
pub const MAX_GAMES: usize = 100;

/// A launchable game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    /// Menu name: the file name with the prefix (and extension) removed.
    pub name: String,
    pub path: PathBuf,
}

impl GameEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// List the games in `dir`, sorted by name.
///
/// Fails when the directory cannot be read or holds no game at all.
pub fn scan_games(dir: &Path, prefix: &str) -> Result<Vec<GameEntry>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to open games directory {}", dir.display()))?;

    let mut games = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read {}", dir.display()))?;
        let path = entry.path();
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        let Some(name) = game_name(file_name, prefix) else {
            continue;
        };
        if !is_executable(&path) {
            debug!("skipping {}: not executable", path.display());
            continue;
        }
        games.push(GameEntry::new(name, path));
    }

    if games.is_empty() {
        bail!("no games found starting with '{prefix}'");
    }

    games.sort_by(|a, b| a.name.cmp(&b.name));
    games.truncate(MAX_GAMES);
    info!("found {} game(s) in {}", games.len(), dir.display());
    Ok(games)
}

/// Strip the prefix (and `.exe` outside unix). Bare prefixes are not games.
fn game_name(file_name: &str, prefix: &str) -> Option<String> {
    let rest = file_name.strip_prefix(prefix)?;
    let rest = if cfg!(unix) {
        rest
    } else {
        rest.strip_suffix(".exe")?
    };
    (!rest.is_empty()).then(|| rest.to_string())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::types::{GameKind, GAME_PREFIX};
    use std::os::unix::fs::PermissionsExt;

    fn touch(dir: &Path, name: &str, mode: u32) {
        let path = dir.join(name);
        fs::write(&path, b"#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    }

    #[test]
    fn lists_prefixed_executables_sorted() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();
        touch(dir, "game_tetris", 0o755);
        touch(dir, "game_pong", 0o755);
        touch(dir, "game_notes", 0o644);
        touch(dir, "snake", 0o755);
        touch(dir, "game_", 0o755);
        fs::create_dir(dir.join("game_dir")).unwrap();

        let games = scan_games(dir, "game_").unwrap();
        let names: Vec<_> = games.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["pong", "tetris"]);
        assert_eq!(games[0].path, dir.join("game_pong"));
    }

    #[test]
    fn built_game_binaries_are_discovered_by_kind_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        for kind in GameKind::ALL {
            touch(temp_dir.path(), &kind.executable_name(), 0o755);
        }

        let games = scan_games(temp_dir.path(), GAME_PREFIX).unwrap();
        let names: Vec<_> = games.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["pong", "snake", "tetris"]);
        assert!(games.iter().all(|g| GameKind::from_name(&g.name).is_some()));
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(temp_dir.path(), "readme", 0o644);

        let err = scan_games(temp_dir.path(), "game_").unwrap_err();
        assert_eq!(err.to_string(), "no games found starting with 'game_'");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("does-not-exist");
        assert!(scan_games(&dir, "game_").is_err());
    }

    #[test]
    fn catalog_is_capped() {
        let temp_dir = tempfile::tempdir().unwrap();
        for i in 0..(MAX_GAMES + 5) {
            touch(temp_dir.path(), &format!("game_{i:03}"), 0o700);
        }
        let games = scan_games(temp_dir.path(), "game_").unwrap();
        assert_eq!(games.len(), MAX_GAMES);
        assert_eq!(games[0].name, "000");
    }
}
