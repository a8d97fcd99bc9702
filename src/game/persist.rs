//! Daily progress persistence
//!
//! Daily sessions are saved under their calendar date so a player can close
//! the game and come back to the same board. Storage is best-effort: a
//! failed or garbled read simply means "no saved game".

use super::config::GameConfig;
use super::session::{GameStatus, Session};
use crate::catalog::Catalog;
use crate::selector::{GameMode, Selection, date_key};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// String key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Storage that lives as long as the process
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Storage that forgets everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl KeyValueStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) {}
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Option<PathBuf> {
        let safe = !key.is_empty()
            && key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if !safe {
            log::warn!("refusing storage key '{key}'");
            return None;
        }
        Some(self.dir.join(format!("{key}.json")))
    }

    fn write_atomic(&self, path: &Path, value: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(value.as_bytes())?;
        temp.persist(path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("could not read {}: {e}", path.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(path) = self.path_for(key) else {
            return;
        };
        if let Err(e) = self.write_atomic(&path, value) {
            log::warn!("could not save {}: {e}", path.display());
        }
    }
}

/// Saved daily record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    pub guesses: Vec<String>,
    pub game_status: GameStatus,
    pub target: String,
    #[serde(default)]
    pub elapsed_seconds: u64,
}

impl SavedState {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            guesses: session.guesses().to_vec(),
            game_status: session.status(),
            target: session.target().to_string(),
            elapsed_seconds: session.elapsed_secs(),
        }
    }
}

/// Storage key of a daily session; `None` for free play
#[must_use]
pub fn save_key(session: &Session) -> Option<String> {
    match session.mode() {
        GameMode::Daily { date } => Some(date_key(date)),
        GameMode::Free => None,
    }
}

/// Write a daily session to `store`; free-play sessions are not saved
pub fn save(session: &Session, store: &mut dyn KeyValueStore) {
    let Some(key) = save_key(session) else {
        return;
    };
    match serde_json::to_string(&SavedState::from_session(session)) {
        Ok(json) => store.set(&key, &json),
        Err(e) => log::warn!("could not serialize session: {e}"),
    }
}

/// Read the saved record for a daily session's day
#[must_use]
pub fn load(session: &Session, store: &dyn KeyValueStore) -> Option<SavedState> {
    let key = save_key(session)?;
    let raw = store.get(&key)?;
    match serde_json::from_str(&raw) {
        Ok(state) => Some(state),
        Err(e) => {
            log::warn!("ignoring malformed save for {key}: {e}");
            None
        }
    }
}

/// Restore saved progress into a fresh daily session
///
/// Records for a different target (the catalog changed since the save) or
/// with unplayable guesses are discarded. Returns whether progress was
/// restored.
pub fn restore(session: &mut Session, store: &dyn KeyValueStore) -> bool {
    let Some(saved) = load(session, store) else {
        return false;
    };
    if saved.target != session.target() {
        log::info!("saved game is for a different word, starting fresh");
        return false;
    }
    let status = saved.game_status;
    if !session.restore_progress(saved.guesses, saved.elapsed_seconds) {
        log::warn!("saved guesses do not fit today's word, starting fresh");
        return false;
    }
    if session.status() != status {
        log::debug!("saved status {status} corrected to {}", session.status());
    }
    true
}

/// Start a session, picking up saved progress for a daily game
#[must_use]
pub fn resume(
    catalog: &Catalog,
    selection: Selection,
    config: GameConfig,
    store: &dyn KeyValueStore,
) -> Option<Session> {
    let mut session = Session::new(catalog, selection, config)?;
    if restore(&mut session, store) {
        log::info!(
            "resumed {} with {} guesses",
            save_key(&session).unwrap_or_default(),
            session.guesses().len()
        );
    }
    Some(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample;
    use crate::game::GameConfig;
    use crate::selector::{Selection, WordSelector};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn daily_session() -> Session {
        let catalog = sample();
        let selection = WordSelector::new(&catalog).daily(today());
        Session::new(&catalog, selection, GameConfig::default()).unwrap()
    }

    fn play_wrong_guess(session: &mut Session) {
        for _ in 0..session.input_len() {
            session.add_letter('x');
        }
        session.submit_guess();
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn saved_state_json_shape() {
        let state = SavedState {
            guesses: vec!["dog".into()],
            game_status: GameStatus::Playing,
            target: "cat".into(),
            elapsed_seconds: 5,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"guesses":["dog"],"gameStatus":"playing","target":"cat","elapsedSeconds":5}"#
        );
        // older records have no timer
        let old: SavedState =
            serde_json::from_str(r#"{"guesses":[],"gameStatus":"won","target":"cat"}"#).unwrap();
        assert_eq!(old.elapsed_seconds, 0);
        assert_eq!(old.game_status, GameStatus::Won);
    }

    #[test]
    fn daily_save_and_restore() {
        let mut store = MemoryStore::new();
        let mut session = daily_session();
        play_wrong_guess(&mut session);
        session.tick();
        save(&session, &mut store);
        assert!(store.get("2026-10-18").is_some());

        let mut fresh = daily_session();
        assert!(restore(&mut fresh, &store));
        assert_eq!(fresh.guesses(), session.guesses());
        assert_eq!(fresh.elapsed_secs(), 1);
        assert_eq!(fresh.status(), GameStatus::Playing);
    }

    #[test]
    fn resume_picks_up_daily_progress() {
        let catalog = sample();
        let selection = WordSelector::new(&catalog).daily(today());
        let mut store = MemoryStore::new();
        let mut session = daily_session();
        play_wrong_guess(&mut session);
        save(&session, &mut store);

        let resumed = resume(&catalog, selection, GameConfig::default(), &store).unwrap();
        assert_eq!(resumed.guesses().len(), 1);

        let fresh = resume(&catalog, selection, GameConfig::default(), &NullStore).unwrap();
        assert!(fresh.guesses().is_empty());
    }

    #[test]
    fn free_sessions_not_saved() {
        let catalog = sample();
        let selection = Selection {
            index: 0,
            mode: GameMode::Free,
        };
        let session = Session::new(&catalog, selection, GameConfig::default()).unwrap();
        let mut store = MemoryStore::new();
        save(&session, &mut store);
        assert_eq!(save_key(&session), None);
        assert_eq!(store.get("2026-10-18"), None);
    }

    #[test]
    fn mismatched_target_discarded() {
        let mut store = MemoryStore::new();
        let state = SavedState {
            guesses: vec!["zzzz".into()],
            game_status: GameStatus::Playing,
            target: "not-today".into(),
            elapsed_seconds: 0,
        };
        store.set("2026-10-18", &serde_json::to_string(&state).unwrap());
        let mut session = daily_session();
        assert!(!restore(&mut session, &store));
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn malformed_record_discarded() {
        let mut store = MemoryStore::new();
        store.set("2026-10-18", "{not json");
        let mut session = daily_session();
        assert!(!restore(&mut session, &store));
        assert_eq!(load(&session, &store), None);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("saves"));
        assert_eq!(store.get("2026-10-18"), None);
        store.set("2026-10-18", "{}");
        assert_eq!(store.get("2026-10-18").as_deref(), Some("{}"));
        assert!(dir.path().join("saves/2026-10-18.json").exists());
    }

    #[test]
    fn file_store_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("../escape", "x");
        assert_eq!(store.get("../escape"), None);
        assert!(!dir.path().join("../escape.json").exists());
    }

    #[test]
    fn null_store_forgets() {
        let mut store = NullStore;
        store.set("a", "b");
        assert_eq!(store.get("a"), None);
    }
}
