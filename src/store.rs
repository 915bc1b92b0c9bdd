//! Persisted selections and schedules.
//!
//! An explicit store object owned by the application shell. It keeps the
//! user's selected courses, saved schedules and preferences in a
//! key-value backend as JSON. The scheduling engine never reads or
//! writes it: callers load inputs here, pass them to the engine, and
//! save whatever they want to keep.
//!
//! # Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `selectedCourses` | `Vec<Course>` |
//! | `schedulerState` | `SchedulerState` |
//! | `schedulerPreferences` | `SchedulerPreferences` |
//!
//! A missing key loads as the empty/default value.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StoreError};
use crate::models::{Course, SchedulerPreferences, SchedulerState};

/// Key for the selected course list.
pub const SELECTED_COURSES_KEY: &str = "selectedCourses";
/// Key for saved schedules.
pub const SCHEDULER_STATE_KEY: &str = "schedulerState";
/// Key for auto-scheduler preferences.
pub const PREFERENCES_KEY: &str = "schedulerPreferences";

/// String key-value storage backend.
pub trait KeyValueStore {
    /// Reads a value. `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one.
    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Deletes a value. Absent keys are not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Directory backend: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key)?;
        let io_err = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_err)?;
        fs::write(path, value).map_err(io_err)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

/// Typed access to persisted selections over any backend.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore<S> {
    backend: S,
}

impl<S: KeyValueStore> SelectionStore<S> {
    /// Wraps a backend.
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Unwraps the backend.
    pub fn into_inner(self) -> S {
        self.backend
    }

    /// Loads the selected courses (empty if never saved).
    pub fn load_selected_courses(&self) -> Result<Vec<Course>> {
        self.load(SELECTED_COURSES_KEY)
    }

    /// Saves the selected courses.
    pub fn save_selected_courses(&mut self, courses: &[Course]) -> Result<()> {
        self.save(SELECTED_COURSES_KEY, courses)
    }

    /// Loads saved schedules (empty state if never saved).
    pub fn load_state(&self) -> Result<SchedulerState> {
        self.load(SCHEDULER_STATE_KEY)
    }

    /// Saves schedules.
    pub fn save_state(&mut self, state: &SchedulerState) -> Result<()> {
        self.save(SCHEDULER_STATE_KEY, state)
    }

    /// Loads preferences (defaults if never saved).
    pub fn load_preferences(&self) -> Result<SchedulerPreferences> {
        self.load(PREFERENCES_KEY)
    }

    /// Saves preferences.
    pub fn save_preferences(&mut self, preferences: &SchedulerPreferences) -> Result<()> {
        self.save(PREFERENCES_KEY, preferences)
    }

    /// Forgets everything this store manages.
    pub fn clear(&mut self) -> Result<()> {
        for key in [SELECTED_COURSES_KEY, SCHEDULER_STATE_KEY, PREFERENCES_KEY] {
            self.backend.remove(key)?;
        }
        Ok(())
    }

    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        let Some(raw) = self.backend.get(key)? else {
            debug!("store key '{key}' absent, using default");
            return Ok(T::default());
        };
        serde_json::from_str(&raw).map_err(|source| {
            warn!("store key '{key}' is corrupt: {source}");
            StoreError::Corrupt {
                key: key.to_string(),
                source,
            }
        })
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        debug!("saving store key '{key}' ({} bytes)", raw.len());
        self.backend.set(key, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, GeneratedSchedule, ScheduleEntry, ScheduleMetrics, Section};

    fn sample_course() -> Course {
        Course::new("cs131")
            .with_catalog_number("CS 131")
            .with_lecture(
                Section::new("L1")
                    .with_days([Day::Mon, Day::Wed])
                    .with_time(600, 680),
            )
    }

    fn sample_generated() -> GeneratedSchedule {
        let course = sample_course();
        let lecture = course.lectures()[0].clone();
        GeneratedSchedule {
            id: "gen-1".into(),
            entries: vec![ScheduleEntry::new(&course, Some(lecture), None, "#3b82f6")],
            score: 100.0,
            metrics: ScheduleMetrics::default(),
        }
    }

    #[test]
    fn test_missing_keys_load_defaults() {
        let store = SelectionStore::new(MemoryStore::new());
        assert!(store.load_selected_courses().unwrap().is_empty());
        assert_eq!(store.load_state().unwrap(), SchedulerState::default());
        assert_eq!(
            store.load_preferences().unwrap(),
            SchedulerPreferences::default()
        );
    }

    #[test]
    fn test_courses_round_trip_memory() {
        let mut store = SelectionStore::new(MemoryStore::new());
        store.save_selected_courses(&[sample_course()]).unwrap();
        assert_eq!(store.load_selected_courses().unwrap(), vec![sample_course()]);

        let raw = store.backend().get(SELECTED_COURSES_KEY).unwrap().unwrap();
        assert!(raw.contains("\"catalogNumber\":\"CS 131\""));
    }

    #[test]
    fn test_save_generated_then_reload() {
        let mut store = SelectionStore::new(MemoryStore::new());
        let mut state = store.load_state().unwrap();
        let generated = sample_generated();
        let id = state.save_generated("Plan A", &generated);
        store.save_state(&state).unwrap();

        let reloaded = store.load_state().unwrap();
        let saved = reloaded.active().unwrap();
        assert_eq!(saved.id, id);
        assert_eq!(saved.entries, generated.entries);
    }

    #[test]
    fn test_corrupt_value() {
        let mut backend = MemoryStore::new();
        backend
            .set(PREFERENCES_KEY, "{not json".to_string())
            .unwrap();
        let store = SelectionStore::new(backend);

        let err = store.load_preferences().unwrap_err();
        assert!(err.is_corrupt());
        assert_eq!(err.key(), PREFERENCES_KEY);
    }

    #[test]
    fn test_clear() {
        let mut store = SelectionStore::new(MemoryStore::new());
        store
            .save_preferences(&SchedulerPreferences::new().with_minimize_gaps())
            .unwrap();
        store.clear().unwrap();
        assert!(!store.load_preferences().unwrap().minimize_gaps);
    }

    #[test]
    fn test_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("selections");
        let mut store = SelectionStore::new(FileStore::new(&root));

        store.save_selected_courses(&[sample_course()]).unwrap();
        assert!(root.join("selectedCourses.json").exists());

        let reopened = SelectionStore::new(FileStore::new(&root));
        assert_eq!(
            reopened.load_selected_courses().unwrap(),
            vec![sample_course()]
        );

        store.clear().unwrap();
        assert!(!root.join("selectedCourses.json").exists());
        // Removing again is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_rejects_bad_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut fs_store = FileStore::new(dir.path());
        assert!(matches!(
            fs_store.set("../escape", "x".into()),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(fs_store.get(""), Err(StoreError::InvalidKey(_))));
    }
}
