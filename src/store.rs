// Store module: the in-memory habit registry and its JSON persistence.
//
// The file is a single pretty-printed JSON object mapping habit names to
// lists of `YYYY-MM-DD` strings. Key order in the file is the order habits
// were added, and that order is kept in memory so menus list habits the
// same way on every run.

use crate::streak::{self, HabitStats};
use chrono::NaiveDate;
use log::debug;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or writing the data file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not access `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed habit data in `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode habit data for `{}`: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A tracked habit and the distinct dates it was completed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    pub name: String,
    log: Vec<NaiveDate>,
}

impl Habit {
    fn new(name: String) -> Self {
        Habit {
            name,
            log: Vec::new(),
        }
    }

    /// Completion dates in the order they were recorded.
    pub fn log(&self) -> &[NaiveDate] {
        &self.log
    }

    /// Number of distinct days this habit was done.
    pub fn total_days(&self) -> usize {
        self.log.len()
    }

    pub fn is_done_on(&self, date: NaiveDate) -> bool {
        self.log.contains(&date)
    }
}

/// Result of trying to register a new habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    AlreadyExists(String),
    EmptyName,
}

/// Result of marking a habit done on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    Marked,
    AlreadyMarked,
    UnknownHabit,
}

/// Trim and lowercase a habit name so lookups ignore case and padding.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// All habits, in insertion order. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitStore {
    habits: Vec<Habit>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from `path`.
    ///
    /// A missing file yields an empty store. Unreadable or malformed content
    /// (including non-list values and bad dates) also yields an empty store;
    /// the caller never sees an error and the fallback is only logged at
    /// debug level.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(store) => {
                debug!("loaded {} habit(s) from {}", store.len(), path.display());
                store
            }
            Err(err) => {
                debug!("{err}; starting with an empty habit list");
                Self::new()
            }
        }
    }

    /// Strict variant of [`HabitStore::load`]. A missing file is still an
    /// empty store, every other failure is returned.
    pub fn try_load(path: &Path) -> Result<Self, StorageError> {
        let raw = match std::fs::read(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_slice(&raw).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overwrite `path` with the whole store as indented JSON.
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        let json = self.to_pretty_json().map_err(|source| StorageError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("saved {} habit(s) to {}", self.len(), path.display());
        Ok(())
    }

    fn to_pretty_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.habits.iter().map(|h| h.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.name == name)
    }

    /// Register a habit under its normalized name with an empty log.
    pub fn add_habit(&mut self, raw_name: &str) -> AddOutcome {
        let name = normalize_name(raw_name);
        if name.is_empty() {
            return AddOutcome::EmptyName;
        }
        if self.get(&name).is_some() {
            return AddOutcome::AlreadyExists(name);
        }
        self.habits.push(Habit::new(name.clone()));
        AddOutcome::Added(name)
    }

    /// Record `date` in the log of `name`. Marking the same date twice is a
    /// no-op.
    pub fn mark_done(&mut self, name: &str, date: NaiveDate) -> MarkOutcome {
        let Some(habit) = self.get_mut(name) else {
            return MarkOutcome::UnknownHabit;
        };
        if habit.is_done_on(date) {
            return MarkOutcome::AlreadyMarked;
        }
        habit.log.push(date);
        MarkOutcome::Marked
    }

    /// Per-habit totals and current streaks as of `today`.
    pub fn stats(&self, today: NaiveDate) -> Vec<HabitStats> {
        self.habits
            .iter()
            .map(|habit| streak::habit_stats(habit, today))
            .collect()
    }

    // Used while deserializing. A repeated key replaces the earlier log, and
    // repeated dates inside one log are dropped.
    fn insert_loaded(&mut self, name: String, dates: Vec<NaiveDate>) {
        let mut log = Vec::with_capacity(dates.len());
        for date in dates {
            if !log.contains(&date) {
                log.push(date);
            }
        }
        match self.get_mut(&name) {
            Some(habit) => habit.log = log,
            None => self.habits.push(Habit { name, log }),
        }
    }
}

impl Serialize for HabitStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.habits.len()))?;
        for habit in &self.habits {
            map.serialize_entry(&habit.name, &habit.log)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HabitStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StoreVisitor)
    }
}

struct StoreVisitor;

impl<'de> Visitor<'de> for StoreVisitor {
    type Value = HabitStore;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping habit names to lists of YYYY-MM-DD dates")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<HabitStore, A::Error> {
        let mut store = HabitStore::new();
        while let Some((name, dates)) = map.next_entry::<String, Vec<NaiveDate>>()? {
            store.insert_loaded(name, dates);
        }
        Ok(store)
    }
}
