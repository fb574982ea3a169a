//! Owned copies of recorder state handed out by queries

use super::log_level::LogLevel;
use serde::Serialize;
use std::collections::BTreeMap;

/// A deep copy of every level buffer at one point in time.
///
/// Always holds all six levels, empty ones included. Later writes to the
/// recorder never show up in a snapshot that was already taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageSnapshot {
    levels: BTreeMap<LogLevel, Vec<String>>,
}

impl MessageSnapshot {
    pub(crate) fn new(levels: BTreeMap<LogLevel, Vec<String>>) -> Self {
        Self { levels }
    }

    /// Messages recorded at `level`, in insertion order
    pub fn get(&self, level: LogLevel) -> &[String] {
        self.levels.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate levels in priority order together with their messages
    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, &[String])> {
        self.levels.iter().map(|(level, messages)| (*level, messages.as_slice()))
    }

    pub fn total_count(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    pub fn into_inner(self) -> BTreeMap<LogLevel, Vec<String>> {
        self.levels
    }
}

/// Result of [`MessageRecorder::query`](crate::MessageRecorder::query)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Messages {
    /// Messages of the one requested level
    Level(Vec<String>),
    /// Every level, when no level was requested
    All(MessageSnapshot),
}

impl Messages {
    pub fn into_level(self) -> Option<Vec<String>> {
        match self {
            Messages::Level(messages) => Some(messages),
            Messages::All(_) => None,
        }
    }

    pub fn into_all(self) -> Option<MessageSnapshot> {
        match self {
            Messages::All(snapshot) => Some(snapshot),
            Messages::Level(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Messages::Level(messages) => messages.is_empty(),
            Messages::All(snapshot) => snapshot.is_empty(),
        }
    }
}
