// SPDX-License-Identifier: MIT

//! Per-user coaching sessions and the session store boundary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::vision::Issue;

/// Photographer skill level, tracked per session and tagged on principles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One coaching interaction recorded in a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub query: String,
    pub issues: Vec<Issue>,
}

/// Per-user mutable state: skill level plus append-only interaction history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub skill_level: SkillLevel,
    pub history: Vec<HistoryEntry>,
}

/// Storage boundary for sessions, keyed by user id
///
/// Passed into the orchestrator explicitly so tests and multi-instance
/// deployments control their own store instead of sharing ambient state.
pub trait SessionStore {
    fn get(&self, user_id: &str) -> Option<Session>;
    fn put(&mut self, user_id: &str, session: Session);

    /// Lazily create a default session (beginner, empty history) on first access
    fn get_or_default(&self, user_id: &str) -> Session {
        self.get(user_id).unwrap_or_default()
    }
}

/// In-memory session store; lifetime = process lifetime
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: HashMap<String, Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, user_id: &str) -> Option<Session> {
        self.sessions.get(user_id).cloned()
    }

    fn put(&mut self, user_id: &str, session: Session) {
        self.sessions.insert(user_id.to_string(), session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_access_defaults_to_beginner() {
        let store = MemorySessionStore::new();
        let session = store.get_or_default("new_user");
        assert_eq!(session.skill_level, SkillLevel::Beginner);
        assert!(session.history.is_empty());
        // get_or_default does not insert
        assert!(store.is_empty());
    }

    #[test]
    fn put_then_get_roundtrip() {
        let mut store = MemorySessionStore::new();
        let session = Session {
            skill_level: SkillLevel::Intermediate,
            ..Default::default()
        };
        store.put("alex", session);

        let fetched = store.get("alex").unwrap();
        assert_eq!(fetched.skill_level, SkillLevel::Intermediate);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn put_same_key_is_idempotent() {
        let mut store = MemorySessionStore::new();
        store.put("alex", Session::default());
        store.put("alex", Session::default());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn skill_level_serializes_lowercase() {
        let json = serde_json::to_string(&SkillLevel::Beginner).unwrap();
        assert_eq!(json, "\"beginner\"");
    }
}
