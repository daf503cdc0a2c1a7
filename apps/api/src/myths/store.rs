//! Myth store — a JSON file re-read once per request cycle.
//!
//! A missing or malformed file is never an error: the store comes back empty,
//! lookups never match, and the reply pipeline degrades the same way it does
//! for any unmatched query.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::myths::models::MythRecord;

/// On-disk shape: `{ "myths": [...] }`.
#[derive(Debug, Deserialize)]
struct MythFile {
    myths: Vec<MythRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct MythStore {
    myths: Vec<MythRecord>,
}

impl MythStore {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "Myth store {} unreadable ({e}); continuing with empty store",
                    path.display()
                );
                return Self::default();
            }
        };

        match serde_json::from_str::<MythFile>(&raw) {
            Ok(file) => Self { myths: file.myths },
            Err(e) => {
                warn!(
                    "Myth store {} failed to parse ({e}); continuing with empty store",
                    path.display()
                );
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.myths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.myths.is_empty()
    }

    pub fn records(&self) -> &[MythRecord] {
        &self.myths
    }

    /// Case-insensitive substring lookup: the first record whose `myth` text
    /// contains the query. A blank query never matches.
    pub fn find(&self, query: &str) -> Option<&MythRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.myths
            .iter()
            .find(|m| m.myth.to_lowercase().contains(&needle))
    }
}
