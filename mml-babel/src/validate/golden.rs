//! File-backed golden-set store.
//!
//! One JSON object keyed by question id. The file is read once when the
//! store is constructed and rewritten wholesale on every save; there is no
//! incremental update path because the store is small and saves are rare,
//! explicit operations.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One reference entry: the conversion output that was blessed for a
/// question, plus the rendered-SVG hash and accessibility text captured at
/// blessing time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldenEntry {
    pub original_mathml: String,
    pub converted_tex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mathspeak: Option<String>,
}

/// The golden set, keyed by question id.
///
/// `BTreeMap` keeps serialization order stable, so re-saving an unchanged
/// store produces a byte-identical file.
#[derive(Debug, Clone)]
pub struct GoldenStore {
    path: PathBuf,
    entries: BTreeMap<String, GoldenEntry>,
}

impl GoldenStore {
    /// Load the store backing `path`.
    ///
    /// Any load failure — missing file, unreadable file, malformed JSON —
    /// degrades to an empty store: validation then runs with its
    /// golden-dependent checks skipped rather than failed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        GoldenStore { path, entries }
    }

    /// An empty, in-memory-only view (still saveable to `path`).
    pub fn empty(path: impl AsRef<Path>) -> Self {
        GoldenStore {
            path: path.as_ref().to_path_buf(),
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, question_id: &str) -> Option<&GoldenEntry> {
        self.entries.get(question_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or overwrite an entry, then persist the whole store.
    pub fn upsert(&mut self, question_id: &str, entry: GoldenEntry) -> Result<(), ConvertError> {
        self.entries.insert(question_id.to_string(), entry);
        self.save()
    }

    fn save(&self) -> Result<(), ConvertError> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| ConvertError::StoreError(format!("serialization failed: {e}")))?;
        fs::write(&self.path, json).map_err(|e| {
            ConvertError::StoreError(format!("writing {} failed: {e}", self.path.display()))
        })
    }
}
