//! Key-set aggregation across scanned localization files.
//!
//! The aggregator owns the per-file key sets and the derived union for the
//! duration of one run; every invocation rebuilds it from disk. Iteration
//! order is never relied upon here, ordering is applied at render/write time.

use std::collections::{HashMap, HashSet};

/// Per-file key sets plus the set algebra derived from them.
#[derive(Debug, Default)]
pub struct KeySetAggregator {
    sets: HashMap<String, HashSet<String>>,
}

impl KeySetAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the key set parsed from one file. The set may be empty, but
    /// every scanned file must be inserted so the domain stays exact.
    pub fn insert(&mut self, file: impl Into<String>, keys: HashSet<String>) {
        self.sets.insert(file.into(), keys);
    }

    /// Union of all per-file key sets.
    pub fn union_keys(&self) -> HashSet<String> {
        let mut union = HashSet::new();
        for keys in self.sets.values() {
            union.extend(keys.iter().cloned());
        }
        union
    }

    /// Keys present in the union but absent from `file`.
    pub fn missing_for(&self, file: &str) -> HashSet<String> {
        let keys = self.sets.get(file);
        self.union_keys()
            .into_iter()
            .filter(|k| keys.is_none_or(|set| !set.contains(k)))
            .collect()
    }

    /// A file is complete iff its key set contains every union key.
    pub fn is_complete(&self, file: &str) -> bool {
        self.missing_for(file).is_empty()
    }

    /// The directory is fully synchronized iff every file is complete.
    pub fn is_fully_synchronized(&self) -> bool {
        let union = self.union_keys();
        self.sets.values().all(|keys| union.is_subset(keys))
    }

    /// File names in lexicographic order, for deterministic rendering.
    pub fn sorted_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self.sets.keys().map(String::as_str).collect();
        files.sort_unstable();
        files
    }

    /// Mark `file` as containing every union key. Called after correction so
    /// the in-memory state reflects what was just written to disk.
    pub fn mark_complete(&mut self, file: &str) {
        let union = self.union_keys();
        if let Some(keys) = self.sets.get_mut(file) {
            keys.extend(union);
        }
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
