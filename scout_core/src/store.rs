use crate::types::Candidate;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("failed to write store: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize candidates: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence seam for the saved set. `load` never fails: absent or
/// unparsable backing data means an empty set. `save` is a full overwrite of
/// whatever was stored before; last writer wins.
pub trait CandidateStore {
    fn load(&self) -> Vec<Candidate>;
    fn save(&self, candidates: &[Candidate]) -> Result<(), StoreError>;
}

pub const STORE_FILE: &str = "saved_candidates.json";

/// Store backed by a single JSON file holding an array of candidates.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform data directory, e.g. `~/.local/share/candidate-scout/` on
    /// Linux. Falls back to the working directory when none is known.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("candidate-scout")
            .join(STORE_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CandidateStore for JsonFileStore {
    fn load(&self) -> Vec<Candidate> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(candidates) => candidates,
            Err(err) => {
                log::warn!(
                    "ignoring unparsable store at {}: {}",
                    self.path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    fn save(&self, candidates: &[Candidate]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(candidates)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store for tests and dry runs.
#[derive(Default)]
pub struct MemoryStore {
    candidates: Mutex<Vec<Candidate>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CandidateStore for MemoryStore {
    fn load(&self) -> Vec<Candidate> {
        self.candidates.lock().unwrap().clone()
    }

    fn save(&self, candidates: &[Candidate]) -> Result<(), StoreError> {
        *self.candidates.lock().unwrap() = candidates.to_vec();
        Ok(())
    }
}

/// Ordered collection of accepted candidates, unique by login.
///
/// Purely in-memory; callers persist it by following every mutation with
/// [`SavedSet::persist`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedSet {
    candidates: Vec<Candidate>,
}

impl SavedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw records, keeping the first occurrence of each
    /// login so the uniqueness invariant holds even for a hand-edited file.
    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        let mut set = Self::new();
        for candidate in candidates {
            set.insert(candidate);
        }
        set
    }

    pub fn load(store: &dyn CandidateStore) -> Self {
        Self::from_candidates(store.load())
    }

    pub fn persist(&self, store: &dyn CandidateStore) -> Result<(), StoreError> {
        store.save(&self.candidates)
    }

    pub fn contains(&self, login: &str) -> bool {
        self.candidates.iter().any(|c| c.login == login)
    }

    /// Appends the candidate unless its login is already present. Returns
    /// whether the set changed.
    pub fn insert(&mut self, candidate: Candidate) -> bool {
        if self.contains(&candidate.login) {
            return false;
        }
        self.candidates.push(candidate);
        true
    }

    /// Removes the candidate with the given login, if any. Removing an
    /// unknown login leaves the set unchanged.
    pub fn remove(&mut self, login: &str) -> bool {
        let before = self.candidates.len();
        self.candidates.retain(|c| c.login != login);
        self.candidates.len() != before
    }

    /// Snapshot of all saved logins, used to pre-filter the browse queue.
    pub fn logins(&self) -> HashSet<String> {
        self.candidates.iter().map(|c| c.login.clone()).collect()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(login: &str) -> Candidate {
        Candidate {
            login: login.to_string(),
            avatar_url: format!("https://avatars.example/{}", login),
            ..Default::default()
        }
    }

    #[test]
    fn test_insert_is_idempotent_by_login() {
        let mut set = SavedSet::new();
        assert!(set.insert(candidate("alice")));
        assert!(!set.insert(candidate("alice")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut set = SavedSet::new();
        set.insert(candidate("carol"));
        set.insert(candidate("alice"));
        set.insert(candidate("bob"));

        let logins: Vec<_> = set.candidates().iter().map(|c| c.login.as_str()).collect();
        assert_eq!(logins, vec!["carol", "alice", "bob"]);
    }

    #[test]
    fn test_remove_by_login() {
        let mut set = SavedSet::from_candidates(vec![candidate("alice"), candidate("bob")]);

        assert!(set.remove("alice"));
        assert!(!set.contains("alice"));
        assert_eq!(set.len(), 1);

        // Unknown login is a no-op.
        assert!(!set.remove("nobody"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_candidates_deduplicates() {
        let set = SavedSet::from_candidates(vec![
            candidate("alice"),
            candidate("bob"),
            candidate("alice"),
        ]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_logins_snapshot() {
        let set = SavedSet::from_candidates(vec![candidate("alice"), candidate("bob")]);
        let logins = set.logins();
        assert!(logins.contains("alice"));
        assert!(logins.contains("bob"));
        assert_eq!(logins.len(), 2);
    }
}
