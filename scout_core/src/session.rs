use crate::directory::DirectoryError;
use crate::store::SavedSet;
use crate::types::Candidate;

/// Shown when the listing was empty or every candidate was filtered out.
pub const NO_CANDIDATES: &str = "No candidates available";
/// Shown when the fetch itself failed.
pub const FETCH_FAILED: &str = "Failed to fetch candidates";

/// The browse-side review flow as an explicit state machine.
///
/// A session starts in `Loading`, resolves exactly once from the fetch
/// outcome, moves forward through the queue one candidate at a time, and
/// ends in `Exhausted`. `Exhausted` and `Failed` are terminal; a new session
/// is the only recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseSession {
    Loading,
    Browsing {
        queue: Vec<Candidate>,
        cursor: usize,
    },
    Exhausted,
    Failed {
        message: String,
    },
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::Loading
    }
}

impl BrowseSession {
    /// Maps the fetch outcome into a session. An empty post-filter batch and
    /// an empty listing both read as "no candidates available" to the user;
    /// everything else that went wrong reads as a fetch failure.
    pub fn resolve(outcome: Result<Vec<Candidate>, DirectoryError>) -> Self {
        match outcome {
            Ok(queue) if queue.is_empty() => Self::failed(NO_CANDIDATES),
            Ok(queue) => Self::Browsing { queue, cursor: 0 },
            Err(DirectoryError::NoCandidates) => Self::failed(NO_CANDIDATES),
            Err(err) => {
                log::warn!("candidate fetch failed: {}", err);
                Self::failed(FETCH_FAILED)
            }
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// The candidate under review; `Some` only while browsing.
    pub fn current(&self) -> Option<&Candidate> {
        match self {
            Self::Browsing { queue, cursor } => queue.get(*cursor),
            _ => None,
        }
    }

    /// Queue entries not yet reviewed, including the current one.
    pub fn remaining(&self) -> usize {
        match self {
            Self::Browsing { queue, cursor } => queue.len().saturating_sub(*cursor),
            _ => 0,
        }
    }

    /// Skip the current candidate. No persistence effect.
    pub fn reject(&mut self) {
        self.advance();
    }

    /// Save the current candidate into `saved` (append-if-absent; accepting
    /// an already-saved login is a silent merge), then advance exactly as
    /// `reject` does. Returns whether the saved set changed. Persisting the
    /// set afterwards is the caller's job.
    pub fn accept(&mut self, saved: &mut SavedSet) -> bool {
        let inserted = match self.current() {
            Some(candidate) => saved.insert(candidate.clone()),
            None => return false,
        };
        self.advance();
        inserted
    }

    fn advance(&mut self) {
        if let Self::Browsing { queue, cursor } = self {
            if *cursor + 1 < queue.len() {
                *cursor += 1;
            } else {
                *self = Self::Exhausted;
            }
        }
    }
}
