use async_trait::async_trait;
use scout_core::directory::{fetch_batch, DirectoryError, ProfileDirectory};
use scout_core::types::{Candidate, CandidateSummary};
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

/// Scripted directory: a fixed listing, per-login delays so completion order
/// differs from listing order, and a set of logins whose detail call fails.
struct ScriptedDirectory {
    listing: Vec<&'static str>,
    failing: Vec<&'static str>,
    delays_ms: Vec<u64>,
    detail_calls: Mutex<Vec<String>>,
}

impl ScriptedDirectory {
    fn new(listing: Vec<&'static str>) -> Self {
        let delays_ms = vec![0; listing.len()];
        Self {
            listing,
            failing: Vec::new(),
            delays_ms,
            detail_calls: Mutex::new(Vec::new()),
        }
    }

    fn with_failing(mut self, failing: Vec<&'static str>) -> Self {
        self.failing = failing;
        self
    }

    fn with_delays_ms(mut self, delays_ms: Vec<u64>) -> Self {
        self.delays_ms = delays_ms;
        self
    }

    fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileDirectory for ScriptedDirectory {
    async fn list_candidates(&self) -> Result<Vec<CandidateSummary>, DirectoryError> {
        if self.listing.is_empty() {
            return Err(DirectoryError::NoCandidates);
        }
        Ok(self
            .listing
            .iter()
            .map(|login| CandidateSummary {
                login: login.to_string(),
                avatar_url: String::new(),
            })
            .collect())
    }

    async fn fetch_detail(&self, login: &str) -> Result<Candidate, DirectoryError> {
        self.detail_calls.lock().unwrap().push(login.to_string());

        let position = self.listing.iter().position(|l| *l == login).unwrap();
        let delay = self.delays_ms[position];
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        if self.failing.contains(&login) {
            return Err(DirectoryError::Status(404));
        }
        Ok(Candidate {
            login: login.to_string(),
            avatar_url: format!("https://avatars.example/{}", login),
            name: Some(format!("{} full", login)),
            ..Default::default()
        })
    }
}

#[tokio::test]
async fn test_batch_preserves_listing_order() {
    // Alice's detail call finishes last; the batch is still alice-first.
    let directory = ScriptedDirectory::new(vec!["alice", "bob", "carol"])
        .with_delays_ms(vec![40, 0, 10]);

    let batch = fetch_batch(&directory, &HashSet::new()).await.unwrap();
    let logins: Vec<_> = batch.iter().map(|c| c.login.as_str()).collect();
    assert_eq!(logins, vec!["alice", "bob", "carol"]);
}

#[tokio::test]
async fn test_batch_absorbs_per_login_failures() {
    let directory =
        ScriptedDirectory::new(vec!["alice", "bob", "carol"]).with_failing(vec!["bob"]);

    let batch = fetch_batch(&directory, &HashSet::new()).await.unwrap();
    let logins: Vec<_> = batch.iter().map(|c| c.login.as_str()).collect();
    assert_eq!(logins, vec!["alice", "carol"]);
}

#[tokio::test]
async fn test_saved_logins_skip_the_detail_call() {
    let directory = ScriptedDirectory::new(vec!["alice", "bob", "carol"]);
    let saved: HashSet<String> = ["bob".to_string()].into_iter().collect();

    let batch = fetch_batch(&directory, &saved).await.unwrap();
    let logins: Vec<_> = batch.iter().map(|c| c.login.as_str()).collect();
    assert_eq!(logins, vec!["alice", "carol"]);

    // The filtered login never cost a network call.
    assert!(!directory.detail_calls().contains(&"bob".to_string()));
    assert_eq!(directory.detail_calls().len(), 2);
}

#[tokio::test]
async fn test_empty_listing_is_a_distinct_condition() {
    let directory = ScriptedDirectory::new(Vec::new());

    let outcome = fetch_batch(&directory, &HashSet::new()).await;
    assert!(matches!(outcome, Err(DirectoryError::NoCandidates)));
}

#[tokio::test]
async fn test_everything_filtered_is_an_empty_ok() {
    let directory = ScriptedDirectory::new(vec!["alice"]);
    let saved: HashSet<String> = ["alice".to_string()].into_iter().collect();

    let batch = fetch_batch(&directory, &saved).await.unwrap();
    assert!(batch.is_empty());
}

#[tokio::test]
async fn test_fully_filtered_batch_resolves_to_no_candidates() {
    use scout_core::session::{BrowseSession, NO_CANDIDATES};

    let directory = ScriptedDirectory::new(vec!["alice"]);
    let saved: HashSet<String> = ["alice".to_string()].into_iter().collect();

    let session = BrowseSession::resolve(fetch_batch(&directory, &saved).await);
    assert_eq!(session, BrowseSession::failed(NO_CANDIDATES));
}

#[tokio::test]
async fn test_detail_records_are_fully_hydrated() {
    let directory = ScriptedDirectory::new(vec!["alice"]);

    let batch = fetch_batch(&directory, &HashSet::new()).await.unwrap();
    assert_eq!(batch[0].name.as_deref(), Some("alice full"));
    assert_eq!(batch[0].avatar_url, "https://avatars.example/alice");
}
