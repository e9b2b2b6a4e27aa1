use crate::types::{Candidate, CandidateSummary};
use async_trait::async_trait;
use futures::future::join_all;
use rand::Rng;
use std::collections::HashSet;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum DirectoryError {
    #[error("listing returned no candidates")]
    NoCandidates,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("profile directory returned status {0}")]
    Status(u16),
}

/// A source of candidate profiles: one listing call plus one detail call per
/// listed login. Implemented by [`GithubDirectory`] in production and by
/// scripted fakes in tests.
#[async_trait]
pub trait ProfileDirectory {
    async fn list_candidates(&self) -> Result<Vec<CandidateSummary>, DirectoryError>;
    async fn fetch_detail(&self, login: &str) -> Result<Candidate, DirectoryError>;
}

const API_BASE: &str = "https://api.github.com";
const PAGE_SIZE: u32 = 30;
const USER_AGENT: &str = "candidate-scout/0.1";

/// Profile directory backed by the public GitHub users API.
///
/// Listing walks `/users?since=<offset>` from a random offset so each session
/// sees a fresh slice of the directory. An optional bearer token from
/// `GITHUB_TOKEN` lifts the unauthenticated rate limit.
pub struct GithubDirectory {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GithubDirectory {
    pub fn new() -> Result<Self, DirectoryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: API_BASE.to_string(),
            token: std::env::var("GITHUB_TOKEN").ok(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        // GitHub rejects requests without a User-Agent.
        let mut request = self.client.get(url).header("User-Agent", USER_AGENT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }
}

#[async_trait]
impl ProfileDirectory for GithubDirectory {
    async fn list_candidates(&self) -> Result<Vec<CandidateSummary>, DirectoryError> {
        let offset: u64 = rand::thread_rng().gen_range(1..=100_000_000);
        let url = format!(
            "{}/users?since={}&per_page={}",
            self.base_url, offset, PAGE_SIZE
        );

        let response = self.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(DirectoryError::Status(response.status().as_u16()));
        }

        let listed: Vec<CandidateSummary> = response.json().await?;
        if listed.is_empty() {
            return Err(DirectoryError::NoCandidates);
        }
        Ok(listed)
    }

    async fn fetch_detail(&self, login: &str) -> Result<Candidate, DirectoryError> {
        let url = format!("{}/users/{}", self.base_url, login);

        let response = self.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(DirectoryError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

/// Fetch one batch of reviewable candidates.
///
/// Lists the directory once, then issues every detail call concurrently and
/// reassembles the results in listing order. Logins already in
/// `saved_logins` are excluded before their detail call is made, and a
/// failing detail call drops that login from the batch instead of aborting
/// it. An empty listing surfaces as [`DirectoryError::NoCandidates`]; a
/// batch where every login was filtered or failed returns an empty `Ok`.
pub async fn fetch_batch<D: ProfileDirectory + Sync>(
    directory: &D,
    saved_logins: &HashSet<String>,
) -> Result<Vec<Candidate>, DirectoryError> {
    let listed = directory.list_candidates().await?;
    log::debug!("listing returned {} logins", listed.len());

    let details = listed.iter().map(|summary| async move {
        if saved_logins.contains(&summary.login) {
            return None;
        }
        match directory.fetch_detail(&summary.login).await {
            Ok(candidate) => Some(candidate),
            Err(err) => {
                log::warn!("dropping {} from batch: {}", summary.login, err);
                None
            }
        }
    });

    let batch: Vec<Candidate> = join_all(details).await.into_iter().flatten().collect();
    log::debug!("assembled batch of {} candidates", batch.len());
    Ok(batch)
}
