use serde::{Deserialize, Serialize};

/// A fully hydrated profile as returned by the detail endpoint.
///
/// `login` is the identity key: the saved store and the browse queue both
/// deduplicate on it. Everything except `login` and `avatar_url` is nullable
/// upstream and rendered through a placeholder when absent.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Candidate {
    pub login: String,
    pub avatar_url: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
}

impl Candidate {
    /// Preferred display string: the real name when present, else the login.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

/// The partial record the listing endpoint returns; only `login` is
/// guaranteed by the upstream contract.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
}
