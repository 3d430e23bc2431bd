use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Value of `message` in the body GitHub sends with a 404
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Fixed page size for the repository listing
pub const REPOS_PER_PAGE: u32 = 30;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Request failed with status {0}")]
    Network(reqwest::StatusCode),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;

/// How the fetcher treats a response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx, decode the body
    Success,
    /// 404, decode the body anyway and let the caller look at `message`
    NotFound,
    /// Everything else
    Fatal,
}

/// 404 is the one non-success status whose body is still handed back.
pub fn classify_status(status: reqwest::StatusCode) -> StatusClass {
    if status.is_success() {
        StatusClass::Success
    } else if status == reqwest::StatusCode::NOT_FOUND {
        StatusClass::NotFound
    } else {
        StatusClass::Fatal
    }
}

pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// For GitHub Enterprise or a local test server
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(concat!(
                "ghdash/",
                env!("CARGO_PKG_VERSION")
            )),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let base_url = base_url.into().trim_end_matches('/').to_string();

        let mut builder = reqwest::Client::builder().default_headers(headers);
        // Local servers are never reached through a proxy
        if base_url.starts_with("http://127.0.0.1") || base_url.starts_with("http://localhost") {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_url(&self, login: &str) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(login))
    }

    pub fn repos_url(&self, login: &str) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base_url,
            urlencoding::encode(login),
            REPOS_PER_PAGE
        )
    }

    /// GET a URL and decode its JSON body.
    ///
    /// A 404 is decoded like a success; the caller checks the `message`
    /// field to tell "not found" apart. Any other non-success status is a
    /// [`GitHubError::Network`].
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        match classify_status(status) {
            StatusClass::Success => {}
            StatusClass::NotFound => debug!("{} returned 404, decoding body", url),
            StatusClass::Fatal => {
                warn!("{} returned {}", url, status);
                return Err(GitHubError::Network(status));
            }
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch a user profile. Unknown users come back with `message` set.
    pub async fn fetch_user(&self, login: &str) -> Result<GitHubUser> {
        self.fetch_json(&self.user_url(login)).await
    }

    /// Fetch the most recently updated repositories of a user.
    ///
    /// For an unknown user GitHub answers with an error object instead of a
    /// list; that is returned as an empty list so the profile lookup can
    /// report the missing user.
    pub async fn fetch_repos(&self, login: &str) -> Result<Vec<GitHubRepo>> {
        let body: RepoListBody = self.fetch_json(&self.repos_url(login)).await?;
        Ok(body.into_repos())
    }
}

/// User profile as returned by `/users/{login}`
///
/// Everything except `login` may be missing or null. A 404 body only has
/// `message` (and `documentation_url`), so `login` defaults to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubUser {
    #[serde(default)]
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    /// Set on error payloads, e.g. "Not Found"
    pub message: Option<String>,
}

impl GitHubUser {
    pub fn is_not_found(&self) -> bool {
        self.message.as_deref() == Some(NOT_FOUND_MESSAGE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RepoListBody {
    Repos(Vec<GitHubRepo>),
    Error {
        #[allow(dead_code)]
        message: String,
    },
}

impl RepoListBody {
    fn into_repos(self) -> Vec<GitHubRepo> {
        match self {
            RepoListBody::Repos(repos) => repos,
            RepoListBody::Error { .. } => Vec::new(),
        }
    }
}
