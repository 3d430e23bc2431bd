use serde::Serialize;
use thiserror::Error;

/// Failures outside the search flow: reading and writing the config file
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// What a search can end with. The display text is what the error banner shows.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SearchError {
    #[error("User not found")]
    UserNotFound,

    #[error("Network error")]
    Network,
}

impl From<ghdash_api::GitHubError> for SearchError {
    fn from(err: ghdash_api::GitHubError) -> Self {
        // Status, transport and decode failures all look the same to the user
        tracing::warn!("Fetch failed: {}", err);
        SearchError::Network
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_text() {
        assert_eq!(SearchError::UserNotFound.to_string(), "User not found");
        assert_eq!(SearchError::Network.to_string(), "Network error");
    }

    #[test]
    fn test_api_errors_become_network_errors() {
        let api = ghdash_api::GitHubError::Network(reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(SearchError::from(api), SearchError::Network);

        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        let api = ghdash_api::GitHubError::Decode(decode);
        assert_eq!(SearchError::from(api), SearchError::Network);
    }
}
