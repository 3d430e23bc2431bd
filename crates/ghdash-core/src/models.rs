use chrono::{DateTime, Utc};
use ghdash_api::{GitHubRepo, GitHubUser};
use serde::{Deserialize, Serialize};

/// The account a search is about
///
/// `login` is always set. Every optional field is `None` when the API left it
/// out, sent null, or sent an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub bio: Option<String>,
    pub account_type: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

impl UserProfile {
    /// Profile with only the login set, handy for tests and fallbacks
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: None,
            avatar_url: None,
            html_url: None,
            bio: None,
            account_type: None,
            location: None,
            company: None,
            blog: None,
            created_at: None,
            public_repos: 0,
            followers: 0,
            following: 0,
        }
    }
}

/// A repository card's worth of data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub language: Option<String>,
    pub stars: u32,
    pub forks: u32,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

impl From<GitHubUser> for UserProfile {
    fn from(gh: GitHubUser) -> Self {
        let created_at = parse_timestamp(gh.created_at.as_deref());

        Self {
            login: gh.login,
            name: non_empty(gh.name),
            avatar_url: non_empty(gh.avatar_url),
            html_url: non_empty(gh.html_url),
            bio: non_empty(gh.bio),
            account_type: non_empty(gh.account_type),
            location: non_empty(gh.location),
            company: non_empty(gh.company),
            blog: non_empty(gh.blog),
            created_at,
            public_repos: gh.public_repos,
            followers: gh.followers,
            following: gh.following,
        }
    }
}

impl From<GitHubRepo> for Repository {
    fn from(gh: GitHubRepo) -> Self {
        Self {
            name: gh.name,
            description: non_empty(gh.description),
            url: gh.html_url,
            language: non_empty(gh.language),
            stars: gh.stargazers_count,
            forks: gh.forks_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_profile_from_wire() {
        let gh = GitHubUser {
            login: "octocat".into(),
            name: Some("".into()),
            blog: Some("".into()),
            location: Some("San Francisco".into()),
            created_at: Some("2011-01-25T18:44:36Z".into()),
            followers: 12,
            ..Default::default()
        };

        let profile = UserProfile::from(gh);
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.name, None);
        assert_eq!(profile.blog, None);
        assert_eq!(profile.location.as_deref(), Some("San Francisco"));
        assert_eq!(profile.followers, 12);

        let created = profile.created_at.unwrap();
        assert_eq!((created.year(), created.month()), (2011, 1));
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let gh = GitHubUser {
            login: "octocat".into(),
            name: Some(" ".into()),
            location: Some("  ".into()),
            ..Default::default()
        };

        let profile = UserProfile::from(gh);
        assert_eq!(profile.name.as_deref(), Some(" "));
        assert_eq!(profile.location.as_deref(), Some("  "));
    }

    #[test]
    fn test_bad_timestamp_is_dropped() {
        let gh = GitHubUser {
            login: "octocat".into(),
            created_at: Some("yesterday".into()),
            ..Default::default()
        };
        assert!(UserProfile::from(gh).created_at.is_none());
    }

    #[test]
    fn test_repository_from_wire() {
        let gh = GitHubRepo {
            name: "hello-world".into(),
            html_url: "https://github.com/octocat/hello-world".into(),
            description: None,
            language: Some("Rust".into()),
            stargazers_count: 42,
            forks_count: 7,
        };

        let repo = Repository::from(gh);
        assert_eq!(repo.url, "https://github.com/octocat/hello-world");
        assert_eq!(repo.stars, 42);
        assert_eq!(repo.forks, 7);
        assert_eq!(repo.language.as_deref(), Some("Rust"));
    }
}
