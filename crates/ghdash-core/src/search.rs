use std::sync::atomic::{AtomicU64, Ordering};

use ghdash_api::{GitHubClient, GitHubError, GitHubRepo, GitHubUser};
use tracing::{debug, info};

use crate::{
    error::SearchError,
    models::{Repository, UserProfile},
    render,
    view::{DashboardView, TriggerState},
};

/// Where profiles and repository lists come from.
///
/// [`GitHubClient`] is the real one; tests plug in a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_user(&self, login: &str) -> Result<GitHubUser, GitHubError>;
    async fn fetch_repos(&self, login: &str) -> Result<Vec<GitHubRepo>, GitHubError>;
}

#[async_trait::async_trait]
impl ProfileSource for GitHubClient {
    async fn fetch_user(&self, login: &str) -> Result<GitHubUser, GitHubError> {
        GitHubClient::fetch_user(self, login).await
    }

    async fn fetch_repos(&self, login: &str) -> Result<Vec<GitHubRepo>, GitHubError> {
        GitHubClient::fetch_repos(self, login).await
    }
}

/// Handle for one started search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    login: String,
}

impl SearchTicket {
    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Everything one successful search fetched
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub profile: UserProfile,
    pub repositories: Vec<Repository>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank input, nothing happened
    Ignored,
    Rendered,
    Failed(SearchError),
    /// A newer search was started before this one finished
    Stale,
}

/// Runs searches against a [`ProfileSource`] and renders them into a view.
///
/// Every search gets a generation number. Only the most recently started
/// search may write its results into the view; older ones are dropped when
/// they complete.
pub struct SearchOrchestrator<S> {
    source: S,
    chart_host: String,
    latest: AtomicU64,
}

impl<S: ProfileSource> SearchOrchestrator<S> {
    pub fn new(source: S, chart_host: impl Into<String>) -> Self {
        Self {
            source,
            chart_host: chart_host.into(),
            latest: AtomicU64::new(0),
        }
    }

    /// Full search: start, fetch, apply.
    pub async fn search(&self, view: &mut DashboardView, input: &str) -> SearchOutcome {
        let Some(ticket) = self.begin(view, input) else {
            return SearchOutcome::Ignored;
        };

        let result = self.fetch(&ticket).await;
        self.apply(view, &ticket, result)
    }

    /// Put the view into its loading state and hand out a ticket.
    ///
    /// Returns `None` for blank input, in which case the view is untouched.
    pub fn begin(&self, view: &mut DashboardView, input: &str) -> Option<SearchTicket> {
        let login = input.trim();
        if login.is_empty() {
            debug!("Ignoring empty search");
            return None;
        }

        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        info!("Searching for {} (search #{})", login, generation);

        view.trigger = TriggerState::busy();
        view.error.hide();
        view.result_visible = false;

        Some(SearchTicket {
            generation,
            login: login.to_string(),
        })
    }

    /// Fetch profile and repositories concurrently. Does not touch any view.
    pub async fn fetch(&self, ticket: &SearchTicket) -> Result<SearchResults, SearchError> {
        let (user, repos) = futures::try_join!(
            self.source.fetch_user(&ticket.login),
            self.source.fetch_repos(&ticket.login),
        )?;

        if user.is_not_found() {
            info!("User {} not found", ticket.login);
            return Err(SearchError::UserNotFound);
        }

        debug!("Fetched {} repositories for {}", repos.len(), ticket.login);

        Ok(SearchResults {
            profile: user.into(),
            repositories: repos.into_iter().map(Repository::from).collect(),
        })
    }

    /// Write a finished search into the view, unless a newer one was started.
    ///
    /// The loading state is cleared on both the success and the failure path.
    pub fn apply(
        &self,
        view: &mut DashboardView,
        ticket: &SearchTicket,
        result: Result<SearchResults, SearchError>,
    ) -> SearchOutcome {
        let latest = self.latest.load(Ordering::SeqCst);
        if ticket.generation != latest {
            debug!(
                "Dropping results of search #{} ({}), #{} is newer",
                ticket.generation, ticket.login, latest
            );
            return SearchOutcome::Stale;
        }

        let outcome = match result {
            Ok(results) => {
                render::render_profile(&mut view.profile, &results.profile);
                render::render_repositories(view, &results.repositories);
                render::render_contribution_graph(view, &self.chart_host, &ticket.login);
                view.result_visible = true;
                SearchOutcome::Rendered
            }
            Err(err) => {
                view.error.show(err.to_string());
                view.result_visible = false;
                SearchOutcome::Failed(err)
            }
        };

        view.trigger = TriggerState::idle();
        outcome
    }
}
