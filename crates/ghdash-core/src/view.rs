// View-model for the dashboard. Renderers write into it, front-ends draw it.
use serde::Serialize;

use crate::tabs::{TabController, TabId};

pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";

/// The search button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerState {
    pub label: String,
    pub disabled: bool,
}

impl TriggerState {
    pub fn idle() -> Self {
        Self {
            label: SEARCH_LABEL.to_string(),
            disabled: false,
        }
    }

    pub fn busy() -> Self {
        Self {
            label: SEARCHING_LABEL.to_string(),
            disabled: true,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.disabled
    }
}

impl Default for TriggerState {
    fn default() -> Self {
        Self::idle()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBanner {
    pub message: String,
    pub hidden: bool,
}

impl ErrorBanner {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.hidden = false;
    }

    /// Hides the banner. The old text stays, it is just not shown.
    pub fn hide(&mut self) {
        self.hidden = true;
    }
}

impl Default for ErrorBanner {
    fn default() -> Self {
        Self {
            message: String::new(),
            hidden: true,
        }
    }
}

/// One icon-prefixed line under the bio (location, company, blog)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaRow {
    pub icon: String,
    pub text: String,
    /// Only the blog row links somewhere
    pub href: Option<String>,
    pub hidden: bool,
}

impl MetaRow {
    pub fn hidden(icon: &str) -> Self {
        Self {
            icon: icon.to_string(),
            text: String::new(),
            href: None,
            hidden: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub avatar_url: String,
    pub name: String,
    pub username: String,
    pub profile_url: String,
    pub bio: String,
    pub account_type: String,
    pub location: MetaRow,
    pub company: MetaRow,
    pub blog: MetaRow,
    pub joined: String,
    pub public_repos: String,
    pub followers: String,
    pub following: String,
}

impl Default for ProfileView {
    fn default() -> Self {
        use crate::render::profile::{BLOG_ICON, COMPANY_ICON, LOCATION_ICON};

        Self {
            avatar_url: String::new(),
            name: String::new(),
            username: String::new(),
            profile_url: String::new(),
            bio: String::new(),
            account_type: String::new(),
            location: MetaRow::hidden(LOCATION_ICON),
            company: MetaRow::hidden(COMPANY_ICON),
            blog: MetaRow::hidden(BLOG_ICON),
            joined: String::new(),
            public_repos: String::new(),
            followers: String::new(),
            following: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageBadge {
    pub label: String,
    /// `#rrggbb`
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoCard {
    pub name: String,
    pub url: String,
    pub description: String,
    pub language: Option<LanguageBadge>,
    pub stars: String,
    pub forks: String,
}

/// An externally rendered image, referenced by URL only
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributionGraph {
    pub src: String,
    pub alt: String,
}

/// Everything the user can see, owned in one place.
///
/// Built once by the front-end and handed by `&mut` to the search flow and the
/// renderers. A search replaces the rendered parts wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub input: String,
    pub trigger: TriggerState,
    pub error: ErrorBanner,
    pub result_visible: bool,
    pub profile: ProfileView,
    /// Top repositories by stars
    pub pinned: Vec<RepoCard>,
    /// Secondary list, cleared on every render
    pub repositories: Vec<RepoCard>,
    pub graph: Option<ContributionGraph>,
    pub tabs: TabController,
}

impl DashboardView {
    pub fn new(initial_tab: TabId) -> Self {
        Self {
            input: String::new(),
            trigger: TriggerState::idle(),
            error: ErrorBanner::default(),
            result_visible: false,
            profile: ProfileView::default(),
            pinned: Vec::new(),
            repositories: Vec::new(),
            graph: None,
            tabs: TabController::new(initial_tab),
        }
    }

    /// Start with `input` already typed in
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    pub fn is_loading(&self) -> bool {
        self.trigger.is_busy()
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new(TabId::Overview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_view() {
        let view = DashboardView::default().with_input("octocat");
        assert_eq!(view.input, "octocat");
        assert_eq!(view.trigger.label, "Search");
        assert!(!view.is_loading());
        assert!(view.error.hidden);
        assert!(!view.result_visible);
        assert!(view.profile.blog.hidden);
        assert_eq!(view.tabs.active(), TabId::Overview);
    }

    #[test]
    fn test_trigger_states() {
        let busy = TriggerState::busy();
        assert_eq!(busy.label, "Searching...");
        assert!(busy.disabled);
        assert_eq!(TriggerState::idle().label, "Search");
    }

    #[test]
    fn test_error_banner_toggles() {
        let mut banner = ErrorBanner::default();
        banner.show("User not found");
        assert!(!banner.hidden);
        banner.hide();
        assert!(banner.hidden);
    }
}
