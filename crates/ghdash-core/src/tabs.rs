use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed set of panes in the result panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    Overview,
    Repositories,
    Contributions,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Overview, TabId::Repositories, TabId::Contributions];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Overview => "overview",
            TabId::Repositories => "repositories",
            TabId::Contributions => "contributions",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TabId::Overview => "Overview",
            TabId::Repositories => "Repositories",
            TabId::Contributions => "Contributions",
        }
    }

    /// Identifier of the pane this tab shows
    pub fn pane_id(&self) -> String {
        format!("{}-tab", self.name())
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for TabId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabId::ALL
            .into_iter()
            .find(|tab| tab.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tab '{}'", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub id: TabId,
    pub active: bool,
}

/// Keeps exactly one tab (and its pane) active
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabController {
    tabs: Vec<Tab>,
}

impl TabController {
    pub fn new(initial: TabId) -> Self {
        let tabs = TabId::ALL
            .into_iter()
            .map(|id| Tab {
                id,
                active: id == initial,
            })
            .collect();

        Self { tabs }
    }

    /// Activate `id` and deactivate every other tab. Selecting the active tab
    /// changes nothing.
    pub fn select(&mut self, id: TabId) {
        for tab in &mut self.tabs {
            tab.active = tab.id == id;
        }
    }

    pub fn active(&self) -> TabId {
        self.tabs
            .iter()
            .find(|tab| tab.active)
            .map(|tab| tab.id)
            .unwrap_or(TabId::Overview)
    }

    pub fn is_active(&self, id: TabId) -> bool {
        self.tabs.iter().any(|tab| tab.id == id && tab.active)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn next(&mut self) {
        let idx = self.active_index();
        let next = self.tabs[(idx + 1) % self.tabs.len()].id;
        self.select(next);
    }

    pub fn previous(&mut self) {
        let idx = self.active_index();
        let prev = self.tabs[(idx + self.tabs.len() - 1) % self.tabs.len()].id;
        self.select(prev);
    }

    fn active_index(&self) -> usize {
        self.tabs.iter().position(|tab| tab.active).unwrap_or(0)
    }
}

impl Default for TabController {
    fn default() -> Self {
        Self::new(TabId::Overview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_the_only_active_one() {
        for initial in TabId::ALL {
            let tabs = TabController::new(initial);
            assert_eq!(tabs.active(), initial);
            assert_eq!(tabs.tabs().iter().filter(|t| t.active).count(), 1);
        }
    }

    #[test]
    fn test_select_activates_exactly_one() {
        let mut tabs = TabController::default();

        for id in TabId::ALL {
            tabs.select(id);
            assert!(tabs.is_active(id));
            for other in TabId::ALL.into_iter().filter(|o| *o != id) {
                assert!(!tabs.is_active(other), "{} still active after selecting {}", other, id);
            }
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut tabs = TabController::default();
        tabs.select(TabId::Contributions);
        let once = tabs.clone();
        tabs.select(TabId::Contributions);
        assert_eq!(tabs, once);
    }

    #[test]
    fn test_cycling_wraps() {
        let mut tabs = TabController::new(TabId::Contributions);
        tabs.next();
        assert_eq!(tabs.active(), TabId::Overview);
        tabs.previous();
        assert_eq!(tabs.active(), TabId::Contributions);
        tabs.previous();
        assert_eq!(tabs.active(), TabId::Repositories);
    }

    #[test]
    fn test_pane_ids_and_parsing() {
        assert_eq!(TabId::Repositories.pane_id(), "repositories-tab");
        assert_eq!("Contributions".parse::<TabId>(), Ok(TabId::Contributions));
        assert!("settings".parse::<TabId>().is_err());
    }
}
