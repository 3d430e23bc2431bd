// TUI application state and key handling
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ghdash_core::{DashboardView, SearchOutcome, TabId, Theme};

/// Cards per row in the pinned grid
pub const GRID_COLUMNS: usize = 2;

/// Something on the dashboard that opens in the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Graph,
    Profile,
    Blog,
    Avatar,
    /// The selected pinned card
    Repository,
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Start a search for the current input
    Search,
    Open(LinkTarget),
    Quit,
}

pub struct App {
    pub view: DashboardView,
    pub theme: Theme,
    pub should_quit: bool,
    /// One-line message at the bottom, e.g. a browser that failed to open
    pub status_message: Option<String>,
    /// Index into `view.pinned`
    pub selected_card: usize,
}

impl App {
    pub fn new(view: DashboardView, theme: Theme) -> Self {
        Self {
            view,
            theme,
            should_quit: false,
            status_message: None,
            selected_card: 0,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Map a key press onto the view. Anything that needs the network or the
    /// OS is returned as an [`Action`] for the runner.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if ctrl => Action::Quit,
            KeyCode::Char('o') if ctrl => Action::Open(LinkTarget::Graph),
            KeyCode::Char('r') if ctrl => Action::Open(LinkTarget::Profile),
            KeyCode::Char('b') if ctrl => Action::Open(LinkTarget::Blog),
            KeyCode::Char('a') if ctrl => Action::Open(LinkTarget::Avatar),
            KeyCode::Char('p') if ctrl => Action::Open(LinkTarget::Repository),
            KeyCode::Left => self.move_selection(-1),
            KeyCode::Right => self.move_selection(1),
            KeyCode::Up => self.move_selection(-(GRID_COLUMNS as isize)),
            KeyCode::Down => self.move_selection(GRID_COLUMNS as isize),
            KeyCode::Enter => {
                // Button is disabled while a search is running
                if self.view.trigger.disabled {
                    Action::None
                } else {
                    Action::Search
                }
            }
            KeyCode::Tab => {
                self.view.tabs.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.view.tabs.previous();
                Action::None
            }
            KeyCode::F(n @ 1..=3) => {
                self.view.tabs.select(TabId::ALL[usize::from(n) - 1]);
                Action::None
            }
            KeyCode::Char(c) if !ctrl => {
                self.view.input.push(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.view.input.pop();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Move the card selection on the Overview grid, clamped to the cards shown
    fn move_selection(&mut self, delta: isize) -> Action {
        if self.view.tabs.active() != TabId::Overview || self.view.pinned.is_empty() {
            return Action::None;
        }

        let last = (self.view.pinned.len() - 1) as isize;
        let next = self.selected_card as isize + delta;
        self.selected_card = next.clamp(0, last) as usize;
        Action::None
    }

    pub fn selected_card(&self) -> Option<&ghdash_core::view::RepoCard> {
        self.view.pinned.get(self.selected_card)
    }

    /// Note the result of a search in the status line
    pub fn record_outcome(&mut self, outcome: &SearchOutcome) {
        match outcome {
            SearchOutcome::Rendered => {
                self.status_message = None;
                self.selected_card = 0;
            }
            SearchOutcome::Failed(err) => tracing::debug!("Search failed: {}", err),
            SearchOutcome::Ignored | SearchOutcome::Stale => {}
        }
    }

    /// URL behind a link, `None` while no result is shown or the link is absent
    pub fn link_url(&self, target: LinkTarget) -> Option<&str> {
        if !self.view.result_visible {
            return None;
        }

        let profile = &self.view.profile;
        let url = match target {
            LinkTarget::Graph => self.view.graph.as_ref().map(|graph| graph.src.as_str()),
            LinkTarget::Profile => Some(profile.profile_url.as_str()),
            LinkTarget::Blog if !profile.blog.hidden => profile.blog.href.as_deref(),
            LinkTarget::Blog => None,
            LinkTarget::Avatar => Some(profile.avatar_url.as_str()),
            LinkTarget::Repository => self.selected_card().map(|card| card.url.as_str()),
        };
        url.filter(|url| !url.is_empty())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DashboardView::default(), Theme::default())
    }
}
