// Core of the dashboard: domain models, renderers, tabs and the search flow
pub mod config;
pub mod error;
pub mod languages;
pub mod models;
pub mod render;
pub mod search;
pub mod tabs;
pub mod theme;
pub mod view;

pub use config::Config;
pub use error::{Error, SearchError};
pub use models::{Repository, UserProfile};
pub use search::{ProfileSource, SearchOrchestrator, SearchOutcome, SearchResults, SearchTicket};
pub use tabs::{TabController, TabId};
pub use theme::{Color, Theme, ThemeColors};
pub use view::DashboardView;

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
