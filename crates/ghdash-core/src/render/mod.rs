// Renderers: pure mappings from fetched records onto the view-model
pub mod graph;
pub mod profile;
pub mod repos;

pub use graph::{contribution_graph_url, render_contribution_graph, DEFAULT_CHART_HOST};
pub use profile::{blog_href, format_joined, render_profile};
pub use repos::{render_repo_card, render_repositories, top_repositories, TOP_REPOSITORIES};
