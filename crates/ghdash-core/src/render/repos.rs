use crate::languages;
use crate::models::Repository;
use crate::view::{DashboardView, LanguageBadge, RepoCard};

/// How many repositories make it into the pinned grid
pub const TOP_REPOSITORIES: usize = 6;

pub const NO_DESCRIPTION: &str = "No description available";

/// Most-starred repositories first, at most [`TOP_REPOSITORIES`].
///
/// Works on a copy of the references; equal star counts keep API order.
pub fn top_repositories(repos: &[Repository]) -> Vec<&Repository> {
    let mut ranked: Vec<&Repository> = repos.iter().collect();
    ranked.sort_by(|a, b| b.stars.cmp(&a.stars));
    ranked.truncate(TOP_REPOSITORIES);
    ranked
}

pub fn render_repo_card(repo: &Repository) -> RepoCard {
    RepoCard {
        name: repo.name.clone(),
        url: repo.url.clone(),
        description: repo
            .description
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        language: repo.language.as_ref().map(|lang| LanguageBadge {
            label: lang.clone(),
            color: languages::color_for(lang).to_string(),
        }),
        stars: repo.stars.to_string(),
        forks: repo.forks.to_string(),
    }
}

/// Fill the pinned grid and clear the secondary list.
///
/// Repositories outside the top set are not shown anywhere.
pub fn render_repositories(view: &mut DashboardView, repos: &[Repository]) {
    view.pinned = top_repositories(repos)
        .into_iter()
        .map(render_repo_card)
        .collect();
    view.repositories.clear();
}
