// Plain-text rendering of the dashboard for `ghdash show`
use std::fmt::Write;

use ghdash_core::{view::RepoCard, DashboardView};

pub fn render_text(view: &DashboardView) -> String {
    let mut out = String::new();

    if !view.error.hidden {
        let _ = writeln!(out, "error: {}", view.error.message);
    }
    if !view.result_visible {
        return out;
    }

    let profile = &view.profile;
    let _ = writeln!(out, "{} ({})", profile.name, profile.username);
    if !profile.account_type.is_empty() {
        let _ = writeln!(out, "{}", profile.account_type);
    }
    if !profile.profile_url.is_empty() {
        let _ = writeln!(out, "{}", profile.profile_url);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", profile.bio);
    let _ = writeln!(out);

    for row in [&profile.location, &profile.company, &profile.blog] {
        if row.hidden {
            continue;
        }
        match &row.href {
            Some(href) if href != &row.text => {
                let _ = writeln!(out, "{} {} <{}>", row.icon, row.text, href);
            }
            _ => {
                let _ = writeln!(out, "{} {}", row.icon, row.text);
            }
        }
    }
    let _ = writeln!(out, "{}", profile.joined);
    let _ = writeln!(
        out,
        "{} repos · {} followers · {} following",
        profile.public_repos, profile.followers, profile.following
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Popular repositories");
    for card in &view.pinned {
        write_card(&mut out, card);
    }

    if let Some(graph) = &view.graph {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}: {}", graph.alt, graph.src);
    }

    out
}

fn write_card(out: &mut String, card: &RepoCard) {
    let _ = writeln!(out, "  {}  {}", card.name, card.url);
    let _ = writeln!(out, "    {}", card.description);

    let mut meta = String::new();
    if let Some(badge) = &card.language {
        let _ = write!(meta, "● {}  ", badge.label);
    }
    let _ = write!(meta, "⭐ {}  🍴 {}", card.stars, card.forks);
    let _ = writeln!(out, "    {}", meta);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghdash_core::{
        render::{render_contribution_graph, render_profile, render_repositories},
        Repository, UserProfile,
    };

    #[test]
    fn test_error_only() {
        let mut view = DashboardView::default();
        view.error.show("User not found");
        assert_eq!(render_text(&view), "error: User not found\n");
    }

    #[test]
    fn test_full_render() {
        let mut view = DashboardView::default();
        let mut profile = UserProfile::new("octocat");
        profile.blog = Some("github.blog".into());
        render_profile(&mut view.profile, &profile);
        render_repositories(
            &mut view,
            &[Repository {
                name: "hello".into(),
                description: None,
                url: "https://github.com/octocat/hello".into(),
                language: Some("Go".into()),
                stars: 3,
                forks: 1,
            }],
        );
        render_contribution_graph(&mut view, "https://ghchart.rshah.org", "octocat");
        view.result_visible = true;

        let text = render_text(&view);
        assert!(text.starts_with("octocat (@octocat)\n"));
        assert!(text.contains("No bio available"));
        assert!(text.contains("🔗 github.blog <https://github.blog>"));
        assert!(!text.contains("📍"));
        assert!(text.contains("● Go  ⭐ 3  🍴 1"));
        assert!(text.contains("Contribution Graph: https://ghchart.rshah.org/octocat"));
    }
}
