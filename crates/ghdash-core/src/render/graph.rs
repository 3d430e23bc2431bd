use crate::view::{ContributionGraph, DashboardView};

pub const DEFAULT_CHART_HOST: &str = "https://ghchart.rshah.org";

pub fn contribution_graph_url(chart_host: &str, login: &str) -> String {
    format!("{}/{}", chart_host.trim_end_matches('/'), login)
}

/// Point the graph pane at the chart image for `login`.
/// Whether the image actually loads is not tracked.
pub fn render_contribution_graph(view: &mut DashboardView, chart_host: &str, login: &str) {
    view.graph = Some(ContributionGraph {
        src: contribution_graph_url(chart_host, login),
        alt: "Contribution Graph".to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_url() {
        assert_eq!(
            contribution_graph_url(DEFAULT_CHART_HOST, "octocat"),
            "https://ghchart.rshah.org/octocat"
        );
        assert_eq!(
            contribution_graph_url("https://charts.example/", "octocat"),
            "https://charts.example/octocat"
        );
    }

    #[test]
    fn test_render_replaces_graph() {
        let mut view = DashboardView::default();
        render_contribution_graph(&mut view, DEFAULT_CHART_HOST, "first");
        render_contribution_graph(&mut view, DEFAULT_CHART_HOST, "second");

        let graph = view.graph.unwrap();
        assert_eq!(graph.src, "https://ghchart.rshah.org/second");
        assert_eq!(graph.alt, "Contribution Graph");
    }
}
