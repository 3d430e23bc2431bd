/// Dot color for languages missing from the table
pub const FALLBACK_COLOR: &str = "#8b949e";

/// Badge color for a repository's primary language, as a `#rrggbb` string
pub fn color_for(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#f1e05a",
        "Python" => "#3572A5",
        "HTML" => "#e34c26",
        "CSS" => "#563d7c",
        "TypeScript" => "#2b7489",
        "Java" => "#b07219",
        "C++" => "#f34b7d",
        "C" => "#555555",
        "Go" => "#00ADD8",
        "Rust" => "#dea584",
        _ => FALLBACK_COLOR,
    }
}
