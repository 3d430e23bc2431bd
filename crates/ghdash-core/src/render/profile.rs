use chrono::{DateTime, Utc};

use crate::models::UserProfile;
use crate::view::{MetaRow, ProfileView};

pub const NO_BIO: &str = "No bio available";

pub const LOCATION_ICON: &str = "📍";
pub const COMPANY_ICON: &str = "🏢";
pub const BLOG_ICON: &str = "🔗";
pub const JOINED_ICON: &str = "🗓";

/// Fill the profile card. Each field falls back on its own.
pub fn render_profile(view: &mut ProfileView, profile: &UserProfile) {
    view.avatar_url = profile.avatar_url.clone().unwrap_or_default();
    view.name = profile
        .name
        .clone()
        .unwrap_or_else(|| profile.login.clone());
    view.username = format!("@{}", profile.login);
    view.profile_url = profile.html_url.clone().unwrap_or_default();
    view.bio = profile.bio.clone().unwrap_or_else(|| NO_BIO.to_string());
    view.account_type = profile.account_type.clone().unwrap_or_default();

    view.public_repos = profile.public_repos.to_string();
    view.followers = profile.followers.to_string();
    view.following = profile.following.to_string();

    view.location = meta_row(LOCATION_ICON, profile.location.as_deref());
    view.company = meta_row(COMPANY_ICON, profile.company.as_deref());
    view.blog = match profile.blog.as_deref() {
        Some(blog) => MetaRow {
            icon: BLOG_ICON.to_string(),
            text: blog.to_string(),
            href: Some(blog_href(blog)),
            hidden: false,
        },
        None => MetaRow::hidden(BLOG_ICON),
    };

    view.joined = format!("{} Joined {}", JOINED_ICON, format_joined(profile.created_at));
}

fn meta_row(icon: &str, value: Option<&str>) -> MetaRow {
    match value {
        Some(text) => MetaRow {
            icon: icon.to_string(),
            text: text.to_string(),
            href: None,
            hidden: false,
        },
        None => MetaRow::hidden(icon),
    }
}

/// Link target for a blog field. Bare hosts get `https://` in front.
pub fn blog_href(blog: &str) -> String {
    if blog.starts_with("http") {
        blog.to_string()
    } else {
        format!("https://{}", blog)
    }
}

/// Abbreviated month and year, e.g. "Jan 2011"
pub fn format_joined(created_at: Option<DateTime<Utc>>) -> String {
    match created_at {
        Some(ts) => ts.format("%b %Y").to_string(),
        None => "Unknown".to_string(),
    }
}
