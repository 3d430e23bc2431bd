// UI rendering logic
use crate::{app::GRID_COLUMNS, App};
use ghdash_core::{
    view::{MetaRow, RepoCard},
    TabId,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let view = &app.view;

    frame.render_widget(
        Block::default().style(Style::default().bg(to_color(&app.theme.colors.background))),
        frame.area(),
    );

    let mut constraints = vec![
        Constraint::Length(3), // Search bar
    ];
    if !view.error.hidden {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(5)); // Result panel
    constraints.push(Constraint::Length(1)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_search_bar(frame, app, chunks[0]);

    let mut next = 1;
    if !view.error.hidden {
        render_error_banner(frame, app, chunks[next]);
        next += 1;
    }

    if view.result_visible {
        render_result_panel(frame, app, chunks[next]);
    } else {
        render_placeholder(frame, app, chunks[next]);
    }

    render_status_bar(frame, app, chunks[next + 1]);
}

fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let trigger = &app.view.trigger;

    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16)])
        .split(area);

    let inner_width = parts[0].width.saturating_sub(2);
    let (scroll, cursor) = input_scroll(app.view.input.chars().count(), inner_width);

    let input = Paragraph::new(app.view.input.as_str())
        .scroll((0, scroll))
        .style(Style::default().fg(to_color(&colors.foreground)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" GitHub username ")
                .border_style(Style::default().fg(to_color(&colors.border_focused))),
        );
    frame.render_widget(input, parts[0]);

    let button_color = if trigger.disabled {
        to_color(&colors.button_busy)
    } else {
        to_color(&colors.button)
    };
    let button = Paragraph::new(trigger.label.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(button_color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(button_color)),
        );
    frame.render_widget(button, parts[1]);

    if !trigger.disabled {
        frame.set_cursor_position((parts[0].x + 1 + cursor, parts[0].y + 1));
    }
}

/// Horizontal scroll and cursor column for `len` typed characters in a box
/// `width` cells wide. The cursor stays inside the box, the text scrolls left.
fn input_scroll(len: usize, width: u16) -> (u16, u16) {
    let last_col = usize::from(width.saturating_sub(1));
    let scroll = len.saturating_sub(last_col);
    let cursor = len.min(last_col);
    (
        u16::try_from(scroll).unwrap_or(u16::MAX),
        u16::try_from(cursor).unwrap_or(u16::MAX),
    )
}

fn render_error_banner(frame: &mut Frame, app: &App, area: Rect) {
    let error = to_color(&app.theme.colors.error);

    let banner = Paragraph::new(app.view.error.message.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(error).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(error)),
        );
    frame.render_widget(banner, area);
}

fn render_placeholder(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.view.is_loading() {
        "Fetching profile..."
    } else {
        "Type a username and press Enter"
    };

    let placeholder = Paragraph::new(vec![Line::from(""), Line::from(text)])
        .alignment(Alignment::Center)
        .style(Style::default().fg(to_color(&app.theme.colors.muted)))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(placeholder, area);
}

fn render_result_panel(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(20)])
        .split(area);

    render_profile_card(frame, app, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(chunks[1]);

    render_tab_strip(frame, app, right[0]);

    match app.view.tabs.active() {
        TabId::Overview => render_pinned_grid(frame, app, right[1]),
        TabId::Repositories => render_repository_list(frame, app, right[1]),
        TabId::Contributions => render_contribution_pane(frame, app, right[1]),
    }
}

fn render_profile_card(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let profile = &app.view.profile;

    let mut lines = vec![
        Line::from(Span::styled(
            profile.name.as_str(),
            Style::default()
                .fg(to_color(&colors.title))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                profile.username.as_str(),
                Style::default().fg(to_color(&colors.link)),
            ),
            Span::raw("  "),
            Span::styled(
                profile.account_type.as_str(),
                Style::default().fg(to_color(&colors.subtitle)),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            profile.bio.as_str(),
            Style::default().fg(to_color(&colors.foreground)),
        )),
        Line::from(""),
    ];

    for row in [&profile.location, &profile.company, &profile.blog] {
        if let Some(line) = meta_line(row, app) {
            lines.push(line);
        }
    }
    lines.push(Line::from(profile.joined.as_str()));
    lines.push(Line::from(""));

    let stat = |value: &str, label: &'static str| {
        vec![
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(to_color(&colors.accent))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}  ", label),
                Style::default().fg(to_color(&colors.subtitle)),
            ),
        ]
    };
    let mut stats = stat(profile.public_repos.as_str(), "repos");
    stats.extend(stat(profile.followers.as_str(), "followers"));
    lines.push(Line::from(stats));
    lines.push(Line::from(stat(profile.following.as_str(), "following")));

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Profile ")
            .border_style(Style::default().fg(to_color(&colors.border))),
    );
    frame.render_widget(card, area);
}

/// `None` for hidden rows, so they take no space at all
fn meta_line<'a>(row: &'a MetaRow, app: &App) -> Option<Line<'a>> {
    if row.hidden {
        return None;
    }

    let text_style = if row.href.is_some() {
        Style::default()
            .fg(to_color(&app.theme.colors.link))
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(to_color(&app.theme.colors.foreground))
    };

    let mut spans = vec![
        Span::raw(format!("{} ", row.icon)),
        Span::styled(row.text.as_str(), text_style),
    ];
    if let Some(href) = row.href.as_deref().filter(|href| *href != row.text) {
        spans.push(Span::styled(
            format!(" <{}>", href),
            Style::default().fg(to_color(&app.theme.colors.muted)),
        ));
    }
    Some(Line::from(spans))
}

fn render_tab_strip(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let titles: Vec<Line> = app
        .view
        .tabs
        .tabs()
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("F{} {}", i + 1, tab.id.title())))
        .collect();
    let selected = app
        .view
        .tabs
        .tabs()
        .iter()
        .position(|tab| tab.active)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(to_color(&colors.tab_inactive)))
        .highlight_style(
            Style::default()
                .fg(to_color(&colors.tab_active))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(to_color(&colors.border))),
        );
    frame.render_widget(tabs, area);
}

fn render_pinned_grid(frame: &mut Frame, app: &App, area: Rect) {
    let cards = &app.view.pinned;
    if cards.is_empty() {
        render_empty(frame, app, area, " Popular repositories ", "No public repositories");
        return;
    }

    let rows = cards.len().div_ceil(GRID_COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (row_idx, row_cards) in cards.chunks(GRID_COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(row_areas[row_idx]);

        for (col_idx, (card, cell)) in row_cards.iter().zip(cells.iter()).enumerate() {
            let selected = row_idx * GRID_COLUMNS + col_idx == app.selected_card;
            render_repo_card(frame, app, card, selected, *cell);
        }
    }
}

fn render_repository_list(frame: &mut Frame, app: &App, area: Rect) {
    let cards = &app.view.repositories;
    if cards.is_empty() {
        render_empty(frame, app, area, " Repositories ", "Nothing to show");
        return;
    }

    let lines: Vec<Line> = cards
        .iter()
        .flat_map(|card| card_lines(card, app))
        .collect();
    let list = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Repositories "));
    frame.render_widget(list, area);
}

fn render_repo_card(frame: &mut Frame, app: &App, card: &RepoCard, selected: bool, area: Rect) {
    let colors = &app.theme.colors;
    let mut block = Block::default().borders(Borders::ALL);
    block = if selected {
        block
            .border_style(Style::default().fg(to_color(&colors.border_focused)))
            .title(" Ctrl-P: open ")
    } else {
        block.border_style(Style::default().fg(to_color(&colors.border)))
    };

    let widget = Paragraph::new(card_lines(card, app))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, area);
}

fn card_lines<'a>(card: &'a RepoCard, app: &App) -> Vec<Line<'a>> {
    let colors = &app.theme.colors;

    let mut meta = Vec::new();
    if let Some(badge) = &card.language {
        let dot = ghdash_core::Color::from_hex(&badge.color)
            .map(|c| to_color(&c))
            .unwrap_or(Color::Gray);
        meta.push(Span::styled("● ", Style::default().fg(dot)));
        meta.push(Span::raw(badge.label.as_str()));
        meta.push(Span::raw("  "));
    }
    meta.push(Span::styled(
        format!("⭐ {}", card.stars),
        Style::default().fg(to_color(&colors.stars)),
    ));
    meta.push(Span::raw("  "));
    meta.push(Span::styled(
        format!("🍴 {}", card.forks),
        Style::default().fg(to_color(&colors.forks)),
    ));

    vec![
        Line::from(Span::styled(
            card.name.as_str(),
            Style::default()
                .fg(to_color(&colors.link))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.description.as_str(),
            Style::default().fg(to_color(&colors.subtitle)),
        )),
        Line::from(meta),
    ]
}

fn render_contribution_pane(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let lines = match &app.view.graph {
        Some(graph) => vec![
            Line::from(""),
            Line::from(Span::styled(
                graph.alt.as_str(),
                Style::default()
                    .fg(to_color(&colors.title))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                graph.src.as_str(),
                Style::default()
                    .fg(to_color(&colors.link))
                    .add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Ctrl-O opens the image in your browser",
                Style::default().fg(to_color(&colors.muted)),
            )),
        ],
        None => vec![Line::from("No contribution graph")],
    };

    let pane = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Contributions "));
    frame.render_widget(pane, area);
}

fn render_empty(frame: &mut Frame, app: &App, area: Rect, title: &str, text: &str) {
    let empty = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(to_color(&app.theme.colors.muted)))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(empty, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let line = match &app.status_message {
        Some(msg) => Line::from(Span::styled(
            msg.as_str(),
            Style::default().fg(to_color(&colors.error)),
        )),
        None => Line::from(vec![
            Span::styled("Enter", Style::default().fg(to_color(&colors.accent))),
            Span::raw(": search  "),
            Span::styled("Tab/F1-F3", Style::default().fg(to_color(&colors.accent))),
            Span::raw(": switch tab  "),
            Span::styled("Arrows", Style::default().fg(to_color(&colors.accent))),
            Span::raw(": select repo  "),
            Span::styled("Ctrl-O", Style::default().fg(to_color(&colors.accent))),
            Span::raw(": graph  "),
            Span::styled("Ctrl-R", Style::default().fg(to_color(&colors.accent))),
            Span::raw(": profile  "),
            Span::styled("Ctrl-B", Style::default().fg(to_color(&colors.accent))),
            Span::raw(": blog  "),
            Span::styled("Ctrl-A", Style::default().fg(to_color(&colors.accent))),
            Span::raw(": avatar  "),
            Span::styled("Esc", Style::default().fg(to_color(&colors.accent))),
            Span::raw(": quit"),
        ]),
    };

    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(to_color(&colors.subtitle))),
        area,
    );
}

/// Convert our Color to ratatui Color
fn to_color(color: &ghdash_core::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghdash_core::{
        render::{render_contribution_graph, render_profile, render_repositories},
        Repository, UserProfile,
    };
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn rendered_app() -> App {
        let mut app = App::default();
        let mut profile = UserProfile::new("octocat");
        profile.bio = Some("Mascot".into());
        render_profile(&mut app.view.profile, &profile);
        render_repositories(
            &mut app.view,
            &[Repository {
                name: "spoon-knife".into(),
                description: None,
                url: "https://github.com/octocat/spoon-knife".into(),
                language: None,
                stars: 12,
                forks: 3,
            }],
        );
        render_contribution_graph(&mut app.view, "https://ghchart.rshah.org", "octocat");
        app.view.result_visible = true;
        app
    }

    #[test]
    fn test_error_banner_is_drawn() {
        let mut app = App::default();
        app.view.error.show("User not found");
        let screen = draw(&app);
        assert!(screen.contains("User not found"));
        assert!(!screen.contains("Profile"));
    }

    #[test]
    fn test_result_panel() {
        let app = rendered_app();
        let screen = draw(&app);
        assert!(screen.contains("@octocat"));
        assert!(screen.contains("spoon-knife"));
        assert!(screen.contains("Overview"));
    }

    #[test]
    fn test_contribution_tab() {
        let mut app = rendered_app();
        app.view.tabs.select(TabId::Contributions);
        let screen = draw(&app);
        assert!(screen.contains("https://ghchart.rshah.org/octocat"));
        assert!(!screen.contains("spoon-knife"));
    }

    #[test]
    fn test_blog_row_shows_its_link() {
        let mut app = rendered_app();
        let mut profile = UserProfile::new("octocat");
        profile.blog = Some("github.blog".into());
        render_profile(&mut app.view.profile, &profile);
        assert!(draw(&app).contains("https://github.blog"));
    }

    #[test]
    fn test_selected_card_is_marked() {
        let app = rendered_app();
        assert!(draw(&app).contains("Ctrl-P: open"));
    }

    #[test]
    fn test_input_scroll_keeps_cursor_in_box() {
        assert_eq!(input_scroll(0, 20), (0, 0));
        assert_eq!(input_scroll(5, 20), (0, 5));
        assert_eq!(input_scroll(19, 20), (0, 19));
        assert_eq!(input_scroll(30, 20), (11, 19));
        assert_eq!(input_scroll(100_000, 20), (u16::MAX, 19));
        assert_eq!(input_scroll(3, 0), (3, 0));
    }

    #[test]
    fn test_long_input_leaves_button_visible() {
        let mut app = App::default();
        app.view.input = "x".repeat(500);
        let screen = draw(&app);
        assert!(screen.contains("Search"));
    }

    #[test]
    fn test_busy_button_label() {
        let mut app = App::default();
        app.view.trigger = ghdash_core::view::TriggerState::busy();
        assert!(draw(&app).contains("Searching..."));
    }
}
