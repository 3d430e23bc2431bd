// TUI event loop and terminal management
use crate::{Action, App};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ghdash_core::{
    search::{ProfileSource, SearchOrchestrator, SearchResults, SearchTicket},
    SearchError,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;

type Finished = (SearchTicket, Result<SearchResults, SearchError>);

/// How long to wait for a key before checking on running searches
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the dashboard until the user quits.
///
/// `initial_user` is searched right away, as if typed in and submitted.
pub async fn run_tui<S>(
    mut app: App,
    orchestrator: Arc<SearchOrchestrator<S>>,
    initial_user: Option<String>,
) -> anyhow::Result<()>
where
    S: ProfileSource + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<Finished>();

    if let Some(user) = initial_user {
        app.view.input = user;
        start_search(&mut app, &orchestrator, &tx);
    }

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal(None);
            return Err(e);
        }
    };

    let result = event_loop(&mut terminal, &mut app, &orchestrator, &tx, &mut rx);

    // Restore terminal even if the loop failed
    restore_terminal(Some(&mut terminal));

    result
}

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn setup_terminal() -> anyhow::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Undo `setup_terminal` as far as possible. Every step runs even when an
/// earlier one fails.
fn restore_terminal(terminal: Option<&mut CrosstermTerminal>) {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        tracing::warn!("Failed to leave alternate screen: {}", e);
    }
    if let Some(terminal) = terminal {
        if let Err(e) = terminal.show_cursor() {
            tracing::warn!("Failed to show cursor: {}", e);
        }
    }
}

fn event_loop<S>(
    terminal: &mut CrosstermTerminal,
    app: &mut App,
    orchestrator: &Arc<SearchOrchestrator<S>>,
    tx: &mpsc::UnboundedSender<Finished>,
    rx: &mut mpsc::UnboundedReceiver<Finished>,
) -> anyhow::Result<()>
where
    S: ProfileSource + 'static,
{
    loop {
        while let Ok((ticket, result)) = rx.try_recv() {
            let outcome = orchestrator.apply(&mut app.view, &ticket, result);
            app.record_outcome(&outcome);
        }

        terminal.draw(|f| crate::ui::render(f, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.handle_key(key) {
                Action::None => {}
                Action::Search => start_search(app, orchestrator, tx),
                Action::Open(target) => {
                    let url = app.link_url(target).map(str::to_string);
                    open_in_browser(app, url);
                }
                Action::Quit => app.quit(),
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Enter the loading state and fetch in the background.
/// The result comes back through `tx` and is applied by the event loop.
fn start_search<S>(
    app: &mut App,
    orchestrator: &Arc<SearchOrchestrator<S>>,
    tx: &mpsc::UnboundedSender<Finished>,
) where
    S: ProfileSource + 'static,
{
    let input = app.view.input.clone();
    let Some(ticket) = orchestrator.begin(&mut app.view, &input) else {
        return;
    };
    app.status_message = None;

    let orchestrator = Arc::clone(orchestrator);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = orchestrator.fetch(&ticket).await;
        // Receiver is gone once the UI has quit
        let _ = tx.send((ticket, result));
    });
}

fn open_in_browser(app: &mut App, url: Option<String>) {
    let Some(url) = url else {
        app.status_message = Some("Nothing to open yet".to_string());
        return;
    };

    tracing::debug!("Opening {}", url);
    if let Err(e) = open::that(&url) {
        app.status_message = Some(format!("Failed to open browser: {}", e));
    }
}
