use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use ghdash_api::GitHubClient;
use ghdash_core::{Config, DashboardView, SearchOrchestrator, SearchOutcome, Theme};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod print;

#[derive(Parser)]
#[command(name = "ghdash")]
#[command(version, about = "GitHub profile dashboard for the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// User to search on startup ("" for none). Defaults to the config value.
    #[arg(short, long)]
    user: Option<String>,

    /// Theme name, e.g. "Nord" or "Dracula"
    #[arg(long, global = true)]
    theme: Option<String>,

    /// GitHub API base URL
    #[arg(long, global = true, env = "GHDASH_API_URL")]
    api_url: Option<String>,

    /// Contribution chart service
    #[arg(long, global = true)]
    chart_host: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Fetch a profile once and print it
    Show {
        /// GitHub username
        login: String,

        /// Print the rendered view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or create the config file
    Config {
        /// Write the default config if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it logs to a file
    let interactive = cli.command.is_none();
    init_logging(interactive)?;

    let mut config = Config::load().context("Failed to load config")?;
    apply_overrides(&mut config, &cli);

    match cli.command {
        Some(Commands::Show { ref login, json }) => show(&config, login, json).await,
        Some(Commands::Config { init }) => config_command(init),
        None => run_dashboard(&config).await,
    }
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(api_url) = &cli.api_url {
        config.github.api_url = api_url.clone();
    }
    if let Some(host) = &cli.chart_host {
        config.chart.host = host.clone();
    }
    if let Some(theme) = &cli.theme {
        config.ui.theme = theme.clone();
    }
    if let Some(user) = &cli.user {
        config.ui.initial_user = Some(user.clone());
    }
}

fn build_orchestrator(config: &Config) -> anyhow::Result<SearchOrchestrator<GitHubClient>> {
    let client = GitHubClient::with_base_url(config.github.api_url.as_str())
        .context("Failed to build HTTP client")?;
    Ok(SearchOrchestrator::new(client, config.chart.host.as_str()))
}

fn resolve_theme(config: &Config) -> Theme {
    Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
        tracing::warn!("Unknown theme '{}', using default", config.ui.theme);
        Theme::default()
    })
}

async fn run_dashboard(config: &Config) -> anyhow::Result<()> {
    let orchestrator = Arc::new(build_orchestrator(config)?);
    let view = DashboardView::new(config.ui.initial_tab);
    let app = ghdash_tui::App::new(view, resolve_theme(config));

    let initial_user = config.initial_user().map(str::to_string);
    tracing::info!("Starting dashboard (initial user: {:?})", initial_user);

    ghdash_tui::run_tui(app, orchestrator, initial_user).await
}

async fn show(config: &Config, login: &str, json: bool) -> anyhow::Result<()> {
    let orchestrator = build_orchestrator(config)?;
    let mut view = DashboardView::new(config.ui.initial_tab);

    let outcome = orchestrator.search(&mut view, login).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", print::render_text(&view));
    }

    match outcome {
        SearchOutcome::Rendered => Ok(()),
        SearchOutcome::Ignored => anyhow::bail!("No username given"),
        SearchOutcome::Failed(err) => Err(err.into()),
        SearchOutcome::Stale => anyhow::bail!("Search was superseded"),
    }
}

/// Flag overrides never reach the file: `--init` always writes the defaults
fn config_command(init: bool) -> anyhow::Result<()> {
    let path = Config::config_path()?;

    if init {
        if Config::init_at(&path)? {
            println!("Wrote default config to {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

fn init_logging(to_file: bool) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ghdash=info,ghdash_core=info,ghdash_api=info,ghdash_tui=info".into());

    if to_file {
        let dir = dirs::data_local_dir()
            .context("Could not find a data directory for the log file")?
            .join("ghdash");
        std::fs::create_dir_all(&dir)?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("ghdash.log"))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}
