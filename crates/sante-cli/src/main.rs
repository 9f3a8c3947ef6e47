//! `sante`: terminal front end for the Santé et Travail backend.
//!
//! # Usage
//!
//! ```
//! sante                                  # terminal UI
//! sante login --email aminata@sonatel.sn
//! sante organizations paged --sort name,desc
//! sante theme toggle
//! sante --url https://sante.example.sn/api campaigns get 7
//! ```

mod app;
mod commands;
mod platform;
mod settings;
mod ui;

use std::{io, path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use app::App;
use clap::{Args, Parser, Subcommand};
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use platform::TerminalColorScheme;
use ratatui::{Terminal, backend::CrosstermBackend};
use sante_client::ApiClient;
use sante_core::{
  model::Id,
  page::{PageRequest, Sort},
};
use sante_store_sqlite::SqliteStore;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "sante",
  version,
  about = "Cabinet Médical Santé et Travail Pour Tous: occupational health client"
)]
struct Cli {
  /// Path to a TOML config file (base_url, store_path, timeout_secs).
  #[arg(short, long, value_name = "FILE", global = true)]
  config: Option<PathBuf>,

  /// Backend base URL (default: http://localhost:8080/api).
  #[arg(long, global = true)]
  url: Option<String>,

  /// SQLite file for the stored token and theme.
  #[arg(long, value_name = "FILE", global = true)]
  store: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Sign in and remember the bearer token.
  Login {
    #[arg(long)]
    email:    String,
    /// Read from stdin when omitted.
    #[arg(long, env = "SANTE_PASSWORD", hide_env_values = true)]
    password: Option<String>,
  },
  /// Register a new user account.
  Signup {
    #[arg(long)]
    first_name:      String,
    #[arg(long)]
    last_name:       String,
    #[arg(long)]
    email:           String,
    /// Read from stdin when omitted.
    #[arg(long, env = "SANTE_PASSWORD", hide_env_values = true)]
    password:        Option<String>,
    /// Requested role; repeat for several.
    #[arg(long = "role")]
    roles:           Vec<String>,
    #[arg(long)]
    organization_id: Option<Id>,
  },
  /// Forget the stored bearer token.
  Logout,
  /// Show the backend address and whether a token is stored.
  Status,
  /// Show or toggle the light/dark preference.
  Theme {
    #[command(subcommand)]
    action: ThemeAction,
  },
  #[command(subcommand)]
  Organizations(OrganizationAction),
  #[command(subcommand)]
  Workstations(WorkstationAction),
  #[command(subcommand)]
  Campaigns(CampaignAction),
  #[command(subcommand)]
  Employees(EmployeeAction),
  /// Open the terminal UI (the default).
  Ui,
}

#[derive(Subcommand, Debug)]
pub enum ThemeAction {
  Show,
  Toggle,
}

/// Page selection shared by every paginated listing.
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
  /// Zero-based page index.
  #[arg(long, default_value_t = 0)]
  page: u32,
  #[arg(long, default_value_t = PageRequest::DEFAULT_SIZE)]
  size: u32,
  /// Sort descriptor `field[,asc|desc]`.
  #[arg(long)]
  sort: Option<Sort>,
}

impl PageArgs {
  /// Apply these arguments over a resource's default request.
  pub fn resolve(self, default: PageRequest) -> PageRequest {
    PageRequest {
      page: self.page,
      size: self.size,
      sort: self.sort.unwrap_or(default.sort),
    }
  }
}

#[derive(Subcommand, Debug)]
pub enum OrganizationAction {
  /// Every organization, unpaginated.
  List,
  Paged(PageArgs),
  Get { id: Id },
  Create {
    #[arg(long)]
    name:    String,
    /// Free-text postal address.
    #[arg(long)]
    address: Option<String>,
  },
  Update {
    id:      Id,
    #[arg(long)]
    name:    Option<String>,
    #[arg(long)]
    address: Option<String>,
  },
  Delete { id: Id },
  /// Workstations belonging to an organization.
  Workstations { id: Id },
}

#[derive(Subcommand, Debug)]
pub enum WorkstationAction {
  List,
  Paged(PageArgs),
  Get { id: Id },
  Create {
    #[arg(long)]
    title:           String,
    #[arg(long)]
    code:            Option<String>,
    #[arg(long)]
    description:     Option<String>,
    #[arg(long)]
    risks:           Option<String>,
    #[arg(long)]
    organization_id: Option<Id>,
  },
  Update {
    id:              Id,
    #[arg(long)]
    title:           Option<String>,
    #[arg(long)]
    code:            Option<String>,
    #[arg(long)]
    description:     Option<String>,
    #[arg(long)]
    risks:           Option<String>,
    #[arg(long)]
    organization_id: Option<Id>,
  },
  Delete { id: Id },
}

#[derive(Subcommand, Debug)]
pub enum CampaignAction {
  List,
  Paged(PageArgs),
  Get { id: Id },
  Create {
    #[arg(long)]
    name:            String,
    /// ISO-8601 date, passed through unchanged.
    #[arg(long)]
    start:           Option<String>,
    #[arg(long)]
    end:             Option<String>,
    #[arg(long)]
    organization_id: Option<Id>,
  },
  Update {
    id:              Id,
    #[arg(long)]
    name:            Option<String>,
    #[arg(long)]
    start:           Option<String>,
    #[arg(long)]
    end:             Option<String>,
    #[arg(long)]
    organization_id: Option<Id>,
  },
  Delete { id: Id },
}

#[derive(Subcommand, Debug)]
pub enum EmployeeAction {
  /// Employees enrolled in a campaign, paginated.
  ByCampaign {
    campaign_id: Id,
    #[command(flatten)]
    page:        PageArgs,
  },
  Get { id: Id },
  Create {
    #[arg(long)]
    given_name:  Option<String>,
    #[arg(long)]
    family_name: Option<String>,
    #[arg(long)]
    gender:      Option<String>,
    #[arg(long)]
    birth_date:  Option<String>,
    #[arg(long)]
    phone:       Option<String>,
    /// Campaign to enrol in; repeat for several.
    #[arg(long = "campaign")]
    campaigns:   Vec<Id>,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  let command = cli.command.unwrap_or(Command::Ui);

  // The terminal UI owns the screen; log lines would corrupt it.
  if !matches!(command, Command::Ui) {
    tracing_subscriber::fmt()
      .with_writer(io::stderr)
      .with_env_filter(
        EnvFilter::builder()
          .with_default_directive(LevelFilter::WARN.into())
          .from_env_lossy(),
      )
      .init();
  }

  // Flags override the config file and environment, which override defaults.
  let mut settings = Settings::load(cli.config.as_deref())?;
  if let Some(url) = cli.url {
    settings.base_url = url;
  }
  if let Some(store) = cli.store {
    settings.store_path = settings::expand_tilde(&store);
  }

  let store = Arc::new(
    SqliteStore::open(&settings.store_path)
      .await
      .with_context(|| format!("failed to open store at {:?}", settings.store_path))?,
  );
  let client = ApiClient::new(settings.api_config(), store.clone())
    .await
    .context("failed to build API client")?;

  match command {
    Command::Ui => run_ui(client, store).await,
    command => commands::run(command, &settings, &client, store).await,
  }
}

async fn run_ui(client: ApiClient<SqliteStore>, store: Arc<SqliteStore>) -> Result<()> {
  let mut app = App::mount(client, store, &TerminalColorScheme)
    .await
    .context("loading theme preference")?;

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app).await;

  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Event loop ───────────────────────────────────────────────────────────────

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App<SqliteStore>,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(evt) = maybe_event {
      match evt {
        Event::Key(key) => {
          let cont = app.handle_key(key).await?;
          if !cont {
            break;
          }
        }
        Event::Resize(_, _) => {
          // Redrawn on the next iteration.
        }
        _ => {}
      }
    }
  }

  Ok(())
}
