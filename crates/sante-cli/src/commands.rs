//! One-shot subcommands. Each prints the backend's answer as pretty JSON on
//! stdout; diagnostics go to stderr through `tracing`.

use std::{
  io::{self, BufRead, IsTerminal},
  sync::Arc,
};

use anyhow::{Context, Result, bail};
use crossterm::{
  event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
  terminal,
};
use sante_client::ApiClient;
use sante_core::{
  auth::{LoginRequest, SignupRequest},
  model::{
    Address, CampaignUpdate, NewCampaign, NewEmployee, NewOrganization,
    NewWorkstation, OrganizationUpdate, WorkstationUpdate,
  },
  page::PageRequest,
  storage::KeyValueStore,
  theme::{ClassList, ThemeToggle},
};
use serde::Serialize;
use serde_json::json;

use crate::{
  CampaignAction, Command, EmployeeAction, OrganizationAction, ThemeAction,
  WorkstationAction, platform::TerminalColorScheme, settings::Settings,
};

pub async fn run<S: KeyValueStore>(
  command: Command,
  settings: &Settings,
  client: &ApiClient<S>,
  store: Arc<S>,
) -> Result<()> {
  match command {
    Command::Login { email, password } => {
      let password = password_or_prompt(password)?;
      let jwt = client
        .auth()
        .login(&LoginRequest { email, password })
        .await
        .context("sign-in failed")?;
      print_json(&json!({
        "email": jwt.email,
        "name": format!("{} {}", jwt.first_name, jwt.last_name),
        "roles": jwt.roles,
        "organization": jwt.organization_name,
      }))
    }

    Command::Signup {
      first_name,
      last_name,
      email,
      password,
      roles,
      organization_id,
    } => {
      let password = password_or_prompt(password)?;
      let request = SignupRequest {
        first_name,
        last_name,
        email,
        password,
        role: (!roles.is_empty()).then_some(roles),
        organization_id,
      };
      print_json(&client.auth().signup(&request).await?)
    }

    Command::Logout => {
      client.auth().logout().await?;
      eprintln!("signed out");
      Ok(())
    }

    Command::Status => print_json(&json!({
      "base_url": client.base_url(),
      "store_path": settings.store_path,
      "authenticated": client.is_authenticated(),
    })),

    Command::Theme { action } => {
      let mut root = ClassList::new();
      let mut toggle = ThemeToggle::mount(store, &TerminalColorScheme, &mut root)
        .await
        .context("reading theme preference")?;
      let theme = match action {
        ThemeAction::Show => toggle.theme(),
        ThemeAction::Toggle => toggle
          .toggle(&mut root)
          .await
          .context("saving theme preference")?,
      };
      println!("{}", theme.as_str());
      Ok(())
    }

    Command::Organizations(action) => organizations(client, action).await,
    Command::Workstations(action) => workstations(client, action).await,
    Command::Campaigns(action) => campaigns(client, action).await,
    Command::Employees(action) => employees(client, action).await,

    Command::Ui => bail!("the terminal UI is not a one-shot command"),
  }
}

// ─── Resources ────────────────────────────────────────────────────────────────

async fn organizations<S: KeyValueStore>(
  client: &ApiClient<S>,
  action: OrganizationAction,
) -> Result<()> {
  let api = client.organizations();
  match action {
    OrganizationAction::List => print_json(&api.get_all().await?),
    OrganizationAction::Paged(args) => {
      print_json(&api.get_paged(&args.resolve(PageRequest::by_name())).await?)
    }
    OrganizationAction::Get { id } => print_json(&api.get_by_id(id).await?),
    OrganizationAction::Create { name, address } => {
      let organization = NewOrganization {
        name,
        address: address.map(free_text_address),
        ..Default::default()
      };
      print_json(&api.create(&organization).await?)
    }
    OrganizationAction::Update { id, name, address } => {
      let changes = OrganizationUpdate {
        name,
        address: address.map(free_text_address),
        campaign_ids: None,
      };
      print_json(&api.update(id, &changes).await?)
    }
    OrganizationAction::Delete { id } => {
      api.delete(id).await?;
      eprintln!("deleted organization {id}");
      Ok(())
    }
    OrganizationAction::Workstations { id } => {
      print_json(&api.get_workstations(id).await?)
    }
  }
}

async fn workstations<S: KeyValueStore>(
  client: &ApiClient<S>,
  action: WorkstationAction,
) -> Result<()> {
  let api = client.workstations();
  match action {
    WorkstationAction::List => print_json(&api.get_all().await?),
    WorkstationAction::Paged(args) => {
      print_json(&api.get_paged(&args.resolve(PageRequest::by_title())).await?)
    }
    WorkstationAction::Get { id } => print_json(&api.get_by_id(id).await?),
    WorkstationAction::Create {
      title,
      code,
      description,
      risks,
      organization_id,
    } => {
      let workstation = NewWorkstation {
        title,
        code,
        description,
        professional_risks: risks,
        organization_id,
      };
      print_json(&api.create(&workstation).await?)
    }
    WorkstationAction::Update {
      id,
      title,
      code,
      description,
      risks,
      organization_id,
    } => {
      let changes = WorkstationUpdate {
        title,
        code,
        description,
        professional_risks: risks,
        organization_id,
      };
      print_json(&api.update(id, &changes).await?)
    }
    WorkstationAction::Delete { id } => {
      api.delete(id).await?;
      eprintln!("deleted workstation {id}");
      Ok(())
    }
  }
}

async fn campaigns<S: KeyValueStore>(
  client: &ApiClient<S>,
  action: CampaignAction,
) -> Result<()> {
  let api = client.campaigns();
  match action {
    CampaignAction::List => print_json(&api.get_all().await?),
    CampaignAction::Paged(args) => {
      print_json(&api.get_paged(&args.resolve(PageRequest::by_name())).await?)
    }
    CampaignAction::Get { id } => print_json(&api.get_by_id(id).await?),
    CampaignAction::Create { name, start, end, organization_id } => {
      let campaign = NewCampaign {
        name,
        start_date: start,
        end_date: end,
        organization_id,
        employee_ids: Vec::new(),
      };
      print_json(&api.create(&campaign).await?)
    }
    CampaignAction::Update { id, name, start, end, organization_id } => {
      let changes = CampaignUpdate {
        name,
        start_date: start,
        end_date: end,
        organization_id,
        employee_ids: None,
      };
      print_json(&api.update(id, &changes).await?)
    }
    CampaignAction::Delete { id } => {
      api.delete(id).await?;
      eprintln!("deleted campaign {id}");
      Ok(())
    }
  }
}

async fn employees<S: KeyValueStore>(
  client: &ApiClient<S>,
  action: EmployeeAction,
) -> Result<()> {
  let api = client.employees();
  match action {
    EmployeeAction::ByCampaign { campaign_id, page } => {
      let req = page.resolve(PageRequest::by_family_name());
      print_json(&api.get_by_campaign(campaign_id, &req).await?)
    }
    EmployeeAction::Get { id } => print_json(&api.get_by_id(id).await?),
    EmployeeAction::Create {
      given_name,
      family_name,
      gender,
      birth_date,
      phone,
      campaigns,
    } => {
      let employee = NewEmployee {
        given_name,
        family_name,
        gender,
        birth_date,
        phone,
        campaign_ids: campaigns,
        ..Default::default()
      };
      print_json(&api.create(&employee).await?)
    }
  }
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

fn free_text_address(text: String) -> Address {
  Address { text: Some(text), ..Default::default() }
}

/// Use `given`, or read one line from stdin. A terminal does not echo it.
fn password_or_prompt(given: Option<String>) -> Result<String> {
  if let Some(password) = given {
    return Ok(password);
  }
  eprint!("password: ");
  let stdin = io::stdin();
  let password = if stdin.is_terminal() {
    let typed = read_hidden_line();
    eprintln!();
    typed?
  } else {
    read_piped_line(stdin.lock())?
  };
  if password.is_empty() {
    bail!("no password given");
  }
  Ok(password)
}

fn read_piped_line(mut input: impl BufRead) -> Result<String> {
  let mut line = String::new();
  input
    .read_line(&mut line)
    .context("reading password from stdin")?;
  Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Collect keystrokes in raw mode so nothing is echoed.
fn read_hidden_line() -> Result<String> {
  terminal::enable_raw_mode().context("enabling raw mode")?;
  let typed = collect_until_enter();
  terminal::disable_raw_mode().ok();
  typed
}

fn collect_until_enter() -> Result<String> {
  let mut typed = String::new();
  loop {
    if let Event::Key(key) = event::read().context("reading password")? {
      if apply_password_key(&mut typed, key)? {
        return Ok(typed);
      }
    }
  }
}

/// Edit `typed` with one keystroke; `true` once Enter is pressed.
fn apply_password_key(typed: &mut String, key: KeyEvent) -> Result<bool> {
  if key.kind == KeyEventKind::Release {
    return Ok(false);
  }
  match key.code {
    KeyCode::Enter => return Ok(true),
    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
      bail!("password entry cancelled")
    }
    KeyCode::Backspace => {
      typed.pop();
    }
    KeyCode::Char(c) => typed.push(c),
    _ => {}
  }
  Ok(false)
}
