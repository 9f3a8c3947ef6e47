//! Application state machine and event dispatcher.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use sante_client::ApiClient;
use sante_core::{
  auth::LoginRequest,
  envelope::PageMeta,
  model::{Organization, Workstation},
  page::PageRequest,
  storage::KeyValueStore,
  theme::{ClassList, ColorSchemePreference, DARK_CLASS, RootClasses, ThemeToggle},
};

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// Hero, feature cards and system status.
  Landing,
  Login,
  /// Paged organization list; right pane is empty.
  Organizations,
  /// Focus on the organization detail pane.
  OrganizationDetail,
}

// ─── Login form ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
  #[default]
  Email,
  Password,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
  pub email:    String,
  pub password: String,
  pub focus:    LoginField,
}

impl LoginForm {
  fn focused_mut(&mut self) -> &mut String {
    match self.focus {
      LoginField::Email => &mut self.email,
      LoginField::Password => &mut self.password,
    }
  }

  fn switch_focus(&mut self) {
    self.focus = match self.focus {
      LoginField::Email => LoginField::Password,
      LoginField::Password => LoginField::Email,
    };
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App<S> {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// Class list of the root element; `dark` selects the dark palette.
  pub root: ClassList,

  theme: ThemeToggle<S>,

  /// Shared HTTP client.
  pub client: ApiClient<S>,

  pub login: LoginForm,

  /// Display name from the last successful sign-in in this session.
  pub signed_in_as: Option<String>,

  /// Organizations on the current page.
  pub organizations: Vec<Organization>,

  /// Pagination metadata of the current page, once loaded.
  pub page: Option<PageMeta>,

  /// Request used for the current page.
  pub page_request: PageRequest,

  /// Current fuzzy-filter string (only active when `filter_active`).
  pub filter: String,

  /// Whether the user is typing a filter query.
  pub filter_active: bool,

  /// Cursor position within the *filtered* organization list.
  pub list_cursor: usize,

  /// The organization shown in the detail pane.
  pub selected: Option<Organization>,

  /// Workstations of the selected organization.
  pub workstations: Vec<Workstation>,

  /// Scroll offset within the detail pane.
  pub detail_scroll: usize,

  /// One-line status message shown in the status bar.
  pub status_msg: String,
}

impl<S: KeyValueStore> App<S> {
  /// Create an [`App`] on the landing screen with the persisted theme
  /// applied.
  pub async fn mount(
    client: ApiClient<S>,
    store: Arc<S>,
    platform: &impl ColorSchemePreference,
  ) -> Result<Self, S::Error> {
    let mut root = ClassList::new();
    let theme = ThemeToggle::mount(store, platform, &mut root).await?;
    Ok(Self {
      screen: Screen::Landing,
      root,
      theme,
      client,
      login: LoginForm::default(),
      signed_in_as: None,
      organizations: Vec::new(),
      page: None,
      page_request: PageRequest::by_name(),
      filter: String::new(),
      filter_active: false,
      list_cursor: 0,
      selected: None,
      workstations: Vec::new(),
      detail_scroll: 0,
      status_msg: String::new(),
    })
  }

  pub fn is_dark(&self) -> bool { self.root.has_class(DARK_CLASS) }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Fetch the page described by `page_request`. Returns whether it loaded.
  pub async fn load_organizations(&mut self) -> bool {
    self.status_msg = "Chargement…".into();
    match self.client.organizations().get_paged(&self.page_request).await {
      Ok(page) => {
        self.organizations = page.content;
        self.page = Some(page.page);
        self.list_cursor = 0;
        self.status_msg = String::new();
        true
      }
      Err(e) => {
        self.status_msg = format!("Erreur : {e}");
        false
      }
    }
  }

  /// Move to page `index`, staying on the current one if it fails to load.
  async fn go_to_page(&mut self, index: u32) {
    let previous = self.page_request.page;
    self.page_request.page = index;
    if !self.load_organizations().await {
      self.page_request.page = previous;
    }
  }

  /// Open `organization` in the detail pane, loading its workstations.
  async fn open_detail(&mut self, organization: Organization) {
    self.status_msg = "Chargement…".into();
    match self.client.organizations().get_workstations(organization.id).await {
      Ok(workstations) => {
        self.workstations = workstations;
        self.status_msg = String::new();
      }
      Err(e) => {
        self.workstations.clear();
        self.status_msg = format!("Erreur : {e}");
      }
    }
    self.selected = Some(organization);
    self.detail_scroll = 0;
    self.screen = Screen::OrganizationDetail;
  }

  async fn submit_login(&mut self) {
    if self.login.email.trim().is_empty() || self.login.password.is_empty() {
      self.status_msg = "Email et mot de passe requis".into();
      return;
    }
    let credentials = LoginRequest {
      email:    self.login.email.trim().to_string(),
      password: self.login.password.clone(),
    };
    match self.client.auth().login(&credentials).await {
      Ok(jwt) => {
        self.signed_in_as = Some(format!("{} {}", jwt.first_name, jwt.last_name));
        self.login.password.clear();
        self.status_msg = format!("Connecté en tant que {}", jwt.email);
        self.screen = Screen::Landing;
      }
      Err(e) => {
        self.login.password.clear();
        self.login.focus = LoginField::Password;
        self.status_msg = format!("Erreur : {e}");
      }
    }
  }

  async fn logout(&mut self) {
    match self.client.auth().logout().await {
      Ok(()) => {
        self.signed_in_as = None;
        self.status_msg = "Déconnecté".into();
      }
      Err(e) => self.status_msg = format!("Erreur : {e}"),
    }
  }

  async fn toggle_theme(&mut self) {
    match self.theme.toggle(&mut self.root).await {
      Ok(theme) => self.status_msg = format!("Thème : {}", theme.as_str()),
      Err(e) => {
        tracing::warn!(error = %e, "could not persist theme");
        self.status_msg = format!("Thème non enregistré : {e}");
      }
    }
  }

  // ── Filtered list ─────────────────────────────────────────────────────────

  /// Organizations on the current page that match the filter query.
  pub fn filtered_organizations(&self) -> Vec<&Organization> {
    if self.filter.is_empty() {
      return self.organizations.iter().collect();
    }
    let matcher = SkimMatcherV2::default();
    self
      .organizations
      .iter()
      .filter(|o| matcher.fuzzy_match(&o.name, &self.filter).is_some())
      .collect()
  }

  /// The organization under the list cursor in the filtered view, if any.
  pub fn cursor_organization(&self) -> Option<&Organization> {
    self.filtered_organizations().get(self.list_cursor).copied()
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Whether keystrokes are currently text input.
  pub fn is_typing(&self) -> bool {
    self.filter_active || self.screen == Screen::Login
  }

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    if !self.is_typing() && key.code == KeyCode::Char('t') {
      self.toggle_theme().await;
      return Ok(true);
    }

    // Filter input mode: all printable keys go into the filter string.
    if self.filter_active {
      return self.handle_filter_key(key).await;
    }

    match self.screen {
      Screen::Landing => self.handle_landing_key(key).await,
      Screen::Login => self.handle_login_key(key).await,
      Screen::Organizations => self.handle_list_key(key).await,
      Screen::OrganizationDetail => self.handle_detail_key(key).await,
    }
  }

  async fn handle_landing_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Char('q') => return Ok(false),

      // "Commencer"
      KeyCode::Enter | KeyCode::Char('l') => {
        self.login.focus = LoginField::Email;
        self.status_msg.clear();
        self.screen = Screen::Login;
      }

      // "Voir le tableau de bord"
      KeyCode::Char('o') | KeyCode::Char('d') => {
        self.screen = Screen::Organizations;
        self.load_organizations().await;
      }

      KeyCode::Char('x') => self.logout().await,

      _ => {}
    }
    Ok(true)
  }

  async fn handle_login_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Esc => {
        self.login.password.clear();
        self.screen = Screen::Landing;
      }
      KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
        self.login.switch_focus();
      }
      KeyCode::Enter => match self.login.focus {
        LoginField::Email => self.login.focus = LoginField::Password,
        LoginField::Password => self.submit_login().await,
      },
      KeyCode::Backspace => {
        self.login.focused_mut().pop();
      }
      KeyCode::Char(c) => self.login.focused_mut().push(c),
      _ => {}
    }
    Ok(true)
  }

  async fn handle_filter_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Esc => {
        self.filter_active = false;
        self.filter.clear();
        self.list_cursor = 0;
      }
      KeyCode::Enter => {
        self.filter_active = false;
        self.list_cursor = 0;
        // Immediately open detail if there's exactly one match.
        let only = match self.filtered_organizations().as_slice() {
          [only] => Some((*only).clone()),
          _ => None,
        };
        if let Some(organization) = only {
          self.open_detail(organization).await;
        }
      }
      KeyCode::Backspace => {
        self.filter.pop();
        self.list_cursor = 0;
      }
      KeyCode::Char(c) => {
        self.filter.push(c);
        self.list_cursor = 0;
      }
      _ => {}
    }
    Ok(true)
  }

  async fn handle_list_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Char('q') => return Ok(false),

      KeyCode::Esc => {
        self.filter.clear();
        self.screen = Screen::Landing;
      }

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.filtered_organizations().len();
        if len > 0 && self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      // Open detail
      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        if let Some(organization) = self.cursor_organization().cloned() {
          self.open_detail(organization).await;
        }
      }

      // Filter
      KeyCode::Char('/') => {
        self.filter_active = true;
        self.filter.clear();
        self.list_cursor = 0;
      }

      // Paging
      KeyCode::Char('n') | KeyCode::PageDown => {
        if self.page.is_some_and(|p| p.has_next()) {
          self.go_to_page(self.page_request.page.saturating_add(1)).await;
        }
      }
      KeyCode::Char('p') | KeyCode::PageUp => {
        if self.page_request.page > 0 {
          self.go_to_page(self.page_request.page - 1).await;
        }
      }
      KeyCode::Char('r') => {
        self.load_organizations().await;
      }

      _ => {}
    }
    Ok(true)
  }

  async fn handle_detail_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Char('q') => return Ok(false),

      // Back to list
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.screen = Screen::Organizations;
        self.selected = None;
        self.workstations.clear();
      }

      // Scroll detail
      KeyCode::Down | KeyCode::Char('j') => {
        if self.detail_scroll + 1 < self.workstations.len() {
          self.detail_scroll += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
      }

      // Navigate list from detail (for quick switching)
      KeyCode::Char(']') => {
        let len = self.filtered_organizations().len();
        if len > 0 && self.list_cursor + 1 < len {
          self.list_cursor += 1;
          if let Some(organization) = self.cursor_organization().cloned() {
            self.open_detail(organization).await;
          }
        }
      }
      KeyCode::Char('[') => {
        if self.list_cursor > 0 {
          self.list_cursor -= 1;
          if let Some(organization) = self.cursor_organization().cloned() {
            self.open_detail(organization).await;
          }
        }
      }

      _ => {}
    }
    Ok(true)
  }
}
