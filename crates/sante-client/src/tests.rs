//! Tests for `ApiClient` against a mock backend served by axum on an
//! ephemeral local port.

use std::{
  io,
  sync::{Arc, Mutex, PoisonError},
};

use axum::{
  Json, Router,
  extract::State,
  http::{HeaderMap, Method, StatusCode, Uri, header},
  response::{Html, IntoResponse, Response},
};
use sante_core::{
  auth::{LoginRequest, SignupRequest},
  model::{
    CampaignUpdate, NewCampaign, NewEmployee, NewOrganization, NewWorkstation,
    OrganizationUpdate, WorkstationUpdate,
  },
  page::PageRequest,
  storage::{AUTH_TOKEN_KEY, KeyValueStore, MemoryStore},
};
use serde_json::{Value, json};

use crate::{ApiClient, ApiConfig, Error};

// ─── Mock backend ────────────────────────────────────────────────────────────

/// One request as the backend saw it.
#[derive(Debug, Clone)]
struct Seen {
  method:        Method,
  /// Path and query, e.g. `/api/campaigns?page=0`.
  uri:           String,
  authorization: Option<String>,
  content_type:  Option<String>,
  body:          String,
}

#[derive(Clone, Default)]
struct Backend {
  seen: Arc<Mutex<Vec<Seen>>>,
}

impl Backend {
  fn requests(&self) -> Vec<Seen> {
    self.seen.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }

  fn last(&self) -> Seen {
    self.requests().pop().expect("backend saw no request")
  }
}

fn error_body(status: StatusCode, message: &str, path: &str) -> Response {
  (
    status,
    Json(json!({
      "message": message,
      "status": status.as_u16(),
      "timestamp": "2025-03-01T10:00:00",
      "path": path,
    })),
  )
    .into_response()
}

/// Echo a creation payload back with a backend-assigned id.
fn created(body: &str, id: i64) -> Response {
  let mut record: Value = serde_json::from_str(body).unwrap_or_default();
  record["id"] = json!(id);
  (StatusCode::CREATED, Json(record)).into_response()
}

/// Apply a partial update body over `current`.
fn with_changes(mut current: Value, body: &str) -> Response {
  if let Ok(Value::Object(changes)) = serde_json::from_str::<Value>(body)
    && let Some(obj) = current.as_object_mut()
  {
    obj.extend(changes);
  }
  Json(current).into_response()
}

fn page_of(content: Value, number: u32) -> Value {
  json!({
    "content": content,
    "page": { "size": 10, "number": number, "totalElements": 1, "totalPages": 1 }
  })
}

async fn handle(
  State(backend): State<Backend>,
  method: Method,
  uri: Uri,
  headers: HeaderMap,
  body: String,
) -> Response {
  let header_str = |name: header::HeaderName| {
    headers
      .get(name)
      .and_then(|v| v.to_str().ok())
      .map(str::to_string)
  };
  backend
    .seen
    .lock()
    .unwrap_or_else(PoisonError::into_inner)
    .push(Seen {
      method:        method.clone(),
      uri:           uri.to_string(),
      authorization: header_str(header::AUTHORIZATION),
      content_type:  header_str(header::CONTENT_TYPE),
      body:          body.clone(),
    });

  let path = uri.path().strip_prefix("/api").unwrap_or(uri.path());
  match (method, path) {
    (Method::POST, "/auth/signin") => {
      let creds: Value = serde_json::from_str(&body).unwrap_or_default();
      if creds["password"] == "correct horse" {
        Json(json!({
          "token": "jwt-abc",
          "type": "Bearer",
          "id": 1,
          "email": creds["email"],
          "firstName": "Aminata",
          "lastName": "Sow",
          "roles": ["ROLE_ADMIN"],
          "organizationId": 3,
          "organizationName": "Sonatel"
        }))
        .into_response()
      } else {
        error_body(StatusCode::UNAUTHORIZED, "Bad credentials", "/api/auth/signin")
      }
    }
    (Method::POST, "/auth/signup") => {
      Json(json!({ "message": "User registered successfully!" })).into_response()
    }
    (Method::GET, "/organizations") => {
      Json(json!([{ "id": 1, "name": "Sonatel", "campaignIds": [7] }])).into_response()
    }
    (Method::GET, "/organizations/paged") => {
      Json(page_of(json!([{ "id": 1, "name": "Sonatel" }]), 0)).into_response()
    }
    (Method::GET, "/organizations/1") => {
      Json(json!({ "id": 1, "name": "Sonatel" })).into_response()
    }
    (Method::GET, "/organizations/1/workstations") => Json(json!([
      { "id": 2, "title": "Technicien réseau", "organizationId": 1 }
    ]))
    .into_response(),
    (Method::GET, "/organizations/404") => error_body(
      StatusCode::NOT_FOUND,
      "Organization not found with id: 404",
      "/api/organizations/404",
    ),
    (Method::DELETE, "/organizations/1") => StatusCode::NO_CONTENT.into_response(),
    (Method::GET, "/workstations/paged") => {
      Json(page_of(json!([{ "id": 2, "title": "Soudeur" }]), 0)).into_response()
    }
    (Method::GET, "/workstations") => {
      Json(json!([{ "id": 2, "title": "Soudeur" }])).into_response()
    }
    (Method::GET, "/workstations/2") => {
      Json(json!({ "id": 2, "title": "Soudeur", "code": "SOU-01" })).into_response()
    }
    (Method::POST, "/workstations") => created(&body, 3),
    (Method::PUT, "/workstations/2") => {
      with_changes(json!({ "id": 2, "title": "Soudeur" }), &body)
    }
    (Method::DELETE, "/workstations/2") => StatusCode::NO_CONTENT.into_response(),
    (Method::POST, "/organizations") => created(&body, 5),
    (Method::PUT, "/organizations/1") => {
      with_changes(json!({ "id": 1, "name": "Sonatel" }), &body)
    }
    // Listing and paging share the path; only paging carries a query.
    (Method::GET, "/campaigns") if uri.query().is_some() => Json(page_of(
      json!([{ "id": 7, "name": "Visite annuelle 2025", "employeeIds": [9] }]),
      0,
    ))
    .into_response(),
    (Method::GET, "/campaigns") => {
      Json(json!([{ "id": 7, "name": "Visite annuelle 2025" }])).into_response()
    }
    (Method::GET, "/campaigns/7") => Json(json!({
      "id": 7,
      "name": "Visite annuelle 2025",
      "startDate": "2025-03-01",
      "endDate": "2025-03-31",
      "organizationId": 1
    }))
    .into_response(),
    (Method::POST, "/campaigns") => created(&body, 8),
    (Method::PUT, "/campaigns/7") => {
      with_changes(json!({ "id": 7, "name": "Visite annuelle 2025" }), &body)
    }
    (Method::DELETE, "/campaigns/7") => StatusCode::NO_CONTENT.into_response(),
    (Method::GET, "/employees/9") => {
      Json(json!({ "id": 9, "givenName": "Awa", "familyName": "Diop" })).into_response()
    }
    (Method::POST, "/ping") => Json(json!({ "message": "pong" })).into_response(),
    (Method::GET, "/employees/campaign/7") => Json(page_of(
      json!([{ "id": 9, "givenName": "Awa", "familyName": "Diop" }]),
      0,
    ))
    .into_response(),
    (Method::POST, "/employees") => created(&body, 77),
    (Method::GET, "/health") => (StatusCode::OK, "ok").into_response(),
    (Method::GET, "/crash") => {
      (StatusCode::INTERNAL_SERVER_ERROR, Html("<h1>Whitelabel Error Page</h1>"))
        .into_response()
    }
    (Method::GET, "/blank-message") => {
      error_body(StatusCode::BAD_REQUEST, "", "/api/blank-message")
    }
    _ => error_body(StatusCode::NOT_FOUND, "No handler found", path),
  }
}

/// Serve the mock backend and return its base URL.
async fn spawn_backend() -> (Backend, String) {
  let backend = Backend::default();
  let app = Router::new()
    .fallback(handle)
    .with_state(backend.clone());
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, app).await.unwrap();
  });
  (backend, format!("http://{addr}/api"))
}

async fn client_with(
  base_url: &str,
  store: MemoryStore,
) -> ApiClient<MemoryStore> {
  let config = ApiConfig { base_url: base_url.to_string(), timeout: None };
  ApiClient::new(config, Arc::new(store)).await.unwrap()
}

/// Reads like [`MemoryStore`] but rejects every write.
#[derive(Clone, Default)]
struct ReadOnlyStore(MemoryStore);

impl KeyValueStore for ReadOnlyStore {
  type Error = io::Error;

  async fn get(&self, key: &str) -> Result<Option<String>, io::Error> {
    Ok(self.0.get(key).await.unwrap_or_default())
  }

  async fn set(&self, _key: &str, _value: &str) -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"))
  }

  async fn remove(&self, _key: &str) -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"))
  }
}

fn good_login() -> LoginRequest {
  LoginRequest {
    email:    "aminata@sonatel.sn".into(),
    password: "correct horse".into(),
  }
}

// ── Token lifecycle ──────────────────────────────────────────────────────────

#[tokio::test]
async fn login_stores_token_and_authenticates_later_calls() {
  let (backend, url) = spawn_backend().await;
  let store = MemoryStore::new();
  let client = client_with(&url, store.clone()).await;

  client.organizations().get_all().await.unwrap();
  assert_eq!(backend.last().authorization, None);

  let jwt = client.auth().login(&good_login()).await.unwrap();
  assert_eq!(jwt.token, "jwt-abc");
  assert_eq!(jwt.token_type, "Bearer");
  assert_eq!(jwt.organization_name.as_deref(), Some("Sonatel"));
  assert_eq!(client.token().as_deref(), Some("jwt-abc"));
  assert_eq!(
    store.get(AUTH_TOKEN_KEY).await.unwrap().as_deref(),
    Some("jwt-abc")
  );

  client.organizations().get_all().await.unwrap();
  client.campaigns().get_paged(&PageRequest::by_name()).await.unwrap();
  let seen = backend.requests();
  let after_login = &seen[2..];
  assert_eq!(after_login.len(), 2);
  for seen in after_login {
    assert_eq!(seen.authorization.as_deref(), Some("Bearer jwt-abc"));
  }
}

#[tokio::test]
async fn failed_login_keeps_previous_state() {
  let (_backend, url) = spawn_backend().await;
  let store = MemoryStore::new();
  let client = client_with(&url, store.clone()).await;

  let err = client
    .auth()
    .login(&LoginRequest {
      email:    "aminata@sonatel.sn".into(),
      password: "wrong".into(),
    })
    .await
    .unwrap_err();
  assert_eq!(err.to_string(), "Bad credentials");
  assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
  assert!(!client.is_authenticated());
  assert_eq!(store.get(AUTH_TOKEN_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn login_succeeds_when_token_cannot_be_persisted() {
  let (backend, url) = spawn_backend().await;
  let config = ApiConfig { base_url: url, timeout: None };
  let client = ApiClient::new(config, Arc::new(ReadOnlyStore::default()))
    .await
    .unwrap();

  let jwt = client.auth().login(&good_login()).await.unwrap();
  assert_eq!(jwt.token, "jwt-abc");
  assert_eq!(client.token().as_deref(), Some("jwt-abc"));

  client.organizations().get_all().await.unwrap();
  assert_eq!(backend.last().authorization.as_deref(), Some("Bearer jwt-abc"));

  let err = client.set_token("other").await.unwrap_err();
  assert!(matches!(err, Error::Storage(_)), "{err:?}");
}

#[tokio::test]
async fn clear_token_removes_authorization_header() {
  let (backend, url) = spawn_backend().await;
  let store = MemoryStore::new();
  let client = client_with(&url, store.clone()).await;

  client.set_token("manual-token").await.unwrap();
  client.organizations().get_by_id(1).await.unwrap();
  assert_eq!(
    backend.last().authorization.as_deref(),
    Some("Bearer manual-token")
  );

  client.clear_token().await.unwrap();
  client.organizations().get_by_id(1).await.unwrap();
  assert_eq!(backend.last().authorization, None);
  assert_eq!(store.get(AUTH_TOKEN_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn logout_clears_token_without_contacting_backend() {
  let (backend, url) = spawn_backend().await;
  let store = MemoryStore::with_entries([(AUTH_TOKEN_KEY, "old")]);
  let client = client_with(&url, store.clone()).await;

  client.auth().logout().await.unwrap();
  assert!(backend.requests().is_empty());
  assert!(!client.is_authenticated());
  assert_eq!(store.get(AUTH_TOKEN_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn stored_token_is_picked_up_on_construction() {
  let (backend, url) = spawn_backend().await;
  let store = MemoryStore::with_entries([(AUTH_TOKEN_KEY, "from-last-run")]);
  let client = client_with(&url, store).await;

  client.workstations().get_paged(&PageRequest::by_title()).await.unwrap();
  assert_eq!(
    backend.last().authorization.as_deref(),
    Some("Bearer from-last-run")
  );
}

#[tokio::test]
async fn sessions_are_isolated_but_clones_share_token() {
  let (backend, url) = spawn_backend().await;
  let alice = client_with(&url, MemoryStore::new()).await;
  let bob = client_with(&url, MemoryStore::new()).await;
  let alice_again = alice.clone();

  alice.auth().login(&good_login()).await.unwrap();
  assert!(alice_again.is_authenticated());
  assert!(!bob.is_authenticated());

  bob.organizations().get_all().await.unwrap();
  assert_eq!(backend.last().authorization, None);
  alice_again.organizations().get_all().await.unwrap();
  assert_eq!(backend.last().authorization.as_deref(), Some("Bearer jwt-abc"));
}

// ── Request shape ────────────────────────────────────────────────────────────

#[tokio::test]
async fn every_request_declares_json_content_type() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  client.organizations().get_all().await.unwrap();
  client.organizations().delete(1).await.unwrap();
  client.auth().login(&good_login()).await.unwrap();

  let seen = backend.requests();
  assert_eq!(seen.len(), 3);
  for s in seen {
    assert_eq!(s.content_type.as_deref(), Some("application/json"), "{s:?}");
  }
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&format!("{url}/"), MemoryStore::new()).await;
  client.organizations().get_by_id(1).await.unwrap();
  assert_eq!(backend.last().uri, "/api/organizations/1");
}

#[tokio::test]
async fn organizations_paged_passes_sort_through() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  let page = client
    .organizations()
    .get_paged(&PageRequest::by_name())
    .await
    .unwrap();
  assert_eq!(page.content[0].name, "Sonatel");
  let seen = backend.last();
  assert_eq!(seen.method, Method::GET);
  assert_eq!(seen.uri, "/api/organizations/paged?page=0&size=10&sort=name,asc");
}

#[tokio::test]
async fn workstations_paged_uses_title_by_default() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  client
    .workstations()
    .get_paged(&PageRequest::by_title().with_page(1).with_size(5))
    .await
    .unwrap();
  assert_eq!(
    backend.last().uri,
    "/api/workstations/paged?page=1&size=5&sort=title,asc"
  );
}

#[tokio::test]
async fn campaigns_paged_splits_sort() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  let page = client
    .campaigns()
    .get_paged(&PageRequest::by_name())
    .await
    .unwrap();
  assert_eq!(page.content[0].employee_ids, vec![9]);
  assert_eq!(
    backend.last().uri,
    "/api/campaigns?page=0&size=10&sortBy=name&sortDirection=asc"
  );
}

#[tokio::test]
async fn employees_by_campaign_splits_sort() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  let req = PageRequest::first("familyName,desc".parse().unwrap());
  let page = client.employees().get_by_campaign(7, &req).await.unwrap();
  assert_eq!(page.content[0].family_name.as_deref(), Some("Diop"));
  assert_eq!(
    backend.last().uri,
    "/api/employees/campaign/7?page=0&size=10&sortBy=familyName&sortDirection=desc"
  );
}

#[tokio::test]
async fn update_sends_only_changed_fields() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  let changes = WorkstationUpdate {
    professional_risks: Some("Fumées de soudage".into()),
    ..Default::default()
  };
  let ws = client.workstations().update(2, &changes).await.unwrap();
  assert_eq!(ws.professional_risks.as_deref(), Some("Fumées de soudage"));

  let seen = backend.last();
  assert_eq!(seen.method, Method::PUT);
  let sent: Value = serde_json::from_str(&seen.body).unwrap();
  assert_eq!(sent, json!({ "professionalRisks": "Fumées de soudage" }));
}

#[tokio::test]
async fn create_employee_returns_backend_id() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  let new = NewEmployee {
    given_name: Some("Moussa".into()),
    family_name: Some("Ndiaye".into()),
    campaign_ids: vec![7],
    ..Default::default()
  };
  let created = client.employees().create(&new).await.unwrap();
  assert_eq!(created.id, 77);
  assert_eq!(created.campaign_ids, vec![7]);

  let sent: Value = serde_json::from_str(&backend.last().body).unwrap();
  assert!(sent.get("id").is_none());
}

#[tokio::test]
async fn signup_returns_message() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  let resp = client
    .auth()
    .signup(&SignupRequest {
      first_name: "Moussa".into(),
      last_name: "Ndiaye".into(),
      email: "moussa@example.sn".into(),
      password: "s3cret!".into(),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(resp.message, "User registered successfully!");
  assert!(!client.is_authenticated());

  let sent: Value = serde_json::from_str(&backend.last().body).unwrap();
  assert_eq!(sent["firstName"], "Moussa");
  assert!(sent.get("role").is_none());
}

#[tokio::test]
async fn campaign_paths() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;
  let campaigns = client.campaigns();

  let all = campaigns.get_all().await.unwrap();
  assert_eq!(all[0].name, "Visite annuelle 2025");
  let one = campaigns.get_by_id(7).await.unwrap();
  assert_eq!(one.start_date.as_deref(), Some("2025-03-01"));
  let created = campaigns
    .create(&NewCampaign {
      name: "Audiométrie".into(),
      organization_id: Some(1),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(created.id, 8);
  let updated = campaigns
    .update(7, &CampaignUpdate {
      end_date: Some("2025-04-15".into()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(updated.end_date.as_deref(), Some("2025-04-15"));
  campaigns.delete(7).await.unwrap();

  let seen: Vec<_> = backend
    .requests()
    .into_iter()
    .map(|s| (s.method, s.uri))
    .collect();
  assert_eq!(seen, [
    (Method::GET, "/api/campaigns".to_string()),
    (Method::GET, "/api/campaigns/7".to_string()),
    (Method::POST, "/api/campaigns".to_string()),
    (Method::PUT, "/api/campaigns/7".to_string()),
    (Method::DELETE, "/api/campaigns/7".to_string()),
  ]);
}

#[tokio::test]
async fn workstation_paths() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;
  let workstations = client.workstations();

  assert_eq!(workstations.get_all().await.unwrap().len(), 1);
  let one = workstations.get_by_id(2).await.unwrap();
  assert_eq!(one.code.as_deref(), Some("SOU-01"));
  let created = workstations
    .create(&NewWorkstation {
      title: "Cariste".into(),
      professional_risks: Some("Vibrations".into()),
      organization_id: Some(1),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(created.id, 3);
  assert_eq!(created.organization_id, Some(1));
  workstations.delete(2).await.unwrap();

  let seen: Vec<_> = backend
    .requests()
    .into_iter()
    .map(|s| (s.method, s.uri))
    .collect();
  assert_eq!(seen, [
    (Method::GET, "/api/workstations".to_string()),
    (Method::GET, "/api/workstations/2".to_string()),
    (Method::POST, "/api/workstations".to_string()),
    (Method::DELETE, "/api/workstations/2".to_string()),
  ]);
}

#[tokio::test]
async fn organization_create_and_update_paths() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  let created = client
    .organizations()
    .create(&NewOrganization { name: "Senelec".into(), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(created.id, 5);
  assert_eq!(created.name, "Senelec");
  let seen = backend.last();
  assert_eq!((seen.method, seen.uri.as_str()), (Method::POST, "/api/organizations"));
  let sent: Value = serde_json::from_str(&seen.body).unwrap();
  assert_eq!(sent, json!({ "name": "Senelec" }));

  let renamed = client
    .organizations()
    .update(1, &OrganizationUpdate {
      name: Some("Sonatel SA".into()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(renamed.name, "Sonatel SA");
  let seen = backend.last();
  assert_eq!((seen.method, seen.uri.as_str()), (Method::PUT, "/api/organizations/1"));
}

#[tokio::test]
async fn employee_by_id_path() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  let employee = client.employees().get_by_id(9).await.unwrap();
  assert_eq!(employee.given_name.as_deref(), Some("Awa"));
  let seen = backend.last();
  assert_eq!((seen.method, seen.uri.as_str()), (Method::GET, "/api/employees/9"));
}

#[tokio::test]
async fn post_without_body_sends_nothing() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  let reply: Value = client.post::<_, ()>("/ping", None).await.unwrap();
  assert_eq!(reply["message"], "pong");
  let seen = backend.last();
  assert_eq!(seen.method, Method::POST);
  assert!(seen.body.is_empty());
  assert_eq!(seen.content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn organization_workstations() {
  let (_backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;
  let list = client.organizations().get_workstations(1).await.unwrap();
  assert_eq!(list.len(), 1);
  assert_eq!(list[0].organization_id, Some(1));
}

// ── Responses ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn http_error_carries_backend_message() {
  let (_backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  let err = client.organizations().get_by_id(404).await.unwrap_err();
  assert_eq!(err.to_string(), "Organization not found with id: 404");
  match err {
    Error::Http { status, body, .. } => {
      assert_eq!(status, StatusCode::NOT_FOUND);
      let body = body.unwrap();
      assert_eq!(body.status, Some(404));
      assert_eq!(body.path.as_deref(), Some("/api/organizations/404"));
    }
    other => panic!("expected Http error, got {other:?}"),
  }
}

#[tokio::test]
async fn http_error_without_json_body_falls_back_to_status() {
  let (_backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  let err = client.get::<Value>("/crash").await.unwrap_err();
  assert_eq!(err.to_string(), "HTTP 500");
  assert!(matches!(err, Error::Http { body: None, .. }));
}

#[tokio::test]
async fn http_error_with_empty_message_falls_back_to_status() {
  let (_backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  let err = client.get::<Value>("/blank-message").await.unwrap_err();
  assert_eq!(err.to_string(), "HTTP 400");
}

#[tokio::test]
async fn non_json_success_resolves_to_empty_object() {
  let (_backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  let value: Value = client.get("/health").await.unwrap();
  assert_eq!(value, json!({}));
}

#[tokio::test]
async fn delete_accepts_no_content() {
  let (backend, url) = spawn_backend().await;
  let client = client_with(&url, MemoryStore::new()).await;

  client.organizations().delete(1).await.unwrap();
  let seen = backend.last();
  assert_eq!(seen.method, Method::DELETE);
  assert_eq!(seen.uri, "/api/organizations/1");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);

  let client = client_with(&format!("http://{addr}/api"), MemoryStore::new()).await;
  let err = client.organizations().get_all().await.unwrap_err();
  assert!(matches!(err, Error::Transport(_)), "{err:?}");
}
