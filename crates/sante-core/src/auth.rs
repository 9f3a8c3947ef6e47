//! Authentication payloads exchanged with `/auth/*`.

use serde::{Deserialize, Serialize};

use crate::model::Id;

/// Body of `POST /auth/signin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
  pub email:    String,
  pub password: String,
}

/// Body of `POST /auth/signup`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
  pub first_name:      String,
  pub last_name:       String,
  pub email:           String,
  pub password:        String,
  /// Requested roles; the backend applies its default when omitted.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub role:            Option<Vec<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub organization_id: Option<Id>,
}

/// Successful sign-in: the bearer token plus the signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
  pub token:             String,
  /// Token scheme reported by the backend, normally `"Bearer"`.
  #[serde(rename = "type")]
  pub token_type:        String,
  pub id:                Id,
  pub email:             String,
  pub first_name:        String,
  pub last_name:         String,
  #[serde(default, deserialize_with = "crate::model::null_as_default")]
  pub roles:             Vec<String>,
  #[serde(default)]
  pub organization_id:   Option<Id>,
  #[serde(default)]
  pub organization_name: Option<String>,
}

/// A bare `{"message": "..."}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
  pub message: String,
}
