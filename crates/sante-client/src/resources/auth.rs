//! `/auth`: sign-in, sign-up and local sign-out.

use sante_core::{
  auth::{JwtResponse, LoginRequest, MessageResponse, SignupRequest},
  storage::KeyValueStore,
};

use crate::{ApiClient, Result};

pub struct Auth<'a, S> {
  pub(super) client: &'a ApiClient<S>,
}

impl<S: KeyValueStore> Auth<'_, S> {
  /// `POST /auth/signin`. On success the returned token becomes the
  /// client's bearer token and is persisted.
  ///
  /// A token that cannot be persisted is still used for this session; the
  /// storage failure is logged, not returned.
  pub async fn login(&self, credentials: &LoginRequest) -> Result<JwtResponse> {
    let jwt: JwtResponse =
      self.client.post("/auth/signin", Some(credentials)).await?;
    if let Err(e) = self.client.set_token(jwt.token.clone()).await {
      tracing::warn!(error = %e, "signed in, but the token was not persisted");
    }
    tracing::info!(user = %jwt.email, roles = ?jwt.roles, "signed in");
    Ok(jwt)
  }

  /// `POST /auth/signup`. Does not sign the new user in.
  pub async fn signup(&self, user: &SignupRequest) -> Result<MessageResponse> {
    self.client.post("/auth/signup", Some(user)).await
  }

  /// Drop the session locally. The backend is not contacted.
  pub async fn logout(&self) -> Result<()> {
    self.client.clear_token().await?;
    tracing::info!("signed out");
    Ok(())
  }
}
