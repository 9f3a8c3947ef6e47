//! `/organizations`

use sante_core::{
  envelope::Page,
  model::{Id, NewOrganization, Organization, OrganizationUpdate, Workstation},
  page::{PageRequest, SortEncoding},
  storage::KeyValueStore,
};
use serde_json::Value;

use crate::{ApiClient, Result};

pub struct Organizations<'a, S> {
  pub(super) client: &'a ApiClient<S>,
}

impl<S: KeyValueStore> Organizations<'_, S> {
  /// `GET /organizations`
  pub async fn get_all(&self) -> Result<Vec<Organization>> {
    self.client.get("/organizations").await
  }

  /// `GET /organizations/paged?page=&size=&sort=field,dir`
  pub async fn get_paged(&self, req: &PageRequest) -> Result<Page<Organization>> {
    let query = req.query(SortEncoding::Combined);
    self.client.get(&format!("/organizations/paged?{query}")).await
  }

  /// `GET /organizations/:id`
  pub async fn get_by_id(&self, id: Id) -> Result<Organization> {
    self.client.get(&format!("/organizations/{id}")).await
  }

  /// `POST /organizations`
  pub async fn create(&self, organization: &NewOrganization) -> Result<Organization> {
    self.client.post("/organizations", Some(organization)).await
  }

  /// `PUT /organizations/:id`
  pub async fn update(
    &self,
    id: Id,
    changes: &OrganizationUpdate,
  ) -> Result<Organization> {
    self.client.put(&format!("/organizations/{id}"), changes).await
  }

  /// `DELETE /organizations/:id`
  pub async fn delete(&self, id: Id) -> Result<()> {
    let _: Value = self.client.delete(&format!("/organizations/{id}")).await?;
    Ok(())
  }

  /// `GET /organizations/:id/workstations`
  pub async fn get_workstations(&self, id: Id) -> Result<Vec<Workstation>> {
    self
      .client
      .get(&format!("/organizations/{id}/workstations"))
      .await
  }
}
