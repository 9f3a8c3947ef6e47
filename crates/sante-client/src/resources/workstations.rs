//! `/workstations`

use sante_core::{
  envelope::Page,
  model::{Id, NewWorkstation, Workstation, WorkstationUpdate},
  page::{PageRequest, SortEncoding},
  storage::KeyValueStore,
};
use serde_json::Value;

use crate::{ApiClient, Result};

pub struct Workstations<'a, S> {
  pub(super) client: &'a ApiClient<S>,
}

impl<S: KeyValueStore> Workstations<'_, S> {
  /// `GET /workstations`
  pub async fn get_all(&self) -> Result<Vec<Workstation>> {
    self.client.get("/workstations").await
  }

  /// `GET /workstations/paged?page=&size=&sort=field,dir`
  pub async fn get_paged(&self, req: &PageRequest) -> Result<Page<Workstation>> {
    let query = req.query(SortEncoding::Combined);
    self.client.get(&format!("/workstations/paged?{query}")).await
  }

  /// `GET /workstations/:id`
  pub async fn get_by_id(&self, id: Id) -> Result<Workstation> {
    self.client.get(&format!("/workstations/{id}")).await
  }

  /// `POST /workstations`
  pub async fn create(&self, workstation: &NewWorkstation) -> Result<Workstation> {
    self.client.post("/workstations", Some(workstation)).await
  }

  /// `PUT /workstations/:id`
  pub async fn update(
    &self,
    id: Id,
    changes: &WorkstationUpdate,
  ) -> Result<Workstation> {
    self.client.put(&format!("/workstations/{id}"), changes).await
  }

  /// `DELETE /workstations/:id`
  pub async fn delete(&self, id: Id) -> Result<()> {
    let _: Value = self.client.delete(&format!("/workstations/{id}")).await?;
    Ok(())
  }
}
