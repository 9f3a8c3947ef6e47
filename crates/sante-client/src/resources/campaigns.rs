//! `/campaigns`
//!
//! Unlike organizations and workstations, the paginated listing lives on the
//! collection path itself and takes `sortBy` / `sortDirection`.

use sante_core::{
  envelope::Page,
  model::{Campaign, CampaignUpdate, Id, NewCampaign},
  page::{PageRequest, SortEncoding},
  storage::KeyValueStore,
};
use serde_json::Value;

use crate::{ApiClient, Result};

pub struct Campaigns<'a, S> {
  pub(super) client: &'a ApiClient<S>,
}

impl<S: KeyValueStore> Campaigns<'_, S> {
  /// `GET /campaigns`
  pub async fn get_all(&self) -> Result<Vec<Campaign>> {
    self.client.get("/campaigns").await
  }

  /// `GET /campaigns?page=&size=&sortBy=&sortDirection=`
  pub async fn get_paged(&self, req: &PageRequest) -> Result<Page<Campaign>> {
    let query = req.query(SortEncoding::Split);
    self.client.get(&format!("/campaigns?{query}")).await
  }

  /// `GET /campaigns/:id`
  pub async fn get_by_id(&self, id: Id) -> Result<Campaign> {
    self.client.get(&format!("/campaigns/{id}")).await
  }

  /// `POST /campaigns`
  pub async fn create(&self, campaign: &NewCampaign) -> Result<Campaign> {
    self.client.post("/campaigns", Some(campaign)).await
  }

  /// `PUT /campaigns/:id`
  pub async fn update(&self, id: Id, changes: &CampaignUpdate) -> Result<Campaign> {
    self.client.put(&format!("/campaigns/{id}"), changes).await
  }

  /// `DELETE /campaigns/:id`
  pub async fn delete(&self, id: Id) -> Result<()> {
    let _: Value = self.client.delete(&format!("/campaigns/{id}")).await?;
    Ok(())
  }
}
