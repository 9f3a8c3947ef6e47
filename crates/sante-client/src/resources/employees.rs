//! `/employees`

use sante_core::{
  envelope::Page,
  model::{Employee, Id, NewEmployee},
  page::{PageRequest, SortEncoding},
  storage::KeyValueStore,
};

use crate::{ApiClient, Result};

pub struct Employees<'a, S> {
  pub(super) client: &'a ApiClient<S>,
}

impl<S: KeyValueStore> Employees<'_, S> {
  /// `GET /employees/campaign/:campaign_id?page=&size=&sortBy=&sortDirection=`
  pub async fn get_by_campaign(
    &self,
    campaign_id: Id,
    req: &PageRequest,
  ) -> Result<Page<Employee>> {
    let query = req.query(SortEncoding::Split);
    self
      .client
      .get(&format!("/employees/campaign/{campaign_id}?{query}"))
      .await
  }

  /// `GET /employees/:id`
  pub async fn get_by_id(&self, id: Id) -> Result<Employee> {
    self.client.get(&format!("/employees/{id}")).await
  }

  /// `POST /employees`
  pub async fn create(&self, employee: &NewEmployee) -> Result<Employee> {
    self.client.post("/employees", Some(employee)).await
  }
}
