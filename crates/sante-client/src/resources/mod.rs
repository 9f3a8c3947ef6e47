//! Resource groups: fixed path templates over [`ApiClient`].
//!
//! | Group | Paths |
//! |-------|-------|
//! | [`Auth`] | `/auth/signin`, `/auth/signup` |
//! | [`Organizations`] | `/organizations[/:id]`, `/organizations/paged`, `/organizations/:id/workstations` |
//! | [`Workstations`] | `/workstations[/:id]`, `/workstations/paged` |
//! | [`Campaigns`] | `/campaigns[/:id]` |
//! | [`Employees`] | `/employees/campaign/:id`, `/employees[/:id]` |

mod auth;
mod campaigns;
mod employees;
mod organizations;
mod workstations;

pub use auth::Auth;
pub use campaigns::Campaigns;
pub use employees::Employees;
pub use organizations::Organizations;
pub use workstations::Workstations;

use sante_core::storage::KeyValueStore;

use crate::ApiClient;

impl<S: KeyValueStore> ApiClient<S> {
  pub fn auth(&self) -> Auth<'_, S> { Auth { client: self } }

  pub fn organizations(&self) -> Organizations<'_, S> {
    Organizations { client: self }
  }

  pub fn workstations(&self) -> Workstations<'_, S> {
    Workstations { client: self }
  }

  pub fn campaigns(&self) -> Campaigns<'_, S> { Campaigns { client: self } }

  pub fn employees(&self) -> Employees<'_, S> { Employees { client: self } }
}
