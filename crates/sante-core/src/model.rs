//! Resource records mirrored from the backend's representation.
//!
//! Every identifier is assigned by the backend. Records returned by the API
//! carry an `id`; creation payloads (`New*`) never do, and update payloads
//! (`*Update`) are partial: fields left as `None` are not serialised, so the
//! backend keeps its current value.

use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned numeric identifier.
pub type Id = i64;

/// Read an explicit `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ─── Address ─────────────────────────────────────────────────────────────────

/// A postal address embedded in organizations and employees. It has no
/// lifecycle of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:          Option<Id>,
  /// FHIR address use, e.g. "home" or "work".
  #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
  pub use_:        Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub text:        Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub line:        Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub city:        Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub district:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub state:       Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub postal_code: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub country:     Option<String>,
}

impl Address {
  /// One-line rendering. Prefers the free-text form when the backend sent
  /// one.
  pub fn summary(&self) -> String {
    if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
      return text.to_string();
    }
    [
      self.line.as_deref(),
      self.postal_code.as_deref(),
      self.city.as_deref(),
      self.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
  }
}

// ─── Organization ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
  pub id:           Id,
  #[serde(default)]
  pub created_at:   Option<String>,
  #[serde(default)]
  pub updated_at:   Option<String>,
  pub name:         String,
  #[serde(default)]
  pub address:      Option<Address>,
  /// Campaigns run for this organization, in backend order.
  #[serde(default, deserialize_with = "null_as_default")]
  pub campaign_ids: Vec<Id>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
  pub name:         String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub address:      Option<Address>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub campaign_ids: Vec<Id>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationUpdate {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name:         Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub address:      Option<Address>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub campaign_ids: Option<Vec<Id>>,
}

// ─── Workstation ─────────────────────────────────────────────────────────────

/// A job position and the occupational risks attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workstation {
  pub id:                 Id,
  #[serde(default)]
  pub created_at:         Option<String>,
  #[serde(default)]
  pub updated_at:         Option<String>,
  pub title:              String,
  #[serde(default)]
  pub code:               Option<String>,
  #[serde(default)]
  pub description:        Option<String>,
  #[serde(default)]
  pub professional_risks: Option<String>,
  #[serde(default)]
  pub organization_id:    Option<Id>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkstation {
  pub title:              String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub code:               Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description:        Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub professional_risks: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub organization_id:    Option<Id>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkstationUpdate {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title:              Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub code:               Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description:        Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub professional_risks: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub organization_id:    Option<Id>,
}

// ─── Campaign ────────────────────────────────────────────────────────────────

/// A time-boxed medical campaign. Dates are ISO-8601 strings exactly as the
/// backend sends them; they are not parsed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
  pub id:              Id,
  #[serde(default)]
  pub created_at:      Option<String>,
  #[serde(default)]
  pub updated_at:      Option<String>,
  pub name:            String,
  #[serde(default)]
  pub start_date:      Option<String>,
  #[serde(default)]
  pub end_date:        Option<String>,
  #[serde(default)]
  pub organization_id: Option<Id>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub employee_ids:    Vec<Id>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
  pub name:            String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start_date:      Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub end_date:        Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub organization_id: Option<Id>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub employee_ids:    Vec<Id>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignUpdate {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name:            Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start_date:      Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub end_date:        Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub organization_id: Option<Id>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub employee_ids:    Option<Vec<Id>>,
}

// ─── Employee ────────────────────────────────────────────────────────────────

/// An employee followed by the occupational health service.
///
/// `patient_uuid` and `openmrs_identifier` point into the clinical record
/// system; they are opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id:                 Id,
  #[serde(default)]
  pub created_at:         Option<String>,
  #[serde(default)]
  pub updated_at:         Option<String>,
  #[serde(default)]
  pub patient_uuid:       Option<String>,
  #[serde(default)]
  pub openmrs_identifier: Option<String>,
  #[serde(default)]
  pub given_name:         Option<String>,
  #[serde(default)]
  pub family_name:        Option<String>,
  #[serde(default)]
  pub gender:             Option<String>,
  #[serde(default)]
  pub birth_date:         Option<String>,
  #[serde(default)]
  pub phone:              Option<String>,
  #[serde(default)]
  pub address:            Option<Address>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub campaign_ids:       Vec<Id>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub patient_uuid:       Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub openmrs_identifier: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub given_name:         Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub family_name:        Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gender:             Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub birth_date:         Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub phone:              Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub address:            Option<Address>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub campaign_ids:       Vec<Id>,
}
