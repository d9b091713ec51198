//! Verify-and-create pass over the HubSpot properties API.
//!
//! The diff itself is pure ([`partition_missing`]); network I/O sits at the
//! edges in [`HubspotClient`]. A fetch failure fails only that object
//! type's checks, and a creation failure fails only that property, so one
//! invocation always produces a complete report of whatever it could reach.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use wos_shared::{Result, WosError};

use crate::properties::{PropertyDefinition, property_specs};

/// HubSpot CRM v3 properties API root.
const BASE_URL: &str = "https://api.hubapi.com/crm/v3/properties";

/// Per-request timeout in seconds.
const TIMEOUT_SECS: u64 = 30;

// ---------------------------------------------------------------------------
// Pure diff
// ---------------------------------------------------------------------------

/// Split `required` into (present, missing) against the portal's existing
/// property names, preserving the required order.
pub fn partition_missing<'a>(
    required: &'a [PropertyDefinition],
    existing: &HashSet<String>,
) -> (Vec<&'a PropertyDefinition>, Vec<&'a PropertyDefinition>) {
    required
        .iter()
        .partition(|prop| existing.contains(prop.name))
}

// ---------------------------------------------------------------------------
// HubspotClient
// ---------------------------------------------------------------------------

/// Existing-property listing returned by `GET {base}/{object_type}`.
#[derive(Debug, Deserialize)]
struct PropertyListing {
    #[serde(default)]
    results: Vec<ExistingProperty>,
}

#[derive(Debug, Deserialize)]
struct ExistingProperty {
    name: String,
}

/// Thin bearer-authenticated client for the HubSpot properties API.
pub struct HubspotClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HubspotClient {
    /// Create a client with the default API root and a 30 s timeout.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| WosError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
            token: token.into(),
        })
    }

    /// Point the client at a different API root (for tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the set of property names that already exist on `object_type`.
    pub async fn fetch_existing(&self, object_type: &str) -> Result<HashSet<String>> {
        let url = format!("{}/{object_type}", self.base_url);
        debug!(%url, "fetching existing properties");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| WosError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WosError::Network(format!("{url}: HTTP {status}")));
        }

        let listing: PropertyListing = response
            .json()
            .await
            .map_err(|e| WosError::Network(format!("{url}: bad response body: {e}")))?;

        Ok(listing.results.into_iter().map(|p| p.name).collect())
    }

    /// Create one property on `object_type`, sending the full definition.
    ///
    /// HTTP 200 or 201 is success; any other status is a failure carrying
    /// the remote status and response body.
    pub async fn create_property(
        &self,
        object_type: &str,
        prop: &PropertyDefinition,
    ) -> Result<()> {
        let url = format!("{}/{object_type}", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(prop)
            .send()
            .await
            .map_err(|e| WosError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::OK || status == reqwest::StatusCode::CREATED {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(WosError::Network(format!(
            "creating {}: HTTP {status} {body}",
            prop.name
        )))
    }
}

// ---------------------------------------------------------------------------
// Verify report
// ---------------------------------------------------------------------------

/// Final state of one required property within a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyStatus {
    /// Already existed on the object type.
    Present,
    /// Not present; reported only (dry run).
    Missing,
    /// Not present; created during this run.
    Created,
    /// Not present; creation was attempted and failed.
    CreateFailed { detail: String },
}

/// Per-object-type outcome of the verification pass.
#[derive(Debug, Clone)]
pub struct ObjectReport {
    /// API object type (`contacts` or `companies`).
    pub object_type: &'static str,
    /// Number of required definitions for this object type.
    pub required: usize,
    /// Error from the existing-properties fetch, if it failed. When set,
    /// `properties` is empty: nothing could be checked.
    pub fetch_error: Option<String>,
    /// Status per required property, in definition order.
    pub properties: Vec<(&'static str, PropertyStatus)>,
}

/// Outcome of a full [`verify_and_create`] pass.
#[derive(Debug, Clone)]
pub struct VerifyReport {
    /// One report per object type, in processing order.
    pub objects: Vec<ObjectReport>,
}

impl VerifyReport {
    /// True iff every required property exists after the pass: no fetch
    /// failures, and every property ended `Present` or `Created`.
    pub fn all_ok(&self) -> bool {
        self.objects.iter().all(|o| {
            o.fetch_error.is_none()
                && o.properties.iter().all(|(_, status)| {
                    matches!(status, PropertyStatus::Present | PropertyStatus::Created)
                })
        })
    }

    /// Total count of properties that ended `Missing` or `CreateFailed`.
    pub fn missing_count(&self) -> usize {
        self.objects
            .iter()
            .flat_map(|o| &o.properties)
            .filter(|(_, status)| {
                matches!(
                    status,
                    PropertyStatus::Missing | PropertyStatus::CreateFailed { .. }
                )
            })
            .count()
    }
}

/// Verify all required WOS properties; optionally create missing ones.
///
/// Each object type is fetched once; missing properties are either reported
/// (`create = false`) or created one call each. Idempotent across runs
/// because existence is re-checked every time.
#[instrument(skip(client))]
pub async fn verify_and_create(client: &HubspotClient, create: bool) -> VerifyReport {
    let mut objects = Vec::new();

    for (object_type, specs) in property_specs() {
        let existing = match client.fetch_existing(object_type).await {
            Ok(existing) => existing,
            Err(e) => {
                warn!(object_type, error = %e, "failed to fetch existing properties");
                objects.push(ObjectReport {
                    object_type,
                    required: specs.len(),
                    fetch_error: Some(e.to_string()),
                    properties: Vec::new(),
                });
                continue;
            }
        };

        debug!(object_type, existing = existing.len(), "fetched portal schema");

        let mut properties = Vec::with_capacity(specs.len());
        for prop in &specs {
            if existing.contains(prop.name) {
                properties.push((prop.name, PropertyStatus::Present));
                continue;
            }

            if !create {
                properties.push((prop.name, PropertyStatus::Missing));
                continue;
            }

            match client.create_property(object_type, prop).await {
                Ok(()) => {
                    info!(object_type, name = prop.name, "created property");
                    properties.push((prop.name, PropertyStatus::Created));
                }
                Err(e) => {
                    warn!(object_type, name = prop.name, error = %e, "creation failed");
                    properties.push((
                        prop.name,
                        PropertyStatus::CreateFailed {
                            detail: e.to_string(),
                        },
                    ));
                }
            }
        }

        objects.push(ObjectReport {
            object_type,
            required: specs.len(),
            fetch_error: None,
            properties,
        });
    }

    VerifyReport { objects }
}
