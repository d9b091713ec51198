//! Core domain types for WOS client onboarding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Credential keys every client env file must provide.
pub const REQUIRED_ENV_KEYS: [&str; 5] = [
    "HUBSPOT_TOKEN",
    "UNIPILE_API_KEY",
    "UNIPILE_ACCOUNT_ID",
    "UNIPILE_DNS",
    "CARGO_API_KEY",
];

// ---------------------------------------------------------------------------
// ClientConfig
// ---------------------------------------------------------------------------

/// The `{PREFIX}-client-config.json` structure for one onboarded client.
///
/// Field order here is the on-disk key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Full company name (e.g. "Acme Corp").
    pub company_name: String,
    /// 2-4 uppercase-letter client identifier namespacing all artifacts.
    pub prefix: String,
    /// Humans running outreach, each rate-limited weekly/daily.
    #[serde(default)]
    pub operators: Vec<Operator>,
    /// ICP search personas targeted by the outreach workflows.
    #[serde(default)]
    pub personas: Vec<Persona>,
}

/// A human account executing outreach actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    /// Display name.
    pub name: String,
    /// Numeric HubSpot owner id, kept as a string for the CRM API.
    #[serde(default)]
    pub hubspot_owner_id: String,
}

/// An ideal-customer-profile LinkedIn search filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Job-title keywords to search for.
    pub title_keywords: String,
    /// Profile language filter; defaults to "en" at derivation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Network distance filter; defaults to "S" at derivation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_distance: Option<String>,
    /// Geographic filter (e.g. "United States").
    pub location: String,
}

// ---------------------------------------------------------------------------
// TableSpec
// ---------------------------------------------------------------------------

/// The name, columns, and row data for one n8n data table.
///
/// Derived and ephemeral: printed for human transcription into the n8n UI,
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    /// Table name, namespaced by the client prefix.
    pub name: String,
    /// Column names, in display order.
    pub columns: Vec<String>,
    /// One map per row, keyed by column name.
    pub rows: Vec<HashMap<String, String>>,
}
