//! Static WOS property definitions for Contact and Company objects.

use serde::Serialize;

/// A HubSpot custom-property schema descriptor, serialized with the wire
/// field names the properties API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDefinition {
    /// Unique property name within an object type.
    pub name: &'static str,
    /// Data type (`string`, `datetime`, ...).
    #[serde(rename = "type")]
    pub property_type: &'static str,
    /// Rendering hint (`text`, `date`, ...).
    #[serde(rename = "fieldType")]
    pub field_type: &'static str,
    /// Human-readable label shown in the HubSpot UI.
    pub label: &'static str,
    /// Property group the field is filed under.
    #[serde(rename = "groupName")]
    pub group_name: &'static str,
}

const fn text(name: &'static str, label: &'static str, group: &'static str) -> PropertyDefinition {
    PropertyDefinition {
        name,
        property_type: "string",
        field_type: "text",
        label,
        group_name: group,
    }
}

const fn date(name: &'static str, label: &'static str, group: &'static str) -> PropertyDefinition {
    PropertyDefinition {
        name,
        property_type: "datetime",
        field_type: "date",
        label,
        group_name: group,
    }
}

/// The 11 properties required on the Contact object.
pub fn contact_properties() -> Vec<PropertyDefinition> {
    const GROUP: &str = "contactinformation";
    vec![
        text("wos_outreach_stage", "WOS Outreach Stage", GROUP),
        text("wos_sequence_status", "WOS Sequence Status", GROUP),
        text("wos_sequence_name", "WOS Sequence Name", GROUP),
        date("wos_sequence_start_date", "WOS Sequence Start Date", GROUP),
        text("wos_user_id", "WOS User ID", GROUP),
        date("wos_last_interaction_date", "WOS Last Interaction Date", GROUP),
        text("wos_linkedin_url", "WOS LinkedIn URL", GROUP),
        text("wos_linkedin_id", "WOS LinkedIn ID", GROUP),
        text(
            "wos_linkedin_connection_status",
            "WOS LinkedIn Connection Status",
            GROUP,
        ),
        date(
            "wos_connection_accepted_date",
            "WOS Connection Accepted Date",
            GROUP,
        ),
        text("n8n_initiate_li_message", "n8n Initiate LI Message", GROUP),
    ]
}

/// The 3 properties required on the Company object.
pub fn company_properties() -> Vec<PropertyDefinition> {
    const GROUP: &str = "companyinformation";
    vec![
        date("wos_process_company", "WOS Initiate LI Agent", GROUP),
        text("wos_persona", "WOS Persona", GROUP),
        text("wos_user_id", "WOS User ID", GROUP),
    ]
}

/// Required definitions keyed by API object type, in processing order.
pub fn property_specs() -> Vec<(&'static str, Vec<PropertyDefinition>)> {
    vec![
        ("contacts", contact_properties()),
        ("companies", company_properties()),
    ]
}
