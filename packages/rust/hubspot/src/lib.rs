//! HubSpot custom-property schema verification and creation.
//!
//! The WOS workflows read and write a fixed set of custom properties on
//! Contact and Company objects. This crate holds those static definitions,
//! a pure diff against whatever the portal already has, and an idempotent
//! verify-and-create pass over the HubSpot properties API: existence is
//! re-checked on every run, so running it twice never duplicates a field.

pub mod properties;
pub mod reconcile;

pub use properties::{PropertyDefinition, company_properties, contact_properties, property_specs};
pub use reconcile::{
    HubspotClient, ObjectReport, PropertyStatus, VerifyReport, partition_missing,
    verify_and_create,
};
