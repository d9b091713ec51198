//! Derivation and rendering of the three n8n data table specs.
//!
//! Given a validated client config and its credential set, [`builder`]
//! produces the exact table names, columns, and row data to enter into the
//! n8n UI; [`render`] turns a [`wos_shared::TableSpec`] into aligned text
//! for the terminal. Both sides are pure: no I/O, no clock reads (the
//! builder takes `today` as a parameter).

pub mod builder;
pub mod render;

pub use builder::{
    DAILY_REMAINING, WEEKLY_REMAINING, credentials_table, personas_table, user_counters_table,
};
pub use render::render_table;
