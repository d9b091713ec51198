//! Table spec derivation for client onboarding.
//!
//! Trusts its input: configs are expected to have passed validation first,
//! so derivation has no error conditions of its own.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use wos_shared::{Operator, Persona, TableSpec};

/// Weekly outreach-action budget each operator starts with.
pub const WEEKLY_REMAINING: u32 = 150;

/// Daily outreach-action budget each operator starts with.
pub const DAILY_REMAINING: u32 = 20;

fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// Credentials table
// ---------------------------------------------------------------------------

/// Build the `{prefix}-wos-credentials` table: one fixed row per
/// integration service, with only that service's columns populated.
pub fn credentials_table(prefix: &str, env: &HashMap<String, String>) -> TableSpec {
    let get = |key: &str| env.get(key).cloned().unwrap_or_default();

    let rows = vec![
        row(&[
            ("service", "hubspot"),
            ("api_key", &get("HUBSPOT_TOKEN")),
            ("account_id", ""),
            ("dns", ""),
            ("extra_1", ""),
            ("extra_2", ""),
        ]),
        row(&[
            ("service", "unipile"),
            ("api_key", &get("UNIPILE_API_KEY")),
            ("account_id", &get("UNIPILE_ACCOUNT_ID")),
            ("dns", &get("UNIPILE_DNS")),
            ("extra_1", ""),
            ("extra_2", ""),
        ]),
        row(&[
            ("service", "cargo"),
            ("api_key", &get("CARGO_API_KEY")),
            ("account_id", ""),
            ("dns", ""),
            ("extra_1", ""),
            ("extra_2", ""),
        ]),
    ];

    TableSpec {
        name: format!("{prefix}-wos-credentials"),
        columns: ["service", "api_key", "account_id", "dns", "extra_1", "extra_2"]
            .map(String::from)
            .to_vec(),
        rows,
    }
}

// ---------------------------------------------------------------------------
// Personas table
// ---------------------------------------------------------------------------

/// Build the `{prefix}-wos-personas` table: one row per persona, with
/// language/network_distance defaults filled in here.
pub fn personas_table(prefix: &str, personas: &[Persona]) -> TableSpec {
    let rows = personas
        .iter()
        .map(|p| {
            row(&[
                ("title_keywords", &p.title_keywords),
                ("language", p.language.as_deref().unwrap_or("en")),
                ("network_distance", p.network_distance.as_deref().unwrap_or("S")),
                ("location", &p.location),
                ("extra_1", ""),
                ("extra_2", ""),
            ])
        })
        .collect();

    TableSpec {
        name: format!("{prefix}-wos-personas"),
        columns: [
            "title_keywords",
            "language",
            "network_distance",
            "location",
            "extra_1",
            "extra_2",
        ]
        .map(String::from)
        .to_vec(),
        rows,
    }
}

// ---------------------------------------------------------------------------
// User counters table
// ---------------------------------------------------------------------------

/// The Monday strictly after `today` (+7 days when today is a Monday).
fn next_monday(today: NaiveDate) -> NaiveDate {
    let days_ahead = 7 - u64::from(today.weekday().num_days_from_monday());
    today + Days::new(days_ahead)
}

/// Build the `{prefix}-wos-user_counters` table: one row per operator with
/// zeroed counts, the rate-limit budgets, and reset dates derived from
/// `today`. `invite_safe_date` stays blank; the downstream automation
/// fills it in.
pub fn user_counters_table(
    prefix: &str,
    operators: &[Operator],
    today: NaiveDate,
) -> TableSpec {
    let weekly_reset = next_monday(today).to_string();
    let daily_reset = (today + Days::new(1)).to_string();

    debug!(%weekly_reset, %daily_reset, "derived counter reset dates");

    let rows = operators
        .iter()
        .map(|op| {
            row(&[
                ("user_name", &op.name),
                ("hubspot_owner_id", &op.hubspot_owner_id),
                ("weekly_count", "0"),
                ("daily_count", "0"),
                ("weekly_remaining", &WEEKLY_REMAINING.to_string()),
                ("daily_remaining", &DAILY_REMAINING.to_string()),
                ("weekly_reset_date", &weekly_reset),
                ("daily_reset_date", &daily_reset),
                ("invite_safe_date", ""),
                ("extra_1", ""),
                ("extra_2", ""),
                ("extra_3", ""),
            ])
        })
        .collect();

    TableSpec {
        name: format!("{prefix}-wos-user_counters"),
        columns: [
            "user_name",
            "hubspot_owner_id",
            "weekly_count",
            "daily_count",
            "weekly_remaining",
            "daily_remaining",
            "weekly_reset_date",
            "daily_reset_date",
            "invite_safe_date",
            "extra_1",
            "extra_2",
            "extra_3",
        ]
        .map(String::from)
        .to_vec(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn credentials_table_always_has_three_rows() {
        let spec = credentials_table("ACM", &HashMap::new());
        assert_eq!(spec.name, "ACM-wos-credentials");
        assert_eq!(spec.rows.len(), 3);

        let services: Vec<_> = spec.rows.iter().map(|r| r["service"].as_str()).collect();
        assert_eq!(services, ["hubspot", "unipile", "cargo"]);

        // Unpopulated credentials render as empty strings, not errors.
        assert_eq!(spec.rows[0]["api_key"], "");
    }

    #[test]
    fn credentials_table_maps_service_columns() {
        let env: HashMap<String, String> = [
            ("HUBSPOT_TOKEN", "pat-123"),
            ("UNIPILE_API_KEY", "uk-1"),
            ("UNIPILE_ACCOUNT_ID", "acct-9"),
            ("UNIPILE_DNS", "api1.unipile.com"),
            ("CARGO_API_KEY", "ck-5"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .into();

        let spec = credentials_table("ACM", &env);
        assert_eq!(spec.rows[0]["api_key"], "pat-123");
        assert_eq!(spec.rows[1]["api_key"], "uk-1");
        assert_eq!(spec.rows[1]["account_id"], "acct-9");
        assert_eq!(spec.rows[1]["dns"], "api1.unipile.com");
        assert_eq!(spec.rows[2]["api_key"], "ck-5");
        // Hubspot and cargo rows never carry account_id/dns.
        assert_eq!(spec.rows[0]["account_id"], "");
        assert_eq!(spec.rows[2]["dns"], "");
    }

    #[test]
    fn personas_table_applies_defaults() {
        let personas = vec![
            Persona {
                title_keywords: "VP Sales".into(),
                language: None,
                network_distance: None,
                location: "United States".into(),
            },
            Persona {
                title_keywords: "Head of Growth".into(),
                language: Some("de".into()),
                network_distance: Some("O".into()),
                location: "Germany".into(),
            },
        ];

        let spec = personas_table("ACM", &personas);
        assert_eq!(spec.name, "ACM-wos-personas");
        assert_eq!(spec.rows.len(), 2);
        assert_eq!(spec.rows[0]["language"], "en");
        assert_eq!(spec.rows[0]["network_distance"], "S");
        assert_eq!(spec.rows[1]["language"], "de");
        assert_eq!(spec.rows[1]["network_distance"], "O");
    }

    #[test]
    fn next_monday_from_midweek() {
        // Wednesday 2024-01-10 -> Monday 2024-01-15
        assert_eq!(next_monday(date(2024, 1, 10)), date(2024, 1, 15));
    }

    #[test]
    fn next_monday_from_monday_is_a_week_out() {
        // Monday 2024-01-08 -> the following Monday, not today
        assert_eq!(next_monday(date(2024, 1, 8)), date(2024, 1, 15));
    }

    #[test]
    fn next_monday_from_sunday_is_tomorrow() {
        assert_eq!(next_monday(date(2024, 1, 14)), date(2024, 1, 15));
    }

    #[test]
    fn user_counters_initial_values() {
        let operators = vec![Operator {
            name: "Jane Doe".into(),
            hubspot_owner_id: "1234567".into(),
        }];

        let spec = user_counters_table("ACM", &operators, date(2024, 1, 10));
        assert_eq!(spec.name, "ACM-wos-user_counters");
        assert_eq!(spec.columns.len(), 12);
        assert_eq!(spec.rows.len(), 1);

        let r = &spec.rows[0];
        assert_eq!(r["user_name"], "Jane Doe");
        assert_eq!(r["hubspot_owner_id"], "1234567");
        assert_eq!(r["weekly_count"], "0");
        assert_eq!(r["daily_count"], "0");
        assert_eq!(r["weekly_remaining"], "150");
        assert_eq!(r["daily_remaining"], "20");
        assert_eq!(r["weekly_reset_date"], "2024-01-15");
        assert_eq!(r["daily_reset_date"], "2024-01-11");
        assert_eq!(r["invite_safe_date"], "");
    }

    #[test]
    fn derivation_is_deterministic() {
        let operators = vec![Operator {
            name: "Jane Doe".into(),
            hubspot_owner_id: "1234567".into(),
        }];
        let a = user_counters_table("ACM", &operators, date(2024, 1, 8));
        let b = user_counters_table("ACM", &operators, date(2024, 1, 8));
        assert_eq!(a.rows, b.rows);
    }
}
