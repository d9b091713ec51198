//! Structural validation rules for client onboarding data.
//!
//! Pure functions over in-memory structures: each returns the full list of
//! violations as human-readable strings (empty means valid), so a single
//! pass reports everything at once. The interactive prompt layer re-uses
//! [`validate_prefix`] standalone to re-prompt until valid.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use wos_shared::{ClientConfig, REQUIRED_ENV_KEYS};

/// Client prefixes are exactly 2-4 uppercase ASCII letters.
static PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,4}$").expect("prefix regex"));

/// Validate a client prefix. Empty result means valid.
pub fn validate_prefix(prefix: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if !PREFIX_RE.is_match(prefix) {
        errors.push(format!(
            "Prefix must be 2-4 uppercase letters, got: '{prefix}'"
        ));
    }
    errors
}

/// Validate a full client config. All rules are evaluated; nothing
/// short-circuits, so every violation shows up in one report.
pub fn validate_config(config: &ClientConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if config.company_name.is_empty() {
        errors.push("Missing required field: company_name".to_string());
    }
    if config.prefix.is_empty() {
        errors.push("Missing required field: prefix".to_string());
    } else {
        errors.extend(validate_prefix(&config.prefix));
    }

    if config.operators.is_empty() {
        errors.push("At least one operator is required".to_string());
    }
    for (i, op) in config.operators.iter().enumerate() {
        let n = i + 1;
        if op.name.is_empty() {
            errors.push(format!("Operator {n}: missing name"));
        }
        if op.hubspot_owner_id.is_empty() {
            errors.push(format!("Operator {n}: missing hubspot_owner_id"));
        } else if !op.hubspot_owner_id.chars().all(|c| c.is_ascii_digit()) {
            errors.push(format!(
                "Operator {n}: hubspot_owner_id must be numeric, got: '{}'",
                op.hubspot_owner_id
            ));
        }
    }

    if config.personas.is_empty() {
        errors.push("At least one persona is required".to_string());
    }
    for (i, p) in config.personas.iter().enumerate() {
        let n = i + 1;
        if p.title_keywords.is_empty() {
            errors.push(format!("Persona {n}: missing title_keywords"));
        }
        if p.location.is_empty() {
            errors.push(format!("Persona {n}: missing location"));
        }
    }

    debug!(
        operators = config.operators.len(),
        personas = config.personas.len(),
        errors = errors.len(),
        "validated client config"
    );

    errors
}

/// Validate a credential map: every required key must be present with a
/// non-blank value. Any non-empty trimmed string passes; there is no
/// per-service format check by design.
pub fn validate_credentials(env: &HashMap<String, String>) -> Vec<String> {
    let mut errors = Vec::new();
    for key in REQUIRED_ENV_KEYS {
        let blank = env.get(key).is_none_or(|v| v.trim().is_empty());
        if blank {
            errors.push(format!("Missing or empty credential: {key}"));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use wos_shared::{Operator, Persona};

    fn valid_config() -> ClientConfig {
        ClientConfig {
            company_name: "Acme Corp".into(),
            prefix: "ACM".into(),
            operators: vec![Operator {
                name: "Jane Doe".into(),
                hubspot_owner_id: "1234567".into(),
            }],
            personas: vec![Persona {
                title_keywords: "VP Sales".into(),
                language: None,
                network_distance: None,
                location: "United States".into(),
            }],
        }
    }

    #[test]
    fn valid_config_has_no_errors() {
        assert!(validate_config(&valid_config()).is_empty());
    }

    #[test]
    fn prefix_accepts_2_to_4_uppercase_letters() {
        for prefix in ["AC", "ACM", "ACME"] {
            assert!(validate_prefix(prefix).is_empty(), "{prefix} should pass");
        }
    }

    #[test]
    fn prefix_rejects_bad_shapes() {
        for prefix in ["ac", "A", "ACMEX", "AC1", "", "AC M"] {
            assert!(!validate_prefix(prefix).is_empty(), "{prefix} should fail");
        }
    }

    #[test]
    fn missing_required_fields_are_named() {
        let mut config = valid_config();
        config.company_name = String::new();
        config.prefix = String::new();

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.contains("company_name")));
        assert!(errors.iter().any(|e| e.contains("prefix")));
    }

    #[test]
    fn all_violations_reported_in_one_pass() {
        let config = ClientConfig {
            company_name: String::new(),
            prefix: "bad".into(),
            operators: vec![],
            personas: vec![],
        };
        let errors = validate_config(&config);
        // missing company_name + bad prefix + no operators + no personas
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn operator_owner_id_must_be_all_digits() {
        let mut config = valid_config();
        config.operators[0].hubspot_owner_id = "12a".into();
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.contains("must be numeric")));

        config.operators[0].hubspot_owner_id = "1234567".into();
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn operator_errors_use_one_based_indices() {
        let mut config = valid_config();
        config.operators.push(Operator {
            name: String::new(),
            hubspot_owner_id: String::new(),
        });
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.starts_with("Operator 2: missing name")));
        assert!(
            errors
                .iter()
                .any(|e| e.starts_with("Operator 2: missing hubspot_owner_id"))
        );
    }

    #[test]
    fn persona_requires_title_keywords_and_location() {
        let mut config = valid_config();
        config.personas[0].title_keywords = String::new();
        config.personas[0].location = String::new();
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.contains("missing title_keywords")));
        assert!(errors.iter().any(|e| e.contains("missing location")));
    }

    #[test]
    fn empty_operator_and_persona_lists_are_errors() {
        let mut config = valid_config();
        config.operators.clear();
        config.personas.clear();
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.contains("one operator")));
        assert!(errors.iter().any(|e| e.contains("one persona")));
    }

    #[test]
    fn credentials_require_every_key_non_blank() {
        let mut env: HashMap<String, String> = REQUIRED_ENV_KEYS
            .iter()
            .map(|k| (k.to_string(), "value".to_string()))
            .collect();
        assert!(validate_credentials(&env).is_empty());

        env.insert("HUBSPOT_TOKEN".into(), "   ".into());
        env.remove("CARGO_API_KEY");
        let errors = validate_credentials(&env);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("HUBSPOT_TOKEN")));
        assert!(errors.iter().any(|e| e.contains("CARGO_API_KEY")));
    }
}
