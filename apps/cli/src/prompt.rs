//! Interactive stdin prompting for the config generator.
//!
//! A side-effecting shell around the pure validators: each loop re-prompts
//! until the answer passes, so a collected config is structurally valid
//! before it ever reaches `validate_config`.

use std::io::{self, Write};

use wos_shared::{Operator, Persona};
use wos_validate::validate_prefix;

/// Print `prompt`, read one stdin line, return it trimmed.
fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed during interactive prompt",
        ));
    }
    Ok(line.trim().to_string())
}

/// Prompt for company name and prefix, re-prompting until valid.
pub fn collect_basic_info() -> io::Result<(String, String)> {
    println!("\n── Client Information ──\n");

    let mut company_name = read_line("Company name (e.g. Acme Corp): ")?;
    while company_name.is_empty() {
        company_name = read_line("  Company name cannot be empty: ")?;
    }

    let mut prefix = read_line("Short prefix (2-4 uppercase letters, e.g. ACM): ")?.to_uppercase();
    while !validate_prefix(&prefix).is_empty() {
        prefix = read_line("  Must be 2-4 uppercase letters: ")?.to_uppercase();
    }

    Ok((company_name, prefix))
}

/// Prompt for operators until a blank name, requiring at least one.
pub fn collect_operators() -> io::Result<Vec<Operator>> {
    println!("\n── Operators ──");
    println!("  Add operators who will run outreach. Enter a blank name to stop.\n");

    let mut operators = Vec::new();
    let mut idx = 1;
    loop {
        let name = read_line(&format!("  Operator {idx} name (blank to finish): "))?;
        if name.is_empty() {
            if operators.is_empty() {
                println!("  At least one operator is required.");
                continue;
            }
            break;
        }

        let mut owner_id = read_line(&format!("  Operator {idx} HubSpot owner ID: "))?;
        while owner_id.is_empty() || !owner_id.chars().all(|c| c.is_ascii_digit()) {
            owner_id = read_line("    Must be numeric: ")?;
        }

        operators.push(Operator {
            name,
            hubspot_owner_id: owner_id,
        });
        idx += 1;
    }

    Ok(operators)
}

/// Prompt for personas until blank title_keywords, requiring at least one.
pub fn collect_personas() -> io::Result<Vec<Persona>> {
    println!("\n── ICP Personas ──");
    println!("  Add LinkedIn search personas. Enter blank title_keywords to stop.\n");

    let mut personas = Vec::new();
    let mut idx = 1;
    loop {
        let title_keywords =
            read_line(&format!("  Persona {idx} title_keywords (blank to finish): "))?;
        if title_keywords.is_empty() {
            if personas.is_empty() {
                println!("  At least one persona is required.");
                continue;
            }
            break;
        }

        let language = read_line(&format!("  Persona {idx} language [en]: "))?;
        let language = if language.is_empty() { "en".to_string() } else { language };

        let network_distance = read_line(&format!("  Persona {idx} network_distance [S]: "))?;
        let network_distance = if network_distance.is_empty() {
            "S".to_string()
        } else {
            network_distance
        };

        let mut location = read_line(&format!("  Persona {idx} location (e.g. United States): "))?;
        while location.is_empty() {
            location = read_line("    Location cannot be empty: ")?;
        }

        personas.push(Persona {
            title_keywords,
            language: Some(language),
            network_distance: Some(network_distance),
            location,
        });
        idx += 1;
    }

    Ok(personas)
}
