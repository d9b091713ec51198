//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use tracing::info;

use wos_hubspot::{HubspotClient, PropertyStatus, VerifyReport, verify_and_create};
use wos_shared::{
    ClientConfig, config_path, default_configs_dir, env_path, load_client_config, parse_env_file,
    write_client_config, write_env_template,
};
use wos_tables::{credentials_table, personas_table, render_table, user_counters_table};
use wos_validate::{validate_config, validate_credentials};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// WOS onboarding — client config, n8n table specs, HubSpot schema.
#[derive(Parser)]
#[command(
    name = "wos",
    version,
    about = "Onboard a WOS client: generate config, print n8n table specs, verify HubSpot properties.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Generate a client config interactively, or validate an existing one.
    Config {
        /// Validate an existing config + env pair instead of generating.
        #[arg(long, requires = "prefix")]
        validate: bool,

        /// Client prefix (required with --validate).
        #[arg(long)]
        prefix: Option<String>,

        /// Directory for config files (defaults to ~/.wos/configs).
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Print the n8n data table specs for an onboarded client.
    Tables {
        /// Client prefix (e.g. ACM).
        #[arg(long)]
        prefix: String,

        /// Directory containing config files (defaults to ~/.wos/configs).
        #[arg(long)]
        configs_dir: Option<PathBuf>,
    },

    /// Verify (and optionally create) the WOS HubSpot properties.
    Properties {
        /// HubSpot bearer token.
        #[arg(long, env = "HUBSPOT_TOKEN", hide_env_values = true)]
        token: String,

        /// Create any missing properties (default: dry-run only).
        #[arg(long)]
        create: bool,
    },
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "wos=info",
        1 => "wos=debug",
        _ => "wos=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command. Returns the process exit code: 0 for full success,
/// 1 when any check or remote operation failed.
pub(crate) async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Config {
            validate,
            prefix,
            output_dir,
        } => {
            let dir = resolve_dir(output_dir)?;
            if validate {
                // clap's `requires` guarantees the prefix is present.
                let prefix = prefix.expect("--validate requires --prefix").to_uppercase();
                cmd_config_validate(&prefix, &dir)
            } else {
                cmd_config_generate(&dir)
            }
        }
        Command::Tables {
            prefix,
            configs_dir,
        } => {
            let dir = resolve_dir(configs_dir)?;
            cmd_tables(&prefix.to_uppercase(), &dir)
        }
        Command::Properties { token, create } => cmd_properties(&token, create).await,
    }
}

fn resolve_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => Ok(default_configs_dir()?),
    }
}

fn print_errors(errors: &[String]) {
    for e in errors {
        println!("  ✗  {e}");
    }
}

// ---------------------------------------------------------------------------
// config (interactive generation)
// ---------------------------------------------------------------------------

fn cmd_config_generate(dir: &Path) -> Result<ExitCode> {
    let (company_name, prefix) = crate::prompt::collect_basic_info()?;
    let operators = crate::prompt::collect_operators()?;
    let personas = crate::prompt::collect_personas()?;

    let config = ClientConfig {
        company_name,
        prefix,
        operators,
        personas,
    };

    let errors = validate_config(&config);
    if !errors.is_empty() {
        println!("\nValidation errors:");
        print_errors(&errors);
        return Ok(ExitCode::FAILURE);
    }

    let config_file = config_path(dir, &config.prefix);
    let env_file = env_path(dir, &config.prefix);

    write_client_config(&config, &config_file)?;
    println!("\n  ✓  Config written to {}", config_file.display());

    if env_file.exists() {
        println!(
            "  ·  Env file already exists at {} — not overwritten",
            env_file.display()
        );
    } else {
        write_env_template(&env_file)?;
        println!("  ✓  Env template written to {}", env_file.display());
        println!("     → Fill in credential values before running `wos tables`");
    }

    println!("\nDone. Next steps:");
    println!("  1. Fill in credentials in {}", env_file.display());
    println!("  2. Run: wos tables --prefix {}", config.prefix);

    Ok(ExitCode::SUCCESS)
}

// ---------------------------------------------------------------------------
// config --validate
// ---------------------------------------------------------------------------

fn cmd_config_validate(prefix: &str, dir: &Path) -> Result<ExitCode> {
    let config_file = config_path(dir, prefix);
    let env_file = env_path(dir, prefix);

    println!("Validating config for prefix: {prefix}\n");
    let mut all_errors: Vec<String> = Vec::new();

    if !config_file.exists() {
        all_errors.push(format!("Config file not found: {}", config_file.display()));
    } else {
        println!("  ✓  Found {}", config_file.display());
        match load_client_config(&config_file) {
            Ok(config) => all_errors.extend(validate_config(&config)),
            Err(e) => all_errors.push(e.to_string()),
        }
    }

    if !env_file.exists() {
        all_errors.push(format!("Env file not found: {}", env_file.display()));
    } else {
        println!("  ✓  Found {}", env_file.display());
        match parse_env_file(&env_file) {
            Ok(env) => all_errors.extend(validate_credentials(&env)),
            Err(e) => all_errors.push(e.to_string()),
        }
    }

    println!("\n{}", "─".repeat(50));
    if all_errors.is_empty() {
        println!("  All checks passed. ✓");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("  {} error(s) found:", all_errors.len());
        print_errors(&all_errors);
        Ok(ExitCode::FAILURE)
    }
}

// ---------------------------------------------------------------------------
// tables
// ---------------------------------------------------------------------------

fn cmd_tables(prefix: &str, dir: &Path) -> Result<ExitCode> {
    let config_file = config_path(dir, prefix);
    let env_file = env_path(dir, prefix);

    if !config_file.exists() {
        return Err(eyre!(
            "Config file not found: {}\n  Run: wos config",
            config_file.display()
        ));
    }
    let config = load_client_config(&config_file)?;

    if !env_file.exists() {
        return Err(eyre!(
            "Env file not found: {}\n  Run `wos config` to generate a template, then fill in credentials",
            env_file.display()
        ));
    }
    let env = parse_env_file(&env_file)?;

    info!(
        prefix,
        operators = config.operators.len(),
        personas = config.personas.len(),
        "generating table specs"
    );

    println!("\nn8n Data Table Setup — {}", config.company_name);
    println!("Prefix: {prefix}");
    println!("Generated: {}", Local::now().format("%Y-%m-%d %H:%M"));
    println!("\nCreate these 3 tables in the n8n UI, then enter the data below.");

    let today = Local::now().date_naive();
    let specs = [
        credentials_table(prefix, &env),
        personas_table(prefix, &config.personas),
        user_counters_table(prefix, &config.operators, today),
    ];

    let total_rows: usize = specs.iter().map(|s| s.rows.len()).sum();
    for spec in &specs {
        print!("{}", render_table(spec));
    }

    println!("\n{}", "━".repeat(60));
    println!("  Done. 3 tables, {total_rows} total rows.");
    println!();

    Ok(ExitCode::SUCCESS)
}

// ---------------------------------------------------------------------------
// properties
// ---------------------------------------------------------------------------

async fn cmd_properties(token: &str, create: bool) -> Result<ExitCode> {
    println!("WOS HubSpot Property Verification");
    println!(
        "Mode: {}",
        if create {
            "CREATE missing"
        } else {
            "verify only (dry run)"
        }
    );

    let client = HubspotClient::new(token)?;
    let report = verify_and_create(&client, create).await;
    print_verify_report(&report);

    let required_total: usize = report.objects.iter().map(|o| o.required).sum();

    println!("\n{}", "─".repeat(50));
    if report.all_ok() {
        println!("  All {required_total} WOS properties are present. ✓");
    } else if !create {
        println!("  Some properties are missing. Re-run with --create to fix.");
    } else {
        println!("  Some properties could not be created. Check errors above.");
    }
    println!();

    Ok(if report.all_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_verify_report(report: &VerifyReport) {
    for object in &report.objects {
        let mut label: Vec<char> = object.object_type.chars().collect();
        if let Some(first) = label.first_mut() {
            *first = first.to_ascii_uppercase();
        }
        let label: String = label.into_iter().collect();

        println!("\n{}", "─".repeat(50));
        println!("  {label} properties ({} required)", object.required);
        println!("{}", "─".repeat(50));

        if let Some(err) = &object.fetch_error {
            println!("  ERROR fetching {} properties: {err}", object.object_type);
            continue;
        }

        for (name, status) in &object.properties {
            match status {
                PropertyStatus::Present => println!("  ✓  {name}"),
                PropertyStatus::Missing => println!("  ✗  {name}  — MISSING"),
                PropertyStatus::Created => {
                    println!("  ✗  {name}  — MISSING");
                    println!("     → created");
                }
                PropertyStatus::CreateFailed { detail } => {
                    println!("  ✗  {name}  — MISSING");
                    println!("     → ERROR: {detail}");
                }
            }
        }
    }
}
