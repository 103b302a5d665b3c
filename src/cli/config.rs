use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::form::form_model::{Language, Tool};
use crate::service::service_model::{BACKEND_URL_ENV, ServiceConfig, resolve_base_url};

pub const DEFAULT_CONFIG_PATH: &str = "test-automation-generator.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "test-automation-generator",
    version,
    about = "Generate browser test scripts from natural-language test steps"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Base URL of the generation service
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Path to config file (default: test-automation-generator.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit the form to the generation service and print the result
    Generate {
        #[command(flatten)]
        form: FormArgs,

        /// Which generator answers the request
        #[arg(long, value_enum, default_value_t = BackendKind::Http)]
        backend: BackendKind,

        /// How the result is printed
        #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
        format: OutputFormat,

        /// Copy the generated code to the clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },

    /// Check whether the generation service is reachable
    Health,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// The remote generation service
    Http,
    /// The built-in offline generator
    Mock,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    Console,
    /// The presentation view as one JSON document
    Json,
}

/// The form fields, as flags.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Page URL, or raw HTML markup
    #[arg(long, default_value = "")]
    pub url: String,

    /// Alternate raw-markup field
    #[arg(long, default_value = "")]
    pub html: String,

    /// Test case name
    #[arg(long, default_value = "")]
    pub test_case: String,

    /// Test data, free-form key/value text
    #[arg(long, default_value = "")]
    pub test_data: String,

    /// Test steps, one per line
    #[arg(long, default_value = "", conflicts_with = "steps_file")]
    pub test_steps: String,

    /// Read the test steps from a file instead
    #[arg(long)]
    pub steps_file: Option<String>,

    /// Java, Python, JavaScript or C#
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Selenium, Playwright or Cypress
    #[arg(short, long)]
    pub tool: Option<Tool>,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `test-automation-generator.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub defaults: FormDefaults,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: Option<String>,
}

/// Initial choices for the language and tool selectors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormDefaults {
    pub language: Option<Language>,
    pub tool: Option<Tool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    /// JSONL file receiving one line per submission event
    pub path: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("ignoring malformed config '{}': {}", config_path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Service config resolution
// ============================================================================

/// Resolve the service base URL: CLI > config file > env > default.
pub fn build_service_config(
    cli_url: Option<&str>,
    config_url: Option<&str>,
    env_url: Option<String>,
) -> ServiceConfig {
    let explicit = cli_url
        .or(config_url)
        .map(str::trim)
        .filter(|u| !u.is_empty());

    match explicit {
        Some(url) => ServiceConfig::new(url),
        None => ServiceConfig::new(resolve_base_url(env_url)),
    }
}

/// Same as `build_service_config`, reading the environment.
pub fn service_config_from(cli: &Cli, config: &AppConfig) -> ServiceConfig {
    build_service_config(
        cli.backend_url.as_deref(),
        config.backend.url.as_deref(),
        std::env::var(BACKEND_URL_ENV).ok(),
    )
}
