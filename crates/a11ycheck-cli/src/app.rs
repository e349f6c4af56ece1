//! CLI application logic.
//!
//! Three subcommands, all built on the configuration engine: `lint` checks a
//! configuration file and summarizes it, `plan` shows which standards would
//! run for each page, `standards` lists the catalog. Every command can emit
//! text or JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use a11ycheck_config::{ConfigError, Pattern, Settings, DEFAULT_CONFIG_FILE};
use a11ycheck_standards::{Catalog, Standard};

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tooling
    Json,
}

#[derive(Parser)]
#[command(name = "a11ycheck")]
#[command(version, about = "Accessibility checks for web pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a configuration file and summarize what it declares
    Lint {
        /// Configuration file to check
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show which standards would run for each configured page
    Plan {
        /// Page URLs to plan with default settings, skipping the
        /// configuration file
        urls: Vec<String>,

        /// Configuration file to read when no URLs are given
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the standards catalog
    Standards {
        /// Only list standards matching this pattern (`/.../` for a regex)
        #[arg(short, long)]
        matching: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Parses arguments and dispatches to the selected command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Lint { config, format } => lint_command(&config, format),
        Commands::Plan { urls, config, format } => plan_command(&urls, &config, format),
        Commands::Standards { matching, format } => {
            standards_command(matching.as_deref(), format)
        }
    }
}

/// Checks a configuration file and summarizes what it declares.
pub fn lint_command(config: &Path, format: OutputFormat) -> Result<()> {
    let settings = match a11ycheck_config::parse_file(config) {
        Ok(settings) => settings,
        Err(error) => {
            report_config_error(&error, format)?;
            std::process::exit(1);
        }
    };

    let skip_patterns: usize = settings
        .pages()
        .iter()
        .map(|page| page.skipped_standards().len())
        .sum();

    match format {
        OutputFormat::Json => {
            let summary = LintSummary {
                file: config.display().to_string(),
                pages: settings.pages().len(),
                skip_patterns,
                before_all_hooks: settings.before_all_hooks().len(),
                after_all_hooks: settings.after_all_hooks().len(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
            );
        }
        OutputFormat::Text => {
            println!("✓ {} is a valid configuration", config.display());
            println!("  pages: {}", settings.pages().len());
            println!("  skip patterns: {skip_patterns}");
            println!("  before_all hooks: {}", settings.before_all_hooks().len());
            println!("  after_all hooks: {}", settings.after_all_hooks().len());
        }
    }
    Ok(())
}

/// Shows which standards would run for each page.
///
/// With URLs the configuration file is ignored and every page gets default
/// settings; without URLs the configuration file decides.
pub fn plan_command(urls: &[String], config: &Path, format: OutputFormat) -> Result<()> {
    let settings = if urls.is_empty() {
        match a11ycheck_config::parse_file(config) {
            Ok(settings) => settings,
            Err(error) => {
                report_config_error(&error, format)?;
                std::process::exit(1);
            }
        }
    } else {
        a11ycheck_config::for_urls(urls.iter().cloned())
    };

    let catalog = Catalog::with_defaults();
    let plan = build_plan(&settings, &catalog);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?
            );
        }
        OutputFormat::Text => print_plan(&plan),
    }
    Ok(())
}

/// Lists the standards catalog, optionally filtered by a pattern.
pub fn standards_command(matching: Option<&str>, format: OutputFormat) -> Result<()> {
    let catalog = Catalog::with_defaults();
    let pattern = matching.map(cli_pattern).transpose()?;
    let selected: Vec<&dyn Standard> = match &pattern {
        Some(pattern) => catalog.matching(pattern),
        None => catalog.iter().collect(),
    };

    match format {
        OutputFormat::Json => {
            let rows: Vec<StandardRow> = selected
                .iter()
                .map(|standard| StandardRow {
                    name: standard.name(),
                    description: standard.description(),
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&rows).context("Failed to serialize standards")?
            );
        }
        OutputFormat::Text => {
            println!("{} standard(s):", selected.len());
            for standard in &selected {
                println!("  {:<26} {}", standard.name(), standard.description());
            }
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct LintSummary {
    file: String,
    pages: usize,
    skip_patterns: usize,
    before_all_hooks: usize,
    after_all_hooks: usize,
}

#[derive(Debug, Serialize)]
struct PagePlan {
    url: String,
    skipped_standards: Vec<String>,
    standards: Vec<&'static str>,
}

fn build_plan(settings: &Settings, catalog: &Catalog) -> Vec<PagePlan> {
    settings
        .pages()
        .iter()
        .map(|page| PagePlan {
            url: page.url().to_string(),
            skipped_standards: page
                .skipped_standards()
                .iter()
                .map(|pattern| pattern.to_string())
                .collect(),
            standards: catalog
                .for_page(page)
                .iter()
                .map(|standard| standard.name())
                .collect(),
        })
        .collect()
}

fn print_plan(plan: &[PagePlan]) {
    if plan.is_empty() {
        println!("No pages configured");
        return;
    }
    println!("Plan for {} page(s):", plan.len());
    for page in plan {
        println!();
        println!("{}", page.url);
        if !page.skipped_standards.is_empty() {
            println!("  skip: {}", page.skipped_standards.join(", "));
        }
        for name in &page.standards {
            println!("  run:  {name}");
        }
    }
}

#[derive(Debug, Serialize)]
struct StandardRow {
    name: &'static str,
    description: &'static str,
}

/// `/.../` arguments are patterns, anything else matches as a substring.
fn cli_pattern(raw: &str) -> Result<Pattern> {
    if raw.len() >= 2 && raw.starts_with('/') && raw.ends_with('/') {
        let source = &raw[1..raw.len() - 1];
        Pattern::regex(source).with_context(|| format!("Invalid pattern: {raw}"))
    } else {
        Ok(Pattern::from(raw))
    }
}

fn report_config_error(error: &ConfigError, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let payload = match error {
                ConfigError::Parse(parse) => serde_json::json!({
                    "error": "parse",
                    "message": parse.message(),
                    "diagnostic": parse,
                }),
                ConfigError::MissingConfigurationFile { path } => serde_json::json!({
                    "error": "missing_configuration_file",
                    "path": path.display().to_string(),
                }),
                ConfigError::Io { path, .. } => serde_json::json!({
                    "error": "io",
                    "path": path.display().to_string(),
                    "message": error.to_string(),
                }),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload)
                    .context("Failed to serialize error report")?
            );
        }
        OutputFormat::Text => {
            eprintln!("{error}");
        }
    }
    Ok(())
}
