//! progress-bar-feature - resolve progress bar features from scenario files
//!
//! A scenario bundles a feature configuration with the entity state to
//! resolve it against. Useful for checking a card configuration without a
//! running dashboard.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser as ClapParser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

use progress_bar_feature::config::validator::validate_feature_config;
use progress_bar_feature::frontend::{anchor_patch_plan, style_declaration};
use progress_bar_feature::{
    Clock, CollectedDiagnostics, Diagnostics, FixedClock, ProgressBarFeature, RawFeatureConfig,
    Scenario, SystemClock, TracingDiagnostics,
};

#[derive(ClapParser)]
#[command(name = "progress-bar-feature")]
#[command(about = "Resolve dashboard progress bar features", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a scenario and print the render state
    Resolve {
        /// Scenario file (.toml or .json)
        #[arg(value_name = "FILE")]
        scenario: PathBuf,

        /// Resolve as if it were this instant (RFC 3339) instead of now
        #[arg(long, value_name = "RFC3339")]
        now: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        output: OutputFormat,

        /// Exit non-zero if any warning was raised
        #[arg(long)]
        strict: bool,
    },

    /// Check a scenario's feature configuration without resolving it
    Validate {
        /// Scenario file (.toml or .json)
        #[arg(value_name = "FILE")]
        scenario: PathBuf,
    },

    /// Print the stub configuration offered to the feature picker
    Stub,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Css,
}

fn parse_now(now: Option<&str>) -> Result<Box<dyn Clock>> {
    match now {
        Some(text) => {
            let instant = DateTime::parse_from_rfc3339(text)
                .with_context(|| format!("Invalid --now instant: {}", text))?;
            Ok(Box::new(FixedClock::at(instant.with_timezone(&Utc))))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

fn resolve(scenario_path: PathBuf, now: Option<String>, output: OutputFormat, strict: bool) -> Result<()> {
    let scenario = Scenario::load_from_file(&scenario_path)?;
    let feature = ProgressBarFeature::from_raw(scenario.feature.as_ref())?;
    let clock = parse_now(now.as_deref())?;

    // Strict mode needs the warnings afterwards; otherwise just log them
    let mut collected = CollectedDiagnostics::echoing();
    let mut logged = TracingDiagnostics;
    let diag: &mut dyn Diagnostics = if strict { &mut collected } else { &mut logged };
    let state = feature.resolve(&scenario.entity, &scenario.states, clock.as_ref(), diag);

    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&state).context("Failed to serialize render state")?;
            println!("{}", json);
        }
        OutputFormat::Css => {
            let decl = style_declaration(&state);
            println!("class=\"{}\"", decl.class_attr());
            println!("style=\"{}\"", decl.style);
            if let Some(text_classes) = decl.text_classes {
                println!("text class=\"{}\": {}", text_classes, state.text);
            }
            for patch in anchor_patch_plan(&state) {
                println!("patch {} {}: {:?}", patch.surface.selector(), patch.property, patch.value);
            }
        }
    }

    if strict && !collected.is_empty() {
        anyhow::bail!("{} warning(s) raised while resolving", collected.warnings.len());
    }

    Ok(())
}

fn validate(scenario_path: PathBuf) -> Result<()> {
    println!("Validating scenario: {:?}", scenario_path);
    let scenario = Scenario::load_from_file(&scenario_path)?;

    let Some(feature) = scenario.feature.as_ref() else {
        eprintln!("✗ Error: scenario has no [feature] configuration");
        std::process::exit(1);
    };

    let result = validate_feature_config(feature);
    for issue in result.errors() {
        eprintln!("✗ Error: {}", issue.message());
    }
    for issue in result.warnings() {
        println!("⚠ Warning: {}", issue.message());
    }

    if result.issues.is_empty() {
        println!("✓ Feature configuration is valid with no issues");
    } else if result.has_warnings() {
        println!("⚠ Found {} warning(s)", result.warnings().len());
    }

    if result.has_errors() {
        eprintln!("\n✗ Found {} error(s)", result.errors().len());
        std::process::exit(1);
    }

    Ok(())
}

fn stub() -> Result<()> {
    let stub = toml::to_string_pretty(&RawFeatureConfig::stub()).context("Failed to serialize stub")?;
    print!("{}", stub);
    Ok(())
}

fn main() -> Result<()> {
    // Output goes to stdout, so log to stderr (RUST_LOG controls the level)
    let stderr = std::io::stderr();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_ansi(stderr.is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            scenario,
            now,
            output,
            strict,
        } => resolve(scenario, now, output, strict),
        Commands::Validate { scenario } => validate(scenario),
        Commands::Stub => stub(),
    }
}
