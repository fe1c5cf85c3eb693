//! Catalog Translator CLI.
//!
//! Thin frontend over the core library: pick fields, pick languages, run
//! the translation pass with console progress. Exit codes follow the
//! terminal report: 0 success, 1 error, 2 stopped by user.

mod config;
mod observer;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use catalog_translator_core::services::{FieldDetectionService, TranslationRunner};
use catalog_translator_core::types::{
    FieldDescriptor, FieldLocator, LanguagePair, RunOptions, RunReport, RunRequest,
};
use catalog_translator_core::ServiceContext;
use catalog_translator_provider::{
    create_provider, get_all_provider_metadata, ProviderCredentials,
};

use config::AppConfig;
use observer::ConsoleObserver;

#[derive(Parser)]
#[command(
    name = "catalog-translator",
    version,
    about = "Translate product-catalog XML files"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect translatable fields in a catalog
    Fields {
        /// Input XML file
        input: PathBuf,
    },
    /// Translate selected fields into a new catalog copy
    Translate {
        /// Input XML file
        input: PathBuf,
        /// Output XML file
        output: PathBuf,
        /// Source language code, or "auto"
        #[arg(long)]
        source: Option<String>,
        /// Target language code
        #[arg(long)]
        target: Option<String>,
        /// Field locator to translate, e.g. "//category" (repeatable);
        /// all detected fields when omitted
        #[arg(long = "field")]
        fields: Vec<String>,
        /// Provider id (google, deepl); overrides the configured one
        #[arg(long)]
        provider: Option<String>,
        /// Milliseconds to wait between records
        #[arg(long)]
        pacing_ms: Option<u64>,
    },
    /// List available translation providers
    Providers,
    /// Write a starter config file with the current defaults
    ConfigInit,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command {
        Command::Fields { input } => {
            run_fields(&input);
            Ok(())
        }
        Command::Translate {
            input,
            output,
            source,
            target,
            fields,
            provider,
            pacing_ms,
        } => {
            let exit = run_translate(
                &config, input, output, source, target, &fields, provider, pacing_ms,
            )
            .await?;
            std::process::exit(exit);
        }
        Command::Providers => {
            run_providers();
            Ok(())
        }
        Command::ConfigInit => {
            config.save()?;
            println!("Config file written");
            Ok(())
        }
    }
}

fn run_fields(input: &Path) {
    let fields = FieldDetectionService::detect_fields(input);
    if fields.is_empty() {
        println!("No fields detected in XML");
        return;
    }
    println!("Detected {} fields in XML", fields.len());
    println!("{:<24} {:<44} Sample", "Field Name", "Locator");
    for field in &fields {
        println!(
            "{:<24} {:<44} {}",
            field.name,
            field.locator.to_string(),
            field.sample
        );
    }
}

fn run_providers() {
    for meta in get_all_provider_metadata() {
        println!("{:<8} {}: {}", meta.id, meta.name, meta.description);
        for field in &meta.required_fields {
            println!("         requires: {}", field.label);
        }
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_translate(
    config: &AppConfig,
    input: PathBuf,
    output: PathBuf,
    source: Option<String>,
    target: Option<String>,
    field_locators: &[String],
    provider_flag: Option<String>,
    pacing_ms: Option<u64>,
) -> Result<i32> {
    let languages = LanguagePair::new(
        source.unwrap_or_else(|| config.default_source.clone()),
        target.unwrap_or_else(|| config.default_target.clone()),
    );

    let fields = select_fields(&input, field_locators)?;
    let credentials = resolve_credentials(provider_flag.as_deref(), config)?;
    let provider = create_provider(credentials)?;

    let options = RunOptions {
        record_pacing: Duration::from_millis(pacing_ms.unwrap_or(config.record_pacing_ms)),
    };

    println!(
        "Starting translation from {} to {}",
        languages.source, languages.target
    );

    let runner = TranslationRunner::spawn(
        Arc::new(ServiceContext::with_options(provider, options)),
        RunRequest {
            input_path: input,
            output_path: output,
            fields,
            languages,
        },
        Arc::new(ConsoleObserver),
    );

    // First Ctrl-C requests a cooperative stop, the second aborts outright.
    let control = runner.control();
    tokio::spawn(async move {
        let mut interrupts = 0u32;
        loop {
            if tokio::signal::ctrl_c().await.is_err() {
                return;
            }
            interrupts += 1;
            if interrupts == 1 {
                eprintln!("Stopping translation... Please wait (Ctrl-C again to abort)");
                control.stop();
            } else {
                std::process::exit(130);
            }
        }
    });

    let report = runner.join().await;
    println!("{}", report.message());
    Ok(match report {
        RunReport::Success { .. } => 0,
        RunReport::Stopped { .. } => 2,
        RunReport::Error { .. } => 1,
    })
}

/// Fields for the run: the explicit `--field` locators when given, otherwise
/// every detected field, deduplicated by locator.
fn select_fields(input: &Path, locators: &[String]) -> Result<Vec<FieldDescriptor>> {
    if !locators.is_empty() {
        return locators
            .iter()
            .map(|raw| {
                let locator: FieldLocator = raw
                    .parse()
                    .map_err(|e| anyhow::anyhow!("bad --field value {raw:?}: {e}"))?;
                Ok(descriptor_from_locator(locator))
            })
            .collect();
    }

    let detected = dedup_by_locator(FieldDetectionService::detect_fields(input));
    if detected.is_empty() {
        bail!("no translatable fields detected in {}", input.display());
    }
    Ok(detected)
}

fn descriptor_from_locator(locator: FieldLocator) -> FieldDescriptor {
    let name = match &locator {
        FieldLocator::DirectChild(tag) | FieldLocator::Repeating(tag) => tag.clone(),
        FieldLocator::AttributeLabel(attr_name) => format!("attribute/{attr_name}"),
    };
    FieldDescriptor {
        name,
        locator,
        sample: String::new(),
    }
}

/// Detection reports duplicates count-as-found; a run wants each locator once.
fn dedup_by_locator(fields: Vec<FieldDescriptor>) -> Vec<FieldDescriptor> {
    let mut seen = HashSet::new();
    fields
        .into_iter()
        .filter(|field| seen.insert(field.locator.clone()))
        .collect()
}

fn resolve_credentials(flag: Option<&str>, config: &AppConfig) -> Result<ProviderCredentials> {
    match flag {
        None => Ok(config.credentials.clone()),
        Some("google") => Ok(ProviderCredentials::Google {}),
        Some("deepl") => match &config.credentials {
            ProviderCredentials::Deepl { .. } => Ok(config.credentials.clone()),
            _ => bail!("deepl needs an API key; add deepl credentials to the config file"),
        },
        Some(other) => bail!("unknown provider {other:?} (try: google, deepl)"),
    }
}
