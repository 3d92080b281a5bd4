// src/bootstrap.rs
//! Wires the configured adapters into the use cases for one CLI invocation.

use anyhow::{Context, Result};
use log::info;
use project_radar_domain::RadarConfig;
use project_radar_infra::{
    ExtractorRegistry, IntegrationSettings, LogNotifier, OllamaSummarizer, TeamsWebhookNotifier, WalkScanner,
    load_config,
};
use project_radar_ports::{extraction::DocumentReader, notify::Notifier};
use project_radar_shared_kernel::ModificationTime;
use project_radar_usecase::{AnalyzeFiles, ScanProjects, WeeklyReport};

use crate::{
    cli::{Args, Command},
    presentation,
};

/// Initialises `env_logger` once. `RUST_LOG` wins over the `-v` count.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).try_init();
}

pub fn run(args: Args) -> Result<()> {
    let mut config = load_config(args.config.as_deref()).context("failed to load settings")?;

    match args.command {
        Command::Scan { format, roots } => {
            override_roots(&mut config, roots)?;
            let scanner = WalkScanner::with_default_owner_lookup(config.projects.clone());
            let output = ScanProjects::new(&scanner).run(&config.scan);
            presentation::print_scan(&output, format)
        }
        Command::Extract { paths } => {
            let registry = ExtractorRegistry::new(config.limits);
            for path in &paths {
                presentation::print_extracted(path, &registry.read_content(path));
            }
            Ok(())
        }
        Command::Analyze { paths } => {
            let settings = IntegrationSettings::from_env();
            let registry = ExtractorRegistry::new(config.limits);
            let summarizer = OllamaSummarizer::new(settings.ollama_api_url, settings.ai_model)?;
            let outcome = AnalyzeFiles::new(&registry, &summarizer).run(&paths);
            presentation::print_json(&outcome)
        }
        Command::Report { days, roots, no_analysis } => {
            override_roots(&mut config, roots)?;
            if let Some(days) = days {
                config.report.window_days = days;
                config.validate()?;
            }
            run_report(&config, &IntegrationSettings::from_env(), !no_analysis)
        }
    }
}

fn override_roots(config: &mut RadarConfig, roots: Vec<std::path::PathBuf>) -> Result<()> {
    if !roots.is_empty() {
        config.scan.roots = roots;
        config.validate()?;
    }
    Ok(())
}

fn run_report(config: &RadarConfig, settings: &IntegrationSettings, analyze: bool) -> Result<()> {
    let scanner = WalkScanner::with_default_owner_lookup(config.projects.clone());
    let notifier = build_notifier(settings)?;
    let registry = ExtractorRegistry::new(config.limits);

    let summarizer;
    let mut report = WeeklyReport::new(config, &scanner, notifier.as_ref());
    if analyze {
        summarizer = OllamaSummarizer::new(settings.ollama_api_url.as_str(), settings.ai_model.as_str())?;
        report = report.with_analyzer(AnalyzeFiles::new(&registry, &summarizer));
    }

    let summary = report.run(ModificationTime::now());
    info!(
        "weekly report done: {} sent, {} skipped, {} failed",
        summary.notifications_sent, summary.notifications_skipped, summary.notifications_failed
    );
    presentation::print_json(&summary)
}

fn build_notifier(settings: &IntegrationSettings) -> Result<Box<dyn Notifier>> {
    match settings.teams_webhook() {
        Some(url) => Ok(Box::new(TeamsWebhookNotifier::new(url)?)),
        None => Ok(Box::new(LogNotifier)),
    }
}
