// tests/integration/end_to_end.rs
use std::{path::Path, sync::Mutex};

use project_radar_domain::{ExtractionLimits, RadarConfig};
use project_radar_infra::{ExtractorRegistry, WalkScanner};
use project_radar_ports::{
    analysis::Summarizer,
    filesystem::OwnerLookup,
    notify::{Delivery, Notification, Notifier},
};
use project_radar_shared_kernel::{InfraResult, ModificationTime};
use project_radar_usecase::{AnalyzeFiles, ScanProjects, WeeklyReport};

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

struct FixedOwner;

impl OwnerLookup for FixedOwner {
    fn owner_of(&self, _path: &Path) -> InfraResult<String> {
        Ok("alice".into())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) -> InfraResult<Delivery> {
        self.sent.lock().unwrap().push(notification.clone());
        Ok(Delivery::Sent)
    }
}

/// プロンプトをそのまま記録して固定の要約を返す。
#[derive(Default)]
struct CapturingSummarizer {
    prompts: Mutex<Vec<String>>,
}

impl Summarizer for CapturingSummarizer {
    fn summarize(&self, prompt: &str) -> InfraResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok("all good".into())
    }
}

fn config_for(root: &Path) -> RadarConfig {
    let mut config = RadarConfig::default();
    config.scan.roots = vec![root.to_path_buf()];
    config
}

#[test]
fn scan_then_extract_pipeline() {
    let ws = TempWorkspace::new();
    ws.write("Gamma/monitoring_plan.md", "cpu dashboards");
    ws.write("Gamma/.git/config", "ignored");
    ws.write("Gamma/empty.txt", "");

    let config = config_for(ws.path());
    let scanner = WalkScanner::new(config.projects.clone(), Box::new(FixedOwner));
    let output = ScanProjects::new(&scanner).run(&config.scan);

    assert_eq!(output.files.len(), 1);
    let record = &output.files[0];
    assert_eq!(record.filename(), "monitoring_plan.md");
    assert_eq!(record.project(), "Project-Gamma");
    assert_eq!(record.owner(), "", "owner lookup only applies to office documents");

    let registry = ExtractorRegistry::new(ExtractionLimits { max_chars: 3, ..ExtractionLimits::default() });
    let summarizer = CapturingSummarizer::default();
    let outcome = AnalyzeFiles::new(&registry, &summarizer).run(&[record.to_path_buf()]);

    assert!(outcome.is_success());
    let prompts = summarizer.prompts.lock().unwrap();
    assert!(prompts[0].ends_with("=== File: monitoring_plan.md ===\ncpu\n\n"), "{}", prompts[0]);
}

#[test]
fn weekly_report_sends_started_and_project_cards() {
    let ws = TempWorkspace::new();
    ws.write("beta/notes.txt", "beta notes");
    ws.write("misc/readme.md", "misc");

    let config = config_for(ws.path());
    let scanner = WalkScanner::new(config.projects.clone(), Box::new(FixedOwner));
    let notifier = RecordingNotifier::default();
    let registry = ExtractorRegistry::new(config.limits);
    let summarizer = CapturingSummarizer::default();

    let summary = WeeklyReport::new(&config, &scanner, &notifier)
        .with_analyzer(AnalyzeFiles::new(&registry, &summarizer))
        .run(ModificationTime::now());

    assert_eq!(summary.recent_files, 2);
    assert_eq!(summary.notifications_sent, 1 + summary.recent_projects);
    assert_eq!(summary.notifications_failed, 0);

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent[0].title, "Weekly Report Started");
    assert!(sent.iter().any(|n| n.title == "Weekly Report: Project-Beta" && n.summary == "all good"));
    assert!(summary.analyses.iter().all(|a| a.outcome.is_success()));
}

#[test]
fn weekly_report_without_recent_files_sends_no_updates() {
    let ws = TempWorkspace::new();
    let config = config_for(&ws.path().join("nothing-here"));
    let scanner = WalkScanner::new(config.projects.clone(), Box::new(FixedOwner));
    let notifier = RecordingNotifier::default();

    let summary = WeeklyReport::new(&config, &scanner, &notifier).run(ModificationTime::now());

    assert_eq!(summary.recent_projects, 0);
    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].summary, "No updates this week.");
}
