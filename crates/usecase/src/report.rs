// crates/usecase/src/report.rs
use log::{info, warn};
use project_radar_domain::{ActivityGroup, RadarConfig, recent_since};
use project_radar_ports::{
    filesystem::FileScanner,
    notify::{Delivery, Fact, Notification, Notifier},
};
use project_radar_shared_kernel::ModificationTime;

use crate::{
    analyze::AnalyzeFiles,
    dto::{ProjectAnalysis, ReportSummary},
};

pub const NO_UPDATES_TITLE: &str = "Weekly Report";
pub const NO_UPDATES_SUMMARY: &str = "No updates this week.";
pub const STARTED_TITLE: &str = "Weekly Report Started";

/// File names listed per project in the started card before eliding the rest.
const LISTED_FILES: usize = 5;

/// Scans, filters the recent window and reports per project.
pub struct WeeklyReport<'a> {
    config: &'a RadarConfig,
    scanner: &'a dyn FileScanner,
    notifier: &'a dyn Notifier,
    analyzer: Option<AnalyzeFiles<'a>>,
}

impl<'a> WeeklyReport<'a> {
    pub fn new(config: &'a RadarConfig, scanner: &'a dyn FileScanner, notifier: &'a dyn Notifier) -> Self {
        Self { config, scanner, notifier, analyzer: None }
    }

    /// Adds a per-project analysis card after the started card.
    pub fn with_analyzer(mut self, analyzer: AnalyzeFiles<'a>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Runs the job as of `now`. Notification failures are counted, never fatal.
    pub fn run(&self, now: ModificationTime) -> ReportSummary {
        let records = self.scanner.scan(&self.config.scan);
        let activity = recent_since(&records, self.config.report.window(), now);
        let mut summary = ReportSummary {
            recent_projects: activity.project_count(),
            recent_files: activity.file_count(),
            ..ReportSummary::default()
        };

        if activity.is_empty() {
            info!("no files changed in the last {} days", self.config.report.window_days);
            self.send(&Notification::new(NO_UPDATES_TITLE, NO_UPDATES_SUMMARY, Vec::new()), &mut summary);
            return summary;
        }

        let facts = activity.groups().iter().map(|g| Fact::new(g.project(), files_fact(g))).collect();
        let started = Notification::new(
            STARTED_TITLE,
            format!("Detected updates in {} projects. Proceeding with analysis...", activity.project_count()),
            facts,
        );
        self.send(&started, &mut summary);

        let Some(analyzer) = &self.analyzer else {
            return summary;
        };
        for group in activity.groups() {
            let outcome = analyzer.run(group.paths());
            let card = Notification::new(
                format!("Weekly Report: {}", group.project()),
                outcome.text(),
                vec![
                    Fact::new("Files", group.filenames().join(", ")),
                    Fact::new("Latest", group.filenames().first().cloned().unwrap_or_default()),
                ],
            );
            self.send(&card, &mut summary);
            summary.analyses.push(ProjectAnalysis {
                project: group.project().to_string(),
                files: group.filenames().to_vec(),
                outcome,
            });
        }
        summary
    }

    fn send(&self, notification: &Notification, summary: &mut ReportSummary) {
        match self.notifier.notify(notification) {
            Ok(Delivery::Sent) => summary.notifications_sent += 1,
            Ok(Delivery::Skipped) => summary.notifications_skipped += 1,
            Err(err) => {
                warn!("notification '{}' failed: {err}", notification.title);
                summary.notifications_failed += 1;
            }
        }
    }
}

/// `"{n} file(s): a, b, …"`, listing at most a handful of names.
fn files_fact(group: &ActivityGroup) -> String {
    let names = group.filenames();
    let mut listed = names.iter().take(LISTED_FILES).cloned().collect::<Vec<_>>().join(", ");
    if names.len() > LISTED_FILES {
        listed.push_str(", …");
    }
    format!("{} file(s): {listed}", names.len())
}
