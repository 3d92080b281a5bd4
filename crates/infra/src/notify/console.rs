// crates/infra/src/notify/console.rs
use log::{info, warn};
use project_radar_ports::notify::{Delivery, Notification, Notifier};
use project_radar_shared_kernel::InfraResult;

/// Fallback used when no webhook is configured: the message only reaches the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) -> InfraResult<Delivery> {
        warn!("Teams webhook not configured, skipping notification '{}'", notification.title);
        info!("{}: {}", notification.title, notification.summary);
        for fact in &notification.facts {
            info!("  {}: {}", fact.name, fact.value);
        }
        Ok(Delivery::Skipped)
    }
}
