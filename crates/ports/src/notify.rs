// crates/ports/src/notify.rs
use project_radar_shared_kernel::InfraResult;
use serde::{Deserialize, Serialize};

/// One `(name, value)` line of a notification card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub name: String,
    pub value: String,
}

impl Fact {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// Message handed to the notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub summary: String,
    pub facts: Vec<Fact>,
}

impl Notification {
    pub fn new(title: impl Into<String>, summary: impl Into<String>, facts: Vec<Fact>) -> Self {
        Self { title: title.into(), summary: summary.into(), facts }
    }
}

/// What happened to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    Sent,
    /// No channel configured; the message was only logged.
    Skipped,
}

/// Port for the chat notification channel.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification) -> InfraResult<Delivery>;
}
