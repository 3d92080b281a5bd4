// crates/infra/src/notify.rs
//! Notification channel adapters.

mod console;
mod teams;

pub use console::LogNotifier;
pub use teams::{TeamsWebhookNotifier, card_payload};
