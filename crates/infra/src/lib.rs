// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analysis;
pub mod extract;
pub mod filesystem;
pub mod notify;
pub mod persistence;
pub mod platform;
pub mod settings;

pub use analysis::OllamaSummarizer;
pub use extract::ExtractorRegistry;
pub use filesystem::WalkScanner;
pub use notify::{LogNotifier, TeamsWebhookNotifier};
pub use platform::default_owner_lookup;
pub use settings::{IntegrationSettings, load_config};
