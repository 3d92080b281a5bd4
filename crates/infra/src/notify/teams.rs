// crates/infra/src/notify/teams.rs
use std::time::Duration;

use chrono::{DateTime, Local};
use log::debug;
use project_radar_ports::notify::{Delivery, Notification, Notifier};
use project_radar_shared_kernel::{InfraResult, InfrastructureError, value_objects::DISPLAY_FORMAT};
use reqwest::blocking::Client;
use serde_json::{Value, json};

const ENDPOINT: &str = "Teams webhook";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Posts Adaptive Cards to a Microsoft Teams incoming webhook.
pub struct TeamsWebhookNotifier {
    client: Client,
    webhook_url: String,
}

impl TeamsWebhookNotifier {
    pub fn new(webhook_url: impl Into<String>) -> InfraResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| InfrastructureError::Http { endpoint: ENDPOINT.to_string(), details: e.to_string() })?;
        Ok(Self { client, webhook_url: webhook_url.into() })
    }
}

impl Notifier for TeamsWebhookNotifier {
    fn notify(&self, notification: &Notification) -> InfraResult<Delivery> {
        let payload = card_payload(notification, Local::now());
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .map_err(|e| InfrastructureError::Http { endpoint: ENDPOINT.to_string(), details: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(InfrastructureError::UnexpectedResponse {
                endpoint: ENDPOINT.to_string(),
                details: format!("HTTP {status}"),
            });
        }
        debug!("delivered '{}' to Teams", notification.title);
        Ok(Delivery::Sent)
    }
}

/// Adaptive Card 1.4 message for `notification`, stamped with `sent_at`.
pub fn card_payload(notification: &Notification, sent_at: DateTime<Local>) -> Value {
    let facts: Vec<Value> =
        notification.facts.iter().map(|f| json!({ "title": f.name, "value": f.value })).collect();

    json!({
        "type": "message",
        "attachments": [{
            "contentType": "application/vnd.microsoft.card.adaptive",
            "content": {
                "$schema": "http://adaptivecards.io/schemas/adaptive-card.json",
                "type": "AdaptiveCard",
                "version": "1.4",
                "body": [
                    { "type": "TextBlock", "text": notification.title, "weight": "Bolder", "size": "Medium", "color": "Accent" },
                    { "type": "TextBlock", "text": format!("Time: {}", sent_at.format(DISPLAY_FORMAT)), "isSubtle": true, "size": "Small" },
                    { "type": "FactSet", "facts": facts },
                    { "type": "TextBlock", "text": "AI Analysis Summary:", "weight": "Bolder", "size": "Small", "separator": true },
                    { "type": "TextBlock", "text": notification.summary, "wrap": true, "size": "Small" }
                ]
            }
        }]
    })
}
