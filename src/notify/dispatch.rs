use serde::Deserialize;
use tracing::{debug, warn};

use super::format::EmailMessage;

const RESEND_URL: &str = "https://api.resend.com/emails";
const DEFAULT_FROM: &str = "onboarding@resend.dev";

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notifications are not configured")]
    Disabled,

    #[error("Email request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Email provider rejected the message: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Where notification emails go and how they are sent.
#[derive(Debug, Clone, Default)]
pub struct NotifyConfig {
    pub api_key: Option<String>,
    pub to: Option<String>,
    pub from: String,
}

impl NotifyConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_var("RESEND_API_KEY"),
            to: non_empty_var("NOTIFICATION_EMAIL"),
            from: non_empty_var("NOTIFICATION_FROM").unwrap_or_else(|| DEFAULT_FROM.to_string()),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: Option<String>,
}

/// Sends notification emails through the Resend HTTP API.
///
/// Without an API key and a recipient the notifier is disabled: messages are
/// logged and dropped.
#[derive(Clone)]
pub struct Notifier {
    client: reqwest::Client,
    config: NotifyConfig,
}

impl Notifier {
    pub fn new(config: NotifyConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn disabled() -> Self {
        Self::new(NotifyConfig::default())
    }

    pub fn is_enabled(&self) -> bool {
        self.config.api_key.is_some() && self.config.to.is_some()
    }

    /// Send one message and return the provider's message id.
    pub async fn send(&self, message: &EmailMessage) -> Result<Option<String>, NotifyError> {
        let (Some(api_key), Some(to)) = (&self.config.api_key, &self.config.to) else {
            return Err(NotifyError::Disabled);
        };

        debug!("Sending notification: {}", message.subject);

        let response = self
            .client
            .post(RESEND_URL)
            .bearer_auth(api_key)
            .json(&serde_json::json!({
                "from": self.config.from,
                "to": [to],
                "subject": message.subject,
                "html": message.html,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let sent: SendResponse = response.json().await?;
        Ok(sent.id)
    }

    /// Fire-and-forget send. Failures are logged and never reach the caller.
    pub fn send_in_background(&self, message: EmailMessage) {
        if !self.is_enabled() {
            debug!("Notifications disabled, skipping: {}", message.subject);
            return;
        }

        let notifier = self.clone();
        actix_web::rt::spawn(async move {
            if let Err(e) = notifier.send(&message).await {
                warn!("Failed to send notification '{}': {e}", message.subject);
            }
        });
    }
}
