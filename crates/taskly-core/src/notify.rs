//! Notification dispatch.
//!
//! An ordered set of notifiers fans a text message out per user action. The
//! shipped implementation delivers email through a Mailgun-style
//! transactional HTTP API.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::EmailConfig;
use crate::error::TasklyResult;

/// Delivers a text message to an external channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> TasklyResult<()>;
}

/// Fans a message out to every registered notifier.
///
/// Notifiers are registered once at startup and invoked in registration
/// order. The dispatcher does not catch notifier failures: the first error
/// aborts the fan-out and propagates to the caller.
#[derive(Default)]
pub struct NotificationManager {
    observers: Vec<Box<dyn Notifier>>,
}

impl NotificationManager {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a notifier. Later registrations are notified later.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.observers.push(notifier);
    }

    /// Whether any notifiers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Invoke each registered notifier with `message`, in order.
    pub async fn notify(&self, message: &str) -> TasklyResult<()> {
        for observer in &self.observers {
            observer.notify(message).await?;
        }
        Ok(())
    }
}

/// Request timeout for the outbound email POST.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Subject line used for every notification email.
const EMAIL_SUBJECT: &str = "Taskly Notification";

/// Sends notification emails via HTTP POST.
pub struct EmailNotifier {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    domain: String,
    sender: String,
    recipient: String,
}

impl EmailNotifier {
    /// Create a notifier from email settings.
    pub fn new(config: &EmailConfig) -> Self {
        let sender = config
            .sender
            .clone()
            .unwrap_or_else(|| format!("Taskly <mailgun@{}>", config.domain));

        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            domain: config.domain.clone(),
            sender,
            recipient: config.recipient.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}/messages", self.api_base, self.domain)
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    /// Best-effort send: a non-success HTTP status is only logged, while a
    /// transport error (connect failure, timeout) propagates.
    async fn notify(&self, message: &str) -> TasklyResult<()> {
        let url = self.endpoint();

        debug!(url = %url, to = %self.recipient, "Sending email notification");

        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.api_key))
            .form(&[
                ("from", self.sender.as_str()),
                ("to", self.recipient.as_str()),
                ("subject", EMAIL_SUBJECT),
                ("text", message),
            ])
            .send()
            .await?;

        if response.status().is_success() {
            debug!(status = %response.status(), "Email notification sent");
        } else {
            warn!(status = %response.status(), "Email notification failed");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TasklyError;
    use std::sync::{Arc, Mutex};

    /// Appends a tagged entry to a shared log on every call.
    struct Recording {
        tag: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Notifier for Recording {
        async fn notify(&self, message: &str) -> TasklyResult<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}: {}", self.tag, message));
            Ok(())
        }
    }

    struct Failing;

    #[async_trait]
    impl Notifier for Failing {
        async fn notify(&self, _message: &str) -> TasklyResult<()> {
            Err(TasklyError::validation("notifier down"))
        }
    }

    #[tokio::test]
    async fn test_notifies_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut manager = NotificationManager::new();
        manager.register(Box::new(Recording { tag: "first", log: log.clone() }));
        manager.register(Box::new(Recording { tag: "second", log: log.clone() }));

        manager.notify("hello").await.unwrap();

        let entries = log.lock().unwrap();
        assert_eq!(*entries, ["first: hello", "second: hello"]);
    }

    #[tokio::test]
    async fn test_failure_aborts_fanout() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut manager = NotificationManager::new();
        manager.register(Box::new(Failing));
        manager.register(Box::new(Recording { tag: "late", log: log.clone() }));

        assert!(manager.notify("hello").await.is_err());
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_dispatcher_is_fine() {
        let manager = NotificationManager::new();
        assert!(manager.is_empty());
        manager.notify("nobody listening").await.unwrap();
    }

    #[test]
    fn test_email_endpoint() {
        let notifier = EmailNotifier::new(&EmailConfig {
            api_key: "key-test".to_string(),
            domain: "sandbox.example.org".to_string(),
            recipient: "user@example.com".to_string(),
            sender: None,
            api_base: "https://api.mailgun.net/v3/".to_string(),
        });

        assert_eq!(
            notifier.endpoint(),
            "https://api.mailgun.net/v3/sandbox.example.org/messages"
        );
        assert_eq!(notifier.sender, "Taskly <mailgun@sandbox.example.org>");
    }
}
