use std::fmt;

mod discord;

use actix_web::http::StatusCode;
use secstr::SecUtf8;

use self::discord::Discord;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("destination webhook URL is not configured")]
    NotConfigured,
    #[error("failed to send request to Discord: {0}")]
    Request(String),
    #[error("Discord returned status {0}")]
    Status(StatusCode),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub webhook_url: Option<SecUtf8>,
}

impl Config {
    pub fn is_enabled(&self) -> bool {
        self.webhook_url
            .as_ref()
            .map_or(false, |url| !url.unsecure().is_empty())
    }
}

/// Relays rendered messages to the configured chat webhook.
///
/// Holds an `awc` client, so one is built per server worker.
pub struct Notifier {
    discord: Option<Discord>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("enabled", &self.discord.is_some())
            .finish()
    }
}

impl Notifier {
    pub fn new(config: Config) -> Self {
        let enabled = config.is_enabled();
        let discord = config
            .webhook_url
            .filter(|_| enabled)
            .map(|url| Discord::new(awc::Client::new(), url));
        Self { discord }
    }

    pub async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        match &self.discord {
            Some(discord) => discord.send(text).await,
            None => Err(NotifyError::NotConfigured),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: Option<&str>) -> Config {
        Config {
            webhook_url: url.map(|url| SecUtf8::from(url)),
        }
    }

    #[test]
    fn empty_url_is_disabled() {
        assert!(!config(None).is_enabled());
        assert!(!config(Some("")).is_enabled());
        assert!(config(Some("http://127.0.0.1:1/hook")).is_enabled());
    }

    #[actix_rt::test]
    async fn unset_destination_always_fails() {
        for url in &[None, Some("")] {
            let notifier = Notifier::new(config(*url));
            match notifier.notify("hello").await {
                Err(NotifyError::NotConfigured) => {}
                other => panic!("unexpected result {:?}", other),
            }
        }
    }

    #[test]
    fn debug_output_hides_url() {
        let config = config(Some("https://discord.test/api/webhooks/1/secret-token"));
        assert!(!format!("{:?}", config).contains("secret-token"));
    }
}
