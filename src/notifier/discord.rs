use actix_web::http::StatusCode;
use secstr::SecUtf8;

use super::NotifyError;

#[derive(Debug, serde::Serialize)]
struct ExecuteWebhook<'a> {
    content: &'a str,
}

/// Discord incoming webhook. The URL embeds the webhook token.
pub struct Discord {
    http: awc::Client,
    url: SecUtf8,
}

impl Discord {
    pub fn new(http: awc::Client, url: SecUtf8) -> Self {
        Self { http, url }
    }

    pub async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let resp = self
            .http
            .post(self.url.unsecure())
            .send_json(&ExecuteWebhook { content: text })
            .await
            .map_err(|err| NotifyError::Request(err.to_string()))?;

        match resp.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            status => Err(NotifyError::Status(status)),
        }
    }
}
