use actix_web::{http::StatusCode, web, HttpResponse};

use crate::{
    gitlab::{Event, Payload},
    http::{self, Webhook},
    message,
    notifier::{Notifier, NotifyError},
};

pub const GITLAB_HOOK_PATH: &str = "/gitlab-webhook";

#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("failed to relay notification: {0}")]
    Notify(#[from] NotifyError),
}

impl actix_web::ResponseError for HookError {
    fn status_code(&self) -> StatusCode {
        match self {
            HookError::Notify(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        http::plain_error(self.status_code())
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(GITLAB_HOOK_PATH, web::post().to(gitlab_hook));
}

pub async fn gitlab_hook(
    Webhook(payload): Webhook<Payload>,
    notifier: web::Data<Notifier>,
) -> Result<&'static str, HookError> {
    let event = Event::from(payload);
    let text = message::render(&event);

    if let Err(err) = notifier.notify(&text).await {
        tracing::error!(kind = ?event.kind(), "Error sending to Discord: {}", err);
        return Err(err.into());
    }

    tracing::debug!(kind = ?event.kind(), "Relayed GitLab event");
    Ok("Webhook processed successfully\n")
}
