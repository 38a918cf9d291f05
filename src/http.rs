use actix_web::{
    dev::Payload, error::ResponseError, http::StatusCode, web::Bytes, FromRequest, HttpRequest,
    HttpResponse,
};
use futures::future::{FutureExt, LocalBoxFuture};

/// JSON webhook body.
#[derive(Debug, Clone)]
pub struct Webhook<T>(pub T);

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("failed reading request data: {0}")]
    ActixError(#[from] actix_web::Error),
    #[error("invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ResponseError for WebhookError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::JsonError(_) => StatusCode::BAD_REQUEST,
            WebhookError::ActixError(err) => err.as_response_error().status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        plain_error(self.status_code())
    }
}

/// Error response carrying only the status' reason phrase and a newline.
pub fn plain_error(status: StatusCode) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/plain; charset=utf-8")
        .body(format!("{}\n", status.canonical_reason().unwrap_or("Error")))
}

// Serde fills a defaulted struct from a JSON array positionally, so the body
// must be an object before it reaches `T`.
fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(bytes)?;
    serde_json::from_value(serde_json::Value::Object(object))
}

impl<T> FromRequest for Webhook<T>
where
    T: serde::de::DeserializeOwned,
{
    type Error = WebhookError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;
    type Config = ();

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        Box::pin(Bytes::from_request(req, payload).map(
            |bytes| -> Result<Self, Self::Error> {
                let bytes = bytes?;
                decode(&bytes).map(Self).map_err(|err| {
                    tracing::warn!("Rejected webhook body: {}", err);
                    err.into()
                })
            },
        ))
    }
}
