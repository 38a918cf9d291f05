use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, test, web, App, HttpResponse};

pub const DESTINATION_PATH: &str = "/api/webhooks/1/token";

/// Envelopes received by a [`destination`] server, in arrival order.
pub type Received = Arc<Mutex<Vec<serde_json::Value>>>;

/// Local stand-in for Discord answering every POST to [`DESTINATION_PATH`] with `status`.
pub fn destination(status: StatusCode, received: Received) -> test::TestServer {
    test::start(move || {
        App::new().data(received.clone()).route(
            DESTINATION_PATH,
            web::post().to(
                move |body: web::Json<serde_json::Value>, received: web::Data<Received>| {
                    received.lock().unwrap().push(body.into_inner());
                    async move { HttpResponse::build(status).finish() }
                },
            ),
        )
    })
}
