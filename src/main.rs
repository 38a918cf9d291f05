mod config;
mod gitlab;
mod hooks;
mod http;
mod message;
mod notifier;
#[cfg(test)]
mod testing;

use actix_web::{middleware::Logger, App, HttpServer};
use color_eyre::eyre;

const LISTEN_ADDR: &str = "0.0.0.0:4455";

#[actix_web::main]
async fn main() -> eyre::Result<()> {
    dotenv::dotenv().ok();
    color_eyre::install()?;
    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(tracing_subscriber::fmt().finish())?;

    let config::Config { webhook_url } = envy::prefixed("DISCORD_").from_env()?;

    let notifier_config = notifier::Config { webhook_url };
    if !notifier_config.is_enabled() {
        tracing::warn!("DISCORD_WEBHOOK_URL is not set, every notification will fail");
    }

    let server = HttpServer::new(move || {
        App::new()
            .data(notifier::Notifier::new(notifier_config.clone()))
            .wrap(Logger::default())
            .configure(hooks::configure)
    })
    .bind(LISTEN_ADDR)?;

    tracing::info!("Server listening on {}", LISTEN_ADDR);
    server.run().await.map_err(Into::into)
}
