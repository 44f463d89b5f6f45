use std::sync::{atomic::AtomicBool, atomic::Ordering, Arc};

use actix_web::{
    middleware::{Compress, Logger, NormalizePath, TrailingSlash},
    web::{self, Data, JsonConfig, PathConfig, QueryConfig},
    App, HttpServer,
};

mod config;
mod docs;
mod error;
mod http_client;
mod macros;
mod models;
mod paths;
mod responses;
mod roster;
#[cfg(test)]
mod test_support;

use config::Config;
use roster::{Endpoints, Roster};

pub static IS_DEBUG_ON: AtomicBool = AtomicBool::new(false);

async fn default_handler_debug(req: actix_web::HttpRequest) -> impl actix_web::Responder {
    actix_web::HttpResponse::NotFound().body(format!("{:#?}", req))
}
async fn default_handler() -> impl actix_web::Responder {
    actix_web::HttpResponse::NotFound().finish()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let is_debug_on = config.is_debug_on;
    IS_DEBUG_ON.store(is_debug_on, Ordering::Relaxed);
    tracing::info!(
        "Debug is {}",
        if is_debug_on { "enabled" } else { "disabled" }
    );

    let endpoints = Endpoints::new(&config.api_base_url).map_err(|e| {
        tracing::error!("{e}");
        std::io::Error::other(e)
    })?;
    tracing::info!("Using PokeAPI at {}", config.api_base_url);
    match config.request_timeout {
        Some(timeout) => tracing::info!("Request timeout is {}ms", timeout.as_millis()),
        None => tracing::info!("Request timeout is disabled"),
    }

    let req_client = http_client::build_client(&config).map_err(std::io::Error::other)?;
    let roster = Data::new(
        Roster::new(Arc::new(req_client), endpoints).with_request_timeout(config.request_timeout),
    );

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(Logger::default())
            .wrap(Compress::default())
            .app_data(JsonConfig::default().error_handler(responses::config_error_handler))
            .app_data(PathConfig::default().error_handler(responses::config_error_handler))
            .app_data(QueryConfig::default().error_handler(responses::config_error_handler))
            .app_data(roster.clone())
            .configure(paths::configure)
            .default_service(if is_debug_on {
                web::to(default_handler_debug)
            } else {
                web::to(default_handler)
            })
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
