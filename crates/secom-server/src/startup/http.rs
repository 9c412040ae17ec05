//! HTTP and HTTPS server setup

use std::sync::Arc;

use actix_web::{
    App, HttpServer,
    dev::Server,
    middleware::{Compress, Logger},
    web,
};

use crate::{api, model::constants::SHUTDOWN_TIMEOUT_SECS, state::AppState};

/// Creates and binds the plain HTTP server
pub fn http_server(
    app_state: Arc<AppState>,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Compress::default())
            .app_data(web::Data::from(app_state.clone()))
            .configure(api::routes)
            .default_service(web::to(api::not_found))
    })
    .disable_signals()
    .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
    .bind((address, port))?
    .run())
}

/// Creates and binds the HTTPS server
pub fn https_server(
    app_state: Arc<AppState>,
    address: String,
    port: u16,
    tls_config: rustls::ServerConfig,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Compress::default())
            .app_data(web::Data::from(app_state.clone()))
            .configure(api::routes)
            .default_service(web::to(api::not_found))
    })
    .disable_signals()
    .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
    .bind_rustls_0_23((address, port), tls_config)?
    .run())
}
