//! HTTP request handlers

pub mod config;
pub mod lookup;

pub use config::compose_config_page;
pub use lookup::compose_lookup_page;

use actix_web::{error, web, HttpRequest};
use sarago_core::AppError;
use tracing::warn;

fn form_error(err: error::UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), "Rejected form body: {}", err);
    AppError::InvalidInput(err.to_string()).into()
}

fn query_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), "Rejected query string: {}", err);
    AppError::InvalidInput(err.to_string()).into()
}

/// Configure the page routes: `/lookup`, `/config` and its alias `/about`
///
/// Bodies and query strings that cannot be decoded at all are answered with
/// an `InvalidInput` error page.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(form_error))
        .app_data(web::QueryConfig::default().error_handler(query_error));

    cfg.service(
        web::resource("/lookup")
            .route(web::get().to(lookup::lookup_get))
            .route(web::post().to(lookup::lookup_post)),
    )
    .service(
        web::resource(vec!["/config", "/about"])
            .route(web::get().to(config::config_get))
            .route(web::post().to(config::config_post)),
    );
}
