//! sarago server
//!
//! Local web front end over an existing CDR database: search pages, a
//! configuration page, and static serving of the voice-recording folders.

mod cli;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use sarago_api::{site_files, FolderMap, SiteContext, Templates};
use sarago_core::{
    format::format_commas,
    traits::{CdrRepository, ParamsRepository},
    AppConfig, CdrFilter,
};
use sarago_db::{create_pool, MySqlCdrRepository, MySqlFolderRepository, MySqlParamsRepository};
use std::env;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;

/// Initialize tracing/logging
fn init_tracing() {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "sarago={},sarago_api={},sarago_db={},actix_web=info,sqlx=warn",
            log_level, log_level, log_level
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing();

    info!(
        "SARemote v{} ({})",
        env!("CARGO_PKG_VERSION"),
        env::consts::ARCH
    );

    let config = AppConfig::load(&cli.config, cli.server_config(), cli.db_host.clone())
        .with_context(|| format!("loading configuration from {}", cli.config))?;

    info!(
        "CDRs: {} database {:?}",
        config.database.endpoint(),
        config.database.name
    );

    let pool = create_pool(&config.database)
        .await
        .context("opening the CDR database")?;

    let params = MySqlParamsRepository::new(pool.clone());
    let dbname = params
        .display_name()
        .await
        .context("reading the database display name")?
        .unwrap_or_else(|| "unidentified".to_string());
    info!("Database: {}", dbname);

    let templates = Templates::load(&config.server.template_dir).context("loading HTML templates")?;

    let folders = FolderMap::load(&MySqlFolderRepository::new(pool.clone()))
        .await
        .context("listing voice recording folders")?;
    if folders.is_empty() {
        warn!("No voice recording folders configured");
    } else {
        info!("Mounting {} voice recording folders", folders.len());
    }

    match MySqlCdrRepository::new(pool.clone())
        .count(&CdrFilter::all())
        .await
    {
        Ok(total) => info!("Number of CDRs: {}", format_commas(total)),
        Err(e) => warn!("Could not count CDRs: {}", e),
    }

    let site = web::Data::new(SiteContext::new(templates, config.server.page_size));
    let pool = web::Data::new(pool);
    let folders = Arc::new(folders);
    let static_root = config.server.static_root.clone();

    let bind_addr = config.server.bind_addr();
    info!(
        "Serving port {} with {} workers, open {}",
        config.server.port,
        config.server.workers,
        config.server.browse_url()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(pool.clone())
            .app_data(site.clone())
            .wrap(TracingLogger::default())
            .configure(sarago_api::configure)
            .configure(|cfg| folders.configure(cfg))
            .service(site_files(&static_root))
    })
    .workers(config.server.workers)
    .bind(&bind_addr)
    .with_context(|| format!("binding {}", bind_addr))?
    .run()
    .await
    .context("running the HTTP server")?;

    Ok(())
}
