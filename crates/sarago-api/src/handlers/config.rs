//! Configuration page (`/config`, also served as `/about`)
//!
//! Shows the database display name and the recording folders, and applies
//! submitted changes. Folder path changes reach the static mounts only after
//! a restart.

use crate::context::SiteContext;
use crate::dto::ConfigUpdate;
use crate::render::{config, PageBuilder};
use actix_web::{
    http::header::ContentType,
    web::{Data, Form, Query},
    HttpResponse,
};
use sarago_core::{
    traits::{FolderRepository, ParamsRepository},
    AppError,
};
use sarago_db::{MySqlFolderRepository, MySqlParamsRepository};
use sqlx::MySqlPool;
use tracing::{info, instrument, warn};

/// Compose the configuration page, applying `update` first when it has changes
///
/// After a successful change the lookup landing page is shown instead of
/// the form.
pub async fn compose_config_page(
    folders: &dyn FolderRepository,
    params: &dyn ParamsRepository,
    site: &SiteContext,
    update: &ConfigUpdate,
) -> String {
    let mut page = PageBuilder::new(&site.templates);

    if !update.is_empty() {
        let mut failures = Vec::new();

        if let Some(dbname) = &update.dbname {
            if let Err(e) = params.set_display_name(dbname).await {
                failures.push(e);
            }
        }
        for (id, path) in &update.folders {
            match folders.update_path(*id, path).await {
                Ok(true) => {}
                Ok(false) => {
                    warn!(folder = id, "Path update for unknown folder");
                    failures.push(AppError::NotFound(format!("folder {}", id)));
                }
                Err(e) => failures.push(e),
            }
        }

        info!(
            folders = update.folders.len(),
            failures = failures.len(),
            "Configuration updated"
        );

        match params.display_name().await {
            Ok(name) => page.heading(&name.unwrap_or_default()),
            Err(e) => failures.push(e),
        }
        for failure in &failures {
            page.error(failure);
        }
        page.lookup_form();
        return page.finish();
    }

    let dbname = match params.display_name().await {
        Ok(name) => name.unwrap_or_else(|| config::UNKNOWN_DBNAME.to_string()),
        Err(e) => {
            page.error(&e);
            return page.finish();
        }
    };

    match folders.list().await {
        Ok(list) => page.push_html(&config::config_form(site, &dbname, &list)),
        Err(e) => page.error(&e),
    }

    page.finish()
}

async fn respond(pairs: &[(String, String)], pool: &MySqlPool, site: &SiteContext) -> HttpResponse {
    let folders = MySqlFolderRepository::new(pool.clone());
    let params = MySqlParamsRepository::new(pool.clone());
    let update = ConfigUpdate::from_pairs(pairs);

    let body = compose_config_page(&folders, &params, site, &update).await;

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// GET /config
#[instrument(skip(pool, site))]
pub async fn config_get(
    query: Query<Vec<(String, String)>>,
    pool: Data<MySqlPool>,
    site: Data<SiteContext>,
) -> HttpResponse {
    respond(&query, pool.get_ref(), site.get_ref()).await
}

/// POST /config
#[instrument(skip(pool, site))]
pub async fn config_post(
    form: Form<Vec<(String, String)>>,
    pool: Data<MySqlPool>,
    site: Data<SiteContext>,
) -> HttpResponse {
    respond(&form, pool.get_ref(), site.get_ref()).await
}
