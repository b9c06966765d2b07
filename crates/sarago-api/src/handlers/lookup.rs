//! CDR lookup page
//!
//! Renders the search form followed by one page of matching CDRs and the
//! previous/next navigation forms.

use crate::context::SiteContext;
use crate::dto::LookupForm;
use crate::render::{lookup, PageBuilder};
use actix_web::{
    http::header::ContentType,
    web::{Data, Form, Query},
    HttpResponse,
};
use sarago_core::{
    traits::{CdrRepository, OffsetPager, ParamsRepository},
    CdrFilter,
};
use sarago_db::{MySqlCdrRepository, MySqlParamsRepository};
use sqlx::MySqlPool;
use tracing::{debug, info, instrument, warn};

/// Compose the lookup page for a submitted form
///
/// Query failures are written into the page where they happen and end the
/// composition there.
pub async fn compose_lookup_page(
    cdrs: &dyn CdrRepository,
    params: &dyn ParamsRepository,
    site: &SiteContext,
    form: &LookupForm,
) -> String {
    let mut page = PageBuilder::new(&site.templates);

    match params.display_name().await {
        Ok(name) => page.heading(&name.unwrap_or_default()),
        Err(e) => {
            page.error(&e);
            return page.finish();
        }
    }
    page.lookup_form();

    let criteria = match form.to_criteria() {
        Ok(criteria) => criteria,
        Err(e) => {
            warn!("Rejected lookup: {}", e);
            page.error(&e);
            return page.finish();
        }
    };
    let filter = CdrFilter::from_criteria(&criteria);

    debug!(
        phone = ?criteria.phone,
        dates = ?criteria.dates,
        offset = criteria.offset,
        "Looking up CDRs"
    );

    let total = match cdrs.count(&filter).await {
        Ok(total) => total,
        Err(e) => {
            page.error(&e);
            return page.finish();
        }
    };
    page.push_html(&lookup::summary_line(&criteria, total));

    let rows = match cdrs.fetch(&filter, criteria.offset, site.page_size).await {
        Ok(rows) => rows,
        Err(e) => {
            page.error(&e);
            return page.finish();
        }
    };

    info!(
        "Showing {} CDRs from offset {} of {} found",
        rows.len(),
        criteria.offset,
        total
    );

    page.push_html(&lookup::results_table(&rows));

    let pager = OffsetPager::new(criteria.offset, site.page_size, total);
    page.push_html(&lookup::pager_forms(&pager, form));

    page.finish()
}

async fn respond(pairs: &[(String, String)], pool: &MySqlPool, site: &SiteContext) -> HttpResponse {
    let form = LookupForm::from_pairs(pairs);
    let cdrs = MySqlCdrRepository::new(pool.clone());
    let params = MySqlParamsRepository::new(pool.clone());

    let body = compose_lookup_page(&cdrs, &params, site, &form).await;

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// GET /lookup
#[instrument(skip(pool, site))]
pub async fn lookup_get(
    query: Query<Vec<(String, String)>>,
    pool: Data<MySqlPool>,
    site: Data<SiteContext>,
) -> HttpResponse {
    respond(&query, pool.get_ref(), site.get_ref()).await
}

/// POST /lookup
#[instrument(skip(pool, site))]
pub async fn lookup_post(
    form: Form<Vec<(String, String)>>,
    pool: Data<MySqlPool>,
    site: Data<SiteContext>,
) -> HttpResponse {
    respond(&form, pool.get_ref(), site.get_ref()).await
}
