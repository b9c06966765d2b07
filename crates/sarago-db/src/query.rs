//! SQL text for CDR lookups
//!
//! The statements are built from a [`CdrFilter`]'s placeholder fragment and
//! the filter values are bound afterwards with [`bind_filter`].

use sarago_core::{CdrFilter, FilterValue};
use sqlx::mysql::MySqlArguments;
use sqlx::query::QueryAs;
use sqlx::MySql;

/// Columns read for a CDR row, all normalized to text except the folder id
pub const CDR_SELECT_COLUMNS: &str = r#"
    CAST(cdrid AS CHAR) AS cdrid,
    CAST(IFNULL(direction, '') AS CHAR) AS direction,
    CAST(IFNULL(duration, '') AS CHAR) AS duration,
    IFNULL(CAST(connected AS CHAR), '') AS connected,
    CAST(IFNULL(aphone, '') AS CHAR) AS aphone,
    CAST(IFNULL(bphone, '') AS CHAR) AS bphone,
    CAST(IFNULL(folderid, 0) AS SIGNED) AS folderid
"#;

/// Stable row order so offsets address the same rows between requests
const CDR_ORDER: &str = "ORDER BY connected, cdrid";

/// `SELECT COUNT(*)` over the filtered rows
pub fn count_sql(filter: &CdrFilter) -> String {
    format!("SELECT COUNT(*) FROM cdrs WHERE {}", filter.where_clause())
}

/// Bounded `SELECT` of one page; the last two placeholders are `LIMIT` and `OFFSET`
pub fn page_sql(filter: &CdrFilter) -> String {
    format!(
        "SELECT {} FROM cdrs WHERE {} {} LIMIT ? OFFSET ?",
        CDR_SELECT_COLUMNS.trim(),
        filter.where_clause(),
        CDR_ORDER
    )
}

/// Bind the filter's values, in placeholder order
pub fn bind_filter<'q, O>(
    mut query: QueryAs<'q, MySql, O, MySqlArguments>,
    filter: &CdrFilter,
) -> QueryAs<'q, MySql, O, MySqlArguments> {
    for value in filter.bind_values() {
        query = match value {
            FilterValue::Text(text) => query.bind(text),
            FilterValue::Timestamp(ts) => query.bind(ts),
        };
    }
    query
}
