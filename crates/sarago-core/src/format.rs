//! Display formatting for CDR fields
//!
//! Pure functions turning raw column text into the strings shown on the
//! lookup page. Text that cannot be parsed is passed through unchanged.

use chrono::{NaiveDate, NaiveDateTime};

/// Timestamp layouts accepted by [`show_datetime`], tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Calendar date layout used in request fields and the database
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render an `H:M:S` duration as e.g. `1h 5m 30s `
///
/// Hours appear only when nonzero and force minutes to be shown. Minutes
/// otherwise appear only when nonzero. Seconds appear only when nonzero.
/// Each component carries a trailing space. Signs are dropped.
pub fn show_duration(duration: &str) -> String {
    let mut parts = duration.trim().splitn(3, ':').map(|p| {
        p.trim()
            .parse::<i64>()
            .map(i64::unsigned_abs)
            .unwrap_or_default()
    });
    let h = parts.next().unwrap_or_default();
    let m = parts.next().unwrap_or_default();
    let s = parts.next().unwrap_or_default();

    let mut out = String::new();
    if h != 0 {
        out.push_str(&format!("{}h {}m ", h, m));
    } else if m != 0 {
        out.push_str(&format!("{}m ", m));
    }
    if s != 0 {
        out.push_str(&format!("{}s ", s));
    }
    out
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

/// Parse a timestamp in any of the accepted layouts
pub fn parse_datetime(datetime: &str) -> Option<NaiveDateTime> {
    let datetime = datetime.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(datetime, fmt).ok())
}

/// Render a date as `D Mon YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Render a timestamp as `D Mon YYYY h:mmam Weekday`
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%-d %b %Y %-I:%M%P %a").to_string()
}

/// Render `YYYY-MM-DD` text as `D Mon YYYY`
pub fn show_date(date: &str) -> String {
    parse_date(date).map_or_else(|| date.to_string(), format_date)
}

/// Render timestamp text as `D Mon YYYY h:mmam Weekday`
pub fn show_datetime(datetime: &str) -> String {
    parse_datetime(datetime).map_or_else(|| datetime.to_string(), format_datetime)
}

/// Group every run of digits in `text` into threes with commas
///
/// Runs of three or fewer digits are left alone, so grouped text is a fixed
/// point: `group_digits(&group_digits(s)) == group_digits(s)`.
pub fn group_digits(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 3);
    let mut run = String::new();

    for c in text.chars() {
        if c.is_ascii_digit() {
            run.push(c);
        } else {
            flush_digit_run(&mut out, &run);
            run.clear();
            out.push(c);
        }
    }
    flush_digit_run(&mut out, &run);
    out
}

fn flush_digit_run(out: &mut String, run: &str) {
    let len = run.len();
    for (i, c) in run.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
}

/// Render an integer with thousands separators, e.g. `1,234,567`
pub fn format_commas(n: i64) -> String {
    group_digits(&n.to_string())
}
