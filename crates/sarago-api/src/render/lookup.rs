//! Lookup page markup: summary line, results table and navigation forms

use super::escape_html;
use crate::dto::LookupForm;
use sarago_core::{
    format::{format_commas, format_date},
    models::{Cdr, SearchCriteria},
    traits::OffsetPager,
};

/// Describe the date part of a search, e.g. `; Call date 1 Jun 2023 onwards`
///
/// Empty when date filtering is off or both bounds are open.
pub fn date_summary(criteria: &SearchCriteria) -> String {
    let (from, to) = criteria.dates.bounds();
    match (from, to) {
        (None, None) => String::new(),
        (None, Some(to)) => format!("; Call date upto {}", format_date(to)),
        (Some(from), None) => format!("; Call date {} onwards", format_date(from)),
        (Some(from), Some(to)) if from == to => format!("; Call date {}", format_date(from)),
        (Some(from), Some(to)) => {
            format!("; Call date {} - {}", format_date(from), format_date(to))
        }
    }
}

/// `<p>Showing …; N found</p>`
pub fn summary_line(criteria: &SearchCriteria, total: i64) -> String {
    let subject = criteria
        .phone
        .as_deref()
        .map_or_else(|| "all calls".to_string(), escape_html);
    format!(
        "<p>Showing {}{}; {} found</p>",
        subject,
        date_summary(criteria),
        format_commas(total)
    )
}

/// Results table, one row per CDR with an embedded player for its recording
pub fn results_table(cdrs: &[Cdr]) -> String {
    let mut html = String::from(concat!(
        "<table id=\"results\"><thead><tr>",
        "<th class=\"duration\">Duration</th>",
        "<th class=\"connected\">Connected</th>",
        "<th class=\"direction\">I/O</th>",
        "<th class=\"aphone\">From</th>",
        "<th class=\"bphone\">To</th></tr></thead><tbody>",
    ));

    for cdr in cdrs {
        html.push_str(&format!(
            "<tr><td class=\"duration\">{}</td><td class=\"connected\">{}</td>\
             <td class=\"direction\">{}</td>\
             <td class=\"aphone\">{}</td><td class=\"bphone\">{}</td>\
             <td class=\"audio\"><audio controls><source src=\"{}\" type=\"audio/mpeg\"></audio></td></tr>",
            escape_html(&cdr.display_duration()),
            escape_html(&cdr.display_connected()),
            escape_html(&cdr.direction),
            escape_html(&cdr.caller_number),
            escape_html(&cdr.called_number),
            escape_html(&cdr.recording_url()),
        ));
    }

    html.push_str("</tbody></table>");
    html
}

/// One navigation form re-submitting the current search at `offset`
fn navigation_form(form: &LookupForm, offset: i64, label: &str) -> String {
    let mut html = String::from("<form action=\"lookup\" method=\"post\">");
    for (name, value) in [
        ("tel", &form.tel),
        ("dates", &form.dates),
        ("fromdate", &form.fromdate),
        ("todate", &form.todate),
    ] {
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"{}\" value=\"{}\">",
            name,
            escape_html(value)
        ));
    }
    html.push_str(&format!(
        "<input type=\"hidden\" name=\"offset\" value=\"{}\">\
         <input type=\"submit\" value=\"{}\"> </form>",
        offset, label
    ));
    html
}

/// Previous/next forms; each is omitted when there is nowhere to go
pub fn pager_forms(pager: &OffsetPager, form: &LookupForm) -> String {
    let mut html = String::new();
    if let Some(offset) = pager.previous_offset() {
        html.push_str(&navigation_form(form, offset, "&NestedLessLess;"));
    }
    if let Some(offset) = pager.next_offset() {
        html.push_str(&navigation_form(form, offset, "&NestedGreaterGreater;"));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sarago_core::models::DateRange;

    fn bounded(from: Option<(i32, u32, u32)>, to: Option<(i32, u32, u32)>) -> SearchCriteria {
        let d = |(y, m, d): (i32, u32, u32)| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        SearchCriteria::all().with_dates(DateRange::Bounded {
            from: from.map(d),
            to: to.map(d),
        })
    }

    #[test]
    fn test_date_summary() {
        assert_eq!(date_summary(&SearchCriteria::all()), "");
        assert_eq!(date_summary(&bounded(None, None)), "");
        assert_eq!(
            date_summary(&bounded(None, Some((2023, 6, 1)))),
            "; Call date upto 1 Jun 2023"
        );
        assert_eq!(
            date_summary(&bounded(Some((2023, 6, 1)), None)),
            "; Call date 1 Jun 2023 onwards"
        );
        assert_eq!(
            date_summary(&bounded(Some((2023, 6, 1)), Some((2023, 6, 1)))),
            "; Call date 1 Jun 2023"
        );
        assert_eq!(
            date_summary(&bounded(Some((2023, 6, 1)), Some((2023, 6, 5)))),
            "; Call date 1 Jun 2023 - 5 Jun 2023"
        );
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            summary_line(&SearchCriteria::all(), 1234),
            "<p>Showing all calls; 1,234 found</p>"
        );
        assert_eq!(
            summary_line(&SearchCriteria::all().with_phone("<555>"), 0),
            "<p>Showing &lt;555&gt;; 0 found</p>"
        );
    }

    #[test]
    fn test_results_table_row() {
        let cdr = Cdr {
            id: "77".to_string(),
            direction: "In".to_string(),
            duration: "0:0:45".to_string(),
            connected: "2023-06-01T14:30:00Z".to_string(),
            caller_number: "2001".to_string(),
            called_number: "555123".to_string(),
            folder_id: 3,
        };
        let html = results_table(&[cdr]);

        assert!(html.starts_with("<table id=\"results\">"));
        assert!(html.contains("<td class=\"duration\">45s </td>"));
        assert!(html.contains("<td class=\"connected\">1 Jun 2023 2:30pm Thu</td>"));
        assert!(html.contains("<source src=\"/cdr3/{77}.osf\" type=\"audio/mpeg\">"));
        assert!(html.ends_with("</tbody></table>"));
    }

    #[test]
    fn test_pager_forms() {
        let form = LookupForm {
            tel: "555".to_string(),
            dates: "all".to_string(),
            ..Default::default()
        };

        let html = pager_forms(&OffsetPager::new(0, 15, 10), &form);
        assert!(html.is_empty());

        let html = pager_forms(&OffsetPager::new(20, 15, 100), &form);
        assert!(html.contains("name=\"offset\" value=\"5\""));
        assert!(html.contains("name=\"offset\" value=\"35\""));
        assert!(html.contains("name=\"tel\" value=\"555\""));
        assert!(html.contains("name=\"dates\" value=\"all\""));

        let html = pager_forms(&OffsetPager::new(90, 15, 100), &form);
        assert!(html.contains("&NestedLessLess;"));
        assert!(!html.contains("&NestedGreaterGreater;"));
    }
}
