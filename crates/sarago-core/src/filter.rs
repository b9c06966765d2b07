//! CDR search filter
//!
//! Turns [`SearchCriteria`] into a list of conditions, renders them as a
//! `WHERE` fragment with `?` placeholders and yields the values to bind, in
//! placeholder order. User input never ends up in the SQL text.

use crate::models::SearchCriteria;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// One restriction on the `cdrs` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCondition {
    /// Caller or callee number contains the text (case-insensitive)
    PhoneContains(String),
    /// `connected >= value`
    ConnectedFrom(NaiveDateTime),
    /// `connected <= value`
    ConnectedTo(NaiveDateTime),
}

/// A value bound to a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Timestamp(NaiveDateTime),
}

/// Filter over the `cdrs` table; empty means every row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CdrFilter {
    conditions: Vec<FilterCondition>,
}

/// Start of the day a lower bound refers to
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last second of the day an upper bound refers to (`23:59:59`)
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
}

/// Escape character named in the `ESCAPE` clause of the phone condition
///
/// Not a backslash: the clause must parse with or without the server's
/// `NO_BACKSLASH_ESCAPES` mode.
const LIKE_ESCAPE: char = '!';

/// Escape `LIKE` wildcards so the text matches literally
fn escape_like(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, LIKE_ESCAPE | '%' | '_') {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}

impl FilterCondition {
    fn sql(&self) -> &'static str {
        match self {
            Self::PhoneContains(_) => {
                "(LOWER(IFNULL(aphone, '')) LIKE ? ESCAPE '!' \
                 OR LOWER(IFNULL(bphone, '')) LIKE ? ESCAPE '!')"
            }
            Self::ConnectedFrom(_) => "connected >= ?",
            Self::ConnectedTo(_) => "connected <= ?",
        }
    }

    fn values(&self) -> Vec<FilterValue> {
        match self {
            Self::PhoneContains(text) => {
                let pattern = format!("%{}%", escape_like(&text.to_lowercase()));
                vec![FilterValue::Text(pattern.clone()), FilterValue::Text(pattern)]
            }
            Self::ConnectedFrom(ts) | Self::ConnectedTo(ts) => vec![FilterValue::Timestamp(*ts)],
        }
    }
}

impl CdrFilter {
    /// Filter matching every CDR
    pub fn all() -> Self {
        Self::default()
    }

    /// Build the filter for a search
    ///
    /// An empty phone substring adds no condition. Date bounds apply only in
    /// range mode, and only the bounds that are present.
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        let mut conditions = Vec::new();

        if let Some(phone) = criteria.phone.as_deref().filter(|p| !p.is_empty()) {
            conditions.push(FilterCondition::PhoneContains(phone.to_string()));
        }

        let (from, to) = criteria.dates.bounds();
        if let Some(from) = from {
            conditions.push(FilterCondition::ConnectedFrom(start_of_day(from)));
        }
        if let Some(to) = to {
            conditions.push(FilterCondition::ConnectedTo(end_of_day(to)));
        }

        Self { conditions }
    }

    pub fn conditions(&self) -> &[FilterCondition] {
        &self.conditions
    }

    pub fn is_unrestricted(&self) -> bool {
        self.conditions.is_empty()
    }

    /// `WHERE` body with `?` placeholders (`1=1` when unrestricted)
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            return "1=1".to_string();
        }
        self.conditions
            .iter()
            .map(FilterCondition::sql)
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    /// Values for the placeholders of [`CdrFilter::where_clause`], in order
    pub fn bind_values(&self) -> Vec<FilterValue> {
        self.conditions
            .iter()
            .flat_map(FilterCondition::values)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateRange;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_criteria_matches_all() {
        let filter = CdrFilter::from_criteria(&SearchCriteria::all());
        assert!(filter.is_unrestricted());
        assert_eq!(filter.where_clause(), "1=1");
        assert!(filter.bind_values().is_empty());
    }

    #[test]
    fn test_phone_without_dates() {
        let criteria = SearchCriteria::all().with_phone("555");
        let filter = CdrFilter::from_criteria(&criteria);

        assert_eq!(
            filter.conditions(),
            &[FilterCondition::PhoneContains("555".to_string())]
        );
        let sql = filter.where_clause();
        assert!(sql.contains("aphone"));
        assert!(sql.contains("bphone"));
        assert!(!sql.contains("connected"));
        assert!(!sql.contains("555"));
        assert_eq!(
            filter.bind_values(),
            vec![
                FilterValue::Text("%555%".to_string()),
                FilterValue::Text("%555%".to_string())
            ]
        );
    }

    #[test]
    fn test_only_upper_bound() {
        let criteria = SearchCriteria::all().with_dates(DateRange::Bounded {
            from: None,
            to: Some(date(2023, 6, 1)),
        });
        let filter = CdrFilter::from_criteria(&criteria);

        assert_eq!(filter.where_clause(), "connected <= ?");
        assert_eq!(
            filter.bind_values(),
            vec![FilterValue::Timestamp(
                date(2023, 6, 1).and_hms_opt(23, 59, 59).unwrap()
            )]
        );
    }

    #[test]
    fn test_both_bounds_and_phone() {
        let criteria = SearchCriteria::all()
            .with_phone("07")
            .with_dates(DateRange::Bounded {
                from: Some(date(2023, 1, 1)),
                to: Some(date(2023, 1, 31)),
            });
        let filter = CdrFilter::from_criteria(&criteria);

        assert_eq!(filter.conditions().len(), 3);
        assert!(filter
            .where_clause()
            .ends_with("AND connected >= ? AND connected <= ?"));
        let values = filter.bind_values();
        assert_eq!(values.len(), 4);
        assert_eq!(
            values[2],
            FilterValue::Timestamp(date(2023, 1, 1).and_hms_opt(0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_range_mode_without_bounds_is_unrestricted() {
        let criteria = SearchCriteria::all().with_dates(DateRange::UNBOUNDED);
        assert!(CdrFilter::from_criteria(&criteria).is_unrestricted());
    }

    #[test]
    fn test_dates_ignored_when_all() {
        let criteria = SearchCriteria {
            dates: DateRange::All,
            ..Default::default()
        };
        assert_eq!(CdrFilter::from_criteria(&criteria).where_clause(), "1=1");
    }

    #[test]
    fn test_like_wildcards_escaped() {
        let filter = CdrFilter::from_criteria(&SearchCriteria::all().with_phone("5_0%AB"));
        assert_eq!(
            filter.bind_values()[0],
            FilterValue::Text("%5!_0!%ab%".to_string())
        );
        let filter = CdrFilter::from_criteria(&SearchCriteria::all().with_phone("a!b\\c"));
        assert_eq!(
            filter.bind_values()[0],
            FilterValue::Text("%a!!b\\c%".to_string())
        );
        assert_eq!(filter.where_clause().matches("ESCAPE '!'").count(), 2);
    }
}
