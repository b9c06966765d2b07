//! Lookup form fields

use chrono::NaiveDate;
use sarago_core::{
    format::parse_date,
    models::{DateRange, SearchCriteria},
    AppError, AppResult,
};

/// Value of `dates` that turns date filtering off
pub const ALL_DATES: &str = "all";

/// Raw `/lookup` form, as submitted by the search and navigation forms
///
/// Every field is kept as text so that the navigation forms can submit
/// exactly what the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupForm {
    /// Phone number substring
    pub tel: String,
    /// `all` disables date filtering; anything else enables it
    pub dates: String,
    /// Lower date bound (`YYYY-MM-DD`)
    pub fromdate: String,
    /// Upper date bound (`YYYY-MM-DD`)
    pub todate: String,
    /// Row offset of the page
    pub offset: String,
}

fn parse_optional_date(field: &str, value: &str) -> AppResult<Option<NaiveDate>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    parse_date(value).map(Some).ok_or_else(|| {
        AppError::InvalidInput(format!("{} must be a date (YYYY-MM-DD), got {:?}", field, value))
    })
}

impl LookupForm {
    /// Collect the fields from decoded form pairs
    ///
    /// The first value of a repeated field wins; unknown fields are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut form = Self::default();
        let mut seen = [false; 5];

        for (key, value) in pairs {
            let (slot, field) = match key.as_str() {
                "tel" => (0, &mut form.tel),
                "dates" => (1, &mut form.dates),
                "fromdate" => (2, &mut form.fromdate),
                "todate" => (3, &mut form.todate),
                "offset" => (4, &mut form.offset),
                _ => continue,
            };
            if !seen[slot] {
                seen[slot] = true;
                *field = value.clone();
            }
        }
        form
    }

    /// Row offset; missing, malformed or negative values become 0
    pub fn offset(&self) -> i64 {
        self.offset.trim().parse::<i64>().unwrap_or(0).max(0)
    }

    /// Date restriction requested by the form
    pub fn date_range(&self) -> AppResult<DateRange> {
        if self.dates == ALL_DATES {
            return Ok(DateRange::All);
        }
        Ok(DateRange::Bounded {
            from: parse_optional_date("fromdate", &self.fromdate)?,
            to: parse_optional_date("todate", &self.todate)?,
        })
    }

    /// Validated search criteria
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when a date field is present but not a date.
    pub fn to_criteria(&self) -> AppResult<SearchCriteria> {
        Ok(SearchCriteria::all()
            .with_phone(self.tel.trim())
            .with_dates(self.date_range()?)
            .with_offset(self.offset()))
    }
}
