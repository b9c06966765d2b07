//! Per-request CDR search criteria

use chrono::NaiveDate;

/// Date restriction of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    /// No date filtering (`dates=all`)
    All,
    /// Optional inclusive bounds on the connection date
    Bounded {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl Default for DateRange {
    fn default() -> Self {
        Self::All
    }
}

impl DateRange {
    /// Range mode with both bounds open; behaves like [`DateRange::All`]
    pub const UNBOUNDED: DateRange = DateRange::Bounded {
        from: None,
        to: None,
    };

    /// Effective `(from, to)` bounds; both `None` when range mode is off
    pub fn bounds(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        match *self {
            Self::All => (None, None),
            Self::Bounded { from, to } => (from, to),
        }
    }
}

/// What the user asked for on the lookup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Substring to look for in either phone number
    pub phone: Option<String>,

    pub dates: DateRange,

    /// Zero-based index of the first row to show
    pub offset: i64,
}

impl SearchCriteria {
    /// Criteria matching every CDR
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        let phone = phone.into();
        self.phone = if phone.is_empty() { None } else { Some(phone) };
        self
    }

    pub fn with_dates(mut self, dates: DateRange) -> Self {
        self.dates = dates;
        self
    }

    /// Set the offset, clamping negatives to zero
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset.max(0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_normalizes() {
        let criteria = SearchCriteria::all().with_phone("").with_offset(-30);
        assert_eq!(criteria.phone, None);
        assert_eq!(criteria.offset, 0);

        let criteria = SearchCriteria::all().with_phone("555").with_offset(45);
        assert_eq!(criteria.phone.as_deref(), Some("555"));
        assert_eq!(criteria.offset, 45);
    }

    #[test]
    fn test_date_range_bounds() {
        assert_eq!(DateRange::All.bounds(), (None, None));
        assert_eq!(DateRange::UNBOUNDED.bounds(), (None, None));

        let to = NaiveDate::from_ymd_opt(2023, 6, 1);
        let range = DateRange::Bounded { from: None, to };
        assert_eq!(range.bounds(), (None, to));
    }
}
