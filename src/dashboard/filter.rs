use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Invalid {bound} date '{value}', expected YYYY-MM-DD")]
    InvalidDate { bound: &'static str, value: String },
}

/// Inclusive event-date window. Only narrows results when both bounds are
/// set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Parses raw form input. Blank text means "no bound".
    pub fn parse(start: &str, end: &str) -> Result<Self, DateRangeError> {
        Ok(Self {
            start: parse_bound("start", start)?,
            end: parse_bound("end", end)?,
        })
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Whether either bound has been entered, even if the filter is not
    /// active yet.
    pub fn has_input(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => true,
        }
    }
}

fn parse_bound(bound: &'static str, value: &str) -> Result<Option<NaiveDate>, DateRangeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| DateRangeError::InvalidDate {
            bound,
            value: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_blank_bounds_parse_to_none() {
        let range = DateRange::parse("", "  ").unwrap();
        assert_eq!(range, DateRange::default());
        assert!(!range.is_active());
        assert!(!range.has_input());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::parse("2024-01-01", "2024-06-15").unwrap();
        assert!(range.contains(date("2024-01-01")));
        assert!(range.contains(date("2024-06-15")));
        assert!(!range.contains(date("2023-12-31")));
        assert!(!range.contains(date("2024-06-16")));
    }

    #[test]
    fn test_half_open_range_does_not_filter() {
        let range = DateRange::parse("2024-01-01", "").unwrap();
        assert!(range.has_input());
        assert!(!range.is_active());
        assert!(range.contains(date("1999-01-01")));
    }

    #[test]
    fn test_invalid_bound_is_rejected() {
        let err = DateRange::parse("2024-01-01", "next tuesday").unwrap_err();
        assert_eq!(
            err,
            DateRangeError::InvalidDate {
                bound: "end",
                value: "next tuesday".to_string()
            }
        );
    }
}
