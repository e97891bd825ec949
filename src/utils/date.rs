use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve an optional CLI date argument: missing means today, present must
/// be a valid YYYY-MM-DD.
pub fn parse_optional(arg: Option<&String>) -> AppResult<Option<NaiveDate>> {
    match arg {
        None => Ok(None),
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.clone())),
    }
}
