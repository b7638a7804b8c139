use chrono::{Local, NaiveDate};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's local date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    Local::now().date_naive().format(ISO_DATE_FORMAT).to_string()
}

/// Parse an ISO date, returning `None` for anything else. The booking form
/// accepts free text; this is only used for display hints.
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok()
}
