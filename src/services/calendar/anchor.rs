use chrono::{Datelike, NaiveDate};

use crate::utils::date::{first_of_month, first_of_next_month, parse_date_only};

/// Month a date inside a month grid is labelled with, as its 1st.
///
/// A date in the first seven days of its month belongs to that month. Any
/// later date is taken to be trailing padding and belongs to the following
/// month. The threshold is coarse and kept as is.
pub fn resolve_anchor_month(date: NaiveDate) -> NaiveDate {
    if date.day() <= 7 {
        first_of_month(date)
    } else {
        first_of_next_month(date)
    }
}

/// [`resolve_anchor_month`] for a `YYYY-MM-DD` string.
pub fn resolve_anchor_month_str(date: &str) -> Option<NaiveDate> {
    parse_date_only(date).ok().map(resolve_anchor_month)
}
