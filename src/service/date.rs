use chrono::{Datelike, Local, NaiveDate};

/// Short date label in the `es-ES` style: day/month/year, no zero padding.
#[must_use]
pub fn short_date_label(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
