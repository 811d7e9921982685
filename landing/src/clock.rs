//! Calendar helpers for the footer.

use chrono::{Datelike, Local, NaiveDate};

/// Calendar year on the visitor's clock (the build machine's, when
/// prerendering).
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Year of an arbitrary date.
pub fn year_of(date: NaiveDate) -> i32 {
    date.year()
}

pub fn copyright_line(year: i32) -> String {
    format!("© {year} All rights reserved.")
}
