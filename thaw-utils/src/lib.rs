//! Shared utility functions for the thawing dashboard crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{Datelike, NaiveDate};

    /// Short Portuguese weekday names, Sunday first.
    pub const WEEKDAY_NAMES: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

    const MONTH_NAMES: [&str; 12] = [
        "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
        "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
    ];

    /// Portuguese month name for a zero-based month.
    pub fn month_name(month0: u32) -> Option<&'static str> {
        MONTH_NAMES.get(month0 as usize).copied()
    }

    /// Format a NaiveDate as "DD/MM/YYYY" (pt-BR)
    pub fn format_date_br(date: &NaiveDate) -> String {
        date.format("%d/%m/%Y").to_string()
    }

    /// First day of a month. `month0` is zero-based (0 = January).
    pub fn first_of_month(month0: u32, year: i32) -> Result<NaiveDate, DateError> {
        if month0 > 11 {
            return Err(DateError(format!("month {} out of range 0..11", month0)));
        }
        NaiveDate::from_ymd_opt(year, month0 + 1, 1)
            .ok_or_else(|| DateError(format!("year {} out of range", year)))
    }

    /// Weekday of the 1st of the month, 0 = Sunday .. 6 = Saturday.
    pub fn first_weekday(month0: u32, year: i32) -> Result<u32, DateError> {
        Ok(first_of_month(month0, year)?
            .weekday()
            .num_days_from_sunday())
    }

    /// Number of days in the month: the day before the 1st of the next month.
    pub fn days_in_month(month0: u32, year: i32) -> Result<u32, DateError> {
        let first = first_of_month(month0, year)?;
        let next_first = if month0 == 11 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            first.with_month(month0 + 2)
        };
        next_first
            .and_then(|d| d.pred_opt())
            .map(|last| last.day())
            .ok_or_else(|| DateError(format!("no month end for {}-{}", year, month0 + 1)))
    }

    /// Move a zero-based month by `delta` months, carrying into the year.
    pub fn shift_month(month0: u32, year: i32, delta: i32) -> (u32, i32) {
        let total = year * 12 + month0 as i32 + delta;
        (total.rem_euclid(12) as u32, total.div_euclid(12))
    }

}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug, Clone, PartialEq)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
