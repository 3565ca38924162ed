//! Date helpers.

use chrono::{NaiveDate, Utc};

/// Calendar date used for `date_joined`.
pub type Date = NaiveDate;

/// Return the current UTC date.
#[must_use]
pub fn today() -> Date {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_date() {
        let before = Utc::now().date_naive();
        let date = today();
        let after = Utc::now().date_naive();
        assert!(date >= before);
        assert!(date <= after);
    }
}
