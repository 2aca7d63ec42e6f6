//! Report builders - pure functions turning collection snapshots into report
//! object models.
//!
//! Builders have no awareness of the database or the presentation layer: they
//! take the user/category/payment collections they need as parameters and
//! return structured models. Serialization to files lives in [`crate::export`].

pub mod chart;
pub mod document;
pub mod workbook;

/// Display format for payment dates in reports.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Formats an amount as currency text with two decimals, e.g. `"$250.00"`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(250.0), "$250.00");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(12.345), "$12.35");
    }
}
