//! Document report builder - document object model plus the builder that
//! fills it for an explicit user selection.
//!
//! The selection is a direct input (normally a single user); the builder
//! never filters inside a full-collection loop. Unlike the spreadsheet
//! report, the per-category table enumerates the full category domain, so a
//! category without payments still appears with a zero amount.

use crate::core::aggregate::{least_expensive, line_total, most_expensive};
use crate::entities::{category, payment, user};
use crate::report::{DATE_FORMAT, chart::build_series, format_amount};
use chrono::NaiveDate;

/// Named paragraph style of a user heading.
pub const HEADING_STYLE: &str = "Heading 1";

/// Named paragraph style of the callout paragraphs.
pub const SUBHEADING_STYLE: &str = "Subheading";

/// Font color of a callout paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    /// Most-expensive callout
    DarkRed,
    /// Least-expensive callout
    DarkGreen,
}

/// One block of the document body, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Centered user heading, style [`HEADING_STYLE`]
    Heading(String),
    /// Styled paragraph (the callouts)
    Paragraph {
        /// Paragraph text
        text: String,
        /// Named paragraph style
        style: &'static str,
        /// Font color
        color: TextColor,
    },
    /// Two-column table: category name and total spend
    Table {
        /// Column headers
        header: [String; 2],
        /// One row per category in enumeration order
        rows: Vec<[String; 2]>,
    },
    /// Page break between user sections
    PageBreak,
}

/// The whole document model.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Centered header text carrying the report date
    pub header_text: String,
    /// Whether the footer carries a page-number field
    pub page_number_footer: bool,
    /// Body blocks in order
    pub blocks: Vec<Block>,
}

/// Builds the document report for an explicit selection of users (normally
/// one). Each section gets a heading, the category/total table over the full
/// category domain, and most/least-expensive callouts; both callouts are
/// omitted entirely when the user has no payments. A page break separates
/// consecutive sections; none follows the last.
#[must_use]
pub fn build_report(
    users: &[user::Model],
    categories: &[category::Model],
    payments: &[payment::Model],
    report_date: NaiveDate,
) -> Document {
    let mut blocks = Vec::new();

    for (index, user) in users.iter().enumerate() {
        blocks.push(Block::Heading(user.fio.clone()));

        let rows = build_series(user, categories, payments)
            .into_iter()
            .map(|point| [point.label, format_amount(point.amount)])
            .collect();
        blocks.push(Block::Table {
            header: ["Category".to_string(), "Total spend".to_string()],
            rows,
        });

        let user_payments: Vec<payment::Model> = payments
            .iter()
            .filter(|p| p.user_id == user.id)
            .cloned()
            .collect();

        if let Some(max) = most_expensive(&user_payments) {
            blocks.push(callout("Most expensive payment", max, TextColor::DarkRed));
        }
        if let Some(min) = least_expensive(&user_payments) {
            blocks.push(callout("Least expensive payment", min, TextColor::DarkGreen));
        }

        if index + 1 < users.len() {
            blocks.push(Block::PageBreak);
        }
    }

    Document {
        header_text: format!("Payment report as of {}", report_date.format(DATE_FORMAT)),
        page_number_footer: true,
        blocks,
    }
}

fn callout(label: &str, payment: &payment::Model, color: TextColor) -> Block {
    Block::Paragraph {
        text: format!(
            "{label} - {} for {} on {}",
            payment.name,
            format_amount(line_total(payment)),
            payment.date.format(DATE_FORMAT),
        ),
        style: SUBHEADING_STYLE,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn fixture() -> (
        Vec<crate::entities::category::Model>,
        Vec<crate::entities::payment::Model>,
    ) {
        let categories = vec![
            category_model(1, "Food"),
            category_model(2, "Transport"),
            category_model(3, "Leisure"),
        ];
        let payments = vec![
            payment_model(1, "Feast", date(2024, 1, 1), 100.0, 2, 1, 1),
            payment_model(2, "Snack", date(2024, 1, 2), 50.0, 1, 1, 1),
            payment_model(3, "Bus", date(2024, 1, 3), 30.0, 3, 1, 2),
        ];
        (categories, payments)
    }

    #[test]
    fn test_report_header_and_footer() {
        let user = user_model(1, "Ivanov");
        let document = build_report(std::slice::from_ref(&user), &[], &[], date(2024, 6, 1));

        assert_eq!(document.header_text, "Payment report as of 01.06.2024");
        assert!(document.page_number_footer);
    }

    #[test]
    fn test_report_table_covers_full_category_domain() {
        let user = user_model(1, "Ivanov");
        let (categories, payments) = fixture();

        let document = build_report(
            std::slice::from_ref(&user),
            &categories,
            &payments,
            date(2024, 6, 1),
        );

        assert_eq!(document.blocks[0], Block::Heading("Ivanov".to_string()));
        let Block::Table { header, rows } = &document.blocks[1] else {
            panic!("expected table block");
        };
        assert_eq!(header[0], "Category");
        assert_eq!(
            rows,
            &vec![
                ["Food".to_string(), "$250.00".to_string()],
                ["Transport".to_string(), "$90.00".to_string()],
                // Full domain: zero-spend category still appears
                ["Leisure".to_string(), "$0.00".to_string()],
            ]
        );
    }

    #[test]
    fn test_report_callouts() {
        let user = user_model(1, "Ivanov");
        let (categories, payments) = fixture();

        let document = build_report(
            std::slice::from_ref(&user),
            &categories,
            &payments,
            date(2024, 6, 1),
        );

        let Block::Paragraph { text, style, color } = &document.blocks[2] else {
            panic!("expected most-expensive callout");
        };
        assert_eq!(
            text,
            "Most expensive payment - Feast for $200.00 on 01.01.2024"
        );
        assert_eq!(*style, SUBHEADING_STYLE);
        assert_eq!(*color, TextColor::DarkRed);

        let Block::Paragraph { text, color, .. } = &document.blocks[3] else {
            panic!("expected least-expensive callout");
        };
        assert_eq!(
            text,
            "Least expensive payment - Snack for $50.00 on 02.01.2024"
        );
        assert_eq!(*color, TextColor::DarkGreen);
    }

    #[test]
    fn test_zero_payment_user_has_zero_table_and_no_callouts() {
        let user = user_model(9, "Nobody");
        let (categories, payments) = fixture();

        let document = build_report(
            std::slice::from_ref(&user),
            &categories,
            &payments,
            date(2024, 6, 1),
        );

        let Block::Table { rows, .. } = &document.blocks[1] else {
            panic!("expected table block");
        };
        assert!(rows.iter().all(|row| row[1] == "$0.00"));

        // No callouts, no placeholder: heading and table are all there is
        assert_eq!(document.blocks.len(), 2);
    }

    #[test]
    fn test_page_break_between_sections_but_not_after_last() {
        let users = vec![user_model(1, "Ivanov"), user_model(2, "Petrov")];
        let (categories, payments) = fixture();

        let document = build_report(&users, &categories, &payments, date(2024, 6, 1));

        let breaks = document
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::PageBreak))
            .count();
        assert_eq!(breaks, 1);
        assert!(!matches!(document.blocks.last(), Some(Block::PageBreak)));
    }
}
