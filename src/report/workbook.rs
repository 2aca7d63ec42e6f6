//! Spreadsheet report builder - workbook object model plus the builder that
//! fills it from users, categories and payments.
//!
//! The model keeps what the spreadsheet sink needs and nothing more: cell
//! values (text, number or formula), merge spans, the handful of styles the
//! report uses, and per-sheet border/auto-fit flags. Amount cells are
//! formulas over the price and quantity columns; subtotal cells are range
//! sums over exactly the payment rows just emitted, derived from row counts
//! rather than re-aggregated.

use crate::entities::{category, payment, user};
use crate::report::DATE_FORMAT;
use std::collections::HashMap;

/// Name of the summary sheet holding the grand total across all users.
pub const SUMMARY_SHEET_NAME: &str = "Grand Total";

/// Number format applied to price and amount cells.
pub const NUMBER_FORMAT: &str = "0.00";

/// Column headers of every user sheet, columns A through E.
pub const COLUMN_HEADERS: [&str; 5] = ["Date", "Name", "Price", "Quantity", "Amount"];

/// Horizontal alignment of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Default alignment
    #[default]
    Left,
    /// Centered
    Center,
    /// Right-aligned
    Right,
}

/// The cell payload: literal text, a literal number, or a formula string.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Literal text
    Text(String),
    /// Literal number
    Number(f64),
    /// Formula in `=...` notation
    Formula(String),
}

/// Styling subset used by the report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellStyle {
    /// Bold font
    pub bold: bool,
    /// Italic font
    pub italic: bool,
    /// Horizontal alignment
    pub align: Align,
    /// Number format string, e.g. `"0.00"`
    pub number_format: Option<&'static str>,
    /// Font color name, e.g. `"red"`
    pub color: Option<&'static str>,
}

/// One cell of a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Cell payload
    pub value: CellValue,
    /// Applied style
    pub style: CellStyle,
    /// Number of additional cells merged to the right (0 = no merge)
    pub merge_across: u32,
}

impl Cell {
    /// Plain text cell with default style.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: CellValue::Text(value.into()),
            style: CellStyle::default(),
            merge_across: 0,
        }
    }

    /// Plain number cell with default style.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self {
            value: CellValue::Number(value),
            style: CellStyle::default(),
            merge_across: 0,
        }
    }

    /// Formula cell with default style.
    #[must_use]
    pub fn formula(value: impl Into<String>) -> Self {
        Self {
            value: CellValue::Formula(value.into()),
            style: CellStyle::default(),
            merge_across: 0,
        }
    }
}

/// A row is the ordered list of its cells, column A first.
pub type Row = Vec<Cell>;

/// One sheet of the workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Sheet name (user full name, or the summary sheet name)
    pub name: String,
    /// Rows in order, row 1 first
    pub rows: Vec<Row>,
    /// Draw borders around the used range
    pub bordered: bool,
    /// Auto-fit column widths
    pub autofit: bool,
}

/// The whole workbook: one sheet per user, summary sheet last.
#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    /// All sheets in emission order
    pub sheets: Vec<Sheet>,
}

/// Builds the spreadsheet report: one sheet per user in ascending full-name
/// order, then the grand-total summary sheet.
///
/// Per user sheet: a bold header row; then, for each category the user has at
/// least one payment in (categories with no payments for the user are not
/// emitted here - the chart and document reports enumerate the full domain
/// instead), a merged italic category row, the payments sorted by date, and a
/// merged bold subtotal row summing exactly the emitted payment rows.
///
/// Duplicate full names get a numeric suffix (`"FIO (2)"`) so sheet names
/// stay unique.
#[must_use]
pub fn build_workbook(
    users: &[user::Model],
    categories: &[category::Model],
    payments: &[payment::Model],
) -> Workbook {
    let category_names: HashMap<i64, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let mut sorted_users: Vec<&user::Model> = users.iter().collect();
    sorted_users.sort_by(|a, b| a.fio.cmp(&b.fio));

    let mut used_names: HashMap<String, u32> = HashMap::new();
    let mut sheets = Vec::with_capacity(sorted_users.len() + 1);
    // Sheet name and payment count per user, for the grand-total ranges
    let mut summary_spans: Vec<(String, usize)> = Vec::new();

    for user in &sorted_users {
        let sheet_name = disambiguate(&mut used_names, &user.fio);
        let user_payments: Vec<&payment::Model> =
            payments.iter().filter(|p| p.user_id == user.id).collect();

        let sheet = build_user_sheet(&sheet_name, &user_payments, &category_names);
        summary_spans.push((sheet_name, user_payments.len()));
        sheets.push(sheet);
    }

    sheets.push(build_summary_sheet(&summary_spans));

    Workbook { sheets }
}

/// Returns `name`, or `"name (n)"` when the name was already taken.
fn disambiguate(used: &mut HashMap<String, u32>, name: &str) -> String {
    let count = used.entry(name.to_string()).or_insert(0);
    *count += 1;
    if *count == 1 {
        name.to_string()
    } else {
        format!("{name} ({count})")
    }
}

fn build_user_sheet(
    sheet_name: &str,
    user_payments: &[&payment::Model],
    category_names: &HashMap<i64, &str>,
) -> Sheet {
    let mut rows: Vec<Row> = Vec::new();

    // Header row (row 1)
    rows.push(
        COLUMN_HEADERS
            .iter()
            .map(|h| {
                let mut cell = Cell::text(*h);
                cell.style.bold = true;
                cell.style.align = Align::Center;
                cell
            })
            .collect(),
    );

    // Group the user's payments by category, groups sorted by category name,
    // payments within a group sorted by date.
    let mut groups: HashMap<i64, Vec<&payment::Model>> = HashMap::new();
    for &payment in user_payments {
        groups.entry(payment.category_id).or_default().push(payment);
    }
    let mut sorted_groups: Vec<(String, Vec<&payment::Model>)> = groups
        .into_iter()
        .map(|(category_id, mut group)| {
            group.sort_by_key(|p| p.date);
            let name = category_names
                .get(&category_id)
                .map_or_else(|| format!("Category {category_id}"), ToString::to_string);
            (name, group)
        })
        .collect();
    sorted_groups.sort_by(|a, b| a.0.cmp(&b.0));

    for (category_name, group) in sorted_groups {
        // Merged category-name row
        let mut category_cell = Cell::text(category_name);
        category_cell.style.italic = true;
        category_cell.style.align = Align::Center;
        category_cell.merge_across = 4;
        rows.push(vec![category_cell]);

        let first_payment_row = rows.len() + 1;
        for payment in &group {
            let row_index = rows.len() + 1;
            let mut price = Cell::number(payment.price);
            price.style.number_format = Some(NUMBER_FORMAT);
            let mut amount = Cell::formula(format!("=C{row_index}*D{row_index}"));
            amount.style.number_format = Some(NUMBER_FORMAT);

            rows.push(vec![
                Cell::text(payment.date.format(DATE_FORMAT).to_string()),
                Cell::text(payment.name.clone()),
                price,
                Cell::number(f64::from(payment.quantity)),
                amount,
            ]);
        }
        let last_payment_row = rows.len();

        // Subtotal row: merged label across A-D, range sum in E over exactly
        // the payment rows just emitted.
        let mut label = Cell::text("TOTAL:");
        label.style.bold = true;
        label.style.align = Align::Right;
        label.merge_across = 3;
        let mut subtotal = Cell::formula(format!("=SUM(E{first_payment_row}:E{last_payment_row})"));
        subtotal.style.bold = true;
        subtotal.style.number_format = Some(NUMBER_FORMAT);
        rows.push(vec![label, subtotal]);
    }

    Sheet {
        name: sheet_name.to_string(),
        rows,
        bordered: true,
        autofit: true,
    }
}

/// The summary sheet: a single row whose formula cell sums the Amount column
/// across every user sheet. Each per-sheet range starts at row 2 and spans as
/// many rows as that user contributed payments; users without payments
/// contribute no range.
fn build_summary_sheet(summary_spans: &[(String, usize)]) -> Sheet {
    let ranges: Vec<String> = summary_spans
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(name, count)| format!("'{name}'!E2:E{}", count + 1))
        .collect();

    let red = |mut cell: Cell| {
        cell.style.color = Some("red");
        cell
    };

    // No payments anywhere: a literal zero instead of an empty SUM()
    let mut total = if ranges.is_empty() {
        Cell::number(0.0)
    } else {
        Cell::formula(format!("=SUM({})", ranges.join(",")))
    };
    total.style.number_format = Some(NUMBER_FORMAT);
    let total = red(total);

    Sheet {
        name: SUMMARY_SHEET_NAME.to_string(),
        rows: vec![vec![
            red(Cell::text("Grand total:")),
            red(Cell::text("Sum of all payments:")),
            total,
        ]],
        bordered: false,
        autofit: false,
    }
}
