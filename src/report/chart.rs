//! Chart data builder - per-category spending series for one user.
//!
//! `build_series` walks the full category domain in its given enumeration
//! order and produces one point per category, zero points included. The axis
//! presentation defaults are fixed constants handed to the chart sink, not
//! values computed here; the text renderer below is the sink this crate ships.

use crate::core::aggregate::total_spend;
use crate::entities::{category, payment, user};

/// One data point of the per-category series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Category name (X axis label)
    pub label: String,
    /// Total spend of the selected user in this category
    pub amount: f64,
}

/// Fixed axis-label presentation defaults for the chart sink.
#[derive(Debug, Clone, Copy)]
pub struct AxisStyle {
    /// Label rotation in degrees
    pub label_angle: u32,
    /// Interval between labels (1 = every category labeled)
    pub label_interval: u32,
    /// Stagger labels to keep long names readable
    pub staggered: bool,
    /// Label format string
    pub label_format: &'static str,
}

/// The presentation defaults every chart rendering uses.
pub const AXIS_STYLE: AxisStyle = AxisStyle {
    label_angle: 45,
    label_interval: 1,
    staggered: true,
    label_format: "{0}",
};

/// Builds the per-category series for `user`: one point per category in the
/// given enumeration order, amount 0 when the user has no payments there.
/// An empty category domain yields an empty series ("nothing to draw").
#[must_use]
pub fn build_series(
    user: &user::Model,
    categories: &[category::Model],
    payments: &[payment::Model],
) -> Vec<ChartPoint> {
    categories
        .iter()
        .map(|category| ChartPoint {
            label: category.name.clone(),
            amount: total_spend(user, category, payments),
        })
        .collect()
}

/// Renders the series as a labeled text bar chart for the CLI sink.
///
/// Bar lengths are scaled against the largest amount in the series; a series
/// of all zeros renders empty bars. Returns an empty string for an empty
/// series, which callers treat as "nothing to draw".
#[must_use]
pub fn render_bar_chart(points: &[ChartPoint], bar_length: usize) -> String {
    let max = points.iter().map(|p| p.amount).fold(0.0_f64, f64::max);
    let label_width = points.iter().map(|p| p.label.len()).max().unwrap_or(0);

    let mut out = String::new();
    for point in points {
        let ratio = if max > 0.0 { point.amount / max } else { 0.0 };
        // Cast safety: ratio ∈ [0, 1], bar_length is small. Truncation is
        // intentional for display.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let filled = (ratio * bar_length as f64).round() as usize;
        let empty = bar_length.saturating_sub(filled);

        out.push_str(&format!(
            "{:label_width$} [{}{}] {:.2}\n",
            point.label,
            "█".repeat(filled),
            "░".repeat(empty),
            point.amount,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    fn ivanov_fixture() -> (
        crate::entities::user::Model,
        Vec<crate::entities::category::Model>,
        Vec<crate::entities::payment::Model>,
    ) {
        let user = user_model(1, "Ivanov");
        let categories = vec![
            category_model(1, "Food"),
            category_model(2, "Transport"),
            category_model(3, "Leisure"),
        ];
        let payments = vec![
            payment_model(1, "A", date(2024, 1, 1), 100.0, 2, 1, 1),
            payment_model(2, "B", date(2024, 1, 2), 50.0, 1, 1, 1),
            payment_model(3, "C", date(2024, 1, 3), 30.0, 3, 1, 2),
        ];
        (user, categories, payments)
    }

    #[test]
    fn test_series_one_point_per_category_in_order() {
        let (user, categories, payments) = ivanov_fixture();

        let series = build_series(&user, &categories, &payments);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0], ChartPoint { label: "Food".into(), amount: 250.0 });
        assert_eq!(series[1], ChartPoint { label: "Transport".into(), amount: 90.0 });
        // Category with no payments still appears, with zero
        assert_eq!(series[2], ChartPoint { label: "Leisure".into(), amount: 0.0 });
    }

    #[test]
    fn test_series_preserves_enumeration_order_not_name_order() {
        let user = user_model(1, "Ivanov");
        let categories = vec![category_model(5, "Zoo"), category_model(6, "Apples")];

        let series = build_series(&user, &categories, &[]);
        assert_eq!(series[0].label, "Zoo");
        assert_eq!(series[1].label, "Apples");
    }

    #[test]
    fn test_series_empty_domain_is_empty() {
        let user = user_model(1, "Ivanov");
        assert!(build_series(&user, &[], &[]).is_empty());
    }

    #[test]
    fn test_series_is_idempotent() {
        let (user, categories, payments) = ivanov_fixture();

        let first = build_series(&user, &categories, &payments);
        let second = build_series(&user, &categories, &payments);
        assert_eq!(first, second);
    }

    #[test]
    fn test_axis_style_defaults() {
        assert_eq!(AXIS_STYLE.label_angle, 45);
        assert_eq!(AXIS_STYLE.label_interval, 1);
        assert!(AXIS_STYLE.staggered);
        assert_eq!(AXIS_STYLE.label_format, "{0}");
    }

    #[test]
    fn test_render_bar_chart() {
        let points = vec![
            ChartPoint { label: "Food".into(), amount: 100.0 },
            ChartPoint { label: "Transport".into(), amount: 50.0 },
        ];

        let rendered = render_bar_chart(&points, 10);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("██████████"));
        assert!(lines[0].ends_with("100.00"));
        assert!(lines[1].contains("█████░░░░░"));
    }

    #[test]
    fn test_render_bar_chart_all_zero() {
        let points = vec![ChartPoint { label: "Food".into(), amount: 0.0 }];

        let rendered = render_bar_chart(&points, 4);
        assert!(rendered.contains("[░░░░]"));
    }

    #[test]
    fn test_render_bar_chart_empty_series() {
        assert_eq!(render_bar_chart(&[], 10), "");
    }
}
