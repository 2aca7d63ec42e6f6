//! Pure aggregation over loaded payment collections.
//!
//! Everything here is synchronous and side-effect free: the report builders
//! call these functions with snapshots of the database collections. Absent
//! data is a valid zero result, never an error.

use crate::entities::{category, payment, user};

/// Line total of a single payment: unit price times quantity.
/// Always derived, never stored.
#[must_use]
pub fn line_total(payment: &payment::Model) -> f64 {
    payment.price * f64::from(payment.quantity)
}

/// Total spend of `user` in `category`: the sum of line totals over the
/// payments matching both, 0.0 when none match.
#[must_use]
pub fn total_spend(
    user: &user::Model,
    category: &category::Model,
    payments: &[payment::Model],
) -> f64 {
    payments
        .iter()
        .filter(|p| p.user_id == user.id && p.category_id == category.id)
        .map(line_total)
        // Explicit 0.0 start: std's empty f64 sum yields -0.0 (IEEE additive
        // identity), which would format as "$-0.00".
        .fold(0.0, |acc, total| acc + total)
}

/// The payment with the largest line total, or None for an empty set.
/// Ties resolve to the first payment encountered in input order.
#[must_use]
pub fn most_expensive(payments: &[payment::Model]) -> Option<&payment::Model> {
    payments.iter().fold(None, |best, p| match best {
        Some(b) if line_total(p) > line_total(b) => Some(p),
        Some(b) => Some(b),
        None => Some(p),
    })
}

/// The payment with the smallest line total, or None for an empty set.
/// Ties resolve to the first payment encountered in input order.
#[must_use]
pub fn least_expensive(payments: &[payment::Model]) -> Option<&payment::Model> {
    payments.iter().fold(None, |best, p| match best {
        Some(b) if line_total(p) < line_total(b) => Some(p),
        Some(b) => Some(b),
        None => Some(p),
    })
}
