//! Payment business logic - Handles all payment-related operations.
//!
//! Creation validates the payment itself (non-empty name, finite non-negative
//! price, positive quantity) and its references: the owning user and category
//! must exist before the row is inserted, which keeps the referential
//! invariant the reports rely on.

use crate::{
    entities::{Category, Payment, User, payment},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all payments ordered by date ascending.
pub async fn get_all_payments(db: &DatabaseConnection) -> Result<Vec<payment::Model>> {
    Payment::find()
        .order_by_asc(payment::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all payments for a specific user, ordered by date ascending.
pub async fn get_payments_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<payment::Model>> {
    Payment::find()
        .filter(payment::Column::UserId.eq(user_id))
        .order_by_asc(payment::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a payment by its unique ID.
pub async fn get_payment_by_id(
    db: &DatabaseConnection,
    payment_id: i64,
) -> Result<Option<payment::Model>> {
    Payment::find_by_id(payment_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new payment after validating its fields and references.
#[allow(clippy::too_many_arguments)]
pub async fn create_payment(
    db: &DatabaseConnection,
    user_id: i64,
    category_id: i64,
    name: String,
    date: NaiveDate,
    price: f64,
    quantity: i32,
) -> Result<payment::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Payment name cannot be empty".to_string(),
        });
    }

    if !price.is_finite() || price < 0.0 {
        return Err(Error::InvalidAmount { amount: price });
    }

    if quantity < 1 {
        return Err(Error::InvalidQuantity { quantity });
    }

    // Referential checks before insert
    User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            name: user_id.to_string(),
        })?;

    Category::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::CategoryNotFound {
            name: category_id.to_string(),
        })?;

    let model = payment::ActiveModel {
        name: Set(name.trim().to_string()),
        date: Set(date),
        price: Set(price),
        quantity: Set(quantity),
        user_id: Set(user_id),
        category_id: Set(category_id),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Deletes a payment by ID.
pub async fn delete_payment(db: &DatabaseConnection, payment_id: i64) -> Result<()> {
    let payment = Payment::find_by_id(payment_id)
        .one(db)
        .await?
        .ok_or(Error::PaymentNotFound { id: payment_id })?;

    payment.delete(db).await?;
    Ok(())
}
