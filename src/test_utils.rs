//! Shared test utilities.
//!
//! Two kinds of helpers: database setup (in-memory SQLite with all tables)
//! plus creators with sensible defaults for integration-style tests, and
//! plain model constructors for the pure builders, which never need a
//! database.

use crate::{
    core::{category, payment, user},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory SQLite database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test user with the given full name.
pub async fn create_test_user(
    db: &DatabaseConnection,
    fio: &str,
) -> Result<entities::user::Model> {
    user::create_user(db, fio.to_string()).await
}

/// Creates a test category with the given name.
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::category::Model> {
    category::create_category(db, name.to_string()).await
}

/// Creates a test payment with sensible defaults.
///
/// # Defaults
/// * `name`: `"Test payment"`
/// * `date`: 2024-01-15
pub async fn create_test_payment(
    db: &DatabaseConnection,
    user_id: i64,
    category_id: i64,
    price: f64,
    quantity: i32,
) -> Result<entities::payment::Model> {
    payment::create_payment(
        db,
        user_id,
        category_id,
        "Test payment".to_string(),
        date(2024, 1, 15),
        price,
        quantity,
    )
    .await
}

/// Creates a test payment with custom parameters.
pub async fn create_custom_payment(
    db: &DatabaseConnection,
    user_id: i64,
    category_id: i64,
    name: &str,
    date: NaiveDate,
    price: f64,
    quantity: i32,
) -> Result<entities::payment::Model> {
    payment::create_payment(db, user_id, category_id, name.to_string(), date, price, quantity).await
}

/// Sets up a complete test environment with one user and one category.
/// Returns (db, user, category) for common test scenarios.
pub async fn setup_with_user_and_category() -> Result<(
    DatabaseConnection,
    entities::user::Model,
    entities::category::Model,
)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db, "Ivanov").await?;
    let category = create_test_category(&db, "Food").await?;
    Ok((db, user, category))
}

/// Builds a `NaiveDate`, panicking on invalid input (tests only).
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Plain user model for pure-builder tests.
#[must_use]
pub fn user_model(id: i64, fio: &str) -> entities::user::Model {
    entities::user::Model {
        id,
        fio: fio.to_string(),
    }
}

/// Plain category model for pure-builder tests.
#[must_use]
pub fn category_model(id: i64, name: &str) -> entities::category::Model {
    entities::category::Model {
        id,
        name: name.to_string(),
    }
}

/// Plain payment model for pure-builder tests.
#[must_use]
pub fn payment_model(
    id: i64,
    name: &str,
    date: NaiveDate,
    price: f64,
    quantity: i32,
    user_id: i64,
    category_id: i64,
) -> entities::payment::Model {
    entities::payment::Model {
        id,
        name: name.to_string(),
        date,
        price,
        quantity,
        user_id,
        category_id,
    }
}
