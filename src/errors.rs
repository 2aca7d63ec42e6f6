//! Unified error types and result handling for the whole crate.

use thiserror::Error;

/// Crate-wide error type. Domain failures get their own variants; database,
/// I/O and environment errors convert via `#[from]`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong while loading configuration
        message: String,
    },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("User not found: {name}")]
    UserNotFound {
        /// Name or id of the missing user
        name: String,
    },

    #[error("Category not found: {name}")]
    CategoryNotFound {
        /// Name or id of the missing category
        name: String,
    },

    #[error("Category still referenced by payments: {name}")]
    CategoryInUse {
        /// Name of the category that cannot be deleted
        name: String,
    },

    #[error("Payment not found: {id}")]
    PaymentNotFound {
        /// Id of the missing payment
        id: i64,
    },

    #[error("Invalid price: {amount}")]
    InvalidAmount {
        /// The rejected price value
        amount: f64,
    },

    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected quantity value
        quantity: i32,
    },

    #[error("Export error: {message}")]
    Export {
        /// Reason the export could not be written
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
