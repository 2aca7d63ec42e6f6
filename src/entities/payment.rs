//! Payment entity - Represents a single recorded payment.
//!
//! Each payment has a name, date, unit price and quantity, and references
//! exactly one user and one category. The line total (`price * quantity`) is
//! always derived, never stored.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    /// Unique identifier for the payment
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the payment (e.g., "Groceries")
    pub name: String,
    /// Date the payment was made
    pub date: Date,
    /// Unit price
    pub price: f64,
    /// Quantity of units purchased
    pub quantity: i32,
    /// ID of the user who made the payment
    pub user_id: i64,
    /// ID of the category this payment belongs to
    pub category_id: i64,
}

/// Defines relationships between Payment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each payment belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// Each payment belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
