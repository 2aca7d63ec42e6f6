//! Database connection and schema creation.
//!
//! This module handles the SQLite connection and table creation using SeaORM.
//! Table creation uses `Schema::create_table_from_entity` so the database
//! schema is generated from the entity definitions without manual SQL, and is
//! marked `if_not_exists` so startup is idempotent against an existing file.

use crate::entities::{Category, Payment, User};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the database at the given URL.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions (users, categories, payments).
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut user_table = schema.create_table_from_entity(User);
    let mut category_table = schema.create_table_from_entity(Category);
    let mut payment_table = schema.create_table_from_entity(Payment);

    db.execute(builder.build(user_table.if_not_exists())).await?;
    db.execute(builder.build(category_table.if_not_exists()))
        .await?;
    db.execute(builder.build(payment_table.if_not_exists()))
        .await?;

    Ok(())
}
