//! User business logic - Handles all user-related operations.
//!
//! Provides functions for creating, retrieving and deleting users. Deleting a
//! user also deletes that user's payments inside a single database transaction
//! so no payment is ever left referencing a missing user.

use crate::{
    entities::{User, payment, user},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Retrieves all users ordered by full name ascending.
///
/// This is the enumeration order the spreadsheet report processes users in,
/// and the order users are listed in by the CLI.
pub async fn get_all_users(db: &DatabaseConnection) -> Result<Vec<user::Model>> {
    User::find()
        .order_by_asc(user::Column::Fio)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a user by its unique ID.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Finds a user by full name, returning None if no such user exists.
pub async fn get_user_by_fio(db: &DatabaseConnection, fio: &str) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Fio.eq(fio))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new user, validating that the full name is not empty.
/// Whitespace around the name is trimmed before storing.
pub async fn create_user(db: &DatabaseConnection, fio: String) -> Result<user::Model> {
    if fio.trim().is_empty() {
        return Err(Error::Config {
            message: "User name cannot be empty".to_string(),
        });
    }

    let user = user::ActiveModel {
        fio: Set(fio.trim().to_string()),
        ..Default::default()
    };

    let result = user.insert(db).await?;
    Ok(result)
}

/// Deletes a user together with all of that user's payments.
///
/// Runs inside a transaction: either the user and every owned payment are
/// removed, or nothing is.
pub async fn delete_user(db: &DatabaseConnection, user_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let user = User::find_by_id(user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            name: user_id.to_string(),
        })?;

    crate::entities::Payment::delete_many()
        .filter(payment::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;

    user.delete(&txn).await?;
    txn.commit().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_and_get_user() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_user(&db, "Ivanov Ivan".to_string()).await?;
        assert_eq!(created.fio, "Ivanov Ivan");

        let fetched = get_user_by_fio(&db, "Ivanov Ivan").await?;
        assert_eq!(fetched.map(|u| u.id), Some(created.id));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_trims_whitespace() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_user(&db, "  Petrov Petr  ".to_string()).await?;
        assert_eq!(created.fio, "Petrov Petr");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_rejects_empty_name() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_user(&db, "   ".to_string()).await;
        assert!(matches!(result, Err(Error::Config { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_users_sorted_by_fio() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_user(&db, "Sidorov").await?;
        create_test_user(&db, "Ivanov").await?;
        create_test_user(&db, "Petrov").await?;

        let users = get_all_users(&db).await?;
        let names: Vec<_> = users.iter().map(|u| u.fio.as_str()).collect();
        assert_eq!(names, vec!["Ivanov", "Petrov", "Sidorov"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_user_cascades_payments() -> Result<()> {
        let (db, user, category) = setup_with_user_and_category().await?;
        create_test_payment(&db, user.id, category.id, 10.0, 2).await?;
        create_test_payment(&db, user.id, category.id, 5.0, 1).await?;

        delete_user(&db, user.id).await?;

        assert!(get_user_by_id(&db, user.id).await?.is_none());
        let remaining = crate::core::payment::get_all_payments(&db).await?;
        assert!(remaining.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_user() -> Result<()> {
        let db = setup_test_db().await?;

        let result = delete_user(&db, 42).await;
        assert!(matches!(result, Err(Error::UserNotFound { .. })));

        Ok(())
    }
}
