//! Category business logic - Handles all category-related operations.
//!
//! Categories are the enumeration domain for chart series and document report
//! rows. Their canonical order is ascending id (insertion order), which is why
//! `get_all_categories` never re-sorts by name.

use crate::{
    entities::{Category, Payment, category, payment},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::info;

/// Retrieves all categories in enumeration order (ascending id).
pub async fn get_all_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>> {
    Category::find()
        .order_by_asc(category::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a category by its unique ID.
pub async fn get_category_by_id(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Option<category::Model>> {
    Category::find_by_id(category_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a category by name, returning None if no such category exists.
pub async fn get_category_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<category::Model>> {
    Category::find()
        .filter(category::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new category, validating that the name is not empty.
/// Whitespace around the name is trimmed before storing.
pub async fn create_category(db: &DatabaseConnection, name: String) -> Result<category::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Category name cannot be empty".to_string(),
        });
    }

    let category = category::ActiveModel {
        name: Set(name.trim().to_string()),
        ..Default::default()
    };

    let result = category.insert(db).await?;
    Ok(result)
}

/// Deletes a category. Fails with [`Error::CategoryInUse`] while any payment
/// still references it, so payments never point at a missing category.
pub async fn delete_category(db: &DatabaseConnection, category_id: i64) -> Result<()> {
    let category = Category::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::CategoryNotFound {
            name: category_id.to_string(),
        })?;

    let referencing = Payment::find()
        .filter(payment::Column::CategoryId.eq(category_id))
        .count(db)
        .await?;
    if referencing > 0 {
        return Err(Error::CategoryInUse {
            name: category.name,
        });
    }

    category.delete(db).await?;
    Ok(())
}

/// Seeds categories by name from configuration, creating only the missing ones.
/// Safe to run on every startup.
pub async fn seed_categories(db: &DatabaseConnection, names: &[String]) -> Result<()> {
    for name in names {
        if get_category_by_name(db, name).await?.is_none() {
            create_category(db, name.clone()).await?;
            info!(category = %name, "seeded category");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_and_get_category() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_category(&db, "Food".to_string()).await?;
        let fetched = get_category_by_name(&db, "Food").await?;
        assert_eq!(fetched.map(|c| c.id), Some(created.id));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_category_rejects_empty_name() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_category(&db, "".to_string()).await;
        assert!(matches!(result, Err(Error::Config { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_enumeration_order_is_insertion_order() -> Result<()> {
        let db = setup_test_db().await?;

        // Deliberately not alphabetical
        create_test_category(&db, "Transport").await?;
        create_test_category(&db, "Food").await?;
        create_test_category(&db, "Leisure").await?;

        let categories = get_all_categories(&db).await?;
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Transport", "Food", "Leisure"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_in_use_fails() -> Result<()> {
        let (db, user, category) = setup_with_user_and_category().await?;
        create_test_payment(&db, user.id, category.id, 10.0, 1).await?;

        let result = delete_category(&db, category.id).await;
        assert!(matches!(result, Err(Error::CategoryInUse { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unused_category() -> Result<()> {
        let db = setup_test_db().await?;
        let category = create_test_category(&db, "Food").await?;

        delete_category(&db, category.id).await?;
        assert!(get_category_by_id(&db, category.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_categories_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let names = vec!["Food".to_string(), "Transport".to_string()];

        seed_categories(&db, &names).await?;
        seed_categories(&db, &names).await?;

        let categories = get_all_categories(&db).await?;
        assert_eq!(categories.len(), 2);

        Ok(())
    }
}
