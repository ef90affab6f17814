//! Read contract against the external store.
//!
//! Every list surface in the console goes through the same four command
//! shapes: list (filter + sort + page), get by id, insert, update. Inserts
//! and updates are entity-specific and live in [`crate::core`]; this module
//! provides the shared read shapes - pagination types and generic fetch
//! helpers usable with any entity.
//!
//! Filters are deliberately restricted to field equality and ranges so the
//! contract stays portable across storage backends; each core module exposes
//! them as typed filter structs rather than arbitrary expressions.

use crate::errors::{Error, Result};
use sea_orm::{
    DatabaseConnection, EntityName, EntityTrait, Order, PaginatorTrait, PrimaryKeyTrait, Select,
};

/// Sort direction for list commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl From<SortOrder> for Order {
    fn from(value: SortOrder) -> Self {
        match value {
            SortOrder::Asc => Self::Asc,
            SortOrder::Desc => Self::Desc,
        }
    }
}

/// Zero-based page selection for list commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u64,
    /// Rows per page, at least 1
    pub per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 50,
        }
    }
}

impl PageRequest {
    #[must_use]
    pub const fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }
}

/// One ordered page of rows plus totals for the whole result set.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Rows on this page, in query order
    pub items: Vec<T>,
    /// Zero-based index of this page
    pub page: u64,
    /// Rows per page used for the query
    pub per_page: u64,
    /// Total matching rows across all pages
    pub total_items: u64,
    /// Total number of pages
    pub total_pages: u64,
}

/// Runs a prepared select as a paged list command.
///
/// The select carries the caller's filters and ordering; this helper only
/// adds the page window and result-set totals.
pub async fn fetch_page<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    request: PageRequest,
) -> Result<Page<E::Model>>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    let per_page = request.per_page.max(1);
    let paginator = select.paginate(db, per_page);
    let totals = paginator.num_items_and_pages().await?;
    let items = paginator.fetch_page(request.page).await?;

    Ok(Page {
        items,
        page: request.page,
        per_page,
        total_items: totals.number_of_items,
        total_pages: totals.number_of_pages,
    })
}

/// Fetches a single row by primary key, or fails with `NotFound` naming the
/// entity's table.
pub async fn get_by_id<E>(db: &DatabaseConnection, id: i64) -> Result<E::Model>
where
    E: EntityTrait + Default,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
{
    match E::find_by_id(id).one(db).await? {
        Some(model) => Ok(model),
        None => Err(Error::NotFound {
            entity: E::default().table_name().to_owned(),
            id,
        }),
    }
}

/// Counts rows matching a prepared select.
pub async fn count<E>(db: &DatabaseConnection, select: Select<E>) -> Result<u64>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    select.count(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{client, Client};
    use crate::test_utils::*;
    use sea_orm::QueryOrder;

    #[tokio::test]
    async fn test_fetch_page_windows_and_totals() -> Result<()> {
        let db = setup_test_db().await?;

        for i in 0..7 {
            create_test_client(&db, &format!("Member {i}")).await?;
        }

        let select = Client::find().order_by_asc(client::Column::FullName);
        let page = fetch_page(&db, select.clone(), PageRequest::new(0, 3)).await?;
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total_items, 7);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].full_name, "Member 0");

        let last = fetch_page(&db, select, PageRequest::new(2, 3)).await?;
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].full_name, "Member 6");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_by_id_not_found_names_table() -> Result<()> {
        let db = setup_test_db().await?;

        let err = get_by_id::<Client>(&db, 999).await.unwrap_err();
        match err {
            Error::NotFound { entity, id } => {
                assert_eq!(entity, "clients");
                assert_eq!(id, 999);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_get_by_id_found() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_test_client(&db, "Asha Verma").await?;
        let fetched = get_by_id::<Client>(&db, created.id).await?;
        assert_eq!(fetched, created);

        Ok(())
    }
}
