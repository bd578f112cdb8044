use std::{future::Future, time::Duration};

use sea_orm::{DatabaseConnection, DbErr, FromQueryResult, PaginatorTrait, QuerySelect, Select};
use tracing::error;

use crate::domain::{
    catalog::value_objects::{Page, PageRequest},
    common::entities::app_errors::CoreError,
};
use crate::entity::items;
use crate::infrastructure::db::map_db_error;

/// Runs a store call under the optional statement timeout.
pub async fn within<T, F>(
    query_timeout: Option<Duration>,
    context: &'static str,
    future: F,
) -> Result<T, CoreError>
where
    F: Future<Output = Result<T, DbErr>>,
{
    let result = match query_timeout {
        Some(limit) => tokio::time::timeout(limit, future).await.map_err(|_| {
            error!("{} timed out after {:?}", context, limit);
            CoreError::StoreTimeout
        })?,
        None => future.await,
    };

    result.map_err(|e| map_db_error(context, e))
}

/// Counts every match, then loads the requested slice.
///
/// The two statements are not read from one snapshot: a concurrent write
/// between them can make `total` disagree with the slice.
pub async fn fetch_page<M>(
    db: &DatabaseConnection,
    select: Select<items::Entity>,
    page: PageRequest,
    query_timeout: Option<Duration>,
) -> Result<Page<M>, CoreError>
where
    M: FromQueryResult + Send + Sync,
{
    let offset = u64::try_from(page.offset()).map_err(|_| CoreError::InvalidPagination)?;
    let limit = u64::try_from(page.size()).map_err(|_| CoreError::InvalidPagination)?;

    let total = within(
        query_timeout,
        "Failed to count listing rows",
        select.clone().count(db),
    )
    .await?;

    if total <= offset {
        return Ok(Page::new(Vec::new(), page, total));
    }

    let content = within(
        query_timeout,
        "Failed to fetch listing rows",
        select.offset(offset).limit(limit).into_model::<M>().all(db),
    )
    .await?;

    Ok(Page::new(content, page, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_elapsed_timeout_is_store_timeout() {
        let result = within(
            Some(Duration::from_millis(10)),
            "pending",
            std::future::pending::<Result<u64, DbErr>>(),
        )
        .await;

        assert_eq!(result, Err(CoreError::StoreTimeout));
        assert!(result.unwrap_err().is_retryable());
    }

    #[tokio::test]
    async fn test_store_errors_are_classified() {
        let result = within(None, "custom", async {
            Err::<u64, DbErr>(DbErr::Custom("boom".to_string()))
        })
        .await;
        assert_eq!(result, Err(CoreError::InternalServerError));

        let result = within(Some(Duration::from_secs(1)), "ok", async {
            Ok::<u64, DbErr>(3)
        })
        .await;
        assert_eq!(result, Ok(3));
    }
}
