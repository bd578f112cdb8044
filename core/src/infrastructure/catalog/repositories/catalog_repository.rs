use chrono::Utc;
use sea_orm::DatabaseConnection;
use tracing::error;

use crate::{
    domain::{
        catalog::{
            entities::{Item, ListingRow},
            ports::CatalogRepository,
            value_objects::{Page, PageRequest, SearchCriteria},
        },
        common::{ListingConfig, entities::app_errors::CoreError},
    },
    entity::items::Model as ItemModel,
    infrastructure::catalog::{
        mappers::{GiftListingRowModel, ListingRowModel},
        pager::fetch_page,
        query::{self, ListingQuery},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresCatalogRepository {
    pub db: DatabaseConnection,
    pub listing: ListingConfig,
}

impl PostgresCatalogRepository {
    pub fn new(db: DatabaseConnection, listing: ListingConfig) -> Self {
        Self { db, listing }
    }

    async fn fetch_listing<M>(
        &self,
        query: ListingQuery,
        page: PageRequest,
    ) -> Result<Page<ListingRow>, CoreError>
    where
        M: sea_orm::FromQueryResult + Send + Sync + Into<ListingRow>,
    {
        let rows = fetch_page::<M>(&self.db, query.select, page, self.listing.query_timeout).await?;

        Ok(rows.map(Into::into))
    }
}

impl CatalogRepository for PostgresCatalogRepository {
    async fn find_admin_items(
        &self,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> Result<Page<Item>, CoreError> {
        let query = query::admin_search(
            &criteria,
            Utc::now(),
            self.listing.legacy_six_month_window,
        );

        let models =
            fetch_page::<ItemModel>(&self.db, query.select, page, self.listing.query_timeout)
                .await?;

        let items = models
            .content
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<Item>, CoreError>>()
            .map_err(|e| {
                error!("Failed to map admin items: {}", e);
                e
            })?;

        Ok(Page::new(items, models.page_request, models.total))
    }

    async fn find_main_items(
        &self,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> Result<Page<ListingRow>, CoreError> {
        self.fetch_listing::<ListingRowModel>(query::main_listing(&criteria), page)
            .await
    }

    async fn find_gift_items(
        &self,
        criteria: SearchCriteria,
        category_code: i64,
        page: PageRequest,
    ) -> Result<Page<ListingRow>, CoreError> {
        self.fetch_listing::<GiftListingRowModel>(
            query::gift_listing(&criteria, category_code),
            page,
        )
        .await
    }

    async fn find_detail_items(
        &self,
        tag_names: Vec<String>,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> Result<Page<ListingRow>, CoreError> {
        self.fetch_listing::<ListingRowModel>(query::detail_search(&tag_names, &criteria), page)
            .await
    }

    async fn find_complex_items(
        &self,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> Result<Page<ListingRow>, CoreError> {
        self.fetch_listing::<ListingRowModel>(query::complex_search(&criteria), page)
            .await
    }
}
