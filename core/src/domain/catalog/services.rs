use tracing::{debug, instrument};

use crate::domain::{
    catalog::{
        entities::{Item, ListingRow},
        ports::{CatalogRepository, CatalogService},
        value_objects::{Page, PageRequest, SearchCriteria},
    },
    common::{entities::app_errors::CoreError, services::Service},
};

impl<CR> CatalogService for Service<CR>
where
    CR: CatalogRepository,
{
    #[instrument(skip(self, criteria), fields(offset = page.offset(), size = page.size()))]
    async fn search_admin_items(
        &self,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> Result<Page<Item>, CoreError> {
        page.validate(self.listing.max_page_size)?;

        let result = self
            .catalog_repository
            .find_admin_items(criteria, page)
            .await?;

        debug!(
            count = result.content.len(),
            total = result.total,
            "Listed admin items"
        );

        Ok(result)
    }

    #[instrument(skip(self, criteria), fields(offset = page.offset(), size = page.size()))]
    async fn get_main_items(
        &self,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> Result<Page<ListingRow>, CoreError> {
        page.validate(self.listing.max_page_size)?;

        let result = self
            .catalog_repository
            .find_main_items(criteria, page)
            .await?;

        debug!(
            count = result.content.len(),
            total = result.total,
            "Listed main items"
        );

        Ok(result)
    }

    #[instrument(skip(self, criteria), fields(offset = page.offset(), size = page.size()))]
    async fn get_gift_items(
        &self,
        criteria: SearchCriteria,
        category_code: i64,
        page: PageRequest,
    ) -> Result<Page<ListingRow>, CoreError> {
        page.validate(self.listing.max_page_size)?;

        let result = self
            .catalog_repository
            .find_gift_items(criteria, category_code, page)
            .await?;

        debug!(
            count = result.content.len(),
            total = result.total,
            "Listed gift items"
        );

        Ok(result)
    }

    #[instrument(skip(self, criteria), fields(offset = page.offset(), size = page.size()))]
    async fn get_detail_items(
        &self,
        tag_names: Vec<String>,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> Result<Page<ListingRow>, CoreError> {
        page.validate(self.listing.max_page_size)?;

        let result = self
            .catalog_repository
            .find_detail_items(tag_names, criteria, page)
            .await?;

        debug!(
            count = result.content.len(),
            total = result.total,
            "Listed detail search items"
        );

        Ok(result)
    }

    #[instrument(
        skip(self, criteria),
        fields(
            offset = page.offset(),
            size = page.size(),
            sort_column = ?criteria.sort_column,
            sort_direction = ?criteria.sort_direction,
        )
    )]
    async fn get_complex_items(
        &self,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> Result<Page<ListingRow>, CoreError> {
        page.validate(self.listing.max_page_size)?;

        let result = self
            .catalog_repository
            .find_complex_items(criteria, page)
            .await?;

        debug!(
            count = result.content.len(),
            total = result.total,
            "Listed complex search items"
        );

        Ok(result)
    }
}
