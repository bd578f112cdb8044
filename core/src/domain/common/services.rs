use crate::domain::{catalog::ports::CatalogRepository, common::ListingConfig};

#[derive(Clone, Debug)]
pub struct Service<CR>
where
    CR: CatalogRepository,
{
    pub catalog_repository: CR,
    pub listing: ListingConfig,
}

impl<CR> Service<CR>
where
    CR: CatalogRepository,
{
    pub fn new(catalog_repository: CR, listing: ListingConfig) -> Self {
        Self {
            catalog_repository,
            listing,
        }
    }
}
