use std::future::Future;

use crate::domain::{
    catalog::{
        entities::{Item, ListingRow},
        value_objects::{Page, PageRequest, SearchCriteria},
    },
    common::entities::app_errors::CoreError,
};

/// Listing operations exposed to callers
pub trait CatalogService: Send + Sync {
    /// Admin item search over date window, sell status and free text
    fn search_admin_items(
        &self,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<Item>, CoreError>> + Send;

    /// Storefront main listing
    fn get_main_items(
        &self,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<ListingRow>, CoreError>> + Send;

    /// Gift listing restricted to one category
    fn get_gift_items(
        &self,
        criteria: SearchCriteria,
        category_code: i64,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<ListingRow>, CoreError>> + Send;

    /// Detail search faceted by tag names
    fn get_detail_items(
        &self,
        tag_names: Vec<String>,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<ListingRow>, CoreError>> + Send;

    /// Multi-criteria search with a caller-chosen sort
    fn get_complex_items(
        &self,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<ListingRow>, CoreError>> + Send;
}

/// Read access to the catalog tables
#[cfg_attr(test, mockall::automock)]
pub trait CatalogRepository: Send + Sync {
    /// Items matching the admin filters, newest id first
    fn find_admin_items(
        &self,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<Item>, CoreError>> + Send;

    /// Storefront rows with their representative image
    fn find_main_items(
        &self,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<ListingRow>, CoreError>> + Send;

    /// Storefront rows belonging to the given category code
    fn find_gift_items(
        &self,
        criteria: SearchCriteria,
        category_code: i64,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<ListingRow>, CoreError>> + Send;

    /// Storefront rows carrying at least one of the tag names, one row per item
    fn find_detail_items(
        &self,
        tag_names: Vec<String>,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<ListingRow>, CoreError>> + Send;

    /// Storefront rows filtered by name, category and tag ids, in the requested order
    fn find_complex_items(
        &self,
        criteria: SearchCriteria,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<ListingRow>, CoreError>> + Send;
}
