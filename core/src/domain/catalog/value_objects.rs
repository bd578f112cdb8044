use std::str::FromStr;

use chrono::{DateTime, Days, Months, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{catalog::entities::ItemSellStatus, common::entities::app_errors::CoreError};

/// Which item field the admin free-text query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SearchBy {
    #[serde(rename = "itemNm", alias = "name")]
    Name,
    #[serde(rename = "createdBy", alias = "creator")]
    Creator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(CoreError::InvalidSortDirection(s.to_string()))
        }
    }
}

/// Sort columns offered by the catalog complex search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemSortColumn {
    #[default]
    RegTime,
    Name,
    Price,
}

impl FromStr for ItemSortColumn {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REG_TIME" | "regTime" => Ok(ItemSortColumn::RegTime),
            "NAME" | "itemNm" => Ok(ItemSortColumn::Name),
            "PRICE" | "price" => Ok(ItemSortColumn::Price),
            _ => Err(CoreError::InvalidSortColumn(s.to_string())),
        }
    }
}

/// Narrower sort column set used by reverse-auction listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReverseAuctionSortColumn {
    #[default]
    RegTime,
    Price,
}

impl FromStr for ReverseAuctionSortColumn {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REG_TIME" | "regTime" => Ok(ReverseAuctionSortColumn::RegTime),
            "PRICE" | "price" => Ok(ReverseAuctionSortColumn::Price),
            _ => Err(CoreError::InvalidSortColumn(s.to_string())),
        }
    }
}

/// Registration-date window selectable from the admin search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    All,
    OneDay,
    OneWeek,
    OneMonth,
    SixMonths,
}

impl DateWindow {
    /// Returns `None` for tokens outside `all|1d|1w|1m|6m`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "all" => Some(DateWindow::All),
            "1d" => Some(DateWindow::OneDay),
            "1w" => Some(DateWindow::OneWeek),
            "1m" => Some(DateWindow::OneMonth),
            "6m" => Some(DateWindow::SixMonths),
            _ => None,
        }
    }

    /// Registration cutoff relative to `now`; `None` means unbounded.
    ///
    /// With `legacy_six_month` the `6m` window reaches back a single month.
    pub fn cutoff(self, now: DateTime<Utc>, legacy_six_month: bool) -> Option<DateTime<Utc>> {
        match self {
            DateWindow::All => None,
            DateWindow::OneDay => now.checked_sub_days(Days::new(1)),
            DateWindow::OneWeek => now.checked_sub_days(Days::new(7)),
            DateWindow::OneMonth => now.checked_sub_months(Months::new(1)),
            DateWindow::SixMonths if legacy_six_month => now.checked_sub_months(Months::new(1)),
            DateWindow::SixMonths => now.checked_sub_months(Months::new(6)),
        }
    }
}

/// Sparse search parameters for the catalog listings.
///
/// Every field is optional; `SearchCriteria::default()` matches every item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SearchCriteria {
    /// One of `all|1d|1w|1m|6m`.
    pub date_type: Option<String>,
    pub sell_status: Option<ItemSellStatus>,
    pub search_by: Option<SearchBy>,
    pub query: String,
    pub category_code: Option<i64>,
    pub tag_ids: Vec<i64>,
    pub sort_column: ItemSortColumn,
    pub sort_direction: SortDirection,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date_type(mut self, date_type: impl Into<String>) -> Self {
        self.date_type = Some(date_type.into());
        self
    }

    pub fn with_sell_status(mut self, sell_status: ItemSellStatus) -> Self {
        self.sell_status = Some(sell_status);
        self
    }

    pub fn with_search(mut self, search_by: SearchBy, query: impl Into<String>) -> Self {
        self.search_by = Some(search_by);
        self.query = query.into();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category_code: i64) -> Self {
        self.category_code = Some(category_code);
        self
    }

    pub fn with_tags(mut self, tag_ids: impl IntoIterator<Item = i64>) -> Self {
        self.tag_ids = tag_ids.into_iter().collect();
        self
    }

    pub fn with_sort(mut self, column: ItemSortColumn, direction: SortDirection) -> Self {
        self.sort_column = column;
        self.sort_direction = direction;
        self
    }
}

/// Offset and size of a requested page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageRequest {
    offset: i64,
    size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            size: PageRequest::DEFAULT_SIZE,
        }
    }
}

impl PageRequest {
    pub const DEFAULT_SIZE: i64 = 20;

    pub fn new(offset: i64, size: i64) -> Result<Self, CoreError> {
        if offset < 0 || size <= 0 {
            return Err(CoreError::InvalidPagination);
        }
        Ok(Self { offset, size })
    }

    /// Zero-based page index, as sent by paged UIs.
    pub fn of(page: i64, size: i64) -> Result<Self, CoreError> {
        if page < 0 {
            return Err(CoreError::InvalidPagination);
        }
        let offset = page
            .checked_mul(size)
            .ok_or(CoreError::InvalidPagination)?;
        Self::new(offset, size)
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn page_number(&self) -> i64 {
        self.offset / self.size
    }

    pub fn validate(&self, max_size: i64) -> Result<(), CoreError> {
        if self.offset < 0 || self.size <= 0 || self.size > max_size {
            return Err(CoreError::InvalidPagination);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_request: PageRequest,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page_request: PageRequest, total: u64) -> Self {
        Self {
            content,
            page_request,
            total,
        }
    }

    pub fn empty(page_request: PageRequest) -> Self {
        Self::new(Vec::new(), page_request, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.page_request.size.unsigned_abs())
    }

    pub fn has_next(&self) -> bool {
        let seen = self.page_request.offset.unsigned_abs() + self.content.len() as u64;
        seen < self.total
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_request: self.page_request,
            total: self.total,
        }
    }
}
