use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemSellStatus {
    Sell,
    SoldOut,
}

impl ItemSellStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemSellStatus::Sell => "SELL",
            ItemSellStatus::SoldOut => "SOLD_OUT",
        }
    }
}

impl FromStr for ItemSellStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SELL" => Ok(ItemSellStatus::Sell),
            "SOLD_OUT" => Ok(ItemSellStatus::SoldOut),
            _ => Err(CoreError::InvalidSellStatus(s.to_string())),
        }
    }
}

impl fmt::Display for ItemSellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: i32,
    pub stock_number: i32,
    pub detail: String,
    pub sell_status: ItemSellStatus,
    pub shipping_fee: i32,
    pub category_id: Option<i64>,
    pub created_by: String,
    pub reg_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

/// Flat storefront projection of an item and its representative image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListingRow {
    pub id: i64,
    pub name: String,
    pub detail: String,
    pub image_url: String,
    pub price: i32,
    pub shipping_fee: i32,
    /// Only populated by the gift listing.
    pub category_code: Option<i64>,
}
