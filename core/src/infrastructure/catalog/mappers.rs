use chrono::Utc;
use sea_orm::FromQueryResult;

use crate::domain::{
    catalog::entities::{Item, ItemSellStatus, ListingRow},
    common::entities::app_errors::CoreError,
};
use crate::entity::items::Model as ItemModel;

/// Row shape shared by the main, detail and complex listings.
#[derive(Debug, Clone, FromQueryResult)]
pub struct ListingRowModel {
    pub id: i64,
    pub name: String,
    pub detail: String,
    pub image_url: String,
    pub price: i32,
    pub shipping_fee: i32,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct GiftListingRowModel {
    pub id: i64,
    pub name: String,
    pub detail: String,
    pub image_url: String,
    pub price: i32,
    pub shipping_fee: i32,
    pub category_code: i64,
}

impl From<ListingRowModel> for ListingRow {
    fn from(model: ListingRowModel) -> Self {
        ListingRow {
            id: model.id,
            name: model.name,
            detail: model.detail,
            image_url: model.image_url,
            price: model.price,
            shipping_fee: model.shipping_fee,
            category_code: None,
        }
    }
}

impl From<GiftListingRowModel> for ListingRow {
    fn from(model: GiftListingRowModel) -> Self {
        ListingRow {
            id: model.id,
            name: model.name,
            detail: model.detail,
            image_url: model.image_url,
            price: model.price,
            shipping_fee: model.shipping_fee,
            category_code: Some(model.category_code),
        }
    }
}

impl TryFrom<ItemModel> for Item {
    type Error = CoreError;

    fn try_from(model: ItemModel) -> Result<Self, Self::Error> {
        let sell_status = model.sell_status.parse::<ItemSellStatus>()?;

        Ok(Item {
            id: model.id,
            name: model.name,
            price: model.price,
            stock_number: model.stock_number,
            detail: model.detail,
            sell_status,
            shipping_fee: model.shipping_fee,
            category_id: model.category_id,
            created_by: model.created_by,
            reg_time: model.reg_time.with_timezone(&Utc),
            update_time: model.update_time.with_timezone(&Utc),
        })
    }
}
