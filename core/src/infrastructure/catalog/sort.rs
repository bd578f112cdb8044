use sea_orm::{Order, QueryOrder, Select};

use crate::domain::{
    catalog::value_objects::{ItemSortColumn, ReverseAuctionSortColumn, SortDirection},
    common::entities::app_errors::CoreError,
};
use crate::entity::items;

/// A sort column enum bound to an item attribute.
pub trait SortColumn: Copy {
    fn column(self) -> items::Column;
}

impl SortColumn for ItemSortColumn {
    fn column(self) -> items::Column {
        match self {
            ItemSortColumn::RegTime => items::Column::RegTime,
            ItemSortColumn::Name => items::Column::Name,
            ItemSortColumn::Price => items::Column::Price,
        }
    }
}

impl SortColumn for ReverseAuctionSortColumn {
    fn column(self) -> items::Column {
        match self {
            ReverseAuctionSortColumn::RegTime => items::Column::RegTime,
            ReverseAuctionSortColumn::Price => items::Column::Price,
        }
    }
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SortKey {
    pub column: items::Column,
    pub order: Order,
}

pub fn resolve<C: SortColumn>(column: C, direction: SortDirection) -> SortKey {
    SortKey {
        column: column.column(),
        order: direction.into(),
    }
}

/// Resolves a sort column by its wire name; unknown names are an error.
pub fn resolve_named(column: &str, direction: SortDirection) -> Result<SortKey, CoreError> {
    let column = column.parse::<ItemSortColumn>()?;
    Ok(resolve(column, direction))
}

/// Applies the primary key (if any) followed by `id DESC`.
pub fn apply_sort(select: Select<items::Entity>, key: Option<SortKey>) -> Select<items::Entity> {
    let select = match key {
        Some(key) => select.order_by(key.column, key.order),
        None => select,
    };

    select.order_by_desc(items::Column::Id)
}
