//! Optional filter fragments for the catalog listings.
//!
//! Every builder returns `None` when its input does not constrain the listing.
//! `PredicateSet` keeps only the fragments that are present, so an empty
//! criteria object produces no `WHERE` terms at all.

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, Condition,
    sea_query::{Expr, LikeExpr, SimpleExpr},
};
use tracing::debug;

use crate::domain::catalog::{
    entities::ItemSellStatus,
    value_objects::{DateWindow, SearchBy},
};
use crate::entity::{categories, item_tags, items, tags};

/// Conjunction of the predicates that are actually present.
#[derive(Debug, Clone, Default)]
pub struct PredicateSet {
    predicates: Vec<SimpleExpr>,
}

impl PredicateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, predicate: Option<SimpleExpr>) -> Self {
        if let Some(predicate) = predicate {
            self.predicates.push(predicate);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// `None` when nothing was collected.
    pub fn into_condition(self) -> Option<Condition> {
        if self.predicates.is_empty() {
            return None;
        }

        Some(
            self.predicates
                .into_iter()
                .fold(Condition::all(), |condition, predicate| {
                    condition.add(predicate)
                }),
        )
    }
}

/// Items registered strictly after the cutoff of the date window.
pub fn registered_after(
    date_type: Option<&str>,
    now: DateTime<Utc>,
    legacy_six_month: bool,
) -> Option<SimpleExpr> {
    let token = date_type?;

    let Some(window) = DateWindow::parse(token) else {
        debug!(token, "Ignoring unknown date window");
        return None;
    };

    let cutoff = window.cutoff(now, legacy_six_month)?;
    Some(items::Column::RegTime.gt(cutoff.fixed_offset()))
}

pub fn sell_status_eq(sell_status: Option<ItemSellStatus>) -> Option<SimpleExpr> {
    sell_status.map(|status| items::Column::SellStatus.eq(status.as_str()))
}

const LIKE_ESCAPE: char = '\\';

/// Escapes the LIKE metacharacters so the query only matches literally.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Case-sensitive substring match on an item column.
fn column_contains(column: items::Column, query: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(query));
    Expr::col((items::Entity, column)).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

/// Admin free-text search against the selected field.
pub fn search_by_like(search_by: Option<SearchBy>, query: &str) -> Option<SimpleExpr> {
    if query.trim().is_empty() {
        return None;
    }

    match search_by? {
        SearchBy::Name => Some(column_contains(items::Column::Name, query)),
        SearchBy::Creator => Some(column_contains(items::Column::CreatedBy, query)),
    }
}

/// Storefront name search; blank queries match everything.
pub fn name_like(query: &str) -> Option<SimpleExpr> {
    if query.trim().is_empty() {
        return None;
    }

    Some(column_contains(items::Column::Name, query))
}

/// Requires the categories join.
pub fn category_eq(category_code: Option<i64>) -> Option<SimpleExpr> {
    category_code.map(|code| categories::Column::Code.eq(code))
}

/// Requires the item_tags join.
pub fn tag_ids_in(tag_ids: &[i64]) -> Option<SimpleExpr> {
    if tag_ids.is_empty() {
        return None;
    }

    Some(item_tags::Column::TagId.is_in(tag_ids.iter().copied()))
}

/// Requires the item_tags and tags joins.
pub fn tag_names_in(tag_names: &[String]) -> Option<SimpleExpr> {
    if tag_names.is_empty() {
        return None;
    }

    Some(tags::Column::Name.is_in(tag_names.iter().cloned()))
}
