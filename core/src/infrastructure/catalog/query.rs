//! Composes the listing statements from the search criteria.
//!
//! Each listing is rooted at `items`. Storefront listings join the
//! representative image; tag and category joins are added only when a filter
//! needs them, and grouping by item follows the one-to-many tag join.

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait, Select,
};

use crate::domain::catalog::value_objects::SearchCriteria;
use crate::entity::{categories, item_images, item_tags, items};
use crate::infrastructure::catalog::{
    predicates::{
        PredicateSet, category_eq, name_like, registered_after, search_by_like, sell_status_eq,
        tag_ids_in, tag_names_in,
    },
    sort::{apply_sort, resolve},
};

/// An assembled, not yet paginated, listing statement.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub select: Select<items::Entity>,
    /// Number of criteria predicates in the `WHERE` clause.
    pub predicate_count: usize,
    /// Whether rows are grouped by item.
    pub grouped: bool,
}

fn with_predicates(
    select: Select<items::Entity>,
    predicates: PredicateSet,
) -> (Select<items::Entity>, usize) {
    let count = predicates.len();
    match predicates.into_condition() {
        Some(condition) => (select.filter(condition), count),
        None => (select, count),
    }
}

fn representative_image() -> Select<items::Entity> {
    items::Entity::find()
        .join(JoinType::InnerJoin, items::Relation::ItemImages.def())
        .filter(item_images::Column::Representative.eq(true))
}

fn project_listing(select: Select<items::Entity>) -> Select<items::Entity> {
    select
        .select_only()
        .column_as(items::Column::Id, "id")
        .column_as(items::Column::Name, "name")
        .column_as(items::Column::Detail, "detail")
        .column_as(item_images::Column::ImageUrl, "image_url")
        .column_as(items::Column::Price, "price")
        .column_as(items::Column::ShippingFee, "shipping_fee")
}

fn group_by_item(select: Select<items::Entity>) -> Select<items::Entity> {
    select
        .group_by(items::Column::Id)
        .group_by(item_images::Column::Id)
}

/// Admin search over the bare item table.
pub fn admin_search(
    criteria: &SearchCriteria,
    now: DateTime<Utc>,
    legacy_six_month: bool,
) -> ListingQuery {
    let predicates = PredicateSet::new()
        .and(registered_after(
            criteria.date_type.as_deref(),
            now,
            legacy_six_month,
        ))
        .and(sell_status_eq(criteria.sell_status))
        .and(search_by_like(criteria.search_by, &criteria.query));

    let (select, predicate_count) = with_predicates(items::Entity::find(), predicates);

    ListingQuery {
        select: apply_sort(select, None),
        predicate_count,
        grouped: false,
    }
}

/// Storefront main listing.
pub fn main_listing(criteria: &SearchCriteria) -> ListingQuery {
    let predicates = PredicateSet::new().and(name_like(&criteria.query));
    let (select, predicate_count) = with_predicates(representative_image(), predicates);

    ListingQuery {
        select: apply_sort(project_listing(select), None),
        predicate_count,
        grouped: false,
    }
}

/// Gift listing for a single category; projects the category code as well.
pub fn gift_listing(criteria: &SearchCriteria, category_code: i64) -> ListingQuery {
    let predicates = PredicateSet::new()
        .and(name_like(&criteria.query))
        .and(category_eq(Some(category_code)));

    let select =
        representative_image().join(JoinType::InnerJoin, items::Relation::Category.def());
    let (select, predicate_count) = with_predicates(select, predicates);

    let select = project_listing(select).column_as(categories::Column::Code, "category_code");

    ListingQuery {
        select: apply_sort(select, None),
        predicate_count,
        grouped: false,
    }
}

/// Detail search narrowed by tag names.
pub fn detail_search(tag_names: &[String], criteria: &SearchCriteria) -> ListingQuery {
    let tag_filter = tag_names_in(tag_names);
    let grouped = tag_filter.is_some();

    let mut select = representative_image();
    if grouped {
        select = select
            .join(JoinType::InnerJoin, items::Relation::ItemTags.def())
            .join(JoinType::InnerJoin, item_tags::Relation::Tag.def());
    }

    let predicates = PredicateSet::new()
        .and(name_like(&criteria.query))
        .and(tag_filter);
    let (select, predicate_count) = with_predicates(select, predicates);

    let mut select = project_listing(select);
    if grouped {
        select = group_by_item(select);
    }

    ListingQuery {
        select: apply_sort(select, None),
        predicate_count,
        grouped,
    }
}

/// Multi-criteria search: name, category, tag ids and a caller-chosen sort.
pub fn complex_search(criteria: &SearchCriteria) -> ListingQuery {
    let category_filter = category_eq(criteria.category_code);
    let tag_filter = tag_ids_in(&criteria.tag_ids);
    let grouped = tag_filter.is_some();

    let mut select = representative_image();
    if category_filter.is_some() {
        select = select.join(JoinType::InnerJoin, items::Relation::Category.def());
    }
    if grouped {
        select = select.join(JoinType::InnerJoin, items::Relation::ItemTags.def());
    }

    let predicates = PredicateSet::new()
        .and(name_like(&criteria.query))
        .and(category_filter)
        .and(tag_filter);
    let (select, predicate_count) = with_predicates(select, predicates);

    let mut select = project_listing(select);
    if grouped {
        select = group_by_item(select);
    }

    let key = resolve(criteria.sort_column, criteria.sort_direction);

    ListingQuery {
        select: apply_sort(select, Some(key)),
        predicate_count,
        grouped,
    }
}
