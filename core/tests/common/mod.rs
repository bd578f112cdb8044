#![allow(dead_code)]

use chrono::{DateTime, Duration, FixedOffset, Utc};
use sea_orm::{
    ActiveValue::Set, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
};
use storefront_core::{
    domain::common::ListingConfig,
    entity::{categories, item_images, item_tags, items, tags},
    infrastructure::{catalog::PostgresCatalogRepository, db::schema::create_schema},
};

/// Fresh in-memory catalog. A single pooled connection keeps every statement
/// on the same SQLite database, and LIKE is made case-sensitive to match Postgres.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    db.execute_unprepared("PRAGMA case_sensitive_like = ON")
        .await
        .unwrap();
    create_schema(&db).await.unwrap();
    db
}

pub fn repository(db: &DatabaseConnection) -> PostgresCatalogRepository {
    PostgresCatalogRepository::new(db.clone(), ListingConfig::default())
}

pub fn days_ago(days: i64) -> DateTime<FixedOffset> {
    (Utc::now() - Duration::days(days)).fixed_offset()
}

/// Item row with sensible defaults; tests override what they assert on.
#[derive(Debug, Clone)]
pub struct ItemFixture {
    pub id: i64,
    pub name: String,
    pub price: i32,
    pub created_by: String,
    pub sell_status: &'static str,
    pub category_id: Option<i64>,
    pub reg_time: DateTime<FixedOffset>,
}

impl ItemFixture {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            price: 10_000,
            created_by: "admin@storefront.test".to_string(),
            sell_status: "SELL",
            category_id: None,
            reg_time: days_ago(0),
        }
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    pub fn created_by(mut self, created_by: &str) -> Self {
        self.created_by = created_by.to_string();
        self
    }

    pub fn sold_out(mut self) -> Self {
        self.sell_status = "SOLD_OUT";
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn registered(mut self, reg_time: DateTime<FixedOffset>) -> Self {
        self.reg_time = reg_time;
        self
    }
}

pub async fn insert_categories(db: &DatabaseConnection, rows: &[(i64, i64, &str)]) {
    let models = rows.iter().map(|(id, code, name)| categories::ActiveModel {
        id: Set(*id),
        code: Set(*code),
        name: Set(name.to_string()),
    });

    categories::Entity::insert_many(models)
        .exec_without_returning(db)
        .await
        .unwrap();
}

pub async fn insert_tags(db: &DatabaseConnection, rows: &[(i64, &str)]) {
    let models = rows.iter().map(|(id, name)| tags::ActiveModel {
        id: Set(*id),
        name: Set(name.to_string()),
    });

    tags::Entity::insert_many(models)
        .exec_without_returning(db)
        .await
        .unwrap();
}

/// Inserts the items together with one representative and one secondary image each.
pub async fn insert_items(db: &DatabaseConnection, fixtures: &[ItemFixture]) {
    let models = fixtures.iter().map(|fixture| items::ActiveModel {
        id: Set(fixture.id),
        name: Set(fixture.name.clone()),
        price: Set(fixture.price),
        stock_number: Set(100),
        detail: Set(format!("{} detail", fixture.name)),
        sell_status: Set(fixture.sell_status.to_string()),
        shipping_fee: Set(2_500),
        category_id: Set(fixture.category_id),
        created_by: Set(fixture.created_by.clone()),
        reg_time: Set(fixture.reg_time),
        update_time: Set(fixture.reg_time),
    });

    items::Entity::insert_many(models)
        .exec_without_returning(db)
        .await
        .unwrap();

    let images = fixtures.iter().flat_map(|fixture| {
        [true, false].into_iter().map(move |representative| {
            let id = fixture.id * 10 + i64::from(!representative);
            item_images::ActiveModel {
                id: Set(id),
                item_id: Set(fixture.id),
                image_name: Set(format!("{id}.jpg")),
                original_image_name: Set(format!("original-{id}.jpg")),
                image_url: Set(format!("/images/item/{id}.jpg")),
                representative: Set(representative),
            }
        })
    });

    item_images::Entity::insert_many(images)
        .exec_without_returning(db)
        .await
        .unwrap();
}

pub async fn tag_items(db: &DatabaseConnection, links: &[(i64, i64)]) {
    let models = links
        .iter()
        .enumerate()
        .map(|(index, (item_id, tag_id))| item_tags::ActiveModel {
            id: Set(index as i64 + 1),
            item_id: Set(*item_id),
            tag_id: Set(*tag_id),
        });

    item_tags::Entity::insert_many(models)
        .exec_without_returning(db)
        .await
        .unwrap();
}

pub fn representative_url(item_id: i64) -> String {
    format!("/images/item/{}.jpg", item_id * 10)
}
