use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
    pub price: i32,
    pub stock_number: i32,
    #[sea_orm(column_type = "Text")]
    pub detail: String,
    pub sell_status: String,
    pub shipping_fee: i32,
    pub category_id: Option<i64>,
    pub created_by: String,
    pub reg_time: DateTimeWithTimeZone,
    pub update_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::item_images::Entity")]
    ItemImages,
    #[sea_orm(has_many = "super::item_tags::Entity")]
    ItemTags,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::item_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemImages.def()
    }
}

impl Related<super::item_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemTags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
