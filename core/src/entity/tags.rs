use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::item_tags::Entity")]
    ItemTags,
}

impl Related<super::item_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemTags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
