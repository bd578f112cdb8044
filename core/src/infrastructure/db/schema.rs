use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};
use tracing::info;

use crate::entity::{categories, item_images, item_tags, items, tags};

/// Creates the catalog tables from the entity definitions if they are missing.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements = [
        schema.create_table_from_entity(categories::Entity),
        schema.create_table_from_entity(tags::Entity),
        schema.create_table_from_entity(items::Entity),
        schema.create_table_from_entity(item_images::Entity),
        schema.create_table_from_entity(item_tags::Entity),
    ];

    for mut statement in statements {
        statement.if_not_exists();
        db.execute(backend.build(&statement)).await?;
    }

    info!("Catalog schema ready");

    Ok(())
}
