use tracing::info;

use crate::{
    domain::common::{CatalogConfig, services::Service},
    infrastructure::{
        catalog::PostgresCatalogRepository,
        db::postgres::{Postgres, PostgresConfig},
    },
};

pub type StorefrontService = Service<PostgresCatalogRepository>;

/// Connects to the catalog database and wires the listing service on top of it.
pub async fn create_service(config: CatalogConfig) -> Result<StorefrontService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
        max_connections: config.database.max_connections,
        acquire_timeout: config.database.acquire_timeout,
    })
    .await?;

    let catalog_repository =
        PostgresCatalogRepository::new(postgres.get_db(), config.listing.clone());

    info!(
        max_page_size = config.listing.max_page_size,
        "catalog service ready"
    );

    Ok(Service::new(catalog_repository, config.listing))
}
