use std::time::Duration;

pub mod entities;
pub mod services;

#[derive(Clone, Debug, Default)]
pub struct CatalogConfig {
    pub database: DatabaseConfig,
    pub listing: ListingConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "storefront".to_string(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(8),
        }
    }
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

/// Knobs for the listing queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingConfig {
    /// Upper bound accepted for a page size.
    pub max_page_size: i64,
    /// Per-statement timeout; `None` leaves it to the store.
    pub query_timeout: Option<Duration>,
    /// When set, the `6m` date window cuts off one month back, matching the
    /// behavior the catalog has always shipped. Unset it for a real six months.
    pub legacy_six_month_window: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            max_page_size: 100,
            query_timeout: None,
            legacy_six_month_window: true,
        }
    }
}
