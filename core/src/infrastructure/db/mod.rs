use sea_orm::{ConnAcquireErr, DbErr};
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

pub mod postgres;
pub mod schema;

/// Logs the store failure and maps it to the caller-facing error.
pub fn map_db_error(context: &str, e: DbErr) -> CoreError {
    error!("{}: {}", context, e);

    match e {
        DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => CoreError::StoreTimeout,
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => CoreError::StoreUnavailable,
        _ => CoreError::InternalServerError,
    }
}
