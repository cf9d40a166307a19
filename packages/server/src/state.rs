use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

/// Per-process service context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
}
