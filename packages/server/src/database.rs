use std::time::Duration;

use sea_orm::sea_query::Index;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::entity::{file, product};

pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());

    // Set connection pool options
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;
    db.get_schema_registry("catalog_server::entity::*")
        .sync(&db)
        .await?;
    ensure_indexes(&db).await?;

    Ok(db)
}

/// Create the secondary indexes used by parent lookups and the file date filter.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let indexes = [
        Index::create()
            .if_not_exists()
            .name("idx_product_experiment_id")
            .table(product::Entity)
            .col(product::Column::ExperimentId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_file_product_id")
            .table(file::Entity)
            .col(file::Column::ProductId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_file_date_time")
            .table(file::Entity)
            .col(file::Column::DateTime)
            .to_owned(),
    ];

    let backend = db.get_database_backend();
    for stmt in &indexes {
        db.execute_raw(backend.build(stmt)).await?;
    }
    info!(count = indexes.len(), "Ensured secondary indexes exist");

    Ok(())
}
