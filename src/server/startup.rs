use std::{sync::Arc, time::Duration};

use dioxus_logger::tracing;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{
    config::{Config, StorageBackendKind},
    error::Error,
    storage::{BlobStore, LocalBlobStore, MemoryBlobStore},
};

/// Connect to the database and run migrations
///
/// Connection failures are retried up to `database_connect_attempts` times with an
/// exponential backoff starting at `database_connect_backoff_secs`, since the database
/// container commonly starts after the server.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let max_attempts = config.database_connect_attempts.max(1);
    let mut attempt_count = 0;

    let db = loop {
        let mut opt = ConnectOptions::new(&config.database_url);
        opt.sqlx_logging(false);

        match Database::connect(opt).await {
            Ok(db) => break db,
            Err(e) => {
                attempt_count += 1;
                if attempt_count >= max_attempts {
                    tracing::error!(
                        "Max attempts ({}) exceeded connecting to database: {}",
                        max_attempts,
                        e
                    );
                    return Err(e.into());
                }

                let backoff_secs = config
                    .database_connect_backoff_secs
                    .saturating_mul(2_u64.saturating_pow(attempt_count - 1));
                let backoff = Duration::from_secs(backoff_secs);

                tracing::warn!(
                    "Retrying database connection (attempt {}/{}) after {:?}: {}",
                    attempt_count,
                    max_attempts,
                    backoff,
                    e
                );

                tokio::time::sleep(backoff).await;
            }
        }
    };

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the blob store selected by `STORAGE_BACKEND`, creating directories if missing
pub async fn build_blob_store(config: &Config) -> Result<Arc<dyn BlobStore>, Error> {
    match config.storage_backend {
        StorageBackendKind::Local => {
            let store = LocalBlobStore::new(config.model_storage.clone(), config.qr_storage.clone());
            store.ensure_dirs().await?;

            tracing::info!(
                "Storing model assets in {} and QR images in {}",
                config.model_storage.display(),
                config.qr_storage.display()
            );

            Ok(Arc::new(store))
        }
        StorageBackendKind::Memory => {
            tracing::warn!("Using in-memory blob storage, uploaded files are lost on restart");

            Ok(Arc::new(MemoryBlobStore::new()))
        }
    }
}
