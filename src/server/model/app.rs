use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::storage::BlobStore;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: Arc<dyn BlobStore>,
    /// Prefix handed to the URL resolver for every response tree
    pub asset_base_url: String,
}
