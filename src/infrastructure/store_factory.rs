// Builds the configured dataset store
use crate::application::dataset_store::DatasetStore;
use crate::infrastructure::config::StoreSettings;
use crate::infrastructure::file_store::FileStore;
use crate::infrastructure::supabase_store::SupabaseStore;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store url must be an http(s) url, got {0:?}")]
    InvalidUrl(String),
    #[error("store api key is empty")]
    MissingApiKey,
    #[error("store table name is empty")]
    MissingTable,
    #[error("store file path is empty")]
    MissingPath,
}

pub fn build_store(settings: &StoreSettings) -> Result<Arc<dyn DatasetStore>, StoreError> {
    match settings {
        StoreSettings::Supabase {
            url,
            api_key,
            table,
        } => {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(StoreError::InvalidUrl(url.clone()));
            }
            if api_key.trim().is_empty() {
                return Err(StoreError::MissingApiKey);
            }
            if table.trim().is_empty() {
                return Err(StoreError::MissingTable);
            }
            tracing::info!(url = %url, table = %table, "Using Supabase dataset store");
            Ok(Arc::new(SupabaseStore::new(
                url.clone(),
                api_key.clone(),
                table.clone(),
            )))
        }
        StoreSettings::File { path } => {
            if path.trim().is_empty() {
                return Err(StoreError::MissingPath);
            }
            tracing::info!(path = %path, "Using file dataset store");
            Ok(Arc::new(FileStore::new(path)))
        }
    }
}
