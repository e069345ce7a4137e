// JSON file store for offline datasets and fixtures
use crate::application::dataset_store::DatasetStore;
use crate::domain::forecast::ForecastRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetStore for FileStore {
    async fn fetch_all(&self) -> Result<Vec<ForecastRow>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"produto":"Soja","uf":"MT","previsao_jun":131.5}},{{"produto":"Milho","uf":"GO"}}]"#
        )
        .unwrap();

        let rows = FileStore::new(file.path()).fetch_all().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].forecast_jun, Some(131.5));
        assert_eq!(rows[1].region_id(), Some("GO"));
    }

    #[tokio::test]
    async fn test_missing_file_errors() {
        let store = FileStore::new("does/not/exist.json");
        assert!(store.fetch_all().await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(FileStore::new(file.path()).fetch_all().await.is_err());
    }
}
