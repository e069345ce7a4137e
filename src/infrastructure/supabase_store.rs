// Supabase (PostgREST) store implementation
use crate::application::dataset_store::DatasetStore;
use crate::domain::forecast::ForecastRow;
use anyhow::{Context, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    url: String,
    api_key: String,
    table: String,
}

impl SupabaseStore {
    pub fn new(url: String, api_key: String, table: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.trim_end_matches('/').to_string(),
            api_key,
            table,
        }
    }

    fn build_select_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=*",
            self.url,
            urlencoding::encode(&self.table)
        )
    }
}

#[async_trait]
impl DatasetStore for SupabaseStore {
    async fn fetch_all(&self) -> Result<Vec<ForecastRow>> {
        let url = self.build_select_url();
        tracing::debug!("Fetching forecast rows from {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to Supabase")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Supabase query failed with status {}: {}", status, body);
        }

        let rows = response
            .json::<Vec<ForecastRow>>()
            .await
            .context("Failed to parse Supabase response")?;

        tracing::debug!("Fetched {} forecast rows", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_url() {
        let store = SupabaseStore::new(
            "https://abc.supabase.co/".to_string(),
            "key".to_string(),
            "AgroAI".to_string(),
        );
        assert_eq!(
            store.build_select_url(),
            "https://abc.supabase.co/rest/v1/AgroAI?select=*"
        );
    }

    #[test]
    fn test_select_url_encodes_table() {
        let store = SupabaseStore::new(
            "http://localhost:54321".to_string(),
            "key".to_string(),
            "agro forecasts".to_string(),
        );
        assert_eq!(
            store.build_select_url(),
            "http://localhost:54321/rest/v1/agro%20forecasts?select=*"
        );
    }

    #[tokio::test]
    async fn test_unreachable_store_errors() {
        let store = SupabaseStore::new(
            "http://127.0.0.1:9".to_string(),
            "key".to_string(),
            "AgroAI".to_string(),
        );
        assert!(store.fetch_all().await.is_err());
    }
}
