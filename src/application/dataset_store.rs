// Store trait for forecast dataset access
use crate::domain::forecast::ForecastRow;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Fetch every row of the forecast table. No filtering is pushed to the store.
    async fn fetch_all(&self) -> anyhow::Result<Vec<ForecastRow>>;
}

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory store that serves queued responses in order, repeating the last one.
    pub struct FixtureStore {
        responses: Mutex<Vec<Result<Vec<ForecastRow>, String>>>,
        calls: AtomicUsize,
    }

    impl FixtureStore {
        pub fn rows(rows: Vec<ForecastRow>) -> Self {
            Self::sequence(vec![Ok(rows)])
        }

        pub fn failing(message: &str) -> Self {
            Self::sequence(vec![Err(message.to_string())])
        }

        pub fn sequence(responses: Vec<Result<Vec<ForecastRow>, String>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DatasetStore for FixtureStore {
        async fn fetch_all(&self) -> anyhow::Result<Vec<ForecastRow>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let responses = self.responses.lock().unwrap();
            let response = responses
                .get(call)
                .or_else(|| responses.last())
                .cloned()
                .unwrap_or_else(|| Ok(Vec::new()));
            response.map_err(|message| anyhow::anyhow!(message))
        }
    }

    /// The three-row dataset used throughout the tests.
    pub fn sample_rows() -> Vec<ForecastRow> {
        vec![
            ForecastRow {
                classification: Some("Grão".to_string()),
                accuracy_pct: Some(98.5),
                actual_jan: Some(120.5),
                actual_fev: Some(122.8),
                actual_mar: Some(119.9),
                actual_abr: Some(125.4),
                actual_mai: Some(128.2),
                forecast_jan: Some(118.3),
                forecast_fev: Some(121.2),
                forecast_mar: Some(119.5),
                forecast_abr: Some(124.8),
                forecast_mai: Some(127.9),
                forecast_jun: Some(131.5),
                forecast_low_jun: Some(128.2),
                forecast_high_jun: Some(134.8),
                ..ForecastRow::new("Soja", "MT")
            },
            ForecastRow {
                accuracy_pct: Some(96.0),
                forecast_jun: Some(129.0),
                ..ForecastRow::new("Soja", "RS")
            },
            ForecastRow {
                accuracy_pct: Some(94.0),
                forecast_jun: Some(60.25),
                ..ForecastRow::new("Milho", "MT")
            },
        ]
    }
}
