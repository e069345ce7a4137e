// Forecast domain models
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Months covered by the forecast table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Fev,
    Mar,
    Abr,
    Mai,
    Jun,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::Jan,
        Month::Fev,
        Month::Mar,
        Month::Abr,
        Month::Mai,
        Month::Jun,
    ];
}

/// One product x region forecast record, as stored in the `AgroAI` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    #[serde(rename = "produto", default)]
    pub product: Option<String>,
    #[serde(rename = "uf", default)]
    pub region: Option<String>,
    #[serde(rename = "classificao_produto", default)]
    pub classification: Option<String>,
    #[serde(rename = "acuracia_modelo_perc", default)]
    pub accuracy_pct: Option<f64>,

    #[serde(rename = "preco_atual_jan", default)]
    pub actual_jan: Option<f64>,
    #[serde(rename = "preco_atual_fev", default)]
    pub actual_fev: Option<f64>,
    #[serde(rename = "preco_atual_mar", default)]
    pub actual_mar: Option<f64>,
    #[serde(rename = "preco_atual_abr", default)]
    pub actual_abr: Option<f64>,
    #[serde(rename = "preco_atual_mai", default)]
    pub actual_mai: Option<f64>,

    #[serde(rename = "previsao_jan", default)]
    pub forecast_jan: Option<f64>,
    #[serde(rename = "previsao_fev", default)]
    pub forecast_fev: Option<f64>,
    #[serde(rename = "previsao_mar", default)]
    pub forecast_mar: Option<f64>,
    #[serde(rename = "previsao_abr", default)]
    pub forecast_abr: Option<f64>,
    #[serde(rename = "previsao_mai", default)]
    pub forecast_mai: Option<f64>,
    #[serde(rename = "previsao_jun", default)]
    pub forecast_jun: Option<f64>,

    #[serde(rename = "previsao_min_jun", default)]
    pub forecast_low_jun: Option<f64>,
    #[serde(rename = "previsao_max_jun", default)]
    pub forecast_high_jun: Option<f64>,
}

impl ForecastRow {
    #[cfg(test)]
    pub fn new(product: &str, region: &str) -> Self {
        Self {
            product: Some(product.to_string()),
            region: Some(region.to_string()),
            ..Self::default()
        }
    }

    /// Product identifier, with empty strings treated as absent
    pub fn product_id(&self) -> Option<&str> {
        non_empty(self.product.as_deref())
    }

    /// Region identifier, with empty strings treated as absent
    pub fn region_id(&self) -> Option<&str> {
        non_empty(self.region.as_deref())
    }

    /// Observed price for a month. June has no observation yet.
    pub fn actual(&self, month: Month) -> Option<f64> {
        match month {
            Month::Jan => self.actual_jan,
            Month::Fev => self.actual_fev,
            Month::Mar => self.actual_mar,
            Month::Abr => self.actual_abr,
            Month::Mai => self.actual_mai,
            Month::Jun => None,
        }
    }

    pub fn forecast(&self, month: Month) -> Option<f64> {
        match month {
            Month::Jan => self.forecast_jan,
            Month::Fev => self.forecast_fev,
            Month::Mar => self.forecast_mar,
            Month::Abr => self.forecast_abr,
            Month::Mai => self.forecast_mai,
            Month::Jun => self.forecast_jun,
        }
    }

    pub fn matches(&self, product: &str, region: &str) -> bool {
        self.product_id() == Some(product) && self.region_id() == Some(region)
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// An immutable set of rows tagged with the load that produced it.
///
/// A refresh never mutates a dataset; it builds a new one with a higher
/// generation, which is what the view caches key on.
#[derive(Debug, Clone)]
pub struct Dataset {
    generation: u64,
    rows: Arc<[ForecastRow]>,
}

impl Dataset {
    pub fn new(generation: u64, rows: Vec<ForecastRow>) -> Self {
        Self {
            generation,
            rows: rows.into(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    pub fn first(&self) -> Option<&ForecastRow> {
        self.rows.first()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
