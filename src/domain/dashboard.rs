// Dashboard domain model
use super::forecast::{ForecastRow, Month};
use super::recommendation::Advisory;
use super::selection::Selection;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month: Month,
    pub actual: Option<f64>,
    pub forecast: Option<f64>,
}

impl MonthlyPoint {
    pub fn new(month: Month, actual: Option<f64>, forecast: Option<f64>) -> Self {
        Self {
            month,
            actual,
            forecast,
        }
    }
}

/// Share of the dataset held by one product, as a whole percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketShare {
    pub product: String,
    pub percentage: i64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalSummary {
    pub region: String,
    pub count: usize,
    pub mean_forecast_jun: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductAccuracy {
    pub product: String,
    pub mean_accuracy: f64,
}

/// Headline figures for the selected row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    pub forecast_jun: Option<f64>,
    pub forecast_low_jun: Option<f64>,
    pub forecast_high_jun: Option<f64>,
    pub last_actual: Option<f64>,
    pub classification: Option<String>,
    pub accuracy_pct: Option<f64>,
}

/// Views that depend only on the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetViews {
    pub products: Vec<String>,
    pub market_distribution: Vec<MarketShare>,
    pub regional_rollup: Vec<RegionalSummary>,
    pub accuracy_rollup: Vec<ProductAccuracy>,
}

/// Views that depend on the dataset and the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionViews {
    pub regions: Vec<String>,
    /// Whether the chosen region is one of `regions` for the chosen product.
    pub region_offered: bool,
    pub current: Option<ForecastRow>,
    pub kpis: Option<KpiSummary>,
    pub monthly_series: Vec<MonthlyPoint>,
    pub recommendations: Vec<Advisory>,
    pub recommendation_context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub generation: u64,
    pub selection: Selection,
    #[serde(flatten)]
    pub dataset: DatasetViews,
    #[serde(flatten)]
    pub selected: SelectionViews,
}

/// What the dashboard can show at any point in a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardSnapshot {
    Loading,
    Unavailable { message: String },
    Empty,
    Ready(Box<DashboardView>),
}

impl DashboardSnapshot {
    #[cfg(test)]
    pub fn view(&self) -> Option<&DashboardView> {
        match self {
            DashboardSnapshot::Ready(view) => Some(view),
            _ => None,
        }
    }
}
