// Aggregation engine - Pure derivations from the forecast dataset
//
// Every function here is total: rows with missing fields are left out of the
// aggregate, nothing fails.
use crate::domain::dashboard::{
    KpiSummary, MarketShare, MonthlyPoint, ProductAccuracy, RegionalSummary,
};
use crate::domain::forecast::{ForecastRow, Month};
use indexmap::{IndexMap, IndexSet};

/// Colours for the market distribution, cycled by first-seen product order.
pub const PALETTE: [&str; 5] = ["#22c55e", "#3b82f6", "#a855f7", "#f59e0b", "#ef4444"];

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    total: f64,
    count: usize,
}

impl Accumulator {
    fn add(&mut self, value: f64) {
        self.total += value;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        round2(self.total / self.count as f64)
    }
}

/// Round half up to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

fn round_percent(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Distinct products in first-seen order.
pub fn product_catalog(rows: &[ForecastRow]) -> Vec<String> {
    let products: IndexSet<&str> = rows.iter().filter_map(ForecastRow::product_id).collect();
    products.into_iter().map(str::to_string).collect()
}

/// Distinct regions offered for a product, in first-seen order.
pub fn region_catalog(rows: &[ForecastRow], product: Option<&str>) -> Vec<String> {
    let Some(product) = product.filter(|p| !p.is_empty()) else {
        return Vec::new();
    };

    let regions: IndexSet<&str> = rows
        .iter()
        .filter(|row| row.product_id() == Some(product))
        .filter_map(ForecastRow::region_id)
        .collect();
    regions.into_iter().map(str::to_string).collect()
}

/// Find the row for a (product, region) pair. The first match wins.
pub fn resolve<'a>(
    rows: &'a [ForecastRow],
    product: Option<&str>,
    region: Option<&str>,
) -> Option<&'a ForecastRow> {
    let (product, region) = match (product, region) {
        (Some(p), Some(r)) if !p.is_empty() && !r.is_empty() => (p, r),
        _ => return None,
    };
    rows.iter().find(|row| row.matches(product, region))
}

pub fn monthly_series(row: &ForecastRow) -> Vec<MonthlyPoint> {
    Month::ALL
        .iter()
        .map(|&month| MonthlyPoint::new(month, row.actual(month), row.forecast(month)))
        .filter(|point| point.actual.is_some() || point.forecast.is_some())
        .collect()
}

/// Share of rows per product.
///
/// Each percentage is rounded on its own against the full row count, so the
/// shares need not add up to exactly 100.
pub fn market_distribution(rows: &[ForecastRow]) -> Vec<MarketShare> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for product in rows.iter().filter_map(ForecastRow::product_id) {
        *counts.entry(product).or_default() += 1;
    }

    let total = rows.len() as f64;
    counts
        .into_iter()
        .enumerate()
        .map(|(index, (product, count))| MarketShare {
            product: product.to_string(),
            percentage: round_percent(count as f64 / total * 100.0),
            color: PALETTE[index % PALETTE.len()],
        })
        .collect()
}

/// Row count and mean June forecast per region. Zero is a present forecast.
pub fn regional_rollup(rows: &[ForecastRow]) -> Vec<RegionalSummary> {
    let mut groups: IndexMap<&str, Accumulator> = IndexMap::new();
    for row in rows {
        if let (Some(region), Some(forecast)) = (row.region_id(), row.forecast_jun) {
            groups.entry(region).or_default().add(forecast);
        }
    }

    groups
        .into_iter()
        .map(|(region, acc)| RegionalSummary {
            region: region.to_string(),
            count: acc.count,
            mean_forecast_jun: acc.mean(),
        })
        .collect()
}

/// Mean model accuracy per product.
pub fn accuracy_rollup(rows: &[ForecastRow]) -> Vec<ProductAccuracy> {
    let mut groups: IndexMap<&str, Accumulator> = IndexMap::new();
    for row in rows {
        if let (Some(product), Some(accuracy)) = (row.product_id(), row.accuracy_pct) {
            groups.entry(product).or_default().add(accuracy);
        }
    }

    groups
        .into_iter()
        .map(|(product, acc)| ProductAccuracy {
            product: product.to_string(),
            mean_accuracy: acc.mean(),
        })
        .collect()
}

pub fn kpi_summary(row: &ForecastRow) -> KpiSummary {
    KpiSummary {
        forecast_jun: row.forecast_jun,
        forecast_low_jun: row.forecast_low_jun,
        forecast_high_jun: row.forecast_high_jun,
        last_actual: row.actual(Month::Mai),
        classification: row.classification.clone(),
        accuracy_pct: row.accuracy_pct,
    }
}
