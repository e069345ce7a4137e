// Advisory rules for the selected forecast
use super::forecast::ForecastRow;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub suggested_action: String,
}

impl Advisory {
    fn new(severity: Severity, title: &str, description: String, suggested_action: &str) -> Self {
        Self {
            severity,
            title: title.to_string(),
            description,
            suggested_action: suggested_action.to_string(),
        }
    }
}

/// Build the advisory list for the resolved row.
///
/// Returns nothing when no row is resolved, otherwise always the same three
/// entries in success, warning, info order.
pub fn recommendations(row: Option<&ForecastRow>, region: Option<&str>) -> Vec<Advisory> {
    let Some(row) = row else {
        return Vec::new();
    };

    let accuracy = row
        .accuracy_pct
        .map(|a| format!("{:.1}", round1(a)))
        .unwrap_or_else(|| "—".to_string());

    vec![
        Advisory::new(
            Severity::Success,
            "Momento Favorável para Venda",
            format!(
                "Com precisão de {}%, recomendamos vender nos próximos 15 dias.",
                accuracy
            ),
            "Programar venda",
        ),
        Advisory::new(
            Severity::Warning,
            "Monitorar Mercado",
            "Preços podem oscilar devido à sazonalidade. Mantenha-se atento.".to_string(),
            "Configurar alertas",
        ),
        Advisory::new(
            Severity::Info,
            "Oportunidade de Arbitragem",
            format!(
                "Considere vender em {} e comprar em regiões com preços menores.",
                region.unwrap_or_default()
            ),
            "Ver análise regional",
        ),
    ]
}

/// Round half up to one decimal, so ties like 96.25 show as 96.3.
fn round1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Heading shown above the advisory list.
pub fn recommendation_context(product: Option<&str>, region: Option<&str>) -> Option<String> {
    match (product, region) {
        (Some(p), Some(r)) => Some(format!("Baseadas na análise de {} em {}", p, r)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(accuracy: Option<f64>) -> ForecastRow {
        ForecastRow {
            accuracy_pct: accuracy,
            ..ForecastRow::new("Soja", "MT")
        }
    }

    #[test]
    fn test_no_row_yields_no_advisories() {
        assert!(recommendations(None, Some("MT")).is_empty());
    }

    #[test]
    fn test_three_advisories_in_order() {
        let row = row(Some(98.5));
        let advisories = recommendations(Some(&row), Some("MT"));

        let severities: Vec<Severity> = advisories.iter().map(|a| a.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Success, Severity::Warning, Severity::Info]
        );
        assert!(advisories[0].description.contains("98.5%"));
        assert!(advisories[0].description.contains("15 dias"));
        assert_eq!(advisories[1].suggested_action, "Configurar alertas");
        assert!(advisories[2].description.contains("vender em MT"));
    }

    #[test]
    fn test_accuracy_one_decimal() {
        let row = row(Some(96.0));
        let advisories = recommendations(Some(&row), Some("RS"));
        assert!(advisories[0].description.contains("96.0%"));
    }

    #[test]
    fn test_accuracy_ties_round_up() {
        let tie = row(Some(96.25));
        let advisories = recommendations(Some(&tie), Some("MT"));
        assert!(advisories[0].description.contains("96.3%"));

        let small = row(Some(0.25));
        let advisories = recommendations(Some(&small), Some("MT"));
        assert!(advisories[0].description.contains("de 0.3%"));
    }

    #[test]
    fn test_missing_accuracy_still_three_entries() {
        let row = row(None);
        assert_eq!(recommendations(Some(&row), Some("RS")).len(), 3);
    }

    #[test]
    fn test_context_requires_both_keys() {
        assert_eq!(
            recommendation_context(Some("Soja"), Some("MT")).as_deref(),
            Some("Baseadas na análise de Soja em MT")
        );
        assert_eq!(recommendation_context(Some("Soja"), None), None);
    }
}
