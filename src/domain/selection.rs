// Product/region selection state
use super::forecast::{non_empty, Dataset};
use serde::Serialize;

/// The user's current (product, region) choice.
///
/// Changing the product leaves the region untouched. If the region is not
/// offered for the new product, resolution simply finds no row until the
/// user picks a valid one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    product: Option<String>,
    region: Option<String>,
    #[serde(skip)]
    defaulted_for: Option<u64>,
}

impl Selection {
    pub fn product(&self) -> Option<&str> {
        non_empty(self.product.as_deref())
    }

    pub fn region(&self) -> Option<&str> {
        non_empty(self.region.as_deref())
    }

    pub fn set_product(&mut self, product: impl Into<String>) {
        self.product = Some(product.into());
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = Some(region.into());
    }

    /// The (product, region) pair that identifies this selection for caching.
    pub fn key(&self) -> (Option<String>, Option<String>) {
        (
            self.product().map(str::to_string),
            self.region().map(str::to_string),
        )
    }

    pub fn is_complete(&self) -> bool {
        self.product().is_some() && self.region().is_some()
    }

    /// Whether the chosen region is among the regions offered for the product.
    pub fn region_is_offered(&self, regions: &[String]) -> bool {
        self.region()
            .is_some_and(|region| regions.iter().any(|r| r == region))
    }

    /// Default the selection to the first row of a freshly loaded dataset.
    ///
    /// Fires only on the edge "dataset became available while no product is
    /// chosen", and at most once per dataset generation. Returns whether the
    /// selection changed.
    pub fn apply_default(&mut self, dataset: &Dataset) -> bool {
        if self.defaulted_for == Some(dataset.generation()) || self.product().is_some() {
            return false;
        }
        self.defaulted_for = Some(dataset.generation());

        let Some(first) = dataset.first() else {
            return false;
        };
        self.product = first.product.clone();
        self.region = first.region.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::ForecastRow;

    fn dataset(generation: u64) -> Dataset {
        Dataset::new(
            generation,
            vec![
                ForecastRow::new("Soja", "MT"),
                ForecastRow::new("Soja", "RS"),
                ForecastRow::new("Milho", "MT"),
            ],
        )
    }

    #[test]
    fn test_default_selects_first_row() {
        let mut selection = Selection::default();
        assert!(selection.apply_default(&dataset(1)));
        assert_eq!(selection.product(), Some("Soja"));
        assert_eq!(selection.region(), Some("MT"));
    }

    #[test]
    fn test_default_fires_once_per_dataset() {
        let data = dataset(1);
        let mut selection = Selection::default();
        assert!(selection.apply_default(&data));
        assert!(!selection.apply_default(&data));
    }

    #[test]
    fn test_default_does_not_override_user_choice() {
        let mut selection = Selection::default();
        selection.apply_default(&dataset(1));
        selection.set_product("Milho");

        assert!(!selection.apply_default(&dataset(2)));
        assert_eq!(selection.product(), Some("Milho"));
    }

    #[test]
    fn test_default_on_empty_dataset_is_noop() {
        let mut selection = Selection::default();
        assert!(!selection.apply_default(&Dataset::new(1, Vec::new())));
        assert_eq!(selection.product(), None);
    }

    #[test]
    fn test_product_change_keeps_region() {
        let mut selection = Selection::default();
        selection.set_product("Soja");
        selection.set_region("RS");
        selection.set_product("Milho");

        assert_eq!(selection.region(), Some("RS"));
        assert!(!selection.region_is_offered(&["MT".to_string()]));
        assert!(selection.region_is_offered(&["MT".to_string(), "RS".to_string()]));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let mut selection = Selection::default();
        selection.set_product("");
        selection.set_region("MT");
        assert_eq!(selection.product(), None);
        assert!(!selection.is_complete());
    }
}
