// Domain layer - Forecast data, selection state and derived views
pub mod dashboard;
pub mod forecast;
pub mod recommendation;
pub mod registration;
pub mod selection;
