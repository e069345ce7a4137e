// Application layer - Use cases and the aggregation engine
pub mod aggregation;
pub mod dashboard_service;
pub mod dataset_store;
pub mod registration_service;
