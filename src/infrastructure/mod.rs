// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod file_store;
pub mod http_response;
pub mod store_factory;
pub mod supabase_store;
