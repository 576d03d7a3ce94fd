// HTTP access to the external Q&A service
pub mod api_client;
pub mod config;

pub use api_client::ApiClient;
pub use config::ApiConfig;
