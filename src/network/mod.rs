// Re-export network modules
pub mod api_client;
pub mod config;
pub mod inflight;

// Re-export commonly used items
pub use api_client::{ApiClient, ChatApi, TrainingApi};
pub use config::ApiConfig;
pub use inflight::{InFlight, Ticket};
