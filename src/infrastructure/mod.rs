// Infrastructure layer - Configuration and HTTP encoding
pub mod config;
pub mod http_response;
