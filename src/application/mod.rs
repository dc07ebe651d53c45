// Application layer - Normalization pipeline and use cases
pub mod column_validator;
pub mod component_normalizer;
pub mod dashboard_normalizer;
pub mod dashboard_service;
