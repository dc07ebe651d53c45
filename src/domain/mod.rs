// Domain layer - Dashboard specification value types
pub mod chart_type;
pub mod component;
pub mod dashboard;
pub mod projection;
pub mod raw;
pub mod schema;
