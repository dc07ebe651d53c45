//! Dashboard configuration normalizer.
//!
//! Turns a loosely structured dashboard specification, hand-written or
//! generated, into a renderable one that agrees with the columns of the
//! active dataset. Every entry point is total: malformed input degrades to
//! defaults, and column problems are reported on the component instead of
//! being raised.
//!
//! ```
//! use dashboard_normalizer::normalize_dashboard_config;
//! use serde_json::json;
//!
//! let raw = json!({"components": [{"type": "chart", "config": {"columns": ["revenue", "bogus"]}}]});
//! let available = vec!["revenue".to_string(), "region".to_string()];
//!
//! let dashboard = normalize_dashboard_config(&raw, &available);
//! assert_eq!(dashboard.components[0].missing_columns, vec!["bogus".to_string()]);
//! assert_eq!(dashboard.layout_grid, "repeat(4, 1fr)");
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::column_validator::validate_columns;
pub use application::component_normalizer::normalize_component;
pub use application::dashboard_normalizer::normalize_dashboard_config;
pub use domain::chart_type::normalize_chart_type;
pub use domain::projection::project;
