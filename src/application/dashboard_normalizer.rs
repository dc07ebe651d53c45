// Dashboard normalization - normalize every component and fill layout defaults
use crate::application::component_normalizer::normalize_component;
use crate::domain::dashboard::{DashboardSpec, DEFAULT_LAYOUT_GRID};
use crate::domain::raw::{self, first_match, non_empty_str};
use crate::domain::schema::ColumnSchema;
use serde_json::Value;

/// Normalize a raw dashboard specification against the dataset's columns.
pub fn normalize_dashboard_config(raw: &Value, available_columns: &[String]) -> DashboardSpec {
    normalize_dashboard(raw, &ColumnSchema::new(available_columns.to_vec()))
}

/// Same as [`normalize_dashboard_config`] with a prepared schema.
///
/// A `raw` that is not an object, or whose `components` is not an array, is
/// treated as a dashboard with no components.
pub fn normalize_dashboard(raw: &Value, schema: &ColumnSchema) -> DashboardSpec {
    let components = raw
        .get("components")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| normalize_component(item, schema))
                .collect()
        })
        .unwrap_or_default();

    let layout_grid = first_match(raw, raw::LAYOUT_GRID, non_empty_str)
        .unwrap_or(DEFAULT_LAYOUT_GRID)
        .to_string();

    DashboardSpec::new(components, layout_grid)
}
