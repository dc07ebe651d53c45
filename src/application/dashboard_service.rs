// Dashboard service - Use cases for normalizing specs and projecting rows
use crate::application::component_normalizer::normalize_component;
use crate::application::dashboard_normalizer::normalize_dashboard;
use crate::domain::component::Component;
use crate::domain::dashboard::DashboardSpec;
use crate::domain::projection::{project, Projection};
use crate::domain::schema::ColumnSchema;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    /// `available_columns` comes straight off the wire; anything other than
    /// an array of strings means the schema is unknown.
    pub fn normalize_dashboard(&self, raw: &Value, available_columns: &Value) -> DashboardSpec {
        let schema = ColumnSchema::from_value(available_columns);
        let dashboard = normalize_dashboard(raw, &schema);

        tracing::debug!(
            components = dashboard.components.len(),
            with_errors = dashboard.components_with_errors().len(),
            schema_known = schema.is_known(),
            "normalized dashboard"
        );

        dashboard
    }

    pub fn normalize_component(&self, raw: &Value, available_columns: &Value) -> Component {
        let schema = ColumnSchema::from_value(available_columns);
        let component = normalize_component(raw, &schema);

        tracing::debug!(
            kind = ?component.kind(),
            missing = component.missing_columns.len(),
            "normalized component"
        );

        component
    }

    pub fn project_rows(&self, rows: &Value, config: &Value) -> Projection {
        let projection = project(rows, config);
        if let Projection::Unchanged(_) = projection {
            tracing::debug!("rows returned unprojected");
        }
        projection
    }
}
