// Dashboard domain model
use super::component::Component;
use serde::{Serialize, Serializer};

pub const DEFAULT_LAYOUT_GRID: &str = "repeat(4, 1fr)";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSpec {
    pub components: Vec<Component>,
    pub layout_grid: String,
}

impl DashboardSpec {
    pub fn new(components: Vec<Component>, layout_grid: String) -> Self {
        Self {
            components,
            layout_grid,
        }
    }

    /// Components that referenced columns the dataset does not have.
    pub fn components_with_errors(&self) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|c| c.has_missing_columns())
            .collect()
    }
}

#[derive(Serialize)]
struct DashboardWire<'a> {
    components: &'a [Component],
    #[serde(rename = "componentsWithErrors")]
    components_with_errors: Vec<&'a Component>,
    layout_grid: &'a str,
}

impl Serialize for DashboardSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DashboardWire {
            components: &self.components,
            components_with_errors: self.components_with_errors(),
            layout_grid: &self.layout_grid,
        }
        .serialize(serializer)
    }
}
