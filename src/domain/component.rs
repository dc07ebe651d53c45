// Normalized dashboard component
use super::chart_type::ChartType;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Kpi,
    Chart,
    Table,
}

impl ComponentKind {
    /// Parse a declared component type. Case-insensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "kpi" => Some(ComponentKind::Kpi),
            "chart" => Some(ComponentKind::Chart),
            "table" => Some(ComponentKind::Table),
            _ => None,
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            ComponentKind::Kpi => "KPI",
            ComponentKind::Chart => "Chart",
            ComponentKind::Table => "Table",
        }
    }

    pub fn default_span(self) -> i64 {
        match self {
            ComponentKind::Kpi => 1,
            ComponentKind::Chart => 2,
            ComponentKind::Table => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub chart_type: ChartType,
    pub columns: Vec<String>,
    pub group_by: String,
    pub aggregation: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartConfig {
    pub const OWNED_KEYS: [&'static str; 4] = ["chart_type", "columns", "group_by", "aggregation"];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiConfig {
    pub column: String,
    pub aggregation: String,
    pub color: String,
    pub icon: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl KpiConfig {
    // `columns` is consumed as an alias for `column`
    pub const OWNED_KEYS: [&'static str; 5] = ["column", "columns", "aggregation", "color", "icon"];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableConfig {
    pub columns: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TableConfig {
    pub const OWNED_KEYS: [&'static str; 1] = ["columns"];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentConfig {
    Kpi(KpiConfig),
    Chart(ChartConfig),
    Table(TableConfig),
}

/// A fully specified component, ready for a renderer.
///
/// The component kind is carried by the config variant so the two can never
/// disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub title: String,
    pub span: i64,
    pub config: ComponentConfig,
    pub missing_columns: Vec<String>,
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self.config {
            ComponentConfig::Kpi(_) => ComponentKind::Kpi,
            ComponentConfig::Chart(_) => ComponentKind::Chart,
            ComponentConfig::Table(_) => ComponentKind::Table,
        }
    }

    pub fn has_missing_columns(&self) -> bool {
        !self.missing_columns.is_empty()
    }
}

#[derive(Serialize)]
struct ComponentWire<'a> {
    #[serde(rename = "type")]
    kind: ComponentKind,
    title: &'a str,
    span: i64,
    config: &'a ComponentConfig,
    #[serde(rename = "missingColumns")]
    missing_columns: &'a [String],
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ComponentWire {
            kind: self.kind(),
            title: &self.title,
            span: self.span,
            config: &self.config,
            missing_columns: &self.missing_columns,
        }
        .serialize(serializer)
    }
}
