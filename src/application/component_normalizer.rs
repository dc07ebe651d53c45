// Component normalization - turn one loose descriptor into a renderable component
use crate::application::column_validator::substitute_missing;
use crate::domain::chart_type::{normalize_chart_type, ChartType};
use crate::domain::component::{
    ChartConfig, Component, ComponentConfig, ComponentKind, KpiConfig, TableConfig,
};
use crate::domain::raw::{self, non_empty_str, RawComponent};
use crate::domain::schema::ColumnSchema;
use serde_json::Value;

const DEFAULT_CHART_TYPE: &str = "bar_chart";
const DEFAULT_CHART_AGGREGATION: &str = "mean";
const PLACEHOLDER_CHART_COLUMNS: [&str; 2] = ["category", "value"];

const DEFAULT_KPI_COLUMN: &str = "id";
const DEFAULT_KPI_AGGREGATION: &str = "count";
const DEFAULT_KPI_COLOR: &str = "emerald";
const DEFAULT_KPI_ICON: &str = "Database";

const PLACEHOLDER_TABLE_COLUMNS: [&str; 2] = ["col1", "col2"];

/// Normalize a single component descriptor. Never fails.
///
/// The caller's value is only read; a new component is returned.
pub fn normalize_component(raw: &Value, schema: &ColumnSchema) -> Component {
    let descriptor = RawComponent::new(raw);
    let kind = resolve_kind(&descriptor);

    let title = descriptor
        .str_field(raw::TITLE)
        .unwrap_or(kind.default_title())
        .to_string();
    // explicit 0 is kept, negative weights are not
    let span = descriptor
        .int_field(raw::SPAN)
        .filter(|span| *span >= 0)
        .unwrap_or(kind.default_span());

    let (config, missing_columns) = match kind {
        ComponentKind::Chart => {
            let (config, missing) = normalize_chart(&descriptor, schema);
            (ComponentConfig::Chart(config), carry_forward_missing(&descriptor, missing))
        }
        ComponentKind::Kpi => (ComponentConfig::Kpi(normalize_kpi(&descriptor)), Vec::new()),
        ComponentKind::Table => {
            let (config, missing) = normalize_table(&descriptor, schema);
            (ComponentConfig::Table(config), carry_forward_missing(&descriptor, missing))
        }
    };

    Component {
        title,
        span,
        config,
        missing_columns,
    }
}

/// Names reported by an earlier pass stay reported; the columns they named
/// have already been substituted, so this pass alone would not find them.
fn carry_forward_missing(descriptor: &RawComponent, found: Vec<String>) -> Vec<String> {
    let carried = descriptor
        .list_field(raw::MISSING_COLUMNS)
        .unwrap_or_default();
    let mut missing = carried.clone();
    missing.extend(found.into_iter().filter(|name| !carried.contains(name)));
    missing
}

/// Declared type wins. Otherwise the marker keys decide, kpi first, then
/// chart, then table; anything else is a chart.
fn resolve_kind(descriptor: &RawComponent) -> ComponentKind {
    if let Some(declared) = descriptor.declared_type() {
        // A chart type in the `type` slot ("line_chart") still means a chart.
        return ComponentKind::parse(declared).unwrap_or(ComponentKind::Chart);
    }

    if descriptor.has_any(raw::KPI_MARKERS) {
        ComponentKind::Kpi
    } else if descriptor.has_any(raw::CHART_MARKERS) {
        ComponentKind::Chart
    } else if descriptor.has_any(raw::TABLE_MARKERS) {
        ComponentKind::Table
    } else {
        ComponentKind::Chart
    }
}

fn normalize_chart(descriptor: &RawComponent, schema: &ColumnSchema) -> (ChartConfig, Vec<String>) {
    // `type` only names a chart type when it is not a component kind
    let declared_chart_type = descriptor.field(raw::CHART_TYPE, |v| {
        non_empty_str(v).filter(|s| ComponentKind::parse(s).is_none())
    });
    let chart_type = normalize_chart_type(Some(declared_chart_type.unwrap_or(DEFAULT_CHART_TYPE)))
        .unwrap_or(ChartType::BarChart);
    if !chart_type.is_canonical() {
        tracing::debug!(chart_type = chart_type.as_str(), "unrecognized chart type passed through");
    }

    let mut columns = descriptor
        .list_field(raw::CHART_COLUMNS)
        .or_else(|| descriptor.legacy_series_columns())
        .unwrap_or_default();

    let missing = substitute_missing(&mut columns, schema);

    if columns.is_empty() {
        columns = match schema.first() {
            Some(first) => vec![first.to_string()],
            None => PLACEHOLDER_CHART_COLUMNS.map(String::from).to_vec(),
        };
    }

    let mut group_by = descriptor
        .str_field(raw::GROUP_BY)
        .map(str::to_string)
        .unwrap_or_else(|| columns[0].clone());

    if schema.is_known() && !schema.contains(&group_by) {
        // Repoints to the possibly substituted first column.
        group_by = columns
            .first()
            .map(String::as_str)
            .or(schema.first())
            .unwrap_or_default()
            .to_string();
    }

    let aggregation = descriptor
        .str_field(raw::AGGREGATION)
        .unwrap_or(DEFAULT_CHART_AGGREGATION)
        .to_string();

    let config = ChartConfig {
        chart_type,
        columns,
        group_by,
        aggregation,
        extra: descriptor.config_extras(&ChartConfig::OWNED_KEYS),
    };
    (config, missing)
}

// KPI columns are not checked against the schema.
fn normalize_kpi(descriptor: &RawComponent) -> KpiConfig {
    let column = descriptor
        .str_field(raw::KPI_COLUMN)
        .unwrap_or(DEFAULT_KPI_COLUMN)
        .to_string();
    let aggregation = descriptor
        .str_field(raw::AGGREGATION)
        .unwrap_or(DEFAULT_KPI_AGGREGATION)
        .to_lowercase();
    let color = descriptor
        .str_field(raw::KPI_COLOR)
        .unwrap_or(DEFAULT_KPI_COLOR)
        .to_string();
    let icon = descriptor
        .str_field(raw::KPI_ICON)
        .unwrap_or(DEFAULT_KPI_ICON)
        .to_string();

    KpiConfig {
        column,
        aggregation,
        color,
        icon,
        extra: descriptor.config_extras(&KpiConfig::OWNED_KEYS),
    }
}

fn normalize_table(descriptor: &RawComponent, schema: &ColumnSchema) -> (TableConfig, Vec<String>) {
    let mut columns = descriptor
        .list_field(raw::TABLE_COLUMNS)
        .unwrap_or_default();

    let missing = substitute_missing(&mut columns, schema);

    if columns.is_empty() {
        columns = match schema.first() {
            Some(first) => vec![first.to_string()],
            None => PLACEHOLDER_TABLE_COLUMNS.map(String::from).to_vec(),
        };
    }

    let config = TableConfig {
        columns,
        extra: descriptor.config_extras(&TableConfig::OWNED_KEYS),
    };
    (config, missing)
}
