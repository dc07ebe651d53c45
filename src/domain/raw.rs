// Raw component descriptors - ordered alias access over untrusted JSON
//
// Producers (hand-written JSON or a model) spell the same field several ways.
// Every field is resolved through an explicit list of paths, first match wins.
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Key(&'static str),
    Index(usize),
}

pub type FieldPath = &'static [Step];

use Step::{Index, Key};

pub const TITLE: &[FieldPath] = &[&[Key("title")]];
pub const SPAN: &[FieldPath] = &[&[Key("span")]];

pub const KPI_MARKERS: &[&str] = &["kpi", "kpi_cards"];
pub const CHART_MARKERS: &[&str] = &["charts", "chart_type", "chart"];
pub const TABLE_MARKERS: &[&str] = &["table", "columns"];

pub const CHART_TYPE: &[FieldPath] = &[
    &[Key("config"), Key("chart_type")],
    &[Key("chart_type")],
    &[Key("type")],
];
pub const CHART_COLUMNS: &[FieldPath] = &[&[Key("config"), Key("columns")], &[Key("data_columns")]];
pub const LEGACY_SERIES: FieldPath = &[Key("charts"), Index(0), Key("data")];
pub const GROUP_BY: &[FieldPath] = &[&[Key("config"), Key("group_by")], &[Key("group_by")]];
pub const AGGREGATION: &[FieldPath] = &[&[Key("config"), Key("aggregation")], &[Key("aggregation")]];

pub const KPI_COLUMN: &[FieldPath] = &[
    &[Key("config"), Key("column")],
    &[Key("config"), Key("columns"), Index(0)],
    &[Key("data_columns"), Index(0)],
];
pub const KPI_COLOR: &[FieldPath] = &[&[Key("config"), Key("color")], &[Key("color")]];
pub const KPI_ICON: &[FieldPath] = &[&[Key("config"), Key("icon")], &[Key("icon")]];

pub const TABLE_COLUMNS: &[FieldPath] = &[
    &[Key("config"), Key("columns")],
    &[Key("columns")],
    &[Key("table"), Key("columns")],
];

pub const MISSING_COLUMNS: &[FieldPath] = &[&[Key("missingColumns")]];

pub const LAYOUT_GRID: &[FieldPath] = &[&[Key("layout_grid")], &[Key("layout")]];

/// Follow a path through nested objects and arrays.
pub fn lookup<'a>(root: &'a Value, path: &[Step]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, step| match step {
        Key(key) => node.as_object()?.get(*key),
        Index(i) => node.as_array()?.get(*i),
    })
}

/// Value of the first path the extractor accepts.
pub fn first_match<'a, T>(
    root: &'a Value,
    paths: &[FieldPath],
    extract: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    paths
        .iter()
        .find_map(|path| lookup(root, path).and_then(&extract))
}

/// JavaScript-style truthiness, which is what producers assume when they
/// write `"kpi": true` or `"table": {}`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Any array counts as a match, even an empty one. Non-string entries are
/// dropped.
pub fn string_list(value: &Value) -> Option<Vec<String>> {
    value.as_array().map(|items| {
        items
            .iter()
            .filter_map(non_empty_str)
            .map(str::to_string)
            .collect()
    })
}

/// Integral numbers only; `2.0` is accepted, `2.5` and `"2"` are not.
pub fn integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Read-only view over one raw component descriptor.
#[derive(Debug, Clone, Copy)]
pub struct RawComponent<'a> {
    value: &'a Value,
}

impl<'a> RawComponent<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn declared_type(&self) -> Option<&'a str> {
        lookup(self.value, &[Key("type")]).and_then(non_empty_str)
    }

    pub fn has_any(&self, markers: &[&str]) -> bool {
        let Some(object) = self.value.as_object() else {
            return false;
        };
        markers
            .iter()
            .any(|key| object.get(*key).is_some_and(is_truthy))
    }

    pub fn field<T>(
        &self,
        paths: &[FieldPath],
        extract: impl Fn(&'a Value) -> Option<T>,
    ) -> Option<T> {
        first_match(self.value, paths, extract)
    }

    pub fn str_field(&self, paths: &[FieldPath]) -> Option<&'a str> {
        self.field(paths, non_empty_str)
    }

    pub fn list_field(&self, paths: &[FieldPath]) -> Option<Vec<String>> {
        self.field(paths, string_list)
    }

    pub fn int_field(&self, paths: &[FieldPath]) -> Option<i64> {
        self.field(paths, integer)
    }

    /// Column names out of an embedded legacy series, `charts[0].data`.
    ///
    /// `data` is either a point (`{"x": "month", "y": "sales"}`) or an array
    /// whose first element is one.
    pub fn legacy_series_columns(&self) -> Option<Vec<String>> {
        let data = lookup(self.value, LEGACY_SERIES)?;
        let point = match data {
            Value::Array(items) => items.first()?,
            other => other,
        };
        let point = point.as_object()?;
        let columns: Vec<String> = ["x", "y"]
            .iter()
            .filter_map(|key| point.get(*key).and_then(non_empty_str))
            .map(str::to_string)
            .collect();
        (!columns.is_empty()).then_some(columns)
    }

    /// Keys of `config` that the normalizer does not own, carried through to
    /// the renderer untouched.
    pub fn config_extras(&self, owned: &[&str]) -> Map<String, Value> {
        lookup(self.value, &[Key("config")])
            .and_then(Value::as_object)
            .map(|config| {
                config
                    .iter()
                    .filter(|(key, _)| !owned.contains(&key.as_str()))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}
