// XY projection - reshape row records into chart points
use super::raw::is_truthy;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XyPoint {
    pub x: Value,
    pub y: Value,
}

/// Result of [`project`]: either one point per row, or the rows handed back
/// untouched when the request cannot be projected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Projection {
    Points(Vec<XyPoint>),
    Unchanged(Value),
}

/// Map each row to `{x: row[columns[0]], y: row[columns[1]]}`.
///
/// Missing values project to `null`; rows are never filtered.
pub fn project(rows: &Value, config: &Value) -> Projection {
    let Some(items) = rows.as_array() else {
        return Projection::Unchanged(rows.clone());
    };
    let Some((x_key, y_key)) = selected_columns(config) else {
        return Projection::Unchanged(rows.clone());
    };

    let points = items
        .iter()
        .map(|row| XyPoint {
            x: cell(row, &x_key),
            y: cell(row, &y_key),
        })
        .collect();

    Projection::Points(points)
}

fn selected_columns(config: &Value) -> Option<(String, String)> {
    let columns = config.get("columns")?.as_array()?;
    match columns.as_slice() {
        [x, y, ..] => Some((property_key(x)?, property_key(y)?)),
        _ => None,
    }
}

/// Column reference as a record key. Falsy references and composite values
/// cannot name a column.
fn property_key(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn cell(row: &Value, key: &str) -> Value {
    let found = match row {
        Value::Object(record) => record.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    };
    found.cloned().unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_projects_two_columns() {
        let rows = json!([{"a": 1, "b": 2}, {"a": 3, "b": 4}]);
        let projected = project(&rows, &json!({"columns": ["a", "b"]}));
        assert_eq!(
            serde_json::to_value(&projected).unwrap(),
            json!([{"x": 1, "y": 2}, {"x": 3, "y": 4}])
        );
    }

    #[test]
    fn test_single_column_returns_rows() {
        let rows = json!([{"a": 1, "b": 2}]);
        assert_eq!(
            project(&rows, &json!({"columns": ["a"]})),
            Projection::Unchanged(rows.clone())
        );
    }

    #[test]
    fn test_falsy_column_returns_rows() {
        let rows = json!([{"a": 1}]);
        assert_eq!(
            project(&rows, &json!({"columns": ["a", ""]})),
            Projection::Unchanged(rows.clone())
        );
        assert_eq!(
            project(&rows, &json!({"columns": [null, "a"]})),
            Projection::Unchanged(rows.clone())
        );
        assert_eq!(project(&rows, &json!({})), Projection::Unchanged(rows.clone()));
        assert_eq!(project(&rows, &json!("a,b")), Projection::Unchanged(rows.clone()));
    }

    #[test]
    fn test_non_array_rows_returned_as_is() {
        let rows = json!({"a": 1});
        assert_eq!(
            project(&rows, &json!({"columns": ["a", "b"]})),
            Projection::Unchanged(rows.clone())
        );
    }

    #[test]
    fn test_missing_cells_keep_row_count() {
        let rows = json!([{"a": 1}, "garbage", {"b": 5}, [7, 8]]);
        let projected = project(&rows, &json!({"columns": ["a", "b", "c"]}));
        assert_eq!(
            serde_json::to_value(&projected).unwrap(),
            json!([
                {"x": 1, "y": null},
                {"x": null, "y": null},
                {"x": null, "y": 5},
                {"x": null, "y": null}
            ])
        );
    }

    #[test]
    fn test_numeric_column_indexes_array_rows() {
        let rows = json!([[10, 20], [30, 40]]);
        let projected = project(&rows, &json!({"columns": [0, 1]}));
        // 0 is falsy, so the request cannot be projected
        assert_eq!(projected, Projection::Unchanged(rows.clone()));

        let projected = project(&rows, &json!({"columns": [1, 1]}));
        assert_eq!(
            serde_json::to_value(&projected).unwrap(),
            json!([{"x": 20, "y": 20}, {"x": 40, "y": 40}])
        );
    }
}
