// Column validation against the active dataset schema
use crate::domain::schema::ColumnSchema;

/// Requested columns that the dataset does not have, in request order.
///
/// An empty `available` list means the schema is not known yet and nothing is
/// reported.
pub fn validate_columns(requested: &[String], available: &[String]) -> Vec<String> {
    missing_columns(requested, &ColumnSchema::new(available.to_vec()))
}

pub fn missing_columns(requested: &[String], schema: &ColumnSchema) -> Vec<String> {
    if !schema.is_known() {
        return Vec::new();
    }
    requested
        .iter()
        .filter(|column| !schema.contains(column))
        .cloned()
        .collect()
}

/// Replace every unknown column in place with the first available one.
///
/// Returns the names that were replaced. Cardinality is preserved.
pub fn substitute_missing(columns: &mut [String], schema: &ColumnSchema) -> Vec<String> {
    let missing = missing_columns(columns, schema);
    let Some(fallback) = schema.first() else {
        return missing;
    };
    if missing.is_empty() {
        return missing;
    }

    tracing::info!(
        missing = ?missing,
        available = ?schema.columns(),
        fallback,
        "substituting columns missing from dataset"
    );

    for column in columns.iter_mut() {
        if !schema.contains(column) {
            *column = fallback.to_string();
        }
    }
    missing
}
