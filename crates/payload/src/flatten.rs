//! Converts nested tables into tables of ordered sequences.
//!
//! Plotly wants arrays, the server sends `{region: {date: value}}`. The row
//! order is the key order of the payload text, which `serde_json` keeps with
//! the `preserve_order` feature.

use serde_json::Value;

use crate::table::TimeSeriesTable;

/// Flattens a mapping of mappings into a [TimeSeriesTable].
///
/// An absent or non-object table flattens to an empty table. Column values
/// that are neither objects nor arrays flatten to empty series.
pub fn flatten(raw: Option<&Value>) -> TimeSeriesTable {
    let Some(Value::Object(columns)) = raw else {
        return TimeSeriesTable::default();
    };

    columns
        .iter()
        .map(|(name, rows)| (name.clone(), flatten_series(rows)))
        .collect()
}

/// Flattens a single column into its ordered values.
///
/// Nulls are kept as nulls.
pub fn flatten_series(rows: &Value) -> Vec<Value> {
    match rows {
        Value::Object(rows) => rows.values().cloned().collect(),
        Value::Array(rows) => rows.clone(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flatten_keeps_values_as_supplied() {
        let raw = json!({"A": {"0": "10", "1": "20"}});

        let table = flatten(Some(&raw));

        assert_eq!(table.len(), 1);
        assert_eq!(table.series("A"), &[json!("10"), json!("20")]);
    }

    #[test]
    fn flatten_preserves_row_key_order() {
        let raw: Value = serde_json::from_str(
            r#"{"ZH": {"2020-03-10": 3, "2020-03-08": 1, "2020-03-09": 2}}"#,
        )
        .unwrap();

        let table = flatten(Some(&raw));

        assert_eq!(table.series("ZH"), &[json!(3), json!(1), json!(2)]);
    }

    #[test]
    fn flatten_preserves_column_order() {
        let raw: Value = serde_json::from_str(r#"{"ZH": {}, "BE": {}, "AG": {}}"#).unwrap();

        let table = flatten(Some(&raw));

        assert_eq!(table.names().collect::<Vec<_>>(), vec!["ZH", "BE", "AG"]);
    }

    #[test]
    fn flatten_passes_nulls_through() {
        let raw = json!({"BE": {"0": null, "1": 5, "2": null}});

        let table = flatten(Some(&raw));

        assert_eq!(table.series("BE"), &[Value::Null, json!(5), Value::Null]);
    }

    #[test]
    fn flatten_treats_absent_and_malformed_tables_as_empty() {
        assert!(flatten(None).is_empty());
        assert!(flatten(Some(&json!([1, 2, 3]))).is_empty());
        assert!(flatten(Some(&json!("moving_total"))).is_empty());
    }

    #[test]
    fn flatten_series_accepts_arrays_and_skips_scalars() {
        assert_eq!(flatten_series(&json!([1, null])), vec![json!(1), Value::Null]);
        assert!(flatten_series(&json!(42)).is_empty());
    }
}
