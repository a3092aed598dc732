//! The flattened table type.

use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use serde_json::Value;

/// A table of region columns, each holding one observation per date index.
///
/// Columns keep the order in which they were inserted. Lookups are linear,
/// which is fine for the few dozen regions a dashboard shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesTable {
    columns: Vec<(String, Vec<Value>)>,
}

impl TimeSeriesTable {
    /// Returns the series of `name`, if the table has such a column.
    pub fn get(&self, name: &str) -> Option<&[Value]> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Returns the series of `name`, or an empty series when the column is absent.
    pub fn series(&self, name: &str) -> &[Value] {
        self.get(name).unwrap_or(&[])
    }

    /// Returns the value of `name` at `index`, or [Value::Null] when out of range.
    pub fn value(&self, name: &str, index: usize) -> Value {
        self.series(name).get(index).cloned().unwrap_or(Value::Null)
    }

    /// Returns the column names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Appends a column, replacing the values of an existing column of the same name.
    pub fn insert(&mut self, name: String, values: Vec<Value>) {
        match self.columns.iter_mut().find(|(column, _)| *column == name) {
            Some((_, existing)) => *existing = values,
            None => self.columns.push((name, values)),
        }
    }
}

impl FromIterator<(String, Vec<Value>)> for TimeSeriesTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Value>)>>(iter: I) -> Self {
        let mut table = TimeSeriesTable::default();

        for (name, values) in iter {
            table.insert(name, values);
        }

        table
    }
}

impl Serialize for TimeSeriesTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;

        for (name, values) in &self.columns {
            map.serialize_entry(name, values)?;
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_columns_read_as_empty() {
        let table = TimeSeriesTable::default();

        assert_eq!(table.get("ZH"), None);
        assert!(table.series("ZH").is_empty());
        assert_eq!(table.value("ZH", 3), Value::Null);
    }

    #[test]
    fn duplicate_columns_keep_first_position() {
        let table: TimeSeriesTable = vec![
            (String::from("ZH"), vec![json!(1)]),
            (String::from("BE"), vec![json!(2)]),
            (String::from("ZH"), vec![json!(3)]),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.names().collect::<Vec<_>>(), vec!["ZH", "BE"]);
        assert_eq!(table.series("ZH"), &[json!(3)]);
    }

    #[test]
    fn serializes_as_a_json_object() {
        let table: TimeSeriesTable = vec![(String::from("A"), vec![json!("10"), json!("20")])]
            .into_iter()
            .collect();

        let json = serde_json::to_value(&table).unwrap();

        assert_eq!(json, json!({"A": ["10", "20"]}));
    }
}
