//! dashcoch's payload library.
//!
//! The dashboard server serializes every pandas frame it wants to plot with
//! `DataFrame.to_dict()`, i.e. as a mapping of columns (regions) to mappings
//! of row keys (dates) to values. This crate reads such payloads leniently:
//! absent keys and malformed values turn into empty tables and nulls instead
//! of errors, the same way the browser handlers always treated them.

#![warn(missing_docs)]

pub mod centroid;
pub mod error;
pub mod flatten;
pub mod keys;
pub mod settings;
pub mod table;
pub mod value;

use std::str::FromStr;

use serde_json::Map;
use serde_json::Value;
use tracing::debug;

use crate::centroid::RegionCentroid;
use crate::error::PayloadError;
use crate::error::Result;
use crate::flatten::flatten;
use crate::flatten::flatten_series;
use crate::settings::Settings;
use crate::settings::Theme;
use crate::table::TimeSeriesTable;
use crate::value::is_truthy;

/// The non-region column every table carries next to the regions.
const DATE_COLUMN: &str = "Date";

/// A deserialized dashboard payload.
///
/// The payload keeps the raw JSON object and hands out typed views of it on
/// demand. Every accessor is total: missing or malformed parts of the payload
/// produce empty or default values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    raw: Map<String, Value>,
}

impl Payload {
    /// Creates a payload from an already parsed JSON value.
    ///
    /// Fails with [PayloadError::NotAnObject] when the value is not a JSON object.
    pub fn from_value(value: Value) -> Result<Payload> {
        match value {
            Value::Object(raw) => Ok(Self { raw }),
            other => Err(PayloadError::NotAnObject(kind_of(&other))),
        }
    }

    /// Returns the raw JSON object.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Returns the raw value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// Flattens the nested table stored under `key`.
    pub fn table(&self, key: &str) -> TimeSeriesTable {
        flatten(self.raw.get(key))
    }

    /// Returns the row keys (dates) of the table stored under `key`, in payload order.
    ///
    /// The keys are read from the first column that is a JSON object.
    pub fn date_keys(&self, key: &str) -> Vec<String> {
        self.raw
            .get(key)
            .and_then(Value::as_object)
            .and_then(|columns| columns.values().find_map(Value::as_object))
            .map(|rows| rows.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns a localized string of the `i18n` bundle or [Value::Null].
    pub fn i18n(&self, key: &str) -> Value {
        self.raw
            .get(keys::I18N)
            .and_then(|bundle| bundle.get(key))
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Returns the dashboard settings.
    pub fn settings(&self) -> Settings {
        Settings::from_value(self.raw.get(keys::SETTINGS))
    }

    /// Returns the dashboard theme.
    pub fn theme(&self) -> Theme {
        Theme::from_value(self.raw.get(keys::THEME))
    }

    /// Returns the color scale for the choropleth fill.
    pub fn color_scale(&self) -> Value {
        match self.raw.get(keys::TURBO) {
            Some(scale @ Value::Array(_)) => scale.clone(),
            _ => settings::default_color_scale(),
        }
    }

    /// Returns the regions shown on the map.
    ///
    /// Without a `region_labels` list the columns of the cumulative cases table
    /// are used, except the aggregate column and the date column.
    pub fn region_labels(&self) -> Vec<String> {
        if let Some(labels) = self.raw.get(keys::REGION_LABELS).and_then(Value::as_array) {
            return labels
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect();
        }

        let total = self.settings().total_column_name;
        self.raw
            .get(keys::SWISS_CASES_BY_DATE_FILLED)
            .and_then(Value::as_object)
            .map(|columns| {
                columns
                    .keys()
                    .filter(|name| **name != total && name.as_str() != DATE_COLUMN)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the label position of a region.
    ///
    /// Falls back to the built-in Swiss cantonal centres when the payload
    /// carries no `regional_centres`.
    pub fn centroid(&self, region: &str) -> Option<RegionCentroid> {
        match self.raw.get(keys::REGIONAL_CENTRES) {
            Some(centres) => centres.get(region).and_then(RegionCentroid::from_value),
            None => centroid::swiss_cantonal_centre(region),
        }
    }

    /// Reports whether `region` received an update for the date at `index`.
    ///
    /// `region_updates` may hold a flag per region, a date-keyed table of flags
    /// per region, or a plain list of updated regions.
    pub fn region_updated(&self, region: &str, index: usize) -> bool {
        match self.raw.get(keys::REGION_UPDATES) {
            Some(Value::Array(regions)) => regions.iter().any(|r| r.as_str() == Some(region)),
            Some(updates @ Value::Object(_)) => match updates.get(region) {
                Some(flags @ (Value::Object(_) | Value::Array(_))) => {
                    flatten_series(flags).get(index).is_some_and(is_truthy)
                }
                Some(flag) => is_truthy(flag),
                None => false,
            },
            Some(other) => {
                debug!(
                    kind = kind_of(other),
                    "region updates are neither a list nor an object, no region is flagged"
                );
                false
            }
            None => false,
        }
    }

    /// Returns the top-level keys of `expected` that the payload lacks.
    pub fn missing_keys(&self, expected: &[&str]) -> Vec<String> {
        expected
            .iter()
            .filter(|key| !self.raw.contains_key(**key))
            .map(|key| String::from(*key))
            .collect()
    }
}

impl FromStr for Payload {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Payload> {
        let value: Value = serde_json::from_str(s)?;
        Payload::from_value(value)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
