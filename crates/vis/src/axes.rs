//! Axis bounds of the trend charts.

use serde_json::Value;

use dashcoch_payload::value::as_number;

const RANGE_PADDING: f64 = 1.05;

/// Returns the largest number of `series`, floored at zero.
///
/// Nulls and non-numeric values never raise the maximum.
pub fn series_max(series: &[Value]) -> f64 {
    series
        .iter()
        .filter_map(as_number)
        .fold(0.0, f64::max)
}

/// Returns the largest number over several series, floored at zero.
pub fn max_over<'a, I>(series: I) -> f64
where
    I: IntoIterator<Item = &'a [Value]>,
{
    series.into_iter().map(series_max).fold(0.0, f64::max)
}

/// Returns the range of a log axis that shows values up to `max`.
///
/// Log axis ranges are given in powers of ten. The upper bound gets a padding
/// of five percent; a zero maximum yields a zero bound instead of `-inf`.
pub fn log_range(max: f64) -> [f64; 2] {
    let upper = if max > 0.0 {
        max.log10() * RANGE_PADDING
    } else {
        0.0
    };

    [0.0, upper]
}
