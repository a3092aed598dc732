//! The top-level keys of a dashboard payload.

#![allow(missing_docs)]

pub const SWISS_CASES_BY_DATE_FILLED: &str = "swiss_cases_by_date_filled";
pub const SWISS_CASES_BY_DATE_FILLED_PER_CAPITA: &str = "swiss_cases_by_date_filled_per_capita";
pub const SWISS_CASES_BY_DATE_DIFF: &str = "swiss_cases_by_date_diff";
pub const SWISS_FATALITIES_BY_DATE_FILLED: &str = "swiss_fatalities_by_date_filled";
pub const SWISS_FATALITIES_BY_DATE_DIFF: &str = "swiss_fatalities_by_date_diff";
pub const SWISS_HOSPITALIZATIONS_BY_DATE_FILLED: &str = "swiss_hospitalizations_by_date_filled";
pub const SWISS_HOSPITALIZATIONS_BY_DATE_DIFF: &str = "swiss_hospitalizations_by_date_diff";
pub const MOVING_TOTAL: &str = "moving_total";

pub const REGIONAL_CENTRES: &str = "regional_centres";
pub const REGION_UPDATES: &str = "region_updates";
pub const REGION_LABELS: &str = "region_labels";
pub const I18N: &str = "i18n";
pub const SETTINGS: &str = "settings";
pub const THEME: &str = "theme";
pub const TURBO: &str = "turbo";

/// The column holding the human-readable date labels of a table.
pub const DATE_LABEL: &str = "date_label";

/// The keys the trend charts read.
pub const TREND_KEYS: &[&str] = &[SWISS_CASES_BY_DATE_FILLED, MOVING_TOTAL];

/// The keys the map frame reads.
pub const MAP_KEYS: &[&str] = &[
    SWISS_CASES_BY_DATE_FILLED,
    SWISS_CASES_BY_DATE_FILLED_PER_CAPITA,
    SWISS_CASES_BY_DATE_DIFF,
    SWISS_FATALITIES_BY_DATE_FILLED,
    SWISS_FATALITIES_BY_DATE_DIFF,
    SWISS_HOSPITALIZATIONS_BY_DATE_FILLED,
    SWISS_HOSPITALIZATIONS_BY_DATE_DIFF,
    MOVING_TOTAL,
    REGION_UPDATES,
    REGION_LABELS,
    SETTINGS,
    THEME,
    TURBO,
];
