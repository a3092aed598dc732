use std::path::Path;

use chrono::NaiveDate;
use tracing::info;
use tracing::warn;

use dashcoch_payload::Payload;
use dashcoch_payload::keys;
use dashcoch_vis::figure::Figure;
use dashcoch_vis::hover::HoverData;
use dashcoch_vis::registry;
use dashcoch_vis::registry::CallbackRegistry;
use dashcoch_vis::render::Render;
use dashcoch_vis::render::output::OutputFile;
use dashcoch_vis::render::page::Page;
use dashcoch_vis::selection::Selection;
use dashcoch_vis::text::TextBuffer;

use crate::cli::MapArgs;
use crate::cli::PayloadArgs;
use crate::cli::TrendArgs;
use crate::error::CliError;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn trend(args: TrendArgs) -> Result<(), CliError> {
    let payload = load(&args.payload, keys::TREND_KEYS)?;
    let date_index = trend_date_index(&args.payload, &payload)?;

    let mut selection = Selection::regions(args.regions, date_index);
    if let Some(scale) = args.scale {
        selection = selection.with_scale(scale);
    }
    if let Some(curve) = args.hover_curve {
        selection = selection.with_hover(HoverData::curve(curve));
    }

    let name = if args.cantonal {
        registry::CANTONAL_TREND
    } else {
        registry::REGIONAL_TREND
    };

    invoke(name, &selection, &payload, args.payload)
}

pub(crate) fn map(args: MapArgs) -> Result<(), CliError> {
    let payload = load(&args.payload, keys::MAP_KEYS)?;
    let date_index = map_date_index(&args.payload, &payload)?;
    let selection = Selection::map(args.mode, date_index);

    invoke(registry::MAP, &selection, &payload, args.payload)
}

pub(crate) fn callbacks() -> Result<(), CliError> {
    for name in CallbackRegistry::clientside().names() {
        println!("{name}");
    }

    Ok(())
}

fn load(args: &PayloadArgs, expected: &[&str]) -> Result<Payload, CliError> {
    let payload: Payload = args.payload.read()?.parse()?;

    for key in payload.missing_keys(expected) {
        warn!(key = %key, "payload has no such key, its values will be empty");
    }

    Ok(payload)
}

/// The trend charts cut their series right after the selected date.
fn trend_date_index(args: &PayloadArgs, payload: &Payload) -> Result<usize, CliError> {
    match args.date_index {
        Some(index) => Ok(index),
        None => Ok(date_position(args, payload)?.map_or(0, |position| position + 1)),
    }
}

/// The map reads the row of the selected date.
fn map_date_index(args: &PayloadArgs, payload: &Payload) -> Result<usize, CliError> {
    match args.date_index {
        Some(index) => Ok(index),
        None => Ok(date_position(args, payload)?.unwrap_or_default()),
    }
}

/// Resolves `--date` to the position of that date in the payload's tables.
fn date_position(args: &PayloadArgs, payload: &Payload) -> Result<Option<usize>, CliError> {
    let Some(date) = args.date else {
        return Ok(None);
    };

    payload
        .date_keys(keys::SWISS_CASES_BY_DATE_FILLED)
        .iter()
        .position(|key| parse_date_key(key) == Some(date))
        .map(Some)
        .ok_or_else(|| CliError::Date(format!("the payload has no data for {date}")))
}

/// Reads the date of a row key, ignoring a trailing time of day.
fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let date = key.get(..10)?;
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

fn invoke(
    name: &str,
    selection: &Selection,
    payload: &Payload,
    args: PayloadArgs,
) -> Result<(), CliError> {
    let callback = CallbackRegistry::clientside().resolve(name)?;
    let mut text = TextBuffer::new();

    info!(callback = name, date_index = selection.date_index, "invoking callback");
    let figure = callback(selection, payload, &mut text);

    for (id, content) in text.elements() {
        info!(element = id, text = content, "page text updated");
    }

    match args.output_path {
        Some(path) => write_page(name, &figure, &text, &path),
        None => {
            println!("{}", serde_json::to_string_pretty(&figure)?);
            Ok(())
        }
    }
}

fn write_page(
    name: &str,
    figure: &Figure,
    text: &TextBuffer,
    output_path: &Path,
) -> Result<(), CliError> {
    let mut output = OutputFile::new(output_path)?;

    Page::new(name, figure)
        .with_elements(text.elements())
        .render(&mut output)?;

    info!(path = %output.path().display(), "chart page written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde_json::json;

    use super::*;
    use crate::fetch::PayloadSource;

    fn payload() -> Payload {
        Payload::from_value(json!({
            "swiss_cases_by_date_filled": {
                "ZH": {"2020-03-05": 10, "2020-03-06": 20, "2020-03-07": 30},
                "CH": {"2020-03-05": 15, "2020-03-06": 25, "2020-03-07": 35}
            }
        }))
        .unwrap()
    }

    fn args(date_index: Option<usize>, date: Option<NaiveDate>) -> PayloadArgs {
        PayloadArgs {
            payload: PayloadSource::File(PathBuf::from("payload.json")),
            date_index,
            date,
            output_path: None,
        }
    }

    #[test]
    fn date_selects_the_row_for_the_map_and_the_cut_for_the_trend() {
        let payload = payload();
        let args = args(None, NaiveDate::from_ymd_opt(2020, 3, 6));

        assert_eq!(map_date_index(&args, &payload).unwrap(), 1);
        assert_eq!(trend_date_index(&args, &payload).unwrap(), 2);
    }

    #[test]
    fn date_index_is_used_as_given() {
        let payload = payload();
        let args = args(Some(2), None);

        assert_eq!(map_date_index(&args, &payload).unwrap(), 2);
        assert_eq!(trend_date_index(&args, &payload).unwrap(), 2);
    }

    #[test]
    fn unknown_date_is_an_error() {
        let payload = payload();
        let args = args(None, NaiveDate::from_ymd_opt(2021, 1, 1));

        assert!(matches!(map_date_index(&args, &payload), Err(CliError::Date(_))));
        assert!(matches!(trend_date_index(&args, &payload), Err(CliError::Date(_))));
    }

    #[test]
    fn date_keys_may_carry_a_time_of_day() {
        let date = NaiveDate::from_ymd_opt(2020, 3, 6);

        assert_eq!(parse_date_key("2020-03-06"), date);
        assert_eq!(parse_date_key("2020-03-06T00:00:00"), date);
        assert_eq!(parse_date_key("06.03.2020"), None);
        assert_eq!(parse_date_key("2020"), None);
    }
}
