use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ArgGroup;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use crate::fetch::PayloadSource;
use crate::fetch::parse_source;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Draw the log-log chart of weekly new cases against total cases.
    Trend(TrendArgs),
    /// Draw the map of a metric at a date.
    Map(MapArgs),
    /// List the callbacks the dashboard can invoke.
    Callbacks,
}

#[derive(Args)]
#[command(group(ArgGroup::new("date_selection").required(true).args(["date_index", "date"])))]
pub(crate) struct PayloadArgs {
    /// Specify the payload to read: a path to a JSON file or an http(s) URL.
    #[arg(short, long, value_parser(parse_source))]
    pub(crate) payload: PayloadSource,

    /// Specify the position of the date slider.
    #[arg(short = 'i', long)]
    pub(crate) date_index: Option<usize>,

    /// Specify the date to show, e.g. `2020-04-01`.
    #[arg(short, long)]
    pub(crate) date: Option<NaiveDate>,

    /// Specify the directory where an `index.html` page with the chart is created.
    /// If the output path is not specified then the chart description is
    /// printed to the standard output as JSON.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct TrendArgs {
    #[command(flatten)]
    pub(crate) payload: PayloadArgs,

    /// Specify the regions to draw, separated by commas.
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub(crate) regions: Vec<String>,

    /// Specify the scale of the axes. Accepted for compatibility with the dashboard
    /// controls; the axes are always logarithmic.
    #[arg(short, long)]
    pub(crate) scale: Option<String>,

    /// Specify the index of the hovered curve.
    #[arg(long)]
    pub(crate) hover_curve: Option<usize>,

    /// Use the cantonal chart with English texts instead of the localized regional chart.
    #[arg(short, long)]
    pub(crate) cantonal: bool,
}

#[derive(Args)]
pub(crate) struct MapArgs {
    #[command(flatten)]
    pub(crate) payload: PayloadArgs,

    /// Specify the metric: `prevalence`, `fatalities`, `new`, `new_fatalities`,
    /// `new_hospitalizations`, `hospitalizations` or `cases`.
    #[arg(short, long, default_value = "cases")]
    pub(crate) mode: String,
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}
