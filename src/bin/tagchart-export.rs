use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use tagchart::chart::export::{resolve_output, write_svg};
use tagchart::chart::{ChartData, ChartStyle, default_title, svg};
use tagchart::data::model::Metric;
use tagchart::data::{TagDataset, loader, rank};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RankBy {
    /// Number of mentions
    Count,
    /// Total amount raised
    Amount,
}

impl From<RankBy> for Metric {
    fn from(r: RankBy) -> Self {
        match r {
            RankBy::Count => Metric::Count,
            RankBy::Amount => Metric::TotalAmount,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "tagchart-export",
    about = "Render the top industries/buzzwords of a company CSV as an SVG chart"
)]
struct Cli {
    /// Company CSV with Industries/Buzzwords columns
    input: PathBuf,

    /// Ranking metric
    #[arg(short, long, value_enum, default_value = "count")]
    metric: RankBy,

    /// Tag to leave out (repeatable)
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Number of tags to draw (default: up to 10)
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Chart title (default: "Top N Industries/Buzzwords by ...")
    #[arg(short, long)]
    title: Option<String>,

    /// JSON file overriding chart fonts, sizes and colours
    #[arg(long)]
    style: Option<PathBuf>,

    /// Output file or directory (default: generated name in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<ExitCode> {
    let style = match &cli.style {
        Some(path) => ChartStyle::load(path)?,
        None => ChartStyle::default(),
    };

    let table = loader::load_file(&cli.input)?;
    let dataset = match TagDataset::from_table(&table) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let metric = Metric::from(cli.metric);
    if metric == Metric::TotalAmount && !dataset.has_amounts() {
        eprintln!("Ranking by amount needs an 'Amount raised (converted to GBP)' column.");
        return Ok(ExitCode::FAILURE);
    }

    let excluded: BTreeSet<String> = cli.exclude.into_iter().collect();
    for tag in &excluded {
        if !dataset.tags.contains(tag) {
            log::warn!("Excluded tag {tag:?} does not occur in the file");
        }
    }

    let available = rank::available(&dataset.tags, &excluded);
    let top_n = rank::clamp_top_n(
        cli.top.unwrap_or_else(|| rank::default_top_n(available)),
        available,
    );
    let title = cli.title.unwrap_or_else(|| default_title(top_n, metric));

    let ranked = rank::rank(&dataset.tags, metric, &excluded, top_n);
    let Some(chart) = ChartData::build(&ranked, metric, &title, &style) else {
        eprintln!("No industries or buzzwords to display.");
        return Ok(ExitCode::FAILURE);
    };

    let path = resolve_output(
        cli.output.as_deref(),
        &title,
        chrono::Local::now().naive_local(),
    );
    write_svg(&path, &svg::render(&chart, &style))
        .with_context(|| format!("exporting {}", cli.input.display()))?;

    for bar in &chart.bars {
        println!("{:<40} {}", bar.label, bar.text);
    }
    println!("Wrote {}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
