//! distlab - command-line distribution workbench
//!
//! Prints frequency tables, summary statistics and text charts for small
//! datasets given on the command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use comfy_table::Table;
use tracing_subscriber::EnvFilter;

use distlab_core::chart::{self, ChartSeries};
use distlab_core::input::{coerce_count, coerce_measurement};
use distlab_core::report;
use distlab_core::{Measurement, ObjectCount, Workbench, WorkbenchConfig};

#[derive(Parser)]
#[command(name = "distlab", version, about = "Discrete and continuous distribution workbench")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the derived snapshot as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Frequency table for object counts
    Discrete {
        /// Row as TYPE,COLOR,COUNT (repeatable; seed rows when omitted)
        #[arg(short, long = "item")]
        items: Vec<String>,
    },
    /// Mean, standard deviation and histogram for measurements
    Continuous {
        /// Row as OBJECT,HEIGHT (repeatable)
        #[arg(short, long = "item")]
        items: Vec<String>,

        /// Bare heights, labelled "Value 1", "Value 2", ...
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Describe discrete and continuous distributions
    Definitions,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => WorkbenchConfig::load(path)?,
        None => WorkbenchConfig::default(),
    };
    let mut workbench = Workbench::new(config)?;

    match cli.command {
        Command::Discrete { items } => {
            if !items.is_empty() {
                let sheet = workbench.discrete_mut();
                sheet.clear();
                for item in &items {
                    sheet.push(parse_object_count(item));
                }
            }
            print_discrete(&workbench, cli.json)?;
        }
        Command::Continuous { items, values } => {
            if !items.is_empty() || !values.is_empty() {
                let sheet = workbench.continuous_mut();
                sheet.clear();
                for item in &items {
                    sheet.push(parse_measurement(item));
                }
                for (i, value) in values.iter().enumerate() {
                    sheet.push(Measurement::new(
                        format!("Value {}", i + 1),
                        coerce_measurement(value),
                    ));
                }
            }
            print_continuous(&workbench, cli.json)?;
        }
        Command::Definitions => print_definitions(cli.json)?,
    }

    Ok(())
}

/// `TYPE,COLOR,COUNT`; missing fields are empty, a missing count is 0
fn parse_object_count(item: &str) -> ObjectCount {
    let mut parts = item.splitn(3, ',').map(str::trim);
    let object_type = parts.next().unwrap_or_default();
    let color = parts.next().unwrap_or_default();
    let count = parts.next().map(coerce_count).unwrap_or(0);
    ObjectCount::new(object_type, color, count)
}

/// `OBJECT,HEIGHT`; without a comma the whole item is the height
fn parse_measurement(item: &str) -> Measurement {
    match item.rsplit_once(',') {
        Some((object, height)) => Measurement::new(object.trim(), coerce_measurement(height)),
        None => Measurement::new("", coerce_measurement(item)),
    }
}

fn print_discrete(workbench: &Workbench, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let view = workbench.discrete_view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Object", "Count", "Probability"]);
    for row in &view.rows {
        table.add_row(vec![
            row.label.clone(),
            row.count.to_string(),
            row.probability_display.clone(),
        ]);
    }

    println!("{table}");
    println!("Total Count: {}", view.total_count);
    let display = &workbench.config().display;
    print_chart(&view.count_chart, display.bar_width, 0);
    print_chart(
        &view.probability_chart,
        display.bar_width,
        display.probability_decimals,
    );
    Ok(())
}

fn print_continuous(workbench: &Workbench, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let view = workbench.continuous_view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let display = &workbench.config().display;
    let mut table = Table::new();
    table.set_header(vec![
        "Object".to_string(),
        format!("Height ({})", display.unit),
    ]);
    for row in &view.rows {
        table.add_row(vec![
            row.input.object.clone(),
            row.input.height.to_string(),
        ]);
    }

    println!("{table}");
    println!("Mean (Average): {}", view.mean_display);
    println!("Standard Deviation: {}", view.std_dev_display);
    println!();
    println!("Normal Distribution Properties");
    for rule in &view.normal_rules {
        println!("  - {}", rule);
    }
    print_chart(&view.histogram_chart, display.bar_width, 0);
    Ok(())
}

fn print_definitions(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let definitions = report::definitions();
    if json {
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    for definition in &definitions {
        println!("{}", definition.title);
        println!("  {}", definition.description);
        for example in definition.examples {
            println!("  - {}", example);
        }
        println!();
    }
    Ok(())
}

fn print_chart(series: &ChartSeries, bar_width: usize, decimals: usize) {
    println!();
    println!("{}", series.name);
    if series.is_empty() {
        println!("  (no data)");
        return;
    }
    print!("{}", chart::render_bars(series, bar_width, decimals));
}
