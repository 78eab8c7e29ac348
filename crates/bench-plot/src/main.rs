// File: crates/bench-plot/src/main.rs
// Summary: CLI that loads a json generator benchmark result table and renders it to a PNG bar chart.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bench_chart::config::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use bench_chart::{ChartMode, PlotConfig};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "bench-plot", version, about = "Render json generator benchmark results as a horizontal bar chart")]
struct Cli {
    /// Headerless table of `label, obj/s[, peak heap bytes]` records
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Chart mode; `auto` follows the number of columns in the table
    #[arg(short, long, value_enum, default_value_t = ModeArg::Auto)]
    mode: ModeArg,

    /// Image width in pixels
    #[arg(long, default_value_t = bench_chart::types::WIDTH)]
    width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = bench_chart::types::HEIGHT)]
    height: i32,

    /// Log debug details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Auto,
    Single,
    Dual,
}

impl ModeArg {
    fn to_mode(self) -> Option<ChartMode> {
        match self {
            ModeArg::Auto => None,
            ModeArg::Single => Some(ChartMode::Single),
            ModeArg::Dual => Some(ChartMode::Dual),
        }
    }
}

impl Cli {
    fn into_config(self) -> PlotConfig {
        let mut config = PlotConfig::new(self.input, self.output).with_mode(self.mode.to_mode());
        config.render.width = self.width;
        config.render.height = self.height;
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = cli.into_config();
    let summary = bench_chart::run(&config)
        .with_context(|| format!("failed to chart '{}'", config.input_path.display()))?;

    println!(
        "Wrote {} ({} rows, {} mode)",
        summary.output_path.display(),
        summary.rows,
        summary.mode
    );
    Ok(())
}
