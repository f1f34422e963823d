mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::error::ReportError;
use crate::input::LoadOptions;
use crate::model::render_config::RenderConfig;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_strict::run_stage2;
use crate::pipeline::stage3_loose::run_stage3;
use crate::pipeline::stage4_distribution::run_stage4;
use crate::pipeline::stage5_render::{Stage5Input, run_stage5};

const DEFAULT_INPUT: &str = "Experiments/ExperimentReport_2025-07-09_17-50-02.csv";
const DEFAULT_OUT_DIR: &str = "Experiments";

/// Score a repeated-run evaluation report and render accuracy charts.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
struct Cli {
    /// Experiment report (CSV, optionally .gz)
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory the charts are written to
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,

    /// Field delimiter of the report
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Font family used for chart text
    #[arg(long, default_value = "sans-serif")]
    font: String,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Debug, Clone)]
struct RunConfig {
    input: PathBuf,
    out_dir: PathBuf,
    load: LoadOptions,
    render: RenderConfig,
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = build_config(cli).and_then(|config| {
        if let Err(err) = logging::init_logging(config.verbose) {
            eprintln!("warning: logging disabled: {err}");
        }
        run(&config)
    }) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn build_config(cli: Cli) -> Result<RunConfig, ReportError> {
    if !cli.delimiter.is_ascii() {
        return Err(ReportError::MalformedInput(format!(
            "delimiter must be a single ASCII character, got {:?}",
            cli.delimiter
        )));
    }
    Ok(RunConfig {
        input: cli.input,
        out_dir: cli.out,
        load: LoadOptions {
            delimiter: cli.delimiter as u8,
        },
        render: RenderConfig::default_v1().with_font(&cli.font),
        verbose: cli.verbose,
    })
}

fn run(config: &RunConfig) -> Result<(), ReportError> {
    let stage1 = run_stage1(&config.input, config.load)?;
    let strict = run_stage2(&stage1.table);
    let loose = run_stage3(&stage1.table);
    let distribution = run_stage4(&stage1.table);

    let input = Stage5Input {
        strict: &strict,
        loose: &loose,
        distribution: &distribution,
    };
    let written = run_stage5(&input, &config.out_dir, &config.render)?;
    info!("{} charts written", written.len());

    println!(
        "\nAll analysis complete; charts saved to '{}'.",
        config.out_dir.display()
    );
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
