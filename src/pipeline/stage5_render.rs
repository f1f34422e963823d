use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ReportError;
use crate::model::confusion::ConfusionMatrix;
use crate::model::render_config::RenderConfig;
use crate::model::tally::CategoryTally;
use crate::report::bar::render_accuracy_bars;
use crate::report::heatmap::render_distribution_heatmap;

pub const STRICT_CHART_FILE: &str = "1_strict_accuracy.png";
pub const LOOSE_CHART_FILE: &str = "2_loose_accuracy.png";
pub const DISTRIBUTION_CHART_FILE: &str = "3_response_distribution.png";

#[derive(Debug, Clone, Copy)]
pub struct Stage5Input<'a> {
    pub strict: &'a CategoryTally,
    pub loose: &'a CategoryTally,
    pub distribution: &'a ConfusionMatrix,
}

pub fn chart_paths(out_dir: &Path) -> [PathBuf; 3] {
    [
        out_dir.join(STRICT_CHART_FILE),
        out_dir.join(LOOSE_CHART_FILE),
        out_dir.join(DISTRIBUTION_CHART_FILE),
    ]
}

/// Writes the three charts in order. The first failure aborts the remaining ones.
pub fn run_stage5(
    input: &Stage5Input<'_>,
    out_dir: &Path,
    config: &RenderConfig,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir)?;
    let [strict_path, loose_path, distribution_path] = chart_paths(out_dir);

    render_accuracy_bars(
        &strict_path,
        "1. Strict accuracy",
        &input.strict.percentages(),
        config.strict_palette,
        config,
    )?;
    confirm_saved(&strict_path);

    render_accuracy_bars(
        &loose_path,
        "2. Loose accuracy",
        &input.loose.percentages(),
        config.loose_palette,
        config,
    )?;
    confirm_saved(&loose_path);

    render_distribution_heatmap(
        &distribution_path,
        "3. Response distribution (expected -> actual)",
        input.distribution,
        config,
    )?;
    confirm_saved(&distribution_path);

    Ok(vec![strict_path, loose_path, distribution_path])
}

fn confirm_saved(path: &Path) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    println!("Chart '{}' saved.", name);
    info!("wrote {}", path.display());
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_render.rs"]
mod tests;
