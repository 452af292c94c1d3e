//! Validation runner: fits every JSON case in a directory and writes the
//! selected bandwidth and predictions next to the inputs.
//!
//! Usage: `validate [INPUT_DIR] [OUTPUT_DIR]`

use fastKernreg::prelude::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_INPUT_DIR: &str = "../output/cases";
const DEFAULT_OUTPUT_DIR: &str = "../output/fastKernreg";

#[derive(Debug, Deserialize, Serialize)]
struct ValidationCase {
    name: String,
    #[serde(default)]
    notes: String,
    x: Vec<f64>,
    y: Vec<f64>,
    num_folds: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bandwidths: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x_out: Option<Vec<f64>>,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    optimal_bandwidth: f64,
    mode: String,
    predictions: Vec<f64>,
    fold_winners: Vec<f64>,
    non_finite: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = env::args().skip(1);
    let input_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_INPUT_DIR.into()));
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into()));

    run(&input_dir, &output_dir)
}

/// Process every `.json` case in `input_dir`; fails if any case fails.
fn run(input_dir: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    if !input_dir.is_dir() {
        return Err(format!(
            "input directory {:?} does not exist; pass one as the first argument",
            input_dir
        )
        .into());
    }

    fs::create_dir_all(output_dir)?;

    let mut processed = 0usize;
    let mut failed = 0usize;
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        match process_file(&path, output_dir) {
            Ok(()) => processed += 1,
            Err(e) => {
                failed += 1;
                tracing::error!(file = ?path, "case failed: {}", e);
            }
        }
    }

    tracing::info!(processed, failed, "validation finished");
    if failed > 0 {
        return Err(format!("{failed} case(s) failed").into());
    }
    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let file_name = input_path
        .file_name()
        .ok_or_else(|| format!("{:?} has no file name", input_path))?;

    let file = fs::File::open(input_path)?;
    let mut case: ValidationCase = serde_json::from_reader(file)?;
    let span = tracing::info_span!("case", name = %case.name);
    let _guard = span.enter();

    let mut builder = KernelRegression::new().folds(case.num_folds);
    if let Some(bandwidths) = &case.bandwidths {
        builder = builder.bandwidths(bandwidths);
    }
    if let Some(seed) = case.seed {
        builder = builder.seed(seed);
    }
    let model = builder.build()?;

    let result = match &case.x_out {
        Some(x_out) => model.fit_predict_at(&case.x, &case.y, x_out)?,
        None => model.fit_predict(&case.x, &case.y)?,
    };

    tracing::info!(
        bandwidth = result.bandwidth_used,
        mode = %result.mode,
        points = result.y.len(),
        "fitted"
    );
    if result.non_finite_count() > 0 {
        tracing::warn!(count = result.non_finite_count(), "non-finite predictions");
    }

    case.result = ResultData {
        optimal_bandwidth: result.bandwidth_used,
        mode: result.mode.to_string(),
        non_finite: result.non_finite_count(),
        fold_winners: result.fold_winners.iter().map(|s| s.bandwidth).collect(),
        predictions: result.y,
    };

    let output_path = output_dir.join(file_name);
    fs::write(output_path, serde_json::to_string_pretty(&case)?)?;

    Ok(())
}
