// Entry point: builds the article figures and writes them as PNG files.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use tacs_figures::config::load_config_from_path;
use tacs_figures::{Exporter, FigureConfig, FigureKind};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a JSON or YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Raster resolution (overrides config)
    #[arg(long)]
    dpi: Option<u32>,

    /// Output directory (overrides config)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Sampling step in seconds (overrides config)
    #[arg(long)]
    time_resolution: Option<f64>,

    /// Only build the named figure (figure-output, phase, am); repeatable
    #[arg(long = "figure", value_name = "NAME")]
    figures: Vec<FigureKind>,
}

fn resolve_config(args: &Args) -> Result<FigureConfig> {
    let mut cfg = match &args.config {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FigureConfig::default(),
    };
    if let Some(dpi) = args.dpi {
        cfg.dpi = dpi;
    }
    if let Some(dir) = &args.output_dir {
        cfg.output_dir = dir.clone();
    }
    if let Some(step) = args.time_resolution {
        cfg.time_resolution = step;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn run(args: Args) -> Result<bool> {
    let cfg = resolve_config(&args)?;
    std::fs::create_dir_all(&cfg.output_dir)
        .with_context(|| format!("creating {}", cfg.output_dir.display()))?;

    let selected: Vec<FigureKind> = if args.figures.is_empty() {
        FigureKind::ALL.to_vec()
    } else {
        args.figures.clone()
    };

    let exporter = Exporter::new();
    let mut all_ok = true;
    for kind in selected {
        let path = cfg.output_dir.join(kind.file_name());
        let outcome = kind
            .build(&cfg)
            .and_then(|figure| exporter.export(&figure, &path, cfg.dpi));
        if let Err(e) = outcome {
            error!("figure {kind} failed: {e}");
            all_ok = false;
        }
    }
    info!("figures written to {}", cfg.output_dir.display());
    Ok(all_ok)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
