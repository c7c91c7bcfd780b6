use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use txprof_core::{BinRange, DistributionConfig, SmoothingConfig};
use txprof_distribution::{PositionalAggregator, Smoothing, try_smooth};
use txprof_io::{TableWrite, read_population};

use crate::report::{DistributionReport, RunReport, SmoothingReport, write_report};

/// `dir/name.csv` -> `dir/name_smoothed.csv`
pub fn default_smoothed_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "distribution".to_string());
    let ext = output
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "csv".to_string());
    output.with_file_name(format!("{}_smoothed.{}", stem, ext))
}

///
/// Aggregate one population table as described by `config`.
///
/// The raw table is written before smoothing is attempted, so it exists
/// even when smoothing gets skipped.
///
pub fn distribution_pipeline(config: &DistributionConfig) -> Result<DistributionReport> {
    config.validate()?;

    let rows = read_population(&config.input)
        .with_context(|| format!("Failed to read population from {}", config.input.display()))?;
    let table = PositionalAggregator::from_config(config)?.aggregate(&rows)?;

    table
        .bins
        .write_table_to_path(&config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    let smoothing = try_smooth(&table, config.smoothing.as_ref());
    let smoothed_output = match (&smoothing, &config.smoothing) {
        (Smoothing::Curve(curve), Some(smoothing_config)) => {
            let path = smoothing_config
                .output
                .clone()
                .unwrap_or_else(|| default_smoothed_path(&config.output));
            curve
                .write_table_to_path(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Some(path)
        }
        _ => None,
    };

    let reason = match &smoothing {
        Smoothing::Skipped { reason } => Some(reason.clone()),
        _ => None,
    };

    Ok(DistributionReport {
        input: config.input.clone(),
        output: config.output.clone(),
        bins: config.bins,
        bin_range: config.bin_range,
        filter: table.filter,
        total_genes: table.total_genes,
        total_occurrences: table.total_occurrences,
        boundaries: table.boundaries,
        smoothing: SmoothingReport {
            status: smoothing.status(),
            reason,
            output: smoothed_output,
        },
    })
}

pub fn run_distribution(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("A path to a population table is required.")?;
    let output = matches
        .get_one::<String>("output")
        .context("--output has a default value")?;

    let mut config = DistributionConfig::new(input, output);
    if let Some(bins) = matches.get_one::<String>("bins") {
        config.bins = bins
            .parse()
            .context("--bins must be a positive integer")?;
    }
    if let Some(bin_range) = matches.get_one::<String>("bin-range") {
        config.bin_range = bin_range.parse::<BinRange>()?;
    }
    if matches.get_flag("smooth") {
        let resolution = match matches.get_one::<String>("resolution") {
            Some(r) => r
                .parse()
                .context("--resolution must be a positive integer")?,
            None => SmoothingConfig::default().resolution,
        };
        config.smoothing = Some(SmoothingConfig {
            resolution,
            output: matches.get_one::<String>("smoothed-output").map(PathBuf::from),
        });
    }

    let report = distribution_pipeline(&config)?;
    info!(
        "{} genes, {} occurrences, smoothing {}",
        report.total_genes, report.total_occurrences, report.smoothing.status
    );

    let run_report = RunReport {
        distribution: Some(report),
        ..Default::default()
    };
    write_report(
        &run_report,
        matches.get_one::<String>("report").map(Path::new),
    )
}
