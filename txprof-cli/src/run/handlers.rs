use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::warn;

use txprof_core::RunConfig;

use crate::composition::handlers::composition_pipeline;
use crate::distribution::handlers::distribution_pipeline;
use crate::report::{RunReport, write_report};

pub fn run_pipelines(config: &RunConfig) -> Result<RunReport> {
    if config.composition.is_none() && config.distribution.is_none() {
        warn!("Run configuration has neither a [composition] nor a [distribution] section");
    }

    let composition = config
        .composition
        .as_ref()
        .map(composition_pipeline)
        .transpose()?;
    let distribution = config
        .distribution
        .as_ref()
        .map(distribution_pipeline)
        .transpose()?;

    Ok(RunReport {
        composition,
        distribution,
    })
}

pub fn run_from_config(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("config")
        .context("--config is required")?;
    let config = RunConfig::try_from(Path::new(path))
        .with_context(|| format!("Failed to load run configuration {}", path))?;

    let report = run_pipelines(&config)?;
    write_report(&report, matches.get_one::<String>("report").map(Path::new))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;
    use tempfile::tempdir;
    use txprof_core::{CompositionConfig, DistributionConfig};

    #[rstest]
    fn test_run_both_sections() {
        let dir = tempdir().unwrap();
        let config = RunConfig {
            composition: Some(CompositionConfig {
                input: "../tests/data/transcripts.fa".into(),
                output: dir.path().join("composition.csv"),
                strategy: Default::default(),
                zero_policy: Default::default(),
                lengths_output: None,
            }),
            distribution: Some(DistributionConfig::new(
                "../tests/data/population.csv",
                dir.path().join("distribution.csv"),
            )),
        };

        let report = run_pipelines(&config).unwrap();
        assert_eq!(report.composition.unwrap().summary.emitted, 4);
        assert_eq!(report.distribution.unwrap().total_genes, 3);
        assert!(dir.path().join("composition.csv").exists());
        assert!(dir.path().join("distribution.csv").exists());
    }

    #[rstest]
    fn test_empty_config_runs_nothing() {
        let report = run_pipelines(&RunConfig::default()).unwrap();
        assert!(report.composition.is_none());
        assert!(report.distribution.is_none());
    }
}
