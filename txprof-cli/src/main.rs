mod composition;
mod distribution;
mod report;
mod run;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use log::Level;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "txprof";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Per-region nucleotide composition of transcripts and positional density of features along them.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output"),
        )
        .subcommand(composition::cli::create_composition_cli())
        .subcommand(composition::cli::create_lengths_cli())
        .subcommand(distribution::cli::create_distribution_cli())
        .subcommand(run::cli::create_run_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    let level = if matches.get_flag("verbose") {
        Level::Debug
    } else {
        Level::Info
    };
    simple_logger::init_with_level(level)?;

    match matches.subcommand() {
        //
        // PER-GENE COMPOSITION
        //
        Some((composition::cli::COMPOSITION_CMD, matches)) => {
            composition::handlers::run_composition(matches)?;
        }
        Some((composition::cli::LENGTHS_CMD, matches)) => {
            composition::handlers::run_lengths(matches)?;
        }

        //
        // POSITIONAL DISTRIBUTION
        //
        Some((distribution::cli::DISTRIBUTION_CMD, matches)) => {
            distribution::handlers::run_distribution(matches)?;
        }

        //
        // CONFIG-DRIVEN RUN
        //
        Some((run::cli::RUN_CMD, matches)) => {
            run::handlers::run_from_config(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_distribution_defaults() {
        let matches = build_parser()
            .try_get_matches_from(["txprof", "distribution", "population.csv"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, distribution::cli::DISTRIBUTION_CMD);
        assert_eq!(sub.get_one::<String>("bins").map(String::as_str), Some("100"));
        assert_eq!(
            sub.get_one::<String>("output").map(String::as_str),
            Some(distribution::cli::DEFAULT_DISTRIBUTION_OUT)
        );
        assert!(!sub.get_flag("smooth"));
    }

    #[rstest]
    fn test_verbose_after_subcommand() {
        let matches = build_parser()
            .try_get_matches_from(["txprof", "lengths", "in.fa", "--verbose"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[rstest]
    fn test_run_requires_config() {
        let result = build_parser().try_get_matches_from(["txprof", "run"]);
        assert!(result.is_err());
    }
}
