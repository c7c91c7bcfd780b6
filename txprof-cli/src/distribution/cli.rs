use clap::{Arg, ArgAction, Command, arg};

pub const DISTRIBUTION_CMD: &str = "distribution";
pub const DEFAULT_DISTRIBUTION_OUT: &str = "distribution.csv";

pub fn create_distribution_cli() -> Command {
    Command::new(DISTRIBUTION_CMD)
        .about("Relative-position density of feature occurrences along transcripts, normalized per gene.")
        .arg(
            Arg::new("input")
                .required(true)
                .help("Population table (CSV, or TSV for .tsv/.txt) with ID, mRNA_Length, 5UTR_length, CDS_Length, 3UTR_Length and start columns"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .default_value(DEFAULT_DISTRIBUTION_OUT)
                .help("Output table of x_values, counts_mRNA and Region"),
        )
        .arg(
            arg!(--bins <BINS>)
                .required(false)
                .default_value("100")
                .help("Number of relative-position bins"),
        )
        .arg(
            Arg::new("bin-range")
                .long("bin-range")
                .required(false)
                .default_value("observed")
                .help("Interval to bin: `observed` (min to max position) or `unit` (0 to 1)"),
        )
        .arg(
            arg!(--smooth)
                .action(ArgAction::SetTrue)
                .help("Also fit a cubic spline through the bins and write a resampled curve"),
        )
        .arg(
            arg!(--resolution <RESOLUTION>)
                .required(false)
                .default_value("300")
                .help("Number of points of the smoothed curve"),
        )
        .arg(
            Arg::new("smoothed-output")
                .long("smoothed-output")
                .required(false)
                .help("Smoothed curve path (default: <output>_smoothed.csv)"),
        )
        .arg(
            arg!(--report <REPORT>)
                .required(false)
                .help("Run report JSON path (default: stdout)"),
        )
}
