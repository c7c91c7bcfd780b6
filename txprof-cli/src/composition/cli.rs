use clap::{Arg, Command, arg};

pub const COMPOSITION_CMD: &str = "composition";
pub const LENGTHS_CMD: &str = "lengths";

pub const DEFAULT_COMPOSITION_OUT: &str = "composition.csv";
pub const DEFAULT_LENGTHS_OUT: &str = "lengths.csv";

fn strategy_arg() -> Arg {
    arg!(--strategy <STRATEGY>)
        .required(false)
        .default_value("case-pattern")
        .help("How to find the CDS: `case-pattern` (uppercase CDS, lowercase UTRs) or `coordinates` (CDS=start-end in the header)")
}

pub fn create_composition_cli() -> Command {
    Command::new(COMPOSITION_CMD)
        .about("Per-gene A/T/C/G counts and ratios for the 5'UTR, CDS and 3'UTR of each transcript.")
        .arg(Arg::new("input").required(true).help("Path to a FASTA/FASTA.gz file of transcripts"))
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .default_value(DEFAULT_COMPOSITION_OUT)
                .help("Output table (.csv, or .tsv for tab-delimited)"),
        )
        .arg(strategy_arg())
        .arg(
            Arg::new("zero-policy")
                .long("zero-policy")
                .required(false)
                .default_value("na")
                .help("Report a base absent from a non-empty region as `na` or `zero`"),
        )
        .arg(
            arg!(--lengths <LENGTHS>)
                .required(false)
                .help("Also write a GeneID,5'UTR,CDS,3'UTR length table here"),
        )
        .arg(
            arg!(--report <REPORT>)
                .required(false)
                .help("Run report JSON path (default: stdout)"),
        )
}

pub fn create_lengths_cli() -> Command {
    Command::new(LENGTHS_CMD)
        .about("Per-gene 5'UTR, CDS and 3'UTR lengths of each transcript.")
        .arg(Arg::new("input").required(true).help("Path to a FASTA/FASTA.gz file of transcripts"))
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .default_value(DEFAULT_LENGTHS_OUT)
                .help("Output table (.csv, or .tsv for tab-delimited)"),
        )
        .arg(strategy_arg())
        .arg(
            arg!(--report <REPORT>)
                .required(false)
                .help("Run report JSON path (default: stdout)"),
        )
}
