use clap::{Command, arg};

pub const RUN_CMD: &str = "run";

pub fn create_run_cli() -> Command {
    Command::new(RUN_CMD)
        .about("Run the composition and/or distribution steps described in a TOML file.")
        .arg(
            arg!(--config <CONFIG>)
                .required(true)
                .help("Path to a .toml run configuration"),
        )
        .arg(
            arg!(--report <REPORT>)
                .required(false)
                .help("Run report JSON path (default: stdout)"),
        )
}
