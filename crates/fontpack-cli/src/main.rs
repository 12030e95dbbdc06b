//! fontpack CLI - convert TrueType/OpenType characters into a packed C
//! raster font table.

use clap::Parser;
use std::process::ExitCode;

use fontpack_cli::cli_args::Cli;
use fontpack_cli::{commands, emit, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command_line = emit::command_line(std::env::args_os());
    let opts = cli.into_options(command_line);

    match commands::convert::run(&opts) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
