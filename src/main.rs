//! shunt - integer arithmetic with the shunting-yard algorithm
//!
//! Usage:
//!   shunt              Start interactive REPL
//!   shunt -c "expr"    Evaluate a single expression
//!   shunt file.txt     Evaluate each line of a file

mod cli;
mod repl;
mod terminal;

use cli::{execute_command, execute_script, parse_args, print_help, print_version};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);

    if let Some(flag) = &cli.unknown {
        eprintln!("Unknown option: {}", flag);
        eprintln!("Try 'shunt --help' for usage");
        return ExitCode::FAILURE;
    }

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    let trace = cli.trace || terminal::trace_from_env();
    let mode = cli.mode();

    if let Some(expr) = &cli.command {
        return execute_command(expr, trace, mode);
    }

    if let Some(script) = &cli.script {
        return execute_script(script, trace, mode);
    }

    match repl::run_repl(trace, mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
