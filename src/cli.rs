use shunt::Evaluator;
use crate::terminal::{execute_line, Mode};
use std::fs;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
#[derive(Debug, Default)]
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) script: Option<String>,
    pub(crate) help: bool,
    pub(crate) version: bool,
    pub(crate) trace: bool,
    pub(crate) postfix: bool,
    pub(crate) unknown: Option<String>,
}

impl CliArgs {
    pub(crate) fn mode(&self) -> Mode {
        if self.postfix {
            Mode::Postfix
        } else {
            Mode::Evaluate
        }
    }
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "--trace" => {
                cli.trace = true;
            }
            "-p" | "--postfix" => {
                cli.postfix = true;
            }
            "-c" => {
                // Everything after -c is the expression
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                    break;
                }
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            flag if flag.starts_with('-') => {
                cli.unknown.get_or_insert_with(|| flag.to_string());
            }
            path => {
                cli.script = Some(path.to_string());
            }
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_help() {
    println!(
        r#"shunt-{} Integer arithmetic with the shunting-yard algorithm

USAGE:
    shunt                   Start interactive REPL
    shunt -c <expr>         Evaluate a single expression
    shunt <file>            Evaluate each line of a file
    shunt --help            Show this help message
    shunt --version         Show version

OPTIONS:
    -p, --postfix           Print the postfix (RPN) form instead of evaluating
    --trace                 Print the stack after each postfix step (stderr)

ENVIRONMENT:
    SHUNT_TRACE             Enable trace mode
    SHUNT_BANNER            Show startup banner in the REPL
    SHUNT_HISTORY           REPL history file (default ~/.shunt_history)

SYNTAX:
    123                     Non-negative integer literal
    + -                     Add, subtract (precedence 1)
    * /                     Multiply, truncating divide (precedence 2)
    ( )                     Grouping
    Equal precedence groups left to right: 8-4-2 = 2
    Any other character is ignored.

REPL COMMANDS:
    .help, .h               Show this help
    .tokens, .t <expr>      Show the tokens of an expression
    .postfix, .p <expr>     Show the postfix form of an expression
    .trace                  Toggle trace mode
    exit, quit              Exit the REPL

EXAMPLES:
    shunt -c "2+3*4"              # 14
    shunt -c "(2+3)*4"            # 20
    shunt -p -c "(1+2)*(3-1)"     # 1 2 + 3 1 - *
"#,
        VERSION
    );
}

pub(crate) fn print_version() {
    println!("shunt-{}", VERSION);
}

/// Evaluate a single expression from the command line
pub(crate) fn execute_command(expr: &str, trace: bool, mode: Mode) -> ExitCode {
    let mut eval = Evaluator::new();
    eval.set_trace_mode(trace);

    match execute_line(&mut eval, expr, mode) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Evaluate a file, one expression per line
pub(crate) fn execute_script(path: &str, trace: bool, mode: Mode) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let mut eval = Evaluator::new();
    eval.set_trace_mode(trace);

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match execute_line(&mut eval, trimmed, mode) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error at line {}: {}", line_num + 1, e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
