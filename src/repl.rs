use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use shunt::Evaluator;
use std::env;
use std::path::PathBuf;

use crate::cli::print_help;
use crate::terminal::{execute_line, show_tokens, Mode};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get home directory
fn dirs_home() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}

/// History file: $SHUNT_HISTORY, else ~/.shunt_history
fn history_path() -> Option<PathBuf> {
    env::var_os("SHUNT_HISTORY")
        .map(PathBuf::from)
        .or_else(|| dirs_home().map(|h| h.join(".shunt_history")))
}

/// A REPL dot-command and its argument
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand<'a> {
    Help,
    Tokens(&'a str),
    Postfix(&'a str),
    Trace,
    Exit,
    Unknown(&'a str),
}

/// Recognize REPL commands; `None` means the line is an expression
fn parse_repl_command(line: &str) -> Option<ReplCommand<'_>> {
    if line == "exit" || line == "quit" {
        return Some(ReplCommand::Exit);
    }
    let rest = line.strip_prefix('.')?;
    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    Some(match name {
        "help" | "h" => ReplCommand::Help,
        "tokens" | "t" => ReplCommand::Tokens(arg),
        "postfix" | "p" => ReplCommand::Postfix(arg),
        "trace" => ReplCommand::Trace,
        _ => ReplCommand::Unknown(name),
    })
}

/// Run the interactive REPL
pub(crate) fn run_repl(trace: bool, mode: Mode) -> RlResult<()> {
    let mut rl = DefaultEditor::new()?;

    let mut eval = Evaluator::new();
    eval.set_trace_mode(trace);

    // Try to load history
    let history = history_path();
    if let Some(ref path) = history {
        let _ = rl.load_history(path);
    }

    // Show banner only if SHUNT_BANNER is set
    if env::var_os("SHUNT_BANNER").is_some() {
        println!("shunt-{} integer calculator", VERSION);
        println!("  Type 'exit' or Ctrl-D to quit, '.help' for usage");
    }

    let prompt = match mode {
        Mode::Evaluate => "shunt> ",
        Mode::Postfix => "shunt(rpn)> ",
    };

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match parse_repl_command(trimmed) {
                    Some(ReplCommand::Exit) => break,
                    Some(ReplCommand::Help) => print_help(),
                    Some(ReplCommand::Tokens(expr)) => match show_tokens(expr) {
                        Ok(tokens) => println!("{}", tokens),
                        Err(e) => eprintln!("Error: {}", e),
                    },
                    Some(ReplCommand::Postfix(expr)) => {
                        match execute_line(&mut eval, expr, Mode::Postfix) {
                            Ok(rpn) => println!("{}", rpn),
                            Err(e) => eprintln!("Error: {}", e),
                        }
                    }
                    Some(ReplCommand::Trace) => {
                        let enabled = !eval.trace_mode();
                        eval.set_trace_mode(enabled);
                        println!("Trace mode {}", if enabled { "on" } else { "off" });
                    }
                    Some(ReplCommand::Unknown(name)) => {
                        eprintln!("Unknown command: .{} (try .help)", name);
                    }
                    None => match execute_line(&mut eval, trimmed, mode) {
                        Ok(output) => println!("{}", output),
                        Err(e) => eprintln!("Error: {}", e),
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C clears the line
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    if let Some(ref path) = history {
        if let Err(e) = rl.save_history(path) {
            eprintln!("Warning: could not save history to {}: {}", path.display(), e);
        }
    }

    Ok(())
}
