use shunt::{display, lex, to_postfix, Error, Evaluator};

/// What to do with each line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Evaluate and print the integer result
    Evaluate,
    /// Print the postfix form without evaluating
    Postfix,
}

/// Execute a single line of input and return the text to print
pub(crate) fn execute_line(eval: &mut Evaluator, input: &str, mode: Mode) -> Result<String, Error> {
    let tokens = lex(input)?;
    let postfix = to_postfix(&tokens);

    match mode {
        Mode::Postfix => Ok(display::format_tokens(&postfix)),
        Mode::Evaluate => Ok(eval.eval(&postfix)?.to_string()),
    }
}

/// Render the infix tokens of a line (REPL `.tokens`)
pub(crate) fn show_tokens(input: &str) -> Result<String, Error> {
    let tokens = lex(input)?;
    Ok(tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" "))
}

/// Check whether the trace environment variable is set
pub(crate) fn trace_from_env() -> bool {
    std::env::var_os("SHUNT_TRACE").is_some()
}
