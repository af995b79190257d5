//! Compact text rendering for token sequences and value stacks

use crate::lexer::Token;

/// Render one token the way it appears in an expression: `42`, `+`, `(`
pub fn format_token(token: &Token) -> String {
    match token {
        Token::Number(n) => n.to_string(),
        other => other.symbol().to_string(),
    }
}

/// Render a token sequence space-separated, e.g. `2 3 4 * +`
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(format_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the top `limit` values of a stack, bottom to top
pub fn format_stack(stack: &[i64], limit: usize) -> String {
    if stack.is_empty() {
        return "(empty)".to_string();
    }
    let skip = stack.len().saturating_sub(limit);
    let items: Vec<String> = stack[skip..].iter().map(|n| n.to_string()).collect();
    if skip > 0 {
        format!("... {}", items.join(" "))
    } else {
        items.join(" ")
    }
}
