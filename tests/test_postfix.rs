//! Integration tests for infix to postfix conversion

#[path = "common/mod.rs"]
mod common;
use common::{eval_postfix, lex, rpn, to_postfix, Token};
use shunt::Operator;

/// Independent recursive-descent evaluator used as a reference
fn reference(input: &str) -> i64 {
    fn expr(t: &[Token], i: &mut usize) -> i64 {
        let mut value = term(t, i);
        while let Some(Token::Operator(op @ (Operator::Add | Operator::Sub))) = t.get(*i) {
            *i += 1;
            let rhs = term(t, i);
            value = if *op == Operator::Add { value + rhs } else { value - rhs };
        }
        value
    }
    fn term(t: &[Token], i: &mut usize) -> i64 {
        let mut value = atom(t, i);
        while let Some(Token::Operator(op @ (Operator::Mul | Operator::Div))) = t.get(*i) {
            *i += 1;
            let rhs = atom(t, i);
            value = if *op == Operator::Mul { value * rhs } else { value / rhs };
        }
        value
    }
    fn atom(t: &[Token], i: &mut usize) -> i64 {
        let token = t[*i];
        *i += 1;
        match token {
            Token::Number(n) => n,
            Token::LeftParen => {
                let value = expr(t, i);
                *i += 1; // ')'
                value
            }
            other => panic!("unexpected {}", other),
        }
    }
    let tokens = lex(input).unwrap();
    let mut i = 0;
    expr(&tokens, &mut i)
}

#[test]
fn test_postfix_shapes() {
    assert_eq!(rpn("1+2"), "1 2 +");
    assert_eq!(rpn("2+3*4"), "2 3 4 * +");
    assert_eq!(rpn("(2+3)*4"), "2 3 + 4 *");
    assert_eq!(rpn("8-4-2"), "8 4 - 2 -");
    assert_eq!(rpn("1*2+3*4"), "1 2 * 3 4 * +");
}

#[test]
fn test_postfix_matches_reference() {
    let battery = [
        "1",
        "1+2*3",
        "(1+2)*(3-1)",
        "8-4-2",
        "8/4/2",
        "2*(3+4)*5",
        "((1+2)*(3+4))/7",
        "100-(20-(5-1))",
        "7/2*2+7-7/2",
        "((((9))))-(((8)))",
        "12*34-56/7+8",
        "1+2-3+4-5+6",
    ];
    for input in battery {
        let postfix = to_postfix(&lex(input).unwrap());
        assert_eq!(eval_postfix(&postfix).unwrap(), reference(input), "{}", input);
    }
}

#[test]
fn test_postfix_length_and_multiset() {
    for input in ["(1+2)*(3-1)", "((5))", "4*(2+(6/3))-1", "9"] {
        let infix = lex(input).unwrap();
        let postfix = to_postfix(&infix);
        let parens = infix.iter().filter(|t| t.is_paren()).count();
        assert_eq!(postfix.len(), infix.len() - parens, "{}", input);

        let mut expected: Vec<Token> = infix.into_iter().filter(|t| !t.is_paren()).collect();
        let mut actual = postfix;
        let key = |t: &Token| (t.symbol(), t.value());
        expected.sort_by_key(key);
        actual.sort_by_key(key);
        assert_eq!(actual, expected, "{}", input);
    }
}

#[test]
fn test_postfix_of_postfix_is_unchanged_without_operators() {
    let postfix = to_postfix(&lex("42").unwrap());
    assert_eq!(to_postfix(&postfix), postfix);
}

#[test]
fn test_token_display() {
    let tokens = lex("3*(4)").unwrap();
    let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    assert_eq!(
        rendered,
        ["{'n', 3}", "{'*', 0}", "{'(', 0}", "{'n', 4}", "{')', 0}"]
    );
}
