//! Expression evaluation seam
//!
//! Arithmetic is delegated to `fasteval`; the editor only sees the
//! [`Evaluator`] trait, so tests can swap in a stub. Before parsing, the
//! default evaluator rewrites the buffer with [`prepare_expression`] so
//! that implicit products evaluate and `^` binds tighter than a sign.

use std::collections::BTreeMap;

use fasteval::{Evaler, Parser, Slab};

/// Something that can turn an arithmetic expression into a number.
///
/// Implementations report syntax problems as `Err` with a human-readable
/// reason. Division by zero and overflow are not errors: they come back as
/// non-finite values for the caller to classify.
pub trait Evaluator {
    /// Evaluates `expression` (operators `+ - * / ^` and parentheses)
    fn evaluate(&self, expression: &str) -> Result<f64, String>;
}

impl<F> Evaluator for F
where
    F: Fn(&str) -> Result<f64, String>,
{
    fn evaluate(&self, expression: &str) -> Result<f64, String> {
        self(expression)
    }
}

/// Default evaluator backed by `fasteval` with an empty namespace
#[derive(Debug, Clone, Copy, Default)]
pub struct FastEvaluator;

impl FastEvaluator {
    /// Creates the evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Evaluator for FastEvaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, String> {
        let prepared = prepare_expression(expression);
        eval_prepared(&prepared).map_err(|e| format!("{e:?}"))
    }
}

/// Parses and evaluates with limits sized to the input.
///
/// Nesting depth and expression count can never exceed the character
/// count, so neither limit can reject a well-formed buffer.
fn eval_prepared(prepared: &str) -> Result<f64, fasteval::Error> {
    let size = prepared.len() + 1;
    let mut parser = Parser::new();
    parser.expr_len_limit = parser.expr_len_limit.max(size);
    parser.expr_depth_limit = parser.expr_depth_limit.max(size);

    let mut slab = Slab::with_capacity(size);
    // No variables: every name lookup fails
    let mut namespace = BTreeMap::<String, f64>::new();
    let root = parser.parse(prepared, &mut slab.ps)?;
    root.from(&slab.ps).eval(&slab, &mut namespace)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Number(&'a str),
    Operator(char),
    Open,
    Close,
    Other(char),
}

/// Splits an expression into numbers (including exponent forms such as
/// `1e-7`), operators, parentheses and anything else. Whitespace is dropped.
fn tokenize(text: &str) -> Vec<Token<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let at = |i: usize| chars.get(i).map(|&(_, c)| c);
    let offset = |i: usize| chars.get(i).map_or(text.len(), |&(o, _)| o);

    let mut tokens = Vec::new();
    let mut i = 0;
    while let Some(ch) = at(i) {
        let start = i;
        i += 1;
        let token = match ch {
            '0'..='9' | '.' => {
                while at(i).is_some_and(|c| c.is_ascii_digit() || c == '.') {
                    i += 1;
                }
                if at(i) == Some('e') {
                    let sign = usize::from(matches!(at(i + 1), Some('+' | '-')));
                    if at(i + 1 + sign).is_some_and(|c| c.is_ascii_digit()) {
                        i += 1 + sign;
                        while at(i).is_some_and(|c| c.is_ascii_digit()) {
                            i += 1;
                        }
                    }
                }
                Token::Number(&text[offset(start)..offset(i)])
            }
            '(' => Token::Open,
            ')' => Token::Close,
            c if c.is_whitespace() => continue,
            c if super::is_operator(c) => Token::Operator(c),
            c => Token::Other(c),
        };
        tokens.push(token);
    }
    tokens
}

/// Rewrites a token stream into the syntax `fasteval` reads with
/// conventional precedence.
struct Rewriter<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    out: String,
}

impl<'a> Rewriter<'a> {
    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Everything up to an unmatched `)` or the end
    fn sequence(&mut self) {
        let mut after_operand = false;
        while let Some(token) = self.peek() {
            match token {
                Token::Close => return,
                Token::Operator('-' | '+') if !after_operand => {
                    self.signed_operand();
                    after_operand = true;
                }
                Token::Number(_) | Token::Open => {
                    if after_operand {
                        self.out.push('*');
                    }
                    self.power_chain();
                    after_operand = true;
                }
                Token::Operator(c) | Token::Other(c) => {
                    self.bump();
                    self.out.push(c);
                    after_operand = false;
                }
            }
        }
    }

    /// `-x^y` becomes `(0-x^y)`
    fn signed_operand(&mut self) {
        if let Some(Token::Operator(sign)) = self.peek() {
            self.bump();
            self.out.push_str("(0");
            self.out.push(sign);
            self.power_operand();
            self.out.push(')');
        }
    }

    fn power_operand(&mut self) {
        if matches!(self.peek(), Some(Token::Operator('-' | '+'))) {
            self.signed_operand();
        } else {
            self.power_chain();
        }
    }

    /// A primary followed by any number of right-associative `^` operands
    fn power_chain(&mut self) {
        self.primary();
        while self.peek() == Some(Token::Operator('^')) {
            self.bump();
            self.out.push('^');
            self.power_operand();
        }
    }

    fn primary(&mut self) {
        match self.peek() {
            Some(Token::Number(number)) => {
                self.bump();
                self.out.push_str(number);
            }
            Some(Token::Open) => {
                self.bump();
                self.out.push('(');
                self.sequence();
                if self.peek() == Some(Token::Close) {
                    self.bump();
                    self.out.push(')');
                }
            }
            // Left for the parser to reject
            _ => {}
        }
    }
}

/// Rewrites an editor buffer into the form the default evaluator parses.
///
/// - `*` is inserted where a number or `)` meets `(`, and where `)` meets a
///   number, so `2(3)` reads as `2*(3)`.
/// - A leading or post-operator sign wraps the power chain it applies to,
///   so `-3^2` reads as `(0-3^2)` and evaluates to `-9`.
///
/// Malformed input passes through for the parser to reject.
#[must_use]
pub fn prepare_expression(expression: &str) -> String {
    let mut rewriter = Rewriter {
        tokens: tokenize(expression),
        pos: 0,
        out: String::with_capacity(expression.len()),
    };
    loop {
        rewriter.sequence();
        if rewriter.peek() != Some(Token::Close) {
            break;
        }
        // Stray `)` at top level
        rewriter.bump();
        rewriter.out.push(')');
    }
    rewriter.out
}

/// Lower bound of the plain-decimal window
const PLAIN_MIN: f64 = 1e-6;
/// Upper bound (exclusive) of the plain-decimal window
const PLAIN_MAX: f64 = 1e21;

/// Canonical string form of a finite evaluation result.
///
/// Shortest round-trip decimal inside `[1e-6, 1e21)`, exponent notation
/// outside it, and `0` for negative zero.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== FastEvaluator tests =====

    #[test]
    fn test_basic_arithmetic() {
        let eval = FastEvaluator::new();
        assert_eq!(eval.evaluate("2+2"), Ok(4.0));
        assert_eq!(eval.evaluate("10-3"), Ok(7.0));
        assert_eq!(eval.evaluate("6*7"), Ok(42.0));
        assert_eq!(eval.evaluate("7/2"), Ok(3.5));
    }

    #[test]
    fn test_precedence_and_parens() {
        let eval = FastEvaluator::new();
        assert_eq!(eval.evaluate("2+3*4"), Ok(14.0));
        assert_eq!(eval.evaluate("(2+3)*4"), Ok(20.0));
        assert_eq!(eval.evaluate("2^10"), Ok(1024.0));
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        let eval = FastEvaluator::new();
        let value = eval.evaluate("1/0").unwrap();
        assert!(value.is_infinite());
    }

    #[test]
    fn test_syntax_error() {
        let eval = FastEvaluator::new();
        assert!(eval.evaluate("2+*2").is_err());
    }

    #[test]
    fn test_power_binds_tighter_than_sign() {
        let eval = FastEvaluator::new();
        assert_eq!(eval.evaluate("-3^2"), Ok(-9.0));
        assert_eq!(eval.evaluate("(-3^2)"), Ok(-9.0));
        assert_eq!(eval.evaluate("(-3)^2"), Ok(9.0));
        assert_eq!(eval.evaluate("2*-3^2"), Ok(-18.0));
        assert_eq!(eval.evaluate("2^-1"), Ok(0.5));
        assert_eq!(eval.evaluate("-2^3^2"), Ok(-512.0));
    }

    #[test]
    fn test_implicit_multiplication() {
        let eval = FastEvaluator::new();
        assert_eq!(eval.evaluate("2(3)"), Ok(6.0));
        assert_eq!(eval.evaluate("(1+2)(3)"), Ok(9.0));
        assert_eq!(eval.evaluate("(2)3"), Ok(6.0));
        assert_eq!(eval.evaluate("2(3)^2"), Ok(18.0));
        assert_eq!(eval.evaluate("1+2(3+4)"), Ok(15.0));
    }

    #[test]
    fn test_exponent_results_as_operands() {
        let eval = FastEvaluator::new();
        assert_eq!(eval.evaluate("1e21*2"), Ok(2e21));
        assert_eq!(eval.evaluate("1.5e-7+0"), Ok(1.5e-7));
    }

    #[test]
    fn test_deep_nesting() {
        let eval = FastEvaluator::new();
        let expression = format!("{}1{}", "(".repeat(35), ")".repeat(35));
        assert_eq!(eval.evaluate(&expression), Ok(1.0));

        let signed = format!("{}-1{}", "(".repeat(40), ")".repeat(40));
        assert_eq!(eval.evaluate(&signed), Ok(-1.0));
    }

    #[test]
    fn test_long_expression() {
        let eval = FastEvaluator::new();
        let expression = vec!["1"; 2101].join("+");
        assert_eq!(expression.len(), 4201);
        assert_eq!(eval.evaluate(&expression), Ok(2101.0));
    }

    #[test]
    fn test_malformed_still_rejected() {
        let eval = FastEvaluator::new();
        assert!(eval.evaluate("-").is_err());
        assert!(eval.evaluate("1)").is_err());
        assert!(eval.evaluate("(1").is_err());
        assert!(eval.evaluate("2*/3").is_err());
    }

    #[test]
    fn test_closure_evaluator() {
        let stub = |_: &str| -> Result<f64, String> { Ok(9.0) };
        assert_eq!(stub.evaluate("anything"), Ok(9.0));
    }

    // ===== prepare_expression tests =====

    #[test]
    fn test_prepare_plain_passthrough() {
        assert_eq!(prepare_expression("12+3*4"), "12+3*4");
        assert_eq!(prepare_expression("(1+2)/3"), "(1+2)/3");
        assert_eq!(prepare_expression(" 1 + 2 "), "1+2");
    }

    #[test]
    fn test_prepare_wraps_signed_power_chain() {
        assert_eq!(prepare_expression("-3^2"), "(0-3^2)");
        assert_eq!(prepare_expression("(-3^2)"), "((0-3^2))");
        assert_eq!(prepare_expression("-3*2"), "(0-3)*2");
        assert_eq!(prepare_expression("2^-1"), "2^(0-1)");
    }

    #[test]
    fn test_prepare_inserts_products() {
        assert_eq!(prepare_expression("2(3)"), "2*(3)");
        assert_eq!(prepare_expression("(1)(2)"), "(1)*(2)");
        assert_eq!(prepare_expression("(2)3"), "(2)*3");
        assert_eq!(prepare_expression(".5(2)"), ".5*(2)");
    }

    #[test]
    fn test_prepare_keeps_exponent_numbers() {
        assert_eq!(prepare_expression("1e21+1"), "1e21+1");
        assert_eq!(prepare_expression("1.5e-7*2"), "1.5e-7*2");
        assert_eq!(prepare_expression("-1e-7"), "(0-1e-7)");
    }

    // ===== format_number tests =====

    #[test]
    fn test_format_integer() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(1024.0), "1024");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.125), "0.125");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_large_and_small() {
        assert_eq!(format_number(1e21), "1e21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }
}
