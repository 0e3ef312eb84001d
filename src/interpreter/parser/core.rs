use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::utils::{expect_token, parse_comma_separated},
    },
    util::num::signed_from_magnitude,
    value::Value,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one statement: a single expression terminated by a newline or the
/// end of input.
///
/// Grammar: `statement := expression (NEWLINE | EOF)`
///
/// # Errors
/// - `UnexpectedTrailingTokens` if anything but a newline follows the
///   expression.
/// - Propagates any errors from expression parsing.
///
/// # Example
/// ```
/// use radixa::{
///     ast::Expr,
///     interpreter::{lexer::tokenize, parser::core::parse_statement},
/// };
///
/// let tokens = tokenize("round(2.5)").unwrap();
/// let expr = parse_statement(&mut tokens.iter().peekable()).unwrap();
/// assert!(matches!(expr, Expr::Call { ref name, .. } if name == "round"));
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = tokens.peek().map_or(0, |(_, line)| *line);
    let expr = parse_expression(tokens, line)?;

    match tokens.next() {
        None | Some((Token::NewLine, _)) => Ok(expr),
        Some((tok, line)) => Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                        line:  *line, }),
    }
}

/// Parses a full expression.
///
/// `line` is the line of the preceding token and is only used to report an
/// unexpected end of input.
///
/// Grammar:
/// ```text
///     expression := "-" expression
///                 | INTEGER | REAL | BOOL | TEXT
///                 | IDENTIFIER "(" (expression ("," expression)*)? ")"
///                 | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` if the stream ends where an expression should
///   start.
/// - `UnexpectedToken` for a token that cannot start an expression, or an
///   identifier not followed by an argument list.
/// - `ExpectedClosingParen` for an unterminated parenthesis.
/// - `IntegerOutOfRange` for an integer literal outside the `i64` range. A
///   minus sign directly in front of a literal belongs to the literal, so
///   `-9223372036854775808` is accepted.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line });
    };
    let line = *line;

    match token {
        Token::Minus => {
            if let Some((Token::Integer(magnitude), _)) =
                tokens.next_if(|(next, _)| matches!(next, Token::Integer(_)))
            {
                return signed_from_magnitude(*magnitude, true).map(|n| literal(n, line))
                                                               .ok_or_else(|| out_of_range(format!("-{magnitude}"), line));
            }

            Ok(Expr::Negate { expr: Box::new(parse_expression(tokens, line)?),
                              line })
        },
        Token::Integer(magnitude) => {
            signed_from_magnitude(*magnitude, false).map(|n| literal(n, line))
                                                    .ok_or_else(|| out_of_range(magnitude.to_string(), line))
        },
        Token::Real(r) => Ok(literal(*r, line)),
        Token::Bool(b) => Ok(literal(*b, line)),
        Token::Text(s) => Ok(literal(s.as_str(), line)),
        Token::LParen => {
            let inner = parse_expression(tokens, line)?;
            expect_token(tokens, &Token::RParen, line)?;
            Ok(inner)
        },
        Token::Identifier(name) => {
            match tokens.next() {
                Some((Token::LParen, _)) => {},
                _ => {
                    return Err(ParseError::UnexpectedToken {
                        token: format!("Expected '(' after '{name}'"),
                        line,
                    });
                },
            }

            let args = parse_comma_separated(tokens,
                                             |tokens| parse_expression(tokens, line),
                                             &Token::RParen,
                                             line)?;

            Ok(Expr::Call { name: name.clone(),
                            args,
                            line })
        },
        Token::NewLine => Err(ParseError::UnexpectedEndOfInput { line }),
        other => Err(ParseError::UnexpectedToken { token: format!("{other:?}"),
                                                   line }),
    }
}

fn out_of_range(literal: String, line: usize) -> ParseError {
    ParseError::IntegerOutOfRange { literal, line }
}

fn literal(value: impl Into<Value>, line: usize) -> Expr {
    Expr::Literal { value: value.into(),
                    line }
}
