use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the script language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.0` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Real(f64),
    /// Unsigned integer literal tokens, such as `42`.
    ///
    /// The magnitude is kept as `u64` so that `-9223372036854775808` can be
    /// folded into `i64::MIN` by the parser.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(u64),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// Text literal tokens, such as `"0123456789ABCDEF"`. No escapes.
    #[regex(r#""[^"\n]*""#, parse_text, allow_greedy = true)]
    Text(String),
    /// Identifier tokens; function names such as `convert`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `-`
    #[token("-")]
    Minus,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,

    /// Line breaks separate statements.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn parse_integer(lex: &logos::Lexer<Token>) -> Option<u64> {
    lex.slice().parse().ok()
}

fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Strips the surrounding quotes from a text literal.
fn parse_text(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    slice.get(1..slice.len() - 1).map(str::to_string)
}

/// Splits `source` into tokens paired with their line numbers.
///
/// # Errors
/// Returns the offending slice and its line for the first character sequence
/// no token matches (including integer literals that overflow `u64`).
///
/// # Example
/// ```
/// use radixa::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("trunc(-3.7)").unwrap();
/// assert_eq!(tokens[0], (Token::Identifier("trunc".to_string()), 1));
/// assert_eq!(tokens[2], (Token::Minus, 1));
/// assert_eq!(tokens[3], (Token::Real(3.7), 1));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, (String, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => return Err((lexer.slice().to_string(), lexer.extras.line)),
        }
    }

    Ok(tokens)
}
