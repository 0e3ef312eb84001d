/// The evaluator module executes parsed expressions.
///
/// The evaluator walks each expression, evaluates call arguments, dispatches
/// to the builtin table, and reports runtime errors with the line of the
/// failing call.
///
/// # Responsibilities
/// - Evaluates literals, negation, and builtin calls.
/// - Adapts the library helpers to script values.
/// - Wraps library errors with source locations.
pub mod evaluator;
/// The lexer module tokenizes scripts for further parsing.
///
/// The lexer reads the raw script text and produces a stream of tokens, each
/// tagged with its line: numbers, text literals, identifiers, punctuation and
/// newlines. Comments and whitespace are skipped.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] nodes, one per line.
/// - Validates the grammar, reporting errors with location info.
pub mod parser;
