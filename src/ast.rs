use crate::value::Value;

/// An abstract syntax tree (AST) node representing an expression in a script.
///
/// Scripts are flat: every line is one expression, built from literals,
/// negation, and calls to builtin functions whose arguments are themselves
/// expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (integer, real, boolean or text).
    Literal {
        /// The constant value.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// Arithmetic negation, `-expr`.
    Negate {
        /// The negated operand.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A call to a builtin function, such as `convert(255, 16, "0123456789ABCDEF")`.
    Call {
        /// Name of the function.
        name: String,
        /// Argument expressions, in order.
        args: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Returns the source line the expression starts on.
    ///
    /// # Example
    /// ```
    /// use radixa::ast::Expr;
    ///
    /// let expr = Expr::Literal { value: 10.into(),
    ///                            line:  4, };
    /// assert_eq!(expr.line(), 4);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Literal { line, .. } | Self::Negate { line, .. } | Self::Call { line, .. } => {
                *line
            },
        }
    }
}
