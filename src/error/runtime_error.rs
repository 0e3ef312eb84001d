use crate::error::NumericError;

#[derive(Debug)]
/// Represents all errors that can occur while evaluating a script.
pub enum RuntimeError {
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:  String,
        /// The number of arguments supplied.
        found: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer value was expected, but not found.
    ExpectedInteger {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A text value was expected, but not found.
    ExpectedText {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An assertion failed during execution.
    AssertionFailed {
        /// Rendering of the values involved, if any.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A library helper rejected its input.
    Numeric {
        /// The underlying error.
        source: NumericError,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl RuntimeError {
    /// Wraps a [`NumericError`] with the line it was raised on.
    ///
    /// # Example
    /// ```
    /// use radixa::error::{NumericError, RuntimeError};
    ///
    /// let err = RuntimeError::numeric(3)(NumericError::EmptyNumeral);
    /// assert!(matches!(err, RuntimeError::Numeric { line: 3, .. }));
    /// ```
    pub fn numeric(line: usize) -> impl Fn(NumericError) -> Self {
        move |source| Self::Numeric { source, line }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name, found, line } => write!(f,
                                                                        "Error on line {line}: Argument count mismatch. '{name}' does not take {found} argument(s)."),
            Self::ExpectedNumber { line } => write!(f, "Error on line {line}: Expected number."),
            Self::ExpectedInteger { line } => {
                write!(f, "Error on line {line}: Expected integer.")
            },
            Self::ExpectedText { line } => write!(f, "Error on line {line}: Expected text."),
            Self::ExpectedBoolean { line } => {
                write!(f, "Error on line {line}: Expected boolean.")
            },
            Self::AssertionFailed { details, line } => {
                if details.is_empty() {
                    write!(f, "Error on line {line}: Assertion failed.")
                } else {
                    write!(f, "Error on line {line}: Assertion failed: {details}.")
                }
            },
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::Numeric { source, line } => write!(f, "Error on line {line}: {source}"),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Numeric { source, .. } => Some(source),
            _ => None,
        }
    }
}
