/// A dynamically typed argument.
///
/// The rounding helpers accept any `Value` and reject the non-numeric
/// variants with a type error; the script evaluator passes `Value`s between
/// builtins and adds line aware accessors in
/// `interpreter::evaluator::utils`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A piece of text, such as a numeral or a digit map.
    Text(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl Value {
    /// Returns a short human readable name for the variant.
    ///
    /// # Example
    /// ```
    /// use radixa::value::Value;
    ///
    /// assert_eq!(Value::from(1.5).type_name(), "real");
    /// assert_eq!(Value::from("FF").type_name(), "text");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Real(_) => "real",
            Self::Integer(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Text(_) => "text",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
