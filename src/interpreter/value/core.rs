use std::fmt::Write;

/// Represents a value in the interpreter.
///
/// This single recursive enum models both parsed syntax and intermediate or
/// final computed results. An expression owns its children exclusively
/// through the backing vector, so the value graph is always a tree: moves
/// are the only way a child changes owner, and dropping a value releases
/// every descendant exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A computed or literal 64-bit integer.
    Number(i64),
    /// A propagating failure, carrying a human-readable description.
    /// Produced by the evaluator (division by zero, non-numeric operands)
    /// or the reader (unparsable literals), and returned unchanged through
    /// every enclosing expression.
    Error(String),
    /// An unevaluated operator reference, such as `+` or `min`.
    Symbol(String),
    /// A symbolic expression owning an ordered sequence of children.
    /// Zero children is the empty expression; child order is significant.
    Sexpr(Vec<Value>),
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl Value {
    /// Creates an error value from any message.
    ///
    /// # Example
    /// ```
    /// use lisma::interpreter::value::core::Value;
    ///
    /// let err = Value::error("Division By Zero.");
    /// assert_eq!(err.to_string(), "Error: Division By Zero.");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Returns `true` if the value is [`Error`].
    ///
    /// [`Error`]: Value::Error
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Renders the value with a configurable bracket pair.
    ///
    /// Numbers render as decimal integers, errors as `Error: <message>`,
    /// symbols verbatim, and expressions as their children space-separated
    /// and enclosed in `open`/`close`, recursively. No trailing newline is
    /// appended.
    ///
    /// # Parameters
    /// - `open`: The opening bracket character.
    /// - `close`: The closing bracket character.
    ///
    /// # Returns
    /// The rendered text.
    ///
    /// # Example
    /// ```
    /// use lisma::interpreter::value::core::Value;
    ///
    /// let expr = Value::Sexpr(vec![Value::Symbol("+".to_string()),
    ///                              Value::Number(1),
    ///                              Value::Sexpr(vec![Value::Number(2)])]);
    ///
    /// assert_eq!(expr.render_with('(', ')'), "(+ 1 (2))");
    /// assert_eq!(expr.render_with('{', '}'), "{+ 1 {2}}");
    /// ```
    #[must_use]
    pub fn render_with(&self, open: char, close: char) -> String {
        let mut out = String::new();
        self.render_into(&mut out, open, close);
        out
    }

    /// Appends the rendering of `self` to `out`.
    fn render_into(&self, out: &mut String, open: char, close: char) {
        match self {
            Self::Number(n) => {
                let _ = write!(out, "{n}");
            },
            Self::Error(message) => {
                let _ = write!(out, "Error: {message}");
            },
            Self::Symbol(name) => out.push_str(name),
            Self::Sexpr(children) => {
                out.push(open);

                for (index, child) in children.iter().enumerate() {
                    if index > 0 {
                        out.push(' ');
                    }

                    child.render_into(out, open, close);
                }

                out.push(close);
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_with('(', ')'))
    }
}
