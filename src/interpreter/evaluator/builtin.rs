use crate::{interpreter::value::core::Value, util::num::wrapping_pow_i64};

/// The closed set of builtin operators.
///
/// Operator symbols are resolved to this enum exactly once per
/// application, so dispatch inside the reduction loop is an exhaustive
/// match rather than repeated string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinOp {
    /// `+`
    Add,
    /// `-` (binary subtraction, or unary negation with a single operand)
    Sub,
    /// `*`
    Mul,
    /// `/` (truncating integer division)
    Div,
    /// `^` (integer exponentiation)
    Pow,
    /// `min`
    Min,
    /// `max`
    Max,
}

impl BuiltinOp {
    /// Resolves an operator symbol's text to a builtin operator.
    ///
    /// # Parameters
    /// - `name`: The symbol text, e.g. `"+"` or `"min"`.
    ///
    /// # Returns
    /// - `Some(BuiltinOp)` for a recognized operator.
    /// - `None` for any other symbol.
    ///
    /// # Example
    /// ```
    /// use lisma::interpreter::evaluator::builtin::BuiltinOp;
    ///
    /// assert_eq!(BuiltinOp::resolve("*"), Some(BuiltinOp::Mul));
    /// assert_eq!(BuiltinOp::resolve("foo"), None);
    /// ```
    #[must_use]
    pub fn resolve(name: &str) -> Option<Self> {
        match name {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Pow),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            _ => None,
        }
    }

    /// Combines the accumulator with the next operand.
    ///
    /// Each step consumes the current accumulator and produces a new one.
    /// Addition, subtraction and multiplication wrap on overflow;
    /// division truncates toward zero and wraps on `i64::MIN / -1`.
    ///
    /// # Parameters
    /// - `x`: The current accumulator.
    /// - `y`: The next operand.
    ///
    /// # Returns
    /// - `Ok(i64)`: The new accumulator.
    /// - `Err(Value)`: An error value that ends the reduction, such as
    ///   division by zero.
    fn step(self, x: i64, y: i64) -> Result<i64, Value> {
        match self {
            Self::Add => Ok(x.wrapping_add(y)),
            Self::Sub => Ok(x.wrapping_sub(y)),
            Self::Mul => Ok(x.wrapping_mul(y)),
            Self::Div => {
                if y == 0 {
                    Err(Value::error("Division By Zero."))
                } else {
                    Ok(x.wrapping_div(y))
                }
            },
            Self::Pow => wrapping_pow_i64(x, y).ok_or_else(|| Value::error("Division By Zero.")),
            Self::Min => Ok(x.min(y)),
            Self::Max => Ok(x.max(y)),
        }
    }
}

/// Applies a builtin operator to a list of operands.
///
/// Every operand must already be a number; the first non-number makes the
/// whole application fail. The operator symbol is resolved once, then the
/// operands are folded left to right, the first operand seeding the
/// accumulator. A lone operand under `-` is negated instead of folded.
///
/// When a step fails, the error value replaces the accumulator and the
/// remaining operands are dropped with the operand list.
///
/// # Parameters
/// - `name`: The operator symbol's text.
/// - `operands`: The evaluated operands; ownership is taken.
///
/// # Returns
/// The resulting number, or an error value describing the failure.
///
/// # Example
/// ```
/// use lisma::interpreter::{evaluator::builtin::apply, value::core::Value};
///
/// let operands = vec![Value::Number(10), Value::Number(2), Value::Number(3)];
/// assert_eq!(apply("-", operands), Value::Number(5));
///
/// let operands = vec![Value::Number(1), Value::Symbol("foo".to_string())];
/// assert_eq!(apply("+", operands),
///            Value::error("Cannot operate on non-number!"));
/// ```
#[must_use]
pub fn apply(name: &str, operands: Vec<Value>) -> Value {
    let mut numbers = Vec::with_capacity(operands.len());

    for operand in operands {
        match operand {
            Value::Number(n) => numbers.push(n),
            _ => return Value::error("Cannot operate on non-number!"),
        }
    }

    let Some(op) = BuiltinOp::resolve(name) else {
        return Value::error("Invalid Operator!");
    };

    let mut rest = numbers.into_iter();
    let Some(first) = rest.next() else {
        // The evaluator returns singleton expressions before dispatching,
        // so an operator always has at least one operand here.
        return Value::Sexpr(Vec::new());
    };

    if op == BuiltinOp::Sub && rest.as_slice().is_empty() {
        return Value::Number(first.wrapping_neg());
    }

    let mut acc = first;

    for operand in rest {
        acc = match op.step(acc, operand) {
            Ok(next) => next,
            Err(error) => return error,
        };
    }

    Value::Number(acc)
}
