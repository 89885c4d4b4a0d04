use crate::interpreter::{evaluator::builtin, value::core::Value};

/// Evaluates a value to a terminal value.
///
/// This is the main entry point for evaluation. The function consumes its
/// input: numbers, symbols and errors are fixed points and are returned
/// unchanged, while symbolic expressions are reduced recursively. No state
/// persists across calls; each invocation is a pure, single-pass reduction
/// of one tree.
///
/// # Parameters
/// - `value`: The value to evaluate; ownership is taken.
///
/// # Returns
/// The reduced value: a number, an error, a surviving symbol, or an
/// expression that is already terminal (such as the empty expression).
///
/// # Example
/// ```
/// use lisma::interpreter::{evaluator::core::eval, value::core::Value};
///
/// // Terminal values evaluate to themselves.
/// assert_eq!(eval(Value::Number(5)), Value::Number(5));
///
/// // Expressions reduce recursively.
/// let expr = Value::Sexpr(vec![Value::Symbol("*".to_string()),
///                              Value::Number(6),
///                              Value::Number(7)]);
/// assert_eq!(eval(expr), Value::Number(42));
/// ```
#[must_use]
pub fn eval(value: Value) -> Value {
    match value {
        Value::Sexpr(children) => eval_sexpr(children),
        terminal => terminal,
    }
}
/// Reduces a symbolic expression's children to a single value.
///
/// The reduction proceeds in the following order:
/// 1. Every child is evaluated in place, left to right.
/// 2. The first error found by index is detached and returned; the rest of
///    the expression is dropped with it. First-error-wins is by scan
///    order, not by which child failed first internally.
/// 3. An empty expression is terminal and returned unchanged.
/// 4. A singleton expression yields its only child; the emptied parent is
///    discarded.
/// 5. Otherwise the first child must be a symbol naming a builtin
///    operator; the remaining children are dispatched to it as operands.
///
/// # Parameters
/// - `children`: The expression's children; ownership is taken.
///
/// # Returns
/// The reduced value.
fn eval_sexpr(children: Vec<Value>) -> Value {
    let mut children: Vec<Value> = children.into_iter().map(eval).collect();

    if let Some(index) = children.iter().position(Value::is_error) {
        return children.swap_remove(index);
    }

    if children.len() <= 1 {
        return match children.pop() {
            Some(only) => only,
            None => Value::Sexpr(children),
        };
    }

    match children.remove(0) {
        Value::Symbol(name) => builtin::apply(&name, children),
        _ => Value::error("S-expression does not start with symbol."),
    }
}
