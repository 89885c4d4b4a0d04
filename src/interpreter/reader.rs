use crate::{
    ast::{Node, NodeKind},
    interpreter::value::core::Value,
};

/// Converts a parse tree node into an expression tree value.
///
/// The reader consumes the node, classifying it by its tag:
/// - number literals are parsed as signed 64-bit integers, with overflow or
///   malformed text surfacing as an `invalid number` error value;
/// - operator and identifier text becomes a [`Value::Symbol`] verbatim;
/// - the program root and every grouping become a [`Value::Sexpr`] built
///   from the remaining children in parse order, with purely syntactic
///   parenthesis leaves skipped.
///
/// A parenthesis leaf in expression position means the parser broke its
/// contract; the reader fails fast with a descriptive error value instead
/// of building a malformed tree.
///
/// # Parameters
/// - `node`: The parse tree node to convert; ownership is taken.
///
/// # Returns
/// The [`Value`] this node represents.
///
/// # Example
/// ```
/// use lisma::{
///     ast::{Node, NodeKind},
///     interpreter::reader::read_value,
/// };
///
/// let node = Node::leaf(NodeKind::Number, "42".to_string(), 1);
/// assert_eq!(read_value(node).to_string(), "42");
/// ```
pub fn read_value(node: Node) -> Value {
    match node.kind {
        NodeKind::Number => read_number(&node.contents),

        NodeKind::Symbol => Value::Symbol(node.contents),

        NodeKind::Root | NodeKind::Sexpr => {
            let children =
                node.children
                    .into_iter()
                    .filter(|child| {
                        child.kind != NodeKind::Paren
                        && child.contents != "("
                        && child.contents != ")"
                    })
                    .map(read_value)
                    .collect();

            Value::Sexpr(children)
        },

        NodeKind::Paren => {
            Value::error(format!("Malformed parse tree on line {}: stray '{}'.",
                                 node.line, node.contents))
        },
    }
}
/// Parses a numeric literal's raw text.
///
/// # Parameters
/// - `contents`: The literal text, e.g. `"-17"`.
///
/// # Returns
/// - `Value::Number` if the text fits a signed 64-bit integer.
/// - `Value::Error("invalid number")` on overflow or malformed text.
fn read_number(contents: &str) -> Value {
    contents.parse::<i64>()
            .map_or_else(|_| Value::error("invalid number"), Value::Number)
}
