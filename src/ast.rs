/// Classifies a parse tree node.
///
/// Every node produced by the parser carries exactly one of these tags.
/// The reader dispatches on the tag to decide how a node contributes to the
/// expression tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The root of a parsed program; holds zero or more expressions.
    Root,
    /// An integer literal leaf; the literal text is kept verbatim.
    Number,
    /// An operator or identifier leaf, such as `+` or `min`.
    Symbol,
    /// A parenthesized symbolic expression; holds its parens as children.
    Sexpr,
    /// A purely syntactic `(` or `)` leaf inside an [`NodeKind::Sexpr`].
    Paren,
}

/// A node of the concrete syntax tree.
///
/// The parser produces a generic tree in which every node exposes a tag, the
/// raw literal text (for leaves) and an ordered sequence of children. The
/// tree intentionally keeps syntactic tokens such as parentheses; skipping
/// them is the reader's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The tag classifying this node.
    pub kind:     NodeKind,
    /// Raw literal text for leaf nodes, empty for containers.
    pub contents: String,
    /// Ordered child nodes; empty for leaves.
    pub children: Vec<Node>,
    /// The source line this node started on.
    pub line:     usize,
}

impl Node {
    /// Creates a leaf node with no children.
    #[must_use]
    pub fn leaf(kind: NodeKind, contents: String, line: usize) -> Self {
        Self { kind,
               contents,
               children: Vec::new(),
               line }
    }

    /// Creates a container node holding the given children.
    #[must_use]
    pub fn container(kind: NodeKind, children: Vec<Self>, line: usize) -> Self {
        Self { kind,
               contents: String::new(),
               children,
               line }
    }
}
