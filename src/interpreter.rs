/// The evaluator module reduces expression trees to terminal values.
///
/// The evaluator walks a [`value::core::Value`] tree bottom-up, applies the
/// builtin operators and produces a single number or error. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates expression trees, performing all supported operations.
/// - Short-circuits on the first error found among evaluated children.
/// - Reports runtime failures such as division by zero as error values.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, operator symbols and parentheses. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Handles numeric literals, operator symbols and comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the concrete syntax tree from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs a generic parse tree that represents the syntactic structure
/// of the input, parentheses included. The reader later converts this tree
/// into evaluable values.
///
/// # Responsibilities
/// - Converts tokens into structured parse tree nodes.
/// - Validates correct grammar, reporting errors with location info.
/// - Preserves syntactic tokens so the tree mirrors the source faithfully.
pub mod parser;
/// The reader module converts parse trees into expression trees.
///
/// The reader consumes the generic parse tree node by node, classifying
/// each by its tag: numeric literals become numbers, operator text becomes
/// symbols, and groupings become nested symbolic expressions. Purely
/// syntactic tokens are skipped.
///
/// # Responsibilities
/// - Parses numeric literal text, surfacing overflow as an error value.
/// - Builds nested expressions from grouping nodes in parse order.
/// - Fails fast on parse tree shapes that violate the parser contract.
pub mod reader;
/// The value module defines the runtime data type for evaluation.
///
/// This module declares the single recursive [`value::core::Value`] type
/// used for both parsed syntax and computed results, together with its
/// rendering logic.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Implements rendering with a configurable bracket pair.
/// - Provides the predicates the evaluator's scans rely on.
pub mod value;
