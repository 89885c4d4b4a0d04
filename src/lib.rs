//! # lisma
//!
//! lisma is a minimal Lisp-style calculator language written in Rust.
//! It parses lines of text into symbolic expression trees and reduces them
//! to integer results, with errors propagated as ordinary values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::eval,
        lexer::{LexerExtras, Token},
        parser::core::parse_program,
        reader::read_value,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` type and its `NodeKind` tags, which
/// represent the concrete syntax of source code as a generic tree of tag,
/// literal text and ordered children. The tree is built by the parser and
/// consumed by the reader.
///
/// # Responsibilities
/// - Defines the generic parse tree node used between parser and reader.
/// - Preserves purely syntactic tokens (parentheses) as child nodes.
/// - Attaches source line numbers to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing and parsing.
///
/// This module defines all errors that can be raised before evaluation
/// begins. Evaluation failures are not Rust errors: they travel through the
/// expression tree as error values and are rendered by the caller.
///
/// # Responsibilities
/// - Defines the error enum for all lexer and parser failure modes.
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the parse-tree reader, the
/// value model and the evaluator to provide a complete runtime for
/// expression evaluation. It exposes the public API for interpreting user
/// input.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, reader and evaluator.
/// - Provides entry points for evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for integer arithmetic helpers.
///
/// This module provides reusable helpers used by the evaluator, such as
/// wrapping integer exponentiation with well-defined behavior for negative
/// exponents.
///
/// # Responsibilities
/// - Provide integer arithmetic helpers shared across evaluation.
pub mod util;

/// Evaluates a source string to a single terminal [`Value`].
///
/// This function lexes and parses the provided source, converts the
/// resulting parse tree into an expression tree and reduces it to one
/// value. Evaluation failures (division by zero, non-numeric operands and
/// so on) are returned as [`Value::Error`] values inside `Ok`; only lexer
/// and parser failures produce an `Err`.
///
/// # Errors
/// Returns a [`ParseError`] if the source cannot be tokenized or parsed.
///
/// # Examples
/// ```
/// use lisma::eval_source;
///
/// // A fully parenthesized expression reduces to a number.
/// let value = eval_source("(+ 1 (* 2 3))").unwrap();
/// assert_eq!(value.to_string(), "7");
///
/// // Runtime failures are values, not errors.
/// let value = eval_source("(/ 1 0)").unwrap();
/// assert_eq!(value.to_string(), "Error: Division By Zero.");
/// ```
pub fn eval_source(source: &str) -> Result<Value, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    let mut iter = tokens.iter().peekable();
    let tree = parse_program(&mut iter)?;

    Ok(eval(read_value(tree)))
}
