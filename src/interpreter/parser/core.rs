use std::iter::Peekable;

use crate::{
    ast::{Node, NodeKind},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program into a root parse tree node.
///
/// This is the entry point for parsing. A program is a sequence of zero or
/// more expressions; all of them become children of a single
/// [`NodeKind::Root`] node, so a bare `+ 1 2` evaluates exactly like
/// `(+ 1 2)`.
///
/// Grammar: `program := expression*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The root node of the parse tree.
///
/// # Errors
/// Propagates any error from expression parsing, including a stray `)` at
/// the top level.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut children = Vec::new();

    while tokens.peek().is_some() {
        children.push(parse_expression(tokens)?);
    }

    Ok(Node::container(NodeKind::Root, children, 1))
}
/// Parses a single expression.
///
/// An expression is either a number literal, an operator symbol, or a
/// parenthesized symbolic expression.
///
/// Grammar: `expression := number | symbol | '(' expression* ')'`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the token stream is exhausted.
/// - `UnexpectedToken` if a `)` appears without a matching `(`.
/// - Propagates errors from nested expressions.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(text), line)) => {
            Ok(Node::leaf(NodeKind::Number, text.clone(), *line))
        },

        Some((Token::Symbol(text), line)) => {
            Ok(Node::leaf(NodeKind::Symbol, text.clone(), *line))
        },

        Some((Token::LParen, line)) => parse_sexpr(tokens, *line),

        Some((Token::RParen, line)) => {
            Err(ParseError::UnexpectedToken { token: ")".to_string(),
                                              line:  *line, })
        },

        Some((token, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                              line:  *line, })
        },

        None => Err(ParseError::UnexpectedEndOfInput { line: 1 }),
    }
}
/// Parses the body of a parenthesized expression.
///
/// The opening parenthesis has already been consumed; its line number is
/// passed in for error reporting. The produced [`NodeKind::Sexpr`] node
/// keeps both parentheses as [`NodeKind::Paren`] children, mirroring the
/// source faithfully; the reader skips them.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `(`.
/// - `line`: Line number of the opening parenthesis.
///
/// # Returns
/// A `Sexpr` node containing the paren leaves and the inner expressions.
///
/// # Errors
/// - `ExpectedClosingParen` if input ends before the matching `)`.
/// - Propagates errors from inner expressions.
fn parse_sexpr<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut children = vec![Node::leaf(NodeKind::Paren, "(".to_string(), line)];

    loop {
        match tokens.peek() {
            Some((Token::RParen, close_line)) => {
                children.push(Node::leaf(NodeKind::Paren, ")".to_string(), *close_line));
                tokens.next();
                break;
            },

            Some(_) => children.push(parse_expression(tokens)?),

            None => return Err(ParseError::ExpectedClosingParen { line }),
        }
    }

    Ok(Node::container(NodeKind::Sexpr, children, line))
}
