/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source code. Parse errors include unexpected tokens, missing closing
/// parentheses, and input that ends before an expression is complete.
pub mod parse_error;

pub use parse_error::ParseError;
