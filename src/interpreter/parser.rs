/// Core parsing logic for programs and expressions.
///
/// Contains the recursive descent routines that turn the token stream into
/// the generic parse tree consumed by the reader.
pub mod core;
