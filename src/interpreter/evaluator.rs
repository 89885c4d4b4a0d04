/// Builtin operator resolution and reduction.
///
/// Resolves operator symbols to a closed set of builtin operations and
/// folds operand lists left-to-right, surfacing failures as error values.
pub mod builtin;

/// Core evaluation logic.
///
/// Contains the recursive reduction of expression trees to terminal
/// values, including error short-circuiting and the empty and singleton
/// expression rules.
pub mod core;
