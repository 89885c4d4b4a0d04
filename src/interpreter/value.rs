/// Core value representation.
///
/// Defines the recursive `Value` enum that models both parsed syntax and
/// computed results, together with its constructors, predicates and
/// rendering.
pub mod core;
