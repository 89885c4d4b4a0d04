/// Integer arithmetic helpers.
///
/// This module provides the wrapping integer exponentiation used by the
/// `^` operator, with well-defined truncating behavior for negative
/// exponents.
pub mod num;
