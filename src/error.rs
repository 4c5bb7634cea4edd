//! Error types and utilities.

pub use failure::Error;
use failure::*;

/// Either `Ok(T)` or `Err(failure::Error)`.
pub type Result<T> = ::std::result::Result<T, failure::Error>;

/// A parser error.
///
/// Rule names are carried as plain strings because each grammar in this
/// crate generates its own `Rule` enum.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ParserError {
    /// Given invalid `Rule` variant to `from_rule`
    #[fail(display = "Expected a rule of type {} but given {} instead", _0, _1)]
    InvalidRule(String, String),
    /// A `wait` directive whose value is not a non-negative integer
    #[fail(display = "Invalid wait value: {}", _0)]
    InvalidWait(String),
}
