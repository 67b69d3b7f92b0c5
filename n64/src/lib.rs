//! n64: a 64-bit integer value type
//!
//! Signed and unsigned 64-bit arithmetic with wrapping semantics, in-place
//! `i`-prefixed operations, exact conversion to doubles inside the 53-bit
//! safe range and string encoding in bases 2, 8, 10 and 16.
//!
//! The [`host`] module exposes the same operations to loosely typed callers,
//! and [`script`] and [`repl`] build a small calculator language on top.

pub mod config;
pub mod error;
pub mod host;
pub mod mode;
pub mod repl;
pub mod script;
pub mod value;

pub use error::{Error, ErrorKind, Result, StringFault};
pub use mode::{Dynamic, Mode, Signed, Signedness, Unsigned};
pub use value::{I64, Int64, MAX_SAFE_INTEGER, N64, RADIXES, U64};
