//! A small scripting front end over the host surface
//!
//! ```text
//! let x = u64("ff", 16)
//! x.iaddn(1).ishln(4)
//! x.toString(16)          // "1000"
//! ```
//!
//! Method calls use host names and go through [`crate::host::call`]. Calling
//! a mutator on a binding updates the binding.

mod ast;
mod error;
mod parser;
mod session;
mod token;

pub use ast::{Expr, Span, Stmt};
pub use error::{ScriptError, report_error};
pub use parser::{parse, tokenize};
pub use session::Session;
pub use token::Token;

/// Deepest expression nesting the parser accepts, counting both call
/// arguments and method chain links
pub const MAX_NESTING: usize = 256;

const STACK_RED_ZONE: usize = 128 * 1024;
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;
