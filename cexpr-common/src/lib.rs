//! cexpr - Common Types and Utilities
//! 
//! This crate contains the source-location, diagnostic and symbol-table
//! types shared by the lexer, the expression parser and the driver.

pub mod error;
pub mod types;
pub mod source_loc;

pub use error::{CompilerError, Diagnostic, ErrorReporter, Severity};
pub use types::*;
pub use source_loc::{SourceLocation, SourceSpan};
