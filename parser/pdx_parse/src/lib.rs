//! Recursive-descent parsers for the pdx-script dialects.
//!
//! The crate exposes two façades:
//!
//! - [`Parser`]: the script language, with `simple_parse`,
//!   `event_parse`, `decision_parse` and `lua_defines_parse` entry
//!   points over one loaded buffer;
//! - [`CsvParser`]: the delimiter-separated values format.
//!
//! Both load from buffers, strings or files, auto-detect the source
//! encoding, accumulate diagnostics instead of unwinding, and keep
//! producing (partial) results past recoverable errors. Byte positions
//! in every diagnostic and node location refer to the original bytes on
//! disk, not the transcoded text.

mod chars;
mod cursor;
mod error;
mod grammar;
mod parser;
mod recovery;

pub use grammar::{parse_csv_text, CsvOptions, ScriptOptions};
pub use parser::{CsvParser, FilePosition, Parser};

// Downstream consumers walk trees and read diagnostics through these.
pub use pdx_diagnostic::{Diagnostic, DiagnosticEngine, DiagnosticRenderer, ErrorKind, Severity};
pub use pdx_ir::{Ast, LineObject, Node, NodeId, NodeKind, NodeLocation, Symbol};
pub use pdx_source::Encoding;
