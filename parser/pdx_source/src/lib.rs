//! Source input model for the pdx-script toolkit.
//!
//! Standalone by design: this crate knows about bytes, encodings,
//! detection and transcoding, and nothing about grammars or diagnostics.
//! The parser layer consumes [`SourceFile`]s and turns
//! [`convert::ConvertIssue`]s into proper diagnostics.
//!
//! Pipeline: raw bytes → (optional) detection → transcoding to UTF-8
//! with a byte position map → parsing. Diagnostic positions always refer
//! to the original bytes.

mod buffer;
pub mod convert;
pub mod detect;
mod encoding;
mod position_map;

pub use buffer::{SourceBuffer, SourceFile};
pub use convert::{ConvertIssue, ConvertIssueKind, Transcoded};
pub use detect::Detection;
pub use encoding::Encoding;
pub use position_map::PositionMap;
