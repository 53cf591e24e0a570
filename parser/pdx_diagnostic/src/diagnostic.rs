//! The diagnostic tree.
//!
//! Diagnostics form a flat tree: a root holding [`Diagnostic`] nodes in
//! insertion order, each node holding its [`Annotation`]s in insertion
//! order. Messages are interned [`Symbol`]s owned by the engine, so the
//! tree itself stays small and copy-free.

use std::fmt;

use pdx_ir::{NodeLocation, Symbol};
use smallvec::SmallVec;
use thiserror::Error;

/// Severity prefix a diagnostic renders under.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Debug,
    Fixit,
    Help,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Fixit => "fix-it",
            Severity::Help => "help",
        };
        f.write_str(name)
    }
}

/// I/O-level failure while loading a buffer. Always fatal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum BufferErrorKind {
    #[error("os error")]
    OsError,
    #[error("file not found")]
    FileNotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("buffer is null")]
    BufferIsNull,
}

impl BufferErrorKind {
    /// Classify an I/O error into a buffer error code.
    pub fn from_io(error: &std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => BufferErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => BufferErrorKind::PermissionDenied,
            _ => BufferErrorKind::OsError,
        }
    }
}

/// Discriminant of a diagnostic node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// Load failure; carries no source range.
    Buffer(BufferErrorKind),

    // Parse errors. Each carries the production it arose under.
    ExpectedLiteral,
    ExpectedKeyword,
    ExpectedCharClass,
    GenericParseError,

    // Semantic commentary; never fatal.
    SemanticError,
    SemanticWarning,
    SemanticInfo,
    SemanticDebug,
    SemanticFixit,
    SemanticHelp,
}

impl ErrorKind {
    pub const fn is_parse_error(self) -> bool {
        matches!(
            self,
            ErrorKind::ExpectedLiteral
                | ErrorKind::ExpectedKeyword
                | ErrorKind::ExpectedCharClass
                | ErrorKind::GenericParseError
        )
    }

    pub const fn is_semantic(self) -> bool {
        matches!(
            self,
            ErrorKind::SemanticError
                | ErrorKind::SemanticWarning
                | ErrorKind::SemanticInfo
                | ErrorKind::SemanticDebug
                | ErrorKind::SemanticFixit
                | ErrorKind::SemanticHelp
        )
    }

    pub const fn severity(self) -> Severity {
        match self {
            ErrorKind::Buffer(_)
            | ErrorKind::ExpectedLiteral
            | ErrorKind::ExpectedKeyword
            | ErrorKind::ExpectedCharClass
            | ErrorKind::GenericParseError
            | ErrorKind::SemanticError => Severity::Error,
            ErrorKind::SemanticWarning => Severity::Warning,
            ErrorKind::SemanticInfo => Severity::Info,
            ErrorKind::SemanticDebug => Severity::Debug,
            ErrorKind::SemanticFixit => Severity::Fixit,
            ErrorKind::SemanticHelp => Severity::Help,
        }
    }

    /// Short kind name used in parse-error messages.
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::Buffer(_) => "buffer error",
            ErrorKind::ExpectedLiteral => "expected literal",
            ErrorKind::ExpectedKeyword => "expected keyword",
            ErrorKind::ExpectedCharClass => "expected char class",
            ErrorKind::GenericParseError => "generic",
            ErrorKind::SemanticError => "semantic error",
            ErrorKind::SemanticWarning => "semantic warning",
            ErrorKind::SemanticInfo => "semantic info",
            ErrorKind::SemanticDebug => "semantic debug",
            ErrorKind::SemanticFixit => "semantic fix-it",
            ErrorKind::SemanticHelp => "semantic help",
        }
    }
}

/// Marks an annotation as the main range or supporting context.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AnnotationKind {
    Primary,
    Secondary,
}

/// One labelled source range under a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub message: Symbol,
    pub location: NodeLocation,
}

impl Annotation {
    pub fn primary(location: NodeLocation, message: Symbol) -> Self {
        Annotation {
            kind: AnnotationKind::Primary,
            message,
            location,
        }
    }

    pub fn secondary(location: NodeLocation, message: Symbol) -> Self {
        Annotation {
            kind: AnnotationKind::Secondary,
            message,
            location,
        }
    }

    pub const fn is_primary(&self) -> bool {
        matches!(self.kind, AnnotationKind::Primary)
    }
}

/// One diagnostic node: a kind, an interned message, the production it
/// arose under (parse errors only), and its annotations in insertion
/// order.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub message: Symbol,
    /// Production name for parse errors; `Symbol::INVALID` otherwise.
    pub production: Symbol,
    pub annotations: SmallVec<[Annotation; 2]>,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, message: Symbol) -> Self {
        Diagnostic {
            kind,
            message,
            production: Symbol::INVALID,
            annotations: SmallVec::new(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Location of the first primary annotation, if any.
    pub fn primary_location(&self) -> Option<NodeLocation> {
        self.annotations
            .iter()
            .find(|a| a.is_primary())
            .map(|a| a.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_mapping() {
        assert_eq!(ErrorKind::ExpectedLiteral.severity(), Severity::Error);
        assert_eq!(
            ErrorKind::Buffer(BufferErrorKind::FileNotFound).severity(),
            Severity::Error
        );
        assert_eq!(ErrorKind::SemanticWarning.severity(), Severity::Warning);
        assert_eq!(ErrorKind::SemanticHelp.severity(), Severity::Help);
    }

    #[test]
    fn kind_classification() {
        assert!(ErrorKind::ExpectedKeyword.is_parse_error());
        assert!(!ErrorKind::ExpectedKeyword.is_semantic());
        assert!(ErrorKind::SemanticInfo.is_semantic());
        assert!(!ErrorKind::Buffer(BufferErrorKind::OsError).is_parse_error());
    }

    #[test]
    fn buffer_kind_from_io() {
        use std::io::{Error, ErrorKind as IoKind};
        assert_eq!(
            BufferErrorKind::from_io(&Error::from(IoKind::NotFound)),
            BufferErrorKind::FileNotFound
        );
        assert_eq!(
            BufferErrorKind::from_io(&Error::from(IoKind::PermissionDenied)),
            BufferErrorKind::PermissionDenied
        );
        assert_eq!(
            BufferErrorKind::from_io(&Error::from(IoKind::TimedOut)),
            BufferErrorKind::OsError
        );
    }

    #[test]
    fn annotations_keep_order() {
        let mut diag = Diagnostic::new(ErrorKind::SemanticError, Symbol::INVALID);
        diag.annotations
            .push(Annotation::secondary(NodeLocation::new(0, 2), Symbol::INVALID));
        diag.annotations
            .push(Annotation::primary(NodeLocation::new(4, 6), Symbol::INVALID));
        assert!(!diag.annotations[0].is_primary());
        assert!(diag.annotations[1].is_primary());
        assert_eq!(diag.primary_location(), Some(NodeLocation::new(4, 6)));
    }
}
