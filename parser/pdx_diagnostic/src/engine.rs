//! Diagnostic accumulation.
//!
//! The engine owns the diagnostic tree, the interner its messages live
//! in, and the two cumulative flags callers poll (`errored`, `warned`).
//! New diagnostics go through [`DiagnosticBuilder`], a by-value builder
//! that owns the partially built node until `finish()` moves it into the
//! tree; dropping a builder without finishing discards the node.

use pdx_ir::{NodeLocation, Symbol, SymbolInterner};

use crate::{Annotation, BufferErrorKind, Diagnostic, ErrorKind, Severity};

/// Accumulates diagnostics for one parse.
#[derive(Default)]
pub struct DiagnosticEngine {
    symbols: SymbolInterner,
    diagnostics: Vec<Diagnostic>,
    errored: bool,
    warned: bool,
}

impl DiagnosticEngine {
    pub fn new() -> Self {
        DiagnosticEngine::default()
    }

    /// Intern a message in the engine's own interner.
    pub fn intern(&mut self, message: &str) -> Symbol {
        self.symbols.intern(message)
    }

    /// Resolve an interned message.
    pub fn message(&self, symbol: Symbol) -> &str {
        self.symbols.view(symbol)
    }

    pub fn symbols(&self) -> &SymbolInterner {
        &self.symbols
    }

    /// Start building a diagnostic of `kind` with a formatted message.
    pub fn build(&mut self, kind: ErrorKind, message: &str) -> DiagnosticBuilder<'_> {
        let message = self.intern(message);
        DiagnosticBuilder {
            diagnostic: Diagnostic::new(kind, message),
            engine: self,
        }
    }

    /// Record a load failure. Buffer errors are fatal and carry no range.
    pub fn buffer_error(&mut self, kind: BufferErrorKind, detail: &str) {
        let message = if detail.is_empty() {
            kind.to_string()
        } else {
            format!("{kind}: {detail}")
        };
        self.build(ErrorKind::Buffer(kind), &message).finish();
    }

    pub fn semantic_error(&mut self, message: &str) -> DiagnosticBuilder<'_> {
        self.build(ErrorKind::SemanticError, message)
    }

    pub fn warning(&mut self, message: &str) -> DiagnosticBuilder<'_> {
        self.build(ErrorKind::SemanticWarning, message)
    }

    pub fn info(&mut self, message: &str) -> DiagnosticBuilder<'_> {
        self.build(ErrorKind::SemanticInfo, message)
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Error => self.errored = true,
            Severity::Warning => self.warned = true,
            _ => {}
        }
        self.diagnostics.push(diagnostic);
    }

    /// All diagnostics in insertion order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errored(&self) -> bool {
        self.errored
    }

    pub fn warned(&self) -> bool {
        self.warned
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
            .count()
    }

    /// Whether any recorded diagnostic is a fatal buffer error.
    pub fn has_buffer_error(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.kind, ErrorKind::Buffer(_)))
    }
}

impl std::fmt::Debug for DiagnosticEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticEngine")
            .field("diagnostics", &self.diagnostics.len())
            .field("errored", &self.errored)
            .field("warned", &self.warned)
            .finish()
    }
}

/// By-value builder for one diagnostic.
#[must_use = "call finish() to record the diagnostic"]
pub struct DiagnosticBuilder<'e> {
    engine: &'e mut DiagnosticEngine,
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder<'_> {
    /// Attach the production name a parse error arose under. Any `<...>`
    /// suffix from generic debug names is stripped.
    pub fn production(mut self, name: &str) -> Self {
        let trimmed = name.split('<').next().unwrap_or(name).trim();
        self.diagnostic.production = self.engine.intern(trimmed);
        self
    }

    /// Add a primary annotation at `location`.
    pub fn primary(mut self, location: NodeLocation, message: &str) -> Self {
        let message = self.engine.intern(message);
        self.diagnostic
            .annotations
            .push(Annotation::primary(location, message));
        self
    }

    /// Add a secondary annotation at `location`.
    pub fn secondary(mut self, location: NodeLocation, message: &str) -> Self {
        let message = self.engine.intern(message);
        self.diagnostic
            .annotations
            .push(Annotation::secondary(location, message));
        self
    }

    /// Move the diagnostic into the engine.
    pub fn finish(self) {
        self.engine.push(self.diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_records_in_order() {
        let mut engine = DiagnosticEngine::new();
        engine.semantic_error("first").finish();
        engine.warning("second").finish();

        let diags = engine.diagnostics();
        assert_eq!(diags.len(), 2);
        assert_eq!(engine.message(diags[0].message), "first");
        assert_eq!(engine.message(diags[1].message), "second");
        assert!(engine.errored());
        assert!(engine.warned());
    }

    #[test]
    fn flags_track_severity() {
        let mut engine = DiagnosticEngine::new();
        assert!(!engine.errored());
        engine.info("just info").finish();
        assert!(!engine.errored());
        assert!(!engine.warned());
        engine.warning("careful").finish();
        assert!(engine.warned());
        assert!(!engine.errored());
        engine.semantic_error("broken").finish();
        assert!(engine.errored());
    }

    #[test]
    fn annotations_through_builder() {
        let mut engine = DiagnosticEngine::new();
        engine
            .build(ErrorKind::ExpectedLiteral, "expected `}`")
            .production("StatementListBlock")
            .primary(NodeLocation::new(10, 11), "here")
            .secondary(NodeLocation::new(0, 1), "block opened here")
            .finish();

        let diag = &engine.diagnostics()[0];
        assert_eq!(diag.annotations.len(), 2);
        assert!(diag.annotations[0].is_primary());
        assert!(!diag.annotations[1].is_primary());
        assert_eq!(engine.message(diag.production), "StatementListBlock");
    }

    #[test]
    fn production_strips_generic_suffix() {
        let mut engine = DiagnosticEngine::new();
        engine
            .build(ErrorKind::GenericParseError, "oops")
            .production("StatementListBlock<NoStringEscape>")
            .finish();
        let diag = &engine.diagnostics()[0];
        assert_eq!(engine.message(diag.production), "StatementListBlock");
    }

    #[test]
    fn dropped_builder_records_nothing() {
        let mut engine = DiagnosticEngine::new();
        let builder = engine.semantic_error("never finished");
        drop(builder);
        assert!(engine.diagnostics().is_empty());
        assert!(!engine.errored());
    }

    #[test]
    fn buffer_error_is_fatal() {
        let mut engine = DiagnosticEngine::new();
        engine.buffer_error(BufferErrorKind::FileNotFound, "events/missing.txt");
        assert!(engine.errored());
        assert!(engine.has_buffer_error());
        let diag = &engine.diagnostics()[0];
        assert_eq!(
            engine.message(diag.message),
            "file not found: events/missing.txt"
        );
    }

    #[test]
    fn counts() {
        let mut engine = DiagnosticEngine::new();
        engine.semantic_error("a").finish();
        engine.semantic_error("b").finish();
        engine.warning("c").finish();
        assert_eq!(engine.error_count(), 2);
        assert_eq!(engine.warning_count(), 1);
    }
}
