//! Parse-error sink.
//!
//! The grammar reports every mismatch through this sink. It knows how to
//! shape the byte range for each parse-error kind, interns the formatted
//! message, and attaches the node to the diagnostic root. `finish()`
//! hands back the number of errors it accumulated, which is how parse
//! entry points learn whether the tree is partial.

use pdx_diagnostic::{DiagnosticEngine, ErrorKind};
use pdx_ir::NodeLocation;

/// Sink for grammar errors; one per parse.
pub struct ErrorSink<'e> {
    engine: &'e mut DiagnosticEngine,
    count: usize,
}

impl<'e> ErrorSink<'e> {
    pub fn new(engine: &'e mut DiagnosticEngine) -> Self {
        ErrorSink { engine, count: 0 }
    }

    /// A specific literal (like `=` or `}`) was expected at a position.
    /// The range is the single offending position.
    pub fn expected_literal(&mut self, production: &str, at: NodeLocation, literal: &str) {
        self.count += 1;
        self.engine
            .build(ErrorKind::ExpectedLiteral, &format!("expected `{literal}`"))
            .production(production)
            .primary(at, "here")
            .finish();
    }

    /// Like [`expected_literal`](Self::expected_literal), with a
    /// secondary range pointing at related context (e.g. the opening
    /// brace of an unclosed block).
    pub fn expected_literal_with_context(
        &mut self,
        production: &str,
        at: NodeLocation,
        literal: &str,
        context: NodeLocation,
        context_message: &str,
    ) {
        self.count += 1;
        self.engine
            .build(ErrorKind::ExpectedLiteral, &format!("expected `{literal}`"))
            .production(production)
            .primary(at, "here")
            .secondary(context, context_message)
            .finish();
    }

    /// A keyword was expected; the range covers the offending token.
    pub fn expected_keyword(&mut self, production: &str, token: NodeLocation, keyword: &str) {
        self.count += 1;
        self.engine
            .build(
                ErrorKind::ExpectedKeyword,
                &format!("expected keyword `{keyword}`"),
            )
            .production(production)
            .primary(token, "here")
            .finish();
    }

    /// A character class was expected; the range is the offending
    /// character (or the end of input).
    pub fn expected_char_class(&mut self, production: &str, at: NodeLocation, class: &str) {
        self.count += 1;
        self.engine
            .build(ErrorKind::ExpectedCharClass, &format!("expected {class}"))
            .production(production)
            .primary(at, "here")
            .finish();
    }

    /// Any other grammar mismatch, with a free-form message over an
    /// explicit range.
    pub fn generic(&mut self, production: &str, range: NodeLocation, message: &str) {
        self.count += 1;
        self.engine
            .build(ErrorKind::GenericParseError, message)
            .production(production)
            .primary(range, "here")
            .finish();
    }

    /// A once-only key occurred again. Recoverable; the statement still
    /// parses.
    pub fn duplicate_key(&mut self, production: &str, range: NodeLocation, key: &str) {
        self.count += 1;
        self.engine
            .build(
                ErrorKind::GenericParseError,
                &format!("expected left side {key} to be found once"),
            )
            .production(production)
            .primary(range, "duplicate key")
            .finish();
    }

    /// Number of errors this sink accumulated.
    pub fn finish(self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdx_diagnostic::Severity;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_errors() {
        let mut engine = DiagnosticEngine::new();
        let mut sink = ErrorSink::new(&mut engine);
        sink.expected_literal("File", NodeLocation::point(3), "}");
        sink.expected_char_class("Identifier", NodeLocation::new(5, 6), "DataSpecifier");
        assert_eq!(sink.finish(), 2);
        assert_eq!(engine.diagnostics().len(), 2);
        assert!(engine.errored());
    }

    #[test]
    fn messages_and_kinds() {
        let mut engine = DiagnosticEngine::new();
        let mut sink = ErrorSink::new(&mut engine);
        sink.expected_keyword("EventStatement", NodeLocation::new(0, 4), "country_event");
        let _ = sink.finish();

        let diag = &engine.diagnostics()[0];
        assert_eq!(diag.kind, ErrorKind::ExpectedKeyword);
        assert_eq!(diag.severity(), Severity::Error);
        assert_eq!(
            engine.message(diag.message),
            "expected keyword `country_event`"
        );
        assert_eq!(engine.message(diag.production), "EventStatement");
    }

    #[test]
    fn unclosed_block_has_secondary_annotation() {
        let mut engine = DiagnosticEngine::new();
        let mut sink = ErrorSink::new(&mut engine);
        sink.expected_literal_with_context(
            "StatementListBlock",
            NodeLocation::point(20),
            "}",
            NodeLocation::new(4, 5),
            "block opened here",
        );
        let _ = sink.finish();

        let diag = &engine.diagnostics()[0];
        assert_eq!(diag.annotations.len(), 2);
        assert!(diag.annotations[0].is_primary());
        assert!(!diag.annotations[1].is_primary());
    }

    #[test]
    fn duplicate_key_wording() {
        let mut engine = DiagnosticEngine::new();
        let mut sink = ErrorSink::new(&mut engine);
        sink.duplicate_key("EventStatement", NodeLocation::new(10, 12), "id");
        let _ = sink.finish();

        let diag = &engine.diagnostics()[0];
        assert_eq!(
            engine.message(diag.message),
            "expected left side id to be found once"
        );
    }
}
