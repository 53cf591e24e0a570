//! Grammar modules.
//!
//! Each module extends [`ScriptParser`] with the productions of one
//! dialect mode:
//!
//! - this module: the base script grammar (`File`, statements, values,
//!   `{ ... }` blocks) shared by every mode;
//! - [`event`]: `country_event` / `province_event` files with once-only
//!   keys;
//! - [`decision`]: `political_decisions` files;
//! - [`lua`]: the Lua-defines dialect (`--` comments, commas, quoted
//!   strings);
//! - [`csv`]: the delimiter-separated values grammar (free functions; it
//!   shares nothing with the script cursor).
//!
//! All productions are single-pass recursive descent. On a mismatch the
//! production reports through the [`ErrorSink`] and resynchronises at
//! the next balanced `}`; a parse with errors still yields a tree.

mod csv;
mod decision;
mod event;
mod lua;

pub use csv::{parse_csv_text, CsvOptions};

use pdx_diagnostic::DiagnosticEngine;
use pdx_ir::{Ast, LocationMap, Node, NodeId, NodeLocation, SymbolInterner};
use pdx_source::SourceFile;

use crate::chars::{is_escaped_string_char, is_ident_char, is_raw_string_char, resolve_escape};
use crate::cursor::Cursor;
use crate::error::ErrorSink;
use crate::recovery::skip_to_balanced_brace;

// Production names as they appear in diagnostics.
const PROD_ASSIGNMENT: &str = "AssignmentStatement";
const PROD_LIST_BLOCK: &str = "StatementListBlock";
const PROD_VALUE: &str = "ValueExpression";
const PROD_STRING: &str = "StringExpression";

/// Character class name used in identifier-position errors.
const DATA_SPECIFIER: &str = "DataSpecifier";

/// What a keyed statement accepts on its right-hand side. Keys without
/// a shape constraint go through `parse_value` directly.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum ValueShape {
    /// Identifier or string only.
    Flat,
    /// A `{ ... }` block only.
    Block,
}

/// Mode switches for the script grammar.
#[derive(Copy, Clone, Debug)]
pub struct ScriptOptions {
    /// Process C-style escapes inside quoted strings.
    pub string_escapes: bool,
}

impl ScriptOptions {
    /// The `simple_parse` mode: strings are taken verbatim.
    pub const fn raw() -> Self {
        ScriptOptions {
            string_escapes: false,
        }
    }

    /// Event/decision mode: strings process escapes.
    pub const fn escaped() -> Self {
        ScriptOptions {
            string_escapes: true,
        }
    }
}

/// Recursive-descent state over one source file.
pub(crate) struct ScriptParser<'a> {
    pub(crate) cursor: Cursor<'a>,
    file: &'a SourceFile,
    pub(crate) ast: &'a mut Ast,
    symbols: &'a mut SymbolInterner,
    locations: &'a mut LocationMap,
    pub(crate) sink: ErrorSink<'a>,
    string_escapes: bool,
}

impl<'a> ScriptParser<'a> {
    pub(crate) fn new(
        file: &'a SourceFile,
        ast: &'a mut Ast,
        symbols: &'a mut SymbolInterner,
        locations: &'a mut LocationMap,
        engine: &'a mut DiagnosticEngine,
        options: ScriptOptions,
    ) -> Self {
        ScriptParser {
            cursor: Cursor::new(file.text()),
            file,
            ast,
            symbols,
            locations,
            sink: ErrorSink::new(engine),
            string_escapes: options.string_escapes,
        }
    }

    /// Finish the parse, returning the number of errors reported.
    pub(crate) fn finish(self) -> usize {
        self.sink.finish()
    }

    /// Intern a string in the parse's symbol interner.
    pub(crate) fn intern(&mut self, text: &str) -> pdx_ir::Symbol {
        self.symbols.intern(text)
    }

    /// Map a text range to a source-buffer location.
    pub(crate) fn loc(&self, range: std::ops::Range<usize>) -> NodeLocation {
        NodeLocation::from_range(self.file.range_to_source(range))
    }

    /// Zero-length location at a text offset.
    pub(crate) fn point(&self, pos: usize) -> NodeLocation {
        self.loc(pos..pos)
    }

    /// Allocate a node and record its location.
    pub(crate) fn alloc(&mut self, node: Node, range: std::ops::Range<usize>) -> NodeId {
        let id = self.ast.alloc(node);
        self.locations.set_location(id, self.loc(range));
        id
    }

    /// Skip whitespace and `#` line comments.
    pub(crate) fn skip_trivia(&mut self) {
        loop {
            self.cursor.eat_while(|c| c.is_ascii_whitespace());
            if self.cursor.peek() == Some('#') {
                self.cursor.eat_while(|c| c != '\n');
            } else {
                break;
            }
        }
    }

    /// `File ::= Statement* EOF`; always yields a root, partial on error.
    pub(crate) fn parse_file(&mut self) -> NodeId {
        let start = self.cursor.pos();
        let mut statements = Vec::new();
        self.skip_trivia();
        while !self.cursor.is_eof() {
            let before = self.cursor.pos();
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            if self.cursor.pos() == before {
                // Recovery stopped right here (stray `}` at top level);
                // consume one character to guarantee progress.
                self.cursor.bump();
            }
            self.skip_trivia();
        }
        let end = self.cursor.pos();
        let root = self.alloc(Node::FileTree(statements), start..end);
        self.ast.set_root(root);
        root
    }

    /// `Statement ::= Identifier ("=" Value | ε) | StringValue | ListValue`.
    pub(crate) fn parse_statement(&mut self) -> Option<NodeId> {
        let start = self.cursor.pos();
        let c = self.cursor.peek()?;

        if c == '"' {
            let value = self.parse_string()?;
            let end = self.cursor.pos();
            return Some(self.alloc(Node::ValueStatement { value }, start..end));
        }
        if c == '{' {
            let value = self.parse_list();
            let end = self.cursor.pos();
            return Some(self.alloc(Node::ValueStatement { value }, start..end));
        }
        if is_ident_char(c) {
            let left = self.parse_identifier_node();
            self.skip_trivia();
            if self.cursor.eat('=') {
                self.skip_trivia();
                let right = self.parse_value()?;
                let end = self.cursor.pos();
                return Some(self.alloc(Node::AssignStatement { left, right }, start..end));
            }
            let end = self.cursor.pos();
            return Some(self.alloc(Node::ValueStatement { value: left }, start..end));
        }

        let at = self.loc(start..start + c.len_utf8());
        self.sink
            .expected_char_class(PROD_ASSIGNMENT, at, DATA_SPECIFIER);
        skip_to_balanced_brace(&mut self.cursor);
        None
    }

    /// `Value ::= Identifier | StringValue | ListValue`.
    pub(crate) fn parse_value(&mut self) -> Option<NodeId> {
        match self.cursor.peek() {
            Some('"') => self.parse_string(),
            Some('{') => Some(self.parse_list()),
            Some(c) if is_ident_char(c) => Some(self.parse_identifier_node()),
            _ => {
                let pos = self.cursor.pos();
                let at = match self.cursor.peek() {
                    Some(c) => self.loc(pos..pos + c.len_utf8()),
                    None => self.point(pos),
                };
                self.sink.expected_char_class(PROD_VALUE, at, DATA_SPECIFIER);
                skip_to_balanced_brace(&mut self.cursor);
                None
            }
        }
    }

    /// Identifier text ahead of the cursor, without consuming it.
    pub(crate) fn peek_identifier(&self) -> &'a str {
        let mut probe = self.cursor.clone();
        probe.eat_while(is_ident_char)
    }

    /// Consume an identifier (the caller checked the first character).
    pub(crate) fn parse_identifier_node(&mut self) -> NodeId {
        let start = self.cursor.pos();
        let text = self.cursor.eat_while(is_ident_char);
        debug_assert!(!text.is_empty());
        let symbol = self.symbols.intern(text);
        self.alloc(Node::IdentifierValue(symbol), start..self.cursor.pos())
    }

    /// Quoted string; the caller saw the opening quote. In raw mode the
    /// content is taken verbatim, otherwise C-style escapes apply.
    pub(crate) fn parse_string(&mut self) -> Option<NodeId> {
        let start = self.cursor.pos();
        self.cursor.bump();
        let mut content = String::new();
        loop {
            match self.cursor.peek() {
                None => {
                    let at = self.point(self.cursor.pos());
                    self.sink.expected_literal(PROD_STRING, at, "\"");
                    return None;
                }
                Some('"') => {
                    self.cursor.bump();
                    break;
                }
                Some('\\') if self.string_escapes => {
                    let escape_start = self.cursor.pos();
                    self.cursor.bump();
                    match self.cursor.bump().and_then(resolve_escape) {
                        Some(resolved) => content.push(resolved),
                        None => {
                            let at = self.loc(escape_start..self.cursor.pos());
                            self.sink
                                .generic(PROD_STRING, at, "invalid escape sequence");
                        }
                    }
                }
                Some(c) => {
                    let allowed = if self.string_escapes {
                        is_escaped_string_char(c)
                    } else {
                        is_raw_string_char(c)
                    };
                    if allowed {
                        content.push(c);
                        self.cursor.bump();
                    } else if self.string_escapes {
                        // Escape mode strings end at the line; report the
                        // missing closer and stop.
                        let at = self.point(self.cursor.pos());
                        self.sink.expected_literal(PROD_STRING, at, "\"");
                        return None;
                    } else {
                        let pos = self.cursor.pos();
                        let at = self.loc(pos..pos + c.len_utf8());
                        self.sink
                            .generic(PROD_STRING, at, "invalid character in string");
                        self.cursor.bump();
                    }
                }
            }
        }
        let symbol = self.symbols.intern(&content);
        Some(self.alloc(Node::StringValue(symbol), start..self.cursor.pos()))
    }

    /// `ListValue ::= "{" Statement* ";"? "}"`; the caller saw the
    /// opening brace. Exactly one trailing `;` is tolerated before the
    /// close; commas belong to the Lua-defines dialect only.
    pub(crate) fn parse_list(&mut self) -> NodeId {
        self.parse_list_with(PROD_LIST_BLOCK, ScriptParser::parse_statement)
    }

    /// List production parameterised over the statement parser, so the
    /// keyed modes (events, decisions) reuse the brace handling.
    pub(crate) fn parse_list_with(
        &mut self,
        production: &str,
        mut statement: impl FnMut(&mut Self) -> Option<NodeId>,
    ) -> NodeId {
        let open = self.cursor.pos();
        self.cursor.bump();
        let mut statements = Vec::new();
        loop {
            self.skip_trivia();
            match self.cursor.peek() {
                None => {
                    self.unclosed_block(production, open);
                    break;
                }
                Some('}') => {
                    self.cursor.bump();
                    break;
                }
                Some(';') => {
                    // A single trailing `;` is tolerated, but only
                    // directly before the closing brace.
                    self.cursor.bump();
                    self.skip_trivia();
                    match self.cursor.peek() {
                        Some('}') => {
                            self.cursor.bump();
                        }
                        None => self.unclosed_block(production, open),
                        Some(_) => {
                            let at = self.current_char_loc();
                            self.sink.expected_literal(production, at, "}");
                            if skip_to_balanced_brace(&mut self.cursor) {
                                self.cursor.bump();
                            }
                        }
                    }
                    break;
                }
                Some(',') => {
                    let at = self.current_char_loc();
                    self.sink.expected_literal(production, at, "}");
                    if skip_to_balanced_brace(&mut self.cursor) {
                        self.cursor.bump();
                    }
                    break;
                }
                Some(_) => {
                    let before = self.cursor.pos();
                    if let Some(stmt) = statement(self) {
                        statements.push(stmt);
                    }
                    if self.cursor.pos() == before {
                        self.cursor.bump();
                    }
                }
            }
        }
        self.alloc(Node::ListValue(statements), open..self.cursor.pos())
    }

    /// Report a block that ran out of input before its `}`.
    fn unclosed_block(&mut self, production: &str, open: usize) {
        let at = self.point(self.cursor.pos());
        let context = self.loc(open..open + 1);
        self.sink
            .expected_literal_with_context(production, at, "}", context, "block opened here");
    }

    /// Identifier-only assignment (`key = value`); bare values are not
    /// statements in the keyed modes.
    pub(crate) fn parse_simple_assignment(&mut self, production: &str) -> Option<NodeId> {
        let start = self.cursor.pos();
        match self.cursor.peek() {
            Some(c) if is_ident_char(c) => {}
            Some(c) => {
                let at = self.loc(start..start + c.len_utf8());
                self.sink.expected_char_class(production, at, DATA_SPECIFIER);
                skip_to_balanced_brace(&mut self.cursor);
                return None;
            }
            None => return None,
        }
        let left = self.parse_identifier_node();
        self.skip_trivia();
        if !self.cursor.eat('=') {
            let at = self.point(self.cursor.pos());
            self.sink.expected_literal(production, at, "=");
            skip_to_balanced_brace(&mut self.cursor);
            return None;
        }
        self.skip_trivia();
        let right = self.parse_value()?;
        let end = self.cursor.pos();
        Some(self.alloc(Node::AssignStatement { left, right }, start..end))
    }

    /// Right-hand side constrained by the key's [`ValueShape`].
    pub(crate) fn parse_shaped_value(
        &mut self,
        production: &str,
        shape: ValueShape,
    ) -> Option<NodeId> {
        match shape {
            ValueShape::Block => {
                if self.cursor.peek() == Some('{') {
                    Some(self.parse_list())
                } else {
                    let at = self.current_char_loc();
                    self.sink.expected_literal(production, at, "{");
                    skip_to_balanced_brace(&mut self.cursor);
                    None
                }
            }
            ValueShape::Flat => match self.cursor.peek() {
                Some('"') => self.parse_string(),
                Some(c) if is_ident_char(c) => Some(self.parse_identifier_node()),
                _ => {
                    let at = self.current_char_loc();
                    self.sink.expected_char_class(production, at, DATA_SPECIFIER);
                    skip_to_balanced_brace(&mut self.cursor);
                    None
                }
            },
        }
    }

    /// Location of the character under the cursor, or a point at EOF.
    pub(crate) fn current_char_loc(&self) -> NodeLocation {
        let pos = self.cursor.pos();
        match self.cursor.peek() {
            Some(c) => self.loc(pos..pos + c.len_utf8()),
            None => self.point(pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdx_source::{Encoding, SourceBuffer};
    use pretty_assertions::assert_eq;

    struct Fixture {
        file: SourceFile,
        ast: Ast,
        symbols: SymbolInterner,
        locations: LocationMap,
        engine: DiagnosticEngine,
    }

    impl Fixture {
        fn new(text: &str) -> Self {
            Fixture {
                file: SourceFile::new(
                    None,
                    SourceBuffer::new(text.as_bytes().to_vec(), Encoding::Utf8),
                ),
                ast: Ast::new(),
                symbols: SymbolInterner::new(),
                locations: LocationMap::new(),
                engine: DiagnosticEngine::new(),
            }
        }

        fn parse_simple(&mut self) -> usize {
            let mut parser = ScriptParser::new(
                &self.file,
                &mut self.ast,
                &mut self.symbols,
                &mut self.locations,
                &mut self.engine,
                ScriptOptions::raw(),
            );
            parser.parse_file();
            parser.finish()
        }
    }

    #[test]
    fn trivia_skipping() {
        let mut fx = Fixture::new("  # comment to end of line\n\t a = b");
        let errors = fx.parse_simple();
        assert_eq!(errors, 0);
        assert_eq!(fx.ast.statements().len(), 1);
    }

    #[test]
    fn assignment_shape() {
        let mut fx = Fixture::new("a = b");
        fx.parse_simple();
        let stmts = fx.ast.statements();
        assert_eq!(stmts.len(), 1);
        let Node::AssignStatement { left, right } = fx.ast.node(stmts[0]) else {
            panic!("expected assignment");
        };
        assert_eq!(fx.ast.node(*left), &Node::IdentifierValue(fx.symbols.intern("a")));
        assert_eq!(fx.ast.node(*right), &Node::IdentifierValue(fx.symbols.intern("b")));
    }

    #[test]
    fn locations_cover_source() {
        let mut fx = Fixture::new("alpha = beta");
        fx.parse_simple();
        let stmt = fx.ast.statements()[0];
        let loc = fx.locations.location_of(stmt);
        assert_eq!(loc.start(), 0);
        assert_eq!(loc.end(), 12);
        let Node::AssignStatement { left, .. } = fx.ast.node(stmt) else {
            panic!("expected assignment");
        };
        assert_eq!(fx.locations.location_of(*left), NodeLocation::new(0, 5));
    }

    #[test]
    fn raw_strings_keep_backslashes() {
        let mut fx = Fixture::new(r#"a = "x\ny""#);
        let errors = fx.parse_simple();
        assert_eq!(errors, 0);
        let Node::AssignStatement { right, .. } = fx.ast.node(fx.ast.statements()[0]) else {
            panic!("expected assignment");
        };
        let Node::StringValue(sym) = fx.ast.node(*right) else {
            panic!("expected string");
        };
        assert_eq!(fx.symbols.view(*sym), "x\\ny");
    }

    #[test]
    fn trailing_semicolon_in_list_is_tolerated() {
        let mut fx = Fixture::new("a = { b = c ; }");
        let errors = fx.parse_simple();
        assert_eq!(errors, 0);
    }

    #[test]
    fn semicolon_in_empty_list_is_tolerated() {
        let mut fx = Fixture::new("a = { ; }");
        let errors = fx.parse_simple();
        assert_eq!(errors, 0);
    }

    #[test]
    fn comma_in_list_is_an_error() {
        let mut fx = Fixture::new("a = { b = c, d = e }");
        let errors = fx.parse_simple();
        assert_eq!(errors, 1);
        let diag = &fx.engine.diagnostics()[0];
        assert_eq!(fx.engine.message(diag.message), "expected `}`");
    }

    #[test]
    fn double_semicolon_is_an_error() {
        let mut fx = Fixture::new("a = { b = c ;; }");
        let errors = fx.parse_simple();
        assert_eq!(errors, 1);
        let diag = &fx.engine.diagnostics()[0];
        assert_eq!(fx.engine.message(diag.message), "expected `}`");
    }

    #[test]
    fn semicolon_mid_list_is_an_error() {
        let mut fx = Fixture::new("a = { b = c ; d = e }\nf = g");
        let errors = fx.parse_simple();
        assert_eq!(errors, 1);
        // The statements before the stray separator survive, and parsing
        // resumes after the block.
        let stmts = fx.ast.statements();
        assert_eq!(stmts.len(), 2);
        let Node::AssignStatement { right, .. } = fx.ast.node(stmts[0]) else {
            panic!("expected assignment");
        };
        let Node::ListValue(inner) = fx.ast.node(*right) else {
            panic!("expected list");
        };
        assert_eq!(inner.len(), 1);
    }

    #[test]
    fn unclosed_block_reports_and_keeps_partial_tree() {
        let mut fx = Fixture::new("a = { b = c");
        let errors = fx.parse_simple();
        assert_eq!(errors, 1);
        let diag = &fx.engine.diagnostics()[0];
        assert_eq!(fx.engine.message(diag.message), "expected `}`");
        // The partial list still holds the inner assignment.
        let stmts = fx.ast.statements();
        assert_eq!(stmts.len(), 1);
    }

    #[test]
    fn recovery_resumes_after_balanced_brace() {
        let mut fx = Fixture::new("a = { = } b = c");
        let errors = fx.parse_simple();
        assert!(errors >= 1);
        // The statement after the broken block still parses.
        let stmts = fx.ast.statements();
        let last = fx.ast.node(*stmts.last().unwrap_or(&stmts[0]));
        assert!(matches!(last, Node::AssignStatement { .. }));
    }
}
