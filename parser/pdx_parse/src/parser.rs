//! Public parser façade.
//!
//! [`Parser`] (script) and [`CsvParser`] own everything one parse needs:
//! the loaded [`SourceFile`], the AST arena and interner, the location
//! side table, and the diagnostic engine. Loading never panics; I/O
//! failures become fatal `BufferError` diagnostics and later parse calls
//! return `false`.
//!
//! After every load and parse, accumulated errors are written to the
//! configured error log (null by default).

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pdx_diagnostic::{
    BufferErrorKind, Diagnostic, DiagnosticEngine, DiagnosticRenderer,
};
use pdx_ir::{Ast, LineObject, LocationMap, NodeId, NodeLocation, SymbolInterner};
use pdx_source::{detect, ConvertIssueKind, SourceBuffer, SourceFile};

use crate::grammar::{parse_csv_text, CsvOptions, ScriptOptions, ScriptParser};

/// Line/column range of a node, 1-based, for tooling.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct FilePosition {
    pub start_line: u32,
    pub end_line: u32,
    pub start_column: u32,
    pub end_column: u32,
}

impl FilePosition {
    const EMPTY: FilePosition = FilePosition {
        start_line: u32::MAX,
        end_line: u32::MAX,
        start_column: u32::MAX,
        end_column: u32::MAX,
    };

    pub fn is_empty(&self) -> bool {
        *self == FilePosition::EMPTY
    }
}

/// Where rendered diagnostics go after each load/parse.
enum ErrorLog {
    Null,
    Stderr,
    Stdout,
    Writer(Box<dyn Write>),
}

/// Shared load/diagnostic state behind both parsers.
struct ParserBase {
    file: Option<SourceFile>,
    engine: DiagnosticEngine,
    error_log: ErrorLog,
    fatal_error: bool,
}

impl ParserBase {
    fn new() -> Self {
        ParserBase {
            file: None,
            engine: DiagnosticEngine::new(),
            error_log: ErrorLog::Null,
            fatal_error: false,
        }
    }

    /// Reset per-load state and adopt a new buffer.
    fn load_bytes(&mut self, path: Option<PathBuf>, bytes: Vec<u8>) {
        self.engine = DiagnosticEngine::new();
        self.fatal_error = false;
        let file = SourceFile::new(path, SourceBuffer::detect(bytes));
        self.ingest_convert_issues(&file);
        self.file = Some(file);
        self.log_errors();
    }

    fn load_file(&mut self, path: &Path) {
        self.engine = DiagnosticEngine::new();
        self.fatal_error = false;
        self.file = None;
        match std::fs::read(path) {
            Ok(bytes) => {
                tracing::debug!(path = %path.display(), len = bytes.len(), "loaded file");
                let file = SourceFile::new(Some(path.to_path_buf()), SourceBuffer::detect(bytes));
                self.ingest_convert_issues(&file);
                self.file = Some(file);
            }
            Err(error) => {
                let kind = BufferErrorKind::from_io(&error);
                self.engine
                    .buffer_error(kind, &path.display().to_string());
                self.fatal_error = true;
            }
        }
        self.log_errors();
    }

    /// Turn transcoding issues into warning diagnostics.
    fn ingest_convert_issues(&mut self, file: &SourceFile) {
        for issue in file.convert_issues() {
            let location = NodeLocation::new(issue.pos, issue.pos + issue.len);
            let message = match issue.kind {
                ConvertIssueKind::UnmappedByte => "invalid character value found",
                ConvertIssueKind::InvalidSequence => "invalid byte sequence found",
                ConvertIssueKind::UserDefinedSequence => {
                    "user-defined character sequence rejected"
                }
            };
            self.engine
                .warning(message)
                .primary(location, "here")
                .finish();
        }
    }

    fn has_error(&self) -> bool {
        self.fatal_error || self.engine.errored()
    }

    /// Write rendered errors to the configured log.
    fn log_errors(&mut self) {
        if !self.has_error() {
            return;
        }
        let renderer = DiagnosticRenderer::new(&self.engine, self.file.as_ref());
        match &mut self.error_log {
            ErrorLog::Null => {}
            ErrorLog::Stderr => {
                let _ = renderer.render_all(&mut io::stderr().lock());
            }
            ErrorLog::Stdout => {
                let _ = renderer.render_all(&mut io::stdout().lock());
            }
            ErrorLog::Writer(writer) => {
                let _ = renderer.render_all(writer);
            }
        }
    }

    fn print_errors_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        DiagnosticRenderer::new(&self.engine, self.file.as_ref()).render_all(writer)
    }

    /// Resolve a source-buffer location to 1-based line/column.
    fn position_of(&self, location: NodeLocation) -> FilePosition {
        let Some(file) = &self.file else {
            return FilePosition::EMPTY;
        };
        if location.is_synthesized() {
            return FilePosition::EMPTY;
        }
        let text = file.text();
        let map = file.position_map();
        let start = map.to_output(location.start() as usize).min(text.len());
        let end = map.to_output(location.end() as usize).min(text.len());

        let line_col = |offset: usize| {
            let before = &text.as_bytes()[..offset];
            let line = bytecount_newlines(before) + 1;
            let line_start = before
                .iter()
                .rposition(|&b| b == b'\n')
                .map_or(0, |i| i + 1);
            let column = text
                .get(line_start..offset)
                .map_or(1, |s| s.chars().count() + 1);
            (u32::try_from(line).unwrap_or(u32::MAX), u32::try_from(column).unwrap_or(u32::MAX))
        };

        let (start_line, start_column) = line_col(start);
        let (end_line, end_column) = line_col(end);
        FilePosition {
            start_line,
            end_line,
            start_column,
            end_column,
        }
    }
}

fn bytecount_newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}

/// Which script grammar a parse runs.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum ScriptMode {
    Simple,
    Event,
    Decision,
    LuaDefines,
}

/// Script parser: one loaded buffer, one tree, one diagnostic stream.
pub struct Parser {
    base: ParserBase,
    ast: Ast,
    symbols: SymbolInterner,
    locations: LocationMap,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            base: ParserBase::new(),
            ast: Ast::new(),
            symbols: SymbolInterner::new(),
            locations: LocationMap::new(),
        }
    }

    pub fn from_buffer(data: &[u8]) -> Self {
        let mut parser = Parser::new();
        parser.load_from_buffer(data);
        parser
    }

    pub fn from_string(text: &str) -> Self {
        Parser::from_buffer(text.as_bytes())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let mut parser = Parser::new();
        parser.load_from_file(path);
        parser
    }

    /// Adopt in-memory bytes. An empty buffer is a valid (empty) source.
    pub fn load_from_buffer(&mut self, data: &[u8]) -> &mut Self {
        self.reset_tree();
        self.base.load_bytes(None, data.to_vec());
        self
    }

    pub fn load_from_string(&mut self, text: &str) -> &mut Self {
        self.load_from_buffer(text.as_bytes())
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.reset_tree();
        self.base.load_file(path.as_ref());
        self
    }

    fn reset_tree(&mut self) {
        self.ast = Ast::new();
        self.symbols = SymbolInterner::new();
        self.locations = LocationMap::new();
    }

    /// Plain script grammar, raw strings.
    pub fn simple_parse(&mut self) -> bool {
        self.run_parse(ScriptMode::Simple)
    }

    /// Event grammar (`country_event` / `province_event`).
    pub fn event_parse(&mut self) -> bool {
        self.run_parse(ScriptMode::Event)
    }

    /// Decision grammar (`political_decisions`).
    pub fn decision_parse(&mut self) -> bool {
        self.run_parse(ScriptMode::Decision)
    }

    /// Lua-defines grammar.
    pub fn lua_defines_parse(&mut self) -> bool {
        self.run_parse(ScriptMode::LuaDefines)
    }

    fn run_parse(&mut self, mode: ScriptMode) -> bool {
        if self.base.fatal_error {
            return false;
        }
        let Some(file) = &self.base.file else {
            return false;
        };
        let _span = tracing::debug_span!("script_parse", ?mode).entered();

        // Legacy files are expected in a single-byte code page; flag the
        // ones that are really UTF-8.
        if detect::is_utf8_no_ascii(file.buffer().bytes()) {
            let message = match file.path() {
                Some(path) => format!(
                    "File '{}' is a UTF-8 encoded file. This may cause problems. \
                     Prefer Windows-1252 encoding.",
                    path.display()
                ),
                None => "Buffer is a UTF-8 encoded string. This may cause problems. \
                         Prefer Windows-1252 encoding."
                    .to_string(),
            };
            self.base.engine.warning(&message).finish();
        }

        self.ast = Ast::new();
        self.locations = LocationMap::new();
        let options = match mode {
            ScriptMode::Simple => ScriptOptions::raw(),
            _ => ScriptOptions::escaped(),
        };
        let mut parser = ScriptParser::new(
            file,
            &mut self.ast,
            &mut self.symbols,
            &mut self.locations,
            &mut self.base.engine,
            options,
        );
        match mode {
            ScriptMode::Simple => parser.parse_file(),
            ScriptMode::Event => parser.parse_event_file(),
            ScriptMode::Decision => parser.parse_decision_file(),
            ScriptMode::LuaDefines => parser.parse_lua_file(),
        };
        let errors = parser.finish();
        tracing::debug!(errors, nodes = self.ast.node_count(), "parse finished");

        self.base.log_errors();
        !self.base.fatal_error
    }

    pub fn has_error(&self) -> bool {
        self.base.has_error()
    }

    pub fn has_fatal_error(&self) -> bool {
        self.base.fatal_error
    }

    pub fn has_warning(&self) -> bool {
        self.base.engine.warned()
    }

    /// Diagnostics in insertion order.
    pub fn get_errors(&self) -> &[Diagnostic] {
        self.base.engine.diagnostics()
    }

    /// The diagnostic engine, for message lookups.
    pub fn diagnostics(&self) -> &DiagnosticEngine {
        &self.base.engine
    }

    /// Root of the parsed tree; `None` until a parse succeeds.
    pub fn get_file_node(&self) -> Option<NodeId> {
        self.ast.root()
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn symbols(&self) -> &SymbolInterner {
        &self.symbols
    }

    pub fn locations(&self) -> &LocationMap {
        &self.locations
    }

    pub fn source_file(&self) -> Option<&SourceFile> {
        self.base.file.as_ref()
    }

    /// Interned text of a flat value node; empty for other kinds.
    pub fn value(&self, node: NodeId) -> &str {
        match self.ast.node(node).flat_symbol() {
            Some(symbol) => self.symbols.view(symbol),
            None => "",
        }
    }

    /// Render the tree back to script text.
    pub fn make_native_string(&self) -> String {
        self.ast.render_native(&self.symbols)
    }

    /// Line/column position of a parsed node.
    pub fn get_position(&self, node: NodeId) -> FilePosition {
        match self.locations.try_location_of(node) {
            Some(location) => self.base.position_of(location),
            None => FilePosition::EMPTY,
        }
    }

    pub fn print_errors_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.base.print_errors_to(writer)
    }

    pub fn set_error_log_to_null(&mut self) {
        self.base.error_log = ErrorLog::Null;
    }

    pub fn set_error_log_to_stderr(&mut self) {
        self.base.error_log = ErrorLog::Stderr;
    }

    pub fn set_error_log_to_stdout(&mut self) {
        self.base.error_log = ErrorLog::Stdout;
    }

    pub fn set_error_log_to(&mut self, writer: Box<dyn Write>) {
        self.base.error_log = ErrorLog::Writer(writer);
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

/// CSV parser over the same load/diagnostic machinery.
pub struct CsvParser {
    base: ParserBase,
    lines: Vec<LineObject>,
}

impl CsvParser {
    pub fn new() -> Self {
        CsvParser {
            base: ParserBase::new(),
            lines: Vec::new(),
        }
    }

    pub fn from_buffer(data: &[u8]) -> Self {
        let mut parser = CsvParser::new();
        parser.load_from_buffer(data);
        parser
    }

    pub fn from_string(text: &str) -> Self {
        CsvParser::from_buffer(text.as_bytes())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let mut parser = CsvParser::new();
        parser.load_from_file(path);
        parser
    }

    pub fn load_from_buffer(&mut self, data: &[u8]) -> &mut Self {
        self.lines.clear();
        self.base.load_bytes(None, data.to_vec());
        self
    }

    pub fn load_from_string(&mut self, text: &str) -> &mut Self {
        self.load_from_buffer(text.as_bytes())
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.lines.clear();
        self.base.load_file(path.as_ref());
        self
    }

    /// Parse with the default `;` delimiter.
    pub fn parse_csv(&mut self, handle_strings: bool) -> bool {
        self.parse_csv_with_delimiter(';', handle_strings)
    }

    pub fn parse_csv_with_delimiter(&mut self, delimiter: char, handle_strings: bool) -> bool {
        if self.base.fatal_error {
            return false;
        }
        let Some(file) = &self.base.file else {
            return false;
        };
        let _span = tracing::debug_span!("csv_parse", ?delimiter, handle_strings).entered();
        self.lines = parse_csv_text(
            file.text(),
            CsvOptions {
                delimiter,
                handle_strings,
            },
        );
        self.base.log_errors();
        !self.base.fatal_error
    }

    /// Parsed lines in source order.
    pub fn get_lines(&self) -> &[LineObject] {
        &self.lines
    }

    pub fn has_error(&self) -> bool {
        self.base.has_error()
    }

    pub fn has_fatal_error(&self) -> bool {
        self.base.fatal_error
    }

    pub fn has_warning(&self) -> bool {
        self.base.engine.warned()
    }

    pub fn get_errors(&self) -> &[Diagnostic] {
        self.base.engine.diagnostics()
    }

    pub fn diagnostics(&self) -> &DiagnosticEngine {
        &self.base.engine
    }

    pub fn source_file(&self) -> Option<&SourceFile> {
        self.base.file.as_ref()
    }

    pub fn print_errors_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.base.print_errors_to(writer)
    }

    pub fn set_error_log_to_null(&mut self) {
        self.base.error_log = ErrorLog::Null;
    }

    pub fn set_error_log_to_stderr(&mut self) {
        self.base.error_log = ErrorLog::Stderr;
    }

    pub fn set_error_log_to_stdout(&mut self) {
        self.base.error_log = ErrorLog::Stdout;
    }

    pub fn set_error_log_to(&mut self, writer: Box<dyn Write>) {
        self.base.error_log = ErrorLog::Writer(writer);
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        CsvParser::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdx_ir::Node;
    use pretty_assertions::assert_eq;

    fn simple(text: &str) -> Parser {
        let mut parser = Parser::from_string(text);
        parser.simple_parse();
        parser
    }

    fn stmt_kinds(parser: &Parser) -> Vec<&'static str> {
        parser
            .ast()
            .statements()
            .iter()
            .map(|&id| parser.ast().node(id).kind().name())
            .collect()
    }

    #[test]
    fn single_assignment() {
        let parser = simple("a = b");
        assert!(!parser.has_error());
        assert_eq!(stmt_kinds(&parser), vec!["assign statement"]);

        let ast = parser.ast();
        let Node::AssignStatement { left, right } = ast.node(ast.statements()[0]) else {
            panic!("expected assignment");
        };
        assert_eq!(parser.value(*left), "a");
        assert_eq!(parser.value(*right), "b");
    }

    #[test]
    fn bare_values_become_value_statements() {
        let parser = simple("a b c d");
        assert!(!parser.has_error());
        assert_eq!(
            stmt_kinds(&parser),
            vec![
                "value statement",
                "value statement",
                "value statement",
                "value statement"
            ]
        );
        let values: Vec<&str> = parser
            .ast()
            .statements()
            .iter()
            .map(|&id| {
                let Node::ValueStatement { value } = parser.ast().node(id) else {
                    panic!("expected value statement");
                };
                parser.value(*value)
            })
            .collect();
        assert_eq!(values, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn nested_assignment_block() {
        let parser = simple("a = { a = b }");
        assert!(!parser.has_error());
        let ast = parser.ast();
        let Node::AssignStatement { left, right } = ast.node(ast.statements()[0]) else {
            panic!("expected assignment");
        };
        assert_eq!(parser.value(*left), "a");
        let Node::ListValue(inner) = ast.node(*right) else {
            panic!("expected list");
        };
        assert_eq!(inner.len(), 1);
        let Node::AssignStatement { left, right } = ast.node(inner[0]) else {
            panic!("expected inner assignment");
        };
        assert_eq!(parser.value(*left), "a");
        assert_eq!(parser.value(*right), "b");
    }

    #[test]
    fn doubly_nested_value_lists() {
        let parser = simple("a = { { a } }");
        assert!(!parser.has_error());
        let ast = parser.ast();
        let Node::AssignStatement { right, .. } = ast.node(ast.statements()[0]) else {
            panic!("expected assignment");
        };
        let Node::ListValue(outer) = ast.node(*right) else {
            panic!("expected outer list");
        };
        assert_eq!(outer.len(), 1);
        let Node::ValueStatement { value } = ast.node(outer[0]) else {
            panic!("expected value statement");
        };
        let Node::ListValue(inner) = ast.node(*value) else {
            panic!("expected inner list");
        };
        assert_eq!(inner.len(), 1);
        let Node::ValueStatement { value } = ast.node(inner[0]) else {
            panic!("expected inner value statement");
        };
        assert_eq!(parser.value(*value), "a");
    }

    #[test]
    fn empty_buffer_is_valid() {
        let mut parser = Parser::from_buffer(b"");
        assert!(!parser.has_fatal_error());
        assert!(parser.simple_parse());
        assert!(!parser.has_error());
        assert!(parser.get_file_node().is_some());
        assert!(parser.ast().statements().is_empty());
    }

    #[test]
    fn missing_file_is_fatal() {
        let mut parser = Parser::from_file("definitely/not/a/real/path.txt");
        assert!(parser.has_error());
        assert!(parser.has_fatal_error());
        assert!(!parser.simple_parse());
        assert!(parser.get_file_node().is_none());

        let errors = parser.get_errors();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0].kind,
            pdx_diagnostic::ErrorKind::Buffer(BufferErrorKind::FileNotFound)
        ));
    }

    #[test]
    fn parse_errors_are_not_fatal() {
        let mut parser = Parser::from_string("a = { = }");
        assert!(parser.simple_parse());
        assert!(parser.has_error());
        assert!(!parser.has_fatal_error());
        assert!(parser.get_file_node().is_some());
    }

    #[test]
    fn every_node_location_is_in_the_buffer() {
        let parser = simple("alpha = { beta = \"gamma\" delta }\nx = y");
        let len = parser
            .source_file()
            .map_or(0, |f| f.buffer().len() as u32);
        let ast = parser.ast();
        for &stmt in ast.statements() {
            let loc = parser.locations().location_of(stmt);
            assert!(loc.end() <= len);
            assert!(loc.start() <= loc.end());
        }
    }

    #[test]
    fn render_reparse_roundtrip() {
        for text in [
            "a = b",
            "a b c d",
            "a = { a = b }",
            "a = { { a } }",
            "name = \"quoted value\"\nother = { x = y z = w }",
        ] {
            let first = simple(text);
            assert!(!first.has_error(), "input {text:?}");
            let rendered = first.make_native_string();
            let second = simple(&rendered);
            assert!(!second.has_error(), "rendered {rendered:?}");
            assert_eq!(
                second.make_native_string(),
                rendered,
                "input {text:?}"
            );
        }
    }

    #[test]
    fn windows_1252_buffer_parses() {
        // "Württemberg = König" in Windows-1252 bytes.
        let mut parser = Parser::from_buffer(b"W\xFCrttemberg = K\xF6nig");
        assert!(parser.simple_parse());
        assert!(!parser.has_error());
        let ast = parser.ast();
        let Node::AssignStatement { left, right } = ast.node(ast.statements()[0]) else {
            panic!("expected assignment");
        };
        assert_eq!(parser.value(*left), "W\u{fc}rttemberg");
        assert_eq!(parser.value(*right), "K\u{f6}nig");
        // Locations refer to the original 1252 bytes.
        let loc = parser.locations().location_of(*left);
        assert_eq!(loc.start(), 0);
        assert_eq!(loc.end(), 11);
    }

    #[test]
    fn utf8_warning_on_legacy_parse() {
        let mut parser = Parser::from_string("k\u{f6}nig = x");
        assert!(parser.simple_parse());
        assert!(parser.has_warning());
        assert!(!parser.has_error());
    }

    #[test]
    fn event_parse_builds_event_statements() {
        let text = "country_event = { id = 1000 title = \"t\" option = { name = a } }";
        let mut parser = Parser::from_string(text);
        assert!(parser.event_parse());
        assert!(!parser.has_error());
        let ast = parser.ast();
        let Node::EventStatement {
            is_province_event,
            body,
        } = ast.node(ast.statements()[0])
        else {
            panic!("expected event statement");
        };
        assert!(!is_province_event);
        let Node::ListValue(entries) = ast.node(*body) else {
            panic!("expected body list");
        };
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn province_event_flag() {
        let mut parser = Parser::from_string("province_event = { id = 2 }");
        assert!(parser.event_parse());
        let ast = parser.ast();
        let Node::EventStatement {
            is_province_event, ..
        } = ast.node(ast.statements()[0])
        else {
            panic!("expected event statement");
        };
        assert!(is_province_event);
    }

    #[test]
    fn duplicate_event_key_is_recoverable() {
        let text = "country_event = { id = 1 id = 2 }";
        let mut parser = Parser::from_string(text);
        assert!(parser.event_parse());
        assert!(parser.has_error());
        assert!(!parser.has_fatal_error());
        let diag = &parser.get_errors()[0];
        assert_eq!(
            parser.diagnostics().message(diag.message),
            "expected left side id to be found once"
        );
        // Both assignments are still in the tree.
        let ast = parser.ast();
        let Node::EventStatement { body, .. } = ast.node(ast.statements()[0]) else {
            panic!("expected event statement");
        };
        let Node::ListValue(entries) = ast.node(*body) else {
            panic!("expected body list");
        };
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn event_rejects_non_list_body() {
        let mut parser = Parser::from_string("country_event = 5");
        assert!(parser.event_parse());
        assert!(parser.has_error());
        let diag = &parser.get_errors()[0];
        assert_eq!(parser.diagnostics().message(diag.message), "expected `{`");
    }

    #[test]
    fn decision_parse_with_once_keys() {
        let text = "political_decisions = {\n  my_decision = {\n    potential = { tag = ENG }\n    allow = { money = 100 }\n  }\n}";
        let mut parser = Parser::from_string(text);
        assert!(parser.decision_parse());
        assert!(!parser.has_error());
    }

    #[test]
    fn duplicate_decision_key_errors() {
        let text = "political_decisions = { d = { allow = { } allow = { } } }";
        let mut parser = Parser::from_string(text);
        assert!(parser.decision_parse());
        assert!(parser.has_error());
    }

    #[test]
    fn lua_defines_parse() {
        let text = "-- defines\nNDefines = {\n  NCountry = {\n    YEARS = 10,\n    START_DATE = '1836.1.1',\n  },\n}\n";
        let mut parser = Parser::from_string(text);
        assert!(parser.lua_defines_parse());
        assert!(!parser.has_error(), "{:?}", parser.get_errors());
        let ast = parser.ast();
        assert_eq!(ast.statements().len(), 1);
    }

    #[test]
    fn csv_parser_basic() {
        let mut parser = CsvParser::from_string(";;a;b;;c;;");
        assert!(parser.parse_csv(false));
        assert!(!parser.has_error());
        let lines = parser.get_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].prefix_end(), 2);
        assert_eq!(lines[0].suffix_end(), 7);
        assert_eq!(lines[0].value_for(2), "a");
        assert_eq!(lines[0].value_for(4), "");
    }

    #[test]
    fn csv_windows_1252_line() {
        let bytes: &[u8] = b"W\xFCrttemberg;Wurtemberg;W\xFCrttemberg;;W\xFCrttemberg;";
        let mut parser = CsvParser::from_buffer(bytes);
        assert!(parser.parse_csv(false));
        let lines = parser.get_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].prefix_end(), 0);
        assert_eq!(lines[0].suffix_end(), 5);
        assert_eq!(lines[0].value_for(0), "W\u{fc}rttemberg");
        assert_eq!(lines[0].value_for(1), "Wurtemberg");
        assert_eq!(lines[0].value_for(3), "");
        assert_eq!(lines[0].value_for(4), "W\u{fc}rttemberg");
    }

    #[test]
    fn csv_missing_file_is_fatal() {
        let mut parser = CsvParser::from_file("no/such/file.csv");
        assert!(parser.has_fatal_error());
        assert!(!parser.parse_csv(false));
        assert!(parser.get_lines().is_empty());
    }

    #[test]
    fn csv_empty_buffer() {
        let mut parser = CsvParser::from_buffer(b"");
        assert!(!parser.has_fatal_error());
        assert!(parser.parse_csv(true));
        assert!(parser.get_lines().is_empty());
    }

    #[test]
    fn print_errors_renders_blocks() {
        let mut parser = Parser::from_string("a = { = }");
        parser.simple_parse();
        let mut out = Vec::new();
        parser.print_errors_to(&mut out).unwrap_or(());
        let text = String::from_utf8(out).unwrap_or_default();
        assert!(text.contains("error: expected DataSpecifier"), "got:\n{text}");
        assert!(text.contains('^'), "got:\n{text}");
    }

    #[test]
    fn get_position_resolves_lines() {
        let parser = simple("a = b\nccc = ddd\n");
        let ast = parser.ast();
        let second = ast.statements()[1];
        let pos = parser.get_position(second);
        assert_eq!(pos.start_line, 2);
        assert_eq!(pos.start_column, 1);
        assert_eq!(pos.end_line, 2);
    }

    #[test]
    fn gbk_section_sign_buffer() {
        // A GBK-tagged buffer with the colour-code byte.
        let file = SourceFile::new(
            None,
            SourceBuffer::new(vec![0xA7, b'R'], pdx_source::Encoding::Gbk),
        );
        assert_eq!(file.text(), "\u{a7}R");
        assert_eq!(&file.text().as_bytes()[..2], &[0xC2, 0xA7]);
    }
}
