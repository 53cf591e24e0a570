//! Source-snippet rendering.
//!
//! Renders each diagnostic as a block: a severity heading, the file path,
//! then one band per annotation with a line-number gutter and a pointer
//! under the exact byte range (`^~~~` for primary, `---` for secondary).
//! Multi-line ranges show their first and last lines around an ellipsis
//! band.
//!
//! The renderer is generic over [`io::Write`] so the same code fills
//! strings and writes to terminal sinks. Output is always UTF-8;
//! annotation ranges are source-buffer offsets and get mapped into the
//! transcoded text through the file's position map.

use std::io::{self, Write};

use pdx_source::SourceFile;

use crate::{Annotation, DiagnosticEngine, Diagnostic, Severity};

/// ANSI escapes used when colors are on.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // bold red
    pub const WARNING: &str = "\x1b[1;33m"; // bold yellow
    pub const INFO: &str = "\x1b[1;36m"; // bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // bold green
    pub const SECONDARY: &str = "\x1b[1;34m"; // bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Renders the diagnostics of one engine against one source file.
pub struct DiagnosticRenderer<'a> {
    engine: &'a DiagnosticEngine,
    file: Option<&'a SourceFile>,
    /// Byte offsets of line starts in the transcoded text.
    line_starts: Vec<usize>,
    colors: bool,
}

impl<'a> DiagnosticRenderer<'a> {
    pub fn new(engine: &'a DiagnosticEngine, file: Option<&'a SourceFile>) -> Self {
        let line_starts = file.map_or_else(Vec::new, |f| {
            let mut starts = vec![0usize];
            starts.extend(memchr::memchr_iter(b'\n', f.text().as_bytes()).map(|i| i + 1));
            starts
        });
        DiagnosticRenderer {
            engine,
            file,
            line_starts,
            colors: false,
        }
    }

    /// Enable ANSI colour escapes (for terminal-like sinks).
    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Render every diagnostic in insertion order.
    pub fn render_all<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for diagnostic in self.engine.diagnostics() {
            self.render(w, diagnostic)?;
        }
        Ok(())
    }

    /// Render one diagnostic block.
    pub fn render<W: Write>(&self, w: &mut W, diagnostic: &Diagnostic) -> io::Result<()> {
        self.write_severity(w, diagnostic.severity())?;
        writeln!(w, ": {}", self.engine.message(diagnostic.message))?;

        if let Some(path) = self.file.and_then(SourceFile::path) {
            if !path.as_os_str().is_empty() {
                writeln!(w, "  --> {}", path.display())?;
            }
        }

        for annotation in &diagnostic.annotations {
            self.render_annotation(w, annotation)?;
        }
        writeln!(w)
    }

    fn write_severity<W: Write>(&self, w: &mut W, severity: Severity) -> io::Result<()> {
        if self.colors {
            let color = match severity {
                Severity::Error => colors::ERROR,
                Severity::Warning => colors::WARNING,
                Severity::Info | Severity::Debug => colors::INFO,
                Severity::Fixit | Severity::Help => colors::HELP,
            };
            write!(w, "{color}{severity}{}", colors::RESET)
        } else {
            write!(w, "{severity}")
        }
    }

    fn render_annotation<W: Write>(&self, w: &mut W, annotation: &Annotation) -> io::Result<()> {
        let message = self.engine.message(annotation.message);

        let Some(file) = self.file else {
            return writeln!(w, "   = {message}");
        };
        if annotation.location.is_synthesized() {
            return writeln!(w, "   = {message}");
        }

        let text = file.text();
        let map = file.position_map();
        let start = map.to_output(annotation.location.start() as usize).min(text.len());
        let end = map
            .to_output(annotation.location.end() as usize)
            .clamp(start, text.len());

        let start_line = self.line_of(start);
        let end_line = self.line_of(end.saturating_sub(1).max(start));

        let last_line_no = end_line + 1;
        let gutter = last_line_no.to_string().len().max(2);

        writeln!(w, "{:gutter$} |", "")?;
        if start_line == end_line {
            self.render_single_line(w, annotation, message, start_line, start, end, gutter)?;
        } else {
            self.render_multi_line(w, annotation, message, start_line, end_line, start, end, gutter)?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn render_single_line<W: Write>(
        &self,
        w: &mut W,
        annotation: &Annotation,
        message: &str,
        line: usize,
        start: usize,
        end: usize,
        gutter: usize,
    ) -> io::Result<()> {
        let (line_start, line_text) = self.line_text(line);
        writeln!(w, "{:>gutter$} | {line_text}", line + 1)?;

        let pad = char_width(&line_text_slice(line_text, line_start, start));
        let len = char_width(text_slice(self.text(), start, end)).max(1);
        let pointer = self.pointer(annotation, len);
        writeln!(w, "{:gutter$} | {:pad$}{pointer} {message}", "", "")
    }

    #[allow(clippy::too_many_arguments)]
    fn render_multi_line<W: Write>(
        &self,
        w: &mut W,
        annotation: &Annotation,
        message: &str,
        start_line: usize,
        end_line: usize,
        start: usize,
        end: usize,
        gutter: usize,
    ) -> io::Result<()> {
        // First line: pointer from the range start to the end of the line.
        let (first_start, first_text) = self.line_text(start_line);
        writeln!(w, "{:>gutter$} | {first_text}", start_line + 1)?;
        let pad = char_width(&line_text_slice(first_text, first_start, start));
        let first_len = char_width(first_text).saturating_sub(pad).max(1);
        writeln!(
            w,
            "{:gutter$} | {:pad$}{}",
            "",
            "",
            self.pointer(annotation, first_len)
        )?;

        if end_line > start_line + 1 {
            writeln!(w, "{:gutter$}...", "")?;
        }

        // Last line: pointer from column zero to the range end.
        let (last_start, last_text) = self.line_text(end_line);
        writeln!(w, "{:>gutter$} | {last_text}", end_line + 1)?;
        let len = char_width(&line_text_slice(last_text, last_start, end)).max(1);
        writeln!(w, "{:gutter$} | {} {message}", "", self.pointer(annotation, len))
    }

    fn pointer(&self, annotation: &Annotation, len: usize) -> String {
        let raw = if annotation.is_primary() {
            let mut p = String::from("^");
            p.push_str(&"~".repeat(len.saturating_sub(1)));
            p
        } else {
            "-".repeat(len.max(3))
        };
        if self.colors {
            let color = if annotation.is_primary() {
                colors::ERROR
            } else {
                colors::SECONDARY
            };
            format!("{color}{raw}{}", colors::RESET)
        } else {
            raw
        }
    }

    fn text(&self) -> &str {
        self.file.map_or("", |f| f.text())
    }

    /// Zero-based line index containing a text offset.
    fn line_of(&self, offset: usize) -> usize {
        self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Start offset and content of a line, without its terminator.
    fn line_text(&self, line: usize) -> (usize, &str) {
        let text = self.text();
        let start = self.line_starts.get(line).copied().unwrap_or(text.len());
        let end = self
            .line_starts
            .get(line + 1)
            .map_or(text.len(), |&next| next);
        let content = text.get(start..end).unwrap_or("");
        (start, content.trim_end_matches(['\n', '\r']))
    }
}

/// Slice of a line's text between its start offset and an absolute
/// offset, clamped to the line.
fn line_text_slice(line_text: &str, line_start: usize, abs: usize) -> String {
    let rel = abs.saturating_sub(line_start).min(line_text.len());
    line_text.get(..rel).unwrap_or("").to_string()
}

fn text_slice(text: &str, start: usize, end: usize) -> &str {
    text.get(start..end).unwrap_or("")
}

/// Display width in characters. Good enough for gutter alignment; the
/// game files do not use combining marks.
fn char_width(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdx_ir::NodeLocation;
    use pdx_source::{Encoding, SourceBuffer};
    use crate::ErrorKind;

    fn render_to_string(engine: &DiagnosticEngine, file: Option<&SourceFile>) -> String {
        let renderer = DiagnosticRenderer::new(engine, file);
        let mut out = Vec::new();
        renderer.render_all(&mut out).unwrap_or(());
        String::from_utf8(out).unwrap_or_default()
    }

    fn ascii_file(content: &str, path: Option<&str>) -> SourceFile {
        SourceFile::new(
            path.map(std::path::PathBuf::from),
            SourceBuffer::new(content.as_bytes().to_vec(), Encoding::Ascii),
        )
    }

    #[test]
    fn heading_and_path() {
        let file = ascii_file("a = b\n", Some("common/test.txt"));
        let mut engine = DiagnosticEngine::new();
        engine.semantic_error("something is off").finish();

        let text = render_to_string(&engine, Some(&file));
        assert!(text.contains("error: something is off"));
        assert!(text.contains("--> common/test.txt"));
    }

    #[test]
    fn missing_path_is_omitted() {
        let file = ascii_file("a = b\n", None);
        let mut engine = DiagnosticEngine::new();
        engine.semantic_error("oops").finish();

        let text = render_to_string(&engine, Some(&file));
        assert!(!text.contains("-->"));
    }

    #[test]
    fn primary_pointer_band() {
        let file = ascii_file("a = { b = }\n", None);
        let mut engine = DiagnosticEngine::new();
        engine
            .build(ErrorKind::ExpectedLiteral, "expected a value")
            .primary(NodeLocation::new(10, 11), "here")
            .finish();

        let text = render_to_string(&engine, Some(&file));
        assert!(text.contains(" 1 | a = { b = }"), "got:\n{text}");
        assert!(text.contains("^ here"), "got:\n{text}");
    }

    #[test]
    fn pointer_spans_range() {
        let file = ascii_file("first = second\n", None);
        let mut engine = DiagnosticEngine::new();
        engine
            .build(ErrorKind::SemanticWarning, "suspicious")
            .primary(NodeLocation::new(8, 14), "this value")
            .finish();

        let text = render_to_string(&engine, Some(&file));
        // Six characters: ^ plus five tildes.
        assert!(text.contains("^~~~~~ this value"), "got:\n{text}");
    }

    #[test]
    fn secondary_pointer_uses_dashes() {
        let file = ascii_file("a = { b }\n", None);
        let mut engine = DiagnosticEngine::new();
        engine
            .build(ErrorKind::SemanticError, "bad block")
            .primary(NodeLocation::new(6, 7), "here")
            .secondary(NodeLocation::new(4, 5), "block opened here")
            .finish();

        let text = render_to_string(&engine, Some(&file));
        assert!(text.contains("--- block opened here"), "got:\n{text}");
    }

    #[test]
    fn multi_line_range_shows_first_and_last() {
        let file = ascii_file("a = {\nb = c\nd = e\n}\n", None);
        let mut engine = DiagnosticEngine::new();
        engine
            .build(ErrorKind::SemanticInfo, "whole block")
            .primary(NodeLocation::new(4, 19), "spans lines")
            .finish();

        let text = render_to_string(&engine, Some(&file));
        assert!(text.contains(" 1 | a = {"), "got:\n{text}");
        assert!(text.contains(" 4 | }"), "got:\n{text}");
        assert!(text.contains("..."), "got:\n{text}");
    }

    #[test]
    fn synthesized_annotation_has_no_snippet() {
        let file = ascii_file("a = b\n", None);
        let mut engine = DiagnosticEngine::new();
        engine
            .build(ErrorKind::SemanticHelp, "try this instead")
            .primary(NodeLocation::synthesized(), "no source")
            .finish();

        let text = render_to_string(&engine, Some(&file));
        assert!(text.contains("   = no source"), "got:\n{text}");
        assert!(!text.contains('^'));
    }

    #[test]
    fn legacy_encoding_positions_map_to_original_bytes() {
        // Windows-1252 u-umlaut sits at source offset 1; after
        // transcoding the text has a two-byte char there.
        let file = SourceFile::new(
            None,
            SourceBuffer::new(b"W\xFCrttemberg = x\n".to_vec(), Encoding::Windows1252),
        );
        let mut engine = DiagnosticEngine::new();
        engine
            .build(ErrorKind::SemanticWarning, "name check")
            // Source-buffer range of "Württemberg": bytes 0..11.
            .primary(NodeLocation::new(0, 11), "this name")
            .finish();

        let text = render_to_string(&engine, Some(&file));
        assert!(text.contains("W\u{fc}rttemberg"), "got:\n{text}");
        // Eleven characters under the pointer.
        assert!(text.contains("^~~~~~~~~~~ this name"), "got:\n{text}");
    }

    #[test]
    fn colors_wrap_severity() {
        let file = ascii_file("a\n", None);
        let mut engine = DiagnosticEngine::new();
        engine.semantic_error("boom").finish();

        let renderer = DiagnosticRenderer::new(&engine, Some(&file)).with_colors(true);
        let mut out = Vec::new();
        renderer.render_all(&mut out).unwrap_or(());
        let text = String::from_utf8(out).unwrap_or_default();
        assert!(text.contains("\x1b[1;31m"));
        assert!(text.contains("\x1b[0m"));
    }

    #[test]
    fn blocks_render_in_insertion_order() {
        let file = ascii_file("a = b\n", None);
        let mut engine = DiagnosticEngine::new();
        engine.semantic_error("first").finish();
        engine.warning("second").finish();

        let text = render_to_string(&engine, Some(&file));
        let first = text.find("first").unwrap_or(usize::MAX);
        let second = text.find("second").unwrap_or(0);
        assert!(first < second);
    }
}
