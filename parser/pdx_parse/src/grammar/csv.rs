//! Delimiter-separated values grammar.
//!
//! A line is a run of fields separated by the configured delimiter and
//! terminated by newline or end of input; blank lines produce nothing.
//! Only non-empty fields are stored, each with its absolute index; the
//! prefix/suffix bookkeeping follows the line model in
//! [`pdx_ir::LineObject`].
//!
//! Two value modes:
//! - plain (default): a field is any run of non-delimiter, non-newline
//!   characters, with the two-character sequence `\n` decoding to a
//!   newline (localisation escape);
//! - string-aware: a field starting with `"` is a quoted string with
//!   doubled-quote escaping (plus the C-style escapes), and text between
//!   the closing quote and the next delimiter is dropped.

use pdx_ir::LineObject;

use crate::chars::resolve_escape;
use crate::cursor::Cursor;

/// CSV parse configuration.
#[derive(Copy, Clone, Debug)]
pub struct CsvOptions {
    /// Field separator; `;` for the game's table files, with `,`, `:`,
    /// tab and `|` in use for particular data sets.
    pub delimiter: char,
    /// Enable quoted-string fields.
    pub handle_strings: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: ';',
            handle_strings: false,
        }
    }
}

/// Parse a whole buffer into line objects, in source order.
pub fn parse_csv_text(text: &str, options: CsvOptions) -> Vec<LineObject> {
    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if line.is_empty() {
            continue;
        }
        lines.push(parse_line(line, options));
    }
    lines
}

/// Parse one record.
fn parse_line(line: &str, options: CsvOptions) -> LineObject {
    let fields = split_fields(line, options);
    build_line(&fields)
}

/// Split a line into all of its fields, empty ones included.
fn split_fields(line: &str, options: CsvOptions) -> Vec<String> {
    let mut cursor = Cursor::new(line);
    let mut fields = Vec::new();
    loop {
        let field = if options.handle_strings && cursor.peek() == Some('"') {
            let value = parse_string_field(&mut cursor);
            // Drop anything between the closing quote and the separator.
            cursor.eat_while(|c| c != options.delimiter);
            value
        } else {
            parse_plain_field(&mut cursor, options)
        };
        fields.push(field);
        if !cursor.eat(options.delimiter) {
            break;
        }
    }
    fields
}

fn parse_plain_field(cursor: &mut Cursor<'_>, options: CsvOptions) -> String {
    let mut value = String::new();
    while let Some(c) = cursor.peek() {
        if c == options.delimiter {
            break;
        }
        if !options.handle_strings && c == '\\' && cursor.peek_second() == Some('n') {
            cursor.bump();
            cursor.bump();
            value.push('\n');
            continue;
        }
        value.push(c);
        cursor.bump();
    }
    value
}

/// Quoted field: `""` escapes a quote, backslash escapes apply, and a
/// missing closing quote swallows the rest of the line.
fn parse_string_field(cursor: &mut Cursor<'_>) -> String {
    let mut value = String::new();
    cursor.bump();
    while let Some(c) = cursor.bump() {
        match c {
            '"' => {
                if cursor.eat('"') {
                    value.push('"');
                } else {
                    break;
                }
            }
            '\\' => match cursor.peek().and_then(resolve_escape) {
                Some(resolved) => {
                    value.push(resolved);
                    cursor.bump();
                }
                None => value.push('\\'),
            },
            _ => value.push(c),
        }
    }
    value
}

/// Assemble the line model from its fields.
fn build_line(fields: &[String]) -> LineObject {
    let mut line = LineObject::new();
    let field_count = u32::try_from(fields.len()).unwrap_or(u32::MAX);

    let mut first_stored = None;
    let mut last_stored = None;
    for (index, field) in fields.iter().enumerate() {
        if field.is_empty() {
            continue;
        }
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        if first_stored.is_none() {
            first_stored = Some(index);
        }
        last_stored = Some(index);
        line.push_value(index, field.clone());
    }

    match (first_stored, last_stored) {
        (Some(first), Some(last)) => {
            line.set_prefix_end(first);
            // A line closed by a separator keeps its final empty field
            // out of the count.
            if last + 1 == field_count {
                line.set_suffix_end(field_count);
            } else {
                line.set_suffix_end(field_count - 1);
            }
        }
        _ => {
            // Separators only.
            line.set_prefix_end(0);
            line.set_suffix_end(field_count);
        }
    }
    line
}
