//! Error recovery.
//!
//! Recovery is one explicit operation: skip forward to the `}` that
//! closes the current brace depth, or to end of input. Braces inside
//! strings and comments do not count. The parser calls this after
//! emitting a parse error and then continues in the enclosing
//! production.

use crate::cursor::Cursor;

/// Advance to the next `}` at the current depth (counting nested braces
/// opened along the way) or to end of input.
///
/// The closing brace itself is not consumed, so the enclosing list
/// production can match it. Returns `true` when a brace was found.
pub fn skip_to_balanced_brace(cursor: &mut Cursor<'_>) -> bool {
    let mut depth = 0usize;
    while let Some(c) = cursor.peek() {
        match c {
            '}' => {
                if depth == 0 {
                    return true;
                }
                depth -= 1;
                cursor.bump();
            }
            '{' => {
                depth += 1;
                cursor.bump();
            }
            '"' => skip_string(cursor),
            '#' => {
                cursor.eat_while(|c| c != '\n');
            }
            _ => {
                cursor.bump();
            }
        }
    }
    false
}

/// Skip a quoted string during recovery, tolerating a missing closer.
fn skip_string(cursor: &mut Cursor<'_>) {
    cursor.bump();
    while let Some(c) = cursor.bump() {
        match c {
            '"' => return,
            '\\' => {
                cursor.bump();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_closing_brace() {
        let mut cursor = Cursor::new("garbage !!! }rest");
        assert!(skip_to_balanced_brace(&mut cursor));
        assert_eq!(cursor.peek(), Some('}'));
    }

    #[test]
    fn skips_nested_blocks() {
        let mut cursor = Cursor::new("bad { inner { deep } } more } tail");
        assert!(skip_to_balanced_brace(&mut cursor));
        cursor.bump();
        assert!(cursor.starts_with(" tail"));
    }

    #[test]
    fn braces_in_strings_do_not_count() {
        let mut cursor = Cursor::new("\"}\" still going }");
        assert!(skip_to_balanced_brace(&mut cursor));
        cursor.bump();
        assert!(cursor.is_eof());
    }

    #[test]
    fn braces_in_comments_do_not_count() {
        let mut cursor = Cursor::new("# } comment\n}");
        assert!(skip_to_balanced_brace(&mut cursor));
        assert_eq!(cursor.pos(), 12);
    }

    #[test]
    fn eof_without_brace() {
        let mut cursor = Cursor::new("no brace here");
        assert!(!skip_to_balanced_brace(&mut cursor));
        assert!(cursor.is_eof());
    }
}
