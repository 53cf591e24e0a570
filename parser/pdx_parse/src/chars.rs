//! Character classes of the script dialect.
//!
//! Identifier characters are the ASCII set the games accept plus the
//! non-ASCII letters reachable through the Windows-1252 and Windows-1251
//! identifier byte ranges. The byte ranges apply to files of either code
//! page, so the character-level set here is the union of both mappings
//! (which is why a few oddballs like `\u{2019}` and `\u{00D7}` appear:
//! they are what the shared bytes decode to in Windows-1252).

/// ASCII punctuation accepted inside identifiers.
const IDENT_PUNCTUATION: &str = "+:@%&'-.";

/// Whether `c` may appear in a script identifier.
#[inline]
pub fn is_ident_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == '_' || IDENT_PUNCTUATION.contains(c);
    }
    matches!(
        c,
        '\u{00A1}'..='\u{00A3}'
        | '\u{00A5}'
        | '\u{00A8}'
        | '\u{00AA}'
        | '\u{00AF}'
        | '\u{00B2}'..='\u{00B4}'
        | '\u{00B8}'
        | '\u{00BA}'
        | '\u{00BC}'..='\u{00FF}'
        | '\u{0118}'
        | '\u{0152}'..='\u{0153}'
        | '\u{0160}'..='\u{0161}'
        | '\u{0178}'
        | '\u{017D}'..='\u{017E}'
        | '\u{0192}'
        | '\u{0401}'..='\u{040C}'
        | '\u{040E}'..='\u{044F}'
        | '\u{0451}'..='\u{045C}'
        | '\u{045E}'..='\u{045F}'
        | '\u{0490}'..='\u{0491}'
        | '\u{2014}'
        | '\u{2019}'
        | '\u{20AC}'
    )
}

/// Raw-mode string character: anything from space upward, plus the few
/// control characters the game files actually contain (BEL, TAB, LF, CR).
#[inline]
pub fn is_raw_string_char(c: char) -> bool {
    c >= '\u{20}' || matches!(c, '\u{07}' | '\u{09}' | '\u{0A}' | '\u{0D}')
}

/// Escape-mode string character: anything from space upward except DEL.
#[inline]
pub fn is_escaped_string_char(c: char) -> bool {
    c >= '\u{20}' && c != '\u{7F}'
}

/// Resolve a C-style escape symbol; `None` for unknown escapes.
#[inline]
pub fn resolve_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\'' => Some('\''),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}

/// First character of a Lua-defines identifier.
#[inline]
pub fn is_lua_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Continuation character of a Lua-defines identifier.
#[inline]
pub fn is_lua_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Character of a Lua-defines numeric value (`0.5`, `-3`, dates).
#[inline]
pub fn is_lua_value_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_identifier_set() {
        for c in "abzAZ09_+:@%&'-.".chars() {
            assert!(is_ident_char(c), "{c:?} must be an identifier char");
        }
        for c in "={}\" \t\n#;,".chars() {
            assert!(!is_ident_char(c), "{c:?} must not be an identifier char");
        }
    }

    #[test]
    fn windows_1252_letters_are_identifier_chars() {
        for c in "\u{fc}\u{e9}\u{c0}\u{df}\u{160}\u{152}".chars() {
            assert!(is_ident_char(c), "{c:?} must be an identifier char");
        }
    }

    #[test]
    fn windows_1251_letters_are_identifier_chars() {
        // А, я, Ё, ў, Ґ
        for c in "\u{410}\u{44f}\u{401}\u{45e}\u{490}".chars() {
            assert!(is_ident_char(c), "{c:?} must be an identifier char");
        }
    }

    #[test]
    fn unrelated_unicode_is_rejected() {
        for c in "\u{3b1}\u{4e2d}\u{1F600}".chars() {
            assert!(!is_ident_char(c), "{c:?} must not be an identifier char");
        }
    }

    #[test]
    fn raw_string_chars() {
        assert!(is_raw_string_char('a'));
        assert!(is_raw_string_char('\u{07}'));
        assert!(is_raw_string_char('\n'));
        assert!(!is_raw_string_char('\u{01}'));
    }

    #[test]
    fn escaped_string_chars() {
        assert!(is_escaped_string_char('a'));
        assert!(!is_escaped_string_char('\n'));
        assert!(!is_escaped_string_char('\u{7F}'));
    }

    #[test]
    fn escape_symbols() {
        assert_eq!(resolve_escape('n'), Some('\n'));
        assert_eq!(resolve_escape('t'), Some('\t'));
        assert_eq!(resolve_escape('"'), Some('"'));
        assert_eq!(resolve_escape('x'), None);
    }

    #[test]
    fn lua_classes() {
        assert!(is_lua_ident_start('N'));
        assert!(is_lua_ident_start('_'));
        assert!(!is_lua_ident_start('3'));
        assert!(is_lua_ident_char('3'));
        assert!(is_lua_value_char('-'));
        assert!(is_lua_value_char('.'));
        assert!(!is_lua_value_char('x'));
    }
}
