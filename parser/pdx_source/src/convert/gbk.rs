//! GBK to UTF-8 conversion.
//!
//! The table lookup itself is `encoding_rs`; what this module adds is the
//! behavior the game files demand on top of plain GBK:
//!
//! - lone `0xA7` becomes `§` (the colour-code convention carried over
//!   from the Windows-1252 files);
//! - `0xA1` alone and the pair `0xAD 0xA1` both become the full-width
//!   exclamation mark `！` (seen in some localizations);
//! - the user-defined double-byte ranges are rejected rather than mapped
//!   to private-use code points.

use super::{ConvertIssueKind, Output, Transcoded};

/// Lead/trail pair in one of the user-defined GBK ranges.
#[inline]
fn is_user_defined(lead: u8, trail: u8) -> bool {
    match lead {
        0xAA..=0xAF | 0xF8..=0xFE => (0xA1..=0xFE).contains(&trail),
        0xA1..=0xA7 => (0x40..=0xA0).contains(&trail) && trail != 0x7F,
        _ => false,
    }
}

/// Decode one byte pair through the GBK table.
fn decode_pair(pair: &[u8]) -> Option<char> {
    let (text, _) = encoding_rs::GBK.decode_without_bom_handling(pair);
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != char::REPLACEMENT_CHARACTER => Some(c),
        _ => None,
    }
}

pub(super) fn transcode(bytes: &[u8]) -> Transcoded {
    let mut out = Output::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < 0x80 {
            out.push_char(b as char, i);
            i += 1;
            continue;
        }
        if b == 0x80 {
            // CP936 maps the bare 0x80 to the euro sign.
            out.push_char('\u{20AC}', i);
            i += 1;
            continue;
        }

        let trail = bytes.get(i + 1).copied();

        if let Some(t) = trail {
            if is_user_defined(b, t) {
                // Leads 0xA7 and 0xA1 keep their single-byte meaning, and
                // 0xAD 0xA1 keeps its pair meaning, even when the bytes
                // fall in a user-defined range.
                if b != 0xA7 && b != 0xA1 && !(b == 0xAD && t == 0xA1) {
                    out.issue(ConvertIssueKind::UserDefinedSequence, i, 2);
                    i += 2;
                    continue;
                }
            } else if let Some(c) = decode_pair(&bytes[i..i + 2]) {
                out.push_char(c, i);
                i += 2;
                continue;
            }
        }

        // The pair did not decode; apply the game-specific fallbacks.
        match b {
            0xA7 => {
                out.push_char('\u{00A7}', i);
                i += 1;
            }
            0xA1 => {
                out.push_char('\u{FF01}', i);
                i += 1;
            }
            0xAD if trail == Some(0xA1) => {
                out.push_char('\u{FF01}', i);
                i += 2;
            }
            _ => {
                out.issue(ConvertIssueKind::InvalidSequence, i, 1);
                i += 1;
            }
        }
    }
    out.finish(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ascii_passes_through() {
        let result = transcode(b"key = value");
        assert_eq!(result.text, "key = value");
        assert!(result.issues.is_empty());
    }

    #[test]
    fn section_sign_convention() {
        let result = transcode(b"\xA7Rred\xA7");
        assert_eq!(result.text, "\u{a7}Rred\u{a7}");
        assert!(result.issues.is_empty());
        // The section sign comes out as the two bytes C2 A7.
        assert_eq!(&result.text.as_bytes()[..2], &[0xC2, 0xA7]);
    }

    #[test]
    fn lone_a1_is_fullwidth_exclaim() {
        let result = transcode(b"\xA1");
        assert_eq!(result.text, "\u{ff01}");
    }

    #[test]
    fn ad_a1_is_fullwidth_exclaim() {
        let result = transcode(b"\xAD\xA1");
        assert_eq!(result.text, "\u{ff01}");
        assert_eq!(result.map.to_source(0), 0);
    }

    #[test]
    fn valid_double_byte() {
        // 0xBA 0xBA is U+6C49 (han4).
        let result = transcode(b"\xBA\xBA");
        assert_eq!(result.text, "\u{6C49}");
        assert!(result.issues.is_empty());
    }

    #[test]
    fn user_defined_range_rejected() {
        let result = transcode(b"a\xAA\xA1b");
        assert_eq!(result.text, "ab");
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, ConvertIssueKind::UserDefinedSequence);
        assert_eq!(result.issues[0].pos, 1);
        assert_eq!(result.issues[0].len, 2);
    }

    #[test]
    fn user_defined_low_trail_rejected() {
        // Lead 0xA2 with trail 0x41 sits in the rejected extension range.
        let result = transcode(b"\xA2\x41");
        assert_eq!(result.text, "");
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, ConvertIssueKind::UserDefinedSequence);
    }

    #[test]
    fn euro_sign() {
        let result = transcode(b"\x80");
        assert_eq!(result.text, "\u{20AC}");
    }

    #[test]
    fn position_map_spans_double_bytes() {
        let result = transcode(b"a\xBA\xBAb");
        // Output: 'a' + 3 bytes of U+6C49 + 'b'.
        assert_eq!(result.map.to_source(0), 0);
        assert_eq!(result.map.to_source(1), 1);
        assert_eq!(result.map.to_source(3), 1);
        assert_eq!(result.map.to_source(4), 3);
    }
}
