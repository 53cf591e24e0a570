//! Transcoding to canonical UTF-8.
//!
//! Every converter produces three things: the UTF-8 text, a
//! [`PositionMap`] tying each output byte back to the source byte it came
//! from, and a list of [`ConvertIssue`]s for input the encoding cannot
//! represent. Issues never abort a conversion; the offending bytes are
//! skipped and the rest of the buffer still converts.

mod gbk;
mod tables;

use crate::{Encoding, PositionMap};

pub use tables::{WINDOWS_1251_TO_UTF8, WINDOWS_1252_TO_UTF8};

/// What went wrong at one spot of the input.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ConvertIssueKind {
    /// A byte the code page leaves undefined.
    UnmappedByte,
    /// A malformed multi-byte sequence (UTF-8/16/32, GBK).
    InvalidSequence,
    /// A GBK user-defined sequence; these are rejected outright.
    UserDefinedSequence,
}

/// One skipped spot of the input, by source byte offset.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ConvertIssue {
    pub kind: ConvertIssueKind,
    pub pos: u32,
    pub len: u32,
}

/// Result of a conversion.
#[derive(Debug, Default)]
pub struct Transcoded {
    pub text: String,
    pub map: PositionMap,
    pub issues: Vec<ConvertIssue>,
}

/// UTF-8 output being accumulated together with its per-byte source
/// offsets.
pub(crate) struct Output {
    text: String,
    offsets: Vec<u32>,
    issues: Vec<ConvertIssue>,
}

impl Output {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Output {
            text: String::with_capacity(capacity),
            offsets: Vec::with_capacity(capacity),
            issues: Vec::new(),
        }
    }

    /// Append `s`, attributing every produced byte to source offset `src`.
    pub(crate) fn push_str(&mut self, s: &str, src: usize) {
        self.text.push_str(s);
        let src = saturate(src);
        self.offsets.resize(self.text.len(), src);
    }

    pub(crate) fn push_char(&mut self, c: char, src: usize) {
        let mut buf = [0u8; 4];
        self.push_str(c.encode_utf8(&mut buf), src);
    }

    pub(crate) fn issue(&mut self, kind: ConvertIssueKind, pos: usize, len: usize) {
        self.issues.push(ConvertIssue {
            kind,
            pos: saturate(pos),
            len: saturate(len),
        });
    }

    pub(crate) fn finish(self, source_len: usize) -> Transcoded {
        Transcoded {
            text: self.text,
            map: PositionMap::from_offsets(self.offsets, source_len),
            issues: self.issues,
        }
    }
}

#[inline]
fn saturate(v: usize) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}

/// Convert a source buffer to UTF-8 according to its encoding tag.
pub fn transcode(bytes: &[u8], encoding: Encoding) -> Transcoded {
    match encoding {
        Encoding::Unknown | Encoding::Ascii | Encoding::Utf8 => from_utf8_ish(bytes),
        Encoding::Windows1252 => from_single_byte(bytes, &WINDOWS_1252_TO_UTF8),
        Encoding::Windows1251 => from_single_byte(bytes, &WINDOWS_1251_TO_UTF8),
        Encoding::Gbk => gbk::transcode(bytes),
        Encoding::Utf16Le => from_utf16(bytes, false),
        Encoding::Utf16Be => from_utf16(bytes, true),
        Encoding::Utf32 => from_utf32(bytes),
    }
}

/// ASCII/UTF-8 input: usually the identity map, with BOM stripping and
/// per-byte recovery when the buffer lies about being UTF-8.
fn from_utf8_ish(bytes: &[u8]) -> Transcoded {
    const BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
    let (start, body) = if bytes.starts_with(BOM) {
        (BOM.len(), &bytes[BOM.len()..])
    } else {
        (0, bytes)
    };

    if start == 0 {
        if let Ok(text) = std::str::from_utf8(body) {
            return Transcoded {
                text: text.to_string(),
                map: PositionMap::identity(bytes.len()),
                issues: Vec::new(),
            };
        }
    }

    let mut out = Output::with_capacity(body.len());
    let mut i = 0;
    while i < body.len() {
        match std::str::from_utf8(&body[i..]) {
            Ok(valid) => {
                push_valid_utf8(&mut out, valid, start + i);
                break;
            }
            Err(err) => {
                let valid_len = err.valid_up_to();
                let valid = std::str::from_utf8(&body[i..i + valid_len]).unwrap_or_default();
                push_valid_utf8(&mut out, valid, start + i);
                let bad_len = err.error_len().unwrap_or(body.len() - i - valid_len);
                out.issue(
                    ConvertIssueKind::InvalidSequence,
                    start + i + valid_len,
                    bad_len,
                );
                i += valid_len + bad_len;
            }
        }
    }
    out.finish(bytes.len())
}

/// Append already-valid UTF-8 with byte-accurate offsets.
fn push_valid_utf8(out: &mut Output, s: &str, src_base: usize) {
    for (rel, c) in s.char_indices() {
        out.push_char(c, src_base + rel);
    }
}

/// Windows-125x: low half passes through, high half goes through the
/// mapping table. Unmapped bytes are reported and skipped.
fn from_single_byte(bytes: &[u8], table: &[Option<&str>; 128]) -> Transcoded {
    let mut out = Output::with_capacity(bytes.len());
    for (i, &b) in bytes.iter().enumerate() {
        if b < 0x80 {
            out.push_char(b as char, i);
        } else {
            match table[(b & 0x7F) as usize] {
                Some(mapped) => out.push_str(mapped, i),
                None => out.issue(ConvertIssueKind::UnmappedByte, i, 1),
            }
        }
    }
    out.finish(bytes.len())
}

fn from_utf16(bytes: &[u8], big_endian: bool) -> Transcoded {
    let mut out = Output::with_capacity(bytes.len() / 2);
    let mut i = 0;

    // Strip a matching BOM.
    if bytes.len() >= 2 {
        let bom = [bytes[0], bytes[1]];
        if (!big_endian && bom == [0xFF, 0xFE]) || (big_endian && bom == [0xFE, 0xFF]) {
            i = 2;
        }
    }

    let unit_at = |at: usize| -> Option<u16> {
        let pair = bytes.get(at..at + 2)?;
        Some(if big_endian {
            u16::from_be_bytes([pair[0], pair[1]])
        } else {
            u16::from_le_bytes([pair[0], pair[1]])
        })
    };

    while i < bytes.len() {
        let Some(unit) = unit_at(i) else {
            // Odd trailing byte.
            out.issue(ConvertIssueKind::InvalidSequence, i, bytes.len() - i);
            break;
        };
        match unit {
            0xD800..=0xDBFF => match unit_at(i + 2) {
                Some(low @ 0xDC00..=0xDFFF) => {
                    let c = 0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                    match char::from_u32(c) {
                        Some(c) => out.push_char(c, i),
                        None => out.issue(ConvertIssueKind::InvalidSequence, i, 4),
                    }
                    i += 4;
                    continue;
                }
                _ => {
                    out.issue(ConvertIssueKind::InvalidSequence, i, 2);
                    i += 2;
                    continue;
                }
            },
            0xDC00..=0xDFFF => {
                out.issue(ConvertIssueKind::InvalidSequence, i, 2);
            }
            _ => match char::from_u32(u32::from(unit)) {
                Some(c) => out.push_char(c, i),
                None => out.issue(ConvertIssueKind::InvalidSequence, i, 2),
            },
        }
        i += 2;
    }
    out.finish(bytes.len())
}

fn from_utf32(bytes: &[u8]) -> Transcoded {
    let mut out = Output::with_capacity(bytes.len() / 4);
    let mut i = 0;

    // BOM decides endianness; little-endian without one.
    let mut big_endian = false;
    if bytes.len() >= 4 {
        if bytes[..4] == [0x00, 0x00, 0xFE, 0xFF] {
            big_endian = true;
            i = 4;
        } else if bytes[..4] == [0xFF, 0xFE, 0x00, 0x00] {
            i = 4;
        }
    }

    while i < bytes.len() {
        let Some(quad) = bytes.get(i..i + 4) else {
            out.issue(ConvertIssueKind::InvalidSequence, i, bytes.len() - i);
            break;
        };
        let unit = if big_endian {
            u32::from_be_bytes([quad[0], quad[1], quad[2], quad[3]])
        } else {
            u32::from_le_bytes([quad[0], quad[1], quad[2], quad[3]])
        };
        match char::from_u32(unit) {
            Some(c) => out.push_char(c, i),
            None => out.issue(ConvertIssueKind::InvalidSequence, i, 4),
        }
        i += 4;
    }
    out.finish(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ascii_is_identity() {
        let result = transcode(b"a = b", Encoding::Ascii);
        assert_eq!(result.text, "a = b");
        assert!(result.map.is_identity());
        assert!(result.issues.is_empty());
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let result = transcode(b"\xEF\xBB\xBFkey", Encoding::Utf8);
        assert_eq!(result.text, "key");
        assert_eq!(result.map.to_source(0), 3);
    }

    #[test]
    fn invalid_utf8_is_skipped_with_issue() {
        let result = transcode(b"ab\xFFcd", Encoding::Utf8);
        assert_eq!(result.text, "abcd");
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, ConvertIssueKind::InvalidSequence);
        assert_eq!(result.issues[0].pos, 2);
        // 'c' in the output maps to source offset 3.
        assert_eq!(result.map.to_source(2), 3);
    }

    #[test]
    fn windows_1252_letters() {
        // "Württemberg"
        let result = transcode(b"W\xFCrttemberg", Encoding::Windows1252);
        assert_eq!(result.text, "W\u{fc}rttemberg");
        assert!(result.issues.is_empty());
        // The two UTF-8 bytes of u-umlaut both map to source offset 1.
        assert_eq!(result.map.to_source(1), 1);
        assert_eq!(result.map.to_source(2), 1);
        assert_eq!(result.map.to_source(3), 2);
    }

    #[test]
    fn windows_1252_polish_quirk() {
        let result = transcode(b"\x8F", Encoding::Windows1252);
        assert_eq!(result.text, "\u{118}");
    }

    #[test]
    fn windows_1252_unmapped_byte() {
        let result = transcode(b"a\x81b", Encoding::Windows1252);
        assert_eq!(result.text, "ab");
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, ConvertIssueKind::UnmappedByte);
        assert_eq!(result.issues[0].pos, 1);
    }

    #[test]
    fn windows_1251_cyrillic() {
        // "Да"
        let result = transcode(b"\xC4\xE0", Encoding::Windows1251);
        assert_eq!(result.text, "\u{414}\u{430}");
    }

    #[test]
    fn utf16_le_basic() {
        let result = transcode(b"a\x00b\x00", Encoding::Utf16Le);
        assert_eq!(result.text, "ab");
        assert_eq!(result.map.to_source(1), 2);
    }

    #[test]
    fn utf16_be_with_bom() {
        let result = transcode(b"\xFE\xFF\x00a\x00b", Encoding::Utf16Be);
        assert_eq!(result.text, "ab");
        assert_eq!(result.map.to_source(0), 2);
    }

    #[test]
    fn utf16_surrogate_pair() {
        // U+1F600 as LE surrogates D83D DE00.
        let result = transcode(b"\x3D\xD8\x00\xDE", Encoding::Utf16Le);
        assert_eq!(result.text, "\u{1F600}");
        assert!(result.issues.is_empty());
    }

    #[test]
    fn utf16_lone_surrogate() {
        let result = transcode(b"\x3D\xD8a\x00", Encoding::Utf16Le);
        assert_eq!(result.text, "a");
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn utf32_le_basic() {
        let result = transcode(b"a\x00\x00\x00", Encoding::Utf32);
        assert_eq!(result.text, "a");
    }
}
