//! Source encodings the toolkit understands.

use std::fmt;

/// Encoding tag carried by every source buffer.
///
/// `Unknown` means detection found nothing plausible; the buffer is then
/// treated as already-UTF-8 bytes and conversion is skipped.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Encoding {
    #[default]
    Unknown,
    Ascii,
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32,
    Windows1252,
    Windows1251,
    Gbk,
}

impl Encoding {
    /// Encodings whose bytes are already valid UTF-8 output.
    #[inline]
    pub const fn is_utf8_compatible(self) -> bool {
        matches!(self, Encoding::Unknown | Encoding::Ascii | Encoding::Utf8)
    }

    /// Encodings the detector can produce (§ the single-byte code pages
    /// plus the two trivial classes).
    #[inline]
    pub const fn is_detectable(self) -> bool {
        matches!(
            self,
            Encoding::Ascii | Encoding::Utf8 | Encoding::Windows1252 | Encoding::Windows1251
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Unknown => "unknown",
            Encoding::Ascii => "ASCII",
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Le => "UTF-16-LE",
            Encoding::Utf16Be => "UTF-16-BE",
            Encoding::Utf32 => "UTF-32",
            Encoding::Windows1252 => "Windows-1252",
            Encoding::Windows1251 => "Windows-1251",
            Encoding::Gbk => "GBK",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_compatibility() {
        assert!(Encoding::Ascii.is_utf8_compatible());
        assert!(Encoding::Utf8.is_utf8_compatible());
        assert!(Encoding::Unknown.is_utf8_compatible());
        assert!(!Encoding::Windows1252.is_utf8_compatible());
        assert!(!Encoding::Gbk.is_utf8_compatible());
    }

    #[test]
    fn detectable_set() {
        assert!(Encoding::Ascii.is_detectable());
        assert!(Encoding::Utf8.is_detectable());
        assert!(Encoding::Windows1252.is_detectable());
        assert!(Encoding::Windows1251.is_detectable());
        assert!(!Encoding::Gbk.is_detectable());
        assert!(!Encoding::Utf16Le.is_detectable());
    }

    #[test]
    fn display_names() {
        assert_eq!(Encoding::Windows1252.to_string(), "Windows-1252");
        assert_eq!(Encoding::Utf8.to_string(), "UTF-8");
    }
}
