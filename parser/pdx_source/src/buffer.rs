//! Source buffers and files.
//!
//! A [`SourceBuffer`] is the immutable bytes of one input plus its
//! encoding tag. A [`SourceFile`] bundles the buffer with its path (if it
//! has one) and the transcoded UTF-8 view the parser works on; locations
//! reported downstream always refer to the original buffer, via the
//! file's position map.

use std::path::{Path, PathBuf};

use crate::convert::{self, ConvertIssue};
use crate::{detect, Encoding, PositionMap};

/// Immutable byte storage with its encoding tag.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    encoding: Encoding,
}

impl SourceBuffer {
    /// Adopt bytes with a known encoding.
    pub fn new(bytes: Vec<u8>, encoding: Encoding) -> Self {
        SourceBuffer { bytes, encoding }
    }

    /// Adopt bytes, auto-detecting among the detectable encodings.
    pub fn detect(bytes: Vec<u8>) -> Self {
        let detection = detect::detect(&bytes);
        SourceBuffer {
            bytes,
            encoding: detection.encoding,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// One loaded input: original bytes, optional path, and the canonical
/// UTF-8 text with its position map back into the original bytes.
#[derive(Debug)]
pub struct SourceFile {
    path: Option<PathBuf>,
    buffer: SourceBuffer,
    text: String,
    map: PositionMap,
    issues: Vec<ConvertIssue>,
}

impl SourceFile {
    /// Build a file from a buffer, transcoding it up front.
    pub fn new(path: Option<PathBuf>, buffer: SourceBuffer) -> Self {
        let transcoded = convert::transcode(buffer.bytes(), buffer.encoding());
        SourceFile {
            path,
            buffer,
            text: transcoded.text,
            map: transcoded.map,
            issues: transcoded.issues,
        }
    }

    /// In-memory source with auto-detected encoding and no path.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        SourceFile::new(None, SourceBuffer::detect(bytes))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }

    pub fn encoding(&self) -> Encoding {
        self.buffer.encoding()
    }

    /// The canonical UTF-8 text the parser consumes.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Position map from text offsets back to buffer offsets.
    pub fn position_map(&self) -> &PositionMap {
        &self.map
    }

    /// Conversion issues found while transcoding; the integration layer
    /// turns these into diagnostics.
    pub fn convert_issues(&self) -> &[ConvertIssue] {
        &self.issues
    }

    /// Map a byte range of the text back to a byte range of the buffer.
    pub fn range_to_source(&self, range: std::ops::Range<usize>) -> std::ops::Range<usize> {
        self.map.to_source(range.start)..self.map.to_source(range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detect_on_construction() {
        let buffer = SourceBuffer::detect(b"plain ascii".to_vec());
        assert_eq!(buffer.encoding(), Encoding::Ascii);

        let buffer = SourceBuffer::detect("caf\u{e9}".as_bytes().to_vec());
        assert_eq!(buffer.encoding(), Encoding::Utf8);
    }

    #[test]
    fn file_transcodes_legacy_bytes() {
        let buffer = SourceBuffer::new(b"W\xFCrttemberg".to_vec(), Encoding::Windows1252);
        let file = SourceFile::new(None, buffer);
        assert_eq!(file.text(), "W\u{fc}rttemberg");
        assert_eq!(file.encoding(), Encoding::Windows1252);
        // Text range of "rttemberg" maps back to buffer offsets 2..11.
        assert_eq!(file.range_to_source(3..12), 2..11);
    }

    #[test]
    fn file_keeps_path() {
        let buffer = SourceBuffer::new(b"x".to_vec(), Encoding::Ascii);
        let file = SourceFile::new(Some(PathBuf::from("events/foo.txt")), buffer);
        assert_eq!(file.path(), Some(Path::new("events/foo.txt")));
    }

    #[test]
    fn empty_buffer_is_valid() {
        let file = SourceFile::from_bytes(Vec::new());
        assert_eq!(file.text(), "");
        assert!(file.buffer().is_empty());
        assert!(file.convert_issues().is_empty());
    }
}
