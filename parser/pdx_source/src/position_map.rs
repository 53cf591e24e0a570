//! Output-to-source byte position mapping.
//!
//! Transcoding changes byte widths, so positions in the UTF-8 text the
//! parser sees do not match positions in the file on disk. The converter
//! records, for every output byte, the offset of the input byte it came
//! from; diagnostics use the map in both directions.

/// Monotonic map from transcoded-output byte offsets to source offsets.
#[derive(Clone, Debug, Default)]
pub struct PositionMap {
    /// `offsets[i]` is the source offset of output byte `i`. `None` is
    /// the identity map (ASCII/UTF-8 sources).
    offsets: Option<Vec<u32>>,
    /// Source length in bytes, for clamping end-of-input positions.
    source_len: u32,
}

impl PositionMap {
    /// Identity map for sources that are already UTF-8.
    pub fn identity(source_len: usize) -> Self {
        PositionMap {
            offsets: None,
            source_len: saturate(source_len),
        }
    }

    /// Build from explicit per-output-byte source offsets.
    pub fn from_offsets(offsets: Vec<u32>, source_len: usize) -> Self {
        debug_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        PositionMap {
            offsets: Some(offsets),
            source_len: saturate(source_len),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.offsets.is_none()
    }

    /// Source offset of an output byte. Offsets at or past the end of the
    /// output map to the end of the source.
    pub fn to_source(&self, output_pos: usize) -> usize {
        match &self.offsets {
            None => output_pos.min(self.source_len as usize),
            Some(offsets) => offsets
                .get(output_pos)
                .map_or(self.source_len as usize, |&off| off as usize),
        }
    }

    /// First output byte at or after a source offset.
    pub fn to_output(&self, source_pos: usize) -> usize {
        match &self.offsets {
            None => source_pos.min(self.source_len as usize),
            Some(offsets) => {
                let pos = saturate(source_pos);
                offsets.partition_point(|&off| off < pos)
            }
        }
    }
}

#[inline]
fn saturate(v: usize) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_roundtrip() {
        let map = PositionMap::identity(10);
        assert!(map.is_identity());
        assert_eq!(map.to_source(4), 4);
        assert_eq!(map.to_output(4), 4);
        // Clamped at the end.
        assert_eq!(map.to_source(50), 10);
    }

    #[test]
    fn expanding_map() {
        // One source byte expanding to two output bytes (e.g. 0xA7 -> C2 A7).
        // Source: [A7 41], output: [C2 A7 41].
        let map = PositionMap::from_offsets(vec![0, 0, 1], 2);
        assert!(!map.is_identity());
        assert_eq!(map.to_source(0), 0);
        assert_eq!(map.to_source(1), 0);
        assert_eq!(map.to_source(2), 1);
        assert_eq!(map.to_source(3), 2);

        assert_eq!(map.to_output(0), 0);
        assert_eq!(map.to_output(1), 2);
        assert_eq!(map.to_output(2), 3);
    }

    #[test]
    fn shrinking_map() {
        // UTF-16-LE "ab": source [61 00 62 00] -> output [61 62].
        let map = PositionMap::from_offsets(vec![0, 2], 4);
        assert_eq!(map.to_source(0), 0);
        assert_eq!(map.to_source(1), 2);
        assert_eq!(map.to_source(2), 4);
        assert_eq!(map.to_output(2), 1);
        assert_eq!(map.to_output(3), 2);
    }
}
