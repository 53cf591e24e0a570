//! CSV line model.
//!
//! A [`LineObject`] stores only the non-empty fields of a record, each
//! tagged with its absolute field index, plus two bounds:
//!
//! - `prefix_end`: the count of leading empty fields;
//! - `suffix_end`: the line's field count (one past the last field that
//!   counts, whether a trailing separator closed it or not).
//!
//! Empty fields between stored values are implicit. Examples, with the
//! indexes that read back as `""`:
//!
//! ```text
//! ;;a;b;c;;  ->  0,1,5,6.. == ""
//! a;b;c      ->  3..      == ""
//! a;;b;c;;   ->  1,4,5..  == ""
//! a;b;;c;    ->  2,4..    == ""
//! ```

use std::fmt;

/// One parsed CSV record.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LineObject {
    values: Vec<(u32, String)>,
    prefix_end: u32,
    suffix_end: u32,
}

impl LineObject {
    pub fn new() -> Self {
        LineObject::default()
    }

    /// Build a line from its parts; used by tests and the CSV grammar.
    pub fn from_parts(
        prefix_end: u32,
        values: Vec<(u32, String)>,
        suffix_end: u32,
    ) -> Self {
        debug_assert!(values.windows(2).all(|w| w[0].0 < w[1].0));
        LineObject {
            values,
            prefix_end,
            suffix_end,
        }
    }

    /// Append a stored value at an absolute field index.
    pub fn push_value(&mut self, position: u32, value: String) {
        debug_assert!(self.values.last().is_none_or(|(p, _)| *p < position));
        self.values.push((position, value));
    }

    /// The stored `(position, value)` pairs in field order.
    pub fn values(&self) -> &[(u32, String)] {
        &self.values
    }

    /// Count of leading empty fields.
    pub fn prefix_end(&self) -> u32 {
        self.prefix_end
    }

    pub fn set_prefix_end(&mut self, value: u32) {
        self.prefix_end = value;
    }

    /// One past the last field of the line.
    pub fn suffix_end(&self) -> u32 {
        self.suffix_end
    }

    pub fn set_suffix_end(&mut self, value: u32) {
        self.suffix_end = value;
    }

    /// Total field count of the line.
    pub fn value_count(&self) -> usize {
        self.suffix_end as usize
    }

    /// The value at a field index; empty fields read back as `""`.
    pub fn value_for(&self, position: usize) -> &str {
        self.try_value_at(position).unwrap_or("")
    }

    /// The stored value at a field index, or `None` for empty fields and
    /// positions outside the line.
    pub fn try_value_at(&self, position: usize) -> Option<&str> {
        let Ok(position) = u32::try_from(position) else {
            return None;
        };
        if position < self.prefix_end || position >= self.suffix_end {
            return None;
        }
        self.values
            .iter()
            .find(|(pos, _)| *pos == position)
            .map(|(_, value)| value.as_str())
    }

    /// Render the line back to delimiter-separated text.
    ///
    /// Parsing the result yields an equivalent line: same stored pairs and
    /// the same prefix/suffix bounds.
    pub fn render(&self, separator: char) -> String {
        if self.values.is_empty() {
            // A line of separators only; suffix_end counts the fields.
            let seps = self.suffix_end.saturating_sub(1) as usize;
            return separator.to_string().repeat(seps);
        }

        let last_stored_end = self.values.last().map_or(0, |(pos, _)| pos + 1);
        // A line that ended with a separator keeps one trailing empty
        // field at index suffix_end; re-emit it.
        let field_count = if self.suffix_end > last_stored_end {
            self.suffix_end + 1
        } else {
            self.suffix_end
        };

        let mut out = String::new();
        for position in 0..field_count {
            if position > 0 {
                out.push(separator);
            }
            out.push_str(self.value_for(position as usize));
        }
        out
    }
}

impl fmt::Debug for LineObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineObject")
            .field("prefix_end", &self.prefix_end)
            .field("suffix_end", &self.suffix_end)
            .field("values", &self.values)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line(prefix: u32, pairs: &[(u32, &str)], suffix: u32) -> LineObject {
        LineObject::from_parts(
            prefix,
            pairs
                .iter()
                .map(|(p, v)| (*p, (*v).to_string()))
                .collect(),
            suffix,
        )
    }

    #[test]
    fn value_for_stored_and_empty_fields() {
        let l = line(2, &[(2, "a"), (3, "b"), (5, "c")], 7);
        assert_eq!(l.value_for(0), "");
        assert_eq!(l.value_for(1), "");
        assert_eq!(l.value_for(2), "a");
        assert_eq!(l.value_for(3), "b");
        assert_eq!(l.value_for(4), "");
        assert_eq!(l.value_for(5), "c");
        assert_eq!(l.value_for(6), "");
        assert_eq!(l.value_for(7), "");
        assert_eq!(l.value_for(100), "");
    }

    #[test]
    fn try_value_at_distinguishes_empty() {
        let l = line(1, &[(1, "x")], 3);
        assert_eq!(l.try_value_at(0), None);
        assert_eq!(l.try_value_at(1), Some("x"));
        assert_eq!(l.try_value_at(2), None);
        assert_eq!(l.try_value_at(3), None);
    }

    #[test]
    fn value_count_is_suffix_end() {
        let l = line(0, &[(0, "a"), (1, "b")], 2);
        assert_eq!(l.value_count(), 2);
    }

    #[test]
    fn render_simple() {
        let l = line(0, &[(0, "a"), (1, "b"), (2, "c")], 3);
        assert_eq!(l.render(';'), "a;b;c");
    }

    #[test]
    fn render_with_prefix_and_gaps() {
        let l = line(2, &[(2, "a"), (3, "b"), (5, "c")], 7);
        assert_eq!(l.render(';'), ";;a;b;;c;;");
    }

    #[test]
    fn render_trailing_separator() {
        // "a;" parses to one stored value with suffix_end 1.
        let l = line(0, &[(0, "a")], 1);
        assert_eq!(l.render(';'), "a");
        // A line that kept a trailing empty field.
        let l = line(0, &[(0, "a")], 2);
        assert_eq!(l.render(';'), "a;;");
    }

    #[test]
    fn render_separators_only() {
        let l = line(0, &[], 4);
        assert_eq!(l.render(';'), ";;;");
    }
}
