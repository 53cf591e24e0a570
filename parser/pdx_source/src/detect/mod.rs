//! Encoding auto-detection.
//!
//! Four candidates score a byte buffer in one linear pass each: ASCII and
//! UTF-8 are structural checks, Windows-1252 and Windows-1251 run
//! statistical scorers over byte-pair equivalence classes. The highest
//! positive score wins; ASCII and UTF-8 short-circuit because a
//! structural pass is already conclusive.
//!
//! The scoring model follows chardetng, cut down to the two single-byte
//! code pages these game files actually ship in.

mod tables;

use crate::Encoding;

use tables::{
    ASCII_DIGIT, CYRILLIC_ASCII_CLASSES, CYRILLIC_NON_ASCII_CLASSES, CYRILLIC_PROBABILITIES,
    INVALID_CLASS, LATIN_ASCII_CLASSES, NON_LATIN_ASCII_CLASSES, WESTERN_ASCII_CLASSES,
    WESTERN_NON_ASCII_CLASSES, WESTERN_PROBABILITIES, WINDOWS_1251_CLASSES, WINDOWS_1252_CLASSES,
};

/// Detection verdict: the best-guess encoding and whether the evidence
/// was conclusive.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Detection {
    pub encoding: Encoding,
    pub high_confidence: bool,
}

/// Detect the encoding of a byte buffer, UTF-8 allowed.
pub fn detect(buffer: &[u8]) -> Detection {
    detect_with_options(buffer, true)
}

/// Detect the encoding of a byte buffer.
///
/// `allow_utf8 = false` excludes the UTF-8 candidate for legacy
/// compatibility modes that must never produce UTF-8.
pub fn detect_with_options(buffer: &[u8], allow_utf8: bool) -> Detection {
    if is_ascii(buffer) {
        return Detection {
            encoding: Encoding::Ascii,
            high_confidence: true,
        };
    }
    if allow_utf8 && is_utf8(buffer) {
        return Detection {
            encoding: Encoding::Utf8,
            high_confidence: true,
        };
    }

    let mut best_score = 0i64;
    let mut encoding = Encoding::Unknown;

    let latin = LatinCandidate::new(&WESTERN_SCORE).score(buffer);
    if let Some(score) = latin {
        if score > best_score {
            best_score = score;
            encoding = Encoding::Windows1252;
        }
    }

    let non_latin = NonLatinCasedCandidate::new(&CYRILLIC_SCORE).score(buffer);
    if let Some(score) = non_latin {
        if score > best_score {
            best_score = score;
            encoding = Encoding::Windows1251;
        }
    }

    Detection {
        encoding,
        high_confidence: best_score > 0,
    }
}

/// Every byte is ≤ 0x7F.
pub fn is_ascii(buffer: &[u8]) -> bool {
    buffer.iter().all(|&b| b <= 0x7F)
}

/// Structurally valid UTF-8 per RFC 3629 (pure ASCII passes too).
pub fn is_utf8(buffer: &[u8]) -> bool {
    validate_utf8(buffer).is_some()
}

/// Structurally valid UTF-8 containing at least one multi-byte sequence.
///
/// This is the check behind the "file is UTF-8 but parsed in a legacy
/// mode" warning.
pub fn is_utf8_no_ascii(buffer: &[u8]) -> bool {
    validate_utf8(buffer) == Some(true)
}

/// Walk the buffer's UTF-8 byte structure. `None` on any malformed
/// sequence, otherwise `Some(saw_multibyte)`.
fn validate_utf8(buffer: &[u8]) -> Option<bool> {
    let mut saw_multibyte = false;
    let mut i = 0;
    while i < buffer.len() {
        let b = buffer[i];
        let continuation_count = match b {
            0x00..=0x7F => {
                i += 1;
                continue;
            }
            0xC0..=0xDF => 1,
            0xE0..=0xEF => 2,
            0xF0..=0xF7 => 3,
            _ => return None,
        };
        for k in 1..=continuation_count {
            match buffer.get(i + k) {
                Some(0x80..=0xBF) => {}
                _ => return None,
            }
        }
        saw_multibyte = true;
        i += continuation_count + 1;
    }
    Some(saw_multibyte)
}

/// Penalty for a byte pair the probability table marks implausible.
const IMPLAUSIBILITY_PENALTY: i64 = -220;

/// Class tables and probability data for one statistical candidate.
struct ByteScore {
    lower: &'static [u8; 128],
    upper: &'static [u8; 128],
    probabilities: &'static [u8],
    ascii: usize,
    non_ascii: usize,
}

static WESTERN_SCORE: ByteScore = ByteScore {
    lower: &LATIN_ASCII_CLASSES,
    upper: &WINDOWS_1252_CLASSES,
    probabilities: &WESTERN_PROBABILITIES,
    ascii: WESTERN_ASCII_CLASSES,
    non_ascii: WESTERN_NON_ASCII_CLASSES,
};

static CYRILLIC_SCORE: ByteScore = ByteScore {
    lower: &NON_LATIN_ASCII_CLASSES,
    upper: &WINDOWS_1251_CLASSES,
    probabilities: &CYRILLIC_PROBABILITIES,
    ascii: CYRILLIC_ASCII_CLASSES,
    non_ascii: CYRILLIC_NON_ASCII_CLASSES,
};

// Unstored-class markers, relative to `ascii + non_ascii`.
const PLAUSIBLE_NEXT_TO_ALPHABETIC: usize = 0;
const IMPLAUSIBLE_NEXT_TO_ALPHABETIC: usize = 1;
const IMPLAUSIBLE_BEFORE_ALPHABETIC: usize = 2;
const IMPLAUSIBLE_AFTER_ALPHABETIC: usize = 3;
const PLAUSIBLE_NEXT_TO_NON_ASCII_ALPHABETIC: usize = 4;
const PLAUSIBLE_NEXT_TO_ASCII_ALPHABETIC: usize = 5;

impl ByteScore {
    /// Class of a byte: low half through the ASCII table, high half
    /// through the code-page table. Bit 7 of the class is the case bit.
    #[inline]
    fn classify(&self, byte: u8) -> u8 {
        if byte < 0x80 {
            self.lower[byte as usize]
        } else {
            self.upper[(byte & 0x7F) as usize]
        }
    }

    #[inline]
    fn is_latin_alphabetic(&self, caseless_class: u8) -> bool {
        let c = caseless_class as usize;
        c > 0 && c < self.ascii + self.non_ascii
    }

    #[inline]
    fn is_non_latin_alphabetic(&self, caseless_class: u8) -> bool {
        let c = caseless_class as usize;
        c > 1 && c < self.ascii + self.non_ascii
    }

    /// Triangular index into the probability table; `None` for pairs with
    /// no stored score (ASCII next to ASCII).
    #[inline]
    fn compute_index(&self, x: usize, y: usize) -> Option<usize> {
        if x == 0 && y == 0 {
            return None;
        }
        if x < self.ascii && y < self.ascii {
            return None;
        }
        if y >= self.ascii {
            return Some(
                self.ascii * self.non_ascii
                    + (self.ascii + self.non_ascii) * (y - self.ascii)
                    + x,
            );
        }
        Some(y * self.non_ascii + x - self.ascii)
    }

    /// Score one `(previous, current)` caseless-class pair.
    fn score(&self, current_class: u8, previous_class: u8) -> i64 {
        let current = current_class as usize;
        let previous = previous_class as usize;
        let stored_boundary = self.ascii + self.non_ascii;

        if current < stored_boundary {
            if previous < stored_boundary {
                if let Some(index) = self.compute_index(previous, current) {
                    let b = self.probabilities[index];
                    if b == INVALID_CLASS {
                        return IMPLAUSIBILITY_PENALTY;
                    }
                    return i64::from(b);
                }
                return 0;
            }

            if current == 0 || current_class == ASCII_DIGIT {
                return 0;
            }

            return match previous - stored_boundary {
                PLAUSIBLE_NEXT_TO_ALPHABETIC | IMPLAUSIBLE_AFTER_ALPHABETIC => 0,
                IMPLAUSIBLE_NEXT_TO_ALPHABETIC | IMPLAUSIBLE_BEFORE_ALPHABETIC => {
                    IMPLAUSIBILITY_PENALTY
                }
                PLAUSIBLE_NEXT_TO_NON_ASCII_ALPHABETIC => {
                    if current < self.ascii {
                        IMPLAUSIBILITY_PENALTY
                    } else {
                        0
                    }
                }
                PLAUSIBLE_NEXT_TO_ASCII_ALPHABETIC => {
                    if current < self.ascii {
                        0
                    } else {
                        IMPLAUSIBILITY_PENALTY
                    }
                }
                // ASCII digits sit past the stored classes.
                _ => 0,
            };
        }

        if previous < stored_boundary {
            if previous == 0 || previous_class == ASCII_DIGIT {
                return 0;
            }

            return match current - stored_boundary {
                PLAUSIBLE_NEXT_TO_ALPHABETIC | IMPLAUSIBLE_BEFORE_ALPHABETIC => 0,
                IMPLAUSIBLE_NEXT_TO_ALPHABETIC | IMPLAUSIBLE_AFTER_ALPHABETIC => {
                    IMPLAUSIBILITY_PENALTY
                }
                PLAUSIBLE_NEXT_TO_NON_ASCII_ALPHABETIC => {
                    if previous < self.ascii {
                        IMPLAUSIBILITY_PENALTY
                    } else {
                        0
                    }
                }
                PLAUSIBLE_NEXT_TO_ASCII_ALPHABETIC => {
                    if previous < self.ascii {
                        0
                    } else {
                        IMPLAUSIBILITY_PENALTY
                    }
                }
                _ => 0,
            };
        }

        if current_class == ASCII_DIGIT || previous_class == ASCII_DIGIT {
            return 0;
        }

        IMPLAUSIBILITY_PENALTY
    }
}

/// Per-word case progression for the non-Latin candidate.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum NonLatinCaseState {
    Space,
    Upper,
    Lower,
    UpperLower,
    AllCaps,
    Mix,
}

/// Windows-1251 candidate: rewards consistently cased Cyrillic words,
/// penalises case soup and Latin letters glued to Cyrillic ones.
struct NonLatinCasedCandidate {
    data: &'static ByteScore,
    prev: u8,
    case_state: NonLatinCaseState,
    prev_ascii: bool,
    current_word_len: u64,
    longest_word: u64,
}

impl NonLatinCasedCandidate {
    fn new(data: &'static ByteScore) -> Self {
        NonLatinCasedCandidate {
            data,
            prev: 0,
            case_state: NonLatinCaseState::Space,
            prev_ascii: true,
            current_word_len: 0,
            longest_word: 0,
        }
    }

    fn score(mut self, buffer: &[u8]) -> Option<i64> {
        const LATIN_LETTER: u8 = 1;
        const MIXED_CASE_PENALTY: i64 = -20;
        const CAPITALIZATION_BONUS: i64 = 40;
        const LATIN_ADJACENCY_PENALTY: i64 = -50;

        let mut score = 0i64;
        for &b in buffer {
            let byte_class = self.data.classify(b);
            if byte_class == INVALID_CLASS {
                return None;
            }

            let caseless_class = byte_class & 0x7F;
            let ascii = b < 0x80;
            let ascii_pair = !self.prev_ascii && ascii;
            let non_ascii_alphabetic = self.data.is_non_latin_alphabetic(caseless_class);

            if caseless_class == LATIN_LETTER {
                self.case_state = NonLatinCaseState::Mix;
            } else if !non_ascii_alphabetic {
                match self.case_state {
                    NonLatinCaseState::UpperLower => score += CAPITALIZATION_BONUS,
                    NonLatinCaseState::Mix => {
                        score += MIXED_CASE_PENALTY * self.current_word_len as i64;
                    }
                    _ => {}
                }
                self.case_state = NonLatinCaseState::Space;
            } else if byte_class >> 7 == 0 {
                match self.case_state {
                    NonLatinCaseState::Space => self.case_state = NonLatinCaseState::Lower,
                    NonLatinCaseState::Upper => self.case_state = NonLatinCaseState::UpperLower,
                    NonLatinCaseState::AllCaps => self.case_state = NonLatinCaseState::Mix,
                    _ => {}
                }
            } else {
                match self.case_state {
                    NonLatinCaseState::Space => self.case_state = NonLatinCaseState::Upper,
                    NonLatinCaseState::Upper => self.case_state = NonLatinCaseState::AllCaps,
                    NonLatinCaseState::Lower | NonLatinCaseState::UpperLower => {
                        self.case_state = NonLatinCaseState::Mix;
                    }
                    _ => {}
                }
            }

            if non_ascii_alphabetic {
                self.current_word_len += 1;
            } else {
                if self.current_word_len > self.longest_word {
                    self.longest_word = self.current_word_len;
                }
                self.current_word_len = 0;
            }

            if !ascii_pair {
                score += self.data.score(caseless_class, self.prev);

                if self.prev == LATIN_LETTER && non_ascii_alphabetic {
                    score += LATIN_ADJACENCY_PENALTY;
                } else if caseless_class == LATIN_LETTER
                    && self.data.is_non_latin_alphabetic(self.prev)
                {
                    score += LATIN_ADJACENCY_PENALTY;
                }
            }

            self.prev_ascii = ascii;
            self.prev = caseless_class;
        }

        // A candidate that never saw a word of two or more letters has no
        // evidence to offer.
        if self.longest_word < 2 {
            return None;
        }
        Some(score)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum LatinCaseState {
    Space,
    Upper,
    Lower,
    AllCaps,
}

/// States of the Spanish-ordinal / copyright bonus machine.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum OrdinalState {
    Other,
    Space,
    PeriodAfterN,
    OrdinalExpectingSpace,
    OrdinalExpectingSpaceUndoImplausibility,
    OrdinalExpectingSpaceOrDigit,
    OrdinalExpectingSpaceOrDigitUndoImplausibility,
    UpperN,
    LowerN,
    FeminineAbbreviationStartLetter,
    Digit,
    Roman,
    Copyright,
}

/// Windows-1252 candidate.
struct LatinCandidate {
    data: &'static ByteScore,
    prev: u8,
    case_state: LatinCaseState,
    prev_non_ascii: u32,
    ordinal_state: OrdinalState,
}

impl LatinCandidate {
    fn new(data: &'static ByteScore) -> Self {
        LatinCandidate {
            data,
            prev: 0,
            case_state: LatinCaseState::Space,
            prev_non_ascii: 0,
            ordinal_state: OrdinalState::Space,
        }
    }

    fn score(mut self, buffer: &[u8]) -> Option<i64> {
        const CASE_TRANSITION_PENALTY: i64 = -180;

        let mut score = 0i64;
        for &b in buffer {
            let byte_class = self.data.classify(b);
            if byte_class == INVALID_CLASS {
                return None;
            }

            let caseless_class = byte_class & 0x7F;
            let ascii = b < 0x80;
            let ascii_pair = self.prev_non_ascii == 0 && ascii;

            // Long runs of non-ASCII bytes are increasingly implausible
            // for a Latin code page.
            score += match self.prev_non_ascii {
                0..=2 => 0,
                3 => -5,
                4 => 20,
                _ => -200,
            };

            if !self.data.is_latin_alphabetic(caseless_class) {
                self.case_state = LatinCaseState::Space;
            } else if byte_class >> 7 == 0 {
                if self.case_state == LatinCaseState::AllCaps && !ascii_pair {
                    score += CASE_TRANSITION_PENALTY;
                }
                self.case_state = LatinCaseState::Lower;
            } else {
                match self.case_state {
                    LatinCaseState::Lower => {
                        if !ascii_pair {
                            score += CASE_TRANSITION_PENALTY;
                        }
                        self.case_state = LatinCaseState::Upper;
                    }
                    LatinCaseState::Space => self.case_state = LatinCaseState::Upper,
                    LatinCaseState::Upper | LatinCaseState::AllCaps => {
                        self.case_state = LatinCaseState::AllCaps;
                    }
                }
            }

            let ascii_ish_pair = ascii_pair
                || (ascii && self.prev == 0)
                || (caseless_class == 0 && self.prev_non_ascii == 0);

            if !ascii_ish_pair {
                score += self.data.score(caseless_class, self.prev);
            }

            score += self.step_ordinal(b, caseless_class);

            if ascii {
                self.prev_non_ascii = 0;
            } else {
                self.prev_non_ascii += 1;
            }
            self.prev = caseless_class;
        }
        Some(score)
    }

    /// Advance the ordinal-suffix state machine, returning the bonus (if
    /// any) this byte triggers. Classes 9/22/24 are I/V/X for the Roman
    /// numeral states.
    fn step_ordinal(&mut self, b: u8, caseless_class: u8) -> i64 {
        const ORDINAL_BONUS: i64 = 300;
        const COPYRIGHT_BONUS: i64 = 222;
        let space = caseless_class == 0;
        let digit = caseless_class == ASCII_DIGIT;
        let roman = matches!(caseless_class, 9 | 22 | 24);

        match self.ordinal_state {
            OrdinalState::Other => {
                if space {
                    self.ordinal_state = OrdinalState::Space;
                }
                0
            }
            OrdinalState::Space => {
                if space {
                    // stay
                } else if b == 0xAA || b == 0xBA {
                    self.ordinal_state = OrdinalState::OrdinalExpectingSpace;
                } else if b == b'M' || b == b'D' || b == b'S' {
                    self.ordinal_state = OrdinalState::FeminineAbbreviationStartLetter;
                } else if b == b'N' {
                    self.ordinal_state = OrdinalState::UpperN;
                } else if b == b'n' {
                    self.ordinal_state = OrdinalState::LowerN;
                } else if digit {
                    self.ordinal_state = OrdinalState::Digit;
                } else if roman {
                    self.ordinal_state = OrdinalState::Roman;
                } else if b == 0xA9 {
                    self.ordinal_state = OrdinalState::Copyright;
                } else {
                    self.ordinal_state = OrdinalState::Other;
                }
                0
            }
            OrdinalState::OrdinalExpectingSpace => {
                if space {
                    self.ordinal_state = OrdinalState::Space;
                    ORDINAL_BONUS
                } else {
                    self.ordinal_state = OrdinalState::Other;
                    0
                }
            }
            OrdinalState::OrdinalExpectingSpaceUndoImplausibility => {
                if space {
                    self.ordinal_state = OrdinalState::Space;
                    ORDINAL_BONUS - IMPLAUSIBILITY_PENALTY
                } else {
                    self.ordinal_state = OrdinalState::Other;
                    0
                }
            }
            OrdinalState::OrdinalExpectingSpaceOrDigit => {
                if space {
                    self.ordinal_state = OrdinalState::Space;
                    ORDINAL_BONUS
                } else if digit {
                    self.ordinal_state = OrdinalState::Other;
                    ORDINAL_BONUS
                } else {
                    self.ordinal_state = OrdinalState::Other;
                    0
                }
            }
            OrdinalState::OrdinalExpectingSpaceOrDigitUndoImplausibility => {
                if space {
                    self.ordinal_state = OrdinalState::Space;
                    ORDINAL_BONUS - IMPLAUSIBILITY_PENALTY
                } else if digit {
                    self.ordinal_state = OrdinalState::Other;
                    ORDINAL_BONUS - IMPLAUSIBILITY_PENALTY
                } else {
                    self.ordinal_state = OrdinalState::Other;
                    0
                }
            }
            OrdinalState::UpperN => {
                if b == 0xAA {
                    self.ordinal_state = OrdinalState::OrdinalExpectingSpaceUndoImplausibility;
                } else if b == 0xBA {
                    self.ordinal_state =
                        OrdinalState::OrdinalExpectingSpaceOrDigitUndoImplausibility;
                } else if b == b'.' {
                    self.ordinal_state = OrdinalState::PeriodAfterN;
                } else if space {
                    self.ordinal_state = OrdinalState::Space;
                } else {
                    self.ordinal_state = OrdinalState::Other;
                }
                0
            }
            OrdinalState::LowerN => {
                if b == 0xBA {
                    self.ordinal_state =
                        OrdinalState::OrdinalExpectingSpaceOrDigitUndoImplausibility;
                } else if b == b'.' {
                    self.ordinal_state = OrdinalState::PeriodAfterN;
                } else if space {
                    self.ordinal_state = OrdinalState::Space;
                } else {
                    self.ordinal_state = OrdinalState::Other;
                }
                0
            }
            OrdinalState::FeminineAbbreviationStartLetter => {
                if b == 0xAA {
                    self.ordinal_state = OrdinalState::OrdinalExpectingSpaceUndoImplausibility;
                } else if space {
                    self.ordinal_state = OrdinalState::Space;
                } else {
                    self.ordinal_state = OrdinalState::Other;
                }
                0
            }
            OrdinalState::Digit => {
                if b == 0xAA || b == 0xBA {
                    self.ordinal_state = OrdinalState::OrdinalExpectingSpace;
                } else if space {
                    self.ordinal_state = OrdinalState::Space;
                } else if digit {
                    // stay
                } else {
                    self.ordinal_state = OrdinalState::Other;
                }
                0
            }
            OrdinalState::Roman => {
                if b == 0xAA || b == 0xBA {
                    self.ordinal_state = OrdinalState::OrdinalExpectingSpaceUndoImplausibility;
                } else if space {
                    self.ordinal_state = OrdinalState::Space;
                } else if roman {
                    // stay
                } else {
                    self.ordinal_state = OrdinalState::Other;
                }
                0
            }
            OrdinalState::PeriodAfterN => {
                if b == 0xBA {
                    self.ordinal_state = OrdinalState::OrdinalExpectingSpaceOrDigit;
                } else if space {
                    self.ordinal_state = OrdinalState::Space;
                } else {
                    self.ordinal_state = OrdinalState::Other;
                }
                0
            }
            OrdinalState::Copyright => {
                let bonus = if space { COPYRIGHT_BONUS } else { 0 };
                self.ordinal_state = if space {
                    OrdinalState::Space
                } else {
                    OrdinalState::Other
                };
                bonus
            }
        }
    }
}
