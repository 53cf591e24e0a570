//! Statistical tables for the encoding detector.
//!
//! Class tables map each byte (split into low/high halves) to an
//! equivalence class; the probability tables score adjacent class pairs.
//! The data derives from the chardetng statistical model, filtered to the
//! two single-byte code pages this toolkit detects.

/// Class value marking a byte that can never occur in the encoding.
pub const INVALID_CLASS: u8 = 255;

/// Class value for ASCII digits in the class tables.
pub const ASCII_DIGIT: u8 = 100;

/// Number of ASCII character classes in the cyrillic model.
pub const CYRILLIC_ASCII_CLASSES: usize = 2;
/// Number of non-ASCII character classes in the cyrillic model.
pub const CYRILLIC_NON_ASCII_CLASSES: usize = 44;
/// Number of ASCII character classes in the western model.
pub const WESTERN_ASCII_CLASSES: usize = 27;
/// Number of non-ASCII character classes in the western model.
pub const WESTERN_NON_ASCII_CLASSES: usize = 32;

/// Low-half classes for the western (Windows-1252) model.
pub const LATIN_ASCII_CLASSES: [u8; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 0, 0, 0, 0, 0, 0,
    0, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143,
    144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 0, 0, 0, 0, 0,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 0, 0, 0, 0, 0,
];

/// Low-half classes for the cyrillic (Windows-1251) model.
pub const NON_LATIN_ASCII_CLASSES: [u8; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 0, 0, 0, 0, 0, 0,
    0, 129, 129, 129, 129, 129, 129, 129, 129, 129, 129, 129, 129, 129, 129, 129,
    129, 129, 129, 129, 129, 129, 129, 129, 129, 129, 129, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0,
];

/// High-half classes for Windows-1251 bytes.
pub const WINDOWS_1251_CLASSES: [u8; 128] = [
    131, 130, 0, 2, 0, 0, 0, 0, 0, 0, 132, 0, 133, 130, 134, 135,
    3, 0, 0, 0, 0, 0, 0, 0, 255, 0, 4, 0, 5, 2, 6, 7,
    0, 136, 8, 140, 47, 130, 46, 47, 138, 49, 139, 49, 50, 46, 48, 141,
    49, 50, 137, 9, 2, 49, 48, 46, 10, 47, 11, 48, 12, 130, 2, 13,
    142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157,
    158, 159, 160, 161, 162, 163, 164, 165, 166, 167, 168, 169, 170, 171, 172, 173,
    14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29,
    30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45,
];

/// High-half classes for Windows-1252 bytes.
pub const WINDOWS_1252_CLASSES: [u8; 128] = [
    0, 255, 0, 60, 0, 0, 0, 0, 0, 0, 156, 0, 157, 255, 185, 255,
    255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 28, 0, 29, 255, 57, 186,
    0, 62, 60, 60, 60, 60, 59, 60, 60, 62, 60, 59, 63, 59, 61, 60,
    62, 63, 61, 61, 60, 62, 61, 59, 60, 61, 60, 59, 62, 62, 62, 62,
    158, 159, 160, 161, 162, 163, 164, 165, 166, 167, 168, 169, 170, 171, 172, 173,
    188, 174, 175, 176, 177, 178, 179, 63, 180, 181, 182, 183, 184, 188, 188, 27,
    30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45,
    60, 46, 47, 48, 49, 50, 51, 63, 52, 53, 54, 55, 56, 60, 60, 58,
];

/// Pair probabilities for the cyrillic model (triangular layout).
pub const CYRILLIC_PROBABILITIES: [u8; 2112] = [
    0, 0, 0, 0, 1, 0, 16, 38, 0, 2, 5, 10, 121, 4, 20, 25,
    26, 53, 9, 5, 61, 23, 20, 26, 15, 95, 60, 2, 26, 15, 25, 29,
    0, 14, 6, 6, 25, 1, 0, 27, 25, 8, 5, 39, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 255, 0, 0, 255, 0,
    255, 0, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 255,
    255, 0, 0, 255, 0, 0, 0, 0, 255, 0, 0, 0, 0, 0, 255, 255,
    255, 255, 0, 255, 2, 0, 0, 0, 0, 0, 0, 0, 0, 255, 0, 0,
    0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 255, 255, 255,
    255, 255, 255, 255, 0, 0, 0, 0, 0, 0, 0, 0, 255, 255, 255, 255,
    0, 255, 0, 0, 0, 0, 0, 4, 0, 0, 0, 255, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 255, 255, 255, 255, 255,
    255, 255, 0, 0, 0, 0, 0, 0, 0, 0, 255, 255, 255, 0, 0, 255,
    5, 0, 0, 0, 0, 2, 0, 0, 0, 255, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 255, 255, 255, 255, 255, 255, 255,
    0, 0, 255, 0, 0, 0, 0, 0, 255, 0, 255, 255, 0, 0, 5, 0,
    0, 0, 0, 0, 0, 0, 1, 255, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 255, 255, 255, 255, 255, 255, 255, 0, 0,
    0, 0, 0, 0, 0, 0, 255, 255, 255, 255, 0, 255, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 255, 255, 255, 255, 255, 255, 255, 7, 0, 0, 255,
    255, 255, 255, 255, 0, 1, 0, 255, 255, 255, 15, 0, 0, 0, 0, 1,
    0, 0, 0, 0, 0, 0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 255, 255, 1, 0, 0, 0, 1, 12, 0, 0, 255, 255, 0,
    255, 255, 0, 2, 0, 0, 0, 0, 2, 3, 15, 5, 5, 0, 0, 4,
    0, 0, 21, 15, 10, 17, 0, 6, 14, 4, 6, 0, 3, 1, 8, 1,
    0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 255, 255, 255, 255, 255, 255,
    0, 0, 0, 255, 255, 0, 4, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 6, 0, 0, 255, 255, 255, 255, 255, 0, 0,
    255, 5, 255, 0, 1, 7, 0, 3, 2, 0, 0, 0, 0, 0, 0, 2,
    2, 2, 0, 0, 2, 2, 5, 0, 0, 5, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 12, 0, 0, 0, 0, 0, 0, 0, 255, 0, 255, 0,
    0, 0, 5, 1, 0, 0, 0, 2, 0, 0, 20, 255, 0, 0, 0, 0,
    15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 255, 255, 0, 255, 255,
    255, 255, 9, 0, 0, 255, 255, 255, 255, 255, 255, 5, 255, 0, 0, 13,
    3, 3, 0, 4, 1, 0, 1, 2, 0, 0, 0, 1, 0, 0, 4, 0,
    0, 1, 3, 0, 0, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    32, 0, 0, 2, 2, 2, 0, 0, 0, 1, 0, 0, 28, 0, 23, 22,
    26, 22, 19, 0, 3, 12, 5, 0, 44, 38, 18, 58, 1, 21, 44, 17,
    54, 1, 2, 28, 5, 8, 3, 1, 9, 0, 12, 0, 0, 0, 40, 0,
    0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 7, 0, 0, 0,
    1, 7, 0, 1, 1, 0, 0, 7, 4, 1, 9, 0, 1, 0, 1, 2,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 31, 0, 0, 0,
    0, 0, 0, 0, 0, 11, 0, 3, 0, 0, 19, 0, 0, 1, 1, 6,
    0, 2, 6, 0, 1, 0, 1, 0, 32, 0, 2, 2, 23, 9, 0, 0,
    0, 1, 0, 0, 1, 1, 0, 3, 0, 2, 23, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 7, 0, 1, 20, 0, 0, 1, 0, 9, 0, 0,
    9, 7, 0, 5, 2, 18, 11, 0, 8, 3, 2, 3, 0, 0, 0, 0,
    0, 0, 0, 3, 0, 13, 0, 3, 26, 0, 0, 0, 0, 0, 0, 0,
    0, 9, 0, 2, 0, 2, 19, 0, 1, 5, 0, 13, 2, 2, 3, 2,
    0, 6, 1, 12, 30, 0, 4, 0, 0, 7, 0, 0, 0, 0, 0, 0,
    1, 0, 0, 5, 0, 1, 12, 0, 0, 1, 4, 5, 0, 0, 0, 0,
    0, 0, 24, 1, 5, 7, 11, 3, 12, 1, 6, 6, 11, 0, 3, 15,
    14, 14, 4, 8, 25, 14, 29, 0, 1, 1, 4, 8, 8, 2, 0, 3,
    1, 0, 0, 0, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 0, 0, 1, 2, 2, 0, 0, 0, 0, 0, 3, 2, 1,
    2, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2,
    0, 0, 19, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 1,
    6, 0, 0, 0, 11, 8, 0, 0, 8, 0, 0, 0, 0, 0, 4, 0,
    1, 0, 0, 3, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1,
    24, 0, 0, 0, 0, 1, 5, 0, 0, 0, 0, 0, 1, 0, 1, 10,
    16, 21, 22, 0, 6, 5, 6, 1, 15, 15, 8, 38, 2, 4, 27, 9,
    15, 0, 3, 8, 12, 7, 6, 1, 0, 0, 0, 0, 0, 0, 6, 0,
    0, 0, 255, 255, 255, 255, 0, 7, 0, 0, 255, 4, 21, 0, 0, 0,
    0, 5, 0, 0, 39, 0, 0, 0, 0, 0, 9, 0, 0, 0, 0, 1,
    0, 0, 0, 0, 0, 0, 0, 5, 0, 3, 0, 0, 54, 0, 0, 0,
    0, 0, 0, 0, 1, 8, 0, 0, 0, 0, 10, 0, 1, 0, 1, 11,
    0, 0, 12, 0, 1, 2, 0, 4, 8, 0, 2, 23, 2, 4, 0, 2,
    3, 3, 8, 0, 0, 3, 16, 1, 4, 3, 12, 0, 0, 0, 0, 0,
    0, 0, 2, 6, 0, 6, 0, 4, 29, 12, 4, 5, 2, 18, 0, 0,
    17, 4, 5, 11, 0, 0, 21, 2, 3, 4, 1, 15, 1, 0, 0, 0,
    0, 0, 4, 3, 2, 12, 0, 2, 23, 0, 0, 0, 0, 0, 0, 0,
    0, 4, 0, 4, 0, 0, 17, 1, 0, 0, 0, 7, 0, 1, 13, 2,
    0, 0, 0, 0, 13, 0, 2, 4, 0, 2, 0, 0, 0, 0, 0, 0,
    1, 4, 2, 4, 1, 1, 42, 0, 0, 0, 0, 0, 0, 0, 4, 12,
    6, 7, 1, 7, 76, 0, 22, 1, 4, 27, 1, 3, 34, 30, 0, 7,
    1, 13, 24, 1, 3, 5, 3, 4, 0, 1, 0, 4, 1, 0, 2, 18,
    7, 16, 0, 4, 37, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0,
    1, 0, 1, 10, 27, 22, 15, 1, 2, 3, 7, 5, 32, 11, 7, 38,
    8, 21, 24, 11, 23, 0, 2, 10, 2, 2, 3, 2, 0, 0, 1, 0,
    0, 0, 47, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    4, 0, 1, 0, 0, 2, 0, 1, 2, 4, 0, 0, 2, 0, 6, 0,
    0, 5, 0, 2, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0,
    19, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 8, 0, 5, 47, 4,
    6, 6, 5, 23, 0, 0, 5, 2, 6, 0, 0, 0, 23, 22, 0, 1,
    14, 9, 1, 0, 1, 0, 0, 0, 7, 2, 8, 16, 0, 3, 53, 0,
    0, 0, 0, 0, 0, 0, 4, 9, 2, 0, 1, 2, 21, 1, 4, 1,
    2, 11, 0, 0, 12, 2, 4, 7, 1, 13, 15, 1, 4, 6, 3, 6,
    0, 0, 0, 0, 0, 0, 1, 2, 3, 5, 0, 1, 28, 0, 0, 0,
    0, 0, 0, 0, 1, 6, 0, 1, 0, 1, 32, 0, 1, 3, 0, 12,
    0, 1, 22, 1, 4, 7, 1, 6, 23, 0, 14, 41, 14, 3, 0, 1,
    1, 1, 21, 0, 2, 2, 6, 2, 1, 4, 15, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 5, 0, 2, 4, 2, 4, 6, 3, 0, 2,
    0, 0, 6, 5, 6, 3, 0, 3, 7, 4, 7, 18, 1, 6, 0, 2,
    0, 0, 0, 0, 0, 0, 1, 0, 8, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 1, 0,
    0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 41, 0, 0, 0, 0, 0, 0, 0, 0, 2,
    0, 1, 0, 2, 30, 0, 2, 0, 0, 11, 0, 0, 5, 1, 14, 3,
    0, 3, 6, 0, 7, 0, 0, 1, 0, 1, 0, 2, 0, 0, 0, 4,
    3, 5, 0, 0, 8, 0, 0, 0, 0, 0, 0, 0, 0, 6, 0, 0,
    0, 0, 7, 0, 0, 0, 0, 4, 0, 0, 7, 1, 0, 1, 0, 2,
    1, 0, 0, 9, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0,
    1, 1, 6, 0, 0, 0, 0, 0, 0, 0, 0, 5, 0, 0, 0, 0,
    5, 0, 1, 5, 0, 2, 0, 0, 6, 0, 0, 1, 0, 0, 3, 0,
    2, 0, 0, 2, 0, 1, 0, 0, 3, 0, 0, 2, 0, 0, 0, 0,
    12, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 17, 0,
    0, 1, 0, 2, 0, 0, 26, 0, 0, 0, 0, 0, 22, 2, 6, 0,
    0, 5, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 2, 0,
    255, 0, 255, 255, 255, 255, 255, 0, 0, 0, 255, 0, 1, 1, 0, 0,
    0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 255, 255,
    255, 255, 0, 255, 0, 0, 0, 255, 255, 255, 0, 3, 4, 0, 2, 0,
    0, 0, 0, 0, 11, 0, 1, 0, 0, 2, 2, 5, 2, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 255, 255, 255,
    255, 255, 0, 0, 0, 0, 0, 255, 0, 3, 11, 0, 4, 0, 2, 1,
    0, 0, 0, 3, 1, 16, 0, 0, 22, 2, 10, 0, 0, 0, 8, 6,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 255, 255, 0, 0, 0,
    255, 0, 0, 0, 0, 0, 5, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 15, 0, 7, 3, 0, 1, 13, 7, 7, 0, 35, 6, 0, 0, 0,
    0, 0, 0, 0, 6, 0, 10, 0, 0, 255, 255, 255, 255, 255, 0, 0,
    0, 0, 255, 0, 0, 1, 1, 10, 11, 0, 2, 2, 0, 0, 0, 9,
    3, 9, 0, 0, 7, 6, 9, 0, 0, 8, 3, 2, 1, 0, 0, 0,
    0, 17, 0, 0, 14, 0, 0, 0, 255, 255, 255, 255, 0, 0, 0, 0,
    255, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0,
    2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 5, 0, 0, 255, 255, 255, 255, 255, 0, 9, 0, 0, 255, 0,
    11, 0, 3, 0, 0, 0, 0, 2, 24, 0, 0, 5, 2, 14, 1, 0,
    2, 3, 1, 0, 0, 1, 3, 0, 0, 0, 0, 16, 1, 0, 0, 0,
];

/// Pair probabilities for the western model (triangular layout).
pub const WESTERN_PROBABILITIES: [u8; 2752] = [
    18, 3, 0, 254, 74, 0, 5, 254, 254, 2, 25, 254, 149, 4, 254, 66,
    148, 254, 0, 254, 122, 238, 8, 1, 20, 13, 254, 35, 20, 3, 1, 0,
    0, 3, 0, 0, 0, 0, 0, 5, 2, 0, 86, 9, 76, 0, 0, 0,
    241, 0, 0, 49, 0, 0, 0, 0, 11, 2, 0, 34, 0, 1, 2, 0,
    19, 0, 0, 5, 5, 0, 0, 8, 13, 5, 0, 34, 22, 0, 0, 0,
    4, 0, 0, 0, 6, 1, 3, 3, 42, 37, 8, 8, 0, 67, 0, 0,
    0, 0, 0, 9, 6, 1, 0, 22, 10, 1, 0, 19, 54, 1, 0, 1,
    18, 3, 1, 2, 40, 7, 0, 0, 6, 0, 3, 5, 1, 34, 0, 0,
    0, 0, 0, 5, 5, 0, 0, 12, 45, 16, 1, 6, 42, 0, 13, 3,
    10, 0, 2, 0, 66, 11, 5, 8, 33, 104, 3, 4, 0, 19, 0, 0,
    63, 5, 0, 0, 0, 0, 2, 33, 15, 1, 3, 0, 87, 0, 0, 0,
    0, 0, 1, 21, 0, 0, 0, 49, 1, 11, 0, 3, 0, 9, 1, 0,
    0, 0, 0, 8, 8, 0, 0, 10, 2, 7, 0, 162, 23, 0, 13, 0,
    4, 0, 0, 0, 1, 3, 0, 0, 15, 4, 0, 0, 0, 4, 0, 0,
    1, 0, 0, 14, 16, 24, 0, 29, 11, 41, 0, 13, 86, 0, 14, 9,
    3, 0, 0, 0, 20, 8, 7, 7, 13, 37, 14, 0, 0, 12, 0, 0,
    1, 0, 0, 0, 0, 0, 0, 47, 2, 0, 0, 0, 1, 0, 7, 0,
    0, 0, 0, 0, 0, 0, 0, 29, 20, 0, 0, 0, 0, 45, 0, 0,
    5, 4, 0, 166, 120, 0, 0, 144, 0, 2, 3, 88, 254, 0, 0, 0,
    0, 0, 0, 3, 28, 107, 0, 112, 8, 2, 44, 32, 0, 3, 3, 0,
    0, 0, 0, 0, 0, 0, 0, 39, 9, 0, 0, 2, 1, 0, 2, 0,
    0, 0, 0, 4, 0, 0, 0, 16, 18, 44, 0, 0, 0, 0, 0, 255,
    0, 2, 0, 0, 1, 0, 0, 48, 31, 32, 1, 60, 1, 0, 4, 0,
    1, 0, 0, 0, 1, 3, 0, 2, 20, 47, 0, 0, 0, 20, 0, 0,
    4, 0, 0, 12, 16, 0, 0, 54, 40, 48, 0, 64, 36, 0, 39, 6,
    12, 3, 0, 0, 27, 9, 3, 24, 42, 33, 2, 9, 7, 77, 0, 0,
    0, 0, 0, 14, 5, 4, 0, 60, 11, 4, 3, 48, 30, 7, 28, 1,
    10, 1, 0, 0, 24, 41, 3, 3, 19, 24, 1, 8, 2, 36, 0, 0,
    1, 1, 0, 24, 91, 16, 0, 132, 62, 73, 1, 56, 71, 33, 78, 7,
    35, 2, 3, 0, 94, 254, 10, 21, 33, 38, 24, 21, 1, 61, 0, 0,
    0, 1, 0, 0, 0, 0, 254, 6, 0, 1, 27, 0, 13, 0, 0, 84,
    127, 0, 0, 62, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 5, 2, 0, 0, 9, 15, 0, 0, 4, 34, 0, 6, 0,
    6, 0, 0, 0, 20, 12, 9, 28, 10, 22, 0, 3, 0, 7, 0, 0,
    0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 33, 1, 0, 0,
    0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 255, 255,
    0, 0, 0, 83, 62, 1, 0, 198, 139, 125, 0, 229, 94, 54, 190, 38,
    18, 1, 0, 0, 176, 24, 16, 29, 193, 181, 13, 13, 2, 131, 0, 0,
    1, 0, 0, 41, 34, 0, 0, 41, 24, 42, 0, 68, 113, 15, 159, 6,
    43, 19, 4, 58, 14, 18, 1, 4, 48, 42, 4, 12, 9, 20, 0, 0,
    7, 1, 0, 14, 20, 8, 0, 56, 37, 31, 0, 104, 67, 14, 113, 3,
    50, 9, 5, 0, 89, 7, 19, 22, 13, 14, 40, 12, 15, 18, 0, 0,
    0, 1, 5, 1, 2, 0, 0, 30, 0, 0, 1, 15, 2, 0, 1, 0,
    1, 0, 0, 2, 4, 0, 0, 36, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 1, 6, 0, 0, 29, 33, 13, 0, 19, 46, 0, 15, 0,
    7, 0, 1, 31, 2, 2, 3, 1, 32, 27, 0, 0, 1, 1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 3, 0, 0, 4, 0,
    0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 255,
    0, 0, 0, 1, 16, 0, 0, 23, 0, 0, 0, 3, 14, 0, 0, 0,
    2, 3, 0, 0, 0, 6, 0, 0, 0, 0, 0, 0, 0, 0, 255, 0,
    0, 0, 0, 0, 0, 0, 0, 58, 8, 0, 0, 1, 1, 62, 0, 0,
    0, 1, 0, 0, 0, 0, 0, 0, 6, 82, 0, 0, 0, 0, 0, 255,
    0, 0, 0, 0, 2, 0, 0, 0, 14, 0, 0, 7, 3, 0, 6, 0,
    3, 5, 0, 0, 0, 0, 4, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 29, 0, 0, 0, 15, 0, 0, 0, 11, 0, 0, 0, 0, 0, 20,
    0, 0, 0, 0, 0, 37, 0, 0, 0, 0, 0, 0, 255, 255, 0, 0,
    255, 255, 4, 0, 0, 255, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255,
    0, 0, 0, 8, 0, 255, 0, 0, 2, 0, 0, 6, 2, 0, 0, 0,
    1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 10,
    1, 0, 0, 0, 0, 0, 0, 0, 255, 0, 1, 0, 0, 0, 0, 0,
    255, 0, 0, 0, 0, 0, 0, 0, 255, 255, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 255, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 255, 0, 0, 255, 255, 255, 0, 0, 0, 255, 255, 255, 0, 255, 255,
    255, 255, 0, 0, 255, 255, 255, 255, 255, 255, 0, 255, 255, 255, 0, 255,
    255, 107, 0, 22, 16, 18, 14, 6, 24, 46, 15, 2, 0, 42, 18, 17,
    0, 36, 0, 34, 4, 254, 1, 2, 0, 0, 1, 0, 0, 0, 255, 0,
    0, 0, 0, 0, 255, 255, 0, 0, 0, 0, 0, 0, 0, 255, 0, 0,
    0, 255, 255, 255, 255, 255, 0, 0, 255, 0, 0, 0, 41, 0, 10, 8,
    21, 34, 5, 5, 60, 18, 5, 1, 29, 42, 26, 2, 16, 0, 27, 9,
    43, 28, 7, 0, 0, 1, 4, 0, 0, 255, 0, 0, 255, 255, 255, 0,
    255, 0, 0, 0, 0, 255, 0, 0, 0, 0, 0, 0, 0, 0, 255, 255,
    255, 0, 0, 0, 0, 0, 255, 24, 0, 1, 2, 0, 0, 0, 0, 7,
    0, 0, 0, 3, 1, 0, 0, 0, 0, 2, 0, 5, 0, 1, 0, 0,
    0, 0, 255, 0, 255, 0, 0, 0, 255, 0, 255, 0, 0, 0, 2, 0,
    255, 0, 255, 0, 0, 0, 0, 255, 0, 255, 255, 255, 255, 255, 0, 255,
    0, 255, 0, 0, 0, 1, 2, 3, 0, 1, 2, 12, 0, 0, 1, 7,
    29, 4, 1, 255, 11, 66, 11, 0, 1, 0, 0, 0, 0, 255, 0, 255,
    255, 255, 0, 0, 0, 255, 255, 127, 255, 255, 255, 255, 255, 0, 0, 255,
    0, 0, 255, 255, 0, 255, 255, 255, 255, 255, 255, 255, 255, 134, 1, 11,
    0, 25, 6, 15, 11, 61, 24, 123, 95, 114, 68, 53, 1, 49, 0, 60,
    98, 198, 0, 88, 29, 0, 6, 12, 0, 0, 255, 0, 255, 0, 0, 118,
    0, 255, 0, 255, 0, 255, 0, 255, 0, 255, 255, 0, 255, 255, 0, 255,
    2, 255, 255, 255, 0, 0, 0, 255, 156, 0, 12, 14, 19, 3, 12, 47,
    17, 3, 12, 5, 30, 47, 22, 0, 205, 0, 184, 70, 19, 0, 22, 8,
    0, 6, 1, 255, 0, 255, 255, 0, 255, 0, 0, 0, 0, 0, 255, 0,
    255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255, 0, 0, 255, 255, 255,
    255, 255, 255, 26, 0, 7, 0, 4, 0, 23, 8, 15, 0, 18, 19, 56,
    23, 24, 0, 9, 0, 82, 37, 24, 0, 71, 0, 0, 0, 0, 255, 0,
    255, 255, 0, 255, 255, 0, 0, 0, 0, 255, 0, 255, 255, 255, 0, 255,
    255, 0, 255, 255, 255, 255, 0, 0, 255, 255, 255, 255, 0, 255, 17, 112,
    0, 2, 0, 15, 0, 0, 0, 35, 0, 0, 2, 0, 59, 9, 1, 0,
    36, 0, 0, 8, 0, 0, 0, 0, 0, 255, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 255, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 255, 255, 254, 0, 9, 14, 20, 0, 15,
    6, 70, 144, 14, 45, 47, 92, 16, 3, 123, 0, 38, 23, 115, 52, 22,
    42, 2, 80, 19, 255, 0, 255, 0, 0, 255, 255, 0, 255, 255, 0, 10,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 255, 0, 255, 255, 255, 0, 0,
    0, 1, 255, 255, 152, 2, 19, 24, 85, 0, 29, 23, 26, 25, 2, 9,
    43, 60, 62, 1, 32, 0, 122, 45, 169, 15, 13, 30, 7, 4, 8, 0,
    0, 255, 0, 0, 0, 0, 0, 255, 0, 0, 0, 2, 0, 0, 0, 0,
    0, 0, 1, 255, 0, 0, 0, 0, 255, 0, 0, 0, 0, 0, 0, 5,
    0, 0, 3, 7, 0, 0, 10, 2, 3, 0, 26, 6, 6, 20, 1, 2,
    0, 20, 1, 11, 5, 5, 2, 0, 0, 1, 255, 0, 255, 255, 255, 0,
    255, 255, 255, 255, 0, 0, 0, 0, 0, 255, 0, 0, 0, 0, 255, 0,
    0, 255, 255, 255, 0, 255, 0, 0, 0, 255, 36, 2, 23, 15, 36, 143,
    5, 23, 52, 52, 66, 48, 92, 57, 216, 10, 125, 35, 89, 58, 254, 9,
    24, 14, 0, 0, 8, 255, 0, 255, 0, 255, 255, 255, 0, 0, 255, 1,
    0, 0, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 0, 0, 0, 0,
    255, 0, 0, 0, 255, 12, 0, 1, 4, 6, 0, 3, 21, 10, 0, 0,
    0, 18, 8, 4, 0, 1, 0, 65, 35, 8, 3, 0, 0, 0, 0, 0,
    255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255, 0, 0, 0, 255, 0,
    0, 0, 255, 0, 0, 255, 0, 255, 255, 255, 0, 255, 255, 0, 0, 255,
    40, 72, 7, 10, 16, 2, 23, 10, 34, 0, 0, 1, 34, 15, 21, 1,
    3, 0, 203, 28, 58, 23, 11, 0, 10, 0, 2, 0, 0, 0, 0, 0,
    0, 255, 0, 255, 255, 0, 0, 0, 0, 255, 0, 0, 255, 255, 1, 255,
    0, 255, 255, 0, 255, 255, 0, 255, 2, 0, 255, 6, 5, 1, 9, 5,
    0, 0, 0, 22, 0, 9, 8, 8, 6, 9, 1, 10, 0, 20, 6, 182,
    0, 13, 0, 0, 24, 1, 255, 0, 255, 255, 255, 0, 0, 255, 0, 255,
    0, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 255, 0, 255, 255, 255,
    255, 255, 0, 255, 255, 255, 0, 6, 0, 0, 0, 4, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 9, 0, 0, 0, 0,
    0, 255, 255, 0, 0, 0, 0, 255, 0, 255, 0, 0, 0, 0, 0, 0,
    255, 0, 0, 0, 0, 255, 0, 0, 0, 0, 255, 255, 0, 0, 0, 255,
    255, 0, 254, 0, 0, 0, 26, 0, 0, 0, 61, 0, 0, 0, 0, 0,
    14, 0, 0, 0, 0, 0, 25, 0, 0, 0, 0, 0, 255, 255, 255, 0,
    0, 0, 0, 0, 0, 255, 255, 0, 0, 0, 255, 0, 1, 0, 0, 0,
    255, 0, 0, 0, 0, 0, 0, 0, 255, 0, 255, 255, 20, 0, 56, 43,
    8, 162, 14, 3, 23, 19, 2, 118, 31, 26, 46, 0, 20, 0, 23, 6,
    24, 19, 6, 21, 5, 27, 63, 255, 0, 255, 0, 0, 255, 255, 255, 255,
    255, 3, 0, 255, 255, 255, 0, 0, 255, 0, 0, 0, 0, 255, 0, 255,
    255, 0, 255, 255, 0, 255, 255, 67, 0, 12, 15, 9, 7, 8, 66, 13,
    254, 3, 23, 14, 16, 16, 0, 8, 0, 29, 11, 26, 0, 5, 5, 1,
    10, 13, 255, 0, 255, 255, 0, 255, 0, 0, 255, 255, 1, 255, 0, 255,
    255, 0, 0, 255, 0, 1, 0, 0, 0, 0, 255, 255, 255, 0, 255, 255,
    0, 255, 18, 3, 3, 12, 1, 0, 2, 0, 7, 0, 1, 0, 2, 2,
    8, 0, 6, 0, 6, 7, 4, 0, 2, 0, 0, 0, 1, 255, 0, 0,
    255, 0, 0, 255, 255, 255, 0, 0, 0, 0, 0, 255, 255, 0, 0, 0,
    0, 0, 0, 0, 255, 255, 255, 255, 0, 0, 255, 255, 255, 29, 2, 0,
    0, 0, 0, 0, 0, 5, 2, 22, 30, 25, 38, 19, 0, 33, 255, 4,
    39, 24, 0, 88, 0, 0, 0, 0, 255, 0, 255, 255, 0, 255, 0, 255,
    255, 255, 36, 255, 255, 255, 255, 255, 0, 255, 255, 0, 255, 0, 0, 6,
    0, 255, 255, 255, 0, 0, 0, 255, 44, 0, 33, 0, 25, 0, 142, 5,
    46, 10, 25, 32, 26, 13, 6, 0, 3, 0, 30, 8, 35, 0, 25, 5,
    0, 44, 7, 0, 0, 255, 255, 0, 255, 255, 73, 0, 255, 0, 0, 0,
    255, 255, 255, 255, 255, 0, 0, 255, 0, 0, 0, 39, 0, 255, 255, 255,
    0, 0, 0, 52, 0, 21, 0, 57, 0, 119, 12, 47, 3, 59, 33, 45,
    15, 12, 0, 3, 0, 52, 82, 49, 1, 11, 0, 0, 0, 0, 0, 255,
    0, 255, 255, 255, 255, 255, 0, 0, 0, 255, 0, 255, 255, 255, 0, 255,
    255, 0, 255, 255, 255, 255, 0, 0, 255, 255, 255, 255, 255, 0, 25, 0,
    4, 3, 53, 0, 0, 2, 12, 72, 0, 0, 30, 0, 0, 254, 0, 0,
    6, 3, 3, 0, 0, 0, 0, 0, 0, 255, 0, 255, 0, 255, 0, 255,
    255, 255, 255, 0, 0, 0, 0, 255, 0, 255, 255, 255, 255, 0, 255, 0,
    0, 255, 255, 0, 0, 0, 0, 0, 0, 19, 2, 1, 7, 9, 1, 12,
    5, 9, 41, 1, 0, 10, 7, 9, 0, 8, 0, 12, 28, 8, 0, 0,
    0, 0, 1, 0, 255, 0, 255, 255, 0, 255, 255, 255, 255, 0, 0, 255,
    0, 255, 255, 255, 0, 255, 255, 0, 0, 0, 255, 0, 255, 255, 0, 0,
    255, 255, 0, 255, 0, 0, 0, 0, 1, 5, 0, 0, 1, 0, 0, 0,
    0, 0, 0, 45, 0, 0, 3, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 255, 255, 255, 0, 255, 255, 255, 255, 0, 255, 0, 255, 255, 255, 0,
    0, 255, 255, 255, 255, 0, 255, 255, 255, 0, 255, 0, 0, 255, 0, 95,
    2, 19, 0, 6, 2, 121, 9, 15, 1, 5, 44, 18, 26, 7, 0, 11,
    2, 68, 49, 20, 0, 2, 17, 0, 0, 6, 0, 0, 255, 0, 255, 255,
    255, 0, 255, 255, 0, 255, 0, 255, 0, 255, 255, 255, 0, 0, 255, 255,
    255, 0, 0, 255, 0, 0, 0, 31, 0, 0, 1, 1, 0, 0, 2, 1,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 255, 0, 0, 0, 0, 0, 0, 0, 0, 255, 0, 0, 255, 255,
    0, 0, 255, 0, 255, 0, 255, 255, 255, 255, 0, 0, 0, 0, 255, 0,
    0, 0, 0, 0, 255, 0, 0, 0, 0, 0, 0, 255, 0, 0, 255, 0,
    0, 0, 0, 0, 0, 0, 255, 0, 0, 0, 0, 0, 0, 255, 255, 0,
    255, 255, 255, 255, 255, 255, 0, 255, 0, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 0, 0, 255, 0, 255, 255, 255, 0, 0, 0,
];
