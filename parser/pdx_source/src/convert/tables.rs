//! High-half byte to UTF-8 mapping tables for the Windows code pages.
//!
//! Index by `byte - 0x80`. Entries follow the Windows-1252/-1251 layouts,
//! including the non-standard 0x8F mapping Paradox files rely on for
//! Polish localization placeholders.

/// Windows-1252 high half.
///
/// `None` marks bytes the code page leaves undefined; the converter
/// reports those and skips them.
pub const WINDOWS_1252_TO_UTF8: [Option<&str>; 128] = [
    Some("€"), // 0x80
    None, // 0x81
    Some("‚"), // 0x82
    Some("ƒ"), // 0x83
    Some("„"), // 0x84
    Some("…"), // 0x85
    Some("†"), // 0x86
    Some("‡"), // 0x87
    Some("ˆ"), // 0x88
    Some("‰"), // 0x89
    Some("Š"), // 0x8A
    Some("‹"), // 0x8B
    Some("Œ"), // 0x8C
    None, // 0x8D
    Some("Ž"), // 0x8E
    Some("Ę"), // 0x8F
    None, // 0x90
    Some("‘"), // 0x91
    Some("’"), // 0x92
    Some("“"), // 0x93
    Some("”"), // 0x94
    Some("•"), // 0x95
    Some("–"), // 0x96
    Some("—"), // 0x97
    Some("˜"), // 0x98
    Some("™"), // 0x99
    Some("š"), // 0x9A
    Some("›"), // 0x9B
    Some("œ"), // 0x9C
    None, // 0x9D
    Some("ž"), // 0x9E
    Some("Ÿ"), // 0x9F
    Some(" "), // 0xA0
    Some("¡"), // 0xA1
    Some("¢"), // 0xA2
    Some("£"), // 0xA3
    Some("¤"), // 0xA4
    Some("¥"), // 0xA5
    Some("¦"), // 0xA6
    Some("§"), // 0xA7
    Some("¨"), // 0xA8
    Some("©"), // 0xA9
    Some("ª"), // 0xAA
    Some("«"), // 0xAB
    Some("¬"), // 0xAC
    Some("­"), // 0xAD
    Some("®"), // 0xAE
    Some("¯"), // 0xAF
    Some("°"), // 0xB0
    Some("±"), // 0xB1
    Some("²"), // 0xB2
    Some("³"), // 0xB3
    Some("´"), // 0xB4
    Some("µ"), // 0xB5
    Some("¶"), // 0xB6
    Some("·"), // 0xB7
    Some("¸"), // 0xB8
    Some("¹"), // 0xB9
    Some("º"), // 0xBA
    Some("»"), // 0xBB
    Some("¼"), // 0xBC
    Some("½"), // 0xBD
    Some("¾"), // 0xBE
    Some("¿"), // 0xBF
    Some("À"), // 0xC0
    Some("Á"), // 0xC1
    Some("Â"), // 0xC2
    Some("Ã"), // 0xC3
    Some("Ä"), // 0xC4
    Some("Å"), // 0xC5
    Some("Æ"), // 0xC6
    Some("Ç"), // 0xC7
    Some("È"), // 0xC8
    Some("É"), // 0xC9
    Some("Ê"), // 0xCA
    Some("Ë"), // 0xCB
    Some("Ì"), // 0xCC
    Some("Í"), // 0xCD
    Some("Î"), // 0xCE
    Some("Ï"), // 0xCF
    Some("Ð"), // 0xD0
    Some("Ñ"), // 0xD1
    Some("Ò"), // 0xD2
    Some("Ó"), // 0xD3
    Some("Ô"), // 0xD4
    Some("Õ"), // 0xD5
    Some("Ö"), // 0xD6
    Some("×"), // 0xD7
    Some("Ø"), // 0xD8
    Some("Ù"), // 0xD9
    Some("Ú"), // 0xDA
    Some("Û"), // 0xDB
    Some("Ü"), // 0xDC
    Some("Ý"), // 0xDD
    Some("Þ"), // 0xDE
    Some("ß"), // 0xDF
    Some("à"), // 0xE0
    Some("á"), // 0xE1
    Some("â"), // 0xE2
    Some("ã"), // 0xE3
    Some("ä"), // 0xE4
    Some("å"), // 0xE5
    Some("æ"), // 0xE6
    Some("ç"), // 0xE7
    Some("è"), // 0xE8
    Some("é"), // 0xE9
    Some("ê"), // 0xEA
    Some("ë"), // 0xEB
    Some("ì"), // 0xEC
    Some("í"), // 0xED
    Some("î"), // 0xEE
    Some("ï"), // 0xEF
    Some("ð"), // 0xF0
    Some("ñ"), // 0xF1
    Some("ò"), // 0xF2
    Some("ó"), // 0xF3
    Some("ô"), // 0xF4
    Some("õ"), // 0xF5
    Some("ö"), // 0xF6
    Some("÷"), // 0xF7
    Some("ø"), // 0xF8
    Some("ù"), // 0xF9
    Some("ú"), // 0xFA
    Some("û"), // 0xFB
    Some("ü"), // 0xFC
    Some("ý"), // 0xFD
    Some("þ"), // 0xFE
    Some("ÿ"), // 0xFF
];

/// Windows-1251 high half.
///
/// `None` marks bytes the code page leaves undefined; the converter
/// reports those and skips them.
pub const WINDOWS_1251_TO_UTF8: [Option<&str>; 128] = [
    Some("Ђ"), // 0x80
    Some("Ѓ"), // 0x81
    Some("‚"), // 0x82
    Some("ѓ"), // 0x83
    Some("„"), // 0x84
    Some("…"), // 0x85
    Some("†"), // 0x86
    Some("‡"), // 0x87
    Some("€"), // 0x88
    Some("‰"), // 0x89
    Some("Љ"), // 0x8A
    Some("‹"), // 0x8B
    Some("Њ"), // 0x8C
    Some("Ќ"), // 0x8D
    Some("Ћ"), // 0x8E
    Some("Џ"), // 0x8F
    Some("ђ"), // 0x90
    Some("‘"), // 0x91
    Some("’"), // 0x92
    Some("“"), // 0x93
    Some("”"), // 0x94
    Some("•"), // 0x95
    Some("–"), // 0x96
    Some("—"), // 0x97
    None, // 0x98
    Some("™"), // 0x99
    Some("љ"), // 0x9A
    Some("›"), // 0x9B
    Some("њ"), // 0x9C
    Some("ќ"), // 0x9D
    Some("ћ"), // 0x9E
    Some("џ"), // 0x9F
    Some(" "), // 0xA0
    Some("Ў"), // 0xA1
    Some("ў"), // 0xA2
    Some("Ј"), // 0xA3
    Some("¤"), // 0xA4
    Some("Ґ"), // 0xA5
    Some("¦"), // 0xA6
    Some("§"), // 0xA7
    Some("Ё"), // 0xA8
    Some("©"), // 0xA9
    Some("Є"), // 0xAA
    Some("«"), // 0xAB
    Some("¬"), // 0xAC
    Some("­"), // 0xAD
    Some("®"), // 0xAE
    Some("Ї"), // 0xAF
    Some("°"), // 0xB0
    Some("±"), // 0xB1
    Some("І"), // 0xB2
    Some("і"), // 0xB3
    Some("ґ"), // 0xB4
    Some("µ"), // 0xB5
    Some("¶"), // 0xB6
    Some("·"), // 0xB7
    Some("ё"), // 0xB8
    Some("№"), // 0xB9
    Some("є"), // 0xBA
    Some("»"), // 0xBB
    Some("ј"), // 0xBC
    Some("Ѕ"), // 0xBD
    Some("ѕ"), // 0xBE
    Some("ї"), // 0xBF
    Some("А"), // 0xC0
    Some("Б"), // 0xC1
    Some("В"), // 0xC2
    Some("Г"), // 0xC3
    Some("Д"), // 0xC4
    Some("Е"), // 0xC5
    Some("Ж"), // 0xC6
    Some("З"), // 0xC7
    Some("И"), // 0xC8
    Some("Й"), // 0xC9
    Some("К"), // 0xCA
    Some("Л"), // 0xCB
    Some("М"), // 0xCC
    Some("Н"), // 0xCD
    Some("О"), // 0xCE
    Some("П"), // 0xCF
    Some("Р"), // 0xD0
    Some("С"), // 0xD1
    Some("Т"), // 0xD2
    Some("У"), // 0xD3
    Some("Ф"), // 0xD4
    Some("Х"), // 0xD5
    Some("Ц"), // 0xD6
    Some("Ч"), // 0xD7
    Some("Ш"), // 0xD8
    Some("Щ"), // 0xD9
    Some("Ъ"), // 0xDA
    Some("Ы"), // 0xDB
    Some("Ь"), // 0xDC
    Some("Э"), // 0xDD
    Some("Ю"), // 0xDE
    Some("Я"), // 0xDF
    Some("а"), // 0xE0
    Some("б"), // 0xE1
    Some("в"), // 0xE2
    Some("г"), // 0xE3
    Some("д"), // 0xE4
    Some("е"), // 0xE5
    Some("ж"), // 0xE6
    Some("з"), // 0xE7
    Some("и"), // 0xE8
    Some("й"), // 0xE9
    Some("к"), // 0xEA
    Some("л"), // 0xEB
    Some("м"), // 0xEC
    Some("н"), // 0xED
    Some("о"), // 0xEE
    Some("п"), // 0xEF
    Some("р"), // 0xF0
    Some("с"), // 0xF1
    Some("т"), // 0xF2
    Some("у"), // 0xF3
    Some("ф"), // 0xF4
    Some("х"), // 0xF5
    Some("ц"), // 0xF6
    Some("ч"), // 0xF7
    Some("ш"), // 0xF8
    Some("щ"), // 0xF9
    Some("ъ"), // 0xFA
    Some("ы"), // 0xFB
    Some("ь"), // 0xFC
    Some("э"), // 0xFD
    Some("ю"), // 0xFE
    Some("я"), // 0xFF
];
