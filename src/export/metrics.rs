//! Glyph metrics of the standard Helvetica faces.
//!
//! Widths are the Adobe AFM advances in 1/1000 em, indexed by the WinAnsi
//! byte the PDF backend writes for a character.

use super::layout::Font;

pub(crate) const MM_PER_PT: f32 = 25.4 / 72.0;

/// Helvetica advances for bytes 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advances for bytes 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Helvetica advances for bytes 0xA0..=0xBF.
#[rustfmt::skip]
const HELVETICA_SYMBOLS: [u16; 32] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
];

/// Helvetica-Bold advances for bytes 0xA0..=0xBF.
#[rustfmt::skip]
const HELVETICA_BOLD_SYMBOLS: [u16; 32] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
];

/// Maps a character to its WinAnsi byte, if the encoding has one.
pub(crate) fn win_ansi_byte(c: char) -> Option<u8> {
    match c {
        ' '..='~' | '\u{A0}'..='\u{FF}' => Some(c as u32 as u8),
        '\u{20AC}' => Some(0x80),
        '\u{2018}' => Some(0x91),
        '\u{2019}' => Some(0x92),
        '\u{201C}' => Some(0x93),
        '\u{201D}' => Some(0x94),
        '\u{2022}' => Some(0x95),
        '\u{2013}' => Some(0x96),
        '\u{2014}' => Some(0x97),
        _ => None,
    }
}

/// Advance of `c` in 1/1000 em. Unencodable characters measure as the `?`
/// written in their place.
pub fn glyph_width(c: char, font: Font) -> u32 {
    let byte = win_ansi_byte(c).unwrap_or(b'?');
    let bold = font == Font::Heading;
    let width = match byte {
        0x20..=0x7E => {
            let table = if bold { &HELVETICA_BOLD_ASCII } else { &HELVETICA_ASCII };
            table[usize::from(byte - 0x20)]
        }
        0xA0..=0xBF => {
            let table = if bold { &HELVETICA_BOLD_SYMBOLS } else { &HELVETICA_SYMBOLS };
            table[usize::from(byte - 0xA0)]
        }
        0xC0..=0xFF => return latin_letter_width(c, font),
        0x80 | 0x96 => 556,
        0x91 | 0x92 => {
            if bold {
                278
            } else {
                222
            }
        }
        0x93 | 0x94 => {
            if bold {
                500
            } else {
                333
            }
        }
        0x95 => 350,
        _ => 1000,
    };
    u32::from(width)
}

/// Accented Latin-1 letters share the advance of their base letter.
fn latin_letter_width(c: char, font: Font) -> u32 {
    let bold = font == Font::Heading;
    let base = match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' | 'ì'..='ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ñ' => 'n',
        'ò'..='ö' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'Æ' => return 1000,
        'Ð' => return 722,
        'Ø' => return 778,
        '×' | '÷' => return 584,
        'Þ' => return 667,
        'ß' | 'ø' => return 611,
        'æ' => return 889,
        'ð' | 'þ' => return if bold { 611 } else { 556 },
        _ => '?',
    };
    glyph_width(base, font)
}

/// Width of `text` in 1/1000 em.
pub fn text_units(text: &str, font: Font) -> u32 {
    text.chars().map(|c| glyph_width(c, font)).sum()
}

/// Millimetres per font unit at `size` points.
pub(crate) fn mm_per_unit(size: f32) -> f32 {
    size * MM_PER_PT / 1000.0
}

/// Rendered width of `text` in millimetres.
pub fn text_width(text: &str, font: Font, size: f32) -> f32 {
    text_units(text, font) as f32 * mm_per_unit(size)
}
