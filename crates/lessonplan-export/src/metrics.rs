//! Text measurement and line wrapping for the standard Helvetica faces.
//!
//! The PDF uses the built-in Type1 `Helvetica` and `Helvetica-Bold` fonts
//! with `WinAnsiEncoding`, so no font program is embedded. Widths come from
//! the Adobe font metrics (units of 1/1000 em). Characters outside WinAnsi
//! are written, and measured, as `?`.

use serde::{Deserialize, Serialize};

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

const SUBSTITUTE: u8 = b'?';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// PostScript name of the standard font.
    pub fn base_font(self) -> &'static str {
        match self {
            FontWeight::Regular => "Helvetica",
            FontWeight::Bold => "Helvetica-Bold",
        }
    }

    /// Resource name used in page content streams.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontWeight::Regular => "F1",
            FontWeight::Bold => "F2",
        }
    }
}

// Advance widths for 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Map a character to its WinAnsiEncoding byte, if it has one.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        ' '..='~' => c as u8,
        '\u{a0}'..='\u{ff}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(byte)
}

/// Encode text for a WinAnsi string operand, substituting `?` for anything
/// the encoding cannot represent.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| win_ansi_byte(c).unwrap_or(SUBSTITUTE))
        .collect()
}

fn byte_width(byte: u8, weight: FontWeight) -> u16 {
    let bold = weight == FontWeight::Bold;
    match byte {
        0x20..=0x7e => {
            let index = (byte - 0x20) as usize;
            if bold {
                HELVETICA_BOLD_ASCII[index]
            } else {
                HELVETICA_ASCII[index]
            }
        }
        0x95 => 350,
        0x96 => 556,
        0x97 | 0x85 | 0x89 => 1000,
        0x91 | 0x92 | 0x82 => {
            if bold {
                278
            } else {
                222
            }
        }
        0x93 | 0x94 | 0x84 => {
            if bold {
                500
            } else {
                333
            }
        }
        0xa0 => 278,
        // Remaining Latin-1 letters and symbols are close to the digit width.
        _ => 556,
    }
}

/// Advance width of one character in font units.
pub fn char_units(c: char, weight: FontWeight) -> u16 {
    byte_width(win_ansi_byte(c).unwrap_or(SUBSTITUTE), weight)
}

/// Width of `text` in millimetres at `size` points.
pub fn text_width(text: &str, size: f32, weight: FontWeight) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_units(c, weight))).sum();
    units_to_mm(units, size)
}

fn units_to_mm(units: u32, size: f32) -> f32 {
    units as f32 * size / 1000.0 / PT_PER_MM
}

/// Split `text` into lines no wider than `max_width` millimetres.
///
/// Explicit newlines always end a line. Words are packed greedily with single
/// spaces between them; a word wider than the column is broken between
/// characters. Leading indentation of a paragraph is kept on its first line.
/// Empty input produces one empty line.
pub fn wrap_text(text: &str, size: f32, weight: FontWeight, max_width: f32) -> Vec<String> {
    let mut wrapper = Wrapper {
        size,
        weight,
        max_width,
        lines: Vec::new(),
        current: String::new(),
        width: 0.0,
        has_content: false,
    };

    for paragraph in text.split('\n') {
        wrapper.paragraph(paragraph.trim_end_matches('\r'));
    }

    wrapper.lines
}

struct Wrapper {
    size: f32,
    weight: FontWeight,
    max_width: f32,
    lines: Vec<String>,
    current: String,
    width: f32,
    has_content: bool,
}

impl Wrapper {
    fn paragraph(&mut self, paragraph: &str) {
        if paragraph.trim().is_empty() {
            self.flush();
            return;
        }

        let indent_len = paragraph.chars().take_while(|c| c.is_whitespace()).count();
        let indent = " ".repeat(indent_len);
        let indent_width = text_width(&indent, self.size, self.weight);
        if indent_len > 0 && indent_width < self.max_width {
            self.current = indent;
            self.width = indent_width;
        }

        let space = text_width(" ", self.size, self.weight);
        for word in paragraph.split_whitespace() {
            let word_width = text_width(word, self.size, self.weight);

            if word_width > self.max_width {
                self.long_word(word, space);
                continue;
            }

            if !self.has_content && self.width + word_width > self.max_width {
                // Indentation alone would push the word past the column.
                self.current.clear();
                self.width = 0.0;
            }

            if self.has_content {
                if self.width + space + word_width > self.max_width {
                    self.flush();
                } else {
                    self.current.push(' ');
                    self.width += space;
                }
            }
            self.current.push_str(word);
            self.width += word_width;
            self.has_content = true;
        }

        self.flush();
    }

    fn long_word(&mut self, word: &str, space: f32) {
        if self.has_content {
            if self.width + space < self.max_width {
                self.current.push(' ');
                self.width += space;
            } else {
                self.flush();
            }
        }

        for c in word.chars() {
            let w = units_to_mm(u32::from(char_units(c, self.weight)), self.size);
            if self.has_content && self.width + w > self.max_width {
                self.flush();
            }
            self.current.push(c);
            self.width += w;
            self.has_content = true;
        }
    }

    fn flush(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.width = 0.0;
        self.has_content = false;
    }
}
