//! Advance widths for the standard Helvetica faces, from the Adobe AFM files.
//!
//! Widths are in 1/1000 em. The tables cover printable ASCII; Latin-1
//! letters with diacritics take the width of their base letter, which is
//! what the AFM data says for every accented letter the voucher prints
//! except `í`/`Í`-style dotless bases handled explicitly below.

/// Printable ASCII (0x20..=0x7E) widths for Helvetica.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Printable ASCII (0x20..=0x7E) widths for Helvetica-Bold.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

/// Width metrics for one standard face.
#[derive(Debug, Clone, Copy)]
pub struct StandardFontMetrics {
    ascii: &'static [u16; 95],
    /// Width used for anything the tables don't know.
    default_width: u16,
}

pub(crate) const HELVETICA_METRICS: StandardFontMetrics = StandardFontMetrics {
    ascii: &HELVETICA,
    default_width: 556,
};

pub(crate) const HELVETICA_BOLD_METRICS: StandardFontMetrics = StandardFontMetrics {
    ascii: &HELVETICA_BOLD,
    default_width: 611,
};

impl StandardFontMetrics {
    /// Width of `ch` in 1/1000 em.
    fn units(&self, ch: char) -> u16 {
        let cp = ch as u32;
        if (0x20..=0x7E).contains(&cp) {
            return self.ascii[(cp - 0x20) as usize];
        }
        match ch {
            '\u{A0}' => self.ascii[0],
            'í' | 'ì' | 'î' | 'ï' => 278,
            '¡' => 333,
            '¿' => 611,
            '•' => 350,
            '–' => 556,
            '—' => 1000,
            '·' => 278,
            '°' => 400,
            _ => match fold_diacritic(ch) {
                Some(base) => self.ascii[(base as u32 - 0x20) as usize],
                None => self.default_width,
            },
        }
    }

    /// Get the advance width of a character in points.
    pub fn char_width(&self, ch: char, font_size: f64) -> f64 {
        self.units(ch) as f64 * font_size / 1000.0
    }

    /// Measure a string in points.
    pub fn measure_string(&self, text: &str, font_size: f64) -> f64 {
        text.chars().map(|ch| self.char_width(ch, font_size)).sum()
    }
}

/// Map a Latin-1 letter with a diacritic to its ASCII base letter.
fn fold_diacritic(ch: char) -> Option<char> {
    let base = match ch {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    };
    Some(base)
}
