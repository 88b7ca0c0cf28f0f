//! # Font Management
//!
//! The voucher prints everything in the standard Helvetica faces, which PDF
//! viewers ship with, so nothing is embedded. This module names the faces
//! and measures text with their AFM widths.

pub mod metrics;

pub use metrics::StandardFontMetrics;

/// Points per millimetre.
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// The standard PDF fonts the template uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// The PDF name for this font.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }

    pub fn metrics(&self) -> &'static StandardFontMetrics {
        match self {
            Self::Helvetica => &metrics::HELVETICA_METRICS,
            Self::HelveticaBold => &metrics::HELVETICA_BOLD_METRICS,
        }
    }

    /// Width of `text` set at `font_size` points, in millimetres.
    pub fn measure_mm(&self, text: &str, font_size: f64) -> f64 {
        self.metrics().measure_string(text, font_size) / PT_PER_MM
    }
}

/// Map a Unicode codepoint to its WinAnsiEncoding byte, if it has one.
pub fn unicode_to_winansi(ch: char) -> Option<u8> {
    let cp = ch as u32;
    // ASCII printable and Latin-1 map directly
    if (0x20..=0x7E).contains(&cp) || (0xA0..=0xFF).contains(&cp) {
        return Some(cp as u8);
    }
    // Windows-1252 special mappings (0x80-0x9F)
    match cp {
        0x20AC => Some(0x80), // Euro sign
        0x201A => Some(0x82), // Single low-9 quotation mark
        0x0192 => Some(0x83), // Latin small letter f with hook
        0x201E => Some(0x84), // Double low-9 quotation mark
        0x2026 => Some(0x85), // Horizontal ellipsis
        0x2020 => Some(0x86), // Dagger
        0x2021 => Some(0x87), // Double dagger
        0x02C6 => Some(0x88), // Modifier letter circumflex accent
        0x2030 => Some(0x89), // Per mille sign
        0x0160 => Some(0x8A), // Latin capital letter S with caron
        0x2039 => Some(0x8B), // Single left-pointing angle quotation
        0x0152 => Some(0x8C), // Latin capital ligature OE
        0x017D => Some(0x8E), // Latin capital letter Z with caron
        0x2018 => Some(0x91), // Left single quotation mark
        0x2019 => Some(0x92), // Right single quotation mark
        0x201C => Some(0x93), // Left double quotation mark
        0x201D => Some(0x94), // Right double quotation mark
        0x2022 => Some(0x95), // Bullet
        0x2013 => Some(0x96), // En dash
        0x2014 => Some(0x97), // Em dash
        0x02DC => Some(0x98), // Small tilde
        0x2122 => Some(0x99), // Trade mark sign
        0x0161 => Some(0x9A), // Latin small letter s with caron
        0x203A => Some(0x9B), // Single right-pointing angle quotation
        0x0153 => Some(0x9C), // Latin small ligature oe
        0x017E => Some(0x9E), // Latin small letter z with caron
        0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
        _ => None,
    }
}

/// Rewrite `text` into characters the standard fonts can show.
///
/// Arrows become `->`, tabs become spaces, and anything else outside
/// WinAnsi (emoji, pictographs, variation selectors) is dropped. A space
/// left dangling at the start by a dropped pictograph goes with it.
pub fn to_printable(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{2192}' | '\u{27F6}' | '\u{2794}' | '\u{279C}' => out.push_str("->"),
            '\u{2190}' => out.push_str("<-"),
            '\t' => out.push(' '),
            '\n' | '\r' => out.push(ch),
            _ if unicode_to_winansi(ch).is_some() => out.push(ch),
            _ => {}
        }
    }
    if out.starts_with(' ') && !text.starts_with(' ') {
        out.trim_start().to_string()
    } else {
        out
    }
}
