//! # Text Layout
//!
//! Greedy line breaking at UAX#14 opportunities, measured with the standard
//! font metrics. Widths here are millimetres, like the rest of the layout.

use crate::font::StandardFont;
use unicode_linebreak::{linebreaks, BreakOpportunity};

/// A line of text after line-breaking.
#[derive(Debug, Clone, PartialEq)]
pub struct BrokenLine {
    /// The text with trailing whitespace removed.
    pub text: String,
    /// Width of `text` in mm.
    pub width: f64,
}

/// Compute UAX#14 break opportunities indexed by char position.
///
/// Each entry is the break opportunity *before* that character. Index 0 is
/// always `None`.
fn compute_break_opportunities(text: &str) -> Vec<Option<BreakOpportunity>> {
    let char_count = text.chars().count();
    let mut result = vec![None; char_count];

    // linebreaks() yields the byte offset *after* the break.
    let byte_to_char: Vec<usize> = {
        let mut map = vec![0usize; text.len() + 1];
        for (char_idx, (byte_idx, _)) in text.char_indices().enumerate() {
            map[byte_idx] = char_idx;
        }
        map[text.len()] = char_count;
        map
    };

    for (byte_offset, opp) in linebreaks(text) {
        let char_idx = byte_to_char[byte_offset];
        if char_idx < char_count {
            result[char_idx] = Some(opp);
        }
    }

    result
}

fn is_newline(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

pub struct TextLayout {
    font: StandardFont,
    font_size: f64,
}

impl TextLayout {
    pub fn new(font: StandardFont, font_size: f64) -> Self {
        Self { font, font_size }
    }

    /// Width of `text` in mm.
    pub fn measure(&self, text: &str) -> f64 {
        self.font.measure_mm(text, self.font_size)
    }

    /// Break a string into lines that fit within `max_width` mm.
    ///
    /// Breaks at the last allowed opportunity before the overflow. A single
    /// word wider than the line is split at the overflowing character.
    /// Explicit newlines always break. Empty input yields no lines.
    pub fn break_into_lines(&self, text: &str, max_width: f64) -> Vec<BrokenLine> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = text.chars().collect();
        let widths: Vec<f64> = chars
            .iter()
            .map(|&ch| self.font.measure_mm(ch.encode_utf8(&mut [0; 4]), self.font_size))
            .collect();
        let break_opps = compute_break_opportunities(text);

        let mut lines = Vec::new();
        let mut line_start = 0;
        let mut line_width = 0.0;
        let mut last_break_point: Option<usize> = None;

        for (i, &ch) in chars.iter().enumerate() {
            if i > 0 {
                match break_opps[i] {
                    Some(BreakOpportunity::Mandatory) => {
                        lines.push(self.make_line(&chars[line_start..i]));
                        line_start = i;
                        line_width = 0.0;
                        last_break_point = None;
                    }
                    Some(BreakOpportunity::Allowed) => {
                        last_break_point = Some(i - 1);
                    }
                    None => {}
                }
            }

            if is_newline(ch) {
                continue;
            }

            // Trailing spaces never cause an overflow.
            if line_width + widths[i] > max_width && line_start < i && !ch.is_whitespace() {
                let break_at = match last_break_point {
                    Some(bp) if bp >= line_start => bp + 1,
                    _ => i,
                };
                lines.push(self.make_line(&chars[line_start..break_at]));
                line_start = break_at;
                line_width = widths[line_start..=i].iter().sum();
                last_break_point = None;
                continue;
            }

            line_width += widths[i];
        }

        if line_start < chars.len() {
            lines.push(self.make_line(&chars[line_start..]));
        }

        // A trailing newline leaves a blank final line behind.
        while lines.last().is_some_and(|l| l.text.is_empty()) {
            lines.pop();
        }
        lines
    }

    fn make_line(&self, chars: &[char]) -> BrokenLine {
        let text: String = chars.iter().filter(|c| !is_newline(**c)).collect();
        let text = text.trim_end().to_string();
        let width = self.measure(&text);
        BrokenLine { text, width }
    }
}
