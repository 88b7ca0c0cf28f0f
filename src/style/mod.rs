//! # Document Style
//!
//! The fixed visual vocabulary of the voucher: colors, text styles and
//! alignment. There is exactly one template, so there is no cascade to
//! resolve. Renderers pick a [`TextStyle`] and a palette color and draw.

use crate::font::StandardFont;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64, // 0.0 - 1.0
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

macro_rules! rgb8 {
    ($r:expr, $g:expr, $b:expr) => {
        Color {
            r: $r as f64 / 255.0,
            g: $g as f64 / 255.0,
            b: $b as f64 / 255.0,
            a: 1.0,
        }
    };
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
}

/// Brand palette of the voucher template.
pub mod palette {
    use super::Color;

    pub const PRIMARY: Color = rgb8!(0x24, 0x25, 0x53);
    pub const ORANGE: Color = rgb8!(0xF0, 0x7E, 0x1A);
    pub const PURPLE: Color = rgb8!(0x74, 0x38, 0x8D);
    pub const CYAN: Color = rgb8!(0x50, 0xBF, 0xD6);
    pub const TEXT: Color = rgb8!(0x33, 0x33, 0x33);
    pub const MUTED: Color = rgb8!(120, 120, 120);
    pub const FOOTER_TEXT: Color = rgb8!(100, 100, 100);
    pub const LIGHT_GRAY: Color = rgb8!(245, 245, 245);
    pub const PHOTO_PLACEHOLDER: Color = rgb8!(220, 220, 220);
    pub const HOTEL_BAND: Color = rgb8!(240, 245, 255);
    pub const INCLUDES_BAND: Color = rgb8!(220, 255, 220);
    pub const INCLUDES_TEXT: Color = rgb8!(0, 128, 0);
    pub const EXCLUDES_BAND: Color = rgb8!(255, 220, 220);
    pub const ALERT: Color = rgb8!(200, 0, 0);
}

/// Horizontal anchor of a text line relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Font, size and color for a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: StandardFont,
    /// Font size in points.
    pub size: f64,
    pub color: Color,
}

impl TextStyle {
    pub const fn regular(size: f64, color: Color) -> Self {
        Self {
            font: StandardFont::Helvetica,
            size,
            color,
        }
    }

    pub const fn bold(size: f64, color: Color) -> Self {
        Self {
            font: StandardFont::HelveticaBold,
            size,
            color,
        }
    }
}
