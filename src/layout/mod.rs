//! # Page Layout
//!
//! The voucher is laid out with a single vertical cursor. Sections write
//! at the cursor and move it down; before each write they ask the
//! [`Composer`] to make room, and the composer opens a new page when the
//! write would cross the printable limit. A new page always gets its chrome
//! (header and footer) before anything else is drawn on it.
//!
//! All coordinates are millimetres from the top-left corner of an A4 page.
//! The PDF writer flips and scales them to points.

pub mod page_break;

use std::rc::Rc;

use crate::chrome::Chrome;
use crate::font::{to_printable, PT_PER_MM};
use crate::image_loader::LoadedImage;
use crate::style::{Color, TextAlign, TextStyle};
use crate::text::TextLayout;
use page_break::{decide_break, BreakDecision};

pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;
pub const MARGIN: f64 = 20.0;
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;
/// Cursor position on a fresh page, below the header band.
pub const CONTENT_TOP: f64 = 30.0;
/// Cursor position on the cover page.
pub const COVER_TOP: f64 = 20.0;
/// Space kept clear above the bottom edge for the footer.
pub const BOTTOM_RESERVE: f64 = 40.0;
pub const PRINTABLE_LIMIT: f64 = PAGE_HEIGHT - BOTTOM_RESERVE;

/// A fully laid-out page ready for PDF serialization.
#[derive(Debug, Clone)]
pub struct LayoutPage {
    /// 1-based page number, as printed in the footer.
    pub number: u32,
    pub width: f64,
    pub height: f64,
    pub elements: Vec<LayoutElement>,
}

impl LayoutPage {
    /// Every text run on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|el| match &el.draw {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether any text run on the page contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    pub fn image_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|el| matches!(el.draw, DrawCommand::Image { .. }))
            .count()
    }
}

/// A positioned element on a page.
#[derive(Debug, Clone)]
pub struct LayoutElement {
    /// Left edge.
    pub x: f64,
    /// Top edge; the baseline for text.
    pub y: f64,
    /// Extent to the right. For lines, the x delta to the end point.
    pub width: f64,
    /// Extent downwards. For lines, the y delta to the end point.
    pub height: f64,
    pub draw: DrawCommand,
    /// Optional hyperlink URL for link annotations.
    pub href: Option<String>,
}

/// What to actually draw for this element.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Filled rectangle. Alpha below 1 is painted translucent.
    Rect { fill: Color },
    /// Stroked line segment.
    Line { color: Color, line_width: f64 },
    /// One line of text, already positioned for its alignment.
    Text { text: String, style: TextStyle },
    /// Raster image scaled into the element box.
    Image { image_data: Rc<LoadedImage> },
}

/// Cursor, page list and chrome for one build.
pub struct Composer<'a> {
    chrome: &'a Chrome,
    pages: Vec<LayoutPage>,
    y: f64,
}

impl<'a> Composer<'a> {
    pub fn new(chrome: &'a Chrome) -> Self {
        Self {
            chrome,
            pages: Vec::new(),
            y: CONTENT_TOP,
        }
    }

    /// Close the current page and open the next one with its chrome.
    pub fn new_page(&mut self) {
        let number = self.pages.len() as u32 + 1;
        log::debug!("Starting page {}", number);
        self.pages.push(LayoutPage {
            number,
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            elements: Vec::new(),
        });
        self.y = CONTENT_TOP;
        let chrome = self.chrome;
        chrome.draw(self);
    }

    /// Number of the page currently being written.
    pub fn page_number(&self) -> u32 {
        self.pages.len() as u32
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn advance(&mut self, dy: f64) {
        self.y += dy;
    }

    /// Make sure `needed` mm fit below the cursor, breaking the page if not.
    ///
    /// Returns whether a new page was started.
    pub fn ensure_space(&mut self, needed: f64) -> bool {
        match decide_break(self.y, needed, PRINTABLE_LIMIT) {
            BreakDecision::Place => false,
            BreakDecision::NewPage => {
                self.new_page();
                true
            }
        }
    }

    fn push(&mut self, element: LayoutElement) {
        if self.pages.is_empty() {
            self.new_page();
        }
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Color) {
        self.push(LayoutElement {
            x,
            y,
            width,
            height,
            draw: DrawCommand::Rect { fill },
            href: None,
        });
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, line_width: f64) {
        self.push(LayoutElement {
            x: from.0,
            y: from.1,
            width: to.0 - from.0,
            height: to.1 - from.1,
            draw: DrawCommand::Line { color, line_width },
            href: None,
        });
    }

    /// Draw one line of text with its baseline at `y`.
    ///
    /// `x` is the left edge, centre or right edge depending on `align`.
    /// Returns the drawn width.
    pub fn text(&mut self, text: &str, x: f64, y: f64, style: TextStyle, align: TextAlign) -> f64 {
        self.text_element(text, x, y, style, align, None)
    }

    /// Like [`text`](Self::text), with a clickable link over the run.
    pub fn link(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        style: TextStyle,
        align: TextAlign,
        url: &str,
    ) -> f64 {
        self.text_element(text, x, y, style, align, Some(url.to_string()))
    }

    fn text_element(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        style: TextStyle,
        align: TextAlign,
        href: Option<String>,
    ) -> f64 {
        let text = to_printable(text);
        if text.trim().is_empty() {
            return 0.0;
        }
        let width = style.font.measure_mm(&text, style.size);
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        self.push(LayoutElement {
            x: left,
            y,
            width,
            height: style.size / PT_PER_MM,
            draw: DrawCommand::Text { text, style },
            href,
        });
        width
    }

    pub fn image(&mut self, image: &Rc<LoadedImage>, x: f64, y: f64, width: f64, height: f64) {
        self.push(LayoutElement {
            x,
            y,
            width,
            height,
            draw: DrawCommand::Image {
                image_data: Rc::clone(image),
            },
            href: None,
        });
    }

    /// Split `text` into lines no wider than `max_width`.
    pub fn wrap(&self, text: &str, style: TextStyle, max_width: f64) -> Vec<String> {
        TextLayout::new(style.font, style.size)
            .break_into_lines(&to_printable(text), max_width)
            .into_iter()
            .map(|line| line.text)
            .collect()
    }

    /// Write wrapped text line by line from the cursor.
    ///
    /// Each line gets its own space check, so a paragraph may continue on
    /// the next page. Returns the number of lines written.
    pub fn paragraph(
        &mut self,
        text: &str,
        x: f64,
        max_width: f64,
        style: TextStyle,
        line_height: f64,
    ) -> usize {
        let lines = self.wrap(text, style, max_width);
        for line in &lines {
            self.ensure_space(line_height);
            self.text(line, x, self.y, style, TextAlign::Left);
            self.y += line_height;
        }
        lines.len()
    }

    /// Hand over the finished pages.
    pub fn finish(self) -> Vec<LayoutPage> {
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AgencyConfig;
    use crate::style::palette;

    fn chrome() -> Chrome {
        Chrome::new(&AgencyConfig::default(), None)
    }

    #[test]
    fn new_page_draws_chrome_and_resets_cursor() {
        let chrome = chrome();
        let mut c = Composer::new(&chrome);
        c.new_page();
        c.set_y(200.0);
        c.new_page();
        assert_eq!(c.page_number(), 2);
        assert_eq!(c.y(), CONTENT_TOP);
        let pages = c.finish();
        assert!(pages[1].contains_text("Página 2"));
        assert!(pages[1].contains_text("Tu viaje comienza aquí"));
    }

    #[test]
    fn ensure_space_breaks_only_on_overflow() {
        let chrome = chrome();
        let mut c = Composer::new(&chrome);
        c.new_page();
        c.set_y(PRINTABLE_LIMIT - 12.0);
        assert!(!c.ensure_space(12.0));
        c.advance(0.5);
        assert!(c.ensure_space(12.0));
        assert_eq!(c.page_number(), 2);
    }

    #[test]
    fn text_alignment() {
        let chrome = chrome();
        let mut c = Composer::new(&chrome);
        c.new_page();
        let style = TextStyle::regular(10.0, palette::TEXT);
        let w = c.text("Centro", 105.0, 50.0, style, TextAlign::Center);
        c.text("Derecha", 190.0, 60.0, style, TextAlign::Right);
        let pages = c.finish();
        let centred = pages[0]
            .elements
            .iter()
            .find(|el| matches!(&el.draw, DrawCommand::Text { text, .. } if text == "Centro"))
            .unwrap();
        assert!((centred.x - (105.0 - w / 2.0)).abs() < 1e-9);
        let right = pages[0]
            .elements
            .iter()
            .find(|el| matches!(&el.draw, DrawCommand::Text { text, .. } if text == "Derecha"))
            .unwrap();
        assert!((right.x + right.width - 190.0).abs() < 1e-9);
    }

    #[test]
    fn blank_text_draws_nothing() {
        let chrome = chrome();
        let mut c = Composer::new(&chrome);
        c.new_page();
        let before = c.pages[0].elements.len();
        c.text("  ", 20.0, 50.0, TextStyle::regular(10.0, palette::TEXT), TextAlign::Left);
        assert_eq!(c.pages[0].elements.len(), before);
    }

    #[test]
    fn paragraph_continues_on_next_page() {
        let chrome = chrome();
        let mut c = Composer::new(&chrome);
        c.new_page();
        c.set_y(PRINTABLE_LIMIT - 6.0);
        let text = "uno dos tres cuatro cinco seis siete ocho nueve diez ".repeat(10);
        let style = TextStyle::regular(9.0, palette::TEXT);
        let lines = c.paragraph(&text, MARGIN, 60.0, style, 5.0);
        assert!(lines > 2);
        assert_eq!(c.page_number(), 2);
        assert!((c.y() - (CONTENT_TOP + (lines - 1) as f64 * 5.0)).abs() < 1e-9);
    }
}
