//! # Page Break Decisions
//!
//! The one rule every section follows: before writing a block, check that
//! it ends above the printable limit. There is no look-ahead and no
//! keep-together. A block made of several small writes may straddle a page
//! boundary if each write fits on its own.

/// What to do before writing a block of a known height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakDecision {
    /// Write it on the current page.
    Place,
    /// Start a new page, then write it at the top.
    NewPage,
}

/// Decide whether `needed` mm starting at `cursor_y` fit above `limit`.
///
/// A block that ends exactly on the limit still fits.
pub fn decide_break(cursor_y: f64, needed: f64, limit: f64) -> BreakDecision {
    if cursor_y + needed > limit {
        BreakDecision::NewPage
    } else {
        BreakDecision::Place
    }
}

/// How many rows of `row_height` fit from `top` without crossing `limit`.
///
/// Used where overflow is dropped instead of paginated.
pub fn rows_that_fit(top: f64, row_height: f64, rows: usize, limit: f64) -> usize {
    (0..rows)
        .take_while(|&row| top + (row + 1) as f64 * row_height <= limit)
        .count()
}
