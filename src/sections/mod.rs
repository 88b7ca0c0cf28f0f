//! # Section Renderers
//!
//! Each section reads its slice of the reservation and writes it through
//! the shared [`Composer`]. Sections never look at each other's output;
//! the cursor and the page count are the only shared state.
//!
//! Order is fixed: cover, itinerary, flights, package, terms.

pub mod cover;
pub mod flights;
pub mod itinerary;
pub mod package;
pub mod terms;

use std::rc::Rc;

use crate::image_loader::{ImageLoader, LoadedImage};
use crate::layout::{Composer, MARGIN};
use crate::style::{Color, TextAlign, TextStyle};

/// Normalize and decode an image reference, logging any failure.
pub(crate) fn load_image(
    images: &ImageLoader,
    reference: &str,
    what: &str,
) -> Option<Rc<LoadedImage>> {
    let prepared = images.prepare_or_warn(reference, what)?;
    match prepared.decode() {
        Ok(loaded) => Some(Rc::new(loaded)),
        Err(e) => {
            log::warn!("Could not decode {} image: {}", what, e);
            None
        }
    }
}

/// Page title at the cursor, 16pt bold.
fn title(c: &mut Composer, text: &str, color: Color) {
    c.text(
        text,
        MARGIN,
        c.y(),
        TextStyle::bold(16.0, color),
        TextAlign::Left,
    );
}

/// " | "-joined labels, skipping the absent ones.
fn joined(parts: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    let parts: Vec<String> = parts.into_iter().flatten().collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}
