//! # Voucher
//!
//! A page-native travel voucher composer.
//!
//! A reservation (travellers, destinations with hotels, tours and transfers,
//! flights, package terms and payment) goes in; a paginated A4 PDF comes
//! out. The layout is one fixed template: a cover, the day-by-day
//! itinerary, flights, package details and the terms page, each with the
//! agency's header and footer.
//!
//! Content flows *into* pages. Every section asks for room before it
//! writes, and a page break happens at that moment, with the chrome drawn
//! on the fresh page before anything else.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [model]        - Reservation and agency records
//!       ↓
//!   [document]     - Build order, agency logo
//!       ↓
//!   [sections]     - Cover, itinerary, flights, package, terms
//!       ↓   ↑
//!   [layout]       - Composer: cursor, page breaks, chrome on new pages
//!       ↓   ↑
//!   [image_loader] - Fetch, sniff, transcode; never hands back WebP
//!       ↓
//!   [pdf]          - Serialize to PDF bytes
//! ```
//!
//! Images are best-effort. A reference that cannot be fetched or decoded is
//! logged at `warn` and replaced by a placeholder; it never fails the build.

pub mod chrome;
pub mod document;
pub mod error;
pub mod font;
pub mod image_loader;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod sections;
pub mod style;
pub mod text;

#[cfg(feature = "wasm")]
pub mod wasm;

use error::VoucherError;
use image_loader::ImageLoader;
use layout::LayoutPage;
use model::{AgencyConfig, Reservation};
use pdf::PdfWriter;

/// Build the voucher PDF for a reservation.
///
/// Uses the default [`ImageLoader`]: remote images over HTTP, no site root.
pub fn build(reservation: &Reservation, agency: &AgencyConfig) -> Result<Vec<u8>, VoucherError> {
    build_with(reservation, agency, &ImageLoader::new())
}

/// Build the voucher PDF with a caller-configured image loader.
pub fn build_with(
    reservation: &Reservation,
    agency: &AgencyConfig,
    images: &ImageLoader,
) -> Result<Vec<u8>, VoucherError> {
    let pages = document::compose(reservation, agency, images)?;
    let bytes = PdfWriter::new().write(&pages, &document::metadata(reservation, agency))?;
    log::info!(
        "Built voucher {} ({} pages, {} bytes)",
        reservation.code,
        pages.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Parse a reservation and an agency config from JSON and build the PDF.
///
/// A blank `agency_json` means the default agency.
pub fn build_json(reservation_json: &str, agency_json: &str) -> Result<Vec<u8>, VoucherError> {
    let reservation = parse_reservation(reservation_json)?;
    let agency = parse_agency(agency_json)?;
    build(&reservation, &agency)
}

pub(crate) fn parse_reservation(reservation_json: &str) -> Result<Reservation, VoucherError> {
    serde_json::from_str(reservation_json).map_err(|e| VoucherError::parse("reservation", e))
}

pub(crate) fn parse_agency(agency_json: &str) -> Result<AgencyConfig, VoucherError> {
    if agency_json.trim().is_empty() {
        return Ok(AgencyConfig::default());
    }
    serde_json::from_str(agency_json).map_err(|e| VoucherError::parse("agency config", e))
}

/// Lay the voucher out without serializing it.
pub fn compose(
    reservation: &Reservation,
    agency: &AgencyConfig,
    images: &ImageLoader,
) -> Result<Vec<LayoutPage>, VoucherError> {
    document::compose(reservation, agency, images)
}

/// `Reservation_{code}_{agency}.pdf`, with whitespace in the agency name
/// replaced by underscores.
pub fn suggested_filename(reservation: &Reservation, agency: &AgencyConfig) -> String {
    format!("Reservation_{}_{}.pdf", reservation.code, agency.slug())
}
