//! # Document Driver
//!
//! Runs one build from reservation to pages: load the agency logo, set up
//! the chrome, then lay out each section in order on a single composer.

use crate::chrome::Chrome;
use crate::error::VoucherError;
use crate::image_loader::ImageLoader;
use crate::layout::{Composer, LayoutPage};
use crate::model::{present, AgencyConfig, Reservation};
use crate::pdf::Metadata;
use crate::sections::{self, cover, flights, itinerary, package, terms};

/// Lay out the whole voucher and return its pages.
pub fn compose(
    reservation: &Reservation,
    agency: &AgencyConfig,
    images: &ImageLoader,
) -> Result<Vec<LayoutPage>, VoucherError> {
    let logo = present(&agency.logo)
        .and_then(|reference| sections::load_image(images, reference, "agency logo"));
    let chrome = Chrome::new(agency, logo);

    let mut c = Composer::new(&chrome);
    c.new_page();

    cover::render(reservation, &mut c, images);
    log::debug!("Cover done on page {}", c.page_number());
    itinerary::render(reservation, &mut c, images);
    flights::render(reservation, &mut c, images);
    package::render(reservation, &mut c);
    terms::render(reservation, chrome.agency_name(), &mut c);

    let pages = c.finish();
    if pages.is_empty() {
        return Err(VoucherError::RenderError(
            "layout produced no pages".to_string(),
        ));
    }
    Ok(pages)
}

/// Info dictionary for a reservation's PDF.
pub fn metadata(reservation: &Reservation, agency: &AgencyConfig) -> Metadata {
    Metadata {
        title: Some(format!("Reserva {}", reservation.code)),
        author: Some(agency.display_name().to_string()),
        subject: Some(reservation.client_name.trim())
            .filter(|name| !name.is_empty())
            .map(|name| format!("Voucher de viaje para {}", name)),
    }
}
