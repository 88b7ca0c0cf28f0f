//! Header and footer bands drawn on every page.

use std::rc::Rc;

use crate::image_loader::LoadedImage;
use crate::layout::{Composer, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
use crate::model::{present, AgencyConfig};
use crate::style::{palette, Color, TextAlign, TextStyle};

pub const TAGLINE: &str = "Tu viaje comienza aquí";
pub const ADDRESS_FALLBACK: &str = "Dirección no configurada";
pub const CONTACT_FALLBACK: &str = "Contacto no configurado";

const HEADER_HEIGHT: f64 = 15.0;
const HEADER_BASELINE: f64 = 10.0;
const FOOTER_Y: f64 = PAGE_HEIGHT - 18.0;
const LOGO_WIDTH: f64 = 25.0;
const LOGO_HEIGHT: f64 = 12.0;

/// Agency identity as printed in the page chrome.
#[derive(Debug, Clone)]
pub struct Chrome {
    agency_name: String,
    address_line: String,
    contact_line: String,
    logo: Option<Rc<LoadedImage>>,
}

impl Chrome {
    /// `logo` is `None` when the agency has no usable logo; the name is
    /// printed in its place.
    pub fn new(agency: &AgencyConfig, logo: Option<Rc<LoadedImage>>) -> Self {
        Self {
            agency_name: agency.display_name().to_string(),
            address_line: address_line(agency),
            contact_line: contact_line(agency),
            logo,
        }
    }

    pub fn agency_name(&self) -> &str {
        &self.agency_name
    }

    pub fn draw(&self, c: &mut Composer) {
        self.header(c);
        self.footer(c);
    }

    fn header(&self, c: &mut Composer) {
        c.rect(0.0, 0.0, PAGE_WIDTH, HEADER_HEIGHT, palette::PRIMARY);
        match &self.logo {
            Some(logo) => c.image(
                logo,
                MARGIN,
                (HEADER_HEIGHT - LOGO_HEIGHT) / 2.0,
                LOGO_WIDTH,
                LOGO_HEIGHT,
            ),
            None => {
                c.text(
                    &self.agency_name,
                    MARGIN,
                    HEADER_BASELINE,
                    TextStyle::bold(14.0, Color::WHITE),
                    TextAlign::Left,
                );
            }
        }
        c.text(
            TAGLINE,
            PAGE_WIDTH - MARGIN,
            HEADER_BASELINE,
            TextStyle::regular(9.0, Color::WHITE),
            TextAlign::Right,
        );
    }

    fn footer(&self, c: &mut Composer) {
        c.line(
            (MARGIN, FOOTER_Y - 3.0),
            (PAGE_WIDTH - MARGIN, FOOTER_Y - 3.0),
            palette::ORANGE,
            0.5,
        );

        match &self.logo {
            Some(logo) => c.image(logo, MARGIN, FOOTER_Y - 2.0, LOGO_WIDTH, LOGO_HEIGHT),
            None => {
                c.text(
                    &self.agency_name,
                    MARGIN,
                    FOOTER_Y + 3.0,
                    TextStyle::bold(9.0, palette::FOOTER_TEXT),
                    TextAlign::Left,
                );
            }
        }

        let small = TextStyle::regular(9.0, palette::FOOTER_TEXT);
        let centre = PAGE_WIDTH / 2.0;
        c.text(&self.address_line, centre, FOOTER_Y + 2.0, small, TextAlign::Center);
        c.text(&self.contact_line, centre, FOOTER_Y + 6.0, small, TextAlign::Center);

        let page = format!("Página {}", c.page_number());
        c.text(&page, PAGE_WIDTH - MARGIN, FOOTER_Y + 4.0, small, TextAlign::Right);
    }
}

/// "{address}, {city}" from whichever parts are set.
pub fn address_line(agency: &AgencyConfig) -> String {
    let parts: Vec<&str> = [present(&agency.address), present(&agency.city)]
        .into_iter()
        .flatten()
        .collect();
    if parts.is_empty() {
        ADDRESS_FALLBACK.to_string()
    } else {
        parts.join(", ")
    }
}

/// "Tel: {phone} | {email}" from whichever parts are set.
pub fn contact_line(agency: &AgencyConfig) -> String {
    let mut parts = Vec::new();
    if let Some(phone) = present(&agency.phone) {
        parts.push(format!("Tel: {}", phone));
    }
    if let Some(email) = present(&agency.email) {
        parts.push(email.to_string());
    }
    if parts.is_empty() {
        CONTACT_FALLBACK.to_string()
    } else {
        parts.join(" | ")
    }
}
