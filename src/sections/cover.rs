//! Page 1: banner, reservation heading, trip summary, glossary, passengers.

use crate::image_loader::ImageLoader;
use crate::layout::{Composer, CONTENT_WIDTH, COVER_TOP, MARGIN, PAGE_WIDTH};
use crate::model::{present, Reservation};
use crate::style::{palette, Color, TextAlign, TextStyle};

use super::load_image;

const BANNER_HEIGHT: f64 = 50.0;
const INFO_BOX_HEIGHT: f64 = 30.0;
const GLOSSARY_CELL_HEIGHT: f64 = 20.0;
const PASSENGER_ROW_HEIGHT: f64 = 12.0;

/// Shade over a banner photo so the white title stays readable.
const BANNER_SHADE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.4,
};

/// Lay out the cover on the page the composer has open.
pub fn render(reservation: &Reservation, c: &mut Composer, images: &ImageLoader) {
    c.set_y(COVER_TOP);

    banner(reservation, c, images);

    c.text(
        &format!("Reserva {}", reservation.code),
        PAGE_WIDTH / 2.0,
        c.y() + 10.0,
        TextStyle::bold(28.0, palette::TEXT),
        TextAlign::Center,
    );
    c.advance(20.0);
    c.text(
        &format!("Creado: {}", reservation.created_on),
        PAGE_WIDTH / 2.0,
        c.y(),
        TextStyle::regular(10.0, palette::FOOTER_TEXT),
        TextAlign::Center,
    );
    c.advance(20.0);

    travel_info(reservation, c);
    c.advance(15.0);
    glossary(reservation, c);
    c.advance(20.0);
    passengers(reservation, c);
}

/// Banner block for the first destination. Skipped when it has no banner.
fn banner(reservation: &Reservation, c: &mut Composer, images: &ImageLoader) {
    let Some(first) = reservation.destinations.first() else {
        return;
    };
    let Some(reference) = present(&first.banner) else {
        return;
    };

    c.advance(10.0);
    let top = c.y();
    match load_image(images, reference, "banner") {
        Some(image) => {
            c.image(&image, MARGIN, top, CONTENT_WIDTH, BANNER_HEIGHT);
            c.rect(MARGIN, top, CONTENT_WIDTH, BANNER_HEIGHT, BANNER_SHADE);
        }
        None => c.rect(MARGIN, top, CONTENT_WIDTH, BANNER_HEIGHT, palette::PRIMARY),
    }

    let name = match first.name.trim() {
        "" => "Su Destino",
        name => name,
    };
    c.text(
        name,
        PAGE_WIDTH / 2.0,
        top + 30.0,
        TextStyle::bold(24.0, Color::WHITE),
        TextAlign::Center,
    );
    c.advance(BANNER_HEIGHT + 10.0);
}

/// "En base a 2 adulto(s), 1 niño(s)"
pub fn traveller_summary(reservation: &Reservation) -> String {
    let mut summary = format!("En base a {} adulto(s)", reservation.adults);
    if reservation.children > 0 {
        summary.push_str(&format!(", {} niño(s)", reservation.children));
    }
    summary
}

fn travel_info(reservation: &Reservation, c: &mut Composer) {
    let top = c.y();
    c.rect(MARGIN, top, CONTENT_WIDTH, INFO_BOX_HEIGHT, palette::LIGHT_GRAY);

    let heading = TextStyle::bold(10.0, palette::TEXT);
    let body = TextStyle::regular(9.0, palette::TEXT);

    let left = MARGIN + 10.0;
    c.text("Su Viaje", left, top + 8.0, heading, TextAlign::Left);
    c.text(&traveller_summary(reservation), left, top + 14.0, body, TextAlign::Left);
    c.text(
        &format!("{} - {}", reservation.trip_start, reservation.trip_end),
        left,
        top + 20.0,
        body,
        TextAlign::Left,
    );
    if let Some(phone) = present(&reservation.client_phone) {
        c.text(&format!("Tel: {}", phone), left, top + 26.0, body, TextAlign::Left);
    }

    let right = PAGE_WIDTH / 2.0 + 10.0;
    c.text("Contacto", right, top + 8.0, heading, TextAlign::Left);
    c.text(&reservation.client_name, right, top + 14.0, body, TextAlign::Left);
    c.text(
        &format!("Doc: {}", reservation.client_document),
        right,
        top + 20.0,
        TextStyle::regular(9.0, palette::MUTED),
        TextAlign::Left,
    );

    c.advance(INFO_BOX_HEIGHT);
}

/// The four glossary counts: destinations, flights, passengers, tours.
pub fn glossary_counts(reservation: &Reservation) -> [(&'static str, usize, Color); 4] {
    [
        ("Destinos", reservation.destinations.len(), palette::PRIMARY),
        ("Vuelos", reservation.flights.len(), palette::ORANGE),
        ("Pasajeros", reservation.passengers.len(), palette::PURPLE),
        ("Tours", reservation.tour_count(), palette::CYAN),
    ]
}

fn glossary(reservation: &Reservation, c: &mut Composer) {
    c.text(
        "Glosario",
        MARGIN,
        c.y(),
        TextStyle::bold(12.0, palette::ORANGE),
        TextAlign::Left,
    );
    c.advance(8.0);

    let top = c.y();
    let cell = CONTENT_WIDTH / 4.0;
    for (idx, (label, value, color)) in glossary_counts(reservation).into_iter().enumerate() {
        let x = MARGIN + idx as f64 * cell;
        let centre = x + cell / 2.0 - 2.5;
        c.rect(x, top, cell - 5.0, GLOSSARY_CELL_HEIGHT, palette::LIGHT_GRAY);
        c.text(
            &value.to_string(),
            centre,
            top + 10.0,
            TextStyle::bold(18.0, color),
            TextAlign::Center,
        );
        c.text(
            label,
            centre,
            top + 16.0,
            TextStyle::regular(9.0, palette::TEXT),
            TextAlign::Center,
        );
    }
    c.advance(GLOSSARY_CELL_HEIGHT);
}

fn passengers(reservation: &Reservation, c: &mut Composer) {
    if reservation.passengers.is_empty() {
        return;
    }

    c.text(
        "Lista de Pasajeros",
        MARGIN,
        c.y(),
        TextStyle::bold(12.0, palette::TEXT),
        TextAlign::Left,
    );
    c.advance(8.0);

    for (idx, passenger) in reservation.passengers.iter().enumerate() {
        c.ensure_space(PASSENGER_ROW_HEIGHT);
        let top = c.y();
        let shade = if idx % 2 == 0 {
            palette::LIGHT_GRAY
        } else {
            Color::WHITE
        };
        c.rect(MARGIN, top, CONTENT_WIDTH, PASSENGER_ROW_HEIGHT, shade);
        c.text(
            &format!("{}. {}", idx + 1, passenger.name),
            MARGIN + 5.0,
            top + 6.0,
            TextStyle::regular(10.0, palette::TEXT),
            TextAlign::Left,
        );
        c.text(
            &format!(
                "Doc: {} | F. Nac: {}",
                passenger.document, passenger.birth_date
            ),
            MARGIN + 5.0,
            top + 10.0,
            TextStyle::regular(9.0, palette::MUTED),
            TextAlign::Left,
        );
        c.advance(PASSENGER_ROW_HEIGHT);
    }
}
