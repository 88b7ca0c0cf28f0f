//! Flight information page.

use crate::image_loader::ImageLoader;
use crate::layout::{Composer, CONTENT_WIDTH, MARGIN};
use crate::model::{present, Flight, Reservation};
use crate::style::{palette, TextAlign, TextStyle};

use super::{joined, load_image, title};

/// Room a flight needs on the page before its box is drawn.
const FLIGHT_MIN_SPACE: f64 = 50.0;
const BOX_HEIGHT: f64 = 45.0;
/// Extra box height, and downward shift of the body, when a logo is shown.
const LOGO_ROW: f64 = 10.0;
const LOGO_WIDTH: f64 = 24.0;
const LOGO_HEIGHT: f64 = 12.0;

pub fn render(reservation: &Reservation, c: &mut Composer, images: &ImageLoader) {
    if reservation.flights.is_empty() {
        return;
    }
    log::debug!("Flights: {} segment(s)", reservation.flights.len());

    c.new_page();
    title(c, "Información de Vuelos", palette::PURPLE);
    c.advance(10.0);

    for flight in &reservation.flights {
        render_flight(flight, c, images);
    }
}

/// "Duración: … | Escalas: N | Equipaje: …"
pub fn flight_info(flight: &Flight) -> String {
    joined([
        present(&flight.duration).map(|d| format!("Duración: {}", d)),
        Some(format!("Escalas: {}", flight.stops)),
        present(&flight.checked_baggage).map(|b| format!("Equipaje: {}", b)),
    ])
    .unwrap_or_default()
}

fn render_flight(flight: &Flight, c: &mut Composer, images: &ImageLoader) {
    c.ensure_space(FLIGHT_MIN_SPACE);

    let logo = present(&flight.airline_logo)
        .and_then(|reference| load_image(images, reference, "airline logo"));
    let shift = if logo.is_some() { LOGO_ROW } else { 0.0 };

    let top = c.y();
    c.rect(
        MARGIN,
        top,
        CONTENT_WIDTH,
        BOX_HEIGHT + shift,
        palette::LIGHT_GRAY,
    );

    match &logo {
        Some(logo) => c.image(logo, MARGIN + 5.0, top + 3.0, LOGO_WIDTH, LOGO_HEIGHT),
        None => {
            c.text(
                &flight.airline,
                MARGIN + 5.0,
                top + 7.0,
                TextStyle::bold(11.0, palette::PRIMARY),
                TextAlign::Left,
            );
        }
    }

    let body = TextStyle::regular(9.0, palette::TEXT);
    c.text(
        &format!("Código de reserva: {}", flight.reservation_code),
        MARGIN + 5.0,
        top + 13.0 + shift,
        body,
        TextAlign::Left,
    );
    c.text(
        &format!("Fecha: {}", flight.date),
        MARGIN + 5.0,
        top + 18.0 + shift,
        body,
        TextAlign::Left,
    );
    c.set_y(top + 23.0 + shift);

    let label = TextStyle::bold(10.0, palette::TEXT);
    let value = TextStyle::regular(10.0, palette::TEXT);
    for (name, airport, time) in [
        ("Salida:", &flight.departure_airport, &flight.departure_time),
        ("Llegada:", &flight.arrival_airport, &flight.arrival_time),
    ] {
        c.text(name, MARGIN + 5.0, c.y(), label, TextAlign::Left);
        c.text(
            &format!("{} - {}", airport, time),
            MARGIN + 25.0,
            c.y(),
            value,
            TextAlign::Left,
        );
        c.advance(6.0);
    }

    let muted = TextStyle::regular(9.0, palette::MUTED);
    c.text(&flight_info(flight), MARGIN + 5.0, c.y(), muted, TextAlign::Left);

    if let Some(notes) = present(&flight.notes) {
        c.advance(5.0);
        c.text(
            &format!("Notas: {}", notes),
            MARGIN + 5.0,
            c.y(),
            muted,
            TextAlign::Left,
        );
    }

    c.advance(12.0);
}
