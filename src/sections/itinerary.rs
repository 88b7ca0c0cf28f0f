//! Itinerary pages: one block per destination with its hotel, tours and
//! transfers.

use crate::image_loader::ImageLoader;
use crate::layout::page_break::rows_that_fit;
use crate::layout::{Composer, CONTENT_WIDTH, MARGIN, PRINTABLE_LIMIT};
use crate::model::{present, Destination, Hotel, Reservation, Tour, Transfer};
use crate::style::{palette, Color, TextAlign, TextStyle};

use super::{joined, load_image, title};

/// Room a destination needs on the page before its band is drawn.
const DESTINATION_MIN_SPACE: f64 = 40.0;
const BAND_HEIGHT: f64 = 10.0;
const HOTEL_BAND_HEIGHT: f64 = 8.0;

pub const MAX_HOTEL_PHOTOS: usize = 6;
const PHOTOS_PER_ROW: usize = 3;
const PHOTO_WIDTH: f64 = 30.0;
const PHOTO_HEIGHT: f64 = 20.0;
const PHOTO_GAP: f64 = 3.0;

pub fn render(reservation: &Reservation, c: &mut Composer, images: &ImageLoader) {
    if reservation.destinations.is_empty() {
        return;
    }
    log::debug!(
        "Itinerary: {} destination(s)",
        reservation.destinations.len()
    );

    c.new_page();
    title(c, "Itinerario del Viaje", palette::TEXT);
    c.advance(10.0);

    for destination in &reservation.destinations {
        render_destination(destination, c, images);
    }
}

fn render_destination(destination: &Destination, c: &mut Composer, images: &ImageLoader) {
    c.ensure_space(DESTINATION_MIN_SPACE);

    let top = c.y();
    c.rect(MARGIN, top, CONTENT_WIDTH, BAND_HEIGHT, palette::PRIMARY);
    c.text(
        &format!(
            "{}. {}, {}",
            destination.sequence, destination.name, destination.country
        ),
        MARGIN + 5.0,
        top + 7.0,
        TextStyle::bold(12.0, Color::WHITE),
        TextAlign::Left,
    );
    c.advance(15.0);

    let body = TextStyle::regular(10.0, palette::TEXT);
    c.text(
        &format!("{} - {}", destination.start, destination.end),
        MARGIN + 5.0,
        c.y(),
        body,
        TextAlign::Left,
    );

    if let Some(description) = present(&destination.description) {
        c.advance(6.0);
        c.paragraph(description, MARGIN + 5.0, CONTENT_WIDTH - 10.0, body, 5.0);
    }
    c.advance(5.0);

    if let Some(hotel) = &destination.hotel {
        render_hotel(hotel, c, images);
    }
    if !destination.tours.is_empty() {
        render_tours(&destination.tours, c);
    }
    if !destination.transfers.is_empty() {
        render_transfers(&destination.transfers, c);
    }

    c.advance(10.0);
}

/// "Habitación: … | Plan: … | N noche(s) | N habitación(es)"
pub fn hotel_details(hotel: &Hotel) -> Option<String> {
    joined([
        present(&hotel.room_type).map(|t| format!("Habitación: {}", t)),
        present(&hotel.meal_plan).map(|p| format!("Plan: {}", p)),
        (hotel.nights > 0).then(|| format!("{} noche(s)", hotel.nights)),
        (hotel.rooms > 0).then(|| format!("{} habitación(es)", hotel.rooms)),
    ])
}

/// "Check-in: 2025-12-01 15:00 | Check-out: 2025-12-08 12:00"
///
/// Only when both dates are known. Times are appended where set.
pub fn hotel_stay(hotel: &Hotel) -> Option<String> {
    let check_in = present(&hotel.check_in)?;
    let check_out = present(&hotel.check_out)?;
    let stamp = |date: &str, time: &Option<String>| match present(time) {
        Some(t) => format!("{} {}", date, t),
        None => date.to_string(),
    };
    Some(format!(
        "Check-in: {} | Check-out: {}",
        stamp(check_in, &hotel.hora_check_in),
        stamp(check_out, &hotel.hora_check_out)
    ))
}

fn render_hotel(hotel: &Hotel, c: &mut Composer, images: &ImageLoader) {
    c.ensure_space(HOTEL_BAND_HEIGHT + 4.0);
    let top = c.y();
    c.rect(
        MARGIN + 5.0,
        top,
        CONTENT_WIDTH - 10.0,
        HOTEL_BAND_HEIGHT,
        palette::HOTEL_BAND,
    );
    c.text(
        &hotel.name,
        MARGIN + 10.0,
        top + 5.0,
        TextStyle::bold(11.0, palette::ORANGE),
        TextAlign::Left,
    );
    c.advance(12.0);

    let body = TextStyle::regular(9.0, palette::TEXT);
    let lines = [
        hotel_details(hotel),
        hotel_stay(hotel),
        joined([
            present(&hotel.address).map(str::to_string),
            present(&hotel.phone).map(|p| format!("Tel: {}", p)),
        ]),
        present(&hotel.reservation_number).map(|n| format!("Número de reserva: {}", n)),
    ];
    for line in lines.iter().flatten() {
        c.ensure_space(5.0);
        c.text(line, MARGIN + 10.0, c.y(), body, TextAlign::Left);
        c.advance(5.0);
    }

    if !hotel.photos.is_empty() {
        render_photos(&hotel.photos, c, images);
    }

    if let Some(notes) = present(&hotel.notes) {
        c.paragraph(
            &format!("Notas: {}", notes),
            MARGIN + 10.0,
            CONTENT_WIDTH - 20.0,
            TextStyle::regular(9.0, palette::MUTED),
            4.0,
        );
    }

    c.advance(5.0);
}

/// Up to six photos in rows of three.
///
/// The first row is kept together with a page break if needed. A later
/// row that would cross the printable limit is dropped, not moved to the
/// next page. The cursor still advances past every row.
fn render_photos(photos: &[String], c: &mut Composer, images: &ImageLoader) {
    c.advance(3.0);
    c.ensure_space(PHOTO_HEIGHT + PHOTO_GAP);
    let top = c.y();
    let shown = photos.len().min(MAX_HOTEL_PHOTOS);
    if photos.len() > MAX_HOTEL_PHOTOS {
        log::debug!(
            "Hotel has {} photos, drawing the first {}",
            photos.len(),
            MAX_HOTEL_PHOTOS
        );
    }
    let rows = shown.div_ceil(PHOTOS_PER_ROW);
    let row_pitch = PHOTO_HEIGHT + PHOTO_GAP;
    let fitting_rows = rows_that_fit(top, row_pitch, rows, PRINTABLE_LIMIT);

    for (i, reference) in photos.iter().take(shown).enumerate() {
        let (row, col) = (i / PHOTOS_PER_ROW, i % PHOTOS_PER_ROW);
        if row >= fitting_rows {
            break;
        }
        let x = MARGIN + 10.0 + col as f64 * (PHOTO_WIDTH + PHOTO_GAP);
        let y = top + row as f64 * row_pitch;
        let image = match reference.trim() {
            "" => None,
            reference => load_image(images, reference, "hotel photo"),
        };
        match image {
            Some(image) => c.image(&image, x, y, PHOTO_WIDTH, PHOTO_HEIGHT),
            None => c.rect(x, y, PHOTO_WIDTH, PHOTO_HEIGHT, palette::PHOTO_PLACEHOLDER),
        }
    }

    c.advance(rows as f64 * row_pitch + 3.0);
}

/// "Operador: … | Duración: … | Hora: …"
pub fn tour_info(tour: &Tour) -> Option<String> {
    joined([
        present(&tour.operator).map(|o| format!("Operador: {}", o)),
        present(&tour.duration).map(|d| format!("Duración: {}", d)),
        present(&tour.start_time).map(|t| format!("Hora: {}", t)),
    ])
}

fn render_tours(tours: &[Tour], c: &mut Composer) {
    c.ensure_space(6.0);
    c.text(
        "Tours y Excursiones",
        MARGIN + 5.0,
        c.y(),
        TextStyle::bold(10.0, palette::PURPLE),
        TextAlign::Left,
    );
    c.advance(6.0);

    for tour in tours {
        c.ensure_space(5.0);
        c.text(
            &format!("• {}", tour.name),
            MARGIN + 10.0,
            c.y(),
            TextStyle::bold(9.0, palette::TEXT),
            TextAlign::Left,
        );
        c.advance(5.0);

        if let Some(description) = present(&tour.description) {
            c.paragraph(
                description,
                MARGIN + 12.0,
                CONTENT_WIDTH - 20.0,
                TextStyle::regular(9.0, palette::TEXT),
                4.0,
            );
        }

        if let Some(info) = tour_info(tour) {
            c.ensure_space(4.0);
            c.text(
                &info,
                MARGIN + 12.0,
                c.y(),
                TextStyle::regular(9.0, palette::MUTED),
                TextAlign::Left,
            );
            c.advance(4.0);
        }

        c.advance(3.0);
    }

    c.advance(2.0);
}

fn render_transfers(transfers: &[Transfer], c: &mut Composer) {
    c.ensure_space(6.0);
    c.text(
        "Traslados",
        MARGIN + 5.0,
        c.y(),
        TextStyle::bold(10.0, palette::CYAN),
        TextAlign::Left,
    );
    c.advance(6.0);

    let muted = TextStyle::regular(9.0, palette::MUTED);
    for transfer in transfers {
        c.ensure_space(6.0);
        c.text(
            &format!("{}: {} -> {}", transfer.vehicle, transfer.from, transfer.to),
            MARGIN + 10.0,
            c.y(),
            TextStyle::regular(9.0, palette::TEXT),
            TextAlign::Left,
        );

        if let Some(pickup) = present(&transfer.pickup_time) {
            c.advance(4.0);
            c.ensure_space(4.0);
            c.text(
                &format!("Recogida: {}", pickup),
                MARGIN + 12.0,
                c.y(),
                muted,
                TextAlign::Left,
            );
        }
        if let Some(notes) = present(&transfer.notes) {
            c.advance(4.0);
            c.ensure_space(4.0);
            c.text(notes, MARGIN + 12.0, c.y(), muted, TextAlign::Left);
        }

        c.advance(6.0);
    }

    c.advance(2.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_loader::fixtures;
    use crate::layout::{DrawCommand, LayoutPage};
    use crate::sections::test_support::{all_text, compose_with};

    fn photo_cells(pages: &[LayoutPage]) -> usize {
        pages
            .iter()
            .flat_map(|p| p.elements.iter())
            .filter(|el| {
                (el.width - PHOTO_WIDTH).abs() < 1e-9 && (el.height - PHOTO_HEIGHT).abs() < 1e-9
            })
            .count()
    }

    fn destination(hotel: Option<Hotel>) -> Destination {
        Destination {
            sequence: 1,
            name: "San Andrés".to_string(),
            country: "Colombia".to_string(),
            start: "2025-12-01".to_string(),
            end: "2025-12-08".to_string(),
            hotel,
            ..Destination::default()
        }
    }

    #[test]
    fn no_destinations_no_page() {
        let pages = compose_with(|c, images| render(&Reservation::default(), c, images));
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn destination_band_and_dates() {
        let r = Reservation {
            destinations: vec![destination(None)],
            ..Reservation::default()
        };
        let pages = compose_with(|c, images| render(&r, c, images));
        assert_eq!(pages.len(), 2);
        assert!(pages[1].contains_text("Itinerario del Viaje"));
        assert!(pages[1].contains_text("1. San Andrés, Colombia"));
        assert!(pages[1].contains_text("2025-12-01 - 2025-12-08"));
    }

    #[test]
    fn hotel_detail_lines() {
        let hotel = Hotel {
            name: "Decameron Aquarium".to_string(),
            room_type: Some("Doble".to_string()),
            meal_plan: Some("Todo incluido".to_string()),
            nights: 7,
            check_in: Some("2025-12-01".to_string()),
            hora_check_in: Some("15:00".to_string()),
            check_out: Some("2025-12-08".to_string()),
            address: Some("Av. Colombia".to_string()),
            ..Hotel::default()
        };
        assert_eq!(
            hotel_details(&hotel).as_deref(),
            Some("Habitación: Doble | Plan: Todo incluido | 7 noche(s) | 1 habitación(es)")
        );
        assert_eq!(
            hotel_stay(&hotel).as_deref(),
            Some("Check-in: 2025-12-01 15:00 | Check-out: 2025-12-08")
        );

        let pages = compose_with(|c, images| {
            render_hotel(&hotel, c, images);
        });
        let text = all_text(&pages);
        assert!(text.iter().any(|t| t == "Decameron Aquarium"));
        assert!(text.iter().any(|t| t == "Av. Colombia"));
        assert!(!text.iter().any(|t| t.starts_with("Número de reserva")));
    }

    #[test]
    fn seven_photos_draw_six() {
        let hotel = Hotel {
            name: "Decameron".to_string(),
            photos: (0..7).map(|i| format!("https://img.example.com/{}.jpg", i)).collect(),
            ..Hotel::default()
        };
        let pages = compose_with(|c, images| render_hotel(&hotel, c, images));
        assert_eq!(photo_cells(&pages), 6);
    }

    #[test]
    fn inline_photo_is_drawn_as_image() {
        let hotel = Hotel {
            name: "Decameron".to_string(),
            photos: vec![
                fixtures::data_uri("image/webp", &fixtures::webp(6, 4)),
                "not an image".to_string(),
            ],
            ..Hotel::default()
        };
        let pages = compose_with(|c, images| render_hotel(&hotel, c, images));
        assert_eq!(pages[0].image_count(), 1);
        assert_eq!(photo_cells(&pages), 2);
    }

    #[test]
    fn photo_rows_past_limit_are_dropped() {
        let hotel = Hotel {
            name: "Decameron".to_string(),
            photos: vec![String::new(); 6],
            ..Hotel::default()
        };
        let pages = compose_with(|c, images| {
            // Band and detail line put the grid at 230, room for one row.
            c.set_y(210.0);
            render_hotel(&hotel, c, images);
        });
        assert_eq!(pages.len(), 1, "dropping rows never adds a page");
        assert_eq!(photo_cells(&pages), 3);
    }

    #[test]
    fn photo_grid_near_bottom_moves_to_next_page() {
        let hotel = Hotel {
            name: "Decameron".to_string(),
            photos: vec![String::new(); 3],
            ..Hotel::default()
        };
        let pages = compose_with(|c, images| {
            c.set_y(230.0);
            render_hotel(&hotel, c, images);
        });
        assert_eq!(pages.len(), 2);
        assert_eq!(photo_cells(&pages[..1]), 0);
        assert_eq!(photo_cells(&pages[1..]), 3);
    }

    #[test]
    fn stay_line_needs_both_dates() {
        let hotel = Hotel {
            check_in: Some("2025-12-01".to_string()),
            hora_check_in: Some("15:00".to_string()),
            hora_check_out: Some("12:00".to_string()),
            ..Hotel::default()
        };
        assert_eq!(hotel_stay(&hotel), None);

        let hotel = Hotel {
            check_out: Some("2025-12-08".to_string()),
            ..hotel
        };
        assert_eq!(
            hotel_stay(&hotel).as_deref(),
            Some("Check-in: 2025-12-01 15:00 | Check-out: 2025-12-08 12:00")
        );
    }

    #[test]
    fn tours_and_transfers() {
        let d = Destination {
            tours: vec![Tour {
                name: "Johnny Cay".to_string(),
                duration: Some("4 horas".to_string()),
                start_time: Some("09:00".to_string()),
                ..Tour::default()
            }],
            transfers: vec![Transfer {
                vehicle: "Van".to_string(),
                from: "Aeropuerto".to_string(),
                to: "Hotel".to_string(),
                pickup_time: Some("10:30".to_string()),
                ..Transfer::default()
            }],
            ..destination(None)
        };
        let r = Reservation {
            destinations: vec![d],
            ..Reservation::default()
        };
        let pages = compose_with(|c, images| render(&r, c, images));
        let text = all_text(&pages);
        assert!(text.iter().any(|t| t == "• Johnny Cay"));
        assert!(text.iter().any(|t| t == "Duración: 4 horas | Hora: 09:00"));
        assert!(text.iter().any(|t| t == "Van: Aeropuerto -> Hotel"));
        assert!(text.iter().any(|t| t == "Recogida: 10:30"));
    }

    #[test]
    fn destinations_break_when_short_of_room() {
        let long = "Playa y sol en el Caribe colombiano. ".repeat(120);
        let r = Reservation {
            destinations: vec![
                Destination {
                    description: Some(long),
                    ..destination(None)
                },
                Destination {
                    sequence: 2,
                    name: "Providencia".to_string(),
                    ..destination(None)
                },
            ],
            ..Reservation::default()
        };
        let pages = compose_with(|c, images| render(&r, c, images));
        assert!(pages.len() >= 3);
        for page in &pages {
            for el in &page.elements {
                if let DrawCommand::Text { text, .. } = &el.draw {
                    if text.starts_with("Playa") {
                        assert!(el.y <= PRINTABLE_LIMIT);
                    }
                }
            }
        }
    }
}
