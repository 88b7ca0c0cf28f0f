//! Package details: what is and isn't included, and the payment summary.

use crate::layout::{Composer, CONTENT_WIDTH, MARGIN, PAGE_WIDTH};
use crate::model::{present, Reservation};
use crate::style::{palette, Color, TextAlign, TextStyle};

use super::title;

const COLUMN_GAP: f64 = 10.0;
const COLUMN_BAND_HEIGHT: f64 = 10.0;
const ITEM_LINE_HEIGHT: f64 = 5.0;
const PAYMENT_BAND_HEIGHT: f64 = 10.0;
const PAYMENT_ROW_HEIGHT: f64 = 8.0;
/// The payment box never starts above this y, so it sits below the columns.
const PAYMENT_MIN_TOP: f64 = 140.0;

pub fn render(reservation: &Reservation, c: &mut Composer) {
    c.new_page();
    title(c, "Detalles del Paquete", palette::TEXT);
    c.advance(15.0);

    inclusions(reservation, c);
    payment(reservation, c);
}

fn non_blank(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Includes on the left, excludes on the right, written row by row so both
/// columns break onto the next page together.
fn inclusions(reservation: &Reservation, c: &mut Composer) {
    let includes = non_blank(&reservation.includes);
    let excludes = non_blank(&reservation.excludes);
    if includes.is_empty() && excludes.is_empty() {
        return;
    }

    let column_width = (CONTENT_WIDTH - COLUMN_GAP) / 2.0;
    let left_x = MARGIN;
    let right_x = MARGIN + column_width + COLUMN_GAP;

    c.ensure_space(COLUMN_BAND_HEIGHT + 5.0);
    let top = c.y();
    if !includes.is_empty() {
        column_band(
            c,
            (left_x, top, column_width),
            "El Paquete Incluye",
            palette::INCLUDES_BAND,
            palette::INCLUDES_TEXT,
        );
    }
    if !excludes.is_empty() {
        column_band(
            c,
            (right_x, top, column_width),
            "El Paquete No Incluye",
            palette::EXCLUDES_BAND,
            palette::ALERT,
        );
    }
    c.advance(15.0);

    let style = TextStyle::regular(9.0, palette::TEXT);
    let wrap_width = column_width - 10.0;
    for row in 0..includes.len().max(excludes.len()) {
        let left = bullet_lines(c, includes.get(row), style, wrap_width);
        let right = bullet_lines(c, excludes.get(row), style, wrap_width);
        for line in 0..left.len().max(right.len()) {
            c.ensure_space(ITEM_LINE_HEIGHT);
            if let Some(text) = left.get(line) {
                c.text(text, left_x + 5.0, c.y(), style, TextAlign::Left);
            }
            if let Some(text) = right.get(line) {
                c.text(text, right_x + 5.0, c.y(), style, TextAlign::Left);
            }
            c.advance(ITEM_LINE_HEIGHT);
        }
    }

    c.advance(5.0);
}

fn column_band(
    c: &mut Composer,
    (x, top, width): (f64, f64, f64),
    label: &str,
    fill: Color,
    ink: Color,
) {
    c.rect(x, top, width, COLUMN_BAND_HEIGHT, fill);
    c.text(
        label,
        x + 5.0,
        top + 7.0,
        TextStyle::bold(11.0, ink),
        TextAlign::Left,
    );
}

fn bullet_lines(c: &Composer, item: Option<&&str>, style: TextStyle, width: f64) -> Vec<String> {
    item.map(|item| c.wrap(&format!("• {}", item), style, width))
        .unwrap_or_default()
}

/// Label, value and value colour for each payment row that is set.
pub fn payment_rows(reservation: &Reservation) -> Vec<(&'static str, &str, Color)> {
    [
        ("Precio Total:", present(&reservation.total_price), palette::TEXT),
        ("Abono:", present(&reservation.deposit), palette::TEXT),
        ("Saldo Pendiente:", present(&reservation.balance), palette::ALERT),
        (
            "Fecha Límite de Pago:",
            present(&reservation.payment_deadline),
            palette::TEXT,
        ),
    ]
    .into_iter()
    .filter_map(|(label, value, color)| value.map(|v| (label, v, color)))
    .collect()
}

fn payment(reservation: &Reservation, c: &mut Composer) {
    let has_amounts = [
        &reservation.total_price,
        &reservation.deposit,
        &reservation.balance,
    ]
    .into_iter()
    .any(|v| present(v).is_some());
    if !has_amounts {
        return;
    }

    c.set_y(c.y().max(PAYMENT_MIN_TOP));
    c.ensure_space(PAYMENT_BAND_HEIGHT + 5.0 + PAYMENT_ROW_HEIGHT);
    let top = c.y();
    c.rect(MARGIN, top, CONTENT_WIDTH, PAYMENT_BAND_HEIGHT, palette::ORANGE);
    c.text(
        "Información de Pago",
        MARGIN + 5.0,
        top + 7.0,
        TextStyle::bold(12.0, Color::WHITE),
        TextAlign::Left,
    );
    c.advance(15.0);

    for (label, value, color) in payment_rows(reservation) {
        c.ensure_space(PAYMENT_ROW_HEIGHT);
        c.text(
            label,
            MARGIN + 10.0,
            c.y(),
            TextStyle::regular(11.0, palette::TEXT),
            TextAlign::Left,
        );
        c.text(
            value,
            PAGE_WIDTH - MARGIN - 10.0,
            c.y(),
            TextStyle::bold(11.0, color),
            TextAlign::Right,
        );
        c.advance(PAYMENT_ROW_HEIGHT);
    }
}
