//! Terms and conditions page, closing message and general notes.

use crate::layout::{Composer, CONTENT_WIDTH, MARGIN, PAGE_WIDTH};
use crate::model::{present, Reservation};
use crate::style::{palette, TextAlign, TextStyle};

use super::title;

pub const TERMS_LINK_LABEL: &str = "Ver términos y condiciones completos";

const BODY_LINE_HEIGHT: f64 = 5.0;

/// Child-protection notice required on every voucher (Colombian Law 679 of 2001).
pub fn legal_notice(agency_name: &str) -> String {
    format!(
        "{} se acoge a la ley 679 del 2001 para la protección de los niños, niñas y \
         adolescentes contra la explotación, la pornografía y el turismo sexual. La persona \
         que atente contra los niños del país será denunciada a las autoridades. Advertimos a \
         todos nuestros clientes que la explotación y abuso sexual de menores de edad en el \
         país son sancionados penal y administrativamente.",
        agency_name
    )
}

pub fn closing_message(agency_name: &str) -> String {
    format!("Gracias por viajar con {}, tu viaje comienza aquí", agency_name)
}

pub fn render(reservation: &Reservation, agency_name: &str, c: &mut Composer) {
    c.new_page();
    title(c, "Términos y Condiciones", palette::TEXT);
    c.advance(15.0);

    if let Some(url) = present(&reservation.terms_url) {
        c.text(
            "Para ver los términos y condiciones completos, visite:",
            MARGIN,
            c.y(),
            TextStyle::regular(10.0, palette::TEXT),
            TextAlign::Left,
        );
        c.advance(8.0);
        c.link(
            TERMS_LINK_LABEL,
            MARGIN,
            c.y(),
            TextStyle::regular(10.0, palette::PRIMARY),
            TextAlign::Left,
            url,
        );
        c.advance(15.0);
    }

    let body = TextStyle::regular(9.0, palette::TEXT);
    c.paragraph(
        &legal_notice(agency_name),
        MARGIN,
        CONTENT_WIDTH,
        body,
        BODY_LINE_HEIGHT,
    );
    c.advance(15.0);

    c.ensure_space(BODY_LINE_HEIGHT);
    c.text(
        &closing_message(agency_name),
        PAGE_WIDTH / 2.0,
        c.y(),
        TextStyle::bold(12.0, palette::PRIMARY),
        TextAlign::Center,
    );

    if let Some(notes) = present(&reservation.notes) {
        c.advance(15.0);
        c.ensure_space(7.0 + BODY_LINE_HEIGHT);
        c.text(
            "Notas Adicionales",
            MARGIN,
            c.y(),
            TextStyle::bold(10.0, palette::TEXT),
            TextAlign::Left,
        );
        c.advance(7.0);
        c.paragraph(notes, MARGIN, CONTENT_WIDTH, body, BODY_LINE_HEIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{all_text, compose_with};

    #[test]
    fn terms_link_uses_fixed_label() {
        let r = Reservation {
            terms_url: Some("https://almundotours.com/terminos".to_string()),
            ..Reservation::default()
        };
        let pages = compose_with(|c, _| render(&r, "AL Mundo Tours", c));
        let link = pages[1]
            .elements
            .iter()
            .find(|el| el.href.is_some())
            .unwrap();
        assert_eq!(link.href.as_deref(), Some("https://almundotours.com/terminos"));
        assert!(pages[1].contains_text(TERMS_LINK_LABEL));
        assert!(!pages[1].contains_text("https://almundotours.com"));
    }

    #[test]
    fn no_url_no_link() {
        let pages = compose_with(|c, _| render(&Reservation::default(), "AL Mundo Tours", c));
        assert!(pages[1].elements.iter().all(|el| el.href.is_none()));
        assert!(!pages[1].contains_text("Para ver los términos"));
    }

    #[test]
    fn agency_name_is_interpolated() {
        let pages = compose_with(|c, _| render(&Reservation::default(), "Viajes Sol", c));
        let text = all_text(&pages).join(" ");
        assert!(text.contains("Viajes Sol se acoge a la ley 679"));
        assert!(pages[1].contains_text("Gracias por viajar con Viajes Sol, tu viaje comienza aquí"));
        assert!(!pages[1].contains_text("Notas Adicionales"));
    }

    #[test]
    fn general_notes_block() {
        let r = Reservation {
            notes: Some("Llevar pasaporte vigente.".to_string()),
            ..Reservation::default()
        };
        let pages = compose_with(|c, _| render(&r, "AL Mundo Tours", c));
        assert!(pages[1].contains_text("Notas Adicionales"));
        assert!(pages[1].contains_text("Llevar pasaporte vigente."));
    }
}
