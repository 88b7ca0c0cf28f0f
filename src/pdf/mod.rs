//! # PDF Serializer
//!
//! Takes the laid-out pages from the composer and writes a valid PDF file.
//!
//! This is a from-scratch PDF 1.7 writer. The voucher only needs a small
//! subset of PDF: two standard Type1 fonts, filled rectangles (some of them
//! translucent), stroked lines, image XObjects and URI link annotations.
//!
//! ## PDF Structure (simplified)
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj ... endobj  <- objects (fonts, pages, content streams, etc.)
//! 2 0 obj ... endobj
//! ...
//! xref                <- cross-reference table (byte offsets of each object)
//! trailer             <- points to the root object
//! %%EOF
//! ```
//!
//! Layout coordinates are millimetres from the top-left corner; PDF user
//! space is points from the bottom-left. Everything is converted on the way
//! out. Output contains no timestamps, so the same pages always produce the
//! same bytes.

use std::fmt::Write as FmtWrite; // for write! on String
use std::io::Write as IoWrite; // for write! on Vec<u8>
use std::rc::Rc;

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::error::VoucherError;
use crate::font::{unicode_to_winansi, StandardFont, PT_PER_MM};
use crate::image_loader::{ImagePixelData, JpegColorSpace, LoadedImage};
use crate::layout::{DrawCommand, LayoutElement, LayoutPage};

/// Document information dictionary entries.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
}

pub struct PdfWriter;

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks allocated PDF objects during writing.
struct PdfBuilder {
    objects: Vec<PdfObject>,
    /// Font -> object id, referenced as /F0, /F1, ...
    font_objects: Vec<(StandardFont, usize)>,
    /// Distinct images in first-appearance order, referenced as /Im0, /Im1, ...
    image_objects: Vec<(Rc<LoadedImage>, usize)>,
    /// Fill alpha in thousandths -> ExtGState object id, referenced as /GS0, /GS1, ...
    alpha_states: Vec<(u16, usize)>,
}

struct PdfObject {
    #[allow(dead_code)]
    id: usize,
    data: Vec<u8>,
}

impl PdfBuilder {
    fn push(&mut self, data: Vec<u8>) -> usize {
        let id = self.objects.len();
        self.objects.push(PdfObject { id, data });
        id
    }

    fn push_stream(&mut self, dict_entries: &str, payload: &[u8]) -> usize {
        let mut data: Vec<u8> = Vec::new();
        let _ = write!(
            data,
            "<< {} /Length {} >>\nstream\n",
            dict_entries,
            payload.len()
        );
        data.extend_from_slice(payload);
        data.extend_from_slice(b"\nendstream");
        self.push(data)
    }

    fn font_index(&self, font: StandardFont) -> usize {
        self.font_objects
            .iter()
            .position(|(f, _)| *f == font)
            .unwrap_or(0)
    }

    fn image_index(&self, image: &Rc<LoadedImage>) -> Option<usize> {
        self.image_objects
            .iter()
            .position(|(img, _)| Rc::ptr_eq(img, image))
    }

    fn alpha_index(&self, alpha: f64) -> Option<usize> {
        let key = alpha_key(alpha);
        self.alpha_states.iter().position(|(k, _)| *k == key)
    }
}

fn alpha_key(alpha: f64) -> u16 {
    (alpha.clamp(0.0, 1.0) * 1000.0).round() as u16
}

fn mm(v: f64) -> f64 {
    v * PT_PER_MM
}

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write laid-out pages to a PDF byte vector.
    pub fn write(&self, pages: &[LayoutPage], metadata: &Metadata) -> Result<Vec<u8>, VoucherError> {
        if pages.is_empty() {
            return Err(VoucherError::RenderError(
                "cannot write a PDF with no pages".to_string(),
            ));
        }

        let mut builder = PdfBuilder {
            objects: Vec::new(),
            font_objects: Vec::new(),
            image_objects: Vec::new(),
            alpha_states: Vec::new(),
        };

        // Reserve object IDs:
        // 0 = placeholder (PDF objects are 1-indexed)
        // 1 = Catalog
        // 2 = Pages (page tree root)
        // 3+ = fonts, graphics states, images, then per page: content, annotations, page
        builder.objects.push(PdfObject { id: 0, data: vec![] });
        builder.objects.push(PdfObject { id: 1, data: vec![] });
        builder.objects.push(PdfObject { id: 2, data: vec![] });

        self.register_fonts(&mut builder, pages);
        self.register_alpha_states(&mut builder, pages);
        self.register_images(&mut builder, pages);

        let mut page_obj_ids: Vec<usize> = Vec::new();

        for page in pages {
            let content = self.build_content_stream(page, &builder);
            let compressed = compress_to_vec_zlib(content.as_bytes(), 6);
            let content_obj_id = builder.push_stream("/Filter /FlateDecode", &compressed);

            let annot_ids = self.write_link_annotations(&mut builder, page);

            let resources = self.build_resource_dict(page, &builder);
            let annots = if annot_ids.is_empty() {
                String::new()
            } else {
                format!(
                    " /Annots [{}]",
                    annot_ids
                        .iter()
                        .map(|id| format!("{} 0 R", id))
                        .collect::<Vec<_>>()
                        .join(" ")
                )
            };
            let page_dict = format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {} 0 R /Resources << {} >>{} >>",
                mm(page.width),
                mm(page.height),
                content_obj_id,
                resources,
                annots
            );
            page_obj_ids.push(builder.push(page_dict.into_bytes()));
        }

        // Write Catalog (object 1)
        builder.objects[1].data = b"<< /Type /Catalog /Pages 2 0 R >>".to_vec();

        // Write Pages tree (object 2)
        let kids: String = page_obj_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ");
        builder.objects[2].data = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            page_obj_ids.len()
        )
        .into_bytes();

        // Info dictionary (metadata). No dates, so output is reproducible.
        let mut info = String::from("<< ");
        if let Some(ref title) = metadata.title {
            let _ = write!(info, "/Title ({}) ", Self::escape_pdf_string(title));
        }
        if let Some(ref author) = metadata.author {
            let _ = write!(info, "/Author ({}) ", Self::escape_pdf_string(author));
        }
        if let Some(ref subject) = metadata.subject {
            let _ = write!(info, "/Subject ({}) ", Self::escape_pdf_string(subject));
        }
        let _ = write!(
            info,
            "/Producer (voucher {}) >>",
            env!("CARGO_PKG_VERSION")
        );
        let info_obj_id = builder.push(info.into_bytes());

        log::debug!(
            "Serialized {} page(s), {} image(s), {} object(s)",
            pages.len(),
            builder.image_objects.len(),
            builder.objects.len() - 1
        );

        Ok(self.serialize(&builder, info_obj_id))
    }

    /// Register the fonts actually used across all pages. Helvetica is
    /// always present so every page has a default font resource.
    fn register_fonts(&self, builder: &mut PdfBuilder, pages: &[LayoutPage]) {
        let mut fonts: Vec<StandardFont> = vec![StandardFont::Helvetica];
        for element in pages.iter().flat_map(|p| p.elements.iter()) {
            if let DrawCommand::Text { style, .. } = &element.draw {
                if !fonts.contains(&style.font) {
                    fonts.push(style.font);
                }
            }
        }
        // Deterministic ordering regardless of which face appears first
        fonts.sort();

        for font in fonts {
            let font_dict = format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} \
                 /Encoding /WinAnsiEncoding >>",
                font.pdf_name()
            );
            let obj_id = builder.push(font_dict.into_bytes());
            builder.font_objects.push((font, obj_id));
        }
    }

    /// One ExtGState per distinct translucent fill.
    fn register_alpha_states(&self, builder: &mut PdfBuilder, pages: &[LayoutPage]) {
        for element in pages.iter().flat_map(|p| p.elements.iter()) {
            let DrawCommand::Rect { fill } = &element.draw else {
                continue;
            };
            if fill.a <= 0.0 || fill.a >= 1.0 || builder.alpha_index(fill.a).is_some() {
                continue;
            }
            let key = alpha_key(fill.a);
            let alpha = key as f64 / 1000.0;
            let obj_id = builder.push(
                format!("<< /Type /ExtGState /ca {:.3} /CA {:.3} >>", alpha, alpha).into_bytes(),
            );
            builder.alpha_states.push((key, obj_id));
        }
    }

    /// Write each distinct image once, in first-appearance order. The same
    /// `Rc` drawn on several pages shares one XObject.
    fn register_images(&self, builder: &mut PdfBuilder, pages: &[LayoutPage]) {
        for element in pages.iter().flat_map(|p| p.elements.iter()) {
            let DrawCommand::Image { image_data } = &element.draw else {
                continue;
            };
            if builder.image_index(image_data).is_some() {
                continue;
            }
            let obj_id = Self::write_image_xobject(builder, image_data);
            builder.image_objects.push((Rc::clone(image_data), obj_id));
        }
    }

    /// Write a single image as one or two XObject PDF objects.
    /// Returns the main XObject ID.
    fn write_image_xobject(builder: &mut PdfBuilder, image: &LoadedImage) -> usize {
        match &image.pixel_data {
            ImagePixelData::Jpeg { data, color_space } => {
                let color_space_str = match color_space {
                    JpegColorSpace::DeviceRGB => "/DeviceRGB",
                    JpegColorSpace::DeviceGray => "/DeviceGray",
                };
                builder.push_stream(
                    &format!(
                        "/Type /XObject /Subtype /Image /Width {} /Height {} \
                         /ColorSpace {} /BitsPerComponent 8 /Filter /DCTDecode",
                        image.width_px, image.height_px, color_space_str
                    ),
                    data,
                )
            }

            ImagePixelData::Decoded { rgb, alpha } => {
                // Write SMask first if alpha channel exists
                let smask_id = alpha.as_ref().map(|alpha_data| {
                    let compressed_alpha = compress_to_vec_zlib(alpha_data, 6);
                    builder.push_stream(
                        &format!(
                            "/Type /XObject /Subtype /Image /Width {} /Height {} \
                             /ColorSpace /DeviceGray /BitsPerComponent 8 /Filter /FlateDecode",
                            image.width_px, image.height_px
                        ),
                        &compressed_alpha,
                    )
                });

                let smask_ref = smask_id
                    .map(|id| format!(" /SMask {} 0 R", id))
                    .unwrap_or_default();
                let compressed_rgb = compress_to_vec_zlib(rgb, 6);
                builder.push_stream(
                    &format!(
                        "/Type /XObject /Subtype /Image /Width {} /Height {} \
                         /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /FlateDecode{}",
                        image.width_px, image.height_px, smask_ref
                    ),
                    &compressed_rgb,
                )
            }
        }
    }

    /// Fonts and graphics states are shared by every page; XObjects are
    /// listed only on the pages that draw them.
    fn build_resource_dict(&self, page: &LayoutPage, builder: &PdfBuilder) -> String {
        let fonts = builder
            .font_objects
            .iter()
            .enumerate()
            .map(|(i, (_, obj_id))| format!("/F{} {} 0 R", i, obj_id))
            .collect::<Vec<_>>()
            .join(" ");
        let mut resources = format!("/Font << {} >>", fonts);

        if !builder.alpha_states.is_empty() {
            let states = builder
                .alpha_states
                .iter()
                .enumerate()
                .map(|(i, (_, obj_id))| format!("/GS{} {} 0 R", i, obj_id))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(resources, " /ExtGState << {} >>", states);
        }

        let mut used: Vec<usize> = page
            .elements
            .iter()
            .filter_map(|el| match &el.draw {
                DrawCommand::Image { image_data } => builder.image_index(image_data),
                _ => None,
            })
            .collect();
        used.sort_unstable();
        used.dedup();
        if !used.is_empty() {
            let xobjects = used
                .iter()
                .map(|&i| format!("/Im{} {} 0 R", i, builder.image_objects[i].1))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(resources, " /XObject << {} >>", xobjects);
        }

        resources
    }

    /// Build the PDF content stream for a single page.
    fn build_content_stream(&self, page: &LayoutPage, builder: &PdfBuilder) -> String {
        let mut stream = String::new();
        for element in &page.elements {
            self.write_element(&mut stream, element, page.height, builder);
        }
        stream
    }

    /// Write a single layout element as PDF operators.
    fn write_element(
        &self,
        stream: &mut String,
        element: &LayoutElement,
        page_height: f64,
        builder: &PdfBuilder,
    ) {
        match &element.draw {
            DrawCommand::Rect { fill } => {
                if fill.a <= 0.0 {
                    return;
                }
                let x = mm(element.x);
                let y = mm(page_height - element.y - element.height);
                let _ = write!(stream, "q\n");
                if fill.a < 1.0 {
                    if let Some(gs) = builder.alpha_index(fill.a) {
                        let _ = write!(stream, "/GS{} gs\n", gs);
                    }
                }
                let _ = write!(
                    stream,
                    "{:.3} {:.3} {:.3} rg\n{:.2} {:.2} {:.2} {:.2} re\nf\nQ\n",
                    fill.r,
                    fill.g,
                    fill.b,
                    x,
                    y,
                    mm(element.width),
                    mm(element.height)
                );
            }

            DrawCommand::Line { color, line_width } => {
                let _ = write!(
                    stream,
                    "q\n{:.3} {:.3} {:.3} RG\n{:.2} w\n{:.2} {:.2} m\n{:.2} {:.2} l\nS\nQ\n",
                    color.r,
                    color.g,
                    color.b,
                    mm(*line_width),
                    mm(element.x),
                    mm(page_height - element.y),
                    mm(element.x + element.width),
                    mm(page_height - element.y - element.height)
                );
            }

            DrawCommand::Text { text, style } => {
                let font_idx = builder.font_index(style.font);
                let _ = write!(
                    stream,
                    "BT\n{:.3} {:.3} {:.3} rg\n/F{} {:.1} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
                    style.color.r,
                    style.color.g,
                    style.color.b,
                    font_idx,
                    style.size,
                    mm(element.x),
                    mm(page_height - element.y),
                    Self::escape_pdf_string(text)
                );
            }

            DrawCommand::Image { image_data } => {
                let x = mm(element.x);
                let y = mm(page_height - element.y - element.height);
                match builder.image_index(image_data) {
                    Some(img_idx) => {
                        let _ = write!(
                            stream,
                            "q\n{:.4} 0 0 {:.4} {:.2} {:.2} cm\n/Im{} Do\nQ\n",
                            mm(element.width),
                            mm(element.height),
                            x,
                            y,
                            img_idx
                        );
                    }
                    None => {
                        // Fallback: grey placeholder if the image was never registered
                        let _ = write!(
                            stream,
                            "q\n0.9 0.9 0.9 rg\n{:.2} {:.2} {:.2} {:.2} re\nf\nQ\n",
                            x,
                            y,
                            mm(element.width),
                            mm(element.height)
                        );
                    }
                }
            }
        }
    }

    /// One /Link annotation per element carrying an href. Returns the
    /// annotation object IDs for the page's /Annots array.
    fn write_link_annotations(&self, builder: &mut PdfBuilder, page: &LayoutPage) -> Vec<usize> {
        let mut ids = Vec::new();
        for element in &page.elements {
            let Some(url) = &element.href else {
                continue;
            };
            // Text elements are positioned by baseline; cover the ascent
            // above it and a little descent below.
            let (top, bottom) = match element.draw {
                DrawCommand::Text { .. } => (
                    element.y - element.height,
                    element.y + element.height * 0.25,
                ),
                _ => (element.y, element.y + element.height),
            };
            let annot = format!(
                "<< /Type /Annot /Subtype /Link /Rect [{:.2} {:.2} {:.2} {:.2}] \
                 /Border [0 0 0] /A << /Type /Action /S /URI /URI ({}) >> >>",
                mm(element.x),
                mm(page.height - bottom),
                mm(element.x + element.width),
                mm(page.height - top),
                Self::escape_pdf_string(url)
            );
            ids.push(builder.push(annot.into_bytes()));
        }
        ids
    }

    /// Encode a string as a PDF literal body in WinAnsiEncoding, escaping
    /// delimiters and writing non-ASCII bytes as octal escapes.
    fn escape_pdf_string(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for ch in s.chars() {
            let b = unicode_to_winansi(ch).unwrap_or(b'?');
            match b {
                b'\\' => out.push_str("\\\\"),
                b'(' => out.push_str("\\("),
                b')' => out.push_str("\\)"),
                0x20..=0x7E => out.push(b as char),
                _ => {
                    let _ = write!(out, "\\{:03o}", b);
                }
            }
        }
        out
    }

    /// Serialize all objects into the final PDF byte stream.
    fn serialize(&self, builder: &PdfBuilder, info_obj_id: usize) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; builder.objects.len()];

        // Header
        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, obj) in builder.objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let header = format!("{} 0 obj\n", i);
            output.extend_from_slice(header.as_bytes());
            output.extend_from_slice(&obj.data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", builder.objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            let _ = write!(output, "{:010} 00000 n \n", offset);
        }

        let _ = write!(
            output,
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            builder.objects.len(),
            info_obj_id,
            xref_offset
        );

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{PAGE_HEIGHT, PAGE_WIDTH};
    use crate::style::{Color, TextStyle};

    const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    fn page(elements: Vec<LayoutElement>) -> LayoutPage {
        LayoutPage {
            number: 1,
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            elements,
        }
    }

    fn element(draw: DrawCommand) -> LayoutElement {
        LayoutElement {
            x: 20.0,
            y: 40.0,
            width: 50.0,
            height: 10.0,
            draw,
            href: None,
        }
    }

    fn text(content: &str, style: TextStyle) -> LayoutElement {
        element(DrawCommand::Text {
            text: content.to_string(),
            style,
        })
    }

    fn image() -> Rc<LoadedImage> {
        Rc::new(LoadedImage {
            pixel_data: ImagePixelData::Decoded {
                rgb: vec![255; 2 * 2 * 3],
                alpha: Some(vec![128; 4]),
            },
            width_px: 2,
            height_px: 2,
        })
    }

    fn write(pages: &[LayoutPage]) -> String {
        let bytes = PdfWriter::new().write(pages, &Metadata::default()).unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn test_escape_pdf_string() {
        assert_eq!(
            PdfWriter::escape_pdf_string("Hello (World)"),
            "Hello \\(World\\)"
        );
        assert_eq!(
            PdfWriter::escape_pdf_string("back\\slash"),
            "back\\\\slash"
        );
        assert_eq!(PdfWriter::escape_pdf_string("Página"), "P\\341gina");
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let result = PdfWriter::new().write(&[], &Metadata::default());
        assert!(matches!(result, Err(VoucherError::RenderError(_))));
    }

    #[test]
    fn test_blank_page_produces_valid_pdf() {
        let bytes = PdfWriter::new()
            .write(&[page(vec![])], &Metadata::default())
            .unwrap();

        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
        assert!(bytes.windows(4).any(|w| w == b"xref"));
        assert!(bytes.windows(7).any(|w| w == b"trailer"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/MediaBox [0 0 595.28 841.89]"));
        assert!(!text.contains("/CreationDate"));
    }

    #[test]
    fn test_metadata_in_pdf() {
        let metadata = Metadata {
            title: Some("Reserva AL4167".to_string()),
            author: Some("AL Mundo Tours".to_string()),
            subject: None,
        };
        let bytes = PdfWriter::new().write(&[page(vec![])], &metadata).unwrap();
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.contains("/Title (Reserva AL4167)"));
        assert!(text.contains("/Author (AL Mundo Tours)"));
    }

    #[test]
    fn test_bold_font_registered_separately() {
        let text = write(&[page(vec![
            text("A", TextStyle::regular(12.0, BLACK)),
            text("B", TextStyle::bold(12.0, BLACK)),
        ])]);
        assert!(text.contains("/BaseFont /Helvetica "));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/WinAnsiEncoding"));
    }

    #[test]
    fn test_translucent_rect_uses_graphics_state() {
        let shade = Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.4,
        };
        let text = write(&[page(vec![
            element(DrawCommand::Rect { fill: shade }),
            element(DrawCommand::Rect { fill: shade }),
            element(DrawCommand::Rect { fill: Color::WHITE }),
        ])]);
        assert_eq!(text.matches("/Type /ExtGState").count(), 1);
        assert!(text.contains("/ca 0.400"));
        assert!(text.contains("/ExtGState << /GS0"));
    }

    #[test]
    fn test_opaque_rects_need_no_graphics_state() {
        let text = write(&[page(vec![element(DrawCommand::Rect { fill: Color::WHITE })])]);
        assert!(!text.contains("ExtGState"));
    }

    #[test]
    fn test_shared_image_written_once() {
        let img = image();
        let draw = || {
            element(DrawCommand::Image {
                image_data: Rc::clone(&img),
            })
        };
        let text = write(&[page(vec![draw(), draw()]), page(vec![draw()])]);
        // One RGB object plus its soft mask
        assert_eq!(text.matches("/Subtype /Image").count(), 2);
        assert!(text.contains("/SMask"));
        assert_eq!(text.matches("/XObject << /Im0").count(), 2);
    }

    #[test]
    fn test_distinct_images_get_distinct_names() {
        let text = write(&[page(vec![
            element(DrawCommand::Image { image_data: image() }),
            element(DrawCommand::Image { image_data: image() }),
        ])]);
        assert!(text.contains("/Im0"));
        assert!(text.contains("/Im1"));
    }

    #[test]
    fn test_jpeg_passthrough_uses_dct() {
        let jpeg = Rc::new(LoadedImage {
            pixel_data: ImagePixelData::Jpeg {
                data: vec![0xFF, 0xD8, 0xFF, 0xD9],
                color_space: JpegColorSpace::DeviceGray,
            },
            width_px: 1,
            height_px: 1,
        });
        let text = write(&[page(vec![element(DrawCommand::Image { image_data: jpeg })])]);
        assert!(text.contains("/Filter /DCTDecode"));
        assert!(text.contains("/ColorSpace /DeviceGray"));
    }

    #[test]
    fn test_href_produces_link_annotation() {
        let mut link = text("Ver términos", TextStyle::regular(10.0, BLACK));
        link.href = Some("https://example.com/terminos".to_string());
        let text = write(&[page(vec![link])]);
        assert!(text.contains("/Annots ["));
        assert!(text.contains("/S /URI /URI (https://example.com/terminos)"));
    }

    #[test]
    fn test_text_without_href_has_no_annotation() {
        let text = write(&[page(vec![text(
            "No link here",
            TextStyle::regular(10.0, BLACK),
        )])]);
        assert!(!text.contains("/Annots"));
        assert!(!text.contains("/URI"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let pages = [page(vec![
            text("Reserva", TextStyle::bold(28.0, BLACK)),
            element(DrawCommand::Image { image_data: image() }),
        ])];
        let a = PdfWriter::new().write(&pages, &Metadata::default()).unwrap();
        let b = PdfWriter::new().write(&pages, &Metadata::default()).unwrap();
        assert_eq!(a, b);
    }
}
