//! # Image Loading and Normalization
//!
//! Turns the image references a reservation carries into something the PDF
//! writer can embed. A reference is one of:
//!
//! - `http://` / `https://` URL, fetched through an [`ImageFetcher`]
//! - site-relative path (`/assets/x.png`, `./x.png`), resolved against the
//!   configured [`SiteRoot`]. Paths with a `..` segment are refused.
//! - `data:image/...;base64,...` data URI
//! - anything else, tried as raw base64
//!
//! Fetched images are decoded, flattened onto white and re-encoded as JPEG
//! at quality 80. Inline payloads are sniffed by magic bytes: JPEG and PNG
//! pass through untouched, WebP is transcoded to JPEG like a fetched image.
//! The PDF writer only ever sees JPEG or PNG.
//!
//! Every failure here is soft. Callers log it and draw a placeholder.

use std::io::Cursor;
#[cfg(not(target_arch = "wasm32"))]
use std::io::Read;
use std::path::PathBuf;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};

use crate::error::ImageError;

/// JPEG quality used for every transcode.
pub const JPEG_QUALITY: u8 = 80;

/// Refuse bodies larger than this from the network.
#[cfg(not(target_arch = "wasm32"))]
const MAX_FETCH_BYTES: u64 = 20 * 1024 * 1024;

/// A fully decoded/loaded image ready for PDF embedding.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub pixel_data: ImagePixelData,
    pub width_px: u32,
    pub height_px: u32,
}

/// The pixel data in a format the PDF serializer can consume directly.
#[derive(Debug, Clone)]
pub enum ImagePixelData {
    /// Raw JPEG bytes, embedded directly with DCTDecode.
    Jpeg {
        data: Vec<u8>,
        color_space: JpegColorSpace,
    },
    /// Decoded RGB pixels + optional alpha channel.
    Decoded {
        /// width * height * 3 bytes (RGB)
        rgb: Vec<u8>,
        /// width * height bytes (grayscale alpha). None if fully opaque.
        alpha: Option<Vec<u8>>,
    },
}

/// JPEG color space for the PDF /ColorSpace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JpegColorSpace {
    DeviceRGB,
    DeviceGray,
}

/// Format of a normalized image. Never WebP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedFormat {
    Jpeg,
    Png,
}

/// Container format detected from leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SniffedFormat {
    Jpeg,
    Png,
    WebP,
}

/// A normalized image: encoded bytes in an embeddable format.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    pub data: Vec<u8>,
    pub format: EmbedFormat,
    pub width_px: u32,
    pub height_px: u32,
}

impl PreparedImage {
    /// Turn the encoded bytes into pixel data for the PDF writer.
    pub fn decode(&self) -> Result<LoadedImage, ImageError> {
        match self.format {
            EmbedFormat::Jpeg => Ok(LoadedImage {
                pixel_data: ImagePixelData::Jpeg {
                    data: self.data.clone(),
                    color_space: detect_jpeg_color_space(&self.data),
                },
                width_px: self.width_px,
                height_px: self.height_px,
            }),
            EmbedFormat::Png => decode_png(&self.data),
        }
    }
}

/// Source of bytes for remote references.
pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError>;
}

impl<F> ImageFetcher for F
where
    F: Fn(&str) -> Result<Vec<u8>, ImageError>,
{
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
        self(url)
    }
}

/// Blocking HTTP fetcher.
#[cfg(not(target_arch = "wasm32"))]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            agent: ureq::Agent::new(),
        }
    }

    /// Bound connect plus read time for each request.
    pub fn with_timeout(timeout: std::time::Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ImageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
        let response = self.agent.get(url).call().map_err(|e| ImageError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(MAX_FETCH_BYTES)
            .read_to_end(&mut bytes)
            .map_err(|e| ImageError::Fetch {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        Ok(bytes)
    }
}

/// Where site-relative references (`/assets/logo.png`) live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteRoot {
    /// Base URL of the site serving the assets, fetched through the fetcher.
    Url(String),
    /// Local directory mirroring the site's public assets.
    Dir(PathBuf),
}

/// How a reference string should be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageReference<'a> {
    Remote(&'a str),
    SiteRelative(&'a str),
    Inline(&'a str),
}

fn classify(reference: &str) -> ImageReference<'_> {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        ImageReference::Remote(reference)
    } else if (reference.starts_with('/') && !reference.starts_with("//"))
        || reference.starts_with("./")
        || reference.starts_with("../")
    {
        ImageReference::SiteRelative(reference)
    } else {
        ImageReference::Inline(reference)
    }
}

/// Resolves and normalizes image references.
pub struct ImageLoader {
    fetcher: Option<Box<dyn ImageFetcher>>,
    site_root: Option<SiteRoot>,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader {
    /// Loader with the default HTTP fetcher and no site root.
    pub fn new() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let fetcher: Option<Box<dyn ImageFetcher>> = Some(Box::new(HttpFetcher::new()));
        #[cfg(target_arch = "wasm32")]
        let fetcher: Option<Box<dyn ImageFetcher>> = None;
        Self {
            fetcher,
            site_root: None,
        }
    }

    /// Loader that only accepts inline images.
    pub fn offline() -> Self {
        Self {
            fetcher: None,
            site_root: None,
        }
    }

    pub fn with_fetcher(mut self, fetcher: impl ImageFetcher + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    pub fn with_site_root(mut self, root: SiteRoot) -> Self {
        self.site_root = Some(root);
        self
    }

    /// Normalize one reference into an embeddable image.
    ///
    /// Makes a single attempt. Nothing is cached between calls.
    pub fn prepare(&self, reference: &str) -> Result<PreparedImage, ImageError> {
        let reference = reference.trim();
        match classify(reference) {
            ImageReference::Remote(url) => {
                log::debug!("Fetching remote image {}", url);
                let bytes = self.fetch(url)?;
                transcode_to_jpeg(&bytes)
            }
            ImageReference::SiteRelative(path) => {
                let bytes = self.read_site_asset(path)?;
                transcode_to_jpeg(&bytes)
            }
            ImageReference::Inline(src) => {
                let bytes = read_inline_bytes(src)?;
                normalize_bytes(bytes)
            }
        }
    }

    /// [`prepare`](Self::prepare), logging the failure under `what`.
    pub fn prepare_or_warn(&self, reference: &str, what: &str) -> Option<PreparedImage> {
        match self.prepare(reference) {
            Ok(image) => Some(image),
            Err(e) => {
                log::warn!("Could not load {} image: {}", what, e);
                None
            }
        }
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
        match &self.fetcher {
            Some(fetcher) => fetcher.fetch(url),
            None => Err(ImageError::Fetch {
                url: url.to_string(),
                message: "no fetcher configured".to_string(),
            }),
        }
    }

    fn read_site_asset(&self, path: &str) -> Result<Vec<u8>, ImageError> {
        if path.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(ImageError::OutsideSiteRoot(path.to_string()));
        }
        match &self.site_root {
            None => Err(ImageError::NoSiteRoot(path.to_string())),
            Some(SiteRoot::Url(base)) => {
                let url = format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    path.trim_start_matches("./").trim_start_matches('/')
                );
                log::debug!("Fetching site asset {}", url);
                self.fetch(&url)
            }
            Some(SiteRoot::Dir(dir)) => {
                let full = dir.join(path.trim_start_matches('/'));
                read_file(full)
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_file(path: PathBuf) -> Result<Vec<u8>, ImageError> {
    std::fs::read(&path).map_err(|source| ImageError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(target_arch = "wasm32")]
fn read_file(path: PathBuf) -> Result<Vec<u8>, ImageError> {
    Err(ImageError::Io {
        path: path.display().to_string(),
        source: std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "file access is not available in WASM",
        ),
    })
}

/// Decode a data URI or raw base64 payload.
fn read_inline_bytes(src: &str) -> Result<Vec<u8>, ImageError> {
    if src.starts_with("data:") {
        if !src.starts_with("data:image/") {
            return Err(ImageError::DataUri("not an image media type"));
        }
        let comma_pos = src.find(',').ok_or(ImageError::DataUri("missing comma"))?;
        return base64_decode(&src[comma_pos + 1..]);
    }
    base64_decode(src)
}

fn base64_decode(input: &str) -> Result<Vec<u8>, ImageError> {
    use base64::Engine;
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(base64::engine::general_purpose::STANDARD.decode(cleaned)?)
}

/// Detect the container format from magic bytes.
pub fn sniff_format(data: &[u8]) -> Option<SniffedFormat> {
    if is_jpeg(data) {
        Some(SniffedFormat::Jpeg)
    } else if is_png(data) {
        Some(SniffedFormat::Png)
    } else if is_webp(data) {
        Some(SniffedFormat::WebP)
    } else {
        None
    }
}

fn is_jpeg(data: &[u8]) -> bool {
    data.starts_with(&[0xFF, 0xD8, 0xFF])
}

fn is_png(data: &[u8]) -> bool {
    data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])
}

fn is_webp(data: &[u8]) -> bool {
    data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP"
}

/// Dispatch inline bytes by their sniffed format.
fn normalize_bytes(data: Vec<u8>) -> Result<PreparedImage, ImageError> {
    if data.len() < 4 {
        return Err(ImageError::TooShort);
    }
    match sniff_format(&data).ok_or(ImageError::UnsupportedFormat)? {
        SniffedFormat::Jpeg => passthrough(data, EmbedFormat::Jpeg),
        SniffedFormat::Png => passthrough(data, EmbedFormat::Png),
        SniffedFormat::WebP => transcode_to_jpeg(&data),
    }
}

/// Keep the bytes, read only the dimensions.
fn passthrough(data: Vec<u8>, format: EmbedFormat) -> Result<PreparedImage, ImageError> {
    let (width_px, height_px) = image::ImageReader::new(Cursor::new(&data))
        .with_guessed_format()
        .map_err(|e| ImageError::Decode(image::ImageError::IoError(e)))?
        .into_dimensions()
        .map_err(ImageError::Decode)?;
    Ok(PreparedImage {
        data,
        format,
        width_px,
        height_px,
    })
}

/// Decode any supported format and re-encode as JPEG on a white background.
fn transcode_to_jpeg(data: &[u8]) -> Result<PreparedImage, ImageError> {
    let img = image::load_from_memory(data).map_err(ImageError::Decode)?;
    let rgb = flatten_onto_white(&img);

    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(ImageError::Encode)?;

    Ok(PreparedImage {
        data: buf,
        format: EmbedFormat::Jpeg,
        width_px: rgb.width(),
        height_px: rgb.height(),
    })
}

/// Composite over opaque white so transparent regions don't turn black.
fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let p = rgba.get_pixel(x, y);
        let a = p[3] as u16;
        let blend = |c: u8| ((c as u16 * a + 255 * (255 - a) + 127) / 255) as u8;
        image::Rgb([blend(p[0]), blend(p[1]), blend(p[2])])
    })
}

/// Scan JPEG markers to find the SOF (Start of Frame) segment and read
/// the number of components to determine color space.
fn detect_jpeg_color_space(data: &[u8]) -> JpegColorSpace {
    let mut i = 2; // skip SOI marker (FF D8)
    while i + 1 < data.len() {
        if data[i] != 0xFF {
            break;
        }
        let marker = data[i + 1];
        // SOF markers: C0-C3, C5-C7, C9-CB, CD-CF
        let is_sof = matches!(marker, 0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF);
        if is_sof && i + 9 < data.len() {
            // length(2) + precision(1) + height(2) + width(2) + num_components(1)
            return if data[i + 9] == 1 {
                JpegColorSpace::DeviceGray
            } else {
                JpegColorSpace::DeviceRGB
            };
        }
        if i + 3 < data.len() {
            let seg_len = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
            i += 2 + seg_len;
        } else {
            break;
        }
    }
    JpegColorSpace::DeviceRGB
}

/// PNG: decode to RGBA, split into RGB + alpha.
fn decode_png(data: &[u8]) -> Result<LoadedImage, ImageError> {
    let img = image::load_from_memory_with_format(data, image::ImageFormat::Png)
        .map_err(ImageError::Decode)?;

    let rgba = img.to_rgba8();
    let width = rgba.width();
    let height = rgba.height();

    let pixel_count = (width * height) as usize;
    let mut rgb = Vec::with_capacity(pixel_count * 3);
    let mut alpha = Vec::with_capacity(pixel_count);
    let mut has_transparency = false;

    for pixel in rgba.pixels() {
        rgb.extend_from_slice(&pixel.0[..3]);
        alpha.push(pixel[3]);
        has_transparency |= pixel[3] != 255;
    }

    Ok(LoadedImage {
        pixel_data: ImagePixelData::Decoded {
            rgb,
            alpha: if has_transparency { Some(alpha) } else { None },
        },
        width_px: width,
        height_px: height,
    })
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_sniff_format() {
        assert_eq!(sniff_format(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(SniffedFormat::Jpeg));
        assert_eq!(sniff_format(&png(1, 1, 255)), Some(SniffedFormat::Png));
        assert_eq!(sniff_format(&webp(1, 1)), Some(SniffedFormat::WebP));
        assert_eq!(sniff_format(b"RIFF\0\0\0\0WAVEfmt "), None);
        assert_eq!(sniff_format(&[0x89, 0x50]), None);
        assert_eq!(sniff_format(&[0xFF]), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify("https://cdn.example.com/a.jpg"),
            ImageReference::Remote("https://cdn.example.com/a.jpg")
        );
        assert_eq!(
            classify("/attached_assets/logo.png"),
            ImageReference::SiteRelative("/attached_assets/logo.png")
        );
        assert_eq!(classify("./a.png"), ImageReference::SiteRelative("./a.png"));
        assert_eq!(classify("//cdn/a.png"), ImageReference::Inline("//cdn/a.png"));
        assert_eq!(classify("iVBORw0KGgo="), ImageReference::Inline("iVBORw0KGgo="));
    }

    #[test]
    fn test_png_passes_through_unchanged() {
        let bytes = png(3, 2, 255);
        let prepared = ImageLoader::offline()
            .prepare(&data_uri("image/png", &bytes))
            .unwrap();
        assert_eq!(prepared.format, EmbedFormat::Png);
        assert_eq!(prepared.data, bytes);
        assert_eq!((prepared.width_px, prepared.height_px), (3, 2));
    }

    #[test]
    fn test_jpeg_passes_through_unchanged() {
        let bytes = jpeg(4, 4);
        let prepared = ImageLoader::offline()
            .prepare(&data_uri("image/jpeg", &bytes))
            .unwrap();
        assert_eq!(prepared.format, EmbedFormat::Jpeg);
        assert_eq!(prepared.data, bytes);
    }

    #[test]
    fn test_webp_is_transcoded_to_jpeg() {
        // The declared media type is ignored; the bytes decide.
        let prepared = ImageLoader::offline()
            .prepare(&data_uri("image/png", &webp(5, 3)))
            .unwrap();
        assert_eq!(prepared.format, EmbedFormat::Jpeg);
        assert_eq!(sniff_format(&prepared.data), Some(SniffedFormat::Jpeg));
        assert_eq!((prepared.width_px, prepared.height_px), (5, 3));
    }

    #[test]
    fn test_raw_base64_png() {
        use base64::Engine;
        let b64 = base64::engine::general_purpose::STANDARD.encode(png(1, 1, 255));
        let prepared = ImageLoader::offline().prepare(&b64).unwrap();
        assert_eq!(prepared.format, EmbedFormat::Png);
    }

    #[test]
    fn test_invalid_data_uri() {
        let result = ImageLoader::offline().prepare("data:image/png;base64");
        assert!(matches!(result, Err(ImageError::DataUri(_))));
    }

    #[test]
    fn test_unknown_bytes_are_unsupported() {
        let uri = data_uri("image/gif", b"GIF89a\x01\x00\x01\x00");
        let result = ImageLoader::offline().prepare(&uri);
        assert!(matches!(result, Err(ImageError::UnsupportedFormat)));
    }

    #[test]
    fn test_too_short_data() {
        let uri = data_uri("image/png", &[0x89, 0x50]);
        let result = ImageLoader::offline().prepare(&uri);
        assert!(matches!(result, Err(ImageError::TooShort)));
    }

    #[test]
    fn test_remote_png_becomes_jpeg() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let loader = ImageLoader::offline().with_fetcher(move |url: &str| -> Result<Vec<u8>, ImageError> {
            seen.set(seen.get() + 1);
            assert_eq!(url, "https://img.example.com/hotel.png");
            Ok(png(4, 4, 0))
        });
        let prepared = loader.prepare("https://img.example.com/hotel.png").unwrap();
        assert_eq!(prepared.format, EmbedFormat::Jpeg);
        assert_eq!(calls.get(), 1);

        // Fully transparent input flattens to white, not black.
        let decoded = image::load_from_memory(&prepared.data).unwrap().to_rgb8();
        assert!(decoded.pixels().all(|p| p.0.iter().all(|&c| c > 240)));
    }

    #[test]
    fn test_fetch_failure_is_single_attempt() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let loader = ImageLoader::offline().with_fetcher(move |url: &str| -> Result<Vec<u8>, ImageError> {
            seen.set(seen.get() + 1);
            Err(ImageError::Fetch {
                url: url.to_string(),
                message: "503".to_string(),
            })
        });
        assert!(loader.prepare("http://img.example.com/a.jpg").is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_site_relative_without_root() {
        let result = ImageLoader::offline().prepare("/attached_assets/logo.png");
        assert!(matches!(result, Err(ImageError::NoSiteRoot(_))));
    }

    #[test]
    fn test_site_relative_url_root() {
        let loader = ImageLoader::offline()
            .with_site_root(SiteRoot::Url("https://agency.example.com/".to_string()))
            .with_fetcher(|url: &str| -> Result<Vec<u8>, ImageError> {
                assert_eq!(url, "https://agency.example.com/attached_assets/logo.png");
                Ok(jpeg(2, 2))
            });
        let prepared = loader.prepare("/attached_assets/logo.png").unwrap();
        assert_eq!(prepared.format, EmbedFormat::Jpeg);
    }

    #[test]
    fn test_site_relative_dir_root() {
        let dir = std::env::temp_dir().join(format!("voucher-assets-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("attached_assets")).unwrap();
        std::fs::write(dir.join("attached_assets/logo.webp"), webp(2, 2)).unwrap();

        let loader = ImageLoader::offline().with_site_root(SiteRoot::Dir(dir.clone()));
        let prepared = loader.prepare("/attached_assets/logo.webp").unwrap();
        assert_eq!(prepared.format, EmbedFormat::Jpeg);

        let missing = loader.prepare("/attached_assets/nope.png");
        assert!(matches!(missing, Err(ImageError::Io { .. })));
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_site_relative_parent_segments_are_refused() {
        let base = std::env::temp_dir().join(format!("voucher-site-{}", std::process::id()));
        let public = base.join("public");
        std::fs::create_dir_all(public.join("img")).unwrap();
        std::fs::write(base.join("private.png"), png(2, 2, 255)).unwrap();

        let loader = ImageLoader::offline().with_site_root(SiteRoot::Dir(public));
        for reference in ["../private.png", "/img/../../private.png", "./img/..\\..\\private.png"] {
            let result = loader.prepare(reference);
            assert!(
                matches!(result, Err(ImageError::OutsideSiteRoot(_))),
                "{} was not refused",
                reference
            );
        }

        let fetched = Rc::new(Cell::new(0));
        let seen = fetched.clone();
        let remote = ImageLoader::offline()
            .with_site_root(SiteRoot::Url("https://agency.example.com".to_string()))
            .with_fetcher(move |_url: &str| -> Result<Vec<u8>, ImageError> {
                seen.set(seen.get() + 1);
                Ok(jpeg(2, 2))
            });
        assert!(matches!(
            remote.prepare("../private.png"),
            Err(ImageError::OutsideSiteRoot(_))
        ));
        assert_eq!(fetched.get(), 0);
        std::fs::remove_dir_all(base).ok();
    }

    #[test]
    fn test_decode_png_with_alpha() {
        let prepared = ImageLoader::offline()
            .prepare(&data_uri("image/png", &png(1, 1, 128)))
            .unwrap();
        let loaded = prepared.decode().unwrap();
        match &loaded.pixel_data {
            ImagePixelData::Decoded { rgb, alpha } => {
                assert_eq!(rgb, &[240, 126, 26]);
                assert_eq!(alpha.as_deref(), Some(&[128u8][..]));
            }
            _ => panic!("PNG should decode to Decoded variant"),
        }
    }

    #[test]
    fn test_decode_opaque_png_has_no_alpha() {
        let prepared = ImageLoader::offline()
            .prepare(&data_uri("image/png", &png(2, 2, 255)))
            .unwrap();
        match prepared.decode().unwrap().pixel_data {
            ImagePixelData::Decoded { alpha, .. } => assert!(alpha.is_none()),
            _ => panic!("PNG should decode to Decoded variant"),
        }
    }

    #[test]
    fn test_decode_jpeg_keeps_bytes() {
        let bytes = jpeg(2, 2);
        let prepared = ImageLoader::offline()
            .prepare(&data_uri("image/jpeg", &bytes))
            .unwrap();
        let loaded = prepared.decode().unwrap();
        assert_eq!((loaded.width_px, loaded.height_px), (2, 2));
        match loaded.pixel_data {
            ImagePixelData::Jpeg { data, color_space } => {
                assert_eq!(data, bytes);
                assert_eq!(color_space, JpegColorSpace::DeviceRGB);
            }
            _ => panic!("JPEG should stay as Jpeg variant"),
        }
    }
}
