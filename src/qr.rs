//! Scannable-code generation.
//!
//! Wraps the `qrcode` crate behind the small surface the builders need: a
//! URL is encoded once into a [`ScannableCode`], which can then be saved as
//! an SVG file, saved as a PNG file, or rendered as an inline
//! `data:image/png;base64,` URI for the self-contained print sheet.
//!
//! Whether QR output happens at all is decided by configuration
//! (`[qr] enabled`), not probed at runtime; see [`crate::config::QrConfig`].
//! This module assumes it is wired in.
//!
//! Output is deterministic: the same URL and scale always produce the same
//! bytes, which keeps full rebuilds byte-identical.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::Luma;
use qrcode::QrCode;
use qrcode::render::svg;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("QR encoding error: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("PNG encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A QR symbol for one URL, ready to render at any scale.
///
/// The quiet zone is always emitted (the fixed four-module border the
/// renderer provides); `scale` is the pixel width of one module.
pub struct ScannableCode {
    code: QrCode,
}

impl ScannableCode {
    /// Encode a URL into a QR symbol.
    pub fn encode(url: &str) -> Result<Self, QrError> {
        Ok(Self {
            code: QrCode::new(url.as_bytes())?,
        })
    }

    /// Write the symbol as an SVG file.
    pub fn save_svg(&self, path: &Path, scale: u32) -> Result<(), QrError> {
        let xml = self
            .code
            .render::<svg::Color>()
            .quiet_zone(true)
            .module_dimensions(scale, scale)
            .build();
        fs::write(path, xml)?;
        Ok(())
    }

    /// Write the symbol as a PNG file.
    pub fn save_png(&self, path: &Path, scale: u32) -> Result<(), QrError> {
        self.raster(scale)
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    /// Render the symbol as an inline PNG data URI.
    pub fn png_data_uri(&self, scale: u32) -> Result<String, QrError> {
        let mut bytes = Vec::new();
        self.raster(scale)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(format!("data:image/png;base64,{}", BASE64.encode(&bytes)))
    }

    fn raster(&self, scale: u32) -> image::ImageBuffer<Luma<u8>, Vec<u8>> {
        self.code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .module_dimensions(scale, scale)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/cards/WI-001/";

    #[test]
    fn svg_output_is_svg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("code.svg");
        ScannableCode::encode(URL).unwrap().save_svg(&path, 4).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("</svg>"));
    }

    #[test]
    fn png_output_has_png_magic() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("code.png");
        ScannableCode::encode(URL).unwrap().save_png(&path, 4).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn data_uri_is_inline_png() {
        let uri = ScannableCode::encode(URL).unwrap().png_data_uri(4).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(uri.len() > "data:image/png;base64,".len());
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = ScannableCode::encode(URL).unwrap().png_data_uri(4).unwrap();
        let b = ScannableCode::encode(URL).unwrap().png_data_uri(4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn scale_changes_output_size() {
        let code = ScannableCode::encode(URL).unwrap();
        let small = code.png_data_uri(2).unwrap();
        let large = code.png_data_uri(8).unwrap();
        assert!(large.len() > small.len());
    }
}
