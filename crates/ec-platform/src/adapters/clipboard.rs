//! System clipboard adapter backed by `arboard`.

use std::io::Cursor;

use anyhow::{anyhow, Context, Result};
use arboard::Clipboard;
use async_trait::async_trait;
use ec_core::ports::SystemClipboardPort;
use ec_core::{LocalClipboardContent, PngImage};
use image::{DynamicImage, ImageFormat, RgbaImage};
use tokio::task::spawn_blocking;
use tracing::debug;

/// Opens the platform clipboard per call on a blocking thread.
///
/// On X11 arboard hands the selection to the clipboard manager when the
/// handle is dropped, so the text outlives the call.
#[derive(Debug, Default)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SystemClipboardPort for ArboardClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let text = text.to_string();
        let chars = text.chars().count();

        spawn_blocking(move || -> Result<()> {
            let mut clipboard = Clipboard::new().context("failed to open system clipboard")?;
            clipboard
                .set_text(text)
                .context("failed to write text to system clipboard")
        })
        .await
        .context("clipboard task panicked")??;

        debug!(chars, "system clipboard updated");
        Ok(())
    }

    async fn read(&self) -> Result<LocalClipboardContent> {
        let content = spawn_blocking(read_blocking)
            .await
            .context("clipboard task panicked")??;

        match &content {
            LocalClipboardContent::Empty => debug!("system clipboard is empty"),
            LocalClipboardContent::Text(text) => {
                debug!(chars = text.chars().count(), "read text from system clipboard")
            }
            LocalClipboardContent::Image(image) => {
                debug!(dimensions = %image.dimensions(), bytes = image.size(), "read image from system clipboard")
            }
        }
        Ok(content)
    }
}

fn read_blocking() -> Result<LocalClipboardContent> {
    let mut clipboard = Clipboard::new().context("failed to open system clipboard")?;

    match clipboard.get_image() {
        Ok(image) => {
            let width = u32::try_from(image.width).context("image too wide")?;
            let height = u32::try_from(image.height).context("image too tall")?;
            let png = encode_png(width, height, image.bytes.into_owned())?;
            return Ok(LocalClipboardContent::Image(PngImage { png, width, height }));
        }
        Err(arboard::Error::ContentNotAvailable) => {}
        Err(err) => debug!(error = %err, "no image on system clipboard"),
    }

    match clipboard.get_text() {
        Ok(text) if !text.is_empty() => Ok(LocalClipboardContent::Text(text)),
        Ok(_) | Err(arboard::Error::ContentNotAvailable) => Ok(LocalClipboardContent::Empty),
        Err(err) => Err(err).context("failed to read text from system clipboard"),
    }
}

/// Encodes raw RGBA pixels as PNG.
fn encode_png(width: u32, height: u32, rgba: Vec<u8>) -> Result<Vec<u8>> {
    let image = RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| anyhow!("clipboard image buffer does not match {width}x{height}"))?;

    let mut png = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .context("failed to encode clipboard image as PNG")?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_png_keeps_dimensions() {
        let rgba = vec![255u8; 4 * 3 * 2];

        let png = encode_png(3, 2, rgba).unwrap();

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 2);
    }

    #[test]
    fn encode_png_rejects_short_buffer() {
        let err = encode_png(4, 4, vec![0u8; 8]).unwrap_err();
        assert!(err.to_string().contains("4x4"));
    }
}
