/// What the clipboard of this machine currently holds.
///
/// Images are normalised to PNG by the adapter that reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalClipboardContent {
    Empty,
    Text(String),
    Image(PngImage),
}

/// A PNG-encoded image taken from the system clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl PngImage {
    /// `WIDTHxHEIGHT`, the form the service stores as `dimensions`.
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    pub fn size(&self) -> u64 {
        self.png.len() as u64
    }
}
