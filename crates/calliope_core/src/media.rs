//! Image source types for turn illustrations.

use serde::{Deserialize, Serialize};

/// An image decoded eagerly from an inline service payload.
///
/// Holds the encoded bytes plus the native pixel dimensions measured when the
/// payload was decoded, so layout can preserve aspect ratio without decoding
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct InlineImage {
    /// Encoded image bytes (as delivered by the service, base64-decoded)
    bytes: Vec<u8>,
    /// Native pixel width
    width: u32,
    /// Native pixel height
    height: u32,
}

impl InlineImage {
    /// Create an inline image from encoded bytes and measured dimensions.
    pub fn new(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            bytes,
            width,
            height,
        }
    }
}

/// Where a turn's illustration is sourced from.
///
/// Decoded once at the service boundary rather than probed repeatedly
/// downstream. A `Reference` is dereferenced lazily, at render time.
///
/// # Examples
///
/// ```
/// use calliope_core::{ImageSource, InlineImage};
///
/// let by_reference = ImageSource::Reference("https://example.com/scene.png".to_string());
/// let inline = ImageSource::Inline(InlineImage::new(vec![0x89, 0x50, 0x4E, 0x47], 2, 2));
///
/// assert!(by_reference.dimensions().is_none());
/// assert_eq!(inline.dimensions(), Some((2, 2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSource {
    /// Fetchable locator, resolved when the document is rendered
    Reference(String),
    /// Inline payload decoded at the service boundary
    Inline(InlineImage),
}

impl ImageSource {
    /// Native pixel dimensions, if known without fetching.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            Self::Reference(_) => None,
            Self::Inline(image) => Some((*image.width(), *image.height())),
        }
    }
}
