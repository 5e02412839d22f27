// In-memory asset fetcher and raster helpers for export tests.

use async_trait::async_trait;
use calliope_error::{CalliopeResult, HttpError};
use calliope_interface::AssetFetcher;
use std::collections::HashMap;
use std::io::Cursor;

/// Serves assets from a map; unknown locators behave like a 404.
#[derive(Debug, Default)]
pub struct MapFetcher {
    assets: HashMap<String, Vec<u8>>,
}

impl MapFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, url: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.assets.insert(url.into(), bytes);
        self
    }
}

#[async_trait]
impl AssetFetcher for MapFetcher {
    async fn fetch(&self, url: &str) -> CalliopeResult<Vec<u8>> {
        self.assets
            .get(url)
            .cloned()
            .ok_or_else(|| HttpError::with_status(404, format!("no such asset: {url}")).into())
    }
}

/// Encode a PNG of the given size at runtime.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::new(width, height));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .expect("encoding a fresh PNG succeeds");
    bytes
}

/// Page count of an exported document.
pub fn page_count(bytes: &[u8]) -> usize {
    let doc = lopdf::Document::load_mem(bytes).expect("exported bytes parse as PDF");
    doc.get_pages().len()
}
