// Tests for normalizing illustration service replies.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use calliope_core::ImageSource;
use calliope_models::illustration::{IllustrationResponse, image_source_from_response};
use std::io::Cursor;

/// Encode a small PNG at runtime rather than embedding a blob.
fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::new(width, height));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .expect("encoding a fresh PNG succeeds");
    bytes
}

#[test]
fn reference_field_wins() -> anyhow::Result<()> {
    let reply = IllustrationResponse {
        foo: Some("https://example.com/scene.png".to_string()),
        taa: Some(STANDARD.encode(png_bytes(2, 2))),
    };
    let source = image_source_from_response(reply)?;
    assert_eq!(
        source,
        ImageSource::Reference("https://example.com/scene.png".to_string())
    );
    Ok(())
}

#[test]
fn inline_payload_is_decoded_and_measured() -> anyhow::Result<()> {
    let reply = IllustrationResponse {
        foo: None,
        taa: Some(STANDARD.encode(png_bytes(2, 2))),
    };
    let source = image_source_from_response(reply)?;
    assert_eq!(source.dimensions(), Some((2, 2)));
    Ok(())
}

#[test]
fn empty_reply_is_missing_payload() {
    let reply = IllustrationResponse::default();
    assert!(image_source_from_response(reply).is_err());
}

#[test]
fn bad_base64_is_an_error() {
    let reply = IllustrationResponse {
        foo: None,
        taa: Some("not-base64!!!".to_string()),
    };
    assert!(image_source_from_response(reply).is_err());
}

#[test]
fn non_image_payload_is_an_error() {
    let reply = IllustrationResponse {
        foo: None,
        taa: Some(STANDARD.encode(b"plain text, not a raster")),
    };
    assert!(image_source_from_response(reply).is_err());
}
