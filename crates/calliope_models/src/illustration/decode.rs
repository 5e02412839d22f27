//! Normalizing the illustration service's response shapes.

use super::dto::IllustrationResponse;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use calliope_core::{ImageSource, InlineImage};
use calliope_error::{IllustrationError, IllustrationErrorKind};

/// Decode a service reply into a single image source.
///
/// The two success shapes are tried in order: a `foo` reference wins over a
/// `taa` payload. A `taa` payload is base64-decoded and measured immediately
/// so layout never has to decode it again; a `foo` reference is kept as a
/// locator and dereferenced lazily at render time.
///
/// # Errors
///
/// Returns an error when neither field is present or the inline payload
/// cannot be decoded. Callers degrade this to "no image".
///
/// # Examples
///
/// ```
/// use calliope_models::illustration::{image_source_from_response, IllustrationResponse};
/// use calliope_core::ImageSource;
///
/// let reply = IllustrationResponse {
///     foo: Some("https://example.com/scene.png".to_string()),
///     taa: None,
/// };
/// let source = image_source_from_response(reply).unwrap();
/// assert!(matches!(source, ImageSource::Reference(_)));
/// ```
pub fn image_source_from_response(
    response: IllustrationResponse,
) -> Result<ImageSource, IllustrationError> {
    if let Some(url) = response.foo {
        return Ok(ImageSource::Reference(url));
    }

    let Some(payload) = response.taa else {
        return Err(IllustrationError::new(IllustrationErrorKind::MissingPayload));
    };

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| IllustrationError::new(IllustrationErrorKind::Base64(e.to_string())))?;

    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| IllustrationError::new(IllustrationErrorKind::Decode(e.to_string())))?;

    Ok(ImageSource::Inline(InlineImage::new(
        bytes,
        decoded.width(),
        decoded.height(),
    )))
}
