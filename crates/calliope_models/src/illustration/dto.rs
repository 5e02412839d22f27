//! Wire types for the illustration service.

use serde::{Deserialize, Serialize};

/// Reply body from the illustration service.
///
/// Exactly one of the two fields is expected on success: `foo` carries a
/// fetchable image locator, `taa` a base64-encoded image payload. When both
/// are present the reference wins; when both are absent the turn simply goes
/// unillustrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IllustrationResponse {
    /// Fetchable image reference
    #[serde(default)]
    pub foo: Option<String>,
    /// Base64-encoded image bytes
    #[serde(default)]
    pub taa: Option<String>,
}
