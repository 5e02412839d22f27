//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Sender role for a transcript message.
///
/// # Examples
///
/// ```
/// use calliope_core::Role;
///
/// let user_role = Role::User;
/// let assistant_role = Role::Assistant;
/// assert_ne!(user_role, assistant_role);
///
/// // Display implementation
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages seed narrative voice and output format
    System,
    /// User messages carry the seed prompt and chosen options
    User,
    /// Assistant messages are the generation service's replies
    Assistant,
}
