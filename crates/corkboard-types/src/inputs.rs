//! Write-side input payloads.
//!
//! Fixed-shape equivalents of the request bodies the (external) HTTP adapter
//! accepts for mutating operations. The store performs no format validation
//! on these -- length limits and field formats are the adapter's concern.

use serde::{Deserialize, Serialize};

/// Payload for registering a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Login email; signup is rejected if another user already holds it.
    pub email: String,
    /// Opaque credential stored as provided.
    pub password: String,
    /// Display name.
    pub nickname: String,
    /// Optional opaque profile-image reference.
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Login credentials, matched exactly against a stored [`User`].
///
/// [`User`]: crate::records::User
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Login email.
    pub email: String,
    /// Opaque credential.
    pub password: String,
}

/// Payload for creating a new post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Optional opaque image reference.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial update for a post. Absent fields leave the stored value
/// unchanged.
///
/// The text fields and the image reference follow deliberately different
/// rules: `title` and `content` are applied only when present AND non-empty
/// (an empty string means "no change"), while `image_url` is applied
/// whenever present, empty string included -- that is how a caller clears
/// the image. The asymmetry is part of the update contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    /// Replacement title, applied only when non-empty.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement body, applied only when non-empty.
    #[serde(default)]
    pub content: Option<String>,
    /// Replacement image reference, applied whenever present.
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_fields_default_to_absent() {
        let patch: Option<PostPatch> = serde_json::from_str("{}").ok();
        assert_eq!(patch, Some(PostPatch::default()));
    }

    #[test]
    fn patch_keeps_provided_empty_strings() {
        let patch: Option<PostPatch> =
            serde_json::from_str(r#"{"title": "", "image_url": ""}"#).ok();
        let patch = patch.unwrap_or_default();
        // An empty title is carried through; whether it is applied is the
        // store's decision, not the payload's.
        assert_eq!(patch.title.as_deref(), Some(""));
        assert_eq!(patch.image_url.as_deref(), Some(""));
        assert_eq!(patch.content, None);
    }
}
