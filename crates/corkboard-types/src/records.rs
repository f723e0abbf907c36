//! Fixed-shape entity rows held by the stores.
//!
//! Each record is a tagged struct with named fields; there are no
//! dynamically-shaped rows. Optional fields are [`Option`], counters are
//! unsigned, and every row carries the timestamp the store stamped at
//! creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CommentId, PostId, UserId};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered user account.
///
/// Immutable once created. The full record (credential included) is returned
/// only from the signup operation; every later read goes through
/// [`UserProfile`], which carries no credential field at all.
///
/// [`UserProfile`]: crate::views::UserProfile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identity, unique and never reused.
    pub id: UserId,
    /// Login email, unique across all surviving users. Compared
    /// case-sensitively, exactly as stored.
    pub email: String,
    /// Opaque credential, compared by exact match.
    pub password: String,
    /// Display name. Not guaranteed unique across users.
    pub nickname: String,
    /// Optional opaque profile-image reference (e.g. a filename).
    pub profile_image: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

/// An authored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned identity, unique and never reused.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Optional opaque image reference.
    pub image_url: Option<String>,
    /// The writer's nickname, denormalized at creation time. This is the
    /// value ownership checks compare against -- it is not a foreign key and
    /// is not guaranteed unique across users.
    pub writer: String,
    /// Number of detail reads. Incremented once per successful detail read,
    /// never decremented.
    pub view_count: u64,
    /// Denormalized count of [`Like`] rows referencing this post. Maintained
    /// by the like toggle and by cascade deletes; never recomputed from the
    /// like rows on the read path.
    pub like_count: u64,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Store-assigned identity, unique and never reused.
    pub id: CommentId,
    /// The post this comment belongs to.
    pub post: PostId,
    /// Stable identity of the comment's author. The display nickname is
    /// resolved at read time, unlike [`Post::writer`].
    pub author: UserId,
    /// Comment text.
    pub content: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Like
// ---------------------------------------------------------------------------

/// A like relation: one user liking one post.
///
/// A like has no identity of its own. The (user, post) pair is the row, and
/// at most one row exists per pair at any time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Like {
    /// The liking user.
    pub user: UserId,
    /// The liked post.
    pub post: PostId,
}
