//! Read-model views assembled by the query layer.
//!
//! Views join data from several stores at read time: a [`PostSummary`]
//! carries a live comment count and the writer's current profile image, a
//! [`PostDetail`] carries the viewer's like state, and a [`CommentView`]
//! resolves its author's current nickname. None of these are stored; they
//! are built per read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CommentId, PostId, UserId};
use crate::records::{Post, User};

/// Public view of a user: every field except the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Store-assigned identity.
    pub id: UserId,
    /// Login email.
    pub email: String,
    /// Display name.
    pub nickname: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            nickname: user.nickname.clone(),
            created_at: user.created_at,
        }
    }
}

/// One row of a paginated post listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Store-assigned identity.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Optional opaque image reference.
    pub image_url: Option<String>,
    /// The writer's denormalized nickname.
    pub writer: String,
    /// Number of detail reads so far.
    pub view_count: u64,
    /// Denormalized like count.
    pub like_count: u64,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// Live count of comments on this post, computed at read time.
    pub comment_count: u64,
    /// Profile image of the first user currently carrying the writer's
    /// nickname, if any.
    pub writer_profile_image: Option<String>,
}

impl PostSummary {
    /// Build a summary row from a post plus the joined read-time fields.
    pub fn from_post(post: &Post, comment_count: u64, writer_profile_image: Option<String>) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            image_url: post.image_url.clone(),
            writer: post.writer.clone(),
            view_count: post.view_count,
            like_count: post.like_count,
            created_at: post.created_at,
            comment_count,
            writer_profile_image,
        }
    }
}

/// Detail view of a single post, personalized for one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    /// Store-assigned identity.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Optional opaque image reference.
    pub image_url: Option<String>,
    /// The writer's denormalized nickname.
    pub writer: String,
    /// Number of detail reads, including the read that produced this view.
    pub view_count: u64,
    /// Denormalized like count.
    pub like_count: u64,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// Whether the viewing user currently likes this post.
    pub is_liked: bool,
    /// Profile image of the first user currently carrying the writer's
    /// nickname, if any.
    pub writer_profile_image: Option<String>,
}

impl PostDetail {
    /// Build a detail view from a post plus the joined read-time fields.
    pub fn from_post(post: &Post, is_liked: bool, writer_profile_image: Option<String>) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            image_url: post.image_url.clone(),
            writer: post.writer.clone(),
            view_count: post.view_count,
            like_count: post.like_count,
            created_at: post.created_at,
            is_liked,
            writer_profile_image,
        }
    }
}

/// One comment as displayed in a post's comment listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    /// Store-assigned identity of the comment.
    pub id: CommentId,
    /// The author's current nickname, or the configured deleted-author label
    /// when no matching user exists anymore.
    pub nickname: String,
    /// Comment text.
    pub content: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}
