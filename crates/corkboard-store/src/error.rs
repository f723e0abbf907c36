//! Error types for store operations.
//!
//! Every variant is an expected, recoverable-by-caller outcome returned as a
//! value. The store has no unrecoverable internal error class -- there is no
//! I/O and no parsing, and invariant violations are prevented by the write
//! discipline rather than surfaced at runtime.

use corkboard_types::{CommentId, PostId, UserId};

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Signup attempted with an email another user already holds.
    #[error("email already registered: {email}")]
    DuplicateEmail {
        /// The rejected email.
        email: String,
    },

    /// Login failed. Deliberately silent about whether the email was unknown
    /// or the password wrong, to prevent account enumeration.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// No user exists with this identity.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// No post exists with this identity.
    #[error("post not found: {0}")]
    PostNotFound(PostId),

    /// No comment exists with this identity.
    #[error("comment not found: {0}")]
    CommentNotFound(CommentId),

    /// The requester's nickname does not match the post's stored writer.
    #[error("requester is not the writer of post {post}")]
    NotPostWriter {
        /// The post the requester tried to mutate.
        post: PostId,
    },

    /// The requester is not the author of the comment.
    #[error("requester is not the author of comment {comment}")]
    NotCommentAuthor {
        /// The comment the requester tried to delete.
        comment: CommentId,
    },

    /// Pagination parameters outside the valid range; both must be at
    /// least 1.
    #[error("invalid pagination: page {page}, size {size}")]
    InvalidPagination {
        /// The requested page number.
        page: u64,
        /// The requested page size.
        size: u64,
    },
}

impl StoreError {
    /// Whether this error means a referenced entity does not exist -- the
    /// adapter's 404 class.
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::PostNotFound(_) | Self::CommentNotFound(_)
        )
    }

    /// Whether this error means the requester is not the owning identity --
    /// the adapter's 403 class, kept distinct from [`is_not_found`].
    ///
    /// [`is_not_found`]: StoreError::is_not_found
    pub const fn is_forbidden(&self) -> bool {
        matches!(
            self,
            Self::NotPostWriter { .. } | Self::NotCommentAuthor { .. }
        )
    }
}
