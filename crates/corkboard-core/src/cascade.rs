//! Cross-registry deletion: removing a user or post takes every dependent
//! row with it.
//!
//! The coordinator operates on `&mut BoardState`, which the board only hands
//! out under its write guard -- a cascade therefore runs to completion
//! before any reader can observe the graph again, and a half-deleted state
//! (post gone, its comments still resolving) is never visible.

use tracing::debug;

use corkboard_store::StoreError;
use corkboard_types::{PostId, UserId};

use crate::board::BoardState;

/// Counts of rows removed by a cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeOutcome {
    /// Posts removed: the target post, or every post the deleted user owned.
    pub posts_removed: u64,
    /// Comments removed across all phases.
    pub comments_removed: u64,
    /// Likes removed across all phases.
    pub likes_removed: u64,
}

impl CascadeOutcome {
    /// Accumulate another outcome into this one.
    const fn absorb(&mut self, other: Self) {
        self.posts_removed = self.posts_removed.saturating_add(other.posts_removed);
        self.comments_removed = self.comments_removed.saturating_add(other.comments_removed);
        self.likes_removed = self.likes_removed.saturating_add(other.likes_removed);
    }
}

/// Remove a post and every row referencing it.
///
/// Order: comments on the post, then likes on the post (with no counter
/// adjustment -- the counter's own row is about to go), then the post row
/// itself. Cascading a post that is already gone is a no-op reporting zero
/// rows.
pub fn delete_post(state: &mut BoardState, post: PostId) -> CascadeOutcome {
    let comments_removed = state.engagement.remove_comments_for_post(post);
    let likes_removed = state.engagement.remove_likes_for_post(post);
    let posts_removed = u64::from(state.content.remove(post).is_some());
    debug!(post = %post, comments_removed, likes_removed, "post cascade complete");
    CascadeOutcome {
        posts_removed,
        comments_removed,
        likes_removed,
    }
}

/// Remove a user and everything the user owns or created.
///
/// Phases, in order:
///
/// 1. Every post whose stored writer equals the user's nickname goes through
///    [`delete_post`], taking its own comments and likes along.
/// 2. The user's comments on other surviving posts.
/// 3. The user's likes on other surviving posts, decrementing each affected
///    post's counter (floored at 0).
/// 4. The user row itself.
///
/// Phase 1 must run first: rows on the user's own posts disappear with those
/// posts, so the author-wide sweeps of phases 2 and 3 cannot process them a
/// second time.
pub fn delete_user(state: &mut BoardState, user: UserId) -> Result<CascadeOutcome, StoreError> {
    let nickname = state
        .identity
        .nickname(user)
        .map(str::to_owned)
        .ok_or(StoreError::UserNotFound(user))?;

    let mut outcome = CascadeOutcome::default();
    for post in state.content.ids_by_writer(&nickname) {
        outcome.absorb(delete_post(state, post));
    }

    outcome.comments_removed = outcome
        .comments_removed
        .saturating_add(state.engagement.remove_comments_by_author(user));
    outcome.likes_removed = outcome
        .likes_removed
        .saturating_add(state.engagement.remove_likes_by_user(&mut state.content, user));

    state.identity.remove(user);
    debug!(
        user = %user,
        posts_removed = outcome.posts_removed,
        comments_removed = outcome.comments_removed,
        likes_removed = outcome.likes_removed,
        "user cascade complete"
    );
    Ok(outcome)
}
