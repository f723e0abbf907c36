//! Comments and likes: comment CRUD, the like toggle, and the cascade
//! sweeps that keep both aligned with the posts they reference.
//!
//! [`EngagementStore`] holds comment rows and like relations. Likes live in
//! an ordered set of (user, post) pairs, so set membership *is* the
//! uniqueness invariant. The toggle also maintains the post's denormalized
//! like counter through the [`ContentStore`] it is handed; both registries
//! are mutated inside one critical section owned by the caller, which is
//! what keeps check-then-act atomic under concurrency.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use corkboard_types::{Comment, CommentId, IdSequence, Like, PostId, UserId};

use crate::content::ContentStore;
use crate::error::StoreError;

/// Outcome of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LikeToggle {
    /// No like row existed for the pair; one was created.
    Liked,
    /// A like row existed for the pair; it was removed.
    Unliked,
}

/// Registry of comments and like relations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementStore {
    /// Comment rows keyed by id; ascending key order is creation order.
    comments: BTreeMap<CommentId, Comment>,
    /// Like rows. At most one per (user, post) pair, by construction.
    likes: BTreeSet<Like>,
    /// Comment identifier allocator, independent of the current row count.
    ids: IdSequence,
}

impl EngagementStore {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            comments: BTreeMap::new(),
            likes: BTreeSet::new(),
            ids: IdSequence::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Comments
    // -----------------------------------------------------------------------

    /// Comments on a post, in creation order.
    pub fn comments_for(&self, post: PostId) -> Vec<&Comment> {
        self.comments.values().filter(|c| c.post == post).collect()
    }

    /// Live count of comments on a post.
    ///
    /// Always computed by scanning the rows; comment counts are never
    /// denormalized, unlike [`Post::like_count`].
    ///
    /// [`Post::like_count`]: corkboard_types::Post::like_count
    pub fn comment_count(&self, post: PostId) -> u64 {
        let count = self.comments.values().filter(|c| c.post == post).count();
        u64::try_from(count).unwrap_or(u64::MAX)
    }

    /// Create a comment.
    ///
    /// The caller is responsible for having verified that the post exists;
    /// the registry stores whatever reference it is given.
    pub fn add_comment(&mut self, post: PostId, author: UserId, content: String) -> &Comment {
        let id = CommentId::new(self.ids.next_raw());
        let comment = Comment {
            id,
            post,
            author,
            content,
            created_at: Utc::now(),
        };
        self.comments.entry(id).or_insert(comment)
    }

    /// Look up a comment row.
    pub fn get_comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.get(&id)
    }

    /// Delete a comment on behalf of `requester`.
    ///
    /// Ownership is checked against the stable author id -- unlike post
    /// ownership, which compares nicknames. Missing comment and wrong author
    /// stay distinguishable.
    pub fn remove_comment(
        &mut self,
        id: CommentId,
        requester: UserId,
    ) -> Result<Comment, StoreError> {
        let author = self
            .comments
            .get(&id)
            .map(|c| c.author)
            .ok_or(StoreError::CommentNotFound(id))?;
        if author != requester {
            return Err(StoreError::NotCommentAuthor { comment: id });
        }
        self.comments
            .remove(&id)
            .ok_or(StoreError::CommentNotFound(id))
    }

    // -----------------------------------------------------------------------
    // Likes
    // -----------------------------------------------------------------------

    /// Toggle the like relation between a user and a post.
    ///
    /// Verifies the post exists, flips the (user, post) row, and adjusts the
    /// post's denormalized counter -- all in one step. The caller holds the
    /// board's write lock for the whole call, so two concurrent toggles for
    /// the same pair serialize: the pair can never gain a duplicate row, and
    /// no toggle's counter adjustment is lost.
    pub fn toggle_like(
        &mut self,
        posts: &mut ContentStore,
        post: PostId,
        user: UserId,
    ) -> Result<LikeToggle, StoreError> {
        if posts.get(post).is_none() {
            return Err(StoreError::PostNotFound(post));
        }

        let row = Like { user, post };
        if self.likes.remove(&row) {
            posts.record_unlike(post);
            Ok(LikeToggle::Unliked)
        } else {
            self.likes.insert(row);
            posts.record_like(post);
            Ok(LikeToggle::Liked)
        }
    }

    /// Whether a like row exists for the pair.
    pub fn is_liked(&self, user: UserId, post: PostId) -> bool {
        self.likes.contains(&Like { user, post })
    }

    /// Number of like rows referencing a post.
    ///
    /// Row-count accessor for invariant checks; the read path serves the
    /// denormalized counter instead.
    pub fn likes_for_post(&self, post: PostId) -> u64 {
        let count = self.likes.iter().filter(|l| l.post == post).count();
        u64::try_from(count).unwrap_or(u64::MAX)
    }

    // -----------------------------------------------------------------------
    // Cascade sweeps
    // -----------------------------------------------------------------------

    /// Remove every comment on a post. Returns the number removed.
    pub fn remove_comments_for_post(&mut self, post: PostId) -> u64 {
        let before = self.comments.len();
        self.comments.retain(|_, c| c.post != post);
        removed_count(before, self.comments.len())
    }

    /// Remove every like on a post. Returns the number removed.
    ///
    /// No counter adjustment here: this sweep only runs while the post
    /// itself is being removed.
    pub fn remove_likes_for_post(&mut self, post: PostId) -> u64 {
        let before = self.likes.len();
        self.likes.retain(|l| l.post != post);
        removed_count(before, self.likes.len())
    }

    /// Remove every comment authored by a user. Returns the number removed.
    pub fn remove_comments_by_author(&mut self, author: UserId) -> u64 {
        let before = self.comments.len();
        self.comments.retain(|_, c| c.author != author);
        removed_count(before, self.comments.len())
    }

    /// Remove every like created by a user, decrementing each affected
    /// post's denormalized counter (floored at 0). Returns the number
    /// removed.
    pub fn remove_likes_by_user(&mut self, posts: &mut ContentStore, user: UserId) -> u64 {
        let removed: Vec<Like> = self
            .likes
            .iter()
            .filter(|l| l.user == user)
            .copied()
            .collect();
        for like in &removed {
            self.likes.remove(like);
            posts.record_unlike(like.post);
        }
        u64::try_from(removed.len()).unwrap_or(u64::MAX)
    }

    /// Total number of comment rows.
    pub fn comment_rows(&self) -> usize {
        self.comments.len()
    }

    /// Total number of like rows.
    pub fn like_rows(&self) -> usize {
        self.likes.len()
    }
}

/// Rows removed by a retain sweep, as the difference of before/after sizes.
fn removed_count(before: usize, after: usize) -> u64 {
    u64::try_from(before.saturating_sub(after)).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use corkboard_types::NewPost;

    use super::*;

    fn content_with_post() -> (ContentStore, PostId) {
        let mut content = ContentStore::new();
        let id = content
            .create(
                NewPost {
                    title: String::from("post"),
                    content: String::from("body"),
                    image_url: None,
                },
                "writer",
            )
            .id;
        (content, id)
    }

    #[test]
    fn toggle_round_trip_restores_count() {
        let (mut content, post) = content_with_post();
        let mut engagement = EngagementStore::new();
        let user = UserId::new(1);

        assert_eq!(
            engagement.toggle_like(&mut content, post, user),
            Ok(LikeToggle::Liked)
        );
        assert_eq!(content.like_count(post), 1);
        assert!(engagement.is_liked(user, post));

        assert_eq!(
            engagement.toggle_like(&mut content, post, user),
            Ok(LikeToggle::Unliked)
        );
        assert_eq!(content.like_count(post), 0);
        assert!(!engagement.is_liked(user, post));
    }

    #[test]
    fn toggle_on_missing_post_is_not_found() {
        let mut content = ContentStore::new();
        let mut engagement = EngagementStore::new();
        let missing = PostId::new(7);

        let result = engagement.toggle_like(&mut content, missing, UserId::new(1));
        assert_eq!(result, Err(StoreError::PostNotFound(missing)));
        assert_eq!(engagement.like_rows(), 0);
    }

    #[test]
    fn counter_always_equals_row_count() {
        let (mut content, post) = content_with_post();
        let mut engagement = EngagementStore::new();

        // An arbitrary toggle sequence across three users.
        let sequence = [1_u64, 2, 3, 1, 2, 2, 3, 3, 3];
        for raw in sequence {
            let result = engagement.toggle_like(&mut content, post, UserId::new(raw));
            assert!(result.is_ok());
            assert_eq!(content.like_count(post), engagement.likes_for_post(post));
        }
        // Final parity: user 1 off, user 2 on, user 3 on.
        assert_eq!(content.like_count(post), 2);
    }

    #[test]
    fn comment_count_is_computed_live() {
        let (_, post) = content_with_post();
        let mut engagement = EngagementStore::new();
        let author = UserId::new(1);

        assert_eq!(engagement.comment_count(post), 0);
        engagement.add_comment(post, author, String::from("first"));
        engagement.add_comment(post, author, String::from("second"));
        assert_eq!(engagement.comment_count(post), 2);

        let first = CommentId::new(1);
        assert!(engagement.remove_comment(first, author).is_ok());
        assert_eq!(engagement.comment_count(post), 1);
    }

    #[test]
    fn remove_comment_by_non_author_is_forbidden() {
        let (_, post) = content_with_post();
        let mut engagement = EngagementStore::new();
        let id = engagement
            .add_comment(post, UserId::new(1), String::from("mine"))
            .id;

        let result = engagement.remove_comment(id, UserId::new(2));
        assert_eq!(result, Err(StoreError::NotCommentAuthor { comment: id }));
        // The comment survives the rejected attempt.
        assert!(engagement.get_comment(id).is_some());
    }

    #[test]
    fn remove_missing_comment_is_not_found() {
        let mut engagement = EngagementStore::new();
        let missing = CommentId::new(40);
        let result = engagement.remove_comment(missing, UserId::new(1));
        assert_eq!(result, Err(StoreError::CommentNotFound(missing)));
    }

    #[test]
    fn post_sweeps_remove_only_that_posts_rows() {
        let mut content = ContentStore::new();
        let keep = content
            .create(
                NewPost {
                    title: String::from("keep"),
                    content: String::from("body"),
                    image_url: None,
                },
                "writer",
            )
            .id;
        let doomed = content
            .create(
                NewPost {
                    title: String::from("doomed"),
                    content: String::from("body"),
                    image_url: None,
                },
                "writer",
            )
            .id;

        let mut engagement = EngagementStore::new();
        let user = UserId::new(1);
        engagement.add_comment(keep, user, String::from("stays"));
        engagement.add_comment(doomed, user, String::from("goes"));
        assert!(engagement.toggle_like(&mut content, keep, user).is_ok());
        assert!(engagement.toggle_like(&mut content, doomed, user).is_ok());

        assert_eq!(engagement.remove_comments_for_post(doomed), 1);
        assert_eq!(engagement.remove_likes_for_post(doomed), 1);

        assert_eq!(engagement.comment_count(keep), 1);
        assert!(engagement.is_liked(user, keep));
        // The kept post's counter was not touched by the sweep.
        assert_eq!(content.like_count(keep), 1);
    }

    #[test]
    fn user_like_sweep_decrements_affected_posts() {
        let mut content = ContentStore::new();
        let post = content
            .create(
                NewPost {
                    title: String::from("post"),
                    content: String::from("body"),
                    image_url: None,
                },
                "writer",
            )
            .id;

        let mut engagement = EngagementStore::new();
        let leaving = UserId::new(1);
        let staying = UserId::new(2);
        assert!(engagement.toggle_like(&mut content, post, leaving).is_ok());
        assert!(engagement.toggle_like(&mut content, post, staying).is_ok());

        assert_eq!(engagement.remove_likes_by_user(&mut content, leaving), 1);
        assert_eq!(content.like_count(post), 1);
        assert!(!engagement.is_liked(leaving, post));
        assert!(engagement.is_liked(staying, post));
    }
}
