//! The board: every registry behind one concurrency guard.
//!
//! [`Board`] is the single entry point the (external) HTTP adapter calls.
//! It owns the three registries bundled in a [`BoardState`] behind one
//! [`RwLock`]: reads share the lock, every mutation holds it exclusively for
//! the operation's full duration. That coarse single-writer discipline is
//! what makes the multi-collection operations atomic -- a like toggle's
//! check-then-act spans the like rows and the post counter in one critical
//! section, and a cascade finishes before any reader can observe the graph.
//!
//! The workload is not write-heavy enough to justify finer sharding; lock
//! contention is the only form of waiting in this crate, and there is no
//! I/O anywhere below this module.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use corkboard_store::{ContentStore, EngagementStore, IdentityStore, LikeToggle, StoreError};
use corkboard_types::{
    Comment, CommentId, CommentView, Credentials, NewPost, NewUser, Post, PostDetail, PostId,
    PostPatch, PostSummary, User, UserId, UserProfile,
};

use crate::cascade::{self, CascadeOutcome};
use crate::config::BoardConfig;
use crate::query;

/// The three registries the board guards as one unit.
///
/// Bundling them behind a single lock keeps cross-registry operations
/// atomic with respect to every other caller: a reader sees an operation's
/// full effect or none of it, never an intermediate state.
#[derive(Debug, Default)]
pub struct BoardState {
    /// User accounts.
    pub identity: IdentityStore,
    /// Posts.
    pub content: ContentStore,
    /// Comments and likes.
    pub engagement: EngagementStore,
}

/// Handle to the shared in-memory store.
///
/// Cloning is cheap (a reference-count bump) and every clone addresses the
/// same state; one handle is created at startup and a clone is given to each
/// concurrent caller.
#[derive(Debug, Clone)]
pub struct Board {
    /// The guarded registries.
    state: Arc<RwLock<BoardState>>,
    /// Immutable configuration shared by all clones.
    config: Arc<BoardConfig>,
}

impl Board {
    /// Create an empty board with default configuration.
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    /// Create an empty board with the given configuration.
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(BoardState::default())),
            config: Arc::new(config),
        }
    }

    /// The configuration this board was built with.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Acquire the shared read guard.
    ///
    /// A poisoned lock is recovered rather than propagated: every operation
    /// leaves the state consistent before its guard drops, so a poison
    /// marker carries no integrity information here.
    fn read(&self) -> RwLockReadGuard<'_, BoardState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquire the exclusive write guard. Poisoning is recovered as in
    /// [`read`](Board::read).
    fn write(&self) -> RwLockWriteGuard<'_, BoardState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -----------------------------------------------------------------------
    // Identity
    // -----------------------------------------------------------------------

    /// Register a new user.
    ///
    /// Returns the stored record in full; this creation response is the only
    /// place the credential is echoed back.
    pub fn signup(&self, new: NewUser) -> Result<User, StoreError> {
        let mut state = self.write();
        let user = state.identity.signup(new)?;
        debug!(user = %user.id, "user registered");
        Ok(user.clone())
    }

    /// Resolve credentials to the matching user.
    pub fn authenticate(&self, credentials: &Credentials) -> Result<User, StoreError> {
        self.read()
            .identity
            .authenticate(credentials)
            .map(User::clone)
    }

    /// Public profile for a user.
    pub fn user_profile(&self, id: UserId) -> Result<UserProfile, StoreError> {
        self.read().identity.profile(id)
    }

    /// Best-effort profile image lookup by nickname.
    pub fn profile_image_by_nickname(&self, nickname: &str) -> Option<String> {
        self.read()
            .identity
            .profile_image_by_nickname(nickname)
            .map(str::to_owned)
    }

    /// Delete a user account and everything it owns or created.
    ///
    /// The whole cascade runs under the write guard as one unit; see
    /// [`cascade::delete_user`] for the phase order.
    pub fn delete_user(&self, id: UserId) -> Result<CascadeOutcome, StoreError> {
        let mut state = self.write();
        let outcome = cascade::delete_user(&mut state, id)?;
        info!(
            user = %id,
            posts_removed = outcome.posts_removed,
            comments_removed = outcome.comments_removed,
            likes_removed = outcome.likes_removed,
            "user deleted"
        );
        Ok(outcome)
    }

    // -----------------------------------------------------------------------
    // Content
    // -----------------------------------------------------------------------

    /// Create a post authored by `author`.
    ///
    /// The author's current nickname is denormalized onto the post at write
    /// time; that nickname -- not the author's id -- is what later ownership
    /// checks compare against.
    pub fn create_post(&self, author: UserId, new: NewPost) -> Result<Post, StoreError> {
        let mut state = self.write();
        let writer = state
            .identity
            .nickname(author)
            .map(str::to_owned)
            .ok_or(StoreError::UserNotFound(author))?;
        let post = state.content.create(new, &writer);
        debug!(post = %post.id, writer = %post.writer, "post created");
        Ok(post.clone())
    }

    /// One page of post summaries.
    pub fn posts_page(&self, page: u64, size: u64) -> Result<Vec<PostSummary>, StoreError> {
        query::posts_page(&self.read(), page, size)
    }

    /// The front page, using the configured default page and size.
    pub fn recent_posts(&self) -> Result<Vec<PostSummary>, StoreError> {
        self.posts_page(self.config.default_page, self.config.default_page_size)
    }

    /// Detail view of a post for one viewer. Bumps the view counter.
    pub fn post_detail(&self, post: PostId, viewer: UserId) -> Result<PostDetail, StoreError> {
        let mut state = self.write();
        query::post_detail(&mut state, post, viewer)
    }

    /// Partially update a post on behalf of `requester`.
    ///
    /// Only the original writer may update, compared by nickname; see
    /// [`PostPatch`] for the field-application rules.
    pub fn update_post(
        &self,
        post: PostId,
        patch: PostPatch,
        requester: UserId,
    ) -> Result<Post, StoreError> {
        let mut state = self.write();
        let nickname = state
            .identity
            .nickname(requester)
            .map(str::to_owned)
            .ok_or(StoreError::UserNotFound(requester))?;
        state.content.update(post, patch, &nickname).map(Post::clone)
    }

    /// Delete a post and its dependent rows on behalf of `requester`.
    ///
    /// The ownership check and the cascade happen under one write guard, so
    /// the removal is a single step from every other caller's perspective.
    pub fn delete_post(&self, post: PostId, requester: UserId) -> Result<CascadeOutcome, StoreError> {
        let mut state = self.write();
        let nickname = state
            .identity
            .nickname(requester)
            .map(str::to_owned)
            .ok_or(StoreError::UserNotFound(requester))?;
        state.content.check_writer(post, &nickname)?;

        let outcome = cascade::delete_post(&mut state, post);
        info!(
            post = %post,
            comments_removed = outcome.comments_removed,
            likes_removed = outcome.likes_removed,
            "post deleted"
        );
        Ok(outcome)
    }

    // -----------------------------------------------------------------------
    // Engagement
    // -----------------------------------------------------------------------

    /// Comments on a post, with author nicknames resolved at read time.
    pub fn comments(&self, post: PostId) -> Result<Vec<CommentView>, StoreError> {
        query::comments(&self.read(), &self.config, post)
    }

    /// Create a comment on an existing post.
    pub fn add_comment(
        &self,
        post: PostId,
        author: UserId,
        content: String,
    ) -> Result<Comment, StoreError> {
        let mut state = self.write();
        if state.content.get(post).is_none() {
            return Err(StoreError::PostNotFound(post));
        }
        let comment = state.engagement.add_comment(post, author, content);
        debug!(comment = %comment.id, post = %post, "comment created");
        Ok(comment.clone())
    }

    /// Delete a comment on behalf of its author.
    pub fn delete_comment(&self, comment: CommentId, requester: UserId) -> Result<(), StoreError> {
        let mut state = self.write();
        state.engagement.remove_comment(comment, requester).map(drop)
    }

    /// Toggle the like relation between a user and a post.
    ///
    /// The row flip and the counter adjustment happen in one critical
    /// section; concurrent toggles for the same pair serialize here.
    pub fn toggle_like(&self, post: PostId, user: UserId) -> Result<LikeToggle, StoreError> {
        let mut state = self.write();
        let state = &mut *state;
        let outcome = state.engagement.toggle_like(&mut state.content, post, user)?;
        debug!(post = %post, user = %user, outcome = ?outcome, "like toggled");
        Ok(outcome)
    }

    /// Whether a user currently likes a post.
    pub fn is_liked(&self, user: UserId, post: PostId) -> bool {
        self.read().engagement.is_liked(user, post)
    }

    /// Denormalized like count for a post; 0 if the post does not exist.
    pub fn like_count(&self, post: PostId) -> u64 {
        self.read().content.like_count(post)
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    /// Number of surviving users.
    pub fn user_count(&self) -> usize {
        self.read().identity.len()
    }

    /// Number of surviving posts.
    pub fn post_count(&self) -> usize {
        self.read().content.len()
    }

    /// Total comment rows across all posts.
    pub fn comment_rows(&self) -> usize {
        self.read().engagement.comment_rows()
    }

    /// Total like rows across all posts.
    pub fn like_rows(&self) -> usize {
        self.read().engagement.like_rows()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
