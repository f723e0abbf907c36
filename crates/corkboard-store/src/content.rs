//! Posts: creation-ordered listing, detail reads, partial updates, and the
//! denormalized like counter.
//!
//! [`ContentStore`] holds post rows keyed by [`PostId`]. Identifiers are
//! allocated in strictly increasing order, so ascending key order *is*
//! creation order and pagination never needs a separate index. Ownership is
//! checked against the stored writer nickname -- not a stable user id --
//! which is a deliberate property of the design, not an accident of this
//! registry.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use corkboard_types::{IdSequence, NewPost, Post, PostId, PostPatch};

use crate::error::StoreError;

/// Registry of posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStore {
    /// Post rows keyed by id; ascending key order is creation order.
    posts: BTreeMap<PostId, Post>,
    /// Identifier allocator, independent of the current row count.
    ids: IdSequence,
}

impl ContentStore {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            posts: BTreeMap::new(),
            ids: IdSequence::new(),
        }
    }

    /// Create a post with zeroed counters, owned by `writer`.
    pub fn create(&mut self, new: NewPost, writer: &str) -> &Post {
        let id = PostId::new(self.ids.next_raw());
        let post = Post {
            id,
            title: new.title,
            content: new.content,
            image_url: new.image_url,
            writer: writer.to_owned(),
            view_count: 0,
            like_count: 0,
            created_at: Utc::now(),
        };
        self.posts.entry(id).or_insert(post)
    }

    /// One page of posts in creation order.
    ///
    /// `page` and `size` are 1-based and assumed already validated (the
    /// query layer rejects values below 1 before calling). The slice is
    /// `[(page-1)*size, (page-1)*size + size)`; a page past the end -- or an
    /// offset too large to represent -- yields an empty sequence, never an
    /// error.
    pub fn page(&self, page: u64, size: u64) -> Vec<&Post> {
        let Some(offset) = page.saturating_sub(1).checked_mul(size) else {
            return Vec::new();
        };
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(size).unwrap_or(usize::MAX);
        self.posts.values().skip(skip).take(take).collect()
    }

    /// Look up a post row without side effects.
    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.get(&id)
    }

    /// Fetch a post for a detail read, bumping its view count.
    ///
    /// Every successful call increments `view_count` by exactly 1; repeated
    /// detail reads are deliberately not idempotent.
    pub fn read(&mut self, id: PostId) -> Result<&Post, StoreError> {
        let post = self
            .posts
            .get_mut(&id)
            .ok_or(StoreError::PostNotFound(id))?;
        post.view_count = post.view_count.saturating_add(1);
        Ok(post)
    }

    /// Verify that `requester` is the stored writer of a post.
    ///
    /// The comparison is against the denormalized nickname. Missing post and
    /// wrong writer stay distinguishable so the adapter can answer 404
    /// versus 403.
    pub fn check_writer(&self, id: PostId, requester: &str) -> Result<(), StoreError> {
        let post = self.posts.get(&id).ok_or(StoreError::PostNotFound(id))?;
        if post.writer == requester {
            Ok(())
        } else {
            Err(StoreError::NotPostWriter { post: id })
        }
    }

    /// Apply a partial update on behalf of `requester`.
    ///
    /// Only the original writer may update. Field policy: `title` and
    /// `content` apply only when present and non-empty (empty string means
    /// "no change"); `image_url` applies whenever present, empty string
    /// included. The asymmetry is part of the contract.
    pub fn update(
        &mut self,
        id: PostId,
        patch: PostPatch,
        requester: &str,
    ) -> Result<&Post, StoreError> {
        let post = self
            .posts
            .get_mut(&id)
            .ok_or(StoreError::PostNotFound(id))?;
        if post.writer != requester {
            return Err(StoreError::NotPostWriter { post: id });
        }

        if let Some(title) = patch.title.filter(|t| !t.is_empty()) {
            post.title = title;
        }
        if let Some(content) = patch.content.filter(|c| !c.is_empty()) {
            post.content = content;
        }
        if let Some(image_url) = patch.image_url {
            post.image_url = Some(image_url);
        }
        Ok(post)
    }

    /// Remove a post row, returning it.
    ///
    /// Bare row removal for the cascade coordinator. The ownership check and
    /// the dependent-row cleanup happen above this call.
    pub fn remove(&mut self, id: PostId) -> Option<Post> {
        self.posts.remove(&id)
    }

    /// Ids of every post whose stored writer matches, in creation order.
    pub fn ids_by_writer(&self, nickname: &str) -> Vec<PostId> {
        self.posts
            .values()
            .filter(|p| p.writer == nickname)
            .map(|p| p.id)
            .collect()
    }

    /// Record one new like on a post.
    pub fn record_like(&mut self, id: PostId) {
        if let Some(post) = self.posts.get_mut(&id) {
            post.like_count = post.like_count.saturating_add(1);
        }
    }

    /// Record the removal of one like on a post.
    ///
    /// The counter floors at 0 on every path; it is never observably
    /// negative.
    pub fn record_unlike(&mut self, id: PostId) {
        if let Some(post) = self.posts.get_mut(&id) {
            post.like_count = post.like_count.saturating_sub(1);
        }
    }

    /// Denormalized like count for a post; 0 if the post does not exist.
    pub fn like_count(&self, id: PostId) -> u64 {
        self.posts.get(&id).map_or(0, |p| p.like_count)
    }

    /// Number of surviving posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the registry holds no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
