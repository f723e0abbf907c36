//! Shared type definitions for the Corkboard content store.
//!
//! This crate holds the vocabulary the store crates speak: strongly-typed
//! identifiers, the fixed-shape entity records, write-side input payloads,
//! and the read-model views assembled by the query layer. It contains no
//! behavior beyond construction and conversion.
//!
//! # Modules
//!
//! - [`ids`] -- Integer ID newtypes ([`UserId`], [`PostId`], [`CommentId`])
//!   and the monotonic [`IdSequence`] allocator.
//! - [`records`] -- Entity rows: [`User`], [`Post`], [`Comment`], [`Like`].
//! - [`inputs`] -- Write payloads: [`NewUser`], [`Credentials`], [`NewPost`],
//!   [`PostPatch`].
//! - [`views`] -- Read models: [`UserProfile`], [`PostSummary`],
//!   [`PostDetail`], [`CommentView`].

pub mod ids;
pub mod inputs;
pub mod records;
pub mod views;

// Re-export primary types at crate root.
pub use ids::{CommentId, IdSequence, PostId, UserId};
pub use inputs::{Credentials, NewPost, NewUser, PostPatch};
pub use records::{Comment, Like, Post, User};
pub use views::{CommentView, PostDetail, PostSummary, UserProfile};
