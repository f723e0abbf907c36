//! Board facade, cascade coordination, and read-model queries for the
//! Corkboard content store.
//!
//! This crate assembles the leaf registries from `corkboard-store` into the
//! concurrent store the (external) HTTP adapter talks to. The pieces:
//!
//! - [`board`] -- [`Board`]: every registry behind one read-write guard;
//!   the full public operation set.
//! - [`cascade`] -- cross-registry deletion for users and posts, run to
//!   completion under the write guard.
//! - [`query`] -- read-model assembly: paginated listings, personalized
//!   post detail, comment listings with live nickname resolution.
//! - [`config`] -- [`BoardConfig`]: small, optional, YAML-loadable.
//!
//! # Concurrency model
//!
//! Reads proceed concurrently with each other; every mutation is exclusive
//! over the whole state for its full duration. There is no I/O below the
//! facade, so waiting means lock contention and nothing else. Cancellation
//! and timeouts are the adapter's business.

pub mod board;
pub mod cascade;
pub mod config;
pub mod query;

// Re-export primary types at crate root.
pub use board::{Board, BoardState};
pub use cascade::CascadeOutcome;
pub use config::{BoardConfig, ConfigError};
pub use corkboard_store::{LikeToggle, StoreError};
