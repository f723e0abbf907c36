//! In-memory row registries for the Corkboard content store.
//!
//! This crate holds the three leaf registries and the shared error
//! taxonomy. Each registry is a plain struct over ordered collections with
//! `&mut self` mutation methods and no locking of its own -- the
//! single-writer discipline lives one level up, in the board that owns all
//! three behind one guard. What the registries do guarantee, regardless of
//! caller, is row-level integrity: identifiers are allocated by monotonic
//! sequences and never reused, like rows are unique per (user, post) pair by
//! construction, and the denormalized like counter never goes observably
//! negative.
//!
//! # Modules
//!
//! - [`error`] -- [`StoreError`], one variant per recoverable outcome, with
//!   the 403-versus-404 classification helpers.
//! - [`identity`] -- [`IdentityStore`]: user rows, signup uniqueness,
//!   credential resolution.
//! - [`content`] -- [`ContentStore`]: post rows, creation-ordered
//!   pagination, view and like counters.
//! - [`engagement`] -- [`EngagementStore`]: comment rows, like relations,
//!   the toggle, and the cascade sweeps.

pub mod content;
pub mod engagement;
pub mod error;
pub mod identity;

// Re-export primary types at crate root.
pub use content::ContentStore;
pub use engagement::{EngagementStore, LikeToggle};
pub use error::StoreError;
pub use identity::IdentityStore;
