//! Type-safe identifier wrappers around store-assigned integers.
//!
//! Every entity has a strongly-typed ID to prevent accidental mixing of
//! identifiers at compile time. IDs are positive integers handed out by the
//! owning store's [`IdSequence`]; callers never choose them.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around `u64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl $name {
            /// Wrap a raw identifier value.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Return the inner integer value.
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a registered user.
    UserId
}

define_id! {
    /// Unique identifier for a post.
    PostId
}

define_id! {
    /// Unique identifier for a comment on a post.
    CommentId
}

/// Monotonically increasing identifier allocator.
///
/// Each entity collection owns one sequence. The first identifier handed out
/// is 1, and removing a row never frees its identifier: the sequence is
/// independent of the current row count, so a reference to a removed row can
/// never silently resolve to a newer one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    /// The next raw identifier to hand out.
    next: u64,
}

impl IdSequence {
    /// Create a sequence whose first identifier is 1.
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next raw identifier and advance the sequence.
    ///
    /// Saturates at `u64::MAX`; a real workload never exhausts the space.
    pub const fn next_raw(&mut self) -> u64 {
        let raw = self.next;
        self.next = self.next.saturating_add(1);
        raw
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
