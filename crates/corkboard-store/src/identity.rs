//! User accounts: signup, credential resolution, and profile lookups.
//!
//! [`IdentityStore`] holds user rows and nothing else. It does no locking of
//! its own: every mutation goes through `&mut self`, and concurrent callers
//! are serialized by the board that owns the registry. Removing a user here
//! removes only the row -- dependent posts, comments, and likes are the
//! cascade coordinator's responsibility.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use corkboard_types::{Credentials, IdSequence, NewUser, User, UserId, UserProfile};

use crate::error::StoreError;

/// Registry of user accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityStore {
    /// User rows keyed by id; ascending key order is signup order.
    users: BTreeMap<UserId, User>,
    /// Identifier allocator, independent of the current row count.
    ids: IdSequence,
}

impl IdentityStore {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            ids: IdSequence::new(),
        }
    }

    /// Register a new user.
    ///
    /// Fails with [`StoreError::DuplicateEmail`] if any surviving user holds
    /// the same email, compared exactly. On success the stored record is
    /// returned in full -- the single place the credential is echoed back.
    pub fn signup(&mut self, new: NewUser) -> Result<&User, StoreError> {
        if self.users.values().any(|u| u.email == new.email) {
            return Err(StoreError::DuplicateEmail { email: new.email });
        }

        let id = UserId::new(self.ids.next_raw());
        let user = User {
            id,
            email: new.email,
            password: new.password,
            nickname: new.nickname,
            profile_image: new.profile_image,
            created_at: Utc::now(),
        };
        Ok(self.users.entry(id).or_insert(user))
    }

    /// Resolve credentials to the matching user.
    ///
    /// Linear scan for an exact (email, password) pair. The failure carries
    /// no hint of which half mismatched.
    pub fn authenticate(&self, credentials: &Credentials) -> Result<&User, StoreError> {
        self.users
            .values()
            .find(|u| u.email == credentials.email && u.password == credentials.password)
            .ok_or(StoreError::InvalidCredentials)
    }

    /// Look up a user row by id.
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Public profile for a user: every field except the credential.
    pub fn profile(&self, id: UserId) -> Result<UserProfile, StoreError> {
        self.users
            .get(&id)
            .map(UserProfile::from)
            .ok_or(StoreError::UserNotFound(id))
    }

    /// Current nickname for a user id, if the user still exists.
    pub fn nickname(&self, id: UserId) -> Option<&str> {
        self.users.get(&id).map(|u| u.nickname.as_str())
    }

    /// Best-effort profile image lookup by nickname.
    ///
    /// Returns the image reference of the first user whose nickname matches,
    /// if that user has one. Display aid only: nicknames are not unique, so
    /// this must never be used to resolve identity.
    pub fn profile_image_by_nickname(&self, nickname: &str) -> Option<&str> {
        self.users
            .values()
            .find(|u| u.nickname == nickname)
            .and_then(|u| u.profile_image.as_deref())
    }

    /// Remove a user row.
    ///
    /// Returns `false` if the user was already gone. Dependent rows in other
    /// registries are untouched.
    pub fn remove(&mut self, id: UserId) -> bool {
        self.users.remove(&id).is_some()
    }

    /// Number of surviving users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the registry holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
