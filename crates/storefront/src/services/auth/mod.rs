//! Session store: the single logged-in identity.
//!
//! There is no account backend. `login` and `register` validate the form
//! input, wait out a simulated network delay, and fabricate a [`User`] from
//! the input itself - no credential is ever verified or stored. The secret
//! only gates on length and is dropped on the spot.
//!
//! The store holds at most one identity. It recovers its initial state from
//! the user storage slot synchronously at construction; a malformed slot is
//! discarded and the session starts anonymous.

mod error;

pub use error::AuthError;

use std::sync::Mutex;

use tracing::{info, instrument, warn};

use servex_core::Email;

use crate::config::SimulatedDelays;
use crate::models::User;
use crate::storage::{SharedStore, slots};

/// Minimum secret length accepted by `login`.
pub const MIN_LOGIN_PASSWORD_LENGTH: usize = 6;

/// Minimum secret length accepted by `register` (stricter than login).
pub const MIN_REGISTER_PASSWORD_LENGTH: usize = 8;

/// Process-wide session state: anonymous, or exactly one logged-in user.
pub struct SessionStore {
    storage: SharedStore,
    delays: SimulatedDelays,
    current: Mutex<Option<User>>,
}

impl SessionStore {
    /// Create the store, recovering the session from the user slot.
    ///
    /// A slot that fails to deserialize is cleared and logged; the session
    /// starts anonymous. Never fails.
    #[must_use]
    pub fn new(storage: SharedStore, delays: SimulatedDelays) -> Self {
        let current = Self::recover(&storage);
        Self {
            storage,
            delays,
            current: Mutex::new(current),
        }
    }

    fn recover(storage: &SharedStore) -> Option<User> {
        let blob = match storage.get(slots::USER) {
            Ok(blob) => blob?,
            Err(e) => {
                warn!(error = %e, "Failed to read user slot, starting anonymous");
                return None;
            }
        };

        match serde_json::from_str::<User>(&blob) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "Corrupt user slot, discarding");
                if let Err(e) = storage.remove(slots::USER) {
                    warn!(error = %e, "Failed to clear corrupt user slot");
                }
                None
            }
        }
    }

    /// Log in with an email and password.
    ///
    /// Accepts any credentials that pass the shape checks: the email must
    /// parse and the password must be at least
    /// [`MIN_LOGIN_PASSWORD_LENGTH`] characters. The fabricated user takes
    /// its display name from the email's local part.
    ///
    /// Validation runs before the simulated delay, so a rejected attempt
    /// resolves immediately and leaves the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] or [`AuthError::PasswordTooShort`]
    /// on validation failure, [`AuthError::Storage`] if the identity cannot
    /// be persisted.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        if password.len() < MIN_LOGIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort {
                min: MIN_LOGIN_PASSWORD_LENGTH,
            });
        }

        tokio::time::sleep(self.delays.login).await;

        let display_name = email.local_part().to_owned();
        let user = User::fabricate(email, display_name);
        self.persist_and_set(user)
    }

    /// Register a new account with a name, email, and password.
    ///
    /// Same shape checks as [`login`](Self::login) but with the stricter
    /// [`MIN_REGISTER_PASSWORD_LENGTH`]; the fabricated user takes `name`
    /// as its display name.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] or [`AuthError::PasswordTooShort`]
    /// on validation failure, [`AuthError::Storage`] if the identity cannot
    /// be persisted.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        if password.len() < MIN_REGISTER_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort {
                min: MIN_REGISTER_PASSWORD_LENGTH,
            });
        }

        tokio::time::sleep(self.delays.register).await;

        let user = User::fabricate(email, name);
        self.persist_and_set(user)
    }

    /// Log out, clearing the persisted identity and in-memory state.
    ///
    /// Always succeeds: a storage failure is logged but the in-memory
    /// session still becomes anonymous.
    #[instrument(skip(self))]
    pub fn logout(&self) {
        if let Err(e) = self.storage.remove(slots::USER) {
            warn!(error = %e, "Failed to clear user slot on logout");
        }
        *self.lock_current() = None;
        info!("Logged out");
    }

    /// The logged-in user, if any. Synchronous in-memory read.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.lock_current().clone()
    }

    /// Whether a user is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock_current().is_some()
    }

    /// Persist the fabricated user, then commit it to memory.
    ///
    /// Persist-first ordering: if the slot write fails, the session stays
    /// in its previous state and the error surfaces to the caller.
    fn persist_and_set(&self, user: User) -> Result<User, AuthError> {
        let blob = serde_json::to_string(&user).map_err(crate::storage::StorageError::from)?;
        self.storage.set(slots::USER, &blob)?;
        *self.lock_current() = Some(user.clone());
        info!(user_id = %user.id, "Session authenticated");
        Ok(user)
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, Option<User>> {
        self.current
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
