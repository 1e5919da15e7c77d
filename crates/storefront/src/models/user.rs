//! The logged-in user identity.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use servex_core::{Email, UserId};

/// The locally-fabricated stand-in for an authenticated user.
///
/// There is no account backend: the session store mints one of these from
/// whatever passed validation at the login or register form. At most one
/// lives in the session store at a time, and it persists across restarts
/// via the user storage slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Opaque id derived from the moment of creation.
    pub id: UserId,
    /// Contact email, taken verbatim from the form.
    pub email: Email,
    /// Display label: the registered name, or the email's local part.
    pub display_name: String,
}

impl User {
    /// Fabricate a user with a creation-time-derived id.
    #[must_use]
    pub fn fabricate(email: Email, display_name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(format!("user_{}", Utc::now().timestamp_millis())),
            email,
            display_name: display_name.into(),
        }
    }
}
