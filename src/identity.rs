//! Identity collaborator snapshot
//!
//! The identity provider lives outside this core. The shell receives a
//! read-only snapshot of the signed-in user and passes it through to render
//! snapshots unchanged; nothing in this crate mutates it.

use serde::{Deserialize, Serialize};

/// Read-only view of the signed-in user, consumed for rendering only
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserIdentity {
    /// Display name shown in the sidebar footer
    pub display_name: Option<String>,
    /// Primary email address, if the provider exposes one
    pub email: Option<String>,
    /// Avatar image URL, if the provider exposes one
    pub avatar_url: Option<String>,
    /// Whether a user is currently signed in
    pub signed_in: bool,
}

impl UserIdentity {
    /// Snapshot representing the signed-out state
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Snapshot for a signed-in user with the given display name
    ///
    /// # Examples
    ///
    /// ```
    /// use chatai::identity::UserIdentity;
    ///
    /// let identity = UserIdentity::signed_in("ada");
    /// assert!(identity.signed_in);
    /// assert_eq!(identity.display_name.as_deref(), Some("ada"));
    /// ```
    pub fn signed_in(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            signed_in: true,
            ..Self::default()
        }
    }
}
