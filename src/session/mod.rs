//! # Session Module
//!
//! Navigation between the login view and the dashboard, and the context that
//! views share once a user is in.
//!
//! ## Flow
//!
//! ```text
//!            credentials accepted
//!   Login  ───────────────────────▶  Dashboard
//!     ▲ │
//!     └─┘ credentials rejected (notice)
//! ```
//!
//! There is no way back to [`View::Login`] and nothing is persisted: a
//! restart always begins at the login view.
//!
//! Credential checking sits behind the [`Authenticator`] trait.
//! [`StaticCredentials`] is a fixed username/password pair compared by exact
//! equality. It is not a security boundary.

use tracing::{info, warn};

/// Username accepted by [`StaticCredentials::default`].
pub const EXPECTED_USERNAME: &str = "evilguy";

/// Password accepted by [`StaticCredentials::default`].
pub const EXPECTED_PASSWORD: &str = "password";

/// Text of the notice raised when a login attempt is rejected.
pub const REJECTED_NOTICE: &str = "Incorrect credentials!";

/// The two reachable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
}

/// Result of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    Rejected,
}

/// Decides whether a username/password pair may enter the dashboard.
pub trait Authenticator {
    fn authenticate(&self, username: &str, password: &str) -> bool;
}

/// A single hardcoded credential pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(EXPECTED_USERNAME, EXPECTED_PASSWORD)
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// The user the dashboard is personalised for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedInUser {
    pub id: u64,
    pub username: String,
    pub email: String,
}

/// Current view plus the logged-in user, passed to whatever needs them.
#[derive(Debug, Clone)]
pub struct Session {
    view: View,
    user: Option<LoggedInUser>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            view: View::Login,
            user: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn user(&self) -> Option<&LoggedInUser> {
        self.user.as_ref()
    }

    /// Check the credentials and move to the dashboard if they are accepted.
    ///
    /// Attempts made after the dashboard is reached are rejected; there is no
    /// second login.
    pub fn attempt_login(
        &mut self,
        auth: &dyn Authenticator,
        username: &str,
        password: &str,
    ) -> LoginOutcome {
        if self.view == View::Login && auth.authenticate(username, password) {
            info!(username, "login accepted");
            self.view = View::Dashboard;
            // Only the username is known locally.
            self.user = Some(LoggedInUser {
                id: 0,
                username: username.to_string(),
                email: String::new(),
            });
            LoginOutcome::Granted
        } else {
            warn!(username, "login rejected");
            LoginOutcome::Rejected
        }
    }
}
