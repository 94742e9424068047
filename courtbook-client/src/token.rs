//! Process-wide holder of the session's bearer credential.

use std::sync::{PoisonError, RwLock};

use tokio::sync::watch;

/// The current session token, if any.
///
/// A single mutable cell, present after login and absent after logout
/// or expiry. The transport reads it at send time, so a token acquired
/// after a client was built is honored on the next request. The header
/// value is recomputed on every read and can never go stale relative to
/// the token.
///
/// Consumers that need to react to login/logout subscribe explicitly
/// via [`TokenHolder::subscribe`] instead of polling.
///
/// No storage side effects here; persistence across invocations is
/// `session::StoredSession`'s job.
pub struct TokenHolder {
    cell: RwLock<Option<String>>,
    notify: watch::Sender<bool>,
}

impl TokenHolder {
    pub fn new() -> Self {
        let (notify, _) = watch::channel(false);
        TokenHolder {
            cell: RwLock::new(None),
            notify,
        }
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.cell.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
        let _ = self.notify.send(true);
    }

    pub fn clear(&self) {
        *self.cell.write().unwrap_or_else(PoisonError::into_inner) = None;
        let _ = self.notify.send(false);
    }

    pub fn token(&self) -> Option<String> {
        self.cell
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `Authorization` header value: `Token <token>`, or `None` when
    /// logged out.
    pub fn header(&self) -> Option<String> {
        self.token().map(|t| format!("Token {t}"))
    }

    /// Watch login/logout changes. The observed value is "a token is
    /// present".
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.notify.subscribe()
    }
}

impl Default for TokenHolder {
    fn default() -> Self {
        Self::new()
    }
}
