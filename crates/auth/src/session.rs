//! Sessions and the mock sign-in flow.
//!
//! Session storage is a collaborator behind [`SessionStore`]; the process
//! default is [`InMemorySessionStore`].

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{AuthError, User, UserDirectory};

/// An issued session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token.
    pub token: String,

    pub user: User,

    pub issued_at: DateTime<Utc>,

    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Fails with [`SessionError::InvalidTimeWindow`] when `now + ttl` is not
    /// a representable instant.
    pub fn new(user: User, now: DateTime<Utc>, ttl: Duration) -> Result<Self, SessionError> {
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or(SessionError::InvalidTimeWindow)?;

        Ok(Self {
            token: Uuid::new_v4().simple().to_string(),
            user,
            issued_at: now,
            expires_at,
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session has expired")]
    Expired,

    #[error("session not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid session time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically check a session's validity window at `now`.
pub fn validate_session(session: &Session, now: DateTime<Utc>) -> Result<(), SessionError> {
    if session.expires_at <= session.issued_at {
        return Err(SessionError::InvalidTimeWindow);
    }
    if now < session.issued_at {
        return Err(SessionError::NotYetValid);
    }
    if now >= session.expires_at {
        return Err(SessionError::Expired);
    }
    Ok(())
}

/// Session persistence boundary (`get`/`set`/`clear` by token).
pub trait SessionStore: Send + Sync {
    fn get(&self, token: &str) -> Option<Session>;

    fn set(&self, session: Session);

    /// Returns whether a session was removed.
    fn clear(&self, token: &str) -> bool;

    /// Drop every session that is no longer valid at `now`; returns how many went.
    fn purge_expired(&self, now: DateTime<Utc>) -> usize;
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    inner: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, token: &str) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }

    fn set(&self, session: Session) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session.token.clone(), session);
    }

    fn clear(&self, token: &str) -> bool {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
            .is_some()
    }

    fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, s| validate_session(s, now).is_ok());
        before - sessions.len()
    }
}

/// Sign-in / sign-out / session lookup over a user directory and a store.
#[derive(Clone)]
pub struct Authenticator {
    directory: Arc<UserDirectory>,
    sessions: Arc<dyn SessionStore>,
    ttl: Duration,
}

impl Authenticator {
    pub fn new(directory: UserDirectory, sessions: Arc<dyn SessionStore>, ttl: Duration) -> Self {
        Self {
            directory: Arc::new(directory),
            sessions,
            ttl,
        }
    }

    pub fn sign_in(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<Session, AuthError> {
        let user = self.directory.authenticate(email, password)?;
        let session = Session::new(user, now, self.ttl)?;

        // Abandoned tokens are never looked up again; sweep on login.
        let purged = self.sessions.purge_expired(now);
        if purged > 0 {
            tracing::debug!(purged, "expired sessions purged");
        }

        self.sessions.set(session.clone());
        tracing::debug!(user_id = %session.user.id, role = %session.user.role, "session issued");
        Ok(session)
    }

    pub fn sign_out(&self, token: &str) -> bool {
        self.sessions.clear(token)
    }

    /// Resolve the live session for `token`.
    ///
    /// Expired sessions are evicted and reported as [`AuthError::SessionExpired`].
    pub fn current_session(&self, token: &str, now: DateTime<Utc>) -> Result<Session, AuthError> {
        let session = self.sessions.get(token).ok_or(AuthError::Unauthenticated)?;

        match validate_session(&session, now) {
            Ok(()) => Ok(session),
            Err(SessionError::Expired) => {
                self.sessions.clear(token);
                Err(AuthError::SessionExpired)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn current_user(&self, token: &str, now: DateTime<Utc>) -> Result<User, AuthError> {
        self.current_session(token, now).map(|s| s.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn authenticator() -> (Authenticator, Arc<InMemorySessionStore>) {
        let store = Arc::new(InMemorySessionStore::new());
        let auth = Authenticator::new(UserDirectory::demo(), store.clone(), Duration::minutes(30));
        (auth, store)
    }

    fn user() -> User {
        UserDirectory::demo().find("admin@aflow.cl").unwrap().clone()
    }

    #[test]
    fn validate_session_window() {
        let now = Utc::now();
        let s = Session::new(user(), now, Duration::minutes(10)).unwrap();

        assert_eq!(validate_session(&s, now), Ok(()));
        assert_eq!(
            validate_session(&s, now - Duration::seconds(1)),
            Err(SessionError::NotYetValid)
        );
        assert_eq!(
            validate_session(&s, now + Duration::minutes(10)),
            Err(SessionError::Expired)
        );

        let zero = Session::new(user(), now, Duration::zero()).unwrap();
        assert_eq!(validate_session(&zero, now), Err(SessionError::InvalidTimeWindow));
    }

    #[test]
    fn tokens_are_unique() {
        let now = Utc::now();
        let a = Session::new(user(), now, Duration::minutes(1)).unwrap();
        let b = Session::new(user(), now, Duration::minutes(1)).unwrap();
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn sign_in_then_lookup_then_sign_out() {
        let (auth, store) = authenticator();
        let now = Utc::now();

        let session = auth.sign_in("operador@aflow.cl", "operador123", now).unwrap();
        assert_eq!(session.expires_at - session.issued_at, Duration::minutes(30));
        assert_eq!(store.len(), 1);

        let user = auth.current_user(&session.token, now).unwrap();
        assert_eq!(user.role, Role::Operador);

        assert!(auth.sign_out(&session.token));
        assert!(!auth.sign_out(&session.token));
        assert_eq!(
            auth.current_user(&session.token, now),
            Err(AuthError::Unauthenticated)
        );
    }

    #[test]
    fn bad_credentials_do_not_create_sessions() {
        let (auth, store) = authenticator();
        let err = auth.sign_in("operador@aflow.cl", "wrong", Utc::now()).unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(store.is_empty());
    }

    #[test]
    fn expired_session_is_evicted() {
        let (auth, store) = authenticator();
        let now = Utc::now();
        let session = auth.sign_in("admin@aflow.cl", "admin123", now).unwrap();

        let later = now + Duration::minutes(31);
        assert_eq!(
            auth.current_session(&session.token, later),
            Err(AuthError::SessionExpired)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_token_is_unauthenticated() {
        let (auth, _) = authenticator();
        assert_eq!(
            auth.current_user("does-not-exist", Utc::now()),
            Err(AuthError::Unauthenticated)
        );
    }

    #[test]
    fn unrepresentable_expiry_is_an_error() {
        let err = Session::new(user(), Utc::now(), Duration::days(365 * 1_000_000)).unwrap_err();
        assert_eq!(err, SessionError::InvalidTimeWindow);
    }

    #[test]
    fn oversized_ttl_fails_sign_in_without_storing() {
        let store = Arc::new(InMemorySessionStore::new());
        let auth = Authenticator::new(
            UserDirectory::demo(),
            store.clone(),
            Duration::days(365 * 1_000_000),
        );

        let err = auth.sign_in("admin@aflow.cl", "admin123", Utc::now()).unwrap_err();
        assert_eq!(err, AuthError::InvalidSession(SessionError::InvalidTimeWindow));
        assert!(store.is_empty());
    }

    #[test]
    fn abandoned_sessions_are_purged_on_next_sign_in() {
        let store = Arc::new(InMemorySessionStore::new());
        let auth = Authenticator::new(UserDirectory::demo(), store.clone(), Duration::minutes(1));
        let now = Utc::now();

        for _ in 0..1000 {
            auth.sign_in("operador@aflow.cl", "operador123", now).unwrap();
        }
        assert_eq!(store.len(), 1000);

        let live = auth
            .sign_in("admin@aflow.cl", "admin123", now + Duration::days(30))
            .unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get(&live.token).is_some());
    }

    #[test]
    fn purge_keeps_live_sessions() {
        let store = InMemorySessionStore::new();
        let now = Utc::now();
        store.set(Session::new(user(), now, Duration::minutes(1)).unwrap());
        let keep = Session::new(user(), now, Duration::hours(1)).unwrap();
        store.set(keep.clone());

        assert_eq!(store.purge_expired(now + Duration::minutes(5)), 1);
        assert_eq!(store.get(&keep.token), Some(keep));
    }
}
