//! Current acting identity.

use std::sync::RwLock;

use worldsmith_domain::UserId;

use crate::infrastructure::ports::{AuthError, AuthSession, UserIdentity};

/// Holds the signed-in identity and its bearer token. Overwrite-on-change;
/// mutation happens only in response to auth flows.
#[derive(Default)]
pub struct Session {
    inner: RwLock<Option<AuthSession>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, auth: AuthSession) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(auth);
        }
    }

    /// Clear the session, returning the old one so its token can be revoked.
    pub fn sign_out(&self) -> Option<AuthSession> {
        self.inner.write().ok().and_then(|mut guard| guard.take())
    }

    /// Replace the stored identity after a metadata update, keeping the token.
    pub fn sync_identity(&self, identity: UserIdentity) {
        if let Ok(mut guard) = self.inner.write() {
            if let Some(auth) = guard.as_mut() {
                auth.user = identity;
            }
        }
    }

    pub fn current_user(&self) -> Option<UserIdentity> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|auth| auth.user.clone()))
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|auth| auth.user.id))
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|auth| auth.access_token.clone()))
    }

    /// The acting user, or `NotAuthenticated` before any network call.
    pub fn require_user(&self) -> Result<UserId, AuthError> {
        self.user_id().ok_or(AuthError::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn test_auth() -> AuthSession {
        AuthSession {
            user: UserIdentity {
                id: UserId::new(),
                email: "maera@example.com".into(),
                metadata: Value::Null,
            },
            access_token: "token-1".into(),
        }
    }

    #[test]
    fn require_user_refuses_signed_out_sessions() {
        let session = Session::new();
        assert!(matches!(
            session.require_user(),
            Err(AuthError::NotAuthenticated)
        ));

        session.sign_in(test_auth());
        assert!(session.require_user().is_ok());
    }

    #[test]
    fn sign_out_returns_the_token_for_revocation() {
        let session = Session::new();
        session.sign_in(test_auth());

        let old = session.sign_out().expect("was signed in");
        assert_eq!(old.access_token, "token-1");
        assert!(session.current_user().is_none());
        assert!(session.sign_out().is_none());
    }

    #[test]
    fn sync_identity_keeps_the_token() {
        let session = Session::new();
        session.sign_in(test_auth());

        let mut updated = session.current_user().expect("signed in");
        updated.metadata = serde_json::json!({ "display_name": "Maera" });
        session.sync_identity(updated);

        assert_eq!(session.access_token().as_deref(), Some("token-1"));
        let user = session.current_user().expect("still signed in");
        assert_eq!(user.metadata["display_name"], "Maera");
    }
}
