//! Auth flows: sign-in, sign-up, sign-out, password recovery.
//!
//! The engine implements no auth itself; these operations drive the auth
//! boundary and keep the local session and world selection consistent with
//! the acting identity.

use std::sync::Arc;

use crate::infrastructure::ports::{AuthError, AuthPort, UserIdentity};
use crate::stores::{Session, WorldContext};

pub struct AuthOps {
    auth: Arc<dyn AuthPort>,
}

impl AuthOps {
    pub fn new(auth: Arc<dyn AuthPort>) -> Self {
        Self { auth }
    }

    pub async fn sign_in(
        &self,
        session: &Session,
        ctx: &WorldContext,
        email: &str,
        password: &str,
    ) -> Result<UserIdentity, AuthError> {
        let auth_session = self.auth.sign_in(email, password).await?;
        let identity = auth_session.user.clone();
        session.sign_in(auth_session);
        // A fresh identity starts with no world selected; the first list
        // call picks one.
        ctx.set_current(None);
        tracing::info!(user_id = %identity.id, "signed in");
        Ok(identity)
    }

    pub async fn sign_up(
        &self,
        session: &Session,
        ctx: &WorldContext,
        email: &str,
        password: &str,
    ) -> Result<UserIdentity, AuthError> {
        let auth_session = self.auth.sign_up(email, password).await?;
        let identity = auth_session.user.clone();
        session.sign_in(auth_session);
        ctx.set_current(None);
        tracing::info!(user_id = %identity.id, "signed up");
        Ok(identity)
    }

    /// Sign out locally first, then attempt token revocation. A failed
    /// revocation is logged, not surfaced: the local session is already
    /// gone and the operation cannot be left half-done.
    pub async fn sign_out(&self, session: &Session, ctx: &WorldContext) {
        ctx.set_current(None);
        if let Some(old) = session.sign_out() {
            if let Err(error) = self.auth.sign_out(&old.access_token).await {
                tracing::warn!(%error, "token revocation failed during sign-out");
            }
        }
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        self.auth.reset_password(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{AuthSession, MockAuthPort};
    use serde_json::Value;
    use worldsmith_domain::{UserId, World};

    fn auth_session(user: UserId) -> AuthSession {
        AuthSession {
            user: UserIdentity {
                id: user,
                email: "maera@example.com".into(),
                metadata: Value::Null,
            },
            access_token: "token".into(),
        }
    }

    #[tokio::test]
    async fn sign_in_populates_the_session_and_clears_the_selection() {
        let user = UserId::new();
        let session = Session::new();
        let ctx = WorldContext::new();
        ctx.set_current(Some(World::new(UserId::new(), "Leftover")));

        let mut auth = MockAuthPort::new();
        auth.expect_sign_in()
            .withf(|email, password| email == "maera@example.com" && password == "hunter2")
            .returning(move |_, _| Ok(auth_session(user)));

        let ops = AuthOps::new(Arc::new(auth));
        let identity = ops
            .sign_in(&session, &ctx, "maera@example.com", "hunter2")
            .await
            .expect("sign in succeeds");

        assert_eq!(identity.id, user);
        assert_eq!(session.user_id(), Some(user));
        assert!(ctx.current().is_none());
    }

    #[tokio::test]
    async fn failed_sign_in_leaves_the_session_empty() {
        let session = Session::new();
        let ctx = WorldContext::new();

        let mut auth = MockAuthPort::new();
        auth.expect_sign_in()
            .returning(|_, _| Err(AuthError::InvalidCredentials));

        let ops = AuthOps::new(Arc::new(auth));
        let result = ops.sign_in(&session, &ctx, "maera@example.com", "wrong").await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn sign_out_clears_locally_even_when_revocation_fails() {
        let user = UserId::new();
        let session = Session::new();
        session.sign_in(auth_session(user));
        let ctx = WorldContext::new();
        ctx.set_current(Some(World::new(user, "Aethermoor")));

        let mut auth = MockAuthPort::new();
        auth.expect_sign_out()
            .withf(|token| token == "token")
            .returning(|_| Err(AuthError::RequestFailed("503".into())));

        let ops = AuthOps::new(Arc::new(auth));
        ops.sign_out(&session, &ctx).await;

        assert!(session.current_user().is_none());
        assert!(ctx.current().is_none());
    }
}
