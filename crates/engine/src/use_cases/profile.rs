//! Profile management: the display-name uniqueness rule.
//!
//! Display names are unique across users. The check is a pre-flight query
//! so a taken name blocks the update with a clear error instead of an
//! opaque constraint violation from the store.

use std::sync::Arc;

use serde_json::json;

use crate::infrastructure::ports::{AuthError, AuthPort, ProfileRepo, RepoError};
use crate::stores::Session;

pub struct ProfileOps {
    profiles: Arc<dyn ProfileRepo>,
    auth: Arc<dyn AuthPort>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Display name '{0}' is already taken")]
    NameConflict(String),
    #[error("Display name cannot be empty")]
    EmptyName,
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ProfileOps {
    pub fn new(profiles: Arc<dyn ProfileRepo>, auth: Arc<dyn AuthPort>) -> Self {
        Self { profiles, auth }
    }

    /// Whether `name` is free for the acting user to claim.
    pub async fn display_name_available(
        &self,
        session: &Session,
        name: &str,
    ) -> Result<bool, ProfileError> {
        let user = session.user_id().ok_or(ProfileError::NotAuthenticated)?;
        Ok(!self.profiles.display_name_taken(name, Some(user)).await?)
    }

    /// Claim a display name: pre-flight uniqueness check, profile upsert,
    /// then the auth metadata update, with the session copy refreshed last.
    pub async fn update_display_name(
        &self,
        session: &Session,
        name: &str,
    ) -> Result<(), ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        let user = session.user_id().ok_or(ProfileError::NotAuthenticated)?;
        let token = session
            .access_token()
            .ok_or(ProfileError::NotAuthenticated)?;

        if self.profiles.display_name_taken(name, Some(user)).await? {
            return Err(ProfileError::NameConflict(name.to_string()));
        }

        self.profiles.upsert_display_name(user, name).await?;
        let identity = self
            .auth
            .update_metadata(&token, json!({ "display_name": name }))
            .await?;
        session.sync_identity(identity);
        tracing::debug!(user_id = %user, "display name updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        AuthSession, MockAuthPort, MockProfileRepo, UserIdentity,
    };
    use serde_json::Value;
    use worldsmith_domain::UserId;

    fn signed_in(user: UserId) -> Session {
        let session = Session::new();
        session.sign_in(AuthSession {
            user: UserIdentity {
                id: user,
                email: "maera@example.com".into(),
                metadata: Value::Null,
            },
            access_token: "token".into(),
        });
        session
    }

    #[tokio::test]
    async fn a_taken_name_blocks_the_update_before_any_write() {
        let user = UserId::new();
        let session = signed_in(user);

        let mut profiles = MockProfileRepo::new();
        profiles
            .expect_display_name_taken()
            .withf(move |name, exclude| name == "Maera" && *exclude == Some(user))
            .returning(|_, _| Ok(true));
        // No upsert expectation: any write attempt would panic the test.

        let ops = ProfileOps::new(Arc::new(profiles), Arc::new(MockAuthPort::new()));
        let result = ops.update_display_name(&session, "Maera").await;

        assert!(matches!(result, Err(ProfileError::NameConflict(name)) if name == "Maera"));
    }

    #[tokio::test]
    async fn a_free_name_is_written_to_profile_and_auth_metadata() {
        let user = UserId::new();
        let session = signed_in(user);

        let mut profiles = MockProfileRepo::new();
        profiles
            .expect_display_name_taken()
            .returning(|_, _| Ok(false));
        profiles
            .expect_upsert_display_name()
            .withf(move |id, name| *id == user && name == "Maera")
            .times(1)
            .returning(|_, _| Ok(()));

        let mut auth = MockAuthPort::new();
        auth.expect_update_metadata()
            .withf(|token, metadata| token == "token" && metadata["display_name"] == "Maera")
            .returning(move |_, metadata| {
                Ok(UserIdentity {
                    id: user,
                    email: "maera@example.com".into(),
                    metadata,
                })
            });

        let ops = ProfileOps::new(Arc::new(profiles), Arc::new(auth));
        ops.update_display_name(&session, "  Maera  ")
            .await
            .expect("update succeeds");

        let current = session.current_user().expect("still signed in");
        assert_eq!(current.metadata["display_name"], "Maera");
    }

    #[tokio::test]
    async fn blank_names_are_rejected_locally() {
        let session = signed_in(UserId::new());
        let ops = ProfileOps::new(
            Arc::new(MockProfileRepo::new()),
            Arc::new(MockAuthPort::new()),
        );

        assert!(matches!(
            ops.update_display_name(&session, "   ").await,
            Err(ProfileError::EmptyName)
        ));
    }

    #[tokio::test]
    async fn signed_out_sessions_are_refused() {
        let session = Session::new();
        let ops = ProfileOps::new(
            Arc::new(MockProfileRepo::new()),
            Arc::new(MockAuthPort::new()),
        );

        assert!(matches!(
            ops.update_display_name(&session, "Maera").await,
            Err(ProfileError::NotAuthenticated)
        ));
    }
}
