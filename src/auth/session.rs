use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::api::{ApiClient, ApiError};
use crate::models::User;

/// In-memory session state: the cached profile and the flags the shell
/// keys off.
///
/// Created once at process start by the application root and handed to
/// whatever drives it; nothing here persists across restarts. The session
/// owns the API client so the bearer token and the identity it belongs to
/// move together.
pub struct Session {
    api: ApiClient,
    user: Option<User>,
    authenticated: bool,
    loading: bool,
    established_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create an unauthenticated session around the given client.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            user: None,
            authenticated: false,
            loading: false,
            established_at: None,
        }
    }

    /// The cached profile, when one is held.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a profile is held and a token was obtained this process
    /// lifetime.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Whether a login or profile refresh is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// When the current session was established.
    pub fn established_at(&self) -> Option<DateTime<Utc>> {
        self.established_at
    }

    /// Access to the underlying client (registration goes through here).
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Log in: exchange credentials for a token, then fetch the profile.
    ///
    /// On failure of either step the prior session state is left untouched
    /// (a failed re-login does not log the user out) and the error is
    /// re-raised for the caller to display.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ApiError> {
        self.loading = true;
        let result = self.login_steps(email, password).await;
        self.loading = false;

        match result {
            Ok(user) => {
                info!(user_id = user.id, "login succeeded");
                self.user = Some(user);
                self.authenticated = true;
                self.established_at = Some(Utc::now());
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                Err(err)
            }
        }
    }

    async fn login_steps(&mut self, email: &str, password: &str) -> Result<User, ApiError> {
        let token = self.api.login(email, password).await?;
        self.api.set_token(Some(token));
        self.api.current_user().await
    }

    /// Clear the token and cached profile. Safe to call in any state.
    pub fn logout(&mut self) {
        self.api.set_token(None);
        self.user = None;
        self.authenticated = false;
        self.established_at = None;
        debug!("session cleared");
    }

    /// Re-fetch the profile for the stored token.
    ///
    /// Unlike `login`, a failure here drops the whole session before the
    /// error is re-raised.
    pub async fn refresh_profile(&mut self) -> Result<(), ApiError> {
        self.loading = true;
        let result = self.api.current_user().await;
        self.loading = false;

        match result {
            Ok(user) => {
                debug!(user_id = user.id, "profile refreshed");
                self.user = Some(user);
                self.authenticated = true;
                if self.established_at.is_none() {
                    self.established_at = Some(Utc::now());
                }
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "profile refresh failed, dropping session");
                self.user = None;
                self.authenticated = false;
                self.established_at = None;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn offline_session() -> Session {
        let api = ApiClient::new(ApiConfig::with_base_url("http://127.0.0.1:9"))
            .expect("client should build");
        Session::new(api)
    }

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = offline_session();
        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
        assert!(session.user().is_none());
        assert!(session.established_at().is_none());
        assert!(!session.api().has_token());
    }

    #[test]
    fn test_logout_is_idempotent_from_initial_state() {
        let mut session = offline_session();
        session.logout();
        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(!session.api().has_token());
    }
}
