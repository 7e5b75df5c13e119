use std::fmt;

use shared::{LoginRequest, LoginResponse};

use super::view::ViewState;
use crate::services::api::Authenticator;
use crate::services::error::{Cause, ClientError};
use crate::services::storage::TokenStore;

/// Shown in the header when the backend did not tell us who is logged in
pub const FALLBACK_USER_LABEL: &str = "User";

/// The in-memory authentication state. A token present means logged in.
#[derive(Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    username: Option<String>,
}

impl Session {
    /// Session described by a successful login response, not yet persisted
    pub fn from_login(response: LoginResponse) -> Self {
        Self {
            token: Some(response.access_token).filter(|token| !token.is_empty()),
            username: response.username.filter(|name| !name.is_empty()),
        }
    }

    /// Startup check. The stored token is trusted until a request fails;
    /// the username is not persisted and stays unknown.
    pub fn restore<S: TokenStore + ?Sized>(store: &S) -> Self {
        Self {
            token: store.load().filter(|token| !token.is_empty()),
            username: None,
        }
    }

    /// Adopt a login response and persist its token
    pub fn establish<S: TokenStore + ?Sized>(store: &S, response: LoginResponse) -> Self {
        let session = Self::from_login(response);
        if let Some(token) = session.token() {
            store.save(token);
        }
        session
    }

    /// Forget the token in memory and in storage
    pub fn logout<S: TokenStore + ?Sized>(store: &S) -> Self {
        store.clear();
        log::info!(target: "session", "Logged out");
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn display_name(&self) -> &str {
        self.username().unwrap_or(FALLBACK_USER_LABEL)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn view(&self) -> ViewState {
        ViewState::for_session(self)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("username", &self.username)
            .finish()
    }
}

/// Authenticate and, on success, persist the new session's token
pub async fn login<A, S>(
    authenticator: &A,
    store: &S,
    username: &str,
    password: &str,
) -> Result<Session, ClientError>
where
    A: Authenticator + ?Sized,
    S: TokenStore + ?Sized,
{
    if username.trim().is_empty() || password.is_empty() {
        return Err(ClientError::Validation(
            "Please enter username and password".to_string(),
        ));
    }

    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response = authenticator.login(&request).await?;
    if response.access_token.is_empty() {
        return Err(ClientError::Authentication(Cause::Malformed(
            "empty access token".to_string(),
        )));
    }

    let session = Session::establish(store, response);
    log::info!(target: "session", "Logged in as {}", session.display_name());
    Ok(session)
}
