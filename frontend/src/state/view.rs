use super::session::Session;

/// The two top-level screens. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Login,
    Dashboard,
}

impl ViewState {
    /// Dashboard whenever the session holds a token
    pub fn for_session(session: &Session) -> Self {
        if session.is_authenticated() {
            ViewState::Dashboard
        } else {
            ViewState::Login
        }
    }
}
