/// Why a request did not produce the expected result
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Cause {
    /// The server answered with a non-success status
    #[error("server responded with status {0}")]
    Status(u16),
    /// The request never completed
    #[error("network error: {0}")]
    Transport(String),
    /// A body could not be encoded or decoded
    #[error("malformed body: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Mutation {
    #[error("update")]
    Update,
    #[error("delete")]
    Delete,
}

/// Errors surfaced to the user. The display text is the notification shown;
/// transport failures read the same as rejections.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("Login failed")]
    Authentication(Cause),
    #[error("Error loading payments. Check console.")]
    Fetch(Cause),
    #[error("Failed to {operation} payment")]
    Mutation { operation: Mutation, cause: Cause },
    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            ClientError::Authentication(cause) | ClientError::Fetch(cause) => Some(cause),
            ClientError::Mutation { cause, .. } => Some(cause),
            ClientError::Validation(_) => None,
        }
    }

    #[cfg(test)]
    pub fn is_transport(&self) -> bool {
        matches!(self.cause(), Some(Cause::Transport(_)))
    }
}
