use gloo::storage::{LocalStorage, Storage};

/// Durable home of the bearer token. Access is synchronous.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Keeps the raw token string in `window.localStorage`
#[derive(Debug, Clone, PartialEq)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        // Raw access: gloo's typed getters expect JSON, the token is stored as plain text
        match LocalStorage::raw().get_item(&self.key) {
            Ok(token) => token,
            Err(e) => {
                log::warn!(target: "storage", "Failed to read {}: {:?}", self.key, e);
                None
            }
        }
    }

    fn save(&self, token: &str) {
        if let Err(e) = LocalStorage::raw().set_item(&self.key, token) {
            log::warn!(target: "storage", "Failed to persist {}: {:?}", self.key, e);
        }
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}
