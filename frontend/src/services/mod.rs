pub mod api;
pub mod config;
pub mod date_utils;
pub mod dialogs;
pub mod error;
pub mod logging;
pub mod storage;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use storage::LocalTokenStore;
