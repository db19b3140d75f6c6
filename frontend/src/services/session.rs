use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

const SESSION_STORAGE_KEY: &str = "supatodo.session";

/// Access token handed out by the login flow. Opaque here; it is forwarded
/// to the todos endpoint unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
}

/// Reads whatever session the login flow stored. No session means the user
/// is not logged in.
pub fn load_session() -> Option<Session> {
    LocalStorage::get(SESSION_STORAGE_KEY).ok()
}
