use crate::navigator::Navigator;
use crate::{get_local_storage, LOGIN_ROUTE, SESSION_TOKEN_LOCAL_STORAGE_KEY};

/// Session lookup consumed by the auth guard.
pub trait Session {
    fn current_token(&self) -> Option<String>;
}

/// Session token persisted by the login page.
pub struct LocalStorageSession;

impl Session for LocalStorageSession {
    fn current_token(&self) -> Option<String> {
        get_local_storage()
            .get_item(SESSION_TOKEN_LOCAL_STORAGE_KEY)
            .ok()
            .flatten()
    }
}

/// Redirects to the login page when no session is present. Returns whether
/// the caller may keep rendering.
pub fn require_auth(session: &dyn Session, navigator: &dyn Navigator, current_path: &str) -> bool {
    if session.current_token().is_some() {
        return true;
    }

    navigator.go_to(&format!("{}?next={}", LOGIN_ROUTE, current_path));
    false
}
