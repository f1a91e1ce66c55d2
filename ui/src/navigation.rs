use crate::{SessionStore, toast::Toast};

/// Screens reachable through the route guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

/// What a completed user action asks the shell to do.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub toast: Toast,
    pub navigate: Option<Screen>,
}

/// Where `/` should send the visitor.
pub fn entry_screen(session: &SessionStore) -> Screen {
    if session.has_api_key() {
        Screen::Dashboard
    } else {
        Screen::Login
    }
}
