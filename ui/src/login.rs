use api::SupportApi;
use types::{LoginRequest, Result, UserProfile};

use crate::{Effect, Screen, SessionStore, Ticket, toast::Toast};

/// View state of the login form around a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    /// A request is in flight; inputs and the submit button are disabled.
    pub busy: bool,
    /// Inline message shown above the form.
    pub error: Option<String>,
}

impl LoginState {
    /// Begin a submission. Returns `false`, changing nothing, while an
    /// earlier one is still in flight.
    pub fn start(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    pub fn finish(&mut self, result: &Result<UserProfile>) -> Effect {
        self.busy = false;
        match result {
            Ok(_) => {
                self.error = None;
                Effect {
                    toast: Toast::new("Login successful", "Welcome to the admin portal"),
                    navigate: Some(Screen::Dashboard),
                }
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Effect {
                    toast: Toast::destructive(
                        "Login failed",
                        "Please check your credentials and try again",
                    ),
                    navigate: None,
                }
            }
        }
    }
}

/// Authenticate and persist the resulting session.
///
/// Returns `None` when `ticket` was superseded while the request was in
/// flight; storage is left alone in that case. A failed login never clears a
/// previously stored session.
pub async fn sign_in(
    api: &dyn SupportApi,
    store: &SessionStore,
    ticket: &Ticket,
    request: &LoginRequest,
) -> Option<Result<UserProfile>> {
    let result = api.login(request).await;

    if !ticket.is_current() {
        tracing::debug!("Dropping superseded login response");
        return None;
    }

    Some(match result {
        Ok(session) => store.save(&session).map(|()| {
            tracing::info!(user = session.user.display_label(), "Signed in");
            session.user
        }),
        Err(err) => {
            tracing::warn!(error = %err, "Login failed");
            Err(err)
        }
    })
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::{
        KeyValueStore, RequestTracker,
        testing::{FakeApi, admin_session, store_with},
        toast::ToastVariant,
    };
    use tokio::sync::Notify;
    use types::Error;

    fn request() -> LoginRequest {
        LoginRequest::new("admin@company.com", "secret".to_string())
    }

    #[tokio::test]
    async fn successful_login_persists_session_and_goes_to_dashboard() {
        let (store, storage) = store_with(&[]);
        let api = FakeApi::new().login_returns(Ok(admin_session()));
        let tracker = RequestTracker::default();
        let mut state = LoginState::default();

        assert!(state.start());
        assert!(state.busy);
        let result = sign_in(&api, &store, &tracker.begin(), &request())
            .await
            .unwrap();
        let effect = state.finish(&result);

        assert_eq!(api.last_email.borrow().as_deref(), Some("admin@company.com"));
        assert_eq!(storage.get("apiKey").as_deref(), Some("tok123"));
        assert_eq!(storage.get("user").as_deref(), Some(r#"{"name":"Admin"}"#));
        assert_eq!(effect.navigate, Some(Screen::Dashboard));
        assert_eq!(effect.toast.title, "Login successful");
        assert_eq!(state, LoginState::default());
    }

    #[tokio::test]
    async fn rejected_login_leaves_storage_and_shows_error() {
        let (store, storage) = store_with(&[]);
        let api = FakeApi::new().login_returns(Err(Error::InvalidCredentials));
        let tracker = RequestTracker::default();
        let mut state = LoginState::default();

        assert!(state.start());
        let result = sign_in(&api, &store, &tracker.begin(), &request())
            .await
            .unwrap();
        let effect = state.finish(&result);

        assert!(storage.is_empty());
        assert_eq!(effect.navigate, None);
        assert_eq!(effect.toast.variant, ToastVariant::Destructive);
        assert_eq!(effect.toast.title, "Login failed");
        assert!(!state.busy);
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn failed_login_keeps_previous_session() {
        let (store, storage) = store_with(&[("apiKey", "old"), ("user", "{}")]);
        let api = FakeApi::new().login_returns(Err(Error::Transport("offline".into())));
        let tracker = RequestTracker::default();

        let result = sign_in(&api, &store, &tracker.begin(), &request())
            .await
            .unwrap();

        assert!(result.is_err());
        assert_eq!(storage.get("apiKey").as_deref(), Some("old"));
    }

    #[test]
    fn retry_clears_previous_error() {
        let mut state = LoginState::default();
        state.finish(&Err(Error::InvalidCredentials));
        assert!(state.error.is_some());

        assert!(state.start());
        assert_eq!(state.error, None);
    }

    #[test]
    fn resubmit_while_busy_is_ignored() {
        let mut state = LoginState::default();
        assert!(state.start());
        assert!(!state.start());
        assert!(state.busy);

        state.finish(&Err(Error::InvalidCredentials));
        assert!(state.start());
    }

    #[tokio::test]
    async fn superseded_login_is_dropped() {
        let (store, storage) = store_with(&[]);
        let gate = Rc::new(Notify::new());
        let api = FakeApi::new()
            .login_returns(Ok(admin_session()))
            .gated(gate.clone());
        let tracker = RequestTracker::default();
        let ticket = tracker.begin();
        let request = request();

        let (result, ()) = tokio::join!(sign_in(&api, &store, &ticket, &request), async {
            tracker.cancel();
            gate.notify_one();
        });

        assert!(result.is_none());
        assert!(storage.is_empty());
    }
}
