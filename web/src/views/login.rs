use crate::{apply_effect, use_api, use_session};
use dioxus::prelude::*;
use types::LoginRequest;
use ui::{
    RequestTracker,
    components::{Icon, IconKind, Spinner},
    login::{LoginState, sign_in},
    toast::use_toasts,
};

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let session = use_session();
    let toasts = use_toasts();
    let nav = navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut state = use_signal(LoginState::default);
    let tracker = use_hook(RequestTracker::default);

    use_drop({
        let tracker = tracker.clone();
        move || tracker.cancel()
    });

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        if !state.write().start() {
            return;
        }
        let request = LoginRequest::new(email(), password());
        let ticket = tracker.begin();
        let api = api.clone();
        let session = session.clone();

        spawn(async move {
            let Some(result) = sign_in(&*api, &session, &ticket, &request).await else {
                return;
            };
            let effect = state.write().finish(&result);
            apply_effect(toasts, nav, effect);
        });
    };

    let busy = state.read().busy;
    let error = state.read().error.clone();

    rsx! {
        div { class: "login-page",
            div { class: "login-container",
                div { class: "login-header",
                    div { class: "login-logo",
                        Icon { kind: IconKind::Shield, class: "icon icon-lg" }
                    }
                    h1 { class: "login-title", "Customer Support Admin" }
                    p { class: "login-subtitle", "Sign in to access the admin portal" }
                }
                div { class: "card login-card",
                    div { class: "card-header card-header-center",
                        h2 { class: "card-title", "Sign In" }
                        p { class: "card-description", "Enter your credentials to continue" }
                    }
                    form { class: "card-body", onsubmit: onsubmit,
                        if let Some(err) = error {
                            div { class: "alert alert-error", role: "alert", "{err}" }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "email", "Email Address" }
                            div { class: "input-with-icon",
                                Icon { kind: IconKind::User, class: "icon input-icon" }
                                input {
                                    id: "email",
                                    class: "form-input",
                                    r#type: "email",
                                    placeholder: "admin@company.com",
                                    required: true,
                                    disabled: busy,
                                    value: "{email}",
                                    oninput: move |e| email.set(e.value()),
                                }
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "password", "Password" }
                            div { class: "input-with-icon",
                                Icon { kind: IconKind::Lock, class: "icon input-icon" }
                                input {
                                    id: "password",
                                    class: "form-input",
                                    r#type: "password",
                                    placeholder: "Enter your password",
                                    required: true,
                                    disabled: busy,
                                    value: "{password}",
                                    oninput: move |e| password.set(e.value()),
                                }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-block",
                            disabled: busy,
                            if busy {
                                Spinner { inline: true }
                                "Signing in..."
                            } else {
                                "Sign In"
                            }
                        }
                    }
                }
                p { class: "login-footer", "Secure admin access for customer support team" }
            }
        }
    }
}
