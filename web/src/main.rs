use std::rc::Rc;

use api::HttpApi;
use dioxus::{prelude::*, router::Navigator};
use ui::{Api, Effect, Screen, SessionStore, components::Toaster, toast::Toasts};

mod config;
mod views;

use config::AppConfig;
use views::{Dashboard, Index, Login, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Index {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Login => Route::Login {},
            Screen::Dashboard => Route::Dashboard {},
        }
    }
}

fn main() {
    // Launch installs a default subscriber if this one could not be set.
    let _ = dioxus::logger::init(config::log_level());

    match AppConfig::load() {
        Ok(config) => {
            tracing::info!(api = %config.api.base_url(), "Starting support admin");
            dioxus::LaunchBuilder::new().with_context(config).launch(App);
        }
        Err(err) => {
            tracing::error!(error = %err, "Refusing to start");
            dioxus::launch(ConfigError);
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();
    ui::toast::provide_toasts();
    use_context_provider(session_store);
    use_context_provider(move || -> Api { Rc::new(HttpApi::new(config.api.clone())) });

    rsx! {
        document::Title { "Customer Support Admin" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
        Toaster {}
    }
}

#[component]
fn ConfigError() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }
        div { class: "page-center",
            div { class: "alert alert-error",
                "This build points at an invalid support API address. See the browser console for details."
            }
        }
    }
}

fn session_store() -> SessionStore {
    #[cfg(feature = "web")]
    return SessionStore::browser();

    #[cfg(not(feature = "web"))]
    SessionStore::in_memory()
}

/// The persisted session - the only way screens touch storage
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}

pub fn use_api() -> Api {
    use_context::<Api>()
}

/// Show the effect's toast and follow its navigation, if any.
pub fn apply_effect(mut toasts: Toasts, navigator: Navigator, effect: Effect) {
    toasts.show(effect.toast);
    if let Some(screen) = effect.navigate {
        navigator.push(Route::from(screen));
    }
}
