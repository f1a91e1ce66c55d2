use crate::{Route, use_session};
use dioxus::prelude::*;
use ui::components::PageSpinner;

/// `/`: send the visitor wherever their stored credential says.
#[component]
pub fn Index() -> Element {
    let session = use_session();
    let nav = navigator();

    use_effect(move || {
        let screen = ui::entry_screen(&session);
        tracing::debug!(?screen, "Routing from entry");
        nav.replace(Route::from(screen));
    });

    rsx! { PageSpinner {} }
}
