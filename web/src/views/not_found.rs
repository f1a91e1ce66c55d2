use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    use_hook({
        let path = path.clone();
        move || tracing::warn!(%path, "No route for requested path")
    });

    rsx! {
        div { class: "page-center",
            div { class: "not-found",
                h1 { class: "not-found-code", "404" }
                p { class: "text-muted", "Oops! Nothing lives at {path}" }
                Link { to: Route::Index {}, class: "btn btn-primary", "Return to Home" }
            }
        }
    }
}
