use dioxus::prelude::*;

use crate::{
    dashboard::{BadgeTone, StatCard},
    toast::{Toast, ToastVariant, use_toasts},
};

/// Line icons, drawn inline so the app ships without an icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    MessageSquare,
    Users,
    Clock,
    TrendingUp,
    LogOut,
    Shield,
    User,
    Lock,
    Close,
}

#[component]
pub fn Icon(kind: IconKind, #[props(into, default = "icon".to_string())] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {match kind {
                IconKind::MessageSquare => rsx! {
                    path { d: "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" }
                },
                IconKind::Users => rsx! {
                    path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
                    circle { cx: "9", cy: "7", r: "4" }
                    path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
                    path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
                },
                IconKind::Clock => rsx! {
                    circle { cx: "12", cy: "12", r: "10" }
                    polyline { points: "12 6 12 12 16 14" }
                },
                IconKind::TrendingUp => rsx! {
                    polyline { points: "22 7 13.5 15.5 8.5 10.5 2 17" }
                    polyline { points: "16 7 22 7 22 13" }
                },
                IconKind::LogOut => rsx! {
                    path { d: "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" }
                    polyline { points: "16 17 21 12 16 7" }
                    line { x1: "21", y1: "12", x2: "9", y2: "12" }
                },
                IconKind::Shield => rsx! {
                    path { d: "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" }
                },
                IconKind::User => rsx! {
                    path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
                    circle { cx: "12", cy: "7", r: "4" }
                },
                IconKind::Lock => rsx! {
                    rect { x: "3", y: "11", width: "18", height: "11", rx: "2", ry: "2" }
                    path { d: "M7 11V7a5 5 0 0 1 10 0v4" }
                },
                IconKind::Close => rsx! {
                    line { x1: "18", y1: "6", x2: "6", y2: "18" }
                    line { x1: "6", y1: "6", x2: "18", y2: "18" }
                },
            }}
        }
    }
}

#[component]
pub fn Spinner(#[props(default)] inline: bool) -> Element {
    rsx! {
        span { class: if inline { "spinner spinner-inline" } else { "spinner" } }
    }
}

/// Centered spinner filling the viewport, shown while a screen decides where to go.
#[component]
pub fn PageSpinner() -> Element {
    rsx! {
        div { class: "page-center",
            Spinner {}
        }
    }
}

#[component]
pub fn StatTile(card: StatCard) -> Element {
    let badge_class = match card.tone {
        BadgeTone::Neutral => "badge",
        BadgeTone::Positive => "badge badge-positive",
        BadgeTone::Info => "badge badge-info",
    };

    rsx! {
        div { class: "card stat-card",
            div { class: "stat-card-header",
                span { class: "stat-card-title", "{card.title}" }
                Icon { kind: card.icon, class: "icon text-muted" }
            }
            div { class: "stat-card-value", "{card.value}" }
            span { class: badge_class, "{card.badge}" }
        }
    }
}

/// Renders the app-wide toasts. Mount once, next to the router.
#[component]
pub fn Toaster() -> Element {
    let toasts = use_toasts();

    rsx! {
        div { class: "toaster",
            for (id, toast) in toasts.visible() {
                ToastItem { key: "{id}", id, toast }
            }
        }
    }
}

#[component]
fn ToastItem(id: u64, toast: Toast) -> Element {
    let mut toasts = use_toasts();

    #[cfg(feature = "web")]
    let _dismiss_timer = use_future(move || async move {
        gloo_timers::future::TimeoutFuture::new(crate::toast::TOAST_DURATION_MS).await;
        toasts.dismiss(id);
    });

    let class = match toast.variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast-destructive",
    };

    rsx! {
        div { class, role: "status",
            div { class: "toast-body",
                div { class: "toast-title", "{toast.title}" }
                div { class: "toast-description", "{toast.description}" }
            }
            button {
                class: "toast-close",
                "aria-label": "Close",
                onclick: move |_| toasts.dismiss(id),
                Icon { kind: IconKind::Close }
            }
        }
    }
}
