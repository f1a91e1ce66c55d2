use crate::{Route, apply_effect, use_api, use_session};
use dioxus::prelude::*;
use types::{DashboardStats, Session, UserProfile};
use ui::{
    RequestTracker,
    components::{Icon, IconKind, PageSpinner, StatTile},
    dashboard::{self, DashboardEntry, QuickAction, stat_cards},
    toast::use_toasts,
};

#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let session = use_session();
    let toasts = use_toasts();
    let nav = navigator();
    let mut user = use_signal(|| None::<UserProfile>);
    let mut stats = use_signal(DashboardStats::default);
    let tracker = use_hook(RequestTracker::default);

    use_drop({
        let tracker = tracker.clone();
        move || tracker.cancel()
    });

    // Check the session and fetch stats on mount
    use_effect({
        let session = session.clone();
        let tracker = tracker.clone();
        move || match dashboard::enter(&session) {
            DashboardEntry::Redirect(screen) => {
                nav.replace(Route::from(screen));
            }
            DashboardEntry::Ready(Session { api_key, user: profile }) => {
                user.set(Some(profile));
                let ticket = tracker.begin();
                let api = api.clone();
                spawn(async move {
                    if let Some(fresh) = dashboard::load_stats(&*api, &api_key, &ticket).await {
                        stats.set(fresh);
                    }
                });
            }
        }
    });

    let logout = move |_: MouseEvent| {
        tracker.cancel();
        apply_effect(toasts, nav, dashboard::logout(&session));
    };

    let Some(profile) = user() else {
        return rsx! { PageSpinner {} };
    };
    let label = profile.display_label().to_string();
    let greeting = profile.greeting();
    let cards = stat_cards(&stats.read());

    rsx! {
        div { class: "app-layout",
            header { class: "topbar",
                div { class: "topbar-inner",
                    div { class: "topbar-brand",
                        div { class: "brand-mark",
                            Icon { kind: IconKind::MessageSquare }
                        }
                        h1 { class: "brand-title", "Customer Support Admin" }
                    }
                    div { class: "topbar-user",
                        div { class: "topbar-user-info",
                            div { class: "topbar-user-name", "{label}" }
                            div { class: "topbar-user-role", "Support Agent" }
                        }
                        button { class: "btn btn-outline btn-sm", onclick: logout,
                            Icon { kind: IconKind::LogOut }
                            "Logout"
                        }
                    }
                }
            }
            main { class: "main-content",
                div { class: "page-header",
                    h2 { class: "page-title", "{greeting}" }
                    p { class: "page-subtitle", "Here's what's happening with customer support today" }
                }
                div { class: "dashboard-grid",
                    for (index, card) in cards.into_iter().enumerate() {
                        StatTile { key: "{index}", card }
                    }
                }
                div { class: "card",
                    div { class: "card-header",
                        h3 { class: "card-title", "Quick Actions" }
                        p { class: "card-description", "Common tasks for customer support agents" }
                    }
                    div { class: "card-body quick-actions",
                        for (index, action) in QuickAction::ALL.into_iter().enumerate() {
                            button {
                                key: "{index}",
                                class: "btn btn-primary quick-action",
                                onclick: move |_| tracing::debug!(action = action.label(), "Quick action selected"),
                                Icon { kind: action.icon(), class: "icon icon-lg" }
                                span { {action.label()} }
                            }
                        }
                    }
                }
            }
        }
    }
}
