use api::SupportApi;
use secrecy::SecretString;
use types::{DashboardStats, Session};

use crate::{Effect, Screen, SessionStore, Ticket, components::IconKind, toast::Toast};

/// Outcome of the dashboard's mount check.
#[derive(Debug, Clone)]
pub enum DashboardEntry {
    /// No usable session; leave without fetching anything.
    Redirect(Screen),
    Ready(Session),
}

pub fn enter(store: &SessionStore) -> DashboardEntry {
    match store.load() {
        Some(session) => DashboardEntry::Ready(session),
        None => DashboardEntry::Redirect(Screen::Login),
    }
}

/// Fetch fresh statistics.
///
/// Failures are logged and reported as `None`, as are responses whose ticket
/// was superseded; either way the caller keeps what it already shows.
pub async fn load_stats(
    api: &dyn SupportApi,
    api_key: &SecretString,
    ticket: &Ticket,
) -> Option<DashboardStats> {
    let result = api.dashboard_stats(api_key).await;

    if !ticket.is_current() {
        tracing::debug!("Dropping superseded dashboard stats");
        return None;
    }

    match result {
        Ok(stats) => Some(stats),
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch dashboard data");
            None
        }
    }
}

pub fn logout(store: &SessionStore) -> Effect {
    store.clear();
    tracing::info!("Logged out");
    Effect {
        toast: Toast::new("Logged out", "You have been successfully logged out"),
        navigate: Some(Screen::Login),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Neutral,
    Positive,
    Info,
}

/// One statistic, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub badge: &'static str,
    pub tone: BadgeTone,
    pub icon: IconKind,
}

pub fn stat_cards(stats: &DashboardStats) -> [StatCard; 4] {
    [
        StatCard {
            title: "Active Tickets",
            value: stats.active_tickets.to_string(),
            badge: "Needs attention",
            tone: BadgeTone::Neutral,
            icon: IconKind::MessageSquare,
        },
        StatCard {
            title: "Resolved Today",
            value: stats.resolved_today.to_string(),
            badge: "Great work!",
            tone: BadgeTone::Positive,
            icon: IconKind::Users,
        },
        StatCard {
            title: "Avg Response Time",
            value: stats.avg_response_time.clone(),
            badge: "Within SLA",
            tone: BadgeTone::Neutral,
            icon: IconKind::Clock,
        },
        StatCard {
            title: "Customer Satisfaction",
            value: format!("{}%", stats.customer_satisfaction),
            badge: "Excellent",
            tone: BadgeTone::Info,
            icon: IconKind::TrendingUp,
        },
    ]
}

/// Shortcuts into the wider support tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    ViewTickets,
    CustomerLookup,
    Reports,
}

impl QuickAction {
    pub const ALL: [QuickAction; 3] = [
        QuickAction::ViewTickets,
        QuickAction::CustomerLookup,
        QuickAction::Reports,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuickAction::ViewTickets => "View Tickets",
            QuickAction::CustomerLookup => "Customer Lookup",
            QuickAction::Reports => "Reports",
        }
    }

    pub fn icon(self) -> IconKind {
        match self {
            QuickAction::ViewTickets => IconKind::MessageSquare,
            QuickAction::CustomerLookup => IconKind::Users,
            QuickAction::Reports => IconKind::TrendingUp,
        }
    }
}
