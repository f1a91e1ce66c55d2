use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use api::SupportApi;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Notify;
use types::{DashboardStats, Error, LoginRequest, Result, Session, UserProfile};

use crate::{KeyValueStore, MemoryStorage, SessionStore};

pub fn store_with(entries: &[(&str, &str)]) -> (SessionStore, Rc<MemoryStorage>) {
    let storage = Rc::new(MemoryStorage::default());
    for (key, value) in entries {
        storage.set(key, value).unwrap();
    }
    (SessionStore::new(storage.clone()), storage)
}

pub fn admin_session() -> Session {
    Session {
        api_key: SecretString::from("tok123"),
        user: UserProfile {
            name: Some("Admin".to_string()),
            ..UserProfile::default()
        },
    }
}

pub fn sample_stats() -> DashboardStats {
    DashboardStats {
        active_tickets: 5,
        resolved_today: 3,
        avg_response_time: "2 min".to_string(),
        customer_satisfaction: 92.0,
    }
}

/// Scripted [`SupportApi`] that records what it was asked.
pub struct FakeApi {
    login: Result<Session>,
    stats: Result<DashboardStats>,
    gate: Option<Rc<Notify>>,
    pub calls: Cell<usize>,
    pub last_email: RefCell<Option<String>>,
    pub last_key: RefCell<Option<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            login: Err(Error::Transport("unscripted".into())),
            stats: Err(Error::Transport("unscripted".into())),
            gate: None,
            calls: Cell::new(0),
            last_email: RefCell::new(None),
            last_key: RefCell::new(None),
        }
    }

    pub fn login_returns(mut self, result: Result<Session>) -> Self {
        self.login = result;
        self
    }

    pub fn stats_return(mut self, result: Result<DashboardStats>) -> Self {
        self.stats = result;
        self
    }

    /// Hold every response until `gate` is notified.
    pub fn gated(mut self, gate: Rc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    async fn wait(&self) {
        self.calls.set(self.calls.get() + 1);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait(?Send)]
impl SupportApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<Session> {
        *self.last_email.borrow_mut() = Some(request.email.clone());
        self.wait().await;
        self.login.clone()
    }

    async fn dashboard_stats(&self, api_key: &SecretString) -> Result<DashboardStats> {
        *self.last_key.borrow_mut() = Some(api_key.expose_secret().to_string());
        self.wait().await;
        self.stats.clone()
    }
}
