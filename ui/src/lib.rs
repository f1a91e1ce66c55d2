//! Screen logic and shared components for the support admin front-end.
//!
//! Everything that decides *what* happens (routing, storage, request
//! bookkeeping) lives here as plain Rust so it can be tested without a
//! browser. The `web` crate only wires it to the router and the DOM.

pub mod components;
pub mod dashboard;
pub mod login;
mod navigation;
mod request;
mod session;
pub mod toast;

use std::rc::Rc;

pub use navigation::{Effect, Screen, entry_screen};
pub use request::{RequestTracker, Ticket};
pub use session::{KeyValueStore, MemoryStorage, SessionStore};
#[cfg(feature = "web")]
pub use session::BrowserStorage;

/// Shared handle to the support API, provided through context.
pub type Api = Rc<dyn api::SupportApi>;

#[cfg(test)]
pub(crate) mod testing;
