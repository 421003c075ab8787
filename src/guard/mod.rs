pub mod client;
mod error;
pub mod gate;
pub mod identity;
pub mod session;
pub mod view;

pub use client::ApiClient;
pub use error::Error;
pub use gate::{DenyReason, GateController, GuardConfig, LogoutReport, Outcome};
pub use identity::{initials, Identity};
pub use session::{FileSessionStore, SessionStore};
pub use view::{DashboardView, NullView};
