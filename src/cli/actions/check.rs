use crate::guard::{DashboardView, FileSessionStore, GateController, GuardConfig, Outcome};
use anyhow::Result;
use std::path::PathBuf;
use tracing::warn;

/// Prints the dashboard header fields as the gate populates them.
struct TerminalView;

impl DashboardView for TerminalView {
    fn set_user_name(&mut self, name: &str) {
        println!("signed in as: {name}");
    }

    fn set_user_role(&mut self, role: &str) {
        println!("role: {role}");
    }

    fn set_user_initials(&mut self, initials: &str) {
        println!("initials: {initials}");
    }
}

/// Handle the check action. Returns whether access was granted; on denial
/// the login URL is printed for the caller to navigate to.
pub async fn handle(config: GuardConfig, session_file: PathBuf) -> Result<bool> {
    let store = FileSessionStore::new(session_file);
    let mut gate = GateController::new(config, store, TerminalView)?;

    match gate.check().await {
        Outcome::Granted(_) => Ok(true),
        Outcome::RedirectToLogin(reason) => {
            warn!("redirecting to login: {reason:?}");
            println!("{}", gate.login_url());
            Ok(false)
        }
    }
}
