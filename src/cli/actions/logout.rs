use crate::guard::{FileSessionStore, GateController, GuardConfig, NullView};
use anyhow::Result;
use std::path::PathBuf;
use tracing::warn;

/// Handle the logout action. The local session is cleared even when the
/// server-side call fails; either way the caller lands on the login page.
pub async fn handle(config: GuardConfig, session_file: PathBuf) -> Result<()> {
    let store = FileSessionStore::new(session_file);
    let mut gate = GateController::new(config, store, NullView)?;

    let report = gate.logout().await?;
    if !report.remote_cleared {
        warn!("server-side logout failed, local session cleared anyway");
    }

    println!("{}", gate.login_url());

    Ok(())
}
