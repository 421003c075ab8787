use crate::cli::actions::Action;
use crate::guard::GuardConfig;
use anyhow::Result;
use std::path::PathBuf;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let api_url = matches
        .get_one("api-url")
        .map(|s: &String| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("missing required argument: --api-url"))?;

    let login_url = matches
        .get_one("login-url")
        .map(|s: &String| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("missing required argument: --login-url"))?;

    let session_file = matches
        .get_one::<PathBuf>("session-file")
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("missing required argument: --session-file"))?;

    let config = GuardConfig::new(api_url, login_url);

    // "check" is the page-load gate and the default action
    Ok(match matches.subcommand_name() {
        Some("logout") => Action::Logout {
            config,
            session_file,
        },
        _ => Action::Check {
            config,
            session_file,
        },
    })
}
