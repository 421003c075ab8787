pub mod check;
pub mod logout;

use crate::guard::GuardConfig;
use std::path::PathBuf;

/// Actions resolved from the command line
#[derive(Debug)]
pub enum Action {
    Check {
        config: GuardConfig,
        session_file: PathBuf,
    },
    Logout {
        config: GuardConfig,
        session_file: PathBuf,
    },
}
