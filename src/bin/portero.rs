use anyhow::Result;
use portero::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let action = start()?;

    // Handle the action
    match action {
        Action::Check {
            config,
            session_file,
        } => {
            if !actions::check::handle(config, session_file).await? {
                std::process::exit(1);
            }
        }
        Action::Logout {
            config,
            session_file,
        } => actions::logout::handle(config, session_file).await?,
    }

    Ok(())
}
