use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};
use std::path::PathBuf;

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("portero")
        .about("Admin dashboard session guard")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("api-url")
                .short('a')
                .long("api-url")
                .help("Base URL of the backend API")
                .default_value("http://127.0.0.1:8000")
                .env("PORTERO_API_URL"),
        )
        .arg(
            Arg::new("login-url")
                .short('l')
                .long("login-url")
                .help("Login page the guard redirects to on denial")
                .default_value("/auth.html")
                .env("PORTERO_LOGIN_URL"),
        )
        .arg(
            Arg::new("session-file")
                .short('s')
                .long("session-file")
                .help("Path of the stored session (access and refresh tokens)")
                .default_value("portero-session.json")
                .env("PORTERO_SESSION_FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("PORTERO_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(Command::new("check").about("Validate the stored session and admin privilege"))
        .subcommand(Command::new("logout").about("Invalidate the session remotely and locally"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "portero");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Admin dashboard session guard"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_check_urls_and_session_file() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "portero",
            "--api-url",
            "https://api.example.com",
            "--login-url",
            "https://example.com/auth.html",
            "--session-file",
            "/tmp/session.json",
        ]);

        assert_eq!(
            matches.get_one::<String>("api-url").map(|s| s.to_string()),
            Some("https://api.example.com".to_string())
        );
        assert_eq!(
            matches
                .get_one::<String>("login-url")
                .map(|s| s.to_string()),
            Some("https://example.com/auth.html".to_string())
        );
        assert_eq!(
            matches.get_one::<PathBuf>("session-file").cloned(),
            Some(PathBuf::from("/tmp/session.json"))
        );
    }

    #[test]
    fn test_check_defaults() {
        let command = new();
        let matches = command.get_matches_from(vec!["portero"]);

        assert_eq!(
            matches.get_one::<String>("api-url").map(|s| s.to_string()),
            Some("http://127.0.0.1:8000".to_string())
        );
        assert_eq!(
            matches
                .get_one::<String>("login-url")
                .map(|s| s.to_string()),
            Some("/auth.html".to_string())
        );
        assert_eq!(
            matches.get_one::<PathBuf>("session-file").cloned(),
            Some(PathBuf::from("portero-session.json"))
        );
        assert_eq!(matches.subcommand_name(), None);
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("PORTERO_API_URL", Some("https://api.example.com")),
                ("PORTERO_LOGIN_URL", Some("https://example.com/login")),
                ("PORTERO_SESSION_FILE", Some("/var/lib/portero/session.json")),
                ("PORTERO_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["portero"]);
                assert_eq!(
                    matches.get_one::<String>("api-url").map(|s| s.to_string()),
                    Some("https://api.example.com".to_string())
                );
                assert_eq!(
                    matches
                        .get_one::<String>("login-url")
                        .map(|s| s.to_string()),
                    Some("https://example.com/login".to_string())
                );
                assert_eq!(
                    matches.get_one::<PathBuf>("session-file").cloned(),
                    Some(PathBuf::from("/var/lib/portero/session.json"))
                );
                assert_eq!(matches.get_one::<u8>("verbosity").map(|s| *s), Some(2));
            },
        );
    }

    #[test]
    fn test_check_subcommands() {
        for subcommand in ["check", "logout"] {
            let command = new();
            let matches = command.get_matches_from(vec!["portero", subcommand]);
            assert_eq!(matches.subcommand_name(), Some(subcommand));
        }
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("PORTERO_LOG_LEVEL", Some(level))], || {
                let command = new();
                let matches = command.get_matches_from(vec!["portero"]);
                assert_eq!(
                    matches.get_one::<u8>("verbosity").map(|s| *s),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("PORTERO_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["portero".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let command = new();

                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>("verbosity").map(|s| *s),
                    Some(index as u8)
                );
            });
        }
    }
}
