//! Identity returned by `GET /api/auth/me/` and the admin predicate derived
//! from it. Fetched fresh on every check, never persisted.

use serde::Deserialize;

const FALLBACK_NAME: &str = "Admin";
const FALLBACK_ROLE: &str = "admin";
const FALLBACK_INITIAL: char = 'A';

/// Principal description from the identity endpoint. Every field is
/// optional; absent fields count against the caller.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identity {
    /// Admin predicate: an OR across four independent signals, any one of
    /// which suffices.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self.user_type.as_deref(), Some("admin" | "staff"))
            || self.is_staff
            || self.is_superuser
    }

    /// Display name: first non-empty of full name, username, email.
    #[must_use]
    pub fn display_name(&self) -> String {
        [&self.full_name, &self.username, &self.email]
            .into_iter()
            .flatten()
            .map(|name| name.trim())
            .find(|name| !name.is_empty())
            .unwrap_or(FALLBACK_NAME)
            .to_string()
    }

    /// Role label for the dashboard header, never blank.
    #[must_use]
    pub fn role_label(&self) -> String {
        self.user_type
            .as_deref()
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .unwrap_or(FALLBACK_ROLE)
            .to_string()
    }
}

/// Two-letter initials: first letter of the first two whitespace-separated
/// name tokens, uppercased. A missing second token contributes nothing; a
/// name with no letters at all falls back to `"A"`.
#[must_use]
pub fn initials(name: &str) -> String {
    let mut letters = name
        .split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next());

    let Some(first) = letters.next() else {
        return FALLBACK_INITIAL.to_string();
    };

    std::iter::once(first)
        .chain(letters.next())
        .collect::<String>()
        .to_uppercase()
}
