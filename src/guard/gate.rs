//! The gate itself: one pass over token presence, identity, and the admin
//! predicate, collapsing every failure into a login redirect. No error ever
//! reaches the end user as anything but the login page.

use crate::guard::{
    client::ApiClient, identity::initials, DashboardView, Error, Identity, SessionStore,
};
use tracing::{debug, info, warn};

const DEFAULT_IDENTITY_PATH: &str = "/api/auth/me/";
const DEFAULT_LOGOUT_PATH: &str = "/api/auth/logout/";

/// Guard settings. One configurable guard covers every deployment instead of
/// near-duplicate copies with hardcoded URLs.
#[derive(Clone, Debug)]
pub struct GuardConfig {
    api_url: String,
    login_url: String,
    identity_path: String,
    logout_path: String,
}

impl GuardConfig {
    #[must_use]
    pub fn new(api_url: impl Into<String>, login_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            login_url: login_url.into(),
            identity_path: DEFAULT_IDENTITY_PATH.to_string(),
            logout_path: DEFAULT_LOGOUT_PATH.to_string(),
        }
    }

    #[must_use]
    pub fn with_identity_path(mut self, path: impl Into<String>) -> Self {
        self.identity_path = path.into();
        self
    }

    #[must_use]
    pub fn with_logout_path(mut self, path: impl Into<String>) -> Self {
        self.logout_path = path.into();
        self
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    #[must_use]
    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    #[must_use]
    pub fn identity_path(&self) -> &str {
        &self.identity_path
    }

    #[must_use]
    pub fn logout_path(&self) -> &str {
        &self.logout_path
    }
}

/// Why access was denied. Callers get the full picture in logs; the user
/// only ever sees the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
    /// No stored token; checked before any network call.
    TokenMissing,
    /// The identity call failed or returned no usable body.
    IdentityCheckFailed,
    /// The identity is valid but not an admin.
    NotAdmin,
}

/// Result of a gate pass.
#[derive(Debug)]
pub enum Outcome {
    Granted(Identity),
    RedirectToLogin(DenyReason),
}

/// What happened during logout. The local session is cleared regardless.
#[derive(Clone, Copy, Debug)]
pub struct LogoutReport {
    pub remote_cleared: bool,
}

pub struct GateController<S, V> {
    store: S,
    view: V,
    client: ApiClient,
    config: GuardConfig,
}

impl<S: SessionStore, V: DashboardView> GateController<S, V> {
    /// # Errors
    /// Returns an error if the configured API URL is invalid.
    pub fn new(config: GuardConfig, store: S, view: V) -> Result<Self, Error> {
        let client = ApiClient::new(config.api_url())?;

        Ok(Self {
            store,
            view,
            client,
            config,
        })
    }

    #[must_use]
    pub fn login_url(&self) -> &str {
        self.config.login_url()
    }

    /// Run the access check once. Fail closed: token missing, identity call
    /// failure, and a non-admin identity all end in a login redirect.
    pub async fn check(&mut self) -> Outcome {
        let Some(token) = self.store.access_token() else {
            warn!("no access token in session store");
            return Outcome::RedirectToLogin(DenyReason::TokenMissing);
        };

        let body = match self
            .client
            .get(self.config.identity_path(), Some(&token))
            .await
        {
            Ok(body) => body,
            Err(err) => {
                warn!("identity check failed: {err}");
                return Outcome::RedirectToLogin(DenyReason::IdentityCheckFailed);
            }
        };

        let Some(identity) = body.and_then(|value| serde_json::from_value::<Identity>(value).ok())
        else {
            warn!("identity endpoint returned no usable body");
            return Outcome::RedirectToLogin(DenyReason::IdentityCheckFailed);
        };

        if !identity.is_admin() {
            // A stale non-admin token would repeat this failed check on
            // every load, so drop it before redirecting.
            if let Err(err) = self.store.clear() {
                warn!("could not clear session after denial: {err}");
            }
            warn!("access denied: not an admin account");
            return Outcome::RedirectToLogin(DenyReason::NotAdmin);
        }

        let name = identity.display_name();
        self.view.set_user_name(&name);
        self.view.set_user_role(&identity.role_label());
        self.view.set_user_initials(&initials(&name));

        info!("admin access granted to {name}");

        Outcome::Granted(identity)
    }

    /// Invalidate the session: best-effort POST to the logout endpoint, then
    /// an unconditional local clear. A failing server never blocks logout.
    ///
    /// # Errors
    /// Returns an error only if clearing the local store fails.
    pub async fn logout(&mut self) -> Result<LogoutReport, Error> {
        let token = self.store.access_token();

        let remote_cleared = match self
            .client
            .post(self.config.logout_path(), token.as_ref())
            .await
        {
            Ok(_) => true,
            Err(err) => {
                debug!("logout endpoint failed, clearing locally anyway: {err}");
                false
            }
        };

        self.store.clear()?;
        info!("session cleared");

        Ok(LogoutReport { remote_cleared })
    }
}
