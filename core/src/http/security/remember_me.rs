//! Remember-me services and their wiring into authentication filters.
//!
//! Remember-me is optional by contract: zero registered services is a
//! valid, silent state. When at least one is registered, the first
//! discovered instance is shared by every authentication-processing filter;
//! extra registrations are ignored without error, because remember-me is an
//! enhancement rather than safety-critical routing.
//!
//! # Spring Security Equivalent
//! `RememberMeServices` / `TokenBasedRememberMeServices` and the wiring in
//! `HttpSecurityConfigPostProcessor`

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use actix_web::cookie::Cookie;
use base64::prelude::*;
use rand::Rng;
use tracing::{debug, info};

use crate::http::security::filter::{FilterCapability, FilterRegistration};
use crate::http::security::registry::SecurityRegistry;
use crate::http::security::user_details::UserDetailsService;

/// Persistent-login collaborator used by authentication-processing filters.
pub trait RememberMeServices: Send + Sync {
    /// Issues the remember-me cookie after a successful login.
    fn login_success(&self, username: &str) -> Cookie<'static>;

    /// Validates a presented cookie value and returns the username it
    /// vouches for.
    fn auto_login(&self, cookie_value: &str) -> Option<String>;

    /// A cookie that clears the remember-me token.
    fn logout(&self) -> Cookie<'static>;
}

// =============================================================================
// Token-Based Implementation
// =============================================================================

/// Configuration for [`TokenBasedRememberMeServices`].
#[derive(Clone)]
pub struct RememberMeConfig {
    /// Secret key for token signing
    key: String,
    /// Token validity duration
    token_validity: Duration,
    /// Cookie name
    cookie_name: String,
    /// Cookie path
    cookie_path: String,
    /// Cookie secure flag (HTTPS only)
    cookie_secure: bool,
}

impl RememberMeConfig {
    pub fn new(key: &str) -> Self {
        RememberMeConfig {
            key: key.to_string(),
            token_validity: Duration::from_secs(14 * 24 * 60 * 60), // 14 days
            cookie_name: "remember-me".to_string(),
            cookie_path: "/".to_string(),
            cookie_secure: true,
        }
    }

    /// A configuration with a randomly generated signing key, for setups
    /// that do not need tokens to survive a restart.
    pub fn with_random_key() -> Self {
        let mut rng = rand::thread_rng();
        let bytes: [u8; 32] = rng.gen();
        Self::new(&BASE64_STANDARD.encode(bytes))
    }

    pub fn token_validity_days(mut self, days: u64) -> Self {
        self.token_validity = Duration::from_secs(days * 24 * 60 * 60);
        self
    }

    pub fn token_validity_seconds(mut self, seconds: u64) -> Self {
        self.token_validity = Duration::from_secs(seconds);
        self
    }

    pub fn cookie_name(mut self, name: &str) -> Self {
        self.cookie_name = name.to_string();
        self
    }

    pub fn cookie_path(mut self, path: &str) -> Self {
        self.cookie_path = path.to_string();
        self
    }

    pub fn cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    pub fn get_cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

/// Remember-me token: `base64(username:expiry:signature)` where the
/// signature covers username and expiry under the configured key.
#[derive(Debug, Clone)]
pub struct RememberMeToken {
    pub username: String,
    /// Expiry, seconds since the UNIX epoch
    pub expiry: u64,
    pub signature: String,
}

impl RememberMeToken {
    pub fn new(username: &str, validity: Duration, key: &str) -> Self {
        let expiry = now_secs() + validity.as_secs();
        let signature = Self::compute_signature(username, expiry, key);

        RememberMeToken {
            username: username.to_string(),
            expiry,
            signature,
        }
    }

    fn compute_signature(username: &str, expiry: u64, key: &str) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        format!("{}:{}:{}", username, expiry, key).hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }

    pub fn encode(&self) -> String {
        let data = format!("{}:{}:{}", self.username, self.expiry, self.signature);
        BASE64_STANDARD.encode(data.as_bytes())
    }

    pub fn decode(encoded: &str) -> Option<Self> {
        let decoded = BASE64_STANDARD.decode(encoded).ok()?;
        let data = String::from_utf8(decoded).ok()?;

        let parts: Vec<&str> = data.splitn(3, ':').collect();
        if parts.len() != 3 {
            return None;
        }

        Some(RememberMeToken {
            username: parts[0].to_string(),
            expiry: parts[1].parse().ok()?,
            signature: parts[2].to_string(),
        })
    }

    pub fn validate(&self, key: &str) -> bool {
        if self.is_expired() {
            return false;
        }

        self.signature == Self::compute_signature(&self.username, self.expiry, key)
    }

    pub fn is_expired(&self) -> bool {
        now_secs() > self.expiry
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Token-based remember-me: a signed, expiring token in a cookie.
///
/// When constructed with a [`UserDetailsService`], `auto_login` also
/// requires the token's user to still exist, so removed accounts cannot
/// ride an old cookie back in.
pub struct TokenBasedRememberMeServices {
    config: RememberMeConfig,
    user_details: Option<Arc<dyn UserDetailsService>>,
}

impl TokenBasedRememberMeServices {
    pub fn new(config: RememberMeConfig) -> Self {
        TokenBasedRememberMeServices {
            config,
            user_details: None,
        }
    }

    pub fn with_user_details(mut self, user_details: Arc<dyn UserDetailsService>) -> Self {
        self.user_details = Some(user_details);
        self
    }

    pub fn config(&self) -> &RememberMeConfig {
        &self.config
    }

    fn create_cookie(&self, value: String, max_age_secs: i64) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.config.cookie_name.clone(), value)
            .path(self.config.cookie_path.clone())
            .max_age(actix_web::cookie::time::Duration::seconds(max_age_secs))
            .http_only(true);

        if self.config.cookie_secure {
            cookie = cookie.secure(true);
        }

        cookie.finish()
    }
}

impl RememberMeServices for TokenBasedRememberMeServices {
    fn login_success(&self, username: &str) -> Cookie<'static> {
        let token = RememberMeToken::new(username, self.config.token_validity, &self.config.key);
        self.create_cookie(token.encode(), self.config.token_validity.as_secs() as i64)
    }

    fn auto_login(&self, cookie_value: &str) -> Option<String> {
        let token = RememberMeToken::decode(cookie_value)?;

        if !token.validate(&self.config.key) {
            return None;
        }

        if let Some(user_details) = &self.user_details {
            if user_details.load_user(&token.username).is_none() {
                debug!(username = %token.username, "remember-me token for unknown user rejected");
                return None;
            }
        }

        Some(token.username)
    }

    fn logout(&self) -> Cookie<'static> {
        self.create_cookie(String::new(), 0)
    }
}

// =============================================================================
// Auxiliary Wirer
// =============================================================================

/// An authentication-processing filter paired with the remember-me
/// services it should use, if any. Immutable once assembled.
#[derive(Clone)]
pub struct ConfiguredAuthenticationFilter {
    registration: FilterRegistration,
    remember_me: Option<Arc<dyn RememberMeServices>>,
}

impl std::fmt::Debug for ConfiguredAuthenticationFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguredAuthenticationFilter")
            .field("registration", &self.registration)
            .field("has_remember_me", &self.remember_me.is_some())
            .finish_non_exhaustive()
    }
}

impl ConfiguredAuthenticationFilter {
    pub fn id(&self) -> &str {
        self.registration.id()
    }

    pub fn registration(&self) -> &FilterRegistration {
        &self.registration
    }

    pub fn remember_me_services(&self) -> Option<&Arc<dyn RememberMeServices>> {
        self.remember_me.as_ref()
    }
}

/// Pairs every authentication-processing filter with the first-registered
/// remember-me services. Best-effort: no services means the filters simply
/// operate without one.
pub fn wire_authentication_filters(registry: &SecurityRegistry) -> Vec<ConfiguredAuthenticationFilter> {
    let remember_me = registry
        .first_remember_me_services()
        .map(|(id, services)| (id.to_string(), Arc::clone(services)));

    if registry.remember_me_service_count() > 1 {
        if let Some((id, _)) = &remember_me {
            debug!(
                selected = %id,
                total = registry.remember_me_service_count(),
                "multiple remember-me services registered, using the first"
            );
        }
    }

    registry
        .filters()
        .iter()
        .filter(|reg| reg.has_capability(FilterCapability::AuthenticationProcessing))
        .map(|reg| {
            if let Some((id, services)) = &remember_me {
                info!(services = %id, filter = %reg.id(), "using remember-me services with filter");
                ConfiguredAuthenticationFilter {
                    registration: reg.clone(),
                    remember_me: Some(Arc::clone(services)),
                }
            } else {
                ConfiguredAuthenticationFilter {
                    registration: reg.clone(),
                    remember_me: None,
                }
            }
        })
        .collect()
}
