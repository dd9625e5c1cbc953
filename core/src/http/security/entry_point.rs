//! Authentication entry point selection.
//!
//! Many entry point candidates may be registered; the exception translation
//! filter needs exactly one. Selection is by the reserved form-login
//! identity and nothing else: there is no voting and no "pick the only one"
//! shortcut. A candidate set without the reserved identity fails assembly
//! even when a single otherwise-valid candidate exists, because guessing
//! among entry points is worse than refusing to start.
//!
//! # Spring Security Equivalent
//! `AuthenticationEntryPoint` and the selection performed by
//! `HttpSecurityConfigPostProcessor`

use std::sync::Arc;

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use crate::http::error::SecurityConfigError;
use crate::http::security::ids;
use crate::http::security::registry::SecurityRegistry;

/// Initiates authentication when an unauthenticated request is denied.
pub trait AuthenticationEntryPoint: Send + Sync {
    /// Commences the authentication scheme, e.g. by redirecting to a login
    /// page or challenging the client.
    fn commence(&self, req: &HttpRequest) -> HttpResponse;
}

/// Entry point that redirects to a form login page.
///
/// # Spring Security Equivalent
/// `LoginUrlAuthenticationEntryPoint`
pub struct FormLoginEntryPoint {
    login_page: String,
}

impl FormLoginEntryPoint {
    pub fn new(login_page: &str) -> Self {
        FormLoginEntryPoint {
            login_page: login_page.to_string(),
        }
    }

    pub fn login_page(&self) -> &str {
        &self.login_page
    }
}

impl AuthenticationEntryPoint for FormLoginEntryPoint {
    fn commence(&self, _req: &HttpRequest) -> HttpResponse {
        HttpResponse::Found()
            .append_header((header::LOCATION, self.login_page.clone()))
            .finish()
    }
}

/// The exception translation filter's assembled configuration: the one
/// active entry point. Immutable once produced.
#[derive(Clone)]
pub struct ExceptionTranslationConfig {
    entry_point_id: String,
    entry_point: Arc<dyn AuthenticationEntryPoint>,
}

impl std::fmt::Debug for ExceptionTranslationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExceptionTranslationConfig")
            .field("entry_point_id", &self.entry_point_id)
            .finish_non_exhaustive()
    }
}

impl ExceptionTranslationConfig {
    pub fn entry_point_id(&self) -> &str {
        &self.entry_point_id
    }

    pub fn entry_point(&self) -> &Arc<dyn AuthenticationEntryPoint> {
        &self.entry_point
    }
}

/// Selects the active entry point from the registered candidates.
///
/// Fails with [`SecurityConfigError::NoEntryPoints`] when no candidates
/// exist and [`SecurityConfigError::EntryPointUnresolved`] when none of
/// them carries the reserved form-login identity.
pub fn resolve_entry_point(
    registry: &SecurityRegistry,
) -> Result<ExceptionTranslationConfig, SecurityConfigError> {
    info!("selecting the authentication entry point for exception translation");

    let candidates = registry.entry_points();

    if candidates.is_empty() {
        return Err(SecurityConfigError::NoEntryPoints);
    }

    let entry_point = candidates
        .get(ids::FORM_LOGIN_ENTRY_POINT)
        .cloned()
        .ok_or(SecurityConfigError::EntryPointUnresolved)?;

    info!(id = ids::FORM_LOGIN_ENTRY_POINT, "main authentication entry point selected");

    Ok(ExceptionTranslationConfig {
        entry_point_id: ids::FORM_LOGIN_ENTRY_POINT.to_string(),
        entry_point,
    })
}
