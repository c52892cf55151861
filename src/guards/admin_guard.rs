use std::sync::Arc;

use crate::{
    auth::Session,
    errors::{AppError, AppResult},
    models::domain::{Profile, Role},
    repositories::ProfileRepository,
};

/// Result of looking a session up against the admin rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCheck {
    pub role: Option<Role>,
    pub email_override: bool,
}

impl AdminCheck {
    pub fn is_admin(&self) -> bool {
        self.email_override || self.role == Some(Role::Admin)
    }
}

/// Decides who sees the admin UI.
///
/// `is_admin` is advisory: it drives visibility and the client-side admin
/// route only. Writes go through `require_admin_role`, which ignores the
/// configured email and trusts the profile store alone.
pub struct AdminGuard {
    admin_email: Option<String>,
    profiles: Arc<dyn ProfileRepository>,
}

impl AdminGuard {
    pub fn new(admin_email: Option<String>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self {
            admin_email: admin_email
                .map(|email| email.trim().to_string())
                .filter(|email| !email.is_empty()),
            profiles,
        }
    }

    pub fn matches_admin_email(&self, email: &str) -> bool {
        self.admin_email
            .as_deref()
            .is_some_and(|admin| admin.eq_ignore_ascii_case(email.trim()))
    }

    pub async fn is_admin(&self, session: &Session) -> AppResult<bool> {
        if self.matches_admin_email(&session.email) {
            return Ok(true);
        }

        let profile = self.profiles.find_by_id(&session.user_id).await?;
        Ok(profile.is_some_and(|p| p.is_admin()))
    }

    /// Full lookup, used where the role itself is displayed.
    pub async fn evaluate(&self, session: &Session) -> AppResult<AdminCheck> {
        let profile = self.profiles.find_by_id(&session.user_id).await?;

        Ok(AdminCheck {
            role: profile.map(|p| p.role),
            email_override: self.matches_admin_email(&session.email),
        })
    }

    pub async fn require_admin_role(&self, session: &Session) -> AppResult<Profile> {
        match self.profiles.find_by_id(&session.user_id).await? {
            Some(profile) if profile.is_admin() => Ok(profile),
            _ => Err(AppError::Forbidden(
                "Only admins can perform this action".to_string(),
            )),
        }
    }
}
