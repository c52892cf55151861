//! Checks that run before a route is served and may answer with a redirect
//! instead of content.

pub mod admin_guard;
pub mod course_redirect;
pub mod enrollment_guard;
pub mod session_guard;

use actix_web::{http::header::LOCATION, HttpResponse};

pub use admin_guard::{AdminCheck, AdminGuard};
pub use course_redirect::CourseRedirectResolver;
pub use enrollment_guard::EnrollmentGuard;

/// Outcome of a guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(String),
}

impl Navigation {
    pub fn location(&self) -> Option<&str> {
        match self {
            Navigation::Proceed => None,
            Navigation::Redirect(location) => Some(location),
        }
    }

    /// `302 Found` for a redirect, `None` when the request may proceed.
    pub fn redirect_response(&self) -> Option<HttpResponse> {
        self.location().map(found)
    }
}

pub fn found(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish()
}

/// Redirect after a form submission.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}
