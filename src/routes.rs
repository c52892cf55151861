//! Navigation paths served by the application.
//!
//! Guards and handlers build every redirect target through these helpers so
//! that a redirect can never point at a route that is not registered.

use actix_web::web;
use percent_encoding::{utf8_percent_encode, AsciiSet, PercentEncode, NON_ALPHANUMERIC};

use crate::handlers;

/// Everything except RFC 3986 unreserved characters.
pub const UNRESERVED_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub const LOGIN: &str = "/login";
pub const LOGIN_RETURN_PARAM: &str = "redirect";
pub const CATALOG: &str = "/catalog";
pub const DASHBOARD: &str = "/dashboard";
pub const ADMIN_LESSONS: &str = "/admin/lessons";
pub const ME: &str = "/api/me";

/// Prefixes that require a session.
pub const PROTECTED_PREFIXES: &[&str] = &["/courses", "/learn", "/admin", DASHBOARD, ME];

fn segment(id: &str) -> PercentEncode<'_> {
    utf8_percent_encode(id, UNRESERVED_ESCAPE)
}

pub fn course_landing(course_id: &str) -> String {
    format!("/courses/{}", segment(course_id))
}

pub fn course_entry(course_id: &str) -> String {
    format!("/learn/{}", segment(course_id))
}

pub fn lesson_detail(course_id: &str, lesson_id: &str) -> String {
    format!("/courses/{}/lessons/{}", segment(course_id), segment(lesson_id))
}

pub fn exam(course_id: &str) -> String {
    format!("/courses/{}/exam", segment(course_id))
}

pub fn certificate(course_id: &str) -> String {
    format!("/courses/{}/certificate", segment(course_id))
}

/// Registers every handler. Shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::health_check)
        .service(handlers::health_check_ready)
        .service(handlers::login_view)
        .service(handlers::catalog)
        .service(handlers::dashboard)
        .service(handlers::me)
        .service(handlers::course_entry)
        .service(handlers::enroll)
        .service(handlers::lesson_detail)
        .service(handlers::start_exam)
        .service(handlers::submit_exam)
        .service(handlers::certificate)
        .service(handlers::course_landing)
        .service(handlers::admin_lessons)
        .service(handlers::create_lesson);
}
