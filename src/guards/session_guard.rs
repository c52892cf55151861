use actix_web::HttpRequest;
use percent_encoding::utf8_percent_encode;

use crate::{
    auth::Session,
    guards::Navigation,
    routes::{DASHBOARD, LOGIN, LOGIN_RETURN_PARAM, PROTECTED_PREFIXES, UNRESERVED_ESCAPE},
};

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

/// True when `path` is one of the protected prefixes or lies beneath one.
pub fn is_protected(path: &str) -> bool {
    let path = strip_query(path);

    PROTECTED_PREFIXES.iter().any(|prefix| match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    })
}

/// Login location carrying `original` as the return parameter.
pub fn login_redirect(original: &str) -> String {
    format!(
        "{}?{}={}",
        LOGIN,
        LOGIN_RETURN_PARAM,
        utf8_percent_encode(original, UNRESERVED_ESCAPE)
    )
}

/// Path and query as the client sent them, for use as a return path.
pub fn request_target(req: &HttpRequest) -> String {
    req.uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.path().to_string())
}

pub fn check(path_and_query: &str, session: Option<&Session>) -> Navigation {
    if session.is_none() && is_protected(path_and_query) {
        return Navigation::Redirect(login_redirect(path_and_query));
    }
    Navigation::Proceed
}

/// Keeps a return path only when it stays on this site.
pub fn sanitize_return_path(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path.to_string()
        }
        _ => DASHBOARD.to_string(),
    }
}
