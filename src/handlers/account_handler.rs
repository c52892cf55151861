use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AuthenticatedSession, OptionalSession},
    errors::AppError,
    guards::{found, session_guard::sanitize_return_path},
    models::dto::{
        request::LoginQuery,
        response::{LoginViewResponse, MeResponse},
    },
};

/// Login view. Signing in happens at the auth provider; this only tells the
/// client where to return afterwards.
#[get("/login")]
pub async fn login_view(
    query: web::Query<LoginQuery>,
    session: OptionalSession,
) -> HttpResponse {
    let redirect = sanitize_return_path(query.redirect.as_deref());

    if session.0.is_some() {
        return found(&redirect);
    }

    HttpResponse::Ok().json(LoginViewResponse {
        login_required: true,
        redirect,
    })
}

#[get("/dashboard")]
pub async fn dashboard(
    state: web::Data<AppState>,
    auth: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    let response = state.course_service.dashboard(&auth.0).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Who the caller is and whether the admin UI should be shown.
#[get("/api/me")]
pub async fn me(
    state: web::Data<AppState>,
    auth: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    let check = state.admin_guard.evaluate(&auth.0).await?;

    Ok(HttpResponse::Ok().json(MeResponse {
        user_id: auth.0.user_id.clone(),
        email: auth.0.email.clone(),
        role: check.role,
        is_admin: check.is_admin(),
    }))
}
