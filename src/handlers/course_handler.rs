use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedSession,
    errors::AppError,
    guards::{found, see_other},
    routes,
};

#[get("/catalog")]
pub async fn catalog(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let courses = state.course_service.catalog().await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[get("/courses/{course_id}")]
pub async fn course_landing(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    auth: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    let response = state.course_service.landing(&course_id, &auth.0).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/courses/{course_id}/enroll")]
pub async fn enroll(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    auth: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    state.course_service.enroll(&course_id, &auth.0).await?;
    Ok(see_other(&routes::course_entry(&course_id)))
}

/// Bare course URL: sends the student to the first lesson.
#[get("/learn/{course_id}")]
pub async fn course_entry(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    _auth: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    let target = state.course_redirect.resolve(&course_id).await?;
    Ok(found(&target))
}
