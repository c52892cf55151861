use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::{AuthenticatedSession, Session},
    errors::AppError,
    guards::{found, see_other, session_guard::request_target},
    models::dto::request::SubmitExamRequest,
    services::{CertificateOutcome, ExamStart, ExamSubmission},
};

async fn enrollment_redirect(
    state: &AppState,
    course_id: &str,
    req: &HttpRequest,
    session: &Session,
) -> Result<Option<HttpResponse>, AppError> {
    let navigation = state
        .enrollment_guard
        .require_enrollment(course_id, &request_target(req), Some(session))
        .await?;
    Ok(navigation.redirect_response())
}

#[get("/courses/{course_id}/exam")]
pub async fn start_exam(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    req: HttpRequest,
    auth: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    if let Some(response) = enrollment_redirect(&state, &course_id, &req, &auth.0).await? {
        return Ok(response);
    }

    match state.exam_service.start(&course_id).await? {
        ExamStart::Redirect(location) => Ok(found(&location)),
        ExamStart::Take(exam) => Ok(HttpResponse::Ok().json(exam)),
    }
}

#[post("/courses/{course_id}/exam")]
pub async fn submit_exam(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    request: web::Json<SubmitExamRequest>,
    req: HttpRequest,
    auth: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    if let Some(response) = enrollment_redirect(&state, &course_id, &req, &auth.0).await? {
        return Ok(response);
    }

    let request = request.into_inner();
    request.validate()?;

    match state
        .exam_service
        .submit(&course_id, &auth.0, &request.answers)
        .await?
    {
        ExamSubmission::Redirect(location) => Ok(see_other(&location)),
        ExamSubmission::Failed(failed) => Ok(HttpResponse::Ok().json(failed)),
    }
}

#[get("/courses/{course_id}/certificate")]
pub async fn certificate(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    req: HttpRequest,
    auth: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    if let Some(response) = enrollment_redirect(&state, &course_id, &req, &auth.0).await? {
        return Ok(response);
    }

    match state.exam_service.certificate(&course_id, &auth.0).await? {
        CertificateOutcome::Redirect(location) => Ok(found(&location)),
        CertificateOutcome::Issued(certificate) => Ok(HttpResponse::Ok().json(certificate)),
    }
}
