use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    auth::OptionalSession,
    errors::AppError,
    guards::{found, session_guard::request_target},
    routes,
};

#[get("/courses/{course_id}/lessons/{lesson_id}")]
pub async fn lesson_detail(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    req: HttpRequest,
    session: OptionalSession,
) -> Result<HttpResponse, AppError> {
    let (course_id, lesson_id) = path.into_inner();

    let navigation = state
        .enrollment_guard
        .require_enrollment(&course_id, &request_target(&req), session.0.as_ref())
        .await?;
    if let Some(response) = navigation.redirect_response() {
        return Ok(response);
    }

    match state.lesson_service.detail(&course_id, &lesson_id).await? {
        Some(detail) => Ok(HttpResponse::Ok().json(detail)),
        None => Ok(found(&routes::course_landing(&course_id))),
    }
}
