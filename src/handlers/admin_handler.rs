use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedSession,
    errors::AppError,
    guards::found,
    models::dto::{
        request::{AdminLessonsQuery, CreateLessonRequest},
        response::ApiResponse,
    },
    routes,
};

/// Admin lesson list. Non-admins are sent back to their dashboard.
#[get("/admin/lessons")]
pub async fn admin_lessons(
    state: web::Data<AppState>,
    query: web::Query<AdminLessonsQuery>,
    auth: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    if !state.admin_guard.is_admin(&auth.0).await? {
        log::debug!("User {} is not an admin", auth.0.user_id);
        return Ok(found(routes::DASHBOARD));
    }

    let lessons = state
        .lesson_service
        .admin_list(query.course_id.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(lessons))
}

#[post("/admin/lessons")]
pub async fn create_lesson(
    state: web::Data<AppState>,
    request: web::Json<CreateLessonRequest>,
    auth: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    state.admin_guard.require_admin_role(&auth.0).await?;

    let request = request.into_inner();
    request.validate()?;

    let lesson = state.lesson_service.create(request).await?;
    Ok(HttpResponse::Created().json(ApiResponse {
        data: lesson,
        message: "Lesson created".to_string(),
    }))
}
