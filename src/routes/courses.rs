use axum::{Json, extract::State};

use crate::{
    dto::courses::CourseList,
    error::AppResult,
    response::ApiResponse,
    services::course_service,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "Active courses", body = ApiResponse<CourseList>)
    ),
    tag = "Courses"
)]
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CourseList>>> {
    let resp = course_service::list_courses(&state.pool).await?;
    Ok(Json(resp))
}
