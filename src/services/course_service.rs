use crate::{
    db::DbPool,
    dto::courses::CourseList,
    error::AppResult,
    models::Course,
    response::{ApiResponse, Meta},
};

/// Active courses, ordered by name. The listing is bounded, so no pagination.
pub async fn list_courses(pool: &DbPool) -> AppResult<ApiResponse<CourseList>> {
    let items: Vec<Course> =
        sqlx::query_as("SELECT * FROM courses WHERE status = 'active' ORDER BY course_name")
            .fetch_all(pool)
            .await?;

    let total = items.len() as i64;
    let data = CourseList { items };
    Ok(ApiResponse::success("Courses", data, Some(Meta::count(total))))
}
