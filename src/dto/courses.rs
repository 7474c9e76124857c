use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Course;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseList {
    pub items: Vec<Course>,
}
