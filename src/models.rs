use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub course: String,
    pub registration_date: DateTime<Utc>,
    pub status: String,
}

/// Wire format keeps the camelCase keys the portal's course listing has
/// always served.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "courseId")]
    pub id: Uuid,
    pub course_name: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub mode: Option<String>,
    pub certification: Option<String>,
    #[serde(skip_serializing)]
    pub status: String,
}
