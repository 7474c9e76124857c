use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppError,
    flash::{FlashParams, StatusMessage, bootstrap},
    middleware::session::SessionStudent,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Payload returned by the public pages: which page loaded and the status
/// message the load surfaced, if any.
#[derive(Serialize, ToSchema)]
pub struct PageData {
    pub page: String,
    pub message: Option<StatusMessage>,
}

#[derive(Serialize, ToSchema)]
pub struct DashboardData {
    pub student_id: Uuid,
    pub name: String,
    pub email: String,
    pub course: String,
    pub message: Option<StatusMessage>,
}

fn page_payload(
    state: &AppState,
    params: &FlashParams,
    page: &'static str,
) -> Json<ApiResponse<PageData>> {
    bootstrap(&state.flash, params);
    let data = PageData {
        page: page.to_string(),
        message: state.flash.current(),
    };
    Json(ApiResponse::success(page, data, Some(Meta::empty())))
}

#[utoipa::path(
    get,
    path = "/",
    params(FlashParams),
    responses(
        (status = 200, description = "Home page payload", body = ApiResponse<PageData>)
    ),
    tag = "Pages"
)]
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> Json<ApiResponse<PageData>> {
    page_payload(&state, &params, "home")
}

#[utoipa::path(
    get,
    path = "/login",
    params(FlashParams),
    responses(
        (status = 200, description = "Login page payload", body = ApiResponse<PageData>)
    ),
    tag = "Pages"
)]
pub async fn login_page(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> Json<ApiResponse<PageData>> {
    page_payload(&state, &params, "login")
}

#[utoipa::path(
    get,
    path = "/register",
    params(FlashParams),
    responses(
        (status = 200, description = "Registration page payload", body = ApiResponse<PageData>)
    ),
    tag = "Pages"
)]
pub async fn register_page(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> Json<ApiResponse<PageData>> {
    page_payload(&state, &params, "register")
}

#[utoipa::path(
    get,
    path = "/dashboard",
    params(FlashParams),
    responses(
        (status = 200, description = "Dashboard payload", body = ApiResponse<DashboardData>),
        (status = 303, description = "Redirect to the login page without a session")
    ),
    tag = "Pages"
)]
pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
    session: Result<SessionStudent, AppError>,
) -> Response {
    let student = match session {
        Ok(student) => student,
        Err(_) => return Redirect::to("/login").into_response(),
    };

    bootstrap(&state.flash, &params);
    let data = DashboardData {
        student_id: student.student_id,
        name: student.name,
        email: student.email,
        course: student.course,
        message: state.flash.current(),
    };

    Json(ApiResponse::success("dashboard", data, Some(Meta::empty()))).into_response()
}
