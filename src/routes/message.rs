use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    flash::StatusMessage,
    response::{ApiResponse, Meta},
    state::AppState,
};

#[derive(Serialize, ToSchema)]
pub struct CurrentMessage {
    pub message: Option<StatusMessage>,
}

/// Contents of the status-message region; `null` once the hide has fired.
#[utoipa::path(
    get,
    path = "/api/message",
    responses(
        (status = 200, description = "Current status message", body = ApiResponse<CurrentMessage>)
    ),
    tag = "Messages"
)]
pub async fn current_message(State(state): State<AppState>) -> Json<ApiResponse<CurrentMessage>> {
    let data = CurrentMessage {
        message: state.flash.current(),
    };
    Json(ApiResponse::success("Status message", data, Some(Meta::empty())))
}
