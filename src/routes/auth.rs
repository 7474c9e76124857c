use axum::{
    Form,
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};

use crate::{
    audit::log_audit,
    dto::auth::{LoginForm, RegistrationForm},
    error::AppError,
    flash::{MessageKind, redirect_with},
    middleware::session::{SESSION_COOKIE, SESSION_TTL_SECS, SessionStudent},
    services::auth_service::{login_student, register_student},
    state::AppState,
    validate::{validate_login, validate_registration},
};

/// The text carried back to the form page as the `error` query parameter.
fn failure_message(err: &AppError) -> String {
    match err {
        AppError::Validation(v) => v.to_string(),
        AppError::BadRequest(msg) => msg.clone(),
        AppError::DbError(e) => format!("Database error: {e}"),
        other => other.to_string(),
    }
}

fn session_cookie(token: &str, max_age: i64) -> String {
    format!("{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age}")
}

#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the dashboard, or back to /login with an error")
    ),
    tag = "Auth"
)]
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    if let Err(err) = validate_login(&form) {
        return redirect_with("/login", MessageKind::Error, &err.to_string()).into_response();
    }

    match login_student(&state.pool, &form).await {
        Ok((student, token)) => {
            tracing::info!(student_id = %student.id, "student logged in");
            (
                AppendHeaders([(SET_COOKIE, session_cookie(&token, SESSION_TTL_SECS))]),
                Redirect::to("/dashboard"),
            )
                .into_response()
        }
        Err(err) => {
            redirect_with("/login", MessageKind::Error, &failure_message(&err)).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/register",
    request_body(content = RegistrationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to /login with a success message, or back to /register with an error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegistrationForm>,
) -> Response {
    if let Err(err) = validate_registration(&form) {
        return redirect_with("/register", MessageKind::Error, &err.to_string()).into_response();
    }

    match register_student(&state.pool, form).await {
        Ok(student) => {
            tracing::info!(student_id = %student.id, "student registered");
            redirect_with(
                "/login",
                MessageKind::Success,
                "Registration successful! Please login.",
            )
            .into_response()
        }
        Err(err) => {
            redirect_with("/register", MessageKind::Error, &failure_message(&err)).into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/logout",
    responses(
        (status = 303, description = "Clear the session and redirect home with a success message")
    ),
    tag = "Auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Result<SessionStudent, AppError>,
) -> Response {
    if let Ok(student) = session {
        if let Err(err) = log_audit(
            &state.pool,
            Some(student.student_id),
            "student_logout",
            Some("students"),
            None,
        )
        .await
        {
            tracing::warn!(error = %err, "audit log failed");
        }
    }

    (
        AppendHeaders([(SET_COOKIE, session_cookie("", 0))]),
        redirect_with("/", MessageKind::Success, "Logged out successfully"),
    )
        .into_response()
}
