use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    db::DbPool,
    dto::auth::{LoginForm, RegistrationForm, SessionClaims},
    error::{AppError, AppResult},
    middleware::session::SESSION_TTL_SECS,
    models::Student,
};

/// Insert a new student. Assumes the form already passed the registration
/// guard; enforces email uniqueness and hashes the password.
pub async fn register_student(pool: &DbPool, form: RegistrationForm) -> AppResult<Student> {
    let RegistrationForm {
        fullname,
        email,
        phone,
        password,
        course,
        ..
    } = form;

    let exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM students WHERE email = $1")
        .bind(email.as_str())
        .fetch_optional(pool)
        .await?;

    if exists.is_some() {
        return Err(AppError::BadRequest("Email already registered".to_string()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();

    let id = Uuid::new_v4();

    let student: Student = sqlx::query_as(
        r#"
        INSERT INTO students (id, full_name, email, phone, password_hash, course)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(fullname.as_str())
    .bind(email.as_str())
    .bind(phone.as_str())
    .bind(password_hash)
    .bind(course.as_str())
    .fetch_one(pool)
    .await?;

    if let Err(err) = log_audit(
        pool,
        Some(student.id),
        "student_register",
        Some("students"),
        Some(serde_json::json!({ "student_id": student.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(student)
}

/// Check credentials against the active students and mint a session token.
pub async fn login_student(pool: &DbPool, form: &LoginForm) -> AppResult<(Student, String)> {
    let student: Option<Student> =
        sqlx::query_as("SELECT * FROM students WHERE email = $1 AND status = 'active'")
            .bind(form.email.as_str())
            .fetch_optional(pool)
            .await?;

    let student = match student {
        Some(s) => s,
        None => return Err(AppError::BadRequest("Invalid email or password".into())),
    };

    let parsed_hash = PasswordHash::new(&student.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    let argon2 = Argon2::default();
    if argon2
        .verify_password(form.password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::BadRequest("Invalid email or password".into()));
    }

    let token = issue_session(&student)?;

    if let Err(err) = log_audit(
        pool,
        Some(student.id),
        "student_login",
        Some("students"),
        Some(serde_json::json!({ "student_id": student.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok((student, token))
}

/// Mint the signed session token carried by the session cookie.
pub fn issue_session(student: &Student) -> AppResult<String> {
    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))?;

    let expiration = Utc::now()
        .checked_add_signed(Duration::seconds(SESSION_TTL_SECS))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = SessionClaims {
        sub: student.id.to_string(),
        name: student.full_name.clone(),
        email: student.email.clone(),
        course: student.course.clone(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}
