use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login form fields, named after the form inputs.
#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form fields, named after the form inputs.
#[derive(Deserialize, Debug, ToSchema)]
pub struct RegistrationForm {
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub course: String,
}

/// Claims carried by the session cookie, mirroring what the dashboard needs
/// to greet the student.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SessionClaims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub course: String,
    pub exp: usize,
}
