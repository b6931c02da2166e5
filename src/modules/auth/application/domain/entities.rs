use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// UserId
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        UserId(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

//
// ──────────────────────────────────────────────────────────
// Role
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Moderator,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "moderator" => Ok(Role::Moderator),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// User
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub role: Role,
    #[serde(skip_serializing)]
    pub is_staff: bool,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin || self.is_staff
    }
}

//
// ──────────────────────────────────────────────────────────
// Field rules
// ──────────────────────────────────────────────────────────
//

pub const USERNAME_MAX_LEN: usize = 150;
pub const EMAIL_MAX_LEN: usize = 254;
pub const NAME_MAX_LEN: usize = 150;
pub const BIO_MAX_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserFieldError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("username must be at most 150 characters")]
    UsernameTooLong,
    #[error("username may only contain letters, digits and @/./+/-/_")]
    InvalidUsername,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("email must be at most 254 characters")]
    EmailTooLong,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("email must be at most 150 characters to sign in")]
    SignInEmailTooLong,
    #[error("email may only contain letters, digits and @/./+/-/_ to sign in")]
    SignInEmailCharacters,
    #[error("{0} must be at most 150 characters")]
    NameTooLong(&'static str),
    #[error("bio must be at most 500 characters")]
    BioTooLong,
}

impl UserFieldError {
    /// Request field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            UserFieldError::EmptyUsername
            | UserFieldError::UsernameTooLong
            | UserFieldError::InvalidUsername => "username",
            UserFieldError::EmptyEmail
            | UserFieldError::EmailTooLong
            | UserFieldError::InvalidEmail
            | UserFieldError::SignInEmailTooLong
            | UserFieldError::SignInEmailCharacters => "email",
            UserFieldError::NameTooLong(field) => field,
            UserFieldError::BioTooLong => "bio",
        }
    }
}

pub fn normalize_username(raw: &str) -> Result<String, UserFieldError> {
    let username = raw.trim();
    if username.is_empty() {
        return Err(UserFieldError::EmptyUsername);
    }
    if username.chars().count() > USERNAME_MAX_LEN {
        return Err(UserFieldError::UsernameTooLong);
    }
    let allowed = |c: char| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_');
    if !username.chars().all(allowed) {
        return Err(UserFieldError::InvalidUsername);
    }
    Ok(username.to_string())
}

/// Trims and lower-cases, then checks length and syntax.
pub fn normalize_email(raw: &str) -> Result<String, UserFieldError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(UserFieldError::EmptyEmail);
    }
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(UserFieldError::EmailTooLong);
    }
    if !email_address::EmailAddress::is_valid(&email) {
        return Err(UserFieldError::InvalidEmail);
    }
    Ok(email)
}

/// Email accepted for code sign-in. A first redemption provisions a user
/// whose username is the email, so it must also pass the username rules.
pub fn normalize_sign_in_email(raw: &str) -> Result<String, UserFieldError> {
    let email = normalize_email(raw)?;
    match normalize_username(&email) {
        Ok(_) => Ok(email),
        Err(UserFieldError::UsernameTooLong) => Err(UserFieldError::SignInEmailTooLong),
        Err(_) => Err(UserFieldError::SignInEmailCharacters),
    }
}

pub fn check_name(field: &'static str, value: &str) -> Result<String, UserFieldError> {
    let value = value.trim();
    if value.chars().count() > NAME_MAX_LEN {
        return Err(UserFieldError::NameTooLong(field));
    }
    Ok(value.to_string())
}

pub fn check_bio(value: &str) -> Result<String, UserFieldError> {
    if value.chars().count() > BIO_MAX_LEN {
        return Err(UserFieldError::BioTooLong);
    }
    Ok(value.to_string())
}
