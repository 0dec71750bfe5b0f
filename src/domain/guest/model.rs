//! Guest domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Manager,
    Guest,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Guest => "guest",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "admin" => Self::Admin,
            "manager" => Self::Manager,
            _ => Self::Guest,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registered guest account
#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    /// Unique guest ID (UUID v4)
    pub id: String,
    /// Email, doubles as the login name
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// National personal number, exactly 11 digits
    pub personal_number: String,
    pub phone_number: String,
    /// bcrypt hash of the account password
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Guest {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        personal_number: impl Into<String>,
        phone_number: impl Into<String>,
        password_hash: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            personal_number: personal_number.into(),
            phone_number: phone_number.into(),
            password_hash: password_hash.into(),
            role,
            is_active: true,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_guest_is_active_with_guest_role() {
        let g = Guest::new(
            "ana@example.com",
            "Ana",
            "Kalandadze",
            "12345678901",
            "+995555123456",
            "$2b$12$hash",
            UserRole::Guest,
        );
        assert!(g.is_active);
        assert_eq!(g.role, UserRole::Guest);
        assert!(!g.is_admin());
        assert!(g.last_login_at.is_none());
        assert!(!g.id.is_empty());
    }

    #[test]
    fn role_roundtrip() {
        for role in &[UserRole::Admin, UserRole::Manager, UserRole::Guest] {
            assert_eq!(&UserRole::from_str(role.as_str()), role);
        }
    }

    #[test]
    fn unknown_role_defaults_to_guest() {
        assert_eq!(UserRole::from_str("superuser"), UserRole::Guest);
    }
}
