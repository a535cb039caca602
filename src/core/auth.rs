//! Admin credential check for the add-quote flow
//!
//! Credentials come from the environment and are compared as plain strings.

use tracing::debug;

pub const ADMIN_EMAIL_ENV: &str = "QUOTEMOOD_ADMIN_EMAIL";
pub const ADMIN_PASSWORD_ENV: &str = "QUOTEMOOD_ADMIN_PASSWORD";

#[derive(Debug, Clone)]
pub struct AdminCredentials {
    email: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Read credentials from the environment. `None` when either is unset.
    pub fn from_env() -> Option<Self> {
        let email = std::env::var(ADMIN_EMAIL_ENV).ok()?;
        let password = std::env::var(ADMIN_PASSWORD_ENV).ok()?;
        Some(Self::new(email, password))
    }

    pub fn verify(&self, email: &str, password: &str) -> bool {
        let granted = self.email == email && self.password == password;
        debug!(granted, "Admin credential check");
        granted
    }
}

/// Check a login against the environment; no configured admin means no access
pub fn is_admin(email: &str, password: &str) -> bool {
    AdminCredentials::from_env()
        .map(|creds| creds.verify(email, password))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify() {
        let creds = AdminCredentials::new("admin@example.com", "hunter2");
        assert!(creds.verify("admin@example.com", "hunter2"));
        assert!(!creds.verify("admin@example.com", "hunter3"));
        assert!(!creds.verify("", ""));
    }
}
