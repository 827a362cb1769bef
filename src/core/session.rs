//! Client-local sign-in state.
//!
//! Credentials are only checked for shape. Nothing is stored or sent.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Password is required")]
    MissingPassword,
}

#[derive(Debug, Default)]
pub struct Session {
    email: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<(), LoginError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginError::MissingEmail);
        }
        let valid_shape = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !valid_shape {
            return Err(LoginError::InvalidEmail);
        }
        if password.is_empty() {
            return Err(LoginError::MissingPassword);
        }

        log::info!("Signed in as {email}");
        self.email = Some(email.to_string());
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Some(email) = self.email.take() {
            log::info!("Signed out {email}");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.email.is_some()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
