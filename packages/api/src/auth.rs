//! # Staff authentication
//!
//! Thin layer over the backend's auth endpoints that normalises input, checks
//! the sign-up form and turns backend failures into the messages shown on
//! screen.
//!
//! - [`login`]: trims and lowercases the email, then signs in. Any failure
//!   reads "Provided email or password are incorrect".
//! - [`SignUpForm::validate`] / [`sign_up`]: full name, a plausible email, a
//!   password of at least [`MIN_PASSWORD_LEN`] characters typed twice.
//! - [`current_user`] / [`logout`]: session lookup and teardown.

use store::{Backend, Credentials, NewUser, UserInfo};

use crate::error::ApiError;

pub const MIN_PASSWORD_LEN: usize = 8;

pub async fn login<B: Backend>(
    backend: &B,
    email: &str,
    password: &str,
) -> Result<UserInfo, ApiError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Invalid(
            "Please provide email and password".to_string(),
        ));
    }

    let user = backend
        .sign_in(Credentials {
            email,
            password: password.to_string(),
        })
        .await
        .map_err(|e| {
            tracing::error!("Login failed: {}", e);
            ApiError::InvalidCredentials
        })?;
    tracing::info!("Signed in as {}", user.email);
    Ok(user)
}

/// Values typed into the sign-up form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl SignUpForm {
    /// The first problem with the form, if any.
    pub fn validate(&self) -> Result<NewUser, ApiError> {
        let full_name = self.full_name.trim();
        let email = self.email.trim().to_lowercase();

        if full_name.is_empty() {
            return Err(ApiError::Invalid("Full name is required".to_string()));
        }
        let plausible = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !plausible {
            return Err(ApiError::Invalid(
                "Please provide a valid email address".to_string(),
            ));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(ApiError::Invalid(format!(
                "Password needs a minimum of {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.password != self.password_confirm {
            return Err(ApiError::Invalid("Passwords need to match".to_string()));
        }

        Ok(NewUser {
            full_name: full_name.to_string(),
            email,
            password: self.password.clone(),
        })
    }
}

pub async fn sign_up<B: Backend>(backend: &B, form: &SignUpForm) -> Result<UserInfo, ApiError> {
    let new_user = form.validate()?;
    backend.sign_up(new_user).await.map_err(|e| {
        tracing::error!("Sign-up failed: {}", e);
        ApiError::SignUpFailed(match e {
            store::StoreError::Rejected(reason) => reason,
            other => other.to_string(),
        })
    })
}

pub async fn current_user<B: Backend>(backend: &B) -> Result<Option<UserInfo>, ApiError> {
    backend.current_user().await.map_err(|e| {
        tracing::warn!("Failed to load session: {}", e);
        ApiError::SessionUnavailable
    })
}

pub async fn logout<B: Backend>(backend: &B) -> Result<(), ApiError> {
    backend.sign_out().await.map_err(|e| {
        tracing::error!("Logout failed: {}", e);
        ApiError::LogoutFailed
    })
}
