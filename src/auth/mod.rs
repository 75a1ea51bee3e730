//! Login, registration and password-reset forms.
//!
//! Forms validate locally and turn into request bodies; nothing here talks to
//! the network.

use crate::types::{
    ApiError, Endpoint, ForgotPasswordRequest, LoginRequest, RegisterRequest, Result,
};

/// Shown when the registration password and its confirmation differ.
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Shown after a password reset request is accepted.
pub const RESET_INSTRUCTIONS_SENT: &str = "Password reset instructions have been sent to your email.";

fn required(label: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} is required", label)));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<LoginRequest> {
        required("Email", &self.email)?;
        required("Password", &self.password)?;
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub company_url: String,
    pub company_description: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Checks required fields, then that the confirmation matches.
    pub fn validate(&self) -> Result<RegisterRequest> {
        required("Username", &self.username)?;
        required("Company URL", &self.company_url)?;
        required("Company Description", &self.company_description)?;
        required("Email", &self.email)?;
        required("Password", &self.password)?;
        if self.password != self.confirm_password {
            return Err(ApiError::Validation(PASSWORDS_DO_NOT_MATCH.to_string()));
        }
        Ok(RegisterRequest {
            username: self.username.trim().to_string(),
            companyurl: self.company_url.trim().to_string(),
            companydescription: self.company_description.clone(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }

    pub fn validate(&self) -> Result<ForgotPasswordRequest> {
        required("Email", &self.email)?;
        Ok(ForgotPasswordRequest {
            email: self.email.trim().to_string(),
        })
    }
}

/// Maps the backend's answer to a reset request onto what the user sees.
///
/// Backend rejections collapse to the generic failure message; transport and
/// validation errors pass through.
pub fn reset_outcome(result: Result<()>) -> Result<&'static str> {
    match result {
        Ok(()) => Ok(RESET_INSTRUCTIONS_SENT),
        Err(ApiError::Server { status, .. }) => Err(ApiError::Server {
            status,
            detail: Endpoint::ForgotPassword.failure_message().to_string(),
        }),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_outcome_hides_backend_detail() {
        assert_eq!(reset_outcome(Ok(())), Ok(RESET_INSTRUCTIONS_SENT));

        let err = reset_outcome(Err(ApiError::Server {
            status: 404,
            detail: "User not found".into(),
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "Password reset failed");
        assert_eq!(err.status(), Some(404));

        let err = reset_outcome(Err(ApiError::Network("refused".into()))).unwrap_err();
        assert_eq!(err, ApiError::Network("refused".into()));
    }

    fn register_form() -> RegisterForm {
        RegisterForm {
            username: "ada".into(),
            company_url: "https://acme.io".into(),
            company_description: "Anvils and rockets".into(),
            email: " ada@acme.io ".into(),
            password: "Secret123".into(),
            confirm_password: "Secret123".into(),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let err = LoginForm::new("", "pw").validate().unwrap_err();
        assert_eq!(err.to_string(), "Email is required");

        let err = LoginForm::new("a@b.c", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "Password is required");

        let req = LoginForm::new(" a@b.c ", "pw").validate().unwrap();
        assert_eq!(req.email, "a@b.c");
        assert_eq!(req.password, "pw");
    }

    #[test]
    fn test_register_password_mismatch() {
        let mut form = register_form();
        form.confirm_password = "Secret124".into();
        let err = form.validate().unwrap_err();
        assert_eq!(err, ApiError::Validation(PASSWORDS_DO_NOT_MATCH.to_string()));
    }

    #[test]
    fn test_register_builds_backend_body() {
        let req = register_form().validate().unwrap();
        assert_eq!(req.username, "ada");
        assert_eq!(req.companyurl, "https://acme.io");
        assert_eq!(req.companydescription, "Anvils and rockets");
        assert_eq!(req.email, "ada@acme.io");
    }

    #[test]
    fn test_register_missing_field_reported_before_mismatch() {
        let mut form = register_form();
        form.company_url = "  ".into();
        form.confirm_password = "other".into();
        assert_eq!(form.validate().unwrap_err().to_string(), "Company URL is required");
    }

    #[test]
    fn test_forgot_password_requires_email() {
        assert!(ForgotPasswordForm::new("").validate().is_err());
        assert_eq!(ForgotPasswordForm::new("a@b.c").validate().unwrap().email, "a@b.c");
    }
}
