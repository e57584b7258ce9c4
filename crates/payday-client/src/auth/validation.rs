//! Local credential checks, run before any request is made.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::{LoginForm, SignupForm};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 100;

pub const INVALID_EMAIL: &str = "Please enter a valid email";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const NAME_TOO_LONG: &str = "Name must be at most 100 characters";
pub const PASSWORD_MISMATCH: &str = "Passwords don't match";

// Local part may not start with a dot or contain "..": checked separately.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// One failed check, reported against the form field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every failed check of a form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Message for `field`, if it failed.
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    !local.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

pub fn validate_login(form: &LoginForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_email(&mut errors, &form.email);
    check_password(&mut errors, &form.password);
    errors.into_result()
}

pub fn validate_signup(form: &SignupForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let name_len = form.full_name.chars().count();
    if name_len < MIN_NAME_LEN {
        errors.push("fullName", NAME_TOO_SHORT);
    } else if name_len > MAX_NAME_LEN {
        errors.push("fullName", NAME_TOO_LONG);
    }
    check_email(&mut errors, &form.email);
    check_password(&mut errors, &form.password);
    if form.password != form.confirm_password {
        errors.push("confirmPassword", PASSWORD_MISMATCH);
    }
    errors.into_result()
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    if !is_valid_email(email) {
        errors.push("email", INVALID_EMAIL);
    }
}

fn check_password(errors: &mut ValidationErrors, password: &str) {
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push("password", PASSWORD_TOO_SHORT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for email in ["jane@example.com", "j.doe+tips@mail.co.ke", "o'neil@club-fc.org"] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["", "jane", "jane@", "@example.com", ".jane@example.com", "ja..ne@example.com", "jane@example", "jane@example.c"] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn login_collects_both_field_errors() {
        let errors = validate_login(&LoginForm::new("nope", "123")).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message_for("email"), Some(INVALID_EMAIL));
        assert_eq!(errors.message_for("password"), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn signup_mismatch_is_reported_on_confirmation() {
        let form = SignupForm::new("Jane", "jane@example.com", "secret1", "secret2");
        let errors = validate_signup(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for("confirmPassword"), Some(PASSWORD_MISMATCH));
    }

    #[test]
    fn signup_name_bounds() {
        let short = SignupForm::new("J", "jane@example.com", "secret1", "secret1");
        assert_eq!(validate_signup(&short).unwrap_err().message_for("fullName"), Some(NAME_TOO_SHORT));
        let long = SignupForm::new("x".repeat(101), "jane@example.com", "secret1", "secret1");
        assert_eq!(validate_signup(&long).unwrap_err().message_for("fullName"), Some(NAME_TOO_LONG));
        let ok = SignupForm::new("Jo", "jane@example.com", "secret1", "secret1");
        assert!(validate_signup(&ok).is_ok());
    }
}
