//! Request body validation.
//!
//! Each request type implements [`Validate`]. Rules run in field order and
//! every failure is collected, so a client sees all problems at once.

use crate::backend::error::BackendError;
use crate::shared::{ContactRequest, FieldError, GroupRequest};

/// Minimum password length for a strong password
const MIN_PASSWORD_LENGTH: usize = 6;

/// Request bodies that can check themselves before reaching a service
pub trait Validate {
    fn validate(&self) -> Result<(), BackendError>;
}

/// Collects field errors for one request
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value must be non-blank
    pub fn required(mut self, field: &str, value: &str, msg: &str) -> Self {
        if value.trim().is_empty() {
            self.errors.push(FieldError::new(field, msg));
        }
        self
    }

    /// Value length in characters must fall in `min..=max`
    pub fn length(mut self, field: &str, value: &str, min: usize, max: usize, msg: &str) -> Self {
        let len = value.chars().count();
        if len < min || len > max {
            self.errors.push(FieldError::new(field, msg));
        }
        self
    }

    pub fn email(mut self, field: &str, value: &str, msg: &str) -> Self {
        if !is_valid_email(value) {
            self.errors.push(FieldError::new(field, msg));
        }
        self
    }

    pub fn strong_password(mut self, field: &str, value: &str, msg: &str) -> Self {
        if !is_strong_password(value) {
            self.errors.push(FieldError::new(field, msg));
        }
        self
    }

    /// `Ok` when no rule failed, otherwise a `Validation` error with all failures
    pub fn finish(self) -> Result<(), BackendError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(BackendError::validation(self.errors))
        }
    }
}

/// Characters allowed in the local part besides ASCII letters and digits
const LOCAL_PART_SYMBOLS: &str = "!#$%&'*+-/=?^_`{|}~";

/// `local@domain.tld`
///
/// The local part is a dot-atom: atoms of letters, digits and
/// [`LOCAL_PART_SYMBOLS`] joined by single dots. Domain labels are
/// alphanumeric with inner hyphens. The top-level domain is either two or
/// more letters (any script) or a punycode `xn--` label.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    is_dot_atom(local) && is_domain(domain)
}

fn is_dot_atom(local: &str) -> bool {
    local.len() <= 64
        && local.split('.').all(|atom| {
            !atom.is_empty()
                && atom
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SYMBOLS.contains(c))
        })
}

fn is_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };

    !hosts.is_empty() && hosts.iter().all(|label| is_domain_label(label)) && is_tld(tld)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.chars().count() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}

fn is_tld(tld: &str) -> bool {
    if let Some(punycode) = tld.strip_prefix("xn--") {
        return !punycode.is_empty() && is_domain_label(tld);
    }
    tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic)
}

/// At least six characters with a lowercase letter, an uppercase letter,
/// a digit and a symbol; a plain space counts as a symbol
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(is_password_symbol)
}

fn is_password_symbol(c: char) -> bool {
    c == ' ' || (!c.is_alphanumeric() && !c.is_whitespace())
}

impl Validate for ContactRequest {
    fn validate(&self) -> Result<(), BackendError> {
        Validator::new()
            .required("name", &self.name, "Name is Required")
            .required("imageUrl", &self.image_url, "ImageUrl is Required")
            .required("email", &self.email, "Email is Required")
            .required("mobile", &self.mobile, "Mobile is Required")
            .required("company", &self.company, "Company is Required")
            .required("title", &self.title, "Title is Required")
            .required("groupId", &self.group_id, "GroupId is Required")
            .finish()
    }
}

impl Validate for GroupRequest {
    fn validate(&self) -> Result<(), BackendError> {
        Validator::new()
            .required("name", &self.name, "Name is Required")
            .finish()
    }
}
