//! Sequential form validation.
//!
//! Checks the username, password and email fields in that order and stops
//! at the first blank one. A blank field is an informational outcome, not
//! an error; [`FormOutcome::into_result`] converts it into a
//! [`CoreError`] for callers that want to propagate it with `?`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// The three form fields, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Username,
    Password,
    Email,
}

impl FormField {
    /// Every field in check order.
    pub const ALL: [FormField; 3] = [FormField::Username, FormField::Password, FormField::Email];

    /// Human-readable label used in output lines.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Username => "Username",
            FormField::Password => "Password",
            FormField::Email => "Email",
        }
    }

    /// Struct field name, as reported by the `validator` derive.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Username => "username",
            FormField::Password => "password",
            FormField::Email => "email",
        }
    }

    pub fn blank_message(self) -> String {
        format!("{} is blank.", self.label())
    }
}

// ---------------------------------------------------------------------------
// Form data
// ---------------------------------------------------------------------------

/// User-submitted form with three independently optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct FormData {
    #[validate(required)]
    pub username: Option<String>,
    #[validate(required)]
    pub password: Option<String>,
    #[validate(required)]
    pub email: Option<String>,
}

impl FormData {
    pub fn new(username: Option<&str>, password: Option<&str>, email: Option<&str>) -> Self {
        Self {
            username: username.map(str::to_owned),
            password: password.map(str::to_owned),
            email: email.map(str::to_owned),
        }
    }

    /// Every blank field, in check order.
    ///
    /// Unlike [`validate_form`] this does not stop at the first blank
    /// field.
    pub fn missing_fields(&self) -> Vec<FormField> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => {
                let by_field = errors.errors();
                FormField::ALL
                    .into_iter()
                    .filter(|field| by_field.contains_key(field.key()))
                    .collect()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// All three fields, unwrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompleteForm<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub email: &'a str,
}

impl CompleteForm<'_> {
    /// One `Label: value` line per field, in check order.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("{}: {}", FormField::Username.label(), self.username),
            format!("{}: {}", FormField::Password.label(), self.password),
            format!("{}: {}", FormField::Email.label(), self.email),
        ]
    }
}

/// Terminal state of [`validate_form`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormOutcome<'a> {
    /// Validation stopped at this field; later fields were not checked.
    Blank { field: FormField },
    Complete(CompleteForm<'a>),
}

impl<'a> FormOutcome<'a> {
    /// Lines to show the user: the blank-field message, or every field.
    pub fn lines(&self) -> Vec<String> {
        match self {
            FormOutcome::Blank { field } => vec![field.blank_message()],
            FormOutcome::Complete(form) => form.lines(),
        }
    }

    pub fn into_result(self) -> Result<CompleteForm<'a>, CoreError> {
        match self {
            FormOutcome::Blank { field } => Err(CoreError::Validation(field.blank_message())),
            FormOutcome::Complete(form) => Ok(form),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check the form fields in order and stop at the first blank one.
///
/// # Examples
///
/// ```
/// use optionals_core::form::{validate_form, FormData};
///
/// let form = FormData::new(Some("user1"), None, Some("user1@example.com"));
/// assert_eq!(validate_form(&form).lines(), vec!["Password is blank."]);
///
/// let form = FormData::new(Some("user1"), Some("password123"), Some("user1@example.com"));
/// assert_eq!(
///     validate_form(&form).lines(),
///     vec!["Username: user1", "Password: password123", "Email: user1@example.com"],
/// );
/// ```
pub fn validate_form(form: &FormData) -> FormOutcome<'_> {
    let Some(username) = form.username.as_deref() else {
        return blank(FormField::Username);
    };
    let Some(password) = form.password.as_deref() else {
        return blank(FormField::Password);
    };
    let Some(email) = form.email.as_deref() else {
        return blank(FormField::Email);
    };

    FormOutcome::Complete(CompleteForm {
        username,
        password,
        email,
    })
}

fn blank(field: FormField) -> FormOutcome<'static> {
    tracing::debug!(field = field.key(), "Form field is blank");
    FormOutcome::Blank { field }
}
