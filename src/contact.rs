use crate::types::LicenseType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw contact form fields as the user typed them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub license_type: Option<LicenseType>,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    LicenseType,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::LicenseType => "license type",
            Field::Message => "message",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("unknown license type '{0}'")]
    UnknownLicenseType(String),
}

/// A form that passed the required-field checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub license_type: LicenseType,
    pub message: String,
}

impl ContactForm {
    /// Applies a `<select>` value. The empty string is the unselected placeholder.
    pub fn set_license_type(&mut self, raw: &str) -> Result<(), ContactError> {
        if raw.is_empty() {
            self.license_type = None;
            return Ok(());
        }
        let kind = raw
            .parse::<LicenseType>()
            .map_err(ContactError::UnknownLicenseType)?;
        self.license_type = Some(kind);
        Ok(())
    }

    pub fn license_value(&self) -> &'static str {
        self.license_type.map(LicenseType::value).unwrap_or("")
    }

    /// Same gate the browser applies to the `required` and `type=email` inputs.
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingField(Field::Name));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingField(Field::Email));
        }
        if !is_email_shaped(email) {
            return Err(ContactError::InvalidEmail);
        }
        let license_type = self
            .license_type
            .ok_or(ContactError::MissingField(Field::LicenseType))?;
        if self.message.is_empty() {
            return Err(ContactError::MissingField(Field::Message));
        }

        let company = Some(self.company.trim())
            .filter(|company| !company.is_empty())
            .map(str::to_string);

        Ok(ContactSubmission {
            name: self.name.clone(),
            email: email.to_string(),
            company,
            license_type,
            message: self.message.clone(),
        })
    }
}

fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
