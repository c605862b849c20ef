//! Registration form validation.

use std::fmt;

/// Fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
    Terms,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Password, Self::Terms];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Terms => "terms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First failing rule per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub terms: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
            Field::Terms => self.terms.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, message: Option<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Terms => &mut self.terms,
        };
        *slot = message;
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }

    pub fn len(&self) -> usize {
        Field::ALL
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for field in Field::ALL {
            if let Some(message) = self.get(field) {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Values entered on the registration page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub accepted_terms: bool,
}

impl RegistrationForm {
    /// Validate every field.
    ///
    /// # Errors
    /// Returns the first failing rule of each invalid field.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            errors.set(field, self.validate_field(field));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Message of the first rule `field` fails, if any.
    pub fn validate_field(&self, field: Field) -> Option<String> {
        let message = match field {
            Field::Name => validate_name(&self.name),
            Field::Email => validate_email(&self.email),
            Field::Password => validate_password(&self.password),
            Field::Terms => (!self.accepted_terms).then_some("You must accept the terms and conditions"),
        };
        message.map(str::to_string)
    }
}

fn validate_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        Some("Name is required")
    } else if name.trim().chars().count() < 3 {
        Some("Name must be at least 3 characters")
    } else {
        None
    }
}

fn validate_email(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some("Email is required")
    } else if !is_email_shaped(email.trim()) {
        Some("Enter a valid email address")
    } else {
        None
    }
}

fn validate_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < 8 {
        Some("Password must be at least 8 characters")
    } else if !password.chars().any(char::is_uppercase) {
        Some("Password must contain at least one uppercase letter")
    } else if !password.chars().any(char::is_lowercase) {
        Some("Password must contain at least one lowercase letter")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain at least one number")
    } else {
        None
    }
}

/// `local@domain.tld`: one `@`, no whitespace, a dot inside the domain.
fn is_email_shaped(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
