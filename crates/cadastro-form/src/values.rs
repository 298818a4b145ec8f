// File: src/values.rs
// Purpose: Current field values and the sanitized payload of an accepted submission

use crate::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current raw value of every form field
///
/// Always holds exactly the five declared fields; a missing key on
/// deserialization becomes an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(rename = "nome", default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(rename = "telefone", default)]
    phone: String,
    #[serde(rename = "senha", default)]
    password: String,
    #[serde(rename = "confirmarSenha", default)]
    confirm_password: String,
}

impl FormValues {
    /// All fields empty
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// Builder form of [`FormValues::set`]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }
}

/// Data of an accepted registration
///
/// The confirmation is dropped once it has been proven equal to the password.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl From<&FormValues> for Registration {
    fn from(values: &FormValues) -> Self {
        Self {
            name: values.name.clone(),
            email: values.email.clone(),
            phone: values.phone.clone(),
            password: values.password.clone(),
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .finish()
    }
}
