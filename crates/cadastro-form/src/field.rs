// File: src/field.rs
// Purpose: The fixed set of registration form fields and their presentation metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One named input slot of the registration form
///
/// Serialized with the form's wire keys (`nome`, `telefone`, ...), which are
/// also the `name` attributes the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "nome")]
    Name,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "telefone")]
    Phone,
    #[serde(rename = "senha")]
    Password,
    #[serde(rename = "confirmarSenha")]
    ConfirmPassword,
}

impl Field {
    /// All fields in display and evaluation order
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Position in [`Field::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Phone => 2,
            Field::Password => 3,
            Field::ConfirmPassword => 4,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Field::Name => "nome",
            Field::Email => "email",
            Field::Phone => "telefone",
            Field::Password => "senha",
            Field::ConfirmPassword => "confirmarSenha",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome *",
            Field::Email => "E-mail *",
            Field::Phone => "Telefone *",
            Field::Password => "Senha *",
            Field::ConfirmPassword => "Confirmar Senha *",
        }
    }

    /// HTML `type` attribute for the input widget
    pub const fn input_type(self) -> &'static str {
        match self {
            Field::Name => "text",
            Field::Email => "email",
            Field::Phone => "tel",
            Field::Password | Field::ConfirmPassword => "password",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Digite seu nome completo",
            Field::Email => "Digite seu e-mail",
            Field::Phone => cadastro_validation::PHONE_MASK,
            Field::Password => "Digite sua senha",
            Field::ConfirmPassword => "Confirme sua senha",
        }
    }

    /// Secret fields are never echoed into logs
    pub const fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Edit event or config entry naming a field the form does not have
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0:?}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts the wire keys and their English aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nome" | "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "telefone" | "phone" => Ok(Field::Phone),
            "senha" | "password" => Ok(Field::Password),
            "confirmarSenha" | "confirmPassword" => Ok(Field::ConfirmPassword),
            other => Err(UnknownField(other.to_string())),
        }
    }
}
