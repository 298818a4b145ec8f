// File: src/schema.rs
// Purpose: Declarative validation rules per field

use crate::errors::FieldValidationFailure;
use crate::field::Field;
use crate::values::FormValues;
use anyhow::{bail, Result};
use cadastro_validation::{
    equals, has_max_length, has_min_length, is_blank, Pattern, EMAIL_REGEX, PASSWORD_PATTERN,
    PHONE_REGEX,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of rule a field can fail; also the key of its message
///
/// Declaration order is evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    MinLength,
    MaxLength,
    Pattern,
    EqualsField,
}

/// Rules and messages for one field
///
/// Built once with the consuming builder methods; a finished schema exposes
/// no mutation.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    field: Field,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Pattern>,
    equals_field: Option<Field>,
    messages: BTreeMap<RuleKind, String>,
}

impl FieldSchema {
    /// An optional field with no rules
    pub fn new(field: Field) -> Self {
        Self {
            field,
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            equals_field: None,
            messages: BTreeMap::new(),
        }
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = true;
        self.messages.insert(RuleKind::Required, message.into());
        self
    }

    pub fn min_length(mut self, min: usize, message: impl Into<String>) -> Self {
        self.min_length = Some(min);
        self.messages.insert(RuleKind::MinLength, message.into());
        self
    }

    pub fn max_length(mut self, max: usize, message: impl Into<String>) -> Self {
        self.max_length = Some(max);
        self.messages.insert(RuleKind::MaxLength, message.into());
        self
    }

    pub fn pattern(mut self, pattern: Pattern, message: impl Into<String>) -> Self {
        self.pattern = Some(pattern);
        self.messages.insert(RuleKind::Pattern, message.into());
        self
    }

    pub fn equals_field(mut self, other: Field, message: impl Into<String>) -> Self {
        self.equals_field = Some(other);
        self.messages.insert(RuleKind::EqualsField, message.into());
        self
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn min(&self) -> Option<usize> {
        self.min_length
    }

    pub fn max(&self) -> Option<usize> {
        self.max_length
    }

    pub fn equals(&self) -> Option<Field> {
        self.equals_field
    }

    /// Rule kinds this field declares, in evaluation order
    pub fn rules(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.messages.keys().copied()
    }

    pub fn message(&self, kind: RuleKind) -> Option<&str> {
        self.messages.get(&kind).map(String::as_str)
    }

    /// Run the rule chain against the field's current value
    ///
    /// Stops at the first failing rule. A blank optional field passes
    /// without checking the remaining rules.
    pub fn check(&self, values: &FormValues) -> Result<(), FieldValidationFailure> {
        let value = values.get(self.field);

        if is_blank(value) {
            return if self.required {
                Err(self.failure(RuleKind::Required))
            } else {
                Ok(())
            };
        }

        if let Some(min) = self.min_length {
            if !has_min_length(value, min) {
                return Err(self.failure(RuleKind::MinLength));
            }
        }

        if let Some(max) = self.max_length {
            if !has_max_length(value, max) {
                return Err(self.failure(RuleKind::MaxLength));
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                return Err(self.failure(RuleKind::Pattern));
            }
        }

        // compared against the other field as it is right now, not as it was
        // when this field was last edited
        if let Some(other) = self.equals_field {
            if !equals(value, values.get(other)) {
                return Err(self.failure(RuleKind::EqualsField));
            }
        }

        Ok(())
    }

    fn failure(&self, kind: RuleKind) -> FieldValidationFailure {
        FieldValidationFailure::new(self.field, self.message(kind).unwrap_or_default())
    }
}

/// Replacement messages for one field; unset entries keep the default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleMessages {
    pub required: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub pattern: Option<String>,
    pub equals_field: Option<String>,
}

impl RuleMessages {
    pub fn iter(&self) -> impl Iterator<Item = (RuleKind, &str)> {
        [
            (RuleKind::Required, &self.required),
            (RuleKind::MinLength, &self.min_length),
            (RuleKind::MaxLength, &self.max_length),
            (RuleKind::Pattern, &self.pattern),
            (RuleKind::EqualsField, &self.equals_field),
        ]
        .into_iter()
        .filter_map(|(kind, message)| message.as_deref().map(|m| (kind, m)))
    }
}

/// Message replacements keyed by field wire key
pub type MessageOverrides = BTreeMap<String, RuleMessages>;

/// Rule sets for every field of the form
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: [FieldSchema; 5],
}

impl FormSchema {
    /// The registration form with its pt-BR messages
    pub fn registration() -> Self {
        Self {
            fields: [
                FieldSchema::new(Field::Name)
                    .required("Nome é obrigatório")
                    .min_length(2, "Nome deve ter pelo menos 2 caracteres")
                    .max_length(50, "Nome deve ter no máximo 50 caracteres"),
                FieldSchema::new(Field::Email)
                    .required("E-mail é obrigatório")
                    .pattern(Pattern::Full((*EMAIL_REGEX).clone()), "E-mail deve ser válido"),
                FieldSchema::new(Field::Phone)
                    .required("Telefone é obrigatório")
                    .pattern(
                        Pattern::Full((*PHONE_REGEX).clone()),
                        "Telefone deve estar no formato (00) 00000-0000",
                    ),
                FieldSchema::new(Field::Password)
                    .required("Senha é obrigatória")
                    .min_length(6, "Senha deve ter pelo menos 6 caracteres")
                    .pattern(
                        (*PASSWORD_PATTERN).clone(),
                        "Senha deve conter pelo menos uma letra maiúscula, uma minúscula e um número",
                    ),
                FieldSchema::new(Field::ConfirmPassword)
                    .required("Confirmação de senha é obrigatória")
                    .equals_field(Field::Password, "Senhas devem ser iguais"),
            ],
        }
    }

    /// The registration form with some messages replaced
    ///
    /// Fails when an override names an unknown field or a rule the field
    /// does not declare.
    pub fn with_messages(overrides: &MessageOverrides) -> Result<Self> {
        let mut schema = Self::registration();

        for (key, messages) in overrides {
            let field: Field = key.parse()?;
            let field_schema = &mut schema.fields[field.index()];

            for (kind, message) in messages.iter() {
                match field_schema.messages.get_mut(&kind) {
                    Some(slot) => *slot = message.to_string(),
                    None => bail!("field {} has no {:?} rule to override", field, kind),
                }
            }
        }

        Ok(schema)
    }

    pub fn field(&self, field: Field) -> &FieldSchema {
        &self.fields[field.index()]
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter()
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::registration()
    }
}
