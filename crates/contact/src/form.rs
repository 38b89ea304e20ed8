use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::{Validate, ValidationError};

/// The three values a visitor types into the contact form.
#[derive(Validate, Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 5000), custom(function = "not_blank"))]
    pub message: String,
}

impl SubmissionPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Fields rejected by validation, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        let Err(errors) = self.validate() else {
            return vec![];
        };

        let field_errors = errors.field_errors();

        Field::VARIANTS
            .iter()
            .copied()
            .filter(|field| field_errors.contains_key(field.as_ref()))
            .collect()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

/// Storage for the payload being edited. Performs no validation.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    payload: SubmissionPayload,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payload(&self) -> &SubmissionPayload {
        &self.payload
    }

    pub fn into_payload(self) -> SubmissionPayload {
        self.payload
    }

    /// Replaces a single field, leaving the other two untouched.
    pub fn apply(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.payload.name,
            Field::Email => &mut self.payload.email,
            Field::Message => &mut self.payload.message,
        };

        *slot = value.into();
    }

    /// Same as [`FormState::apply`], keyed by the input's `name` attribute.
    pub fn apply_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field = Field::from_str(name).map_err(|_| UnknownField(name.to_owned()))?;
        self.apply(field, value);

        Ok(())
    }
}

impl From<SubmissionPayload> for FormState {
    fn from(payload: SubmissionPayload) -> Self {
        Self { payload }
    }
}
