//! Request body validation.
//!
//! DTOs implement [`Validate`] by running each field through its
//! [`Constraint`]s; [`ValidatedJson`] deserializes a body and validates it,
//! turning any violation into [`AppError::Validation`].

use std::cmp::Ordering;
use std::fmt;

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// One violated constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

impl Violation {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Field constraints. Only `NotNull` and `NotBlank` reject a null value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    NotNull,
    NotBlank,
    Positive,
    PositiveOrZero,
}

impl Constraint {
    pub fn message(self) -> &'static str {
        match self {
            Constraint::NotNull => "must not be null",
            Constraint::NotBlank => "must not be blank",
            Constraint::Positive => "must be greater than 0",
            Constraint::PositiveOrZero => "must be greater than or equal to 0",
        }
    }

    pub fn is_satisfied_by(self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (Constraint::NotNull, FieldValue::Null) => false,
            (Constraint::NotNull, _) => true,
            (Constraint::NotBlank, FieldValue::Text(text)) => !text.trim().is_empty(),
            (Constraint::NotBlank, _) => false,
            (Constraint::Positive, FieldValue::Number(sign)) => *sign == Ordering::Greater,
            (Constraint::PositiveOrZero, FieldValue::Number(sign)) => *sign != Ordering::Less,
            (Constraint::Positive | Constraint::PositiveOrZero, _) => true,
        }
    }
}

/// The part of a field value the constraints look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Null,
    Text(&'a str),
    /// Sign of a numeric value relative to zero.
    Number(Ordering),
    Present,
}

impl<'a> FieldValue<'a> {
    pub fn text(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Text)
    }

    pub fn number<T: Ord>(value: Option<&T>, zero: &T) -> Self {
        value.map_or(FieldValue::Null, |number| FieldValue::Number(number.cmp(zero)))
    }

    pub fn present<T>(value: Option<&T>) -> Self {
        value.map_or(FieldValue::Null, |_| FieldValue::Present)
    }
}

/// Collects violations in the order fields are checked.
#[derive(Debug, Default)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(
        &mut self,
        field: &'static str,
        value: FieldValue<'_>,
        constraints: &[Constraint],
    ) -> &mut Self {
        for constraint in constraints {
            if !constraint.is_satisfied_by(&value) {
                self.0.push(Violation::new(field, constraint.message()));
            }
        }
        self
    }

    pub fn into_result(self) -> Result<(), Vec<Violation>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), Vec<Violation>>;
}

/// JSON object body extractor that also runs [`Validate`].
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<serde_json::Value>::from_request(req, state).await?;
        if !body.is_object() {
            return Err(AppError::bad_request("request body must be a JSON object"));
        }

        let value: T = serde_json::from_value(body)
            .map_err(|err| AppError::bad_request(format!("invalid request body: {err}")))?;
        value.validate().map_err(AppError::Validation)?;
        Ok(Self(value))
    }
}
