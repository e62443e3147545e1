//! Wire conventions of the two backend revisions.
//!
//! The FastAPI backend speaks snake_case with lowercase enum tags; the
//! Spring backend speaks camelCase with UPPERCASE enum tags and exposes a
//! few endpoints under different paths. Entities deserialize from either
//! shape, so the dialect only matters for what the client sends.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::result::AppResult;

/// Naming and path convention of the backend in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// snake_case fields, lowercase enums, `/auth/me`.
    FastApi,
    /// camelCase fields, UPPERCASE enums, `/auth/profile`.
    #[default]
    Spring,
}

/// A request body whose field names and enum tags follow the dialect.
///
/// Implementors serialize with snake_case fields and lowercase enum tags;
/// [`Dialect::encode`] rewrites them for the target backend.
pub trait WirePayload: Serialize {
    /// Top-level fields whose string values are enum tags.
    const ENUM_FIELDS: &'static [&'static str] = &[];
}

impl Dialect {
    /// Return the dialect name as used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FastApi => "fastapi",
            Self::Spring => "spring",
        }
    }

    /// Translate a snake_case field name into this dialect.
    pub fn field_name(&self, snake: &str) -> String {
        match self {
            Self::FastApi => snake.to_string(),
            Self::Spring => snake_to_camel(snake),
        }
    }

    /// Translate a lowercase enum tag into this dialect.
    pub fn enum_value(&self, tag: &str) -> String {
        match self {
            Self::FastApi => tag.to_lowercase(),
            Self::Spring => tag.to_uppercase(),
        }
    }

    /// Path of the "who am I" endpoint.
    pub fn current_user_path(&self) -> &'static str {
        match self {
            Self::FastApi => "/auth/me",
            Self::Spring => "/auth/profile",
        }
    }

    /// Whether the backend exposes a dedicated unread-count endpoint.
    pub fn has_unread_count_endpoint(&self) -> bool {
        matches!(self, Self::Spring)
    }

    /// Serialize a payload and rewrite it into this dialect.
    pub fn encode<T: WirePayload>(&self, payload: &T) -> AppResult<Value> {
        let value = serde_json::to_value(payload)?;
        Ok(self.rewrite(value, T::ENUM_FIELDS))
    }

    fn rewrite(&self, value: Value, enum_fields: &[&str]) -> Value {
        match value {
            Value::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (key, inner) in map {
                    let inner = match inner {
                        Value::String(tag) if enum_fields.contains(&key.as_str()) => {
                            Value::String(self.enum_value(&tag))
                        }
                        other => self.rewrite(other, &[]),
                    };
                    out.insert(self.field_name(&key), inner);
                }
                Value::Object(out)
            }
            Value::Array(items) => {
                Value::Array(items.into_iter().map(|v| self.rewrite(v, &[])).collect())
            }
            other => other,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fastapi" | "react" => Ok(Self::FastApi),
            "spring" | "angular" => Ok(Self::Spring),
            _ => Err(AppError::validation(format!(
                "Invalid dialect: '{s}'. Expected one of: fastapi, spring"
            ))),
        }
    }
}

/// Convert `available_weight_kg` into `availableWeightKg`.
pub fn snake_to_camel(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for ch in snake.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
