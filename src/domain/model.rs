use crate::domain::state::state_label;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Caller-supplied address to validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInput {
    pub postcode: String,
    pub suburb: String,
    pub state: String,
}

impl AddressInput {
    pub fn new(
        postcode: impl Into<String>,
        suburb: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            postcode: postcode.into(),
            suburb: suburb.into(),
            state: state.into(),
        }
    }
}

/// Upstream postcodes arrive either as `"2000"` or as `2000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Text(String),
    Number(u64),
}

impl Postcode {
    pub fn as_string(&self) -> String {
        match self {
            Postcode::Text(s) => s.clone(),
            Postcode::Number(n) => n.to_string(),
        }
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Text(s) => f.write_str(s),
            Postcode::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Postcode {
    fn from(value: &str) -> Self {
        Postcode::Text(value.to_string())
    }
}

impl From<u64> for Postcode {
    fn from(value: u64) -> Self {
        Postcode::Number(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locality {
    pub location: String,
    pub postcode: Postcode,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Locality {
    pub fn new(
        location: impl Into<String>,
        postcode: impl Into<Postcode>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            postcode: postcode.into(),
            state: state.into(),
            category: None,
            id: None,
            latitude: None,
            longitude: None,
        }
    }
}

/// The `locality` field holds one object or an array of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalityField {
    Many(Vec<Locality>),
    One(Locality),
}

/// Upstream payload, typed by where the locality list was found.
///
/// Built from any JSON value: `{ "localities": { "locality": .. } }` is
/// [`Direct`](Self::Direct), `{ "data": { "localities": { "locality": .. } } }`
/// is [`Nested`](Self::Nested), and anything without a locality (`null`, `{}`,
/// `{ "localities": "" }`) is [`Empty`](Self::Empty).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "Value")]
pub enum RawLocalitiesResponse {
    Direct(LocalityField),
    Nested(LocalityField),
    #[default]
    Empty,
}

impl TryFrom<Value> for RawLocalitiesResponse {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Some(field) = locality_at(&value, &["localities", "locality"]) {
            return Ok(RawLocalitiesResponse::Direct(LocalityField::deserialize(field)?));
        }

        if let Some(field) = locality_at(&value, &["data", "localities", "locality"]) {
            return Ok(RawLocalitiesResponse::Nested(LocalityField::deserialize(field)?));
        }

        Ok(RawLocalitiesResponse::Empty)
    }
}

fn locality_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let found = path.iter().try_fold(value, |current, key| current.get(key))?;
    match found {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        other => Some(other),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub const VALID_MESSAGE: &'static str = "The postcode, suburb, and state input are valid.";

    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: Self::VALID_MESSAGE.to_string(),
        }
    }

    pub fn suburb_not_found(suburb: &str, state: &str) -> Self {
        Self {
            is_valid: false,
            message: format!(
                "The suburb {} does not exist in the state {}",
                suburb,
                state_label(state)
            ),
        }
    }

    pub fn postcode_mismatch(postcode: &str, suburb: &str) -> Self {
        Self {
            is_valid: false,
            message: format!(
                "The postcode {} does not match the suburb {}",
                postcode, suburb
            ),
        }
    }
}
