use crate::domain::model::AddressInput;
use crate::domain::state::AustralianState;
use crate::utils::error::{AddressError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AddressError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AddressError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AddressError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| AddressError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AddressError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AddressError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

fn postcode_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{4}$").expect("postcode pattern is valid"))
}

fn input_error(field: &str, reason: &str) -> AddressError {
    AddressError::InputError {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_postcode(postcode: &str) -> Result<()> {
    if postcode.is_empty() {
        return Err(input_error("postcode", "Postcode is required"));
    }
    if postcode.chars().count() != 4 {
        return Err(input_error("postcode", "Postcode must be exactly 4 digits"));
    }
    if !postcode_pattern().is_match(postcode) {
        return Err(input_error("postcode", "Postcode must contain only numbers"));
    }
    Ok(())
}

pub fn validate_suburb(suburb: &str) -> Result<()> {
    if suburb.trim().is_empty() {
        return Err(input_error("suburb", "Suburb is required"));
    }
    Ok(())
}

pub fn validate_state(state: &str) -> Result<()> {
    if state.is_empty() {
        return Err(input_error("state", "State is required"));
    }
    state.parse::<AustralianState>().map(|_| ())
}

/// Form-level checks applied before an address is sent for validation.
impl Validate for AddressInput {
    fn validate(&self) -> Result<()> {
        validate_postcode(&self.postcode)?;
        validate_suburb(&self.suburb)?;
        validate_state(&self.state)?;
        Ok(())
    }
}
