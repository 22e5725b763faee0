use crate::core::{Locality, ValidationResult};
use crate::utils::error::{ServiceError, ServiceErrorCode};
use serde::Serialize;

/// Response for one query field.
///
/// On a service failure `data` is `null` and the classified error is listed in
/// `errors`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResponse<D> {
    pub data: Option<D>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<QueryError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateAddressData {
    pub validate_address: ValidationResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPostcodeData {
    pub search_postcode: Localities,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Localities {
    pub locality: Vec<Locality>,
}

pub type ValidateAddressResponse = QueryResponse<ValidateAddressData>;
pub type SearchPostcodeResponse = QueryResponse<SearchPostcodeData>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryError {
    pub message: String,
    pub extensions: ErrorExtensions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorExtensions {
    pub code: ServiceErrorCode,
    pub original_error: String,
}

impl<D: Serialize> QueryResponse<D> {
    pub fn success(data: D) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn failure(error: ServiceError) -> Self {
        Self {
            data: None,
            errors: vec![error.into()],
        }
    }

    pub fn is_error(&self) -> bool {
        self.data.is_none()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl ValidateAddressResponse {
    pub fn validation(&self) -> Option<&ValidationResult> {
        self.data.as_ref().map(|d| &d.validate_address)
    }
}

impl From<ServiceError> for QueryError {
    fn from(error: ServiceError) -> Self {
        Self {
            message: error.message,
            extensions: ErrorExtensions {
                code: error.code,
                original_error: error.original_error,
            },
        }
    }
}

impl From<Result<ValidationResult, ServiceError>> for ValidateAddressResponse {
    fn from(outcome: Result<ValidationResult, ServiceError>) -> Self {
        match outcome {
            Ok(result) => Self::success(ValidateAddressData {
                validate_address: result,
            }),
            Err(error) => Self::failure(error),
        }
    }
}

impl From<Result<Vec<Locality>, ServiceError>> for SearchPostcodeResponse {
    fn from(outcome: Result<Vec<Locality>, ServiceError>) -> Self {
        match outcome {
            Ok(locality) => Self::success(SearchPostcodeData {
                search_postcode: Localities { locality },
            }),
            Err(error) => Self::failure(error),
        }
    }
}
