use crate::domain::model::{AddressInput, Locality, ValidationResult};

/// Two-stage check: the suburb name must exist, then one of its localities
/// must carry the postcode.
///
/// Suburb names compare case-insensitively on the whole string; prefixes and
/// substrings never match. Postcodes compare as exact strings.
pub fn evaluate(input: &AddressInput, localities: &[Locality]) -> ValidationResult {
    let wanted = input.suburb.to_lowercase();
    let matching: Vec<&Locality> = localities
        .iter()
        .filter(|locality| locality.location.to_lowercase() == wanted)
        .collect();

    if matching.is_empty() {
        return ValidationResult::suburb_not_found(&input.suburb, &input.state);
    }

    let postcode_matches = matching
        .iter()
        .any(|locality| locality.postcode.as_string() == input.postcode);

    if !postcode_matches {
        return ValidationResult::postcode_mismatch(&input.postcode, &input.suburb);
    }

    ValidationResult::valid()
}
