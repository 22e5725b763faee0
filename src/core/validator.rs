use crate::core::{matcher, normalizer};
use crate::domain::model::{AddressInput, ValidationResult};
use crate::domain::ports::LocalityLookup;
use crate::utils::error::ServiceError;

/// Validates addresses against an injected [`LocalityLookup`].
///
/// One upstream call per validation and no retries. An address that is wrong
/// comes back as `Ok` with `is_valid == false`. Only a failed lookup becomes a
/// [`ServiceError`].
pub struct AddressValidator<L: LocalityLookup> {
    lookup: L,
}

impl<L: LocalityLookup> AddressValidator<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub async fn validate(
        &self,
        postcode: &str,
        suburb: &str,
        state: &str,
    ) -> Result<ValidationResult, ServiceError> {
        self.validate_address(&AddressInput::new(postcode, suburb, state))
            .await
    }

    pub async fn validate_address(
        &self,
        input: &AddressInput,
    ) -> Result<ValidationResult, ServiceError> {
        tracing::debug!(
            "🔎 Validating postcode={} suburb={} state={}",
            input.postcode,
            input.suburb,
            input.state
        );

        let raw = match self
            .lookup
            .fetch_localities(&input.suburb, &input.state)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(
                    "❌ Locality lookup failed for {} ({}): {} (Category: {:?})",
                    input.suburb,
                    input.state,
                    e,
                    e.category()
                );
                return Err(ServiceError::unavailable(&e));
            }
        };

        let localities = normalizer::normalize(raw);
        tracing::debug!("📂 Upstream returned {} localities", localities.len());

        let result = matcher::evaluate(input, &localities);
        if result.is_valid {
            tracing::info!("✅ {}", result.message);
        } else {
            tracing::info!("⚠️ {}", result.message);
        }

        Ok(result)
    }
}
