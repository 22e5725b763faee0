pub mod envelope;

use crate::adapters::{CachedLookup, LocalitiesApi};
use crate::core::normalizer;
use crate::core::validator::AddressValidator;
use crate::core::{AddressInput, ConfigProvider, LocalityLookup};
use crate::utils::error::{Result, ServiceError};
use envelope::{SearchPostcodeResponse, ValidateAddressResponse};
use std::sync::Arc;

pub type SharedValidator = AddressValidator<Arc<dyn LocalityLookup>>;

/// Wires the HTTP client, and the cache when a TTL is configured, into a validator.
pub fn build_validator<C: ConfigProvider + ?Sized>(config: &C) -> Result<SharedValidator> {
    let api = LocalitiesApi::from_config(config)?;
    tracing::debug!("🔧 Locality API endpoint: {}", api.endpoint());

    let lookup: Arc<dyn LocalityLookup> = match config.cache_ttl() {
        Some(ttl) => {
            tracing::debug!("💾 Lookup cache enabled (ttl {:?})", ttl);
            Arc::new(CachedLookup::new(api, ttl))
        }
        None => Arc::new(api),
    };

    Ok(AddressValidator::new(lookup))
}

/// Resolves the `validateAddress` query field.
pub async fn validate_address_query<L: LocalityLookup>(
    validator: &AddressValidator<L>,
    input: &AddressInput,
) -> ValidateAddressResponse {
    ValidateAddressResponse::from(validator.validate_address(input).await)
}

/// Resolves the `searchPostcode` query field: the normalized upstream
/// localities for a free-text query, without any matching.
pub async fn search_postcode_query<L: LocalityLookup + ?Sized>(
    lookup: &L,
    query: &str,
    state: &str,
) -> SearchPostcodeResponse {
    let outcome = match lookup.fetch_localities(query, state).await {
        Ok(raw) => {
            let localities = normalizer::normalize(raw);
            tracing::info!(
                "📂 Search for {} ({}) returned {} localities",
                query,
                state,
                localities.len()
            );
            Ok(localities)
        }
        Err(e) => {
            tracing::error!("❌ Locality search failed for {} ({}): {}", query, state, e);
            Err(ServiceError::search_unavailable(&e))
        }
    };

    SearchPostcodeResponse::from(outcome)
}
