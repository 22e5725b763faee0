use crate::domain::model::RawLocalitiesResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Source of locality data for a free-text suburb query within one state.
#[async_trait]
pub trait LocalityLookup: Send + Sync {
    async fn fetch_localities(&self, suburb: &str, state: &str) -> Result<RawLocalitiesResponse>;
}

#[async_trait]
impl<T: LocalityLookup + ?Sized> LocalityLookup for Arc<T> {
    async fn fetch_localities(&self, suburb: &str, state: &str) -> Result<RawLocalitiesResponse> {
        (**self).fetch_localities(suburb, state).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn auth_token(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn cache_ttl(&self) -> Option<Duration>;
}
