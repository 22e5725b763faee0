// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod cache;
pub mod http;

pub use cache::CachedLookup;
pub use http::LocalitiesApi;
