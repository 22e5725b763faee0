pub mod matcher;
pub mod normalizer;
pub mod validator;

pub use crate::domain::model::{AddressInput, Locality, RawLocalitiesResponse, ValidationResult};
pub use crate::domain::ports::{ConfigProvider, LocalityLookup};
pub use crate::utils::error::Result;
