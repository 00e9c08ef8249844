//! Wire contracts for the media catalog
//!
//! This crate declares the payloads exchanged between the catalog client
//! and its backend: authentication ([`auth`]), media items and entities
//! ([`media`]) and collections ([`collections`]). Every shape is re-exported
//! at the crate root.
//!
//! ```rust
//! use contracts::{AuthStatus, payload};
//!
//! let status: AuthStatus = payload::decode(r#"{"authenticated": false}"#).unwrap();
//! assert!(status.user.is_none());
//! ```

pub mod auth;
pub mod collections;
pub mod endpoints;
pub mod media;
pub mod payload;
pub mod prelude;
pub mod timestamp;

#[cfg(test)]
mod testing;

// Authentication types
pub use auth::{
    AuthStatus, ChangePasswordRequest, DeviceInfo, LoginRequest, LoginResponse, RegisterRequest,
    Role, UpdateProfileRequest, User,
};

// Media entity types
pub use media::{
    DuplicateGroup, EntityExternalMetadata, EntityStats, ExternalMetadata, MediaEntity, MediaFile,
    MediaItem, MediaSearchRequest, MediaSearchResponse, MediaType, MediaVersion,
    PaginatedResponse, QualityInfo, SortOrder, UserMetadata,
};

// Collection types
pub use collections::{
    CreateCollectionRequest, MediaCollection, RuleOperator, RuleValue, SmartCollectionRule,
    UpdateCollectionRequest,
};

pub use common::{ApiConfig, ContractError, ContractResult};
pub use endpoints::{Endpoint, HttpMethod};
pub use timestamp::Timestamp;
