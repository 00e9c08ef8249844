//! Glob-importable set of every catalog shape
//!
//! `use contracts::prelude::*;`

pub use crate::auth::{
    AuthStatus, ChangePasswordRequest, DeviceInfo, LoginRequest, LoginResponse, RegisterRequest,
    Role, UpdateProfileRequest, User,
};
pub use crate::collections::{
    CreateCollectionRequest, MediaCollection, RuleOperator, RuleValue, SmartCollectionRule,
    UpdateCollectionRequest,
};
pub use crate::media::{
    DuplicateGroup, EntityExternalMetadata, EntityStats, ExternalMetadata, MediaEntity, MediaFile,
    MediaItem, MediaSearchRequest, MediaSearchResponse, MediaType, MediaVersion,
    PaginatedResponse, QualityInfo, SortOrder, UserMetadata,
};
pub use crate::timestamp::Timestamp;
