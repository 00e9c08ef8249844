//! Media contracts
//!
//! Two read paths are described here: the flat [`MediaItem`] listing and the
//! normalized [`MediaEntity`] graph. They are distinct shapes.

pub mod entity;
pub mod item;
pub mod pagination;

// Re-export for convenience
pub use entity::{
    DuplicateGroup, EntityExternalMetadata, EntityStats, MediaEntity, MediaFile, MediaType,
    UserMetadata,
};
pub use item::{
    ExternalMetadata, MediaItem, MediaSearchRequest, MediaSearchResponse, MediaVersion,
    QualityInfo, SortOrder,
};
pub use pagination::PaginatedResponse;
