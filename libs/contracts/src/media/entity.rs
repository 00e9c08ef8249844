//! Entity graph served by `/api/v1/entities`
//!
//! Unlike [`MediaItem`](super::MediaItem), entities are normalized: files,
//! provider metadata and per-user state live in their own records, and an
//! entity may own children (series → season → episode, album → track).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::timestamp::Timestamp;

/// Richer media record with hierarchy, files and provider metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaEntity {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_number: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_number: Option<i32>,
    pub first_detected: Timestamp,
    pub last_updated: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<MediaFile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MediaEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_metadata: Option<Vec<EntityExternalMetadata>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<UserMetadata>,
}

/// Entry from the media type table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_patterns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_providers: Option<Vec<String>>,
}

/// Links a physical file to a [`MediaEntity`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    pub id: i64,
    pub media_item_id: i64,
    pub file_id: i64,
    pub file_path: String,
    pub file_size: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_hash: Option<String>,
    /// Canonical file among duplicates or versions of the same entity
    pub is_primary: bool,
    pub added_at: Timestamp,
}

/// Provider metadata for a [`MediaEntity`].
///
/// `data` is the provider response as the backend stored it, serialized.
/// Callers parse it themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityExternalMetadata {
    pub id: i64,
    pub media_item_id: i64,
    pub provider: String,
    pub external_id: String,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    pub last_fetched: Timestamp,
}

/// Per-user ratings, favorites and watch state for one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    pub id: i64,
    pub media_item_id: i64,
    pub user_id: i64,
    pub is_favorite: bool,
    pub is_watched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub updated_at: Timestamp,
}

/// Aggregate counts for the entity dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityStats {
    pub total_entities: i64,
    /// Entity count keyed by media type name
    pub entities_by_type: BTreeMap<String, i64>,
    pub total_files: i64,
    pub total_size: i64,
    pub recent_additions: i64,
    pub duplicate_groups: i64,
}

/// Entities that share title, type and year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub title: String,
    pub media_type_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub count: i64,
    pub items: Vec<MediaEntity>,
}
