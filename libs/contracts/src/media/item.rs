//! Flat catalog view: media items, their versions and search payloads

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::PaginatedResponse;
use crate::timestamp::Timestamp;

/// MediaItem is a detected and cataloged media item as served by the simple
/// listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: i64,
    pub title: String,
    /// Free-form type name such as `movie` or `tv_show`
    pub media_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub directory_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_root_name: Option<String>,
    /// Protocol of the storage root, e.g. `smb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_root_protocol: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_metadata: Option<Vec<ExternalMetadata>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<MediaVersion>>,
}

/// Provider-sourced metadata for a media item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalMetadata {
    pub id: i64,
    pub media_id: i64,
    /// Provider name, e.g. `tmdb`
    pub provider: String,
    pub external_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crew: Option<Vec<String>>,
    /// Raw provider payload. Keys vary per provider.
    pub metadata: Map<String, Value>,
    pub last_updated: Timestamp,
}

/// One quality/format version of a media item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaVersion {
    pub id: i64,
    pub media_id: i64,
    /// Version label, e.g. `4K HDR`
    pub version: String,
    pub quality: String,
    pub file_path: String,
    pub file_size: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Detected quality attributes of a media file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityInfo {
    pub overall_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_quality: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_quality: Option<f64>,
    pub resolution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<f64>,
    pub codec: String,
    pub file_size: i64,
}

/// Sort direction for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Query payload for media search endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaSearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_min: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_max: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

/// Paginated media search results
pub type MediaSearchResponse = PaginatedResponse<MediaItem>;
