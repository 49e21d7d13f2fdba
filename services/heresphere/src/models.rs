//! HereSphere response payloads
//!
//! Field names and presence follow the HereSphere JSON protocol; the player
//! rejects documents that deviate from it.

use serde::Serialize;

/// Access level telling the player the user may view the video
pub const ACCESS_OWNED: i32 = 1;

/// Per-video document returned to the player
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoData {
    pub access: i32,
    pub title: String,
    pub description: String,
    /// Creation date as "YYYY-MM-DD"
    pub date_added: String,
    pub thumbnail_image: String,
    pub thumbnail_video: String,
    /// Duration in milliseconds
    pub duration: i64,
    pub rating: f32,
    pub media: Vec<Media>,
    pub tags: Vec<Tag>,
    pub projection: String,
    pub stereo: String,
    pub scripts: Vec<Script>,
}

/// A timeline entry; entries on the same track share a display lane
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub name: String,
    /// Milliseconds from the start of the video
    pub start: i64,
    /// Milliseconds, 0 when the tag has no end
    pub end: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<u32>,
    pub rating: f32,
}

/// A named stream with its sources
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Media {
    pub name: String,
    pub sources: Vec<MediaSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaSource {
    pub resolution: u32,
    pub height: u32,
    pub width: u32,
    pub size: u64,
    pub url: String,
}

/// Interactive (funscript) file reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Script {
    pub name: String,
    pub url: String,
}
