//! Scene models decoded from the Stash GraphQL API
//!
//! These types are the read-only view of a scene that the rest of the
//! workspace works with. They mirror the fields selected by
//! [`crate::client::FIND_SCENE_QUERY`] and nothing more.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

/// A single scene with everything needed to describe it to a player
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: String,
    pub created_at: DateTime<FixedOffset>,
    /// Rating on the 0-100 scale
    #[serde(default, rename = "rating100")]
    pub rating: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interactive: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<VideoFile>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub paths: ScenePaths,
    #[serde(default, rename = "sceneStreams", deserialize_with = "null_as_default")]
    pub streams: Vec<SceneStream>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<SceneTag>,
    #[serde(default)]
    pub studio: Option<Studio>,
    #[serde(default, rename = "scene_markers", deserialize_with = "null_as_default")]
    pub markers: Vec<SceneMarker>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub performers: Vec<Performer>,
}

impl SceneRecord {
    /// The file Stash plays for this scene, or an empty one when the scene
    /// has no files attached
    pub fn file(&self) -> VideoFile {
        self.files.first().cloned().unwrap_or_default()
    }
}

/// Technical attributes of a video file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VideoFile {
    /// Duration in seconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub video_codec: String,
}

/// URLs Stash serves for a scene
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScenePaths {
    #[serde(default, deserialize_with = "null_as_default")]
    pub stream: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub screenshot: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preview: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub funscript: String,
}

/// A stream endpoint as advertised by Stash, e.g. "MP4 HD (720p)"
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SceneStream {
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SceneTag {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Studio {
    pub name: String,
    #[serde(default, rename = "rating100")]
    pub rating: Option<u32>,
}

/// A point-in-time annotation on the scene timeline
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneMarker {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Offset from the start of the scene in seconds
    pub seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Performer {
    pub name: String,
    #[serde(default, rename = "rating100")]
    pub rating: Option<u32>,
}

/// GraphQL returns `null` for unset scalars and lists; treat it as the
/// type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
