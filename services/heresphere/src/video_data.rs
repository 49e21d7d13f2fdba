//! Assembly of the HereSphere video document

use stash::{
    ResolutionOrder, SceneRecord, StashClient, StashResult, Stream, StreamOptions, get_streams,
};
use tracing::info;

use crate::models::{ACCESS_OWNED, Media, MediaSource, Script, VideoData};
use crate::timeline::{format_3d, timeline_tags};

const DATE_FORMAT: &str = "%Y-%m-%d";

impl From<Stream> for Media {
    fn from(stream: Stream) -> Self {
        Self {
            name: stream.name.as_str().to_string(),
            sources: stream
                .sources
                .into_iter()
                .map(|source| MediaSource {
                    resolution: source.resolution,
                    height: 0,
                    width: 0,
                    size: 0,
                    url: source.url,
                })
                .collect(),
        }
    }
}

impl VideoData {
    /// Build the document for an already fetched scene.
    ///
    /// Sources are listed highest resolution first so the player starts
    /// with the best one.
    pub fn from_scene(scene: &SceneRecord, api_key: Option<&str>) -> Self {
        let options = StreamOptions {
            order: ResolutionOrder::Descending,
            api_key: api_key.map(str::to_string),
        };
        let format = format_3d(&scene.tags);

        Self {
            access: ACCESS_OWNED,
            title: scene.title.clone(),
            description: scene.details.clone(),
            date_added: scene.created_at.format(DATE_FORMAT).to_string(),
            thumbnail_image: scene.paths.screenshot.clone(),
            thumbnail_video: scene.paths.preview.clone(),
            duration: (scene.file().duration as i64).saturating_mul(1000),
            rating: scene.rating.unwrap_or(0) as f32,
            media: get_streams(scene, &options)
                .into_iter()
                .map(Media::from)
                .collect(),
            tags: timeline_tags(scene),
            projection: format.projection,
            stereo: format.stereo,
            scripts: scripts(scene),
        }
    }
}

fn scripts(scene: &SceneRecord) -> Vec<Script> {
    if !scene.interactive {
        return Vec::new();
    }

    vec![Script {
        name: format!("Script-{}", scene.title),
        url: scene.paths.funscript.clone(),
    }]
}

/// Fetch a scene from Stash and build its document
pub async fn build_video_data(
    client: &StashClient,
    api_key: Option<&str>,
    video_id: &str,
) -> StashResult<VideoData> {
    let scene = client.find_scene(video_id).await?;
    info!("Building video data for scene {}", scene.id);

    Ok(VideoData::from_scene(&scene, api_key))
}
