//! Timeline tags for the HereSphere player
//!
//! HereSphere shows everything about a video as tags on a timeline. The
//! prefix of a tag name picks the group it is listed under and the track
//! picks the lane it is drawn on.

use stash::models::{SceneMarker, SceneRecord, SceneTag};

use crate::models::Tag;

const STUDIO_PREFIX: &str = "Studio:";
const TAG_PREFIX: &str = "#:";
const MARKER_PREFIX: &str = "@:";
const PERFORMER_PREFIX: &str = "Performer:";

const PROJECTION_EQUIRECTANGULAR: &str = "equirectangular";
const STEREO_SBS: &str = "sbs";

/// Projection and stereo mode derived from a scene's tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format3d {
    pub projection: String,
    pub stereo: String,
}

/// Read the 3D format from tags named exactly "DOME" or "SBS".
pub fn format_3d(tags: &[SceneTag]) -> Format3d {
    let mut format = Format3d::default();

    for tag in tags {
        match tag.name.as_str() {
            "DOME" => format.projection = PROJECTION_EQUIRECTANGULAR.to_string(),
            "SBS" => format.stereo = STEREO_SBS.to_string(),
            _ => {}
        }
    }

    format
}

/// All timeline tags of a scene, in display order: studio, tags, markers,
/// performers.
pub fn timeline_tags(scene: &SceneRecord) -> Vec<Tag> {
    let mut tags = Vec::with_capacity(
        1 + scene.tags.len() + scene.markers.len() + scene.performers.len(),
    );

    if let Some(studio) = &scene.studio {
        tags.push(Tag {
            name: format!("{}{}", STUDIO_PREFIX, studio.name),
            start: 0,
            end: 0,
            track: Some(0),
            rating: rating(studio.rating),
        });
    }

    tags.extend(scene.tags.iter().map(|tag| Tag {
        name: format!("{}{}", TAG_PREFIX, tag.name),
        start: 0,
        end: 0,
        track: Some(0),
        rating: 0.0,
    }));

    tags.extend(marker_tags(&scene.markers));

    tags.extend(scene.performers.iter().map(|performer| Tag {
        name: format!("{}{}", PERFORMER_PREFIX, performer.name),
        start: 0,
        end: 0,
        track: Some(0),
        rating: rating(performer.rating),
    }));

    tags
}

/// Each marker gets a lane of its own, starting at track 1.
fn marker_tags(markers: &[SceneMarker]) -> impl Iterator<Item = Tag> + '_ {
    markers.iter().zip(1..).map(|(marker, track)| Tag {
        name: format!("{}{}", MARKER_PREFIX, marker.title),
        start: (marker.seconds * 1000.0) as i64,
        end: 0,
        track: Some(track),
        rating: 0.0,
    })
}

fn rating(rating100: Option<u32>) -> f32 {
    rating100.unwrap_or(0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use stash::models::{Performer, Studio};

    fn tag(name: &str) -> SceneTag {
        SceneTag {
            name: name.to_string(),
        }
    }

    fn marker(title: &str, seconds: f64) -> SceneMarker {
        SceneMarker {
            title: title.to_string(),
            seconds,
        }
    }

    fn scene() -> SceneRecord {
        SceneRecord {
            id: "1".to_string(),
            title: "Scene".to_string(),
            details: String::new(),
            created_at: DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z").unwrap(),
            rating: None,
            interactive: false,
            files: vec![],
            paths: Default::default(),
            streams: vec![],
            tags: vec![],
            studio: None,
            markers: vec![],
            performers: vec![],
        }
    }

    #[test]
    fn test_timeline_order() {
        let scene = SceneRecord {
            studio: Some(Studio {
                name: "Skyline".to_string(),
                rating: Some(70),
            }),
            tags: vec![tag("Outdoor"), tag("DOME")],
            markers: vec![marker("Intro", 12.5)],
            performers: vec![Performer {
                name: "Robin".to_string(),
                rating: Some(80),
            }],
            ..scene()
        };

        let tags = timeline_tags(&scene);

        assert_eq!(
            tags,
            vec![
                Tag {
                    name: "Studio:Skyline".to_string(),
                    start: 0,
                    end: 0,
                    track: Some(0),
                    rating: 70.0,
                },
                Tag {
                    name: "#:Outdoor".to_string(),
                    start: 0,
                    end: 0,
                    track: Some(0),
                    rating: 0.0,
                },
                Tag {
                    name: "#:DOME".to_string(),
                    start: 0,
                    end: 0,
                    track: Some(0),
                    rating: 0.0,
                },
                Tag {
                    name: "@:Intro".to_string(),
                    start: 12500,
                    end: 0,
                    track: Some(1),
                    rating: 0.0,
                },
                Tag {
                    name: "Performer:Robin".to_string(),
                    start: 0,
                    end: 0,
                    track: Some(0),
                    rating: 80.0,
                },
            ]
        );
    }

    #[test]
    fn test_marker_tracks_follow_source_order() {
        let scene = SceneRecord {
            markers: vec![
                marker("Late", 300.0),
                marker("Early", 1.0),
                marker("Late", 300.0),
                marker("Fraction", 0.0019),
            ],
            ..scene()
        };

        let tags = timeline_tags(&scene);

        let tracks: Vec<Option<u32>> = tags.iter().map(|t| t.track).collect();
        assert_eq!(tracks, vec![Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(tags[0].name, "@:Late");
        assert_eq!(tags[2].name, "@:Late");
        assert_eq!(tags[1].start, 1000);
        assert_eq!(tags[3].start, 1);
    }

    #[test]
    fn test_empty_scene_has_no_tags() {
        assert!(timeline_tags(&scene()).is_empty());
    }

    #[test]
    fn test_unrated_studio_and_performer() {
        let scene = SceneRecord {
            studio: Some(Studio {
                name: "Indie".to_string(),
                rating: None,
            }),
            performers: vec![Performer {
                name: "Sam".to_string(),
                rating: None,
            }],
            ..scene()
        };

        let tags = timeline_tags(&scene);

        assert_eq!(tags.len(), 2);
        assert!(tags.iter().all(|t| t.rating == 0.0 && t.track == Some(0)));
    }

    #[test]
    fn test_format_3d() {
        assert_eq!(format_3d(&[tag("Outdoor")]), Format3d::default());

        let dome = format_3d(&[tag("DOME")]);
        assert_eq!(dome.projection, "equirectangular");
        assert_eq!(dome.stereo, "");

        let sbs = format_3d(&[tag("SBS")]);
        assert_eq!(sbs.projection, "");
        assert_eq!(sbs.stereo, "sbs");

        let both = format_3d(&[tag("SBS"), tag("Outdoor"), tag("DOME")]);
        assert_eq!(both.projection, "equirectangular");
        assert_eq!(both.stereo, "sbs");
    }

    #[test]
    fn test_format_3d_is_case_sensitive() {
        assert_eq!(format_3d(&[tag("dome"), tag("Sbs")]), Format3d::default());
    }
}
