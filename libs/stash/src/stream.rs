//! Stream catalog for a scene
//!
//! Stash advertises one entry per transcode it can produce, plus the
//! original file. Players want a short list of named streams instead, each
//! holding one source per resolution. This module builds that list.

use regex::Regex;
use reqwest::Url;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::warn;

use crate::error::ResolutionError;
use crate::models::{SceneRecord, SceneStream};

const API_KEY_PARAM: &str = "apikey";
const DIRECT_STREAM_LABEL: &str = "direct stream";
/// Base used only to parse relative stream URLs; never part of the output
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Name of an emitted stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamName {
    /// The original file, untouched
    Direct,
    H264,
    H265,
    /// Transcodes of a file whose codec players may not handle
    Transcoded,
}

impl StreamName {
    /// Get the stream name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamName::Direct => "direct",
            StreamName::H264 => "h264",
            StreamName::H265 => "h265",
            StreamName::Transcoded => "transcoded",
        }
    }
}

/// A playable URL at a given vertical resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub resolution: u32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    pub name: StreamName,
    pub sources: Vec<Source>,
}

/// Order of sources inside a stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolutionOrder {
    Ascending,
    #[default]
    Descending,
}

/// Options for [`get_streams`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamOptions {
    pub order: ResolutionOrder,
    /// Token appended as `apikey` to every source URL when set
    pub api_key: Option<String>,
}

/// Extract the height from a label such as "mp4 hd (720p)".
///
/// Callers are expected to lower-case the label first.
pub fn parse_resolution_from_label(label: &str) -> Result<u32, ResolutionError> {
    static RESOLUTION_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = RESOLUTION_REGEX
        .get_or_init(|| Regex::new(r"\((\d+)p\)").expect("Failed to compile resolution regex"));

    let captures = regex.captures(label).ok_or(ResolutionError::NotFound)?;
    let height = captures[1].parse()?;

    Ok(height)
}

/// Build the stream catalog for a scene.
///
/// The original file is always listed as "direct" unless the codec is not
/// one players are known to decode, in which case only the transcodes are
/// offered.
pub fn get_streams(scene: &SceneRecord, options: &StreamOptions) -> Vec<Stream> {
    let file = scene.file();

    let original = Stream {
        name: StreamName::Direct,
        sources: vec![Source {
            resolution: file.height,
            url: scene.paths.stream.clone(),
        }],
    };

    let mut mp4_sources = get_mp4_sources(&scene.streams, file.height);
    sort_sources_by_resolution(&mut mp4_sources, options.order);

    let mut streams = match file.video_codec.as_str() {
        "h264" => vec![
            original,
            Stream {
                name: StreamName::H264,
                sources: mp4_sources,
            },
        ],
        "hevc" | "h265" => vec![
            original,
            Stream {
                name: StreamName::H265,
                sources: mp4_sources,
            },
        ],
        _ => vec![Stream {
            name: StreamName::Transcoded,
            sources: mp4_sources,
        }],
    };

    if let Some(api_key) = options.api_key.as_deref().filter(|key| !key.is_empty()) {
        for source in streams.iter_mut().flat_map(|s| s.sources.iter_mut()) {
            source.url = api_keyed(&source.url, api_key);
        }
    }

    streams
}

/// Collect one source per resolution, keeping the first URL seen for each.
fn get_mp4_sources(streams: &[SceneStream], file_height: u32) -> Vec<Source> {
    let mut by_resolution: BTreeMap<u32, String> = BTreeMap::new();

    for stream in streams {
        let label = stream.label.to_lowercase();

        let resolution = if label.contains("mp4") {
            match parse_resolution_from_label(&label) {
                Ok(resolution) => resolution,
                Err(e) => {
                    warn!("Unmatched stream label {:?}: {}", label, e);
                    continue;
                }
            }
        } else if label == DIRECT_STREAM_LABEL {
            file_height
        } else {
            continue;
        };

        by_resolution
            .entry(resolution)
            .or_insert_with(|| stream.url.clone());
    }

    by_resolution
        .into_iter()
        .map(|(resolution, url)| Source { resolution, url })
        .collect()
}

fn sort_sources_by_resolution(sources: &mut [Source], order: ResolutionOrder) {
    match order {
        ResolutionOrder::Ascending => sources.sort_by(|a, b| a.resolution.cmp(&b.resolution)),
        ResolutionOrder::Descending => sources.sort_by(|a, b| b.resolution.cmp(&a.resolution)),
    }
}

/// Stash adds `apikey` to the direct stream URL but not to transcodes.
///
/// Relative URLs are keyed as well and stay relative. Only a URL that cannot
/// be parsed even against a base becomes the empty string.
fn api_keyed(stream_url: &str, api_key: &str) -> String {
    let (mut url, relative) = match Url::parse(stream_url) {
        Ok(url) => (url, false),
        Err(_) => match Url::parse(RELATIVE_BASE).and_then(|base| base.join(stream_url)) {
            Ok(url) => (url, true),
            Err(e) => {
                warn!("Dropping unparseable stream url {:?}: {}", stream_url, e);
                return String::new();
            }
        },
    };

    if url.query_pairs().any(|(key, _)| key == API_KEY_PARAM) {
        return stream_url.to_string();
    }

    url.query_pairs_mut().append_pair(API_KEY_PARAM, api_key);

    if !relative {
        return url.into();
    }

    let path = stream_url.split(['?', '#']).next().unwrap_or_default();
    let mut keyed = format!("{}?{}", path, url.query().unwrap_or_default());
    if let Some(fragment) = url.fragment() {
        keyed.push('#');
        keyed.push_str(fragment);
    }
    keyed
}
