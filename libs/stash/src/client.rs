//! GraphQL client for the Stash backend
//!
//! Only the handful of queries the bridge needs are supported. Responses
//! are decoded straight into the models of [`crate::models`].

use common::config::StashConfig;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{error, info};

use crate::error::{StashError, StashResult};
use crate::models::SceneRecord;

/// Header Stash reads the API key from
const API_KEY_HEADER: &str = "ApiKey";

pub const FIND_SCENE_QUERY: &str = r#"
query FindScene($id: ID!) {
  findScene(id: $id) {
    id
    title
    details
    created_at
    rating100
    interactive
    files {
      duration
      height
      video_codec
    }
    paths {
      stream
      screenshot
      preview
      funscript
    }
    sceneStreams {
      url
      label
    }
    tags {
      name
    }
    studio {
      name
      rating100
    }
    scene_markers {
      title
      seconds
    }
    performers {
      name
      rating100
    }
  }
}
"#;

const VERSION_QUERY: &str = "query Version { version { version } }";

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct FindSceneData {
    #[serde(rename = "findScene")]
    find_scene: Option<SceneRecord>,
}

#[derive(Debug, Deserialize)]
struct VersionData {
    version: Value,
}

/// Stash GraphQL client
#[derive(Debug, Clone)]
pub struct StashClient {
    client: Client,
    graphql_url: String,
    api_key: Option<String>,
}

impl StashClient {
    /// Create a new Stash client
    pub fn new(config: &StashConfig) -> StashResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        info!("Stash client initialized");

        Ok(Self {
            client,
            graphql_url: config.graphql_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch a single scene by id
    pub async fn find_scene(&self, id: &str) -> StashResult<SceneRecord> {
        let data: FindSceneData = self.query(FIND_SCENE_QUERY, json!({ "id": id })).await?;

        data.find_scene
            .ok_or_else(|| StashError::SceneNotFound(id.to_string()))
    }

    /// Check if Stash is reachable
    pub async fn health_check(&self) -> StashResult<bool> {
        match self.query::<VersionData>(VERSION_QUERY, json!({})).await {
            Ok(data) => {
                info!("Stash health check successful, version {}", data.version);
                Ok(true)
            }
            Err(e) => {
                error!("Stash health check failed: {}", e);
                Ok(false)
            }
        }
    }

    async fn query<T: DeserializeOwned>(&self, query: &str, variables: Value) -> StashResult<T> {
        let mut request = self.client.post(&self.graphql_url).json(&json!({
            "query": query,
            "variables": variables,
        }));

        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StashError::Status { status, body });
        }

        let body: GraphQlResponse<T> = response.json().await?;

        if !body.errors.is_empty() {
            let messages: Vec<String> = body.errors.into_iter().map(|e| e.message).collect();
            return Err(StashError::GraphQl(messages.join("; ")));
        }

        body.data
            .ok_or_else(|| StashError::GraphQl("Response contained no data".to_string()))
    }
}
