//! Saving workflow drafts to the workflow service.

use crate::config::ClientConfig;
use crate::error::ClientError;
use cognito_canvas_graph::WorkflowDraft;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// The service's record of a newly created workflow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedWorkflow {
    /// Identifier assigned by the service. Accepted as either a JSON string
    /// or number and kept opaque; the UI only needs it for navigation.
    #[serde(deserialize_with = "id_string_or_number")]
    pub id: String,
    /// Name as stored, if the service echoes it back.
    #[serde(default)]
    pub name: String,
}

impl CreatedWorkflow {
    /// The detail-view path for this workflow.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("/workflows/{}", self.id)
    }
}

fn id_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// REST client for the workflow service.
#[derive(Debug, Clone)]
pub struct WorkflowsClient {
    http: reqwest::Client,
    base_url: String,
}

impl WorkflowsClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a workflow from a draft.
    ///
    /// The draft is validated locally before any request is made: an unnamed
    /// draft is rejected without touching the network, so a failed save
    /// leaves nothing half-sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NameRequired`] for unnamed drafts,
    /// [`ClientError::UnexpectedStatus`] when the service rejects the
    /// payload, and [`ClientError::Http`] for transport failures.
    pub async fn create(&self, draft: &WorkflowDraft) -> Result<CreatedWorkflow, ClientError> {
        if !draft.has_name() {
            return Err(ClientError::NameRequired);
        }

        let url = format!("{}/api/workflows", self.base_url);
        tracing::debug!(workflow_name = %draft.name, "saving workflow draft");

        let response = self.http.post(&url).json(draft).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "workflow save rejected");
            return Err(ClientError::UnexpectedStatus { status, body });
        }

        let created: CreatedWorkflow = response.json().await?;
        tracing::debug!(workflow_id = %created.id, "workflow saved");
        Ok(created)
    }
}
