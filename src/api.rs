// API client module: a small blocking HTTP client for the DeepAI inference
// endpoints. One authenticated multipart POST per run; the heavy lifting
// happens on the remote side.

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client, Response};
use serde::Deserialize;
use serde_json::Value;
use std::env;
use std::path::Path;
use std::time::Duration;

use crate::error::DeepaiError;
use crate::ops::Operation;

/// Hosted API base. `DEEPAI_API_URL` overrides it, which is how the test
/// suite points the client at a local stand-in.
const API_BASE_URL: &str = "https://api.deepai.org/api";

/// Bound on each network stage. Inference on the larger models can take a
/// while, so this is generous, but it is no longer unbounded.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the inference endpoints: a reqwest blocking client, the
/// resolved base URL and the caller's API key.
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Body returned by the image-producing models.
#[derive(Debug, Deserialize)]
struct TransformResponse {
    output_url: Option<String>,
}

/// Body returned by the similarity model.
#[derive(Debug, Deserialize)]
struct SimilarityResponse {
    output: Value,
}

impl ApiClient {
    /// Build a client around an API key, reading the base URL override from
    /// the environment.
    pub fn new(api_key: String) -> Result<Self> {
        let base_url = env::var("DEEPAI_API_URL").unwrap_or_else(|_| API_BASE_URL.into());
        let client = Client::builder()
            .user_agent(concat!("deepai-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url,
            api_key,
        })
    }

    /// Run one of the image-producing models over a single input and return
    /// the URL of the generated image.
    pub fn transform(&self, operation: Operation, image: &Path) -> Result<String> {
        let response = self.call_model(operation, &[("image", image)])?;
        let parsed: TransformResponse = response.json().map_err(|err| {
            DeepaiError::RemoteCallFailure {
                operation: operation.name(),
                reason: format!("unreadable response: {err}"),
            }
        })?;

        parsed.output_url.ok_or_else(|| {
            DeepaiError::RemoteCallFailure {
                operation: operation.name(),
                reason: "response did not include an output_url".into(),
            }
            .into()
        })
    }

    /// Score two images against the similarity model. The raw `output`
    /// value is returned for the caller to print.
    pub fn similarity(&self, image1: &Path, image2: &Path) -> Result<Value> {
        let operation = Operation::Similarity;
        let response = self.call_model(operation, &[("image1", image1), ("image2", image2)])?;
        let parsed: SimilarityResponse = response.json().map_err(|err| {
            DeepaiError::RemoteCallFailure {
                operation: operation.name(),
                reason: format!("unreadable response: {err}"),
            }
        })?;
        Ok(parsed.output)
    }

    /// POST the given image files to the operation's endpoint as multipart
    /// form data, authenticated with the `api-key` header. Non-success
    /// statuses are reported with the response body, which is where the
    /// hosted API explains itself.
    fn call_model(
        &self,
        operation: Operation,
        images: &[(&'static str, &Path)],
    ) -> Result<Response> {
        let url = format!("{}/{}", self.base_url, operation.endpoint());

        let mut form = multipart::Form::new();
        for (field, path) in images {
            form = form
                .file(*field, path)
                .with_context(|| format!("Failed to open image file {}", path.display()))?;
        }

        let response = self
            .client
            .post(&url)
            .header("api-key", self.api_key.as_str())
            .multipart(form)
            .send()
            .map_err(|err| DeepaiError::RemoteCallFailure {
                operation: operation.name(),
                reason: err.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_else(|_| "".into());
            return Err(DeepaiError::RemoteCallFailure {
                operation: operation.name(),
                reason: format!("{} - {}", status, body),
            }
            .into());
        }

        Ok(response)
    }
}
