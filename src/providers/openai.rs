use serde::Deserialize;
use log::{debug, trace, error};
use std::time::Duration;

use crate::request::{ChatMessage, CompletionRequest};

const OPENAI_API_BASE: &str
  = "https://api.openai.com/v1";

/// Covers the whole exchange, connect through body read
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const UNKNOWN_ERROR_MESSAGE: &str
  = "Unknown error, please check logs for more info";

// ===== Response Types =====

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , pub finish_reason: Option<String>
  , pub index: Option<u32>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody
{   pub error: ErrorDetail
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail
{   pub message: String
}

// ===== Response Normalization =====

/// Decode a raw response body into ordered candidates
///
/// An empty `choices` list is a valid empty result. Any other
/// shape becomes a `ServiceError` carrying the raw body plus the
/// service's own message when one can be extracted.
pub fn normalize_response(raw: &str)
  -> Result<Vec<ChatMessage>, crate::error::Error>
{   match serde_json::from_str::<CompletionResponse>(raw)
    {   Ok(response) => {
          trace!("Decoded {} choices", response.choices.len());
          Ok(response.choices
            .into_iter()
            .map(|choice| choice.message)
            .collect()
          )
        }
      , Err(e) => {
          error!("Failed to parse response: {}", raw);
          debug!("Decode error: {}", e);
          let message = serde_json::from_str::<ErrorBody>(raw)
            .map(|body| body.error.message)
            .unwrap_or_else(|_|
              UNKNOWN_ERROR_MESSAGE.to_string()
            );
          Err(crate::error::Error::ServiceError
          {   raw: raw.to_string()
            , message
          })
        }
    }
}

// ===== OpenAI Client =====

/// HTTP client for the chat-completions endpoint
pub struct OpenAiClient
{   http_client: reqwest::Client
  , api_base: String
}

impl OpenAiClient
{   /// Client against the public API base
    pub fn new() -> Self
    {   OpenAiClient::with_api_base(
          OPENAI_API_BASE.to_string()
        )
    }

    /// Client against a custom API base
    ///
    /// For self-hosted gateways and wire-level tests.
    pub fn with_api_base(api_base: String) -> Self
    {   debug!("Creating OpenAiClient for: {}", api_base);
        OpenAiClient
        {   http_client: reqwest::Client::new()
          , api_base
        }
    }

    /// POST the request and return the raw response body
    ///
    /// The body comes back for any HTTP status; sorting success
    /// from error shapes is `normalize_response`'s job.
    pub async fn send(
      &self
    , request: &CompletionRequest
    , api_key: &str
    ) -> Result<String, crate::error::Error>
    {   debug!("Dispatching completion request");
        trace!("Request body: {:?}", request);

        let exchange = async {
          let response = self.http_client
            .post(format!(
              "{}/chat/completions", self.api_base
            ))
            .header(
              "Authorization"
            , format!("Bearer {}", api_key)
            )
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
              error!("HTTP error: {}", e);
              crate::error::Error::HttpError(e.to_string())
            })?;

          trace!("Response status: {}", response.status());

          response.text().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })
        };

        match tokio::time::timeout(REQUEST_TIMEOUT, exchange)
          .await
        {   Ok(result) => {
              if result.is_ok()
              {   debug!("Request succeeded");
              }
              result
            }
          , Err(_) => {
              error!("Request timed out");
              Err(crate::error::Error::Timeout)
            }
        }
    }
}

impl Default for OpenAiClient
{   fn default() -> Self
    {   OpenAiClient::new()
    }
}
