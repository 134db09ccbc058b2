//! Outbound request types and assembly

use serde::{Deserialize, Serialize};
use log::debug;

/// One conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

/// Chat-completions request body
///
/// Serialized field order follows declaration order and is part
/// of the wire contract; keep it fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest
{   pub messages: Vec<ChatMessage>
  , pub temperature: f32
  , pub max_tokens: u32
  , pub top_p: f32
  , pub frequency_penalty: f32
  , pub presence_penalty: f32
  , pub model: String
}

/// Outcome of request assembly
#[derive(Debug, Clone)]
pub enum BuiltRequest
{   /// A dispatchable request
    Ready(CompletionRequest)
  , /// Empty input; show the placeholder instead of dispatching
    Blank
}

/// Assemble the request for a search term
///
/// The empty string yields `Blank`. Whitespace-only input is not
/// blank and dispatches verbatim.
pub fn build_request(
  search_term: &str
, config: &crate::config::GenerationConfig
) -> BuiltRequest
{   if search_term.is_empty()
    {   debug!("Empty search term, nothing to dispatch");
        return BuiltRequest::Blank;
    }

    BuiltRequest::Ready(CompletionRequest
    {   messages: vec![
          ChatMessage
          {   role: "system".to_string()
            , content: config.system_prompt.clone()
          }
        , ChatMessage
          {   role: "user".to_string()
            , content: search_term.to_string()
          }
        ]
      , temperature: config.temperature
      , max_tokens: config.max_tokens
      , top_p: config.top_p
      , frequency_penalty: config.frequency_penalty
      , presence_penalty: config.presence_penalty
      , model: config.model.clone()
    })
}
