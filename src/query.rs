//! Host-facing query pipeline

use std::collections::HashMap;
use log::{debug, info, error};

/// Keystroke path: resolve, defer if configured, else dispatch
///
/// Every failure is recovered into exactly one result item; the
/// host never sees a panic. An empty candidate list renders as
/// zero items.
pub async fn handle_query(
  client: &crate::providers::openai::OpenAiClient
, preferences: &HashMap<String, String>
, search_term: &str
) -> Vec<crate::items::ResultItem>
{   info!("The search term is: {}", search_term);

    let config = match crate::config::resolve_preferences(
      preferences
    )
    {   Ok(config) => {
          config
        }
      , Err(e) => {
          error!("Failed to parse preferences: {}", e);
          return vec![crate::items::error_item(&e)];
        }
    };

    // Empty input still shows the blank prompt in wait mode
    if config.wait_for_enter && !search_term.is_empty()
    {   info!("Waiting for Enter before dispatching");
        return vec![
          crate::items::deferred_query_item(search_term)
        ];
    }

    dispatch(client, &config, search_term).await
}

/// Confirmation path: replay the captured search term
///
/// The host's live input is deliberately not consulted; the
/// captured payload is the whole query.
pub async fn handle_enter(
  client: &crate::providers::openai::OpenAiClient
, preferences: &HashMap<String, String>
, captured: &str
) -> Vec<crate::items::ResultItem>
{   debug!("Replaying captured search term: {}", captured);

    let config = match crate::config::resolve_preferences(
      preferences
    )
    {   Ok(config) => {
          config
        }
      , Err(e) => {
          error!("Failed to parse preferences: {}", e);
          return vec![crate::items::error_item(&e)];
        }
    };

    dispatch(client, &config, captured).await
}

async fn dispatch(
  client: &crate::providers::openai::OpenAiClient
, config: &crate::config::GenerationConfig
, search_term: &str
) -> Vec<crate::items::ResultItem>
{   let request = match crate::request::build_request(
      search_term
    , config
    )
    {   crate::request::BuiltRequest::Ready(request) => {
          request
        }
      , crate::request::BuiltRequest::Blank => {
          info!("Displaying blank prompt");
          return vec![crate::items::blank_prompt_item()];
        }
    };

    let raw = match client.send(&request, &config.api_key).await
    {   Ok(raw) => {
          raw
        }
      , Err(e) => {
          error!("Request failed: {}", e);
          return vec![crate::items::error_item(&e)];
        }
    };

    match crate::providers::openai::normalize_response(&raw)
    {   Ok(candidates) => {
          debug!("Received {} candidates", candidates.len());
          crate::items::candidate_items(
            candidates
          , config.line_wrap
          )
        }
      , Err(e) => {
          error!("Request failed: {}", e);
          vec![crate::items::error_item(&e)]
        }
    }
}
