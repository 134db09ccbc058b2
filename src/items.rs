//! Display items handed back to the host shell

use log::debug;

use crate::request::ChatMessage;
use crate::wrap::wrap_text;

/// Icon reference shared by every item
pub const EXTENSION_ICON: &str = "images/icon.png";

pub const ASSISTANT_TITLE: &str = "Assistant";

pub const BLANK_PROMPT_TITLE: &str = "Type in a prompt...";

pub const PREFERENCES_ERROR_TITLE: &str
  = "Failed to parse preferences";

pub const REQUEST_FAILED_TITLE: &str = "Request failed";

/// What the host should do when an item is activated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction
{   /// Copy the payload to the clipboard
    CopyToClipboard(String)
  , /// Inert item
    DoNothing
  , /// Re-dispatch the captured search term on Enter
    DeferredQuery(String)
}

/// One display row: icon, title, body, and an activation action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem
{   pub icon: &'static str
  , pub title: String
  , pub body: String
  , pub action: ItemAction
}

/// One item per candidate, order preserved
///
/// The copy action carries the wrapped body exactly as displayed.
pub fn candidate_items(
  candidates: Vec<ChatMessage>
, line_wrap: usize
) -> Vec<ResultItem>
{   let items: Vec<ResultItem> = candidates
      .into_iter()
      .map(|candidate| {
        let body = wrap_text(&candidate.content, line_wrap);
        ResultItem
        {   icon: EXTENSION_ICON
          , title: ASSISTANT_TITLE.to_string()
          , body: body.clone()
          , action: ItemAction::CopyToClipboard(body)
        }
      })
      .collect();

    debug!(
      "Results: {}"
    , items
        .iter()
        .map(|item| item.body.as_str())
        .collect::<Vec<_>>()
        .join(" | ")
    );

    items
}

/// Exactly one item describing a failure
///
/// The body is the full stringified error, never wrapped;
/// resolution failures can predate a usable line width.
pub fn error_item(error: &crate::error::Error) -> ResultItem
{   let title = match error
    {   crate::error::Error::MissingPreference(_)
      | crate::error::Error::InvalidPreference { .. } => {
          PREFERENCES_ERROR_TITLE
        }
      , _ => {
          REQUEST_FAILED_TITLE
        }
    };

    let body = error.to_string();
    ResultItem
    {   icon: EXTENSION_ICON
      , title: title.to_string()
      , body: body.clone()
      , action: ItemAction::CopyToClipboard(body)
    }
}

/// Placeholder shown while the prompt is still empty
pub fn blank_prompt_item() -> ResultItem
{   ResultItem
    {   icon: EXTENSION_ICON
      , title: BLANK_PROMPT_TITLE.to_string()
      , body: String::new()
      , action: ItemAction::DoNothing
    }
}

/// Confirmation item carrying the search term as typed
///
/// Replay must use the embedded payload, never the host's live
/// input at Enter time.
pub fn deferred_query_item(search_term: &str) -> ResultItem
{   ResultItem
    {   icon: EXTENSION_ICON
      , title: format!(
          "Waiting until Enter is pressed: {}", search_term
        )
      , body: String::new()
      , action: ItemAction::DeferredQuery(
          search_term.to_string()
        )
    }
}
