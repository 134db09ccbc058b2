//! Preference resolution into typed generation settings

use std::collections::HashMap;
use log::{debug, error};

/// Generation settings resolved from the host's preference snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig
{   /// API key sent as the bearer credential
    pub api_key: String
  , /// Model identifier
    pub model: String
  , /// System prompt prepended to every query
    pub system_prompt: String
  , /// Sampling temperature
    pub temperature: f32
  , /// Completion length cap
    pub max_tokens: u32
  , /// Nucleus sampling bound
    pub top_p: f32
  , /// Frequency penalty
    pub frequency_penalty: f32
  , /// Presence penalty
    pub presence_penalty: f32
  , /// Display width for wrapped bodies
    pub line_wrap: usize
  , /// Defer dispatch until the host confirms with Enter
    pub wait_for_enter: bool
}

/// Coerce the raw preference map into a typed config
///
/// Values are coerced in a fixed order, so when several are bad
/// the first in that order is the one reported. Parseable values
/// pass through unclamped; range policy belongs to the service.
pub fn resolve_preferences(
  preferences: &HashMap<String, String>
) -> Result<GenerationConfig, crate::error::Error>
{   debug!("Processing user preferences");

    Ok(GenerationConfig
    {   api_key: required(preferences, "api_key")?.to_string()
      , max_tokens: parse_required(preferences, "max_tokens")?
      , frequency_penalty: parse_required(
          preferences
        , "frequency_penalty"
        )?
      , presence_penalty: parse_required(
          preferences
        , "presence_penalty"
        )?
      , temperature: parse_required(preferences, "temperature")?
      , top_p: parse_required(preferences, "top_p")?
      , system_prompt: required(preferences, "system_prompt")?
          .to_string()
      , line_wrap: parse_required(preferences, "line_wrap")?
      , model: required(preferences, "model")?.to_string()
      , wait_for_enter: parse_required::<i64>(
          preferences
        , "wait_before_query"
        )? != 0
    })
}

fn required<'a>(
  preferences: &'a HashMap<String, String>
, field: &'static str
) -> Result<&'a str, crate::error::Error>
{   preferences.get(field)
      .map(|value| value.as_str())
      .ok_or_else(|| {
        error!("Missing preference: {}", field);
        crate::error::Error::MissingPreference(field)
      })
}

fn parse_required<T>(
  preferences: &HashMap<String, String>
, field: &'static str
) -> Result<T, crate::error::Error>
where
  T: std::str::FromStr
, T::Err: std::fmt::Display
{   let raw = required(preferences, field)?;
    raw.parse().map_err(|e: T::Err| {
      error!("Invalid preference {}: {:?}", field, raw);
      crate::error::Error::InvalidPreference
      {   field
        , value: raw.to_string()
        , cause: e.to_string()
      }
    })
}
