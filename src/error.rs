use std::fmt;

/// Custom error type for query handling
/// Implements Clone so failures can be embedded into result items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// A required preference is absent from the host snapshot
    MissingPreference(&'static str)
  , /// A preference value failed numeric coercion
    InvalidPreference
    {   field: &'static str
      , value: String
      , cause: String
    }
  , /// HTTP request error
    HttpError(String)
  , /// The fixed request timeout elapsed
    Timeout
  , /// The service returned a body without usable choices
    ServiceError
    {   raw: String
      , message: String
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingPreference(field) => {
              write!(f, "Missing preference: {}", field)
            }
          , Error::InvalidPreference { field, value, cause } => {
              write!(f,
                "Invalid value {:?} for preference {}: {}",
                value,
                field,
                cause
              )
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::Timeout => {
              write!(f, "Request timed out")
            }
          , Error::ServiceError { raw, message } => {
              // Raw body first, extracted message appended
              write!(f, "{}{}", raw, message)
            }
        }
    }
}

impl std::error::Error for Error {}
