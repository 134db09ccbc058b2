pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod wrap;
pub mod items;
pub mod query;

/*

askgpt is the query-dispatch and response-formatting core of a
launcher-style GPT extension: the host shell hands over its raw
preference strings and the search term as typed, and gets back
the ordered result items to render. Everything between those two
points lives here.

askgpt/
├── Cargo.toml          # Main manifest
├── src/
│   ├── lib.rs          # Re-exports and main documentation
│   ├── error.rs        # Custom error types and handling
│   ├── config.rs       # Preference resolution
│   ├── request.rs      # Outbound request types and assembly
│   ├── wrap.rs         # Fixed-width word wrapping
│   ├── items.rs        # Result items handed to the host
│   ├── query.rs        # Keystroke and Enter pipelines
│   └── providers/      # Completion service backends
│       ├── mod.rs      # Re-exports all providers
│       └── openai.rs   # OpenAI chat-completions client
└── tests/              # Integration tests

*/

// Re-export for convenience
pub use config::{resolve_preferences, GenerationConfig};
pub use error::Error;
pub use items::{ItemAction, ResultItem};
pub use providers::openai::OpenAiClient;
pub use query::{handle_enter, handle_query};
pub use request::{
  build_request, BuiltRequest, ChatMessage, CompletionRequest
};
pub use wrap::wrap_text;
