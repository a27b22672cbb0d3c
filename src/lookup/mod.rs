mod client;
mod types;
mod worker;

// Re-export public types
pub use client::{HttpBackend, LookupBackend};
pub use types::{
    EndpointKind, LookupError, LookupPage, Suggestion, SuggestionId, parse_lookup_body,
    parse_lookup_value,
};
pub use worker::{LookupHandle, LookupReply, LookupRequest, spawn_worker};
