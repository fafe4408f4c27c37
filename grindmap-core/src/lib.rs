//! GrindMap Core Library
//!
//! Provides the input-side business logic of GrindMap, including:
//! - Platform registry (display names, profile URL fragments, username patterns)
//! - Identifier normalization (pasted profile links → bare usernames)
//! - Per-platform search history with pluggable persistence
//! - Focus / highlight state machine for the history dropdown
//! - Fetch gate deciding when a fetch may be triggered
//!
//! This library is UI-independent, abstracting storage and the fetch
//! collaborator through traits, so any front-end (terminal, desktop, web) can host it.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, IdentifierError};
pub use services::{
    can_fetch, normalize, FetchDecision, FetchRejection, HistoryStore, InteractionState,
    KeyOutcome, NavKey, Normalized, UsernameForm, DEFAULT_BLUR_DELAY, HISTORY_KEY, MAX_HISTORY,
};
pub use traits::{FormHost, InMemoryKeyValueStore, KeyValueStore};
pub use types::{FetchRequest, FieldState, FormFields, Platform, PlatformConfig};
