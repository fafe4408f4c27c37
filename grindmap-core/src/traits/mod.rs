//! Collaborator abstraction trait definition

mod form_host;
mod key_value_store;

pub use form_host::FormHost;
pub use key_value_store::{InMemoryKeyValueStore, KeyValueStore};
