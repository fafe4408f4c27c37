//! 业务逻辑服务层

mod fetch_gate;
mod history_service;
mod interaction;
mod normalizer;
mod username_form;

pub use fetch_gate::{can_fetch, submit, FetchDecision, FetchRejection};
pub use history_service::{HistoryStore, HISTORY_KEY, MAX_HISTORY};
pub use interaction::{Commit, InteractionState, NavKey, Transition, DEFAULT_BLUR_DELAY};
pub use normalizer::{normalize, Normalized};
pub use username_form::{KeyOutcome, UsernameForm};
