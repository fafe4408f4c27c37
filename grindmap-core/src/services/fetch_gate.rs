//! Fetch Gate

use crate::traits::FormHost;
use crate::types::{FetchRequest, FormFields};

use super::HistoryStore;

/// Why a fetch request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRejection {
    /// A previous fetch is still in flight
    Loading,
    /// At least one field carries a validation error
    HasErrors,
    /// Every field is empty
    AllEmpty,
}

/// Outcome of [`submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchDecision {
    Accepted(FetchRequest),
    Rejected(FetchRejection),
}

impl FetchDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// `true` iff no field holds an error and at least one field is non-empty
pub fn can_fetch(fields: &FormFields) -> bool {
    check(fields).is_ok()
}

fn check(fields: &FormFields) -> Result<(), FetchRejection> {
    if fields.any_error() {
        return Err(FetchRejection::HasErrors);
    }
    if fields.all_empty() {
        return Err(FetchRejection::AllEmpty);
    }
    Ok(())
}

/// Run the gate
///
/// On acceptance every non-empty, error-free field is promoted in `history`
/// and the host is signalled exactly once. On rejection nothing is mutated
/// and the host is not called.
pub fn submit(
    fields: &FormFields,
    history: &mut HistoryStore,
    loading: bool,
    host: &mut dyn FormHost,
) -> FetchDecision {
    if loading {
        return FetchDecision::Rejected(FetchRejection::Loading);
    }
    if let Err(reason) = check(fields) {
        log::debug!("Fetch rejected: {reason:?}");
        return FetchDecision::Rejected(reason);
    }

    let request = FetchRequest {
        usernames: fields
            .iter()
            .filter(|(_, field)| field.is_accepted())
            .map(|(platform, field)| (platform, field.value.clone()))
            .collect(),
    };

    history.promote_all(
        request
            .usernames
            .iter()
            .map(|(platform, name)| (*platform, name.as_str())),
    );

    log::info!("Fetch accepted for {} platform(s)", request.usernames.len());
    host.fetch_requested(&request);

    FetchDecision::Accepted(request)
}
