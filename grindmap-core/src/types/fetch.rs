//! Fetch request handed to the host

use serde::Serialize;

use super::Platform;

/// Usernames accepted by one Fetch Gate pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    /// `(platform, username)` pairs in display order
    pub usernames: Vec<(Platform, String)>,
}

impl FetchRequest {
    pub fn is_empty(&self) -> bool {
        self.usernames.is_empty()
    }

    /// Username submitted for `platform`, if any
    pub fn username(&self, platform: Platform) -> Option<&str> {
        self.usernames
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, name)| name.as_str())
    }
}
