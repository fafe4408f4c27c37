//! 表单宿主
//!
//! 实现 grindmap-core 的 FormHost trait：
//! 记录每个平台当前生效的用户名，并把放行的请求交给 FetchService。

use std::collections::BTreeMap;

use grindmap_core::{FetchRequest, FormHost, Platform};

use super::{FetchOutcome, FetchService};

/// 连接表单与 relay 的会话
pub struct FetchSession {
    service: Box<dyn FetchService>,
    /// 最近一次规范化成功的用户名
    usernames: BTreeMap<Platform, String>,
    in_flight: usize,
}

impl FetchSession {
    pub fn new(service: Box<dyn FetchService>) -> Self {
        Self {
            service,
            usernames: BTreeMap::new(),
            in_flight: 0,
        }
    }

    pub fn username(&self, platform: Platform) -> Option<&str> {
        self.usernames.get(&platform).map(String::as_str)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight > 0
    }

    /// 取出一个已完成的请求结果
    pub fn poll_outcome(&mut self) -> Option<FetchOutcome> {
        let outcome = self.service.poll()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(outcome)
    }
}

impl FormHost for FetchSession {
    fn identifier_changed(&mut self, platform: Platform, value: &str) {
        if value.is_empty() {
            self.usernames.remove(&platform);
        } else {
            self.usernames.insert(platform, value.to_string());
        }
    }

    fn fetch_requested(&mut self, request: &FetchRequest) {
        log::info!(
            "Submitting {} username(s) to relay",
            request.usernames.len()
        );
        self.in_flight += 1;
        self.service.submit(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::StubFetchService;

    #[test]
    fn tracks_identifier_changes() {
        let mut session = FetchSession::new(Box::new(StubFetchService::default()));
        session.identifier_changed(Platform::LeetCode, "tourist");
        assert_eq!(session.username(Platform::LeetCode), Some("tourist"));

        session.identifier_changed(Platform::LeetCode, "");
        assert_eq!(session.username(Platform::LeetCode), None);
    }

    #[test]
    fn in_flight_until_outcome_arrives() {
        let stub = StubFetchService::default();
        let mut session = FetchSession::new(Box::new(stub.clone()));

        session.fetch_requested(&FetchRequest {
            usernames: vec![(Platform::Codeforces, "tourist".to_string())],
        });
        assert!(session.is_in_flight());
        assert_eq!(stub.submitted().len(), 1);
        assert!(session.poll_outcome().is_none());

        stub.complete_all();
        assert!(session.poll_outcome().is_some());
        assert!(!session.is_in_flight());
    }
}
