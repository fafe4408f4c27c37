//! Relay 请求服务
//!
//! 把 Fetch Gate 放行的用户名逐个发给 relay（`GET {relay}/api/{platform}/{username}`）。
//! 请求在独立的 tokio 运行时上执行，结果通过 channel 交回主循环，UI 线程从不阻塞。
//! 响应体不做解析。

use std::time::Duration;

use anyhow::Result;
use grindmap_core::{FetchRequest, Platform};
use thiserror::Error;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

/// 单个请求超时
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// 单个平台的请求错误
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relay returned HTTP {0}")]
    Status(u16),
}

/// 单个平台的请求结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformResult {
    pub platform: Platform,
    /// 失败原因，成功时为 None
    pub error: Option<String>,
}

/// 一次提交的全部结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOutcome {
    pub results: Vec<PlatformResult>,
}

impl FetchOutcome {
    pub fn failed(&self) -> impl Iterator<Item = &PlatformResult> {
        self.results.iter().filter(|r| r.error.is_some())
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.error.is_none()).count()
    }
}

/// Fetch 服务 trait
pub trait FetchService {
    /// 提交一次请求，立即返回
    fn submit(&mut self, request: &FetchRequest);

    /// 取出一个已完成的结果（非阻塞）
    fn poll(&mut self) -> Option<FetchOutcome>;
}

/// 基于 reqwest 的 relay 客户端
pub struct RelayFetchService {
    runtime: Runtime,
    client: reqwest::Client,
    relay_url: String,
    tx: mpsc::UnboundedSender<FetchOutcome>,
    rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl RelayFetchService {
    pub fn new(relay_url: impl Into<String>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("grindmap-fetch")
            .enable_all()
            .build()?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            client,
            relay_url: relay_url.into(),
            tx,
            rx,
        })
    }
}

impl FetchService for RelayFetchService {
    fn submit(&mut self, request: &FetchRequest) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let targets: Vec<(Platform, String)> = request
            .usernames
            .iter()
            .map(|(platform, name)| (*platform, endpoint(&self.relay_url, *platform, name)))
            .collect();

        self.runtime.spawn(async move {
            let mut results = Vec::with_capacity(targets.len());

            for (platform, url) in targets {
                let error = match fetch_one(&client, &url).await {
                    Ok(()) => {
                        tracing::info!(%platform, "relay fetch succeeded");
                        None
                    }
                    Err(e) => {
                        tracing::warn!(%platform, error = %e, "relay fetch failed");
                        Some(e.to_string())
                    }
                };
                results.push(PlatformResult { platform, error });
            }

            if tx.send(FetchOutcome { results }).is_err() {
                tracing::debug!("fetch outcome dropped: receiver closed");
            }
        });
    }

    fn poll(&mut self) -> Option<FetchOutcome> {
        self.rx.try_recv().ok()
    }
}

/// 拼接 relay 接口地址
fn endpoint(relay_url: &str, platform: Platform, username: &str) -> String {
    format!(
        "{}/api/{}/{}",
        relay_url.trim_end_matches('/'),
        platform.id(),
        urlencoding::encode(username)
    )
}

async fn fetch_one(client: &reqwest::Client, url: &str) -> Result<(), FetchError> {
    tracing::debug!(url, "GET");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn endpoint_joins_relay_and_platform() {
        assert_eq!(
            endpoint("http://localhost:5000/", Platform::Codeforces, "tourist"),
            "http://localhost:5000/api/codeforces/tourist"
        );
        assert_eq!(
            endpoint("http://relay", Platform::CodeChef, "a.b_c"),
            "http://relay/api/codechef/a.b_c"
        );
    }

    #[test]
    fn outcome_counts() {
        let outcome = FetchOutcome {
            results: vec![
                PlatformResult {
                    platform: Platform::LeetCode,
                    error: None,
                },
                PlatformResult {
                    platform: Platform::CodeChef,
                    error: Some("relay returned HTTP 404".to_string()),
                },
            ],
        };
        assert_eq!(outcome.succeeded(), 1);
        assert_eq!(outcome.failed().count(), 1);
    }

    #[test]
    fn unreachable_relay_reports_failure() {
        let mut service = RelayFetchService::new("http://127.0.0.1:9").unwrap();
        service.submit(&FetchRequest {
            usernames: vec![(Platform::LeetCode, "tourist".to_string())],
        });

        let deadline = Instant::now() + Duration::from_secs(10);
        let outcome = loop {
            if let Some(outcome) = service.poll() {
                break outcome;
            }
            assert!(Instant::now() < deadline, "no outcome before deadline");
            std::thread::sleep(Duration::from_millis(20));
        };

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].platform, Platform::LeetCode);
        assert!(outcome.results[0].error.is_some());
    }
}
