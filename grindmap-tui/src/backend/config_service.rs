//! 配置服务

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

use super::config_dir;

/// 覆盖 relay 地址的环境变量
pub const RELAY_URL_ENV: &str = "GRINDMAP_RELAY_URL";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// relay 服务地址
    pub relay_url: String,
    /// 失焦后关闭历史下拉框的延迟（毫秒）
    pub blur_delay_ms: u64,
    pub theme: Theme,
    pub language: String,
}

impl AppConfig {
    pub fn blur_delay(&self) -> Duration {
        Duration::from_millis(self.blur_delay_ms)
    }

    /// 用环境变量覆盖 relay 地址（空值忽略）
    pub fn apply_relay_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            log::info!("Relay URL overridden by {RELAY_URL_ENV}");
            self.relay_url = url.trim().to_string();
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            relay_url: "http://localhost:5000".to_string(),
            blur_delay_ms: 200,
            theme: Theme::Dark,
            language: "en-US".to_string(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务，读写 `config.json`
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(config_dir().join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 读取文件；文件不存在时写回默认值，内容损坏时使用默认值
    fn read_file(&self) -> Result<AppConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let config = AppConfig::default();
                if let Err(e) = self.save(&config) {
                    log::warn!("Failed to write default config: {e:#}");
                }
                return Ok(config);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("Malformed config at {}: {e}; using defaults", self.path.display());
                Ok(AppConfig::default())
            }
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = self.read_file()?;
        config.apply_relay_override(std::env::var(RELAY_URL_ENV).ok());
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
