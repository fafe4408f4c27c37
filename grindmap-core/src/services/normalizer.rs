//! 用户名规范化
//!
//! 把用户输入（裸用户名或粘贴的主页链接）转换为平台的规范用户名并校验。

use crate::error::IdentifierError;
use crate::types::Platform;

/// 判定输入为链接的子串
const URL_INDICATORS: [&str; 4] = ["http", "www.", ".com", ".jp"];

/// 规范化结果
///
/// 即使带有错误也保留 `value`：输入框继续显示它，用户可在此基础上修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub value: String,
    pub error: Option<IdentifierError>,
}

impl Normalized {
    fn ok(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: None,
        }
    }

    fn err(value: impl Into<String>, error: IdentifierError) -> Self {
        Self {
            value: value.into(),
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// 规范化并校验某个平台的输入
///
/// 从链接中提取的用户名一律为小写（匹配与截取都在小写副本上进行），
/// 裸用户名保留原始大小写。空输入不是错误，表示清空输入框。
pub fn normalize(platform: Platform, raw: &str) -> Normalized {
    let trimmed = raw.trim();

    let candidate = if looks_like_url(trimmed) {
        match extract_from_url(platform, trimmed) {
            Ok(extracted) => extracted,
            Err(e) => return Normalized::err(trimmed, e),
        }
    } else {
        trimmed.to_string()
    };

    if !candidate.is_empty() && !platform.accepts(&candidate) {
        return Normalized::err(candidate, IdentifierError::InvalidIdentifierFormat);
    }

    Normalized::ok(candidate)
}

fn looks_like_url(text: &str) -> bool {
    URL_INDICATORS.iter().any(|needle| text.contains(needle))
}

/// 从主页链接中截取用户名
///
/// 取第一次出现的片段之后、下一次出现之前的部分，再依次截断到第一个 `/` 和第一个 `?`。
fn extract_from_url(platform: Platform, text: &str) -> Result<String, IdentifierError> {
    let config = platform.config();
    let lower = text.to_lowercase();

    if !lower.contains(config.url_fragment) {
        return Err(IdentifierError::NotAPlatformUrl {
            platform: config.display_name,
        });
    }

    let Some((_, after_fragment)) = lower.split_once(config.url_fragment) else {
        return Err(IdentifierError::InvalidUrlFormat);
    };

    let segment = after_fragment
        .split(config.url_fragment)
        .next()
        .unwrap_or_default();
    let path_cut = segment.split('/').next().unwrap_or_default();
    let query_cut = path_cut.split('?').next().unwrap_or_default();

    Ok(query_cut.to_string())
}
