//! Supported platform registry

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[allow(clippy::expect_used)]
static ALNUM_DOT_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_.-]+$").expect("valid username regex"));

#[allow(clippy::expect_used)]
static ALNUM_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_.]+$").expect("valid username regex"));

/// Competitive-programming platform with a username field on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LeetCode,
    Codeforces,
    CodeChef,
}

/// Static description of a platform
#[derive(Debug, Clone, Copy)]
pub struct PlatformConfig {
    /// Stable id, also used as the persisted history key
    pub id: &'static str,
    pub display_name: &'static str,
    pub placeholder: &'static str,
    /// Literal text that precedes the username in a profile link
    pub url_fragment: &'static str,
    /// Pattern a normalized username must fully match
    pub identifier_pattern: &'static LazyLock<Regex>,
}

static LEETCODE: PlatformConfig = PlatformConfig {
    id: "leetcode",
    display_name: "LeetCode",
    placeholder: "e.g. tourist",
    url_fragment: "leetcode.com/",
    identifier_pattern: &ALNUM_DOT_DASH,
};

static CODEFORCES: PlatformConfig = PlatformConfig {
    id: "codeforces",
    display_name: "Codeforces",
    placeholder: "e.g. tourist",
    url_fragment: "codeforces.com/profile/",
    identifier_pattern: &ALNUM_DOT_DASH,
};

static CODECHEF: PlatformConfig = PlatformConfig {
    id: "codechef",
    display_name: "CodeChef",
    placeholder: "e.g. gennady",
    url_fragment: "codechef.com/users/",
    identifier_pattern: &ALNUM_DOT,
};

impl Platform {
    /// All platforms, in display order
    pub const ALL: [Platform; 3] = [Platform::LeetCode, Platform::Codeforces, Platform::CodeChef];

    /// Registry entry for this platform
    pub fn config(self) -> &'static PlatformConfig {
        match self {
            Self::LeetCode => &LEETCODE,
            Self::Codeforces => &CODEFORCES,
            Self::CodeChef => &CODECHEF,
        }
    }

    pub fn id(self) -> &'static str {
        self.config().id
    }

    pub fn display_name(self) -> &'static str {
        self.config().display_name
    }

    /// Parse a stable platform id (`leetcode`, `codeforces`, `codechef`)
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Whether `candidate` fully matches the platform's username pattern
    pub fn accepts(self, candidate: &str) -> bool {
        self.config().identifier_pattern.is_match(candidate)
    }

    /// Position in [`Platform::ALL`]
    pub fn index(self) -> usize {
        match self {
            Self::LeetCode => 0,
            Self::Codeforces => 1,
            Self::CodeChef => 2,
        }
    }

    /// Next platform in display order, `None` after the last one
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Previous platform in display order, `None` before the first one
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for p in Platform::ALL {
            assert_eq!(Platform::from_id(p.id()), Some(p));
        }
        assert_eq!(Platform::from_id("atcoder"), None);
    }

    #[test]
    fn serde_uses_lowercase_id() {
        for p in Platform::ALL {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.id()));
        }
    }

    #[test]
    fn codechef_rejects_dash() {
        assert!(Platform::LeetCode.accepts("red-coder"));
        assert!(Platform::Codeforces.accepts("red-coder"));
        assert!(!Platform::CodeChef.accepts("red-coder"));
        assert!(Platform::CodeChef.accepts("gennady.k_2"));
    }

    #[test]
    fn pattern_requires_full_match() {
        assert!(!Platform::LeetCode.accepts("tour ist"));
        assert!(!Platform::LeetCode.accepts(""));
    }

    #[test]
    fn display_order_navigation() {
        assert_eq!(Platform::LeetCode.next(), Some(Platform::Codeforces));
        assert_eq!(Platform::CodeChef.next(), None);
        assert_eq!(Platform::LeetCode.prev(), None);
        assert_eq!(Platform::CodeChef.prev(), Some(Platform::Codeforces));
    }
}
