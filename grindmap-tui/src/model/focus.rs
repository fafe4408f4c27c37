//! 键盘焦点

use grindmap_core::Platform;

/// 键盘焦点所在的控件
///
/// Tab 顺序：LeetCode → Codeforces → CodeChef → 获取按钮 → LeetCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// 某个平台的输入框
    Field(Platform),
    /// 获取按钮
    FetchButton,
}

impl Default for FocusTarget {
    fn default() -> Self {
        FocusTarget::Field(Platform::ALL[0])
    }
}

impl FocusTarget {
    /// 下一个控件（循环）
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FocusTarget::Field(p) => p.next().map_or(FocusTarget::FetchButton, FocusTarget::Field),
            FocusTarget::FetchButton => FocusTarget::Field(Platform::ALL[0]),
        }
    }

    /// 上一个控件（循环）
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            FocusTarget::Field(p) => p.prev().map_or(FocusTarget::FetchButton, FocusTarget::Field),
            FocusTarget::FetchButton => FocusTarget::Field(Platform::ALL[Platform::ALL.len() - 1]),
        }
    }

    /// 焦点所在的平台（按钮时为 None）
    pub fn platform(self) -> Option<Platform> {
        match self {
            FocusTarget::Field(p) => Some(p),
            FocusTarget::FetchButton => None,
        }
    }

    pub fn is_button(self) -> bool {
        matches!(self, FocusTarget::FetchButton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycle_visits_every_control() {
        let mut focus = FocusTarget::default();
        let mut visited = vec![focus];
        for _ in 0..4 {
            focus = focus.next();
            visited.push(focus);
        }
        assert_eq!(
            visited,
            [
                FocusTarget::Field(Platform::LeetCode),
                FocusTarget::Field(Platform::Codeforces),
                FocusTarget::Field(Platform::CodeChef),
                FocusTarget::FetchButton,
                FocusTarget::Field(Platform::LeetCode),
            ]
        );
    }

    #[test]
    fn prev_undoes_next() {
        for start in [
            FocusTarget::Field(Platform::LeetCode),
            FocusTarget::Field(Platform::CodeChef),
            FocusTarget::FetchButton,
        ] {
            assert_eq!(start.next().prev(), start);
        }
    }
}
