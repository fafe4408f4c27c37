//! 表单宿主抽象 Trait

use crate::types::{FetchRequest, Platform};

/// 表单宿主 Trait
///
/// 由承载表单的 UI 实现，接收表单向外发出的两类通知。
///
/// 平台实现:
/// - TUI: `FetchSession`（记录当前用户名并通过 relay 发起请求）
/// - 测试: `RecordingHost`
pub trait FormHost {
    /// 某个平台的用户名规范化成功（或被清空）
    ///
    /// # Arguments
    /// * `platform` - 平台
    /// * `value` - 规范化后的用户名，清空时为空字符串
    fn identifier_changed(&mut self, platform: Platform, value: &str);

    /// Fetch Gate 放行，每次放行恰好调用一次
    ///
    /// 宿主负责真正的网络请求，并通过 `UsernameForm::set_loading` 回报进行中状态。
    ///
    /// # Arguments
    /// * `request` - 本次提交的用户名
    fn fetch_requested(&mut self, request: &FetchRequest);
}
