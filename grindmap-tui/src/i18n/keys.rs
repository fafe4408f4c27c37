//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **校验错误归 `errors.*`**：与 core 的 IdentifierError 一一对应
//! 3. **状态栏消息归 `status.*`**，**按键提示归 `hints.*`**
//! 4. 带参数的文本使用 `{name}` 占位，由调用方替换

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 表单文本
    pub form: FormTexts,
    /// 校验错误文本
    pub errors: ErrorTexts,
    /// 状态栏按键提示
    pub hints: HintTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 帮助浮层
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
}

// ============================================================================
// 表单
// ============================================================================

pub struct FormTexts {
    pub heading: &'static str,
    pub fetch_button: &'static str,
    pub recent_searches: &'static str,
}

// ============================================================================
// 校验错误
// ============================================================================

pub struct ErrorTexts {
    /// `{platform}` 为平台显示名
    pub not_platform_url: &'static str,
    pub invalid_url_format: &'static str,
    pub invalid_username_format: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct HintTexts {
    pub switch_field: &'static str,
    pub select: &'static str,
    pub remove: &'static str,
    pub fetch: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

pub struct StatusTexts {
    /// `{count}` 为用户名个数
    pub fetch_started: &'static str,
    /// `{count}` 为成功的平台个数
    pub fetch_succeeded: &'static str,
    /// `{platforms}` 为失败的平台列表
    pub fetch_failed: &'static str,
    pub rejected_loading: &'static str,
    pub rejected_errors: &'static str,
    pub rejected_empty: &'static str,
    pub entry_removed: &'static str,
    pub language_switched: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub close_hint: &'static str,
    /// (按键, 说明)
    pub entries: &'static [(&'static str, &'static str)],
}
