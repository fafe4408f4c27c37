//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的“唯一真相来源”，所有状态变更都通过 Update 层触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 键盘焦点（三个输入框 + 获取按钮）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusTarget,             // 键盘焦点
//!             pub form: UsernameForm,             // grindmap-core 的表单
//!             pub session: FetchSession,          // 表单宿主（relay 客户端）
//!             pub status_message: Option<String>, // 状态栏消息
//!             pub show_help: bool,                // 帮助浮层
//!             pub viewport: Rect,                 // 鼠标命中测试用
//!             ...
//!         }
//!
//!     form 与 session 是两个独立字段，Update 层可以同时借用：
//!         app.form.input(platform, &raw, &mut app.session);
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、两种“焦点”
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     FocusTarget 是键盘焦点：光标在哪个控件上，字符输入写到哪里。
//!     form.focused() 是下拉框焦点：哪个平台的历史下拉框处于活动状态。
//!
//!     两者大多数时候一致，但不总是：
//!         - 在下拉框中按 Enter 选中后，表单回到 Idle（下拉框关闭），
//!           键盘焦点仍留在该输入框，可以继续编辑；
//!         - 鼠标点在输入框以外，表单在延迟后回到 Idle，键盘焦点不变。
//!

mod app;
mod focus;

pub use app::App;
pub use focus::FocusTarget;
