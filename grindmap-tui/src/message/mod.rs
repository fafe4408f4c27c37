//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 把形形色色的终端事件（按键、鼠标、粘贴）翻译成 Update 能够看懂的 Message。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // 主消息（退出、焦点、获取、帮助……）
//!         mod form;       // 输入框与下拉框的子消息
//!
//!
//!     例如按下 ↓：
//!         Event::Key(Down)
//!             ↓  event/handler.rs
//!         AppMessage::Form(FormMessage::Nav(NavKey::Down))
//!             ↓  update/form.rs
//!         form.handle_key(NavKey::Down, ..)
//!             ├─ Consumed → 高亮下移
//!             └─ Ignored  → 焦点移到下一个控件
//!
//!     “按键是否被下拉框吃掉”只有 core 知道，所以回退行为放在 Update 层，
//!     Event 层只做翻译。
//!

mod app;
mod form;

pub use app::AppMessage;
pub use form::FormMessage;
