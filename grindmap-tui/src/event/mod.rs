//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘、鼠标、粘贴等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)        // 键盘事件，只处理 Press
//!             Event::Paste(String)        // 括号粘贴，整段送入当前输入框
//!             Event::Mouse(MouseEvent)    // 鼠标事件，先做命中测试（view/layout.rs）
//!             Event::Resize(..)           // 忽略，下一轮自然按新尺寸重绘
//!
//!         键盘事件的判断顺序：
//!             - 帮助浮层打开时，只接受关闭与退出
//!             - 全局快捷键（Ctrl+C、Alt+Q、F1、Ctrl+R、Ctrl+L、Tab、Shift+Tab）
//!             - 焦点位于输入框：↑ ↓ Enter Esc 交给下拉框，其余为编辑
//!             - 焦点位于获取按钮：Enter / 空格获取
//!
//!         鼠标事件：
//!             按下  → 输入框：FocusField；其他位置：Blur（延迟关闭下拉框）
//!             松开  → 历史项：ClickItem；×：RemoveItem；按钮：RequestFetch
//!             移动  → 历史项：Hover
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
