//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，从不修改。每轮主循环整屏重绘一次。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         pub mod layout;         // 布局计算 + 鼠标命中测试
//!         pub mod theme;          // 颜色与样式
//!         pub mod components;     // 输入框、历史下拉框、按钮、状态栏、帮助
//!
//!
//!     渲染顺序（后渲染的覆盖先渲染的）：
//!         标题栏 → 输入框 × 3 → 获取按钮 → 状态栏 → 历史下拉框 → 帮助浮层
//!
//!     layout::hit_test 与 layout::render 使用同一个 FormLayout::compute，
//!     所以鼠标点到的永远是屏幕上画出来的那个控件。
//!

pub mod components;
pub mod layout;
pub mod theme;

pub use layout::render;
