//! 可复用的 UI 组件

pub mod fetch_button;
pub mod help;
pub mod history_dropdown;
pub mod input_field;
pub mod statusbar;
