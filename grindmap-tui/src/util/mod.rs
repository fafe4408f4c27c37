//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与业务逻辑无关的代码：终端的初始化/恢复，以及文件日志。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复（含鼠标捕获、括号粘贴）
//!         mod logging;        // tracing 文件日志
//!
//!
//!     启动顺序（见 src/main.rs）：
//!
//!         init_logging(&config_dir)     // 1. 先装日志，之后的加载过程都有记录
//!         init_terminal()               // 2. 原始模式 + 备用屏幕 + 鼠标 + 粘贴
//!         app::run(...)                 // 3. 主循环
//!         restore_terminal(...)         // 4. 无论 run 成功与否都要执行
//!
//!     注意：restore_terminal 必须在返回错误之前执行，
//!           否则终端会保持在原始模式，鼠标事件也会继续以转义序列的形式出现。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
