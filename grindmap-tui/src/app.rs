//!
//! app.rs
//! 应用主循环
//!
//!
//! 每轮循环：
//! loop {
//!
//!     terminal.draw(..)                   // 渲染 UI，同时记下终端尺寸供鼠标命中测试
//!     if app.should_quit { break }
//!     if let Some(event) = poll_event() { // 最多等待 TICK_RATE
//!         let msg = handle_event(event, &app);
//!         update(&mut app, msg);
//!     }
//!     update(&mut app, Tick)              // 延迟失焦、relay 结果
//! }
//!
//! 下拉框的失焦延迟为 200ms，TICK_RATE 需明显小于它，关闭才不会显得迟钝。

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const TICK_RATE: Duration = Duration::from_millis(50);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            app.viewport = frame.area();
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(TICK_RATE)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        update::update(app, AppMessage::Tick);
    }

    Ok(())
}
