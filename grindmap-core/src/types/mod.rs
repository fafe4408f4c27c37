//! 类型定义模块

mod fetch;
mod field;
mod platform;

pub use fetch::FetchRequest;
pub use field::{FieldState, FormFields};
pub use platform::{Platform, PlatformConfig};
