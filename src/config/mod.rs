//! 统一配置系统模块

pub mod defaults;
pub mod types;

pub use defaults::*;
pub use types::*;
