//! 宿主协作接口模块
//!
//! 定义宿主编辑器侧能力的窄接口

pub mod progress;

pub use progress::*;
