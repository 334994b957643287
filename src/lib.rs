//! IonX 图标补全后端
//!
//! 为编辑器宿主提供 `<ion-icon>` 图标名的自动补全与预览文档。
//! 主要功能包括：
//! - name 属性值内的光标位置检测
//! - 图标目录的本地缓存与远程获取
//! - 图标 SVG 预览的按需下载缓存

// 模块声明
pub mod completion; // 图标补全功能模块
pub mod config; // 统一配置系统模块
pub mod host; // 宿主协作接口模块
pub mod storage; // 统一存储系统模块
pub mod utils; // 工具和错误处理模块

pub use completion::{CompletionContext, CompletionItem, IonIconCompletionProvider};
pub use config::CompletionConfig;
