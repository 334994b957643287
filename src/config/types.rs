//! 配置系统类型定义

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// 补全功能配置 (对应宿主设置中的 ionicons 节)
///
/// 配置在构造提供者时显式传入，不做全局查找。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionConfig {
    /// 图标库版本
    pub icons_version: String,

    /// 图标 CDN 根地址
    pub cdn_base_url: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        defaults::create_default_completion_config()
    }
}

impl CompletionConfig {
    /// 使用指定的图标库版本创建配置
    pub fn with_icons_version(version: impl Into<String>) -> Self {
        Self {
            icons_version: version.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_pins_known_version() {
        let config = CompletionConfig::default();

        assert_eq!(config.icons_version, "5.4.0");
        assert_eq!(config.cdn_base_url, "https://unpkg.com");
    }

    #[test]
    fn with_icons_version_overrides_only_version() {
        let config = CompletionConfig::with_icons_version("7.5.0");

        assert_eq!(config.icons_version, "7.5.0");
        assert_eq!(config.cdn_base_url, "https://unpkg.com");
    }
}
