/*!
 * 配置系统默认值
 *
 * 提供所有配置项的默认值和默认配置创建函数。
 */

use crate::config::types::CompletionConfig;

/// 默认图标库版本
pub const DEFAULT_ICONS_VERSION: &str = "5.4.0";

/// 默认图标 CDN 根地址
pub const DEFAULT_CDN_BASE_URL: &str = "https://unpkg.com";

/// 创建默认补全配置
pub fn create_default_completion_config() -> CompletionConfig {
    CompletionConfig {
        icons_version: DEFAULT_ICONS_VERSION.to_string(),
        cdn_base_url: DEFAULT_CDN_BASE_URL.to_string(),
    }
}
