/*!
 * 存储路径管理模块
 *
 * 提供图标缓存相关的统一路径管理，路径的计算是确定性的，
 * 目录的创建由写入操作负责。
 */

use std::path::{Path, PathBuf};

/// 根据存储根目录、子目录名和文件名构造确定性的文件路径
///
/// 只做路径拼接，不创建任何目录。
pub fn create_file_path(storage_root: &Path, dir_name: &str, file_name: &str) -> PathBuf {
    storage_root.join(dir_name).join(file_name)
}

/// 图标存储路径管理器
#[derive(Debug, Clone)]
pub struct IconStoragePaths {
    /// 宿主分配的全局存储根目录
    pub storage_root: PathBuf,
    /// 图标缓存目录
    pub icons_dir: PathBuf,
}

impl IconStoragePaths {
    /// 创建新的路径管理器
    pub fn new(storage_root: PathBuf) -> Self {
        let icons_dir = storage_root.join(super::ICONS_DIR_NAME);

        Self {
            storage_root,
            icons_dir,
        }
    }

    /// 获取指定版本的图标目录缓存文件路径
    ///
    /// 文件名携带版本号，切换版本后不会命中旧版本的缓存。
    pub fn catalog_file(&self, version: &str) -> PathBuf {
        create_file_path(
            &self.storage_root,
            super::ICONS_DIR_NAME,
            &format!("ionicons-{}.json", version),
        )
    }

    /// 获取指定图标名的 SVG 缓存文件路径
    pub fn icon_file(&self, icon_name: &str) -> PathBuf {
        create_file_path(
            &self.storage_root,
            super::ICONS_DIR_NAME,
            &format!("{}.svg", icon_name),
        )
    }
}

/// 获取默认的存储根目录（宿主未提供时的兜底路径）
pub fn default_storage_root() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("ionx"))
}
