/*!
 * 文件系统操作模块
 *
 * 提供图标缓存所需的文件操作接口。写入总是整体覆盖，
 * 并在需要时创建父目录。
 */

use std::path::Path;

use tokio::fs as async_fs;

use crate::storage::error::{StorageError, StorageResult};

/// 同步检查文件是否存在
pub fn file_exists(path: &Path) -> bool {
    path.exists()
}

/// 异步读取文件内容
pub async fn read_file(path: &Path) -> StorageResult<Vec<u8>> {
    async_fs::read(path).await.map_err(|e| {
        StorageError::filesystem_error(format!("读取文件失败: {}", e), Some(path.to_path_buf()))
    })
}

/// 异步读取文件内容为字符串
pub async fn read_file_to_string(path: &Path) -> StorageResult<String> {
    async_fs::read_to_string(path).await.map_err(|e| {
        StorageError::filesystem_error(format!("读取文件失败: {}", e), Some(path.to_path_buf()))
    })
}

/// 异步保存文件，父目录不存在时先创建，已存在的文件整体覆盖
pub async fn save_file_in_dir(content: &[u8], path: &Path) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| StorageError::io("创建缓存目录", e))?;
    }

    async_fs::write(path, content).await.map_err(|e| {
        StorageError::filesystem_error(format!("写入文件失败: {}", e), Some(path.to_path_buf()))
    })
}
