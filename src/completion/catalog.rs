//! Ionicons 图标目录获取
//!
//! 目录数据走两级解析：本地缓存文件优先，未命中时从 CDN 拉取，
//! 成功后把原始 JSON 落盘。进程生命周期内目录视为不可变，
//! 缓存没有过期机制，由用户手动清理。

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CompletionConfig;
use crate::storage::filesystem;
use crate::storage::paths::IconStoragePaths;
use crate::utils::error::AppResult;

/// 图标目录（ionicons.json 的结构）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconCatalog {
    /// 图标库名称
    pub name: String,

    /// 图标库版本
    pub version: String,

    /// 图标条目，保持远端文档里的顺序
    pub icons: Vec<IconEntry>,
}

/// 单个图标条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    /// 图标名
    pub name: String,

    /// 检索标签
    pub tags: String,
}

/// 图标目录获取器
pub struct CatalogFetcher {
    /// HTTP 客户端
    client: reqwest::Client,
    /// 补全配置
    config: CompletionConfig,
    /// 缓存路径管理器
    paths: IconStoragePaths,
}

impl CatalogFetcher {
    /// 创建新的目录获取器
    pub fn new(config: CompletionConfig, paths: IconStoragePaths) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent("IonX/0.2")
            .build()
            .unwrap_or_default();

        Self {
            client,
            config,
            paths,
        }
    }

    /// 目录的远程地址
    pub fn catalog_url(&self) -> String {
        format!(
            "{}/ionicons@{}/dist/ionicons.json",
            self.config.cdn_base_url, self.config.icons_version
        )
    }

    /// 目录的本地缓存文件路径
    pub fn cache_file(&self) -> PathBuf {
        self.paths.catalog_file(&self.config.icons_version)
    }

    /// 获取图标目录
    ///
    /// 缓存文件存在时直接读取解析，解析失败原样上抛；
    /// 未命中时请求远程目录，成功后先落盘再返回。
    pub async fn fetch(&self) -> AppResult<IconCatalog> {
        let cache_path = self.cache_file();

        if filesystem::file_exists(&cache_path) {
            let content = filesystem::read_file_to_string(&cache_path).await?;
            let catalog: IconCatalog =
                serde_json::from_str(&content).context("解析图标目录缓存失败")?;

            debug!("图标目录命中本地缓存: path={}", cache_path.display());
            return Ok(catalog);
        }

        let url = self.catalog_url();
        debug!("图标目录缓存未命中，从远程获取: url={}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("请求图标目录失败")?
            .error_for_status()
            .context("图标目录请求返回错误状态")?;

        let catalog: IconCatalog = response.json().await.context("解析图标目录响应失败")?;

        let pretty = serde_json::to_string_pretty(&catalog).context("序列化图标目录失败")?;
        filesystem::save_file_in_dir(pretty.as_bytes(), &cache_path).await?;

        Ok(catalog)
    }
}
