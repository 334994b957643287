//! 图标补全提供者
//!
//! 对宿主暴露两个入口：列出补全项和解析单个补全项。
//! 可失败操作都在入口边界处兜底，任何错误都不会抛给宿主。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info};

use crate::completion::catalog::CatalogFetcher;
use crate::completion::icon_loader::{HttpIconRenderer, IconRenderer};
use crate::completion::trigger;
use crate::completion::types::{CompletionContext, CompletionItem, Documentation};
use crate::config::CompletionConfig;
use crate::host::progress::{NoopProgressReporter, ProgressReporter};
use crate::storage::filesystem;
use crate::storage::paths::IconStoragePaths;
use crate::utils::error::AppResult;

/// 图标预览加载失败时写入文档字段的提示文本
const PREVIEW_FAILURE_TEXT: &str = "Failed to load icon preview, see output => ionicons for error";

/// 预览加载进度任务的标题
const PROGRESS_TITLE: &str = "Loading icons";

/// ion-icon 图标名补全提供者
///
/// 触发检测、目录获取和预览加载的组合入口，
/// 配置与协作方在构造时显式注入。
pub struct IonIconCompletionProvider {
    /// 目录获取器
    catalog_fetcher: CatalogFetcher,
    /// 缓存路径管理器
    paths: IconStoragePaths,
    /// 图标渲染协作方
    renderer: Arc<dyn IconRenderer>,
    /// 进度上报协作方
    progress: Arc<dyn ProgressReporter>,
}

impl IonIconCompletionProvider {
    /// 创建新的补全提供者
    pub fn new(
        config: CompletionConfig,
        storage_root: PathBuf,
        renderer: Arc<dyn IconRenderer>,
        progress: Arc<dyn ProgressReporter>,
    ) -> Self {
        let paths = IconStoragePaths::new(storage_root);
        let catalog_fetcher = CatalogFetcher::new(config, paths.clone());

        Self {
            catalog_fetcher,
            paths,
            renderer,
            progress,
        }
    }

    /// 创建使用默认协作方的提供者（CDN 渲染，无进度 UI）
    pub fn with_default_collaborators(config: CompletionConfig, storage_root: PathBuf) -> Self {
        let renderer = Arc::new(HttpIconRenderer::new(config.clone()));
        Self::new(
            config,
            storage_root,
            renderer,
            Arc::new(NoopProgressReporter),
        )
    }

    /// 列出补全项
    ///
    /// 光标不在 name 属性值内时直接返回空列表，不做任何 I/O。
    /// 目录获取失败记录日志后同样返回空列表。
    pub async fn provide_completion_items(
        &self,
        context: &CompletionContext,
    ) -> Vec<CompletionItem> {
        if !trigger::should_trigger(&context.line_text, context.character) {
            return Vec::new();
        }

        let catalog = match self.catalog_fetcher.fetch().await {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(
                    "获取图标目录失败: url={}, error={:#}",
                    self.catalog_fetcher.catalog_url(),
                    e
                );
                return Vec::new();
            }
        };

        let items: Vec<CompletionItem> = catalog
            .icons
            .into_iter()
            .map(|icon| CompletionItem::new(icon.name))
            .collect();

        info!(
            "图标补全: character={}, items={}",
            context.character,
            items.len()
        );

        items
    }

    /// 解析单个补全项，附加预览文档
    ///
    /// 预览 SVG 已缓存时不触发渲染；渲染或写入失败时把文档字段
    /// 替换为纯文本提示，解析本身总是返回补全项。
    pub async fn resolve_completion_item(&self, mut item: CompletionItem) -> CompletionItem {
        let mut progress = self.progress.start(PROGRESS_TITLE);
        progress.report(0);

        let icon_name = item.label.as_str().to_string();
        let icon_path = self.paths.icon_file(&icon_name);

        // 文档先于文件落盘构造，图片引用指向确定性的缓存路径
        item.documentation = Some(Documentation::markdown(format!(
            "![{}]({})",
            icon_name,
            icon_path.display()
        )));

        if !filesystem::file_exists(&icon_path) {
            if let Err(e) = self.load_and_save_icon(&icon_name, &icon_path).await {
                error!("加载图标 SVG 失败: name={}, error={:#}", icon_name, e);
                item.documentation = Some(Documentation::plain_text(PREVIEW_FAILURE_TEXT));
            }
        }

        progress.report(100);
        item
    }

    /// 渲染图标并写入缓存文件
    async fn load_and_save_icon(&self, icon_name: &str, icon_path: &Path) -> AppResult<()> {
        let rendered = self.renderer.render(icon_name, false).await?;
        filesystem::save_file_in_dir(rendered.dark_mode.as_bytes(), icon_path).await?;
        Ok(())
    }
}
