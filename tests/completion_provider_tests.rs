//! 图标补全提供者功能测试

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ionx::completion::{
    CompletionContext, CompletionItem, Documentation, IconRenderer, IonIconCompletionProvider,
    RenderedIcon,
};
use ionx::config::CompletionConfig;
use ionx::host::progress::{ProgressHandle, ProgressReporter};
use ionx::utils::error::{app_error, AppResult};
use tempfile::TempDir;

const CATALOG_JSON: &str =
    r#"{"name":"ionicons","version":"5.4.0","icons":[{"name":"heart","tags":"love"}]}"#;

const TRIGGER_LINE: &str = r#"<ion-icon name="heart-outline"></ion-icon>"#;

/// 模拟图标渲染器，记录调用次数，可配置为总是失败
struct MockRenderer {
    calls: AtomicUsize,
    fail: bool,
}

impl MockRenderer {
    fn new(fail: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IconRenderer for MockRenderer {
    async fn render(&self, icon_name: &str, _dark_mode: bool) -> AppResult<RenderedIcon> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(app_error("渲染失败"));
        }

        let svg = format!("<svg data-icon=\"{}\"></svg>", icon_name);
        Ok(RenderedIcon {
            dark_mode: svg.clone(),
            light_mode: svg,
        })
    }
}

/// 记录增量序列的进度上报器
#[derive(Default)]
struct RecordingProgressReporter {
    increments: Arc<Mutex<Vec<u32>>>,
}

impl ProgressReporter for RecordingProgressReporter {
    fn start(&self, _title: &str) -> Box<dyn ProgressHandle> {
        Box::new(RecordingProgressHandle {
            increments: Arc::clone(&self.increments),
        })
    }
}

struct RecordingProgressHandle {
    increments: Arc<Mutex<Vec<u32>>>,
}

impl ProgressHandle for RecordingProgressHandle {
    fn report(&mut self, increment: u32) {
        self.increments.lock().unwrap().push(increment);
    }
}

/// 指向不可达地址的配置，目录获取只能命中本地缓存
fn unreachable_config() -> CompletionConfig {
    CompletionConfig {
        icons_version: "5.4.0".to_string(),
        cdn_base_url: "http://127.0.0.1:9".to_string(),
    }
}

async fn seed_catalog_cache(storage_root: &Path) {
    let path = storage_root.join("icons-folder").join("ionicons-5.4.0.json");
    tokio::fs::create_dir_all(path.parent().unwrap())
        .await
        .unwrap();
    tokio::fs::write(&path, CATALOG_JSON).await.unwrap();
}

fn provider_with(
    storage: &TempDir,
    renderer: Arc<MockRenderer>,
    progress: Arc<RecordingProgressReporter>,
) -> IonIconCompletionProvider {
    IonIconCompletionProvider::new(
        unreachable_config(),
        storage.path().to_path_buf(),
        renderer,
        progress,
    )
}

#[tokio::test]
async fn test_returns_empty_when_cursor_outside_name_attribute() {
    let storage = TempDir::new().unwrap();
    seed_catalog_cache(storage.path()).await;
    let provider = provider_with(
        &storage,
        Arc::new(MockRenderer::new(false)),
        Arc::new(RecordingProgressReporter::default()),
    );

    let context = CompletionContext::new(TRIGGER_LINE, 0);
    let items = provider.provide_completion_items(&context).await;

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_returns_empty_when_catalog_fetch_fails() {
    // 没有缓存，远端不可达：列出补全项退化为空列表而不是报错
    let storage = TempDir::new().unwrap();
    let provider = provider_with(
        &storage,
        Arc::new(MockRenderer::new(false)),
        Arc::new(RecordingProgressReporter::default()),
    );

    let context = CompletionContext::new(TRIGGER_LINE, TRIGGER_LINE.find("heart").unwrap());
    let items = provider.provide_completion_items(&context).await;

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_lists_one_candidate_per_catalog_entry() {
    let storage = TempDir::new().unwrap();
    seed_catalog_cache(storage.path()).await;
    let provider = provider_with(
        &storage,
        Arc::new(MockRenderer::new(false)),
        Arc::new(RecordingProgressReporter::default()),
    );

    let context = CompletionContext::new(TRIGGER_LINE, TRIGGER_LINE.find("heart").unwrap());
    let items = provider.provide_completion_items(&context).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label.as_str(), "heart");
    // 列出阶段不附加文档
    assert!(items[0].documentation.is_none());
}

#[tokio::test]
async fn test_default_collaborators_provider_lists_from_cache() {
    let storage = TempDir::new().unwrap();
    seed_catalog_cache(storage.path()).await;

    let provider = IonIconCompletionProvider::with_default_collaborators(
        unreachable_config(),
        storage.path().to_path_buf(),
    );

    let context = CompletionContext::new(TRIGGER_LINE, TRIGGER_LINE.find("heart").unwrap());
    let items = provider.provide_completion_items(&context).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label.as_str(), "heart");
}

#[tokio::test]
async fn test_resolve_saves_icon_and_attaches_markdown_preview() {
    let storage = TempDir::new().unwrap();
    let renderer = Arc::new(MockRenderer::new(false));
    let provider = provider_with(
        &storage,
        Arc::clone(&renderer),
        Arc::new(RecordingProgressReporter::default()),
    );

    let resolved = provider
        .resolve_completion_item(CompletionItem::new("heart"))
        .await;

    let icon_path = storage.path().join("icons-folder").join("heart.svg");
    assert!(icon_path.exists());
    assert_eq!(renderer.call_count(), 1);

    match resolved.documentation {
        Some(Documentation::Markdown { value }) => {
            assert!(value.contains("![heart]"));
            assert!(value.contains("heart.svg"));
        }
        other => panic!("文档应为 Markdown，实际为 {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_is_idempotent_once_icon_is_cached() {
    let storage = TempDir::new().unwrap();
    let renderer = Arc::new(MockRenderer::new(false));
    let provider = provider_with(
        &storage,
        Arc::clone(&renderer),
        Arc::new(RecordingProgressReporter::default()),
    );

    let first = provider
        .resolve_completion_item(CompletionItem::new("heart"))
        .await;
    let second = provider
        .resolve_completion_item(CompletionItem::new("heart"))
        .await;

    // 第二次解析不再触发渲染，文档结构一致
    assert_eq!(renderer.call_count(), 1);
    assert_eq!(first.documentation, second.documentation);
}

#[tokio::test]
async fn test_resolve_replaces_documentation_on_render_failure() {
    let storage = TempDir::new().unwrap();
    let renderer = Arc::new(MockRenderer::new(true));
    let provider = provider_with(
        &storage,
        Arc::clone(&renderer),
        Arc::new(RecordingProgressReporter::default()),
    );

    let resolved = provider
        .resolve_completion_item(CompletionItem::new("heart"))
        .await;

    // 解析不会失败，文档字段退化为纯文本提示
    match resolved.documentation {
        Some(Documentation::PlainText(text)) => {
            assert!(text.contains("Failed to load icon preview"));
        }
        other => panic!("文档应为纯文本提示，实际为 {:?}", other),
    }

    let icon_path = storage.path().join("icons-folder").join("heart.svg");
    assert!(!icon_path.exists());
}

#[tokio::test]
async fn test_resolve_reports_progress_zero_then_hundred() {
    let storage = TempDir::new().unwrap();
    let progress = Arc::new(RecordingProgressReporter::default());
    let provider = provider_with(
        &storage,
        Arc::new(MockRenderer::new(false)),
        Arc::clone(&progress),
    );

    provider
        .resolve_completion_item(CompletionItem::new("heart"))
        .await;

    let increments = progress.increments.lock().unwrap();
    assert_eq!(*increments, vec![0, 100]);
}

#[tokio::test]
async fn test_skipped_render_still_reports_full_progress() {
    let storage = TempDir::new().unwrap();
    let progress = Arc::new(RecordingProgressReporter::default());
    let provider = provider_with(
        &storage,
        Arc::new(MockRenderer::new(false)),
        Arc::clone(&progress),
    );

    provider
        .resolve_completion_item(CompletionItem::new("heart"))
        .await;
    provider
        .resolve_completion_item(CompletionItem::new("heart"))
        .await;

    let increments = progress.increments.lock().unwrap();
    assert_eq!(*increments, vec![0, 100, 0, 100]);
}
