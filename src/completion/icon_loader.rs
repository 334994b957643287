//! 图标 SVG 加载
//!
//! 渲染协作方以窄接口接入，测试环境可替换为桩实现。
//! 默认实现直接从 CDN 拉取图标的矢量文本。

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

use crate::config::CompletionConfig;
use crate::utils::error::AppResult;

/// 渲染后的图标，按配色变体区分
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    /// 深色模式变体的 SVG 文本
    pub dark_mode: String,

    /// 浅色模式变体的 SVG 文本
    pub light_mode: String,
}

/// 图标渲染协作方接口
#[async_trait]
pub trait IconRenderer: Send + Sync {
    /// 渲染指定图标，dark_mode 选择请求的配色变体
    async fn render(&self, icon_name: &str, dark_mode: bool) -> AppResult<RenderedIcon>;
}

/// 基于 CDN 的默认图标渲染实现
pub struct HttpIconRenderer {
    /// HTTP 客户端
    client: reqwest::Client,
    /// 补全配置
    config: CompletionConfig,
}

impl HttpIconRenderer {
    /// 创建新的 CDN 渲染器
    pub fn new(config: CompletionConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent("IonX/0.2")
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    /// 图标 SVG 的远程地址
    pub fn svg_url(&self, icon_name: &str) -> String {
        format!(
            "{}/ionicons@{}/dist/svg/{}.svg",
            self.config.cdn_base_url, self.config.icons_version, icon_name
        )
    }
}

#[async_trait]
impl IconRenderer for HttpIconRenderer {
    async fn render(&self, icon_name: &str, _dark_mode: bool) -> AppResult<RenderedIcon> {
        let url = self.svg_url(icon_name);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("请求图标 SVG 失败")?
            .error_for_status()
            .context("图标 SVG 请求返回错误状态")?;

        let svg = response.text().await.context("读取图标 SVG 响应失败")?;

        // CDN 只提供一份矢量内容，两种配色变体共用，着色交给宿主预览环境
        Ok(RenderedIcon {
            dark_mode: svg.clone(),
            light_mode: svg,
        })
    }
}
