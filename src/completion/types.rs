//! 补全功能相关的类型定义

use serde::{Deserialize, Serialize};

/// 补全项标签
///
/// 宿主补全协议里的标签既可能是纯字符串，也可能是带描述的结构化标签。
/// 统一建模为变体类型，取文本时通过 [`CompletionLabel::as_str`] 归一化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompletionLabel {
    /// 纯文本标签
    Plain(String),
    /// 结构化标签
    Detailed {
        /// 标签文本
        label: String,

        /// 附加描述
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl CompletionLabel {
    /// 归一化为纯文本标签
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(label) => label,
            Self::Detailed { label, .. } => label,
        }
    }
}

/// 补全项文档
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Documentation {
    /// Markdown 文档，图标预览通过图片引用嵌入
    Markdown {
        /// Markdown 原文
        value: String,
    },
    /// 纯文本提示
    PlainText(String),
}

impl Documentation {
    /// 创建 Markdown 文档
    pub fn markdown(value: impl Into<String>) -> Self {
        Self::Markdown {
            value: value.into(),
        }
    }

    /// 创建纯文本文档
    pub fn plain_text(value: impl Into<String>) -> Self {
        Self::PlainText(value.into())
    }

    /// 获取文档原文
    pub fn value(&self) -> &str {
        match self {
            Self::Markdown { value } => value,
            Self::PlainText(value) => value,
        }
    }
}

/// 补全项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    /// 标签
    pub label: CompletionLabel,

    /// 文档，列出补全项时为空，解析时才附加
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Documentation>,
}

impl CompletionItem {
    /// 创建只带纯文本标签的补全项
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: CompletionLabel::Plain(label.into()),
            documentation: None,
        }
    }

    /// 设置文档
    pub fn with_documentation(mut self, documentation: Documentation) -> Self {
        self.documentation = Some(documentation);
        self
    }
}

/// 补全上下文
///
/// 宿主文档模型的窄投影：当前行文本加光标在行内的字符偏移。
#[derive(Debug, Clone)]
pub struct CompletionContext {
    /// 当前行完整文本
    pub line_text: String,

    /// 光标在行内的字符偏移
    pub character: usize,
}

impl CompletionContext {
    /// 创建新的补全上下文
    pub fn new(line_text: impl Into<String>, character: usize) -> Self {
        Self {
            line_text: line_text.into(),
            character,
        }
    }
}
