//! `<ion-icon>` name 属性的触发位置检测
//!
//! 只分析单行文本：跨行书写的标签不会被识别。
//! 匹配结果以带字符偏移的类型化区间返回，调用方不接触正则内部。

use std::sync::OnceLock;

use regex::Regex;

/// name 属性值在行内的字符区间
///
/// `start` 是值的第一个字符的偏移，`end` 是值结束后一个位置。
/// 区间判定对两端都取闭区间，光标停在闭引号处也算命中。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameAttributeSpan {
    /// 值起始字符偏移
    pub start: usize,
    /// 值结束后一个位置的字符偏移
    pub end: usize,
}

impl NameAttributeSpan {
    /// 判断字符偏移是否落在区间内
    pub fn contains(&self, character: usize) -> bool {
        self.start <= character && character <= self.end
    }
}

fn name_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<ion-icon.+?name=['"](.*)["']"#).unwrap())
}

/// 提取行内 ion-icon 标签 name 属性值的字符区间
///
/// 行内没有匹配，或匹配不含值分组时返回 None。
pub fn name_attribute_span(line: &str) -> Option<NameAttributeSpan> {
    let captures = name_attr_regex().captures(line)?;
    let value = captures.get(1)?;

    // 正则给出的是字节偏移，换算成字符偏移后再和光标比较
    let start = line[..value.start()].chars().count();
    let end = start + line[value.start()..value.end()].chars().count();

    Some(NameAttributeSpan { start, end })
}

/// 判断光标是否位于 ion-icon 标签的 name 属性值内
pub fn should_trigger(line: &str, character: usize) -> bool {
    match name_attribute_span(line) {
        Some(span) => span.contains(character),
        None => false,
    }
}
