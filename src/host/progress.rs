//! 进度上报接口
//!
//! 宿主编辑器的进度 UI 通过这里的窄接口接入。
//! 图标预览的加载是单个不可分的工作单元，只上报 0 和 100。

use tracing::debug;

/// 进度上报器（宿主 UI 提供）
pub trait ProgressReporter: Send + Sync {
    /// 开始一个不可取消的进度任务，返回用于上报增量的句柄
    fn start(&self, title: &str) -> Box<dyn ProgressHandle>;
}

/// 单个进度任务的句柄
pub trait ProgressHandle: Send {
    /// 上报进度增量
    fn report(&mut self, increment: u32);
}

/// 无操作的进度上报器，用于没有进度 UI 的宿主环境
#[derive(Debug, Default)]
pub struct NoopProgressReporter;

impl ProgressReporter for NoopProgressReporter {
    fn start(&self, _title: &str) -> Box<dyn ProgressHandle> {
        Box::new(NoopProgressHandle)
    }
}

struct NoopProgressHandle;

impl ProgressHandle for NoopProgressHandle {
    fn report(&mut self, _increment: u32) {}
}

/// 将进度写入日志的上报器
#[derive(Debug, Default)]
pub struct LogProgressReporter;

impl ProgressReporter for LogProgressReporter {
    fn start(&self, title: &str) -> Box<dyn ProgressHandle> {
        Box::new(LogProgressHandle {
            title: title.to_string(),
        })
    }
}

struct LogProgressHandle {
    title: String,
}

impl ProgressHandle for LogProgressHandle {
    fn report(&mut self, increment: u32) {
        debug!("进度上报: title='{}', increment={}", self.title, increment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_reporter_ignores_reports() {
        let mut handle = NoopProgressReporter.start("Loading icons");
        handle.report(0);
        handle.report(100);
    }

    #[test]
    fn log_reporter_accepts_reports() {
        let mut handle = LogProgressReporter.start("Loading icons");
        handle.report(0);
        handle.report(100);
    }
}
