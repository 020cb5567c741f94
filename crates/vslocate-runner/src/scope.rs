//! 调用范围：取消令牌 + 可选超时。
//!
//! 作者：vslocate 项目组
//! 创建时间：2026-10-16
//! 修改时间：2026-10-16

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// 单次调用的取消/超时范围。
///
/// 说明：
/// - 默认既不会被取消也没有超时，调用会一直等待进程退出
/// - 令牌可与调用方其他任务共享；克隆出的 scope 共享同一个令牌
/// - 超时从进程启动时开始计算
#[derive(Debug, Clone, Default)]
pub struct SearchScope {
    cancel: CancellationToken,
    timeout: Option<Duration>,
}

impl SearchScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置超时；到期后终止进程并返回 `TimedOut`。
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// 使用调用方自己的取消令牌。
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// 取消本 scope（以及共享同一令牌的所有调用）。
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// 超时到期时完成；没有超时则永远挂起。
    pub(crate) async fn expired(&self) {
        match self.timeout {
            Some(timeout) => tokio::time::sleep(timeout).await,
            None => std::future::pending().await,
        }
    }
}
