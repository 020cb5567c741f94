//! 定位器错误类型。
//!
//! 分类：
//! - 执行失败：进程无法启动、等待失败、被取消或超时（[`LocatorError::is_execution_failure`]）
//! - 外部工具失败：vswhere 以非 0 退出码结束，stderr 原样保留
//! - 解码失败：stdout 不是预期的 JSON 结构
//! - 未找到：按路径查询时没有任何实例
//!
//! 所有错误均不重试，直接返回给调用方。
//!
//! 作者：vslocate 项目组
//! 创建时间：2026-10-16
//! 修改时间：2026-10-16

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// 一次 vswhere 调用可能出现的失败。
#[derive(Debug, Error)]
pub enum LocatorError {
    /// 进程无法启动或等待失败（文件不存在、权限不足等）。
    #[error("执行 vswhere 失败: {}: {source}", .path.display())]
    Execution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 调用方在进程结束前取消了本次调用；子进程已被终止。
    #[error("vswhere 调用已取消")]
    Cancelled,
    /// 超过调用方给定的超时时间；子进程已被终止。
    #[error("vswhere 调用超时: {timeout:?}")]
    TimedOut { timeout: Duration },
    /// vswhere 退出码非 0。
    ///
    /// `stderr` 保存捕获到的原始字节，不做任何裁剪。
    #[error("vswhere 执行失败 (退出码 {}): {}", display_code(.code), String::from_utf8_lossy(.stderr))]
    ExternalTool { code: Option<i32>, stderr: Vec<u8> },
    /// stdout 无法解析为安装实例数组。
    #[error("解析 vswhere 输出失败: {0}")]
    Decode(#[source] serde_json::Error),
    /// 按路径查询没有返回任何实例。
    #[error("指定路径下没有安装实例: {}", .path.display())]
    NotFound { path: PathBuf },
}

impl LocatorError {
    /// 是否属于“进程未能正常跑完”一类（启动失败、取消、超时）。
    pub fn is_execution_failure(&self) -> bool {
        matches!(
            self,
            LocatorError::Execution { .. } | LocatorError::Cancelled | LocatorError::TimedOut { .. }
        )
    }

    /// 外部工具失败时返回捕获的 stderr 原始字节。
    pub fn stderr(&self) -> Option<&[u8]> {
        match self {
            LocatorError::ExternalTool { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

/// 退出码的展示形式；被信号终止时没有退出码。
fn display_code(code: &Option<i32>) -> String {
    code.map(|c| c.to_string()).unwrap_or_else(|| "无".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_tool_message_carries_stderr_text() {
        let err = LocatorError::ExternalTool {
            code: Some(87),
            stderr: b"Error 0x57: invalid parameter -version".to_vec(),
        };
        let msg = err.to_string();
        assert!(msg.contains("87"), "{msg}");
        assert!(msg.contains("invalid parameter -version"), "{msg}");
        assert_eq!(err.stderr(), Some(&b"Error 0x57: invalid parameter -version"[..]));
        assert!(!err.is_execution_failure());
    }

    #[test]
    fn cancellation_and_timeout_count_as_execution_failures() {
        assert!(LocatorError::Cancelled.is_execution_failure());
        assert!(LocatorError::TimedOut {
            timeout: Duration::from_millis(5)
        }
        .is_execution_failure());
        let spawn = LocatorError::Execution {
            path: PathBuf::from("vswhere.exe"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(spawn.is_execution_failure());
        assert!(spawn.to_string().contains("vswhere.exe"));
    }

    #[test]
    fn not_found_names_the_queried_path() {
        let err = LocatorError::NotFound {
            path: PathBuf::from("C:\\VS\\Missing"),
        };
        assert!(err.to_string().contains("C:\\VS\\Missing"));
        assert!(!err.is_execution_failure());
    }
}
