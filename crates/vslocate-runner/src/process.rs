//! 受取消范围约束的子进程执行，完整捕获 stdout/stderr。
//!
//! 实现策略：
//! - 使用 `tokio::process`，子进程设置 `kill_on_drop`
//! - 取消或超时时丢弃等待中的 future，子进程随之被终止
//! - stdout/stderr 各自完整缓冲，不限大小、不做流式处理
//!
//! 作者：vslocate 项目组
//! 创建时间：2026-10-16
//! 修改时间：2026-10-16

use std::ffi::OsStr;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, warn};
use vslocate_core::LocatorError;

use crate::scope::SearchScope;

/// 进程正常结束后捕获到的结果。
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// 启动可执行文件并等待其退出（或被取消/超时）。
///
/// 参数：
/// - `exe`：可执行文件路径
/// - `args`：参数列表（不含程序名）
/// - `scope`：取消/超时范围
///
/// 返回值：
/// - 进程退出后的状态与完整输出；退出码是否为 0 由调用方判断
///
/// 异常处理：
/// - 启动失败或等待失败：[`LocatorError::Execution`]
/// - 取消：[`LocatorError::Cancelled`]；超时：[`LocatorError::TimedOut`]
pub async fn run_captured<I, S>(
    exe: &Path,
    args: I,
    scope: &SearchScope,
) -> Result<CapturedOutput, LocatorError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    if scope.is_cancelled() {
        return Err(LocatorError::Cancelled);
    }

    let mut cmd = Command::new(exe);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    debug!(command = ?cmd.as_std(), "启动 vswhere");

    let child = cmd.spawn().map_err(|source| LocatorError::Execution {
        path: exe.to_path_buf(),
        source,
    })?;

    tokio::select! {
        biased;
        _ = scope.cancellation_token().cancelled() => {
            warn!("vswhere 调用被取消，终止子进程");
            Err(LocatorError::Cancelled)
        }
        _ = scope.expired() => {
            let timeout = scope.timeout().unwrap_or_default();
            warn!(?timeout, "vswhere 调用超时，终止子进程");
            Err(LocatorError::TimedOut { timeout })
        }
        out = child.wait_with_output() => {
            let out = out.map_err(|source| LocatorError::Execution {
                path: exe.to_path_buf(),
                source,
            })?;
            Ok(CapturedOutput {
                status: out.status,
                stdout: out.stdout,
                stderr: out.stderr,
            })
        }
    }
}
