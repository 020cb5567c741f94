//! vswhere 查询入口：全量查询与按路径查询。
//!
//! 调用流程：
//! 1) 选项渲染为参数（见 [`SearchOptions::to_args`]）
//! 2) 在调用范围内运行 vswhere，捕获输出
//! 3) 非 0 退出码返回 stderr 原文；否则解码 stdout
//!
//! 作者：vslocate 项目组
//! 创建时间：2026-10-16
//! 修改时间：2026-10-16

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use vslocate_core::options::path_args;
use vslocate_core::{decode_installations, paths, Installation, LocatorError, SearchOptions};

use crate::process::run_captured;
use crate::scope::SearchScope;

/// vswhere 定位器。
///
/// 说明：
/// - [`Locator::new`] 使用固定安装路径（`%ProgramFiles(x86)%\...\vswhere.exe`）
/// - [`Locator::with_executable`] 指向其他可执行文件（测试替身或手工指定）
/// - 不持有任何跨调用状态，可在多个任务中并发使用
#[derive(Debug, Clone)]
pub struct Locator {
    executable: PathBuf,
}

impl Default for Locator {
    fn default() -> Self {
        Self::new()
    }
}

impl Locator {
    /// 使用固定路径约定解析 vswhere.exe。
    pub fn new() -> Self {
        Self {
            executable: paths::locator_path(),
        }
    }

    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// 以给定参数运行一次 vswhere 并解码结果。
    ///
    /// 参数：
    /// - `scope`：取消/超时范围
    /// - `args`：完整参数列表，调用方负责带上 `-format json`
    ///
    /// 返回值：
    /// - vswhere 输出顺序下的全部实例（可能为空）
    ///
    /// 异常处理：
    /// - 启动失败/取消/超时：执行类错误
    /// - 退出码非 0：[`LocatorError::ExternalTool`]，携带 stderr 原始字节
    /// - 输出无法解码：[`LocatorError::Decode`]，不返回部分结果
    pub async fn search<I, S>(
        &self,
        scope: &SearchScope,
        args: I,
    ) -> Result<Vec<Installation>, LocatorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let out = run_captured(&self.executable, args, scope).await?;
        if !out.status.success() {
            warn!(status = %out.status, "vswhere 退出码异常");
            return Err(LocatorError::ExternalTool {
                code: out.status.code(),
                stderr: out.stderr,
            });
        }
        let installs = decode_installations(&out.stdout)?;
        debug!(count = installs.len(), "vswhere 返回实例");
        Ok(installs)
    }

    /// 按选项查找所有匹配的实例。
    pub async fn find_all(
        &self,
        scope: &SearchScope,
        options: &SearchOptions,
    ) -> Result<Vec<Installation>, LocatorError> {
        self.search(scope, options.to_args()).await
    }

    /// 获取指定安装目录下的实例。
    ///
    /// 返回值：
    /// - vswhere 返回的第一个实例（按路径查询时至多一个）
    ///
    /// 异常处理：
    /// - 没有任何实例时返回 [`LocatorError::NotFound`]，其中包含查询路径
    pub async fn get_by_path(
        &self,
        scope: &SearchScope,
        path: impl AsRef<Path>,
    ) -> Result<Installation, LocatorError> {
        let path = path.as_ref();
        let installs = self.search(scope, path_args(path)).await?;
        installs
            .into_iter()
            .next()
            .ok_or_else(|| LocatorError::NotFound {
                path: path.to_path_buf(),
            })
    }
}

/// 使用默认路径的 vswhere 查找所有匹配实例。
pub async fn find_all(
    scope: &SearchScope,
    options: &SearchOptions,
) -> Result<Vec<Installation>, LocatorError> {
    Locator::new().find_all(scope, options).await
}

/// 使用默认路径的 vswhere 获取指定目录下的实例。
pub async fn get_by_path(
    scope: &SearchScope,
    path: impl AsRef<Path>,
) -> Result<Installation, LocatorError> {
    Locator::new().get_by_path(scope, path).await
}
