//! vswhere.exe 路径约定。
//!
//! 约定：
//! - vswhere 随 Visual Studio Installer 安装在 `%ProgramFiles(x86)%\Microsoft Visual Studio\Installer\vswhere.exe`
//! - 该路径不可配置；环境变量缺失时仍返回一个（相对的）路径，由后续执行阶段报错
//!
//! 作者：vslocate 项目组
//! 创建时间：2026-10-16
//! 修改时间：2026-10-16

use std::ffi::OsStr;
use std::path::PathBuf;

use tracing::warn;

/// 提供安装根目录的环境变量名。
pub const PROGRAM_FILES_X86_VAR: &str = "ProgramFiles(x86)";

/// Program Files 下的供应商目录名。
pub const VENDOR_DIR: &str = "Microsoft Visual Studio";

/// 供应商目录下的安装器目录名。
pub const INSTALLER_DIR: &str = "Installer";

/// 定位器可执行文件名。
pub const LOCATOR_EXE: &str = "vswhere.exe";

/// 读取环境变量并拼出 vswhere.exe 的完整路径。
///
/// 返回值：
/// - `%ProgramFiles(x86)%\Microsoft Visual Studio\Installer\vswhere.exe`
///
/// 异常处理：
/// - 环境变量不存在时不报错，只记录告警；返回的路径会在启动进程时失败。
pub fn locator_path() -> PathBuf {
    let program_files = std::env::var_os(PROGRAM_FILES_X86_VAR);
    if program_files.is_none() {
        warn!("环境变量 {PROGRAM_FILES_X86_VAR} 不存在，vswhere 路径将无法解析");
    }
    locator_path_from(program_files.as_deref())
}

/// 基于给定的 Program Files 目录拼出 vswhere.exe 路径（不读环境变量）。
///
/// 参数：
/// - `program_files`：`ProgramFiles(x86)` 的值；`None` 视为空字符串
pub fn locator_path_from(program_files: Option<&OsStr>) -> PathBuf {
    PathBuf::from(program_files.unwrap_or_default())
        .join(VENDOR_DIR)
        .join(INSTALLER_DIR)
        .join(LOCATOR_EXE)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn joins_fixed_segments_under_program_files() {
        let root = Path::new("pf86");
        let p = locator_path_from(Some(root.as_os_str()));
        assert_eq!(
            p,
            root.join("Microsoft Visual Studio")
                .join("Installer")
                .join("vswhere.exe")
        );
    }

    #[test]
    fn missing_program_files_yields_relative_path() {
        let p = locator_path_from(None);
        assert!(p.is_relative());
        assert!(p.ends_with(Path::new("Installer").join("vswhere.exe")));
    }
}
