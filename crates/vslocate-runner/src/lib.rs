//! vswhere 进程调用与输出解码。
//!
//! 目标：
//! - 以调用方提供的取消/超时范围启动一次 vswhere 进程，分别捕获 stdout/stderr
//! - 将 stdout 解码为安装实例，或返回分类明确的错误
//! - 不缓存、不重试、调用之间不共享任何状态
//!
//! 作者：vslocate 项目组
//! 创建时间：2026-10-16
//! 修改时间：2026-10-16

pub mod locator;
pub mod process;
pub mod scope;

pub use locator::{find_all, get_by_path, Locator};
pub use scope::SearchScope;
