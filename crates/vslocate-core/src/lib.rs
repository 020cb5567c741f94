//! vswhere 定位器核心库（纯数据与纯函数，不做进程 IO）。
//!
//! 功能：
//! - 定义 vswhere JSON 输出对应的安装实例模型（Installation / Catalog / Properties）
//! - 定义查询选项并渲染为 vswhere 命令行参数
//! - 约定 vswhere.exe 的固定安装路径
//! - 定义统一的错误类型 [`LocatorError`]
//!
//! 作者：vslocate 项目组
//! 创建时间：2026-10-16
//! 修改时间：2026-10-16

pub mod error;
pub mod installation;
pub mod options;
pub mod paths;

pub use error::LocatorError;
pub use installation::{decode_installations, Catalog, Installation, Properties};
pub use options::SearchOptions;
