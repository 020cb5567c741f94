//! vswhere 命令行前端（vslocate）。
//!
//! 职责：
//! - 将命令行参数转换为查询选项，调用 vswhere 并以 JSON 输出安装实例
//! - 按安装目录查询单个实例
//! - 环境自检：输出 vswhere 路径及是否存在
//!
//! 输出约定：
//! - stdout 只输出 JSON（便于脚本消费）；日志写入 stderr
//!
//! 作者：vslocate 项目组
//! 创建时间：2026-10-16
//! 修改时间：2026-10-16

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use vslocate_core::SearchOptions;
use vslocate_runner::{Locator, SearchScope};

/// 命令行参数。
///
/// 说明：
/// - `vswhere` 覆盖默认的 vswhere.exe 路径（默认按 `ProgramFiles(x86)` 约定解析）
/// - `timeout_secs` 为单次调用设置超时；不指定则一直等待
#[derive(Debug, Parser)]
#[command(name = "vslocate", version)]
struct Cli {
    #[arg(long, global = true)]
    vswhere: Option<PathBuf>,

    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// vslocate 支持的子命令。
#[derive(Debug, Subcommand)]
enum Commands {
    /// 查找所有匹配的安装实例。
    Find(FindArgs),
    /// 获取指定安装目录下的实例。
    Get {
        #[arg(long)]
        path: PathBuf,
    },
    /// 环境自检（vswhere 路径与是否存在）。
    Doctor,
}

/// `find` 子命令的过滤条件，与 vswhere 参数一一对应。
#[derive(Debug, Args)]
struct FindArgs {
    #[arg(long, default_value_t = false)]
    all: bool,

    #[arg(long, default_value_t = false)]
    prerelease: bool,

    #[arg(long, num_args = 1..)]
    products: Vec<String>,

    #[arg(long, num_args = 1..)]
    requires: Vec<String>,

    #[arg(long, default_value_t = false)]
    requires_any: bool,

    /// 版本区间，例如 `[17.0,18.0)`。
    #[arg(long)]
    version: Option<String>,

    #[arg(long, default_value_t = false)]
    latest: bool,

    #[arg(long, default_value_t = false)]
    legacy: bool,
}

impl FindArgs {
    fn to_options(&self) -> SearchOptions {
        SearchOptions {
            all: self.all,
            prerelease: self.prerelease,
            products: self.products.clone(),
            requires: self.requires.clone(),
            requires_any: self.requires_any,
            version: self.version.clone(),
            latest: self.latest,
            legacy: self.legacy,
        }
    }
}

/// 程序入口：初始化日志、解析参数并分发子命令。
///
/// 异常处理：
/// - 任意子命令失败会返回 `Err`，由 anyhow 输出完整错误链
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().context("解析日志级别失败")?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let locator = match &cli.vswhere {
        Some(path) => Locator::with_executable(path),
        None => Locator::new(),
    };
    let mut scope = SearchScope::new();
    if let Some(secs) = cli.timeout_secs {
        scope = scope.with_timeout(Duration::from_secs(secs));
    }

    match &cli.command {
        Commands::Find(args) => find(&locator, &scope, args),
        Commands::Get { path } => get(&locator, &scope, path),
        Commands::Doctor => doctor(&locator),
    }
}

/// 创建单次调用使用的 Tokio Runtime。
fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("创建 Tokio Runtime 失败")
}

/// 查找所有匹配实例并以 JSON 数组输出。
///
/// 异常处理：
/// - vswhere 启动失败、退出码异常或输出无法解析时返回错误
fn find(locator: &Locator, scope: &SearchScope, args: &FindArgs) -> Result<()> {
    let options = args.to_options();
    info!("查询 vswhere: {:?}", options.to_args());
    let installs = runtime()?
        .block_on(locator.find_all(scope, &options))
        .context("查询安装实例失败")?;
    info!("找到 {} 个实例", installs.len());
    let json = serde_json::to_string_pretty(&installs).context("序列化安装实例失败")?;
    println!("{json}");
    Ok(())
}

/// 获取指定目录下的实例并以 JSON 对象输出。
///
/// 异常处理：
/// - 目录下没有实例时返回错误（错误信息包含查询路径）
fn get(locator: &Locator, scope: &SearchScope, path: &Path) -> Result<()> {
    let install = runtime()?
        .block_on(locator.get_by_path(scope, path))
        .with_context(|| format!("获取安装实例失败: {}", path.display()))?;
    let json = serde_json::to_string_pretty(&install).context("序列化安装实例失败")?;
    println!("{json}");
    Ok(())
}

/// 环境自检（用于排障）。
///
/// 输出：
/// - vswhere 路径
/// - 该路径是否存在
fn doctor(locator: &Locator) -> Result<()> {
    println!("vswhere = {}", locator.executable().display());
    println!("exists = {}", locator.executable().exists());
    Ok(())
}
