//! 查询选项与命令行参数渲染。
//!
//! 说明：
//! - 每个选项相互独立，可任意组合；默认值即 vswhere 自身的默认行为
//! - 渲染是纯函数：相同配置总是得到相同且顺序固定的参数
//! - 不校验选项取值（例如版本区间格式），交由 vswhere 自行报错
//!
//! 作者：vslocate 项目组
//! 创建时间：2026-10-16
//! 修改时间：2026-10-16

use std::ffi::OsString;
use std::path::Path;

/// 请求结构化输出的参数，总是位于参数列表末尾。
pub const FORMAT_JSON_ARGS: [&str; 2] = ["-format", "json"];

/// 传给 `-products` 时表示“所有已安装产品”。
pub const ALL_PRODUCTS: &str = "*";

/// vswhere 查询选项。
///
/// 字段说明：
/// - `all`：包含未完成、可能无法启动的实例（`-all`）
/// - `prerelease`：包含预览版（`-prerelease`）
/// - `products`：限定产品 ID；单独一个 `*` 表示所有产品（`-products`）
/// - `requires`：要求包含的工作负载/组件 ID，默认全部满足（`-requires`）
/// - `requires_any`：`requires` 改为满足任意一个即可（`-requiresAny`）
/// - `version`：版本区间，例如 `[15.0,16.0)`（`-version`）
/// - `latest`：只返回最新的一个实例（`-latest`）
/// - `legacy`：同时查找 VS2015 及更早版本，返回字段有限（`-legacy`）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub all: bool,
    pub prerelease: bool,
    pub products: Vec<String>,
    pub requires: Vec<String>,
    pub requires_any: bool,
    pub version: Option<String>,
    pub latest: bool,
    pub legacy: bool,
}

impl SearchOptions {
    /// 默认选项（等价于不带任何过滤参数调用 vswhere）。
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    pub fn with_prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }

    /// 限定产品 ID。传入单个 [`ALL_PRODUCTS`] 可查找所有产品实例。
    pub fn with_products<I, S>(mut self, products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.products = products.into_iter().map(Into::into).collect();
        self
    }

    /// 要求实例包含指定的工作负载/组件；默认需全部满足，见 [`Self::with_requires_any`]。
    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = requires.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_requires_any(mut self, requires_any: bool) -> Self {
        self.requires_any = requires_any;
        self
    }

    /// 版本区间，原样透传给 `-version`。
    pub fn with_version(mut self, version_range: impl Into<String>) -> Self {
        self.version = Some(version_range.into());
        self
    }

    pub fn with_latest(mut self, latest: bool) -> Self {
        self.latest = latest;
        self
    }

    pub fn with_legacy(mut self, legacy: bool) -> Self {
        self.legacy = legacy;
        self
    }

    /// 渲染为 vswhere 参数列表。
    ///
    /// 顺序固定：`-all`、`-prerelease`、`-products`、`-requires`、`-requiresAny`、
    /// `-version`、`-latest`、`-legacy`，最后是 `-format json`。
    /// 空列表与空版本字符串不产生参数。
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.all {
            args.push("-all".to_string());
        }
        if self.prerelease {
            args.push("-prerelease".to_string());
        }
        if !self.products.is_empty() {
            args.push("-products".to_string());
            args.extend(self.products.iter().cloned());
        }
        if !self.requires.is_empty() {
            args.push("-requires".to_string());
            args.extend(self.requires.iter().cloned());
        }
        if self.requires_any {
            args.push("-requiresAny".to_string());
        }
        if let Some(version) = self.version.as_deref().filter(|v| !v.is_empty()) {
            args.push("-version".to_string());
            args.push(version.to_string());
        }
        if self.latest {
            args.push("-latest".to_string());
        }
        if self.legacy {
            args.push("-legacy".to_string());
        }
        args.extend(FORMAT_JSON_ARGS.iter().map(|s| s.to_string()));
        args
    }
}

/// 渲染按安装目录查询单个实例的参数：`-path <path> -format json`。
pub fn path_args(path: &Path) -> Vec<OsString> {
    let mut args = vec![OsString::from("-path"), path.as_os_str().to_os_string()];
    args.extend(FORMAT_JSON_ARGS.iter().map(OsString::from));
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 用若干开关组合出一组有代表性的配置。
    fn sample_configs() -> Vec<SearchOptions> {
        let mut configs = Vec::new();
        for bits in 0u16..(1 << 8) {
            let on = |i: u16| bits & (1 << i) != 0;
            let mut o = SearchOptions::new()
                .with_all(on(0))
                .with_prerelease(on(1))
                .with_requires_any(on(2))
                .with_latest(on(3))
                .with_legacy(on(4));
            if on(5) {
                o = o.with_products(["Microsoft.VisualStudio.Product.BuildTools"]);
            }
            if on(6) {
                o = o.with_requires([
                    "Microsoft.VisualStudio.Component.VC.Tools.x86.x64",
                    "Microsoft.VisualStudio.Component.Windows11SDK.22621",
                ]);
            }
            if on(7) {
                o = o.with_version("[17.0,18.0)");
            }
            configs.push(o);
        }
        configs
    }

    #[test]
    fn default_options_only_request_json() {
        assert_eq!(SearchOptions::default().to_args(), vec!["-format", "json"]);
    }

    #[test]
    fn every_option_renders_in_fixed_order() {
        let args = SearchOptions::new()
            .with_legacy(true)
            .with_latest(true)
            .with_version("[15.0,16.0)")
            .with_requires_any(true)
            .with_requires(["A", "B"])
            .with_products(["P1", "P2"])
            .with_prerelease(true)
            .with_all(true)
            .to_args();
        assert_eq!(
            args,
            vec![
                "-all",
                "-prerelease",
                "-products",
                "P1",
                "P2",
                "-requires",
                "A",
                "B",
                "-requiresAny",
                "-version",
                "[15.0,16.0)",
                "-latest",
                "-legacy",
                "-format",
                "json",
            ]
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        for o in sample_configs() {
            assert_eq!(o.to_args(), o.clone().to_args());
        }
    }

    #[test]
    fn format_flag_is_last_and_appears_once() {
        for o in sample_configs() {
            let args = o.to_args();
            assert_eq!(&args[args.len() - 2..], &["-format", "json"], "{o:?}");
            assert_eq!(args.iter().filter(|a| *a == "-format").count(), 1, "{o:?}");
        }
    }

    #[test]
    fn wildcard_product_is_passed_through() {
        let args = SearchOptions::new().with_products([ALL_PRODUCTS]).to_args();
        assert_eq!(args, vec!["-products", "*", "-format", "json"]);
    }

    #[test]
    fn empty_values_render_nothing() {
        let o = SearchOptions::new()
            .with_products(Vec::<String>::new())
            .with_requires(Vec::<String>::new())
            .with_version("");
        assert_eq!(o.to_args(), vec!["-format", "json"]);
    }

    #[test]
    fn malformed_version_is_not_validated() {
        let args = SearchOptions::new().with_version("not-a-range").to_args();
        assert_eq!(args, vec!["-version", "not-a-range", "-format", "json"]);
    }

    #[test]
    fn path_query_keeps_path_verbatim() {
        let p = Path::new("C:\\Program Files\\Microsoft Visual Studio\\2022\\Community");
        let args = path_args(p);
        assert_eq!(
            args,
            vec![
                OsString::from("-path"),
                OsString::from("C:\\Program Files\\Microsoft Visual Studio\\2022\\Community"),
                OsString::from("-format"),
                OsString::from("json"),
            ]
        );
    }
}
