//! vswhere `-format json` 输出对应的安装实例模型。
//!
//! 约定：
//! - 字段名与 vswhere 输出完全一致（camelCase），属于兼容性契约，不可随意改名
//! - 所有字符串字段原样透传，不做校验或规范化
//! - 缺失字段取默认值（`-legacy` 查询到的旧版本只返回部分字段）；
//!   字段存在但类型不符、或顶层不是数组时整体解码失败，不返回部分结果
//! - 未知字段忽略（不同版本的 vswhere 会追加字段）
//!
//! 作者：vslocate 项目组
//! 创建时间：2026-10-16
//! 修改时间：2026-10-16

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::LocatorError;

/// 一个 Visual Studio 安装实例。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Installation {
    /// 实例 ID（稳定唯一）。
    pub instance_id: String,
    /// 安装时间。
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub install_date: Option<OffsetDateTime>,
    pub installation_name: String,
    /// 安装目录（`-path` 查询使用该值）。
    pub installation_path: String,
    pub installation_version: String,
    pub product_id: String,
    pub product_path: String,
    /// 实例状态位（vswhere 原样输出的整数）。
    pub state: u64,
    pub is_complete: bool,
    pub is_launchable: bool,
    pub is_prerelease: bool,
    pub is_reboot_required: bool,
    pub display_name: String,
    pub description: String,
    pub channel_id: String,
    pub channel_uri: String,
    pub engine_path: String,
    pub release_notes: String,
    pub third_party_notices: String,
    /// 最近一次更新时间。
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub update_date: Option<OffsetDateTime>,
    pub catalog: Catalog,
    pub properties: Properties,
}

/// 构建/产品元数据。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Catalog {
    pub build_branch: String,
    pub build_version: String,
    pub id: String,
    pub local_build: String,
    pub manifest_name: String,
    pub manifest_type: String,
    pub product_display_version: String,
    pub product_line: String,
    pub product_line_version: String,
    pub product_milestone: String,
    /// vswhere 输出为字符串（例如 `"True"`），此处不转为布尔。
    #[serde(rename = "productMilestoneIsPreRelease")]
    pub product_milestone_is_prerelease: String,
    pub product_name: String,
    pub product_patch_version: String,
    #[serde(rename = "productPreReleaseMilestoneSuffix")]
    pub product_prerelease_milestone_suffix: String,
    pub product_semantic_version: String,
    pub required_engine_version: String,
}

/// 自由格式的字符串属性。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Properties {
    pub campaign_id: String,
    pub channel_manifest_id: String,
    pub nickname: String,
    pub setup_engine_file_path: String,
}

/// 将 vswhere 的 stdout 解码为安装实例列表。
///
/// 参数：
/// - `stdout`：`-format json` 模式下捕获的完整输出
///
/// 返回值：
/// - 按 vswhere 输出顺序排列的实例（可能为空）
///
/// 编码说明：
/// - 未传 `-utf8` 时 vswhere 按控制台代码页输出（例如中文系统下的 GBK），
///   非 UTF-8 字节替换为 U+FFFD，不影响其余字段与记录
///
/// 异常处理：
/// - 非 JSON、顶层不是数组、字段类型不符时返回 [`LocatorError::Decode`]
pub fn decode_installations(stdout: &[u8]) -> Result<Vec<Installation>, LocatorError> {
    let text = String::from_utf8_lossy(stdout);
    serde_json::from_str(&text).map_err(LocatorError::Decode)
}
