//! 分页结果模型
//!
//! 对应后端 Spring Data 风格的 `Page<T>` JSON 结构。

use serde::{Deserialize, Serialize};

/// 一页查询结果
///
/// 每次成功的列表请求整体替换前一页。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    /// 当前页的记录
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// 总页数
    #[serde(default)]
    pub total_pages: u32,
    /// 总记录数
    #[serde(default)]
    pub total_elements: u64,
    /// 当前页号（从 0 开始）
    #[serde(default)]
    pub number: u32,
    /// 页大小
    #[serde(default)]
    pub size: u32,
}
