//! `error`：词典加载错误。
//!
//! 加载失败只影响本次 `load_*` 调用：新序列在完整构建成功之前不会换入，
//! 已提交的旧快照保持原样。

use thiserror::Error;

/// 词典数据不合法（序列化串解析失败 / 条目缺字段或形状不符）。
#[derive(Debug, Error)]
pub enum LoadError {
    /// `serialization = string` 场景下，文本无法解析为 JSON 集合
    #[error("无法解析序列化的字典数据")]
    Parse(#[source] serde_json::Error),

    /// `serialization = string` 场景下，数据本身不是字符串
    #[error("serialization=string 时字典数据应为字符串，实际是 {found}")]
    NotSerialized { found: &'static str },

    /// 材料化之后的数据不是数组
    #[error("字典数据应为数组，实际是 {found}")]
    NotAnArray {
        /// 实际遇到的 JSON 值类型名
        found: &'static str,
    },

    /// 整体负载不是对象（应含 `characters`/`words` 两个集合）
    #[error("字典负载应为对象，实际是 {found}")]
    NotAnObject { found: &'static str },

    /// 第 `index` 个条目不符合声明的形状
    #[error("第 {index} 个条目不符合 {shape} 形状：{reason}")]
    BadEntry {
        index: usize,
        shape: &'static str,
        reason: String,
    },
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;
