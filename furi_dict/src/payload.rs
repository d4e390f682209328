//! `payload`：词典数据的线上形状（wire shape）与条目材料化。
//!
//! 负载结构（解析后）：
//! - `characters: [{char: "完"}, ...]` —— 目前一律视为可注音字符
//! - `words: [{str: "完璧", ruby: "カンペキ"}, ...]`
//!
//! `Format`/`Serialization` 是封闭枚举，在加载边界处穷尽匹配；
//! 每个分支都是"原始条目 -> 类型化条目"的纯函数。

use serde::Deserialize;
use serde_json::Value;

use crate::error::{LoadError, LoadResult};

/// 条目形状：原始条目如何映射为类型化条目。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// 条目原样透传（假定已符合目标结构）
    Full,
    /// 目前与 `Full` 行为一致（为将来分化预留）
    #[default]
    Object,
    /// 条目是裸标量；包装进唯一标识字段（字符用 `char`，词用 `str`，ruby 默认空）
    Single,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::Full => "full",
            Format::Object => "object",
            Format::Single => "single",
        }
    }
}

/// 序列化包装：集合是现成的 JSON 值，还是待解析的文本。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Serialization {
    /// 集合原样使用
    #[default]
    Json,
    /// 集合是序列化文本，需先解析；解析失败报 `LoadError::Parse`
    String,
}

/// 字符条目：单个可注音字符。重复条目允许但冗余。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CharacterEntry {
    /// 字符本身（线上字段名 `char`；必须恰好一个字符）
    #[serde(rename = "char")]
    pub ch: char,
}

/// 词条目：带已知读音的词汇单元（也可以是单字）。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordEntry {
    /// 查询 key（线上字段名 `str`）
    #[serde(rename = "str")]
    pub text: String,
    /// 注音（线上字段名 `ruby`；缺省为空串）
    #[serde(rename = "ruby", default)]
    pub gloss: String,
}

/// 按 `serialization` 把原始数据材料化为条目数组。
pub(crate) fn materialize_items(data: &Value, serialization: Serialization) -> LoadResult<Vec<Value>> {
    let parsed: Value;
    let value = match serialization {
        Serialization::String => {
            let Value::String(text) = data else {
                return Err(LoadError::NotSerialized {
                    found: json_type_name(data),
                });
            };
            parsed = serde_json::from_str(text).map_err(LoadError::Parse)?;
            &parsed
        }
        Serialization::Json => data,
    };
    match value {
        Value::Array(items) => Ok(items.clone()),
        other => Err(LoadError::NotAnArray {
            found: json_type_name(other),
        }),
    }
}

/// 第 `index` 个原始条目 -> `CharacterEntry`。
pub(crate) fn character_entry(item: &Value, format: Format, index: usize) -> LoadResult<CharacterEntry> {
    match format {
        Format::Full | Format::Object => {
            serde_json::from_value(item.clone()).map_err(|e| LoadError::BadEntry {
                index,
                shape: format.name(),
                reason: e.to_string(),
            })
        }
        Format::Single => {
            let text = scalar_str(item, index)?;
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(CharacterEntry { ch }),
                _ => Err(LoadError::BadEntry {
                    index,
                    shape: "single",
                    reason: format!("应为单个字符，实际 {text:?}"),
                }),
            }
        }
    }
}

/// 第 `index` 个原始条目 -> `WordEntry`。
pub(crate) fn word_entry(item: &Value, format: Format, index: usize) -> LoadResult<WordEntry> {
    match format {
        Format::Full | Format::Object => {
            serde_json::from_value(item.clone()).map_err(|e| LoadError::BadEntry {
                index,
                shape: format.name(),
                reason: e.to_string(),
            })
        }
        Format::Single => {
            let text = scalar_str(item, index)?;
            Ok(WordEntry {
                text: text.to_string(),
                gloss: String::new(),
            })
        }
    }
}

fn scalar_str(item: &Value, index: usize) -> LoadResult<&str> {
    match item {
        Value::String(s) => Ok(s),
        other => Err(LoadError::BadEntry {
            index,
            shape: "single",
            reason: format!("应为字符串标量，实际是 {}", json_type_name(other)),
        }),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
