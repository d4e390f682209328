//! `furi_dict`：词典加载与内存词典存储。
//!
//! 分工：
//! - 数据获取（文件/网络）由宿主负责；这里只接收**已材料化**的数据，不做阻塞 I/O
//! - `KanjiDictionary` 实现 `furi_core::dictionary::Dictionary`，供引擎做
//!   成员测试与词级注音查询
//! - 加载采用"整体构建 + 单次换入"：失败的加载不碰旧快照；并发读者
//!   看到的每个序列要么全旧要么全新，绝不混合

mod error;
mod payload;

pub use error::{LoadError, LoadResult};
pub use payload::{CharacterEntry, Format, Serialization, WordEntry};

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use furi_core::dictionary::Dictionary;
use serde_json::Value;

use crate::payload::{character_entry, json_type_name, materialize_items, word_entry};

/// 字符表：保留加载序的条目列表 + O(1) 成员索引。
#[derive(Debug, Default)]
struct CharacterTable {
    entries: Vec<CharacterEntry>,
    index: HashSet<char>,
}

impl CharacterTable {
    fn build(entries: Vec<CharacterEntry>) -> Self {
        let index = entries.iter().map(|e| e.ch).collect();
        Self { entries, index }
    }
}

/// 内存词典存储：字符序列与词序列各自独立加锁（读写锁按序列分域）。
///
/// 词表查询按加载序线性扫描、首个命中者胜——同 key 多条目时
/// 先加载的注音生效。
pub struct KanjiDictionary {
    characters: RwLock<Arc<CharacterTable>>,
    words: RwLock<Arc<Vec<WordEntry>>>,
}

impl Default for KanjiDictionary {
    fn default() -> Self {
        Self {
            characters: RwLock::new(Arc::new(CharacterTable::default())),
            words: RwLock::new(Arc::new(Vec::new())),
        }
    }
}

impl KanjiDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从一份负载对象同时加载两个序列（缺失的集合跳过、保留旧序列）。
    ///
    /// 可多次调用：每次调用都整体替换对应序列。
    pub fn load_dictionary_data(
        &self,
        payload: &Value,
        format: Format,
        serialization: Serialization,
    ) -> LoadResult<()> {
        let Value::Object(map) = payload else {
            return Err(LoadError::NotAnObject {
                found: json_type_name(payload),
            });
        };
        if let Some(characters) = map.get("characters") {
            self.load_characters(characters, format, serialization)?;
        }
        if let Some(words) = map.get("words") {
            self.load_words(words, format, serialization)?;
        }
        Ok(())
    }

    /// 整体替换字符序列。任何条目不合法则整次失败，旧序列不动。
    pub fn load_characters(
        &self,
        data: &Value,
        format: Format,
        serialization: Serialization,
    ) -> LoadResult<()> {
        let items = materialize_items(data, serialization)?;
        let mut entries = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            entries.push(character_entry(item, format, index)?);
        }
        let table = CharacterTable::build(entries);
        let count = table.entries.len();
        *write(&self.characters) = Arc::new(table);
        tracing::debug!(count, "character list replaced");
        Ok(())
    }

    /// 整体替换词序列。产出的每个条目都带 `text` 与 `gloss`（gloss 可为空串）。
    pub fn load_words(
        &self,
        data: &Value,
        format: Format,
        serialization: Serialization,
    ) -> LoadResult<()> {
        let items = materialize_items(data, serialization)?;
        let mut entries = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            entries.push(word_entry(item, format, index)?);
        }
        let count = entries.len();
        *write(&self.words) = Arc::new(entries);
        tracing::debug!(count, "word list replaced");
        Ok(())
    }

    /// 当前字符条目数（含重复条目）。
    pub fn character_count(&self) -> usize {
        read(&self.characters).entries.len()
    }

    /// 当前词条目数。
    pub fn word_count(&self) -> usize {
        read(&self.words).len()
    }
}

impl Dictionary for KanjiDictionary {
    fn is_member(&self, ch: char) -> bool {
        read(&self.characters).index.contains(&ch)
    }

    fn lookup_word(&self, text: &str) -> Option<String> {
        read(&self.words)
            .iter()
            .find(|e| e.text == text)
            .map(|e| e.gloss.clone())
    }
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
