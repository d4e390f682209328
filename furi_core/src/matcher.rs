//! `matcher`：在原文中扫描"连续成员字符段"（run）。
//!
//! 约定：
//! - 偏移量一律按**字符**计（`char` 单位），不按字节
//! - 每次调用只返回 `from` 之后的**下一个**极大段；调用方把 `from`
//!   推进到上一段末尾之后，即可从左到右枚举所有互不重叠的段

/// 一次扫描命中的连续段。
///
/// 不变式：`text` 等于原文 `[start, start + len)` 的子串（字符单位）；
/// 段是极大的——`start - 1` 与 `start + len` 处的字符（若存在）都不满足谓词。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMatch {
    /// 段起点（含），字符偏移
    pub start: usize,
    /// 段长度（字符数，>= 1）
    pub len: usize,
    /// 段文本本身
    pub text: String,
}

impl RunMatch {
    /// 段终点（不含），即下一次扫描应从这里继续。
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// 从 `from`（字符偏移）起向前扫描，返回下一个极大连续段。
///
/// - 第一个满足 `predicate` 的字符开段；段一直延伸到第一个不满足的字符或文本末尾
/// - `[from, end)` 内没有任何字符满足谓词时返回 `None`
/// - `from` 超出文本长度、或 `source` 为空，都返回 `None`；段长度可以为 1
pub fn next_run<P>(source: &str, predicate: P, from: usize) -> Option<RunMatch>
where
    P: Fn(char) -> bool,
{
    let mut start: Option<usize> = None;
    let mut len: usize = 0;
    let mut text = String::new();

    for (pos, ch) in source.chars().enumerate().skip(from) {
        if predicate(ch) {
            if start.is_none() {
                start = Some(pos);
            }
            text.push(ch);
            len += 1;
        } else if start.is_some() {
            // 段已开且遇到非成员字符：极大段结束，提前退出
            break;
        }
    }

    start.map(|start| RunMatch { start, len, text })
}
