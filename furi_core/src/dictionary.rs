/// 词典抽象：core 不关心词典来自文件/内存/网络。
///
/// 约定：
/// - `is_member` 是单字符的成员测试（字符表里有 = 可注音），作为 matcher 的默认谓词
/// - `lookup_word` 是整段文本的精确匹配查询；同 key 多条时**先加载者胜**
/// - 查不到（返回 `None`）是正常结果，不是错误
pub trait Dictionary: Send + Sync {
    /// 字符 `ch` 是否在字符表中（即是否应被注音）。
    fn is_member(&self, ch: char) -> bool;

    /// 精确查询 `text` 整体对应的注音；`Some("")` 表示有条目但注音为空，
    /// `None` 表示无条目。两者都不是错误。
    fn lookup_word(&self, text: &str) -> Option<String>;
}
