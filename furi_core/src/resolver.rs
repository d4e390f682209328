//! `resolver`：把 matcher 命中的段解析为注音。
//!
//! 策略（沿用源系统）：
//! - 只对**整段文本**做精确匹配；段边界由字符成员谓词决定，不受词典词边界影响
//! - 查不到不是错误：成员身份本身已足以触发注音，词级注音只是尽力而为的增强，
//!   缺失时以空注音呈现

use crate::dictionary::Dictionary;

/// 解析 `run_text` 的注音；无条目时返回空串（段仍会被注音，只是读音留空）。
///
/// 同 key 多条目的取舍由词典实现决定（先加载者胜，见 `Dictionary`）。
pub fn resolve_gloss<D>(run_text: &str, dictionary: &D) -> String
where
    D: Dictionary + ?Sized,
{
    dictionary.lookup_word(run_text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDict;

    impl Dictionary for FixedDict {
        fn is_member(&self, ch: char) -> bool {
            ch == '完' || ch == '璧'
        }

        fn lookup_word(&self, text: &str) -> Option<String> {
            match text {
                "完璧" => Some("カンペキ".to_string()),
                "空読" => Some(String::new()),
                _ => None,
            }
        }
    }

    #[test]
    fn exact_match_returns_gloss_verbatim() {
        assert_eq!(resolve_gloss("完璧", &FixedDict), "カンペキ");
    }

    #[test]
    fn entry_with_empty_gloss_is_returned_as_is() {
        assert_eq!(resolve_gloss("空読", &FixedDict), "");
    }

    #[test]
    fn miss_yields_empty_gloss_not_error() {
        assert_eq!(resolve_gloss("完", &FixedDict), "");
    }

    #[test]
    fn lookup_is_idempotent() {
        let a = resolve_gloss("完璧", &FixedDict);
        let b = resolve_gloss("完璧", &FixedDict);
        assert_eq!(a, b);
    }
}
