//! `engine`：注音装配（Assembler）。
//!
//! 结构上对应流水线：
//! - engine（编排） -> matcher（扫描连续成员段） -> resolver（查词注音） -> 输出 `AnnotationResult`
//!
//! 不变式：
//! - 产出的段按序拼接原文部分 == 输入串（不丢字、不重复、不换序）
//! - `require_change = true` 且一个段都没找到时，返回 `None` 哨兵而非
//!   "整串 Plain" 的平凡结果——调用方据此跳过对未变内容的重建

use crate::dictionary::Dictionary;
use crate::matcher::next_run;
use crate::model::{AnnotationResult, Segment};
use crate::resolver::resolve_gloss;

/// 引擎：持有词典，驱动 matcher/resolver 装配整串输出。
///
/// `annotate` 是对词典快照的纯读取：不触碰共享可变状态，
/// 同一词典快照上可以并发注音多个输入串。
pub struct Engine<D> {
    /// 词典（成员测试 + 词级注音查询都发生在这里）
    dictionary: D,
}

impl<D> Engine<D>
where
    D: Dictionary,
{
    pub fn new(dictionary: D) -> Self {
        Self { dictionary }
    }

    /// 词典引用（宿主层偶尔需要直接做成员测试/查询）。
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// 注音整串文本。
    ///
    /// - 游标从 0 开始；每命中一段，先补发段前的 Plain 文本，再发注音段，
    ///   然后把游标与扫描起点推进到段尾
    /// - 扫描结束后，剩余尾部原样补发为 Plain
    /// - `require_change = true` 且零命中（含空输入）时返回 `None`，
    ///   此时**不返回任何部分结果**，调用方应保持原文不动
    pub fn annotate(&self, source: &str, require_change: bool) -> Option<AnnotationResult> {
        let mut segments: Vec<Segment> = Vec::new();
        let mut cursor: usize = 0; // 字符偏移
        let mut any_match = false;

        while let Some(run) = next_run(source, |ch| self.dictionary.is_member(ch), cursor) {
            if run.start > cursor {
                segments.push(Segment::Plain(char_range(source, cursor, run.start)));
            }
            let end = run.end();
            let gloss = resolve_gloss(&run.text, &self.dictionary);
            segments.push(Segment::Annotated {
                base: run.text,
                gloss,
            });
            cursor = end;
            any_match = true;
        }

        if require_change && !any_match {
            return None;
        }

        let total = source.chars().count();
        if cursor < total {
            segments.push(Segment::Plain(char_range(source, cursor, total)));
        }

        Some(AnnotationResult {
            segments,
            changed: any_match,
        })
    }
}

/// 取 `[start, end)` 的子串（字符单位；matcher 的偏移都按字符计）。
fn char_range(source: &str, start: usize, end: usize) -> String {
    source.chars().skip(start).take(end - start).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试用内存词典：字符表 {完, 璧}，词表 {完璧 -> カンペキ}。
    struct TestDict;

    impl Dictionary for TestDict {
        fn is_member(&self, ch: char) -> bool {
            ch == '完' || ch == '璧'
        }

        fn lookup_word(&self, text: &str) -> Option<String> {
            (text == "完璧").then(|| "カンペキ".to_string())
        }
    }

    fn engine() -> Engine<TestDict> {
        Engine::new(TestDict)
    }

    #[test]
    fn whole_input_is_one_annotated_segment() {
        let result = engine().annotate("完璧", false).unwrap();
        assert!(result.changed);
        assert_eq!(
            result.segments,
            vec![Segment::Annotated {
                base: "完璧".to_string(),
                gloss: "カンペキ".to_string(),
            }]
        );
    }

    #[test]
    fn plain_text_surrounds_annotated_run() {
        let result = engine().annotate("私は完璧です", false).unwrap();
        assert_eq!(
            result.segments,
            vec![
                Segment::Plain("私は".to_string()),
                Segment::Annotated {
                    base: "完璧".to_string(),
                    gloss: "カンペキ".to_string(),
                },
                Segment::Plain("です".to_string()),
            ]
        );
        assert!(result.changed);
    }

    #[test]
    fn no_member_input_honors_require_change() {
        assert_eq!(engine().annotate("犬", true), None);

        let result = engine().annotate("犬", false).unwrap();
        assert_eq!(result.segments, vec![Segment::Plain("犬".to_string())]);
        assert!(!result.changed);
    }

    #[test]
    fn single_member_char_gets_empty_gloss() {
        // "完" 单字在字符表但词表无条目：仍注音，读音留空
        let result = engine().annotate("完", false).unwrap();
        assert_eq!(
            result.segments,
            vec![Segment::Annotated {
                base: "完".to_string(),
                gloss: String::new(),
            }]
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(engine().annotate("", true), None);

        let result = engine().annotate("", false).unwrap();
        assert!(result.segments.is_empty());
        assert!(!result.changed);
    }

    #[test]
    fn segments_reconstruct_source_exactly() {
        let inputs = ["私は完璧です", "完璧", "完あ璧い完璧", "犬", "", "ですか完"];
        for src in inputs {
            let result = engine().annotate(src, false).unwrap();
            assert_eq!(result.base_text(), src, "coverage broken for {src:?}");
        }
    }

    #[test]
    fn successive_segments_are_contiguous() {
        let result = engine().annotate("完あ璧い完璧x", false).unwrap();
        // 相邻段在原文上首尾相接：逐段累计长度应单调推进且无空段
        let mut covered = 0usize;
        for seg in &result.segments {
            let len = seg.base_text().chars().count();
            assert!(len >= 1);
            covered += len;
        }
        assert_eq!(covered, "完あ璧い完璧x".chars().count());
    }

    #[test]
    fn annotate_never_fails_with_empty_dictionary() {
        struct EmptyDict;
        impl Dictionary for EmptyDict {
            fn is_member(&self, _ch: char) -> bool {
                false
            }
            fn lookup_word(&self, _text: &str) -> Option<String> {
                None
            }
        }
        let engine = Engine::new(EmptyDict);
        let result = engine.annotate("完璧です", false).unwrap();
        assert_eq!(result.segments, vec![Segment::Plain("完璧です".to_string())]);
        assert!(!result.changed);
    }
}
