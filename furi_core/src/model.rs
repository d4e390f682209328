/// 输出单元：原文的一个连续子段。
///
/// 注意：所有 `Segment` 按序拼接其原文部分，必须**精确还原**输入串
/// （不丢字、不重复、不换序）。渲染层据此决定每段怎么展示。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// 普通文本段（原样保留，不注音）
    Plain(String),
    /// 注音段：`base` 是原文，`gloss` 是注音（可以为空串）
    Annotated {
        /// 被注音的原文（一个完整的成员字符连续段）
        base: String,
        /// 注音/读音；词典查不到时为空串，但段仍然是注音段
        gloss: String,
    },
}

impl Segment {
    /// 该段覆盖的原文。
    pub fn base_text(&self) -> &str {
        match self {
            Segment::Plain(text) => text,
            Segment::Annotated { base, .. } => base,
        }
    }
}

/// 引擎给调用方的"快照视图"：一次 `annotate` 的完整产出。
///
/// 设计目标：
/// - 渲染层只读 `AnnotationResult`，不接触词典与扫描状态
/// - 每次调用新建，不与词典共享所有权
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationResult {
    /// 按原文顺序排列的输出段
    pub segments: Vec<Segment>,
    /// 是否至少产出了一个注音段
    pub changed: bool,
}

impl AnnotationResult {
    /// 拼接所有段的原文部分（应等于输入串，见覆盖不变式）。
    pub fn base_text(&self) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            out.push_str(seg.base_text());
        }
        out
    }
}
