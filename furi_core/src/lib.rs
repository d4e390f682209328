//! `furi_core`：纯逻辑层（std-only），不做任何 I/O。
//!
//! 设计目标：
//! - **核心可复用**：CLI/浏览器宿主/服务端都能复用同一套注音逻辑
//! - **分层清晰**：engine -> matcher（连续段扫描） -> resolver（查词注音） -> 输出（`AnnotationResult`）
//! - **词典外置**：core 只依赖 `Dictionary` trait，不关心词典来自文件/内存/网络
pub mod dictionary;
pub mod engine;
pub mod matcher;
pub mod model;
pub mod resolver;
