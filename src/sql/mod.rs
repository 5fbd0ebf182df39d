// ==========================================
// CyberShield 种子数据生成器 - SQL 输出层
// ==========================================
// 职责: 数据集 → 有序 INSERT 脚本 → 原子写入文件
// ==========================================

pub mod emitter;
pub mod literal;
pub mod writer;

pub use emitter::SqlEmitter;
pub use writer::ScriptWriter;
