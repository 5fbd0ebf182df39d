// ==========================================
// CyberShield 种子数据生成器 - 配置层
// ==========================================
// 职责: 源文件位置、输出位置、可选报告位置
// 存储: JSON 文件（可选）+ 命令行覆写
// ==========================================

pub mod seed_config;

// 重导出核心配置
pub use seed_config::{SeedConfig, SourceFiles};
