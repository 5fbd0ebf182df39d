// ==========================================
// CyberShield 种子数据生成器 - 核心库
// ==========================================
// 输入: 城市/组织者/评委/主持人/参赛者/议程 Excel 导出表 + 活动种子表
// 输出: 一份重建会议管理库数据的 SQL 脚本
// 执行: 单线程一次性批处理, 全量清空后重新插入
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 运行配置
pub mod config;

// 输出层 - SQL 脚本
pub mod sql;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    Activity, ActivityJuryLink, City, Event, Person, PersonRole, SeedDataset, Team,
    TeamMemberLink,
};

// 导入
pub use importer::{ImportError, ImportReport, ImportResult, SeedImporter};

// 配置
pub use config::SeedConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "CyberShield 种子数据生成器";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
