// ==========================================
// CyberShield 种子数据生成器 - 导入层
// ==========================================
// 职责: Excel 导出表 → 内存数据集
// 流程: 读取 → 日期规范化 → 实体加载 → 交叉引用 → 团队合成
// ==========================================

// 模块声明
pub mod activity_loader;
pub mod city_loader;
pub mod date_parser;
pub mod error;
pub mod event_loader;
pub mod field_mapper;
pub mod file_parser;
pub mod people_loader;
pub mod report;
pub mod resolver;
pub mod seed_importer;
pub mod sheet_reader_trait;
pub mod team_builder;

// 重导出核心类型
pub use activity_loader::{ActivityLoader, LoadedActivities};
pub use city_loader::{CityCatalog, CityLoader};
pub use error::{ImportError, ImportResult};
pub use event_loader::{EventLoader, EventSource};
pub use file_parser::XlsxSheetReader;
pub use people_loader::{PeopleLoader, PeopleSource};
pub use report::{ImportReport, ReferenceKind, UnresolvedReference};
pub use resolver::CrossReferenceIndex;
pub use seed_importer::{SeedBuild, SeedImporter};
pub use team_builder::{SynthesizedTeams, TeamSynthesizer};

// 重导出 Trait 接口
pub use sheet_reader_trait::{MemorySheetReader, SheetReader, SheetRow};
