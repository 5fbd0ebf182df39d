// ==========================================
// CyberShield 种子数据生成器 - 领域模型层
// ==========================================
// 职责: 定义城市/人员/活动/议程/团队实体
// 红线: 不含文件读取逻辑,不含 SQL 生成逻辑
// ==========================================

pub mod activity;
pub mod city;
pub mod event;
pub mod person;
pub mod team;
pub mod types;

// 重导出核心类型
pub use activity::{Activity, ActivityJuryLink};
pub use city::City;
pub use event::Event;
pub use person::Person;
pub use team::{Team, TeamMemberLink};
pub use types::PersonRole;

/// 一次运行构建出的完整数据集
///
/// 构建后只读,SQL 生成结束即丢弃
#[derive(Debug, Clone, Default)]
pub struct SeedDataset {
    /// 城市表 (仅已被引用的城市, 按 id 升序)
    pub cities: Vec<City>,
    /// 人员 (id 已按 ФИО 排序分配)
    pub people: Vec<Person>,
    pub events: Vec<Event>,
    pub activities: Vec<Activity>,
    pub jury_links: Vec<ActivityJuryLink>,
    pub teams: Vec<Team>,
    pub team_members: Vec<TeamMemberLink>,
}
