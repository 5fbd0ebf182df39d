// ==========================================
// CyberShield 种子数据生成器 - 领域类型定义
// ==========================================

use std::fmt;

// ==========================================
// 人员角色 (Person Role)
// ==========================================
// 声明顺序即导入顺序: 先导入的来源对同一邮箱拥有优先权
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonRole {
    Organizer,   // 组织者
    Jury,        // 评委
    Moderator,   // 主持人
    Participant, // 参赛者
}

impl PersonRole {
    /// 按导入顺序排列的全部角色
    pub const IMPORT_ORDER: [PersonRole; 4] = [
        PersonRole::Organizer,
        PersonRole::Jury,
        PersonRole::Moderator,
        PersonRole::Participant,
    ];

    /// 数据库中的角色标识
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonRole::Organizer => "ORGANIZER",
            PersonRole::Jury => "JURY",
            PersonRole::Moderator => "MODERATOR",
            PersonRole::Participant => "PARTICIPANT",
        }
    }

    /// 照片目录名 (小写角色名)
    pub fn photo_dir(&self) -> &'static str {
        match self {
            PersonRole::Organizer => "organizer",
            PersonRole::Jury => "jury",
            PersonRole::Moderator => "moderator",
            PersonRole::Participant => "participant",
        }
    }
}

impl fmt::Display for PersonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
